//! Stable reference tokens for debuggee entities.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Actor id of a grip, e.g. `server1.conn1.child1/obj54`.
///
/// Two grips naming the same actor refer to the same debuggee entity, which is
/// the only identity a grip has.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(pub String);

impl ActorId {
    /// Create an actor id from any string-like value.
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ActorId {
    #[inline]
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}
