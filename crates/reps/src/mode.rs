//! Verbosity levels shared by every rep.

use crate::error::RepError;
use std::fmt;
use std::str::FromStr;

/// How much structure a representation reveals.
///
/// Information content is monotonic: whatever `Tiny` shows, `Short` shows
/// too, and whatever `Short` shows, `Long` shows too.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Mode {
    /// No mode requested. Record-style reps treat it as [`Mode::Short`].
    #[default]
    Unset,
    Tiny,
    Short,
    Long,
}

impl Mode {
    #[inline]
    pub const fn is_tiny(self) -> bool {
        matches!(self, Self::Tiny)
    }

    #[inline]
    pub const fn is_long(self) -> bool {
        matches!(self, Self::Long)
    }

    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unset => "default",
            Self::Tiny => "tiny",
            Self::Short => "short",
            Self::Long => "long",
        }
    }
}

impl FromStr for Mode {
    type Err = RepError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "default" | "unset" => Ok(Self::Unset),
            "tiny" => Ok(Self::Tiny),
            "short" => Ok(Self::Short),
            "long" => Ok(Self::Long),
            _ => Err(RepError::UnknownMode(name.to_owned())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
