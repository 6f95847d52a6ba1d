use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Errors surfaced by rep predicates and mode parsing.
///
/// None of these abort a render: predicate errors are logged and treated as
/// a non-match by the selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepError {
    /// A rep's predicate could not decide on a grip.
    PredicateFailed { rep: &'static str, reason: String },
    /// A grip claims a shape but lacks the fields that shape requires.
    MalformedGrip(String),
    /// A mode name that is not one of the known verbosity levels.
    UnknownMode(String),
}

impl Display for RepError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::PredicateFailed { rep, reason } => {
                write!(f, "predicate of {rep} failed: {reason}")
            }
            Self::MalformedGrip(message) => write!(f, "malformed grip: {message}"),
            Self::UnknownMode(name) => write!(f, "unknown mode: {name}"),
        }
    }
}

impl Error for RepError {}
