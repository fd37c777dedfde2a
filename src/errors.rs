use thiserror::Error;

use crate::validation::NameError;

/// Errors that can abort a game session.
///
/// In-game setbacks (no gold, wrong item, already dug) are ordinary outcomes and
/// never surface here; this type only covers faults of the surrounding plumbing.
#[derive(Debug, Error)]
pub enum HuntError {
    /// Wrapper around IO errors from the input source.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended before the hunter was set up.
    #[error("input closed during {0}")]
    InputClosed(&'static str),

    /// A hunter name supplied up front (CLI or config) was rejected.
    #[error("invalid hunter name: {0}")]
    InvalidName(#[from] NameError),
}

/// Returned when a difficulty mode name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mode '{0}' (expected easy, normal, hard, samurai or test)")]
pub struct ParseModeError(pub String);

/// Returned when free text does not name a shop item.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown item '{0}'")]
pub struct ParseItemError(pub String);

pub type Result<T> = std::result::Result<T, HuntError>;
