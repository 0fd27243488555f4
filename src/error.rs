//! Error type shared by every entry point of the crate.

use thiserror::Error;

/// Failures reported before any search work is done.
///
/// Every variant is a contract violation by the caller: the optimizer
/// performs no I/O, so nothing here is transient or worth retrying.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeriateError {
    /// Malformed matrix, ordering or configuration.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl SeriateError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        SeriateError::InvalidInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, SeriateError>;
