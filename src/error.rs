use std::io;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Crate-wide error type.
///
/// Every failure surfaces immediately to the caller; there is no retry logic
/// and no partial-result salvage anywhere in the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A caller-supplied value violates the operation's contract
    /// (identifier length, window size, unsupported window name, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The source directory does not exist or cannot be listed.
    #[error("not found: {0}")]
    NotFound(String),

    /// A filename or date/time string does not match its fixed-width encoding.
    #[error("parse error: {0}")]
    Parse(String),

    /// Underlying file I/O failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    pub(crate) fn parse(msg: impl Into<String>) -> Self {
        Error::Parse(msg.into())
    }
}
