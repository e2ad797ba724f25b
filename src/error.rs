//! CLI Error Types
//!
//! Errors from the library crates are raised into these kinds, which decide
//! the message class and the exit code.

use derive_more::{Display, Error};
use std::path::PathBuf;

/// A CLI error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Only `.txt` listings are accepted.
    #[display("unsupported file type, expected a .txt listing: {}", _0.display())]
    UnsupportedUpload(#[error(not(source))] PathBuf),
    /// The listing could not be read.
    #[display("{_0}")]
    Input(#[error(not(source))] String),
    /// A configuration source is missing, malformed or out of range.
    #[display("invalid configuration: {_0}")]
    Config(#[error(not(source))] String),
    /// The viewer could not be generated.
    #[display("unable to generate viewer: {_0}")]
    Render(#[error(not(source))] String),
    /// The viewer could not be written; nothing was left behind.
    #[display("unable to write viewer: {}", _0.display())]
    Write(#[error(not(source))] PathBuf),
    /// Results could not be printed.
    #[display("unable to print output")]
    Output,
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Write(_))
    }

    /// Returns `true` when the request itself was wrong, rather than the tool.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::UnsupportedUpload(_) | Self::Input(_) | Self::Config(_))
    }

    /// Process exit code: `2` for user errors, `1` otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.is_user_error() { 2 } else { 1 }
    }
}
