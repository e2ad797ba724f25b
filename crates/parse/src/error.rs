//! Parse Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.
//!
//! Malformed lines are deliberately absent: a line that does not match the
//! listing grammar is skipped, never reported.

use derive_more::{Display, Error};
use std::path::PathBuf;

/// A parse error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for parse operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The listing could not be opened or read.
    #[display("unable to read listing: {}", _0.display())]
    Unreadable(#[error(not(source))] PathBuf),
    /// The listing was read, but is not valid UTF-8 text.
    #[display("listing is not valid UTF-8 text: {}", _0.display())]
    InvalidEncoding(#[error(not(source))] PathBuf),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // Resubmitting the same file won't change its contents.
        false
    }
}
