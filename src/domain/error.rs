//! Error types for tunesearch.
//!
//! This module defines the crate-wide error type [`TunesearchError`], the
//! collaborator-level [`FetchError`] reported by search clients, and a
//! [`Result`] alias used throughout the crate. All errors derive their
//! `Error` implementations through `thiserror`.

use thiserror::Error;

/// The main error type for tunesearch operations.
///
/// Fetch failures are not part of it: the coordinator folds every
/// [`FetchError`] into observable state, so they never reach callers.
///
/// # Examples
///
/// ```
/// use tunesearch::TunesearchError;
///
/// fn validate(page_size: usize) -> Result<(), TunesearchError> {
///     if page_size == 0 {
///         return Err(TunesearchError::Config("page_size must be positive".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(validate(0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum TunesearchError {
    /// A page request was built from an empty term or a zero page size.
    ///
    /// The coordinator never produces such requests; seeing this variant
    /// indicates a programming error rather than a user-facing condition.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Filesystem or terminal I/O failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is missing, malformed, or out of range.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The coordinator task stopped or could not be reached.
    #[error("Runtime error: {0}")]
    Runtime(String),
}

/// Failure reported by a [`crate::client::SearchClient`].
///
/// The coordinator treats every variant identically: the display message is
/// surfaced through [`crate::app::SearchSnapshot::error`] and pagination
/// stops for the current term.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, connect, timeout, interrupted body).
    #[error("Network error: {0}")]
    Network(String),

    /// The response body was not a valid search payload.
    #[error("Could not decode search results: {0}")]
    Decode(String),

    /// The server answered with a non-success status code.
    #[error("Search service responded with HTTP {status}")]
    HttpStatus {
        /// Numeric HTTP status code.
        status: u16,
    },
}

/// A specialized `Result` type for tunesearch operations.
pub type Result<T> = std::result::Result<T, TunesearchError>;
