//! Domain layer for tunesearch.
//!
//! Core types shared by every other layer, independent of the HTTP client,
//! the tokio runtime, and the terminal frontend.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`record`]: The opaque search result record

pub mod error;
pub mod record;

pub use error::{FetchError, Result, TunesearchError};
pub use record::SearchRecord;
