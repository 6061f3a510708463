//! Remote search clients.
//!
//! The coordinator only knows the [`SearchClient`] trait. [`ItunesClient`]
//! is the production implementation; tests substitute scripted clients.

pub mod itunes;
pub mod models;

pub use itunes::ItunesClient;
pub use models::SearchResponse;

use crate::domain::{FetchError, SearchRecord};
use async_trait::async_trait;

/// A paginated remote search backend.
///
/// Implementations must be cheap to share across tasks: the runtime holds
/// one behind an `Arc` and calls it from every spawned fetch.
#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Fetches up to `page_size` records for `term`, skipping the first
    /// `offset`.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] describing transport, status, or decoding
    /// failures. The coordinator surfaces only its display message.
    async fn fetch_page(
        &self,
        term: &str,
        page_size: usize,
        offset: usize,
    ) -> Result<Vec<SearchRecord>, FetchError>;
}
