//! iTunes Search API client.
//!
//! Issues `GET {base_url}?term=..&country=..&media=..&limit=..&offset=..`
//! and decodes the `results` array of the response envelope.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::models::SearchResponse;
use super::SearchClient;
use crate::domain::error::{Result, TunesearchError};
use crate::domain::{FetchError, SearchRecord};
use crate::Config;

/// Default search endpoint.
pub const DEFAULT_BASE_URL: &str = "https://itunes.apple.com/search";

/// [`SearchClient`] backed by the public iTunes Search API.
#[derive(Debug, Clone)]
pub struct ItunesClient {
    client: Client,
    base_url: String,
    country: String,
    media: String,
}

impl ItunesClient {
    /// Builds a client from configuration, applying the request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`TunesearchError::Config`] if the HTTP client cannot be
    /// constructed (for example, when the TLS backend fails to initialize).
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|err| TunesearchError::Config(format!("failed to build HTTP client: {err}")))?;

        Ok(Self::from_parts(
            client,
            config.base_url.clone(),
            config.country.clone(),
            config.media.clone(),
        ))
    }

    /// Assembles a client from an existing `reqwest::Client`.
    #[must_use]
    pub fn from_parts(
        client: Client,
        base_url: impl Into<String>,
        country: impl Into<String>,
        media: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            country: country.into(),
            media: media.into(),
        }
    }

    /// Query parameters for one page, in the order they are sent.
    #[must_use]
    pub fn query_params(&self, term: &str, page_size: usize, offset: usize) -> Vec<(&'static str, String)> {
        vec![
            ("term", term.to_string()),
            ("country", self.country.clone()),
            ("media", self.media.clone()),
            ("limit", page_size.to_string()),
            ("offset", offset.to_string()),
        ]
    }
}

/// Decodes a response body into a page of records.
///
/// # Errors
///
/// Returns [`FetchError::Decode`] when the body is not a JSON search envelope.
pub fn decode_page(body: &[u8]) -> std::result::Result<Vec<SearchRecord>, FetchError> {
    let response: SearchResponse =
        serde_json::from_slice(body).map_err(|err| FetchError::Decode(err.to_string()))?;

    if response.result_count != response.results.len() {
        tracing::debug!(
            claimed = response.result_count,
            actual = response.results.len(),
            "resultCount disagrees with payload"
        );
    }
    Ok(response.results)
}

#[async_trait]
impl SearchClient for ItunesClient {
    async fn fetch_page(
        &self,
        term: &str,
        page_size: usize,
        offset: usize,
    ) -> std::result::Result<Vec<SearchRecord>, FetchError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&self.query_params(term, page_size, offset))
            .send()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "search request rejected");
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;

        let records = decode_page(&body)?;
        tracing::debug!(records = records.len(), bytes = body.len(), "search page received");
        Ok(records)
    }
}
