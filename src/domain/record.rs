//! Search result record.
//!
//! A [`SearchRecord`] is one item returned by the remote search service. The
//! upstream payload is not schema-guaranteed, so every field is optional and
//! the coordinator passes records through without interpreting them.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One result item as returned by the search service.
///
/// Field names on the wire follow the iTunes Search API (`trackName`,
/// `artistName`, `releaseDate`, `artworkUrl100`, `longDescription`); unknown
/// keys are ignored and missing keys decode as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRecord {
    /// Primary line, typically the track name.
    #[serde(default, rename = "trackName")]
    pub title: Option<String>,

    /// Secondary line, typically the artist name.
    #[serde(default, rename = "artistName")]
    pub subtitle: Option<String>,

    /// Release date as an ISO-8601 string.
    #[serde(default, rename = "releaseDate")]
    pub release_date: Option<String>,

    /// URL of a 100x100 artwork thumbnail.
    #[serde(default, rename = "artworkUrl100")]
    pub artwork_url: Option<String>,

    /// Long free-text description, present for some media kinds.
    #[serde(default, rename = "longDescription")]
    pub long_description: Option<String>,
}

impl SearchRecord {
    /// Creates a record with a title and subtitle and no other fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use tunesearch::SearchRecord;
    ///
    /// let record = SearchRecord::new("Song 2", "Blur");
    /// assert_eq!(record.title.as_deref(), Some("Song 2"));
    /// assert!(record.release_date.is_none());
    /// ```
    #[must_use]
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            subtitle: Some(subtitle.into()),
            ..Self::default()
        }
    }

    /// Sets the release date string.
    #[must_use]
    pub fn with_release_date(mut self, release_date: impl Into<String>) -> Self {
        self.release_date = Some(release_date.into());
        self
    }

    /// Parses the release date, if present and well-formed.
    ///
    /// The service sends RFC 3339 timestamps such as `2025-07-01T07:00:00Z`.
    /// Anything else yields `None`.
    #[must_use]
    pub fn parsed_release_date(&self) -> Option<DateTime<FixedOffset>> {
        self.release_date
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw.trim()).ok())
    }
}
