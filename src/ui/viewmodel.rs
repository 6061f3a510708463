//! View model types representing renderable search state.
//!
//! View models are computed from a [`SearchSnapshot`] and consumed by the
//! renderer. They hold only display-ready strings: fallbacks for missing
//! fields are applied and dates are formatted here, so the components never
//! look at raw records.
//!
//! # Example
//!
//! ```
//! use tunesearch::app::SearchSnapshot;
//! use tunesearch::ui::ResultsViewModel;
//! use tunesearch::SearchRecord;
//!
//! let snapshot = SearchSnapshot {
//!     term: "blur".to_string(),
//!     results: vec![SearchRecord::new("Song 2", "Blur").with_release_date("1997-04-07T07:00:00Z")],
//!     offset: 1,
//!     ..Default::default()
//! };
//! let vm = ResultsViewModel::from_snapshot(&snapshot, 0, 6);
//! assert_eq!(vm.rows[0].release_date, "Apr 7, 1997");
//! ```

use crate::app::SearchSnapshot;
use crate::domain::SearchRecord;

/// Fallback for a record without a title.
pub const UNKNOWN_TITLE: &str = "Unknown";
/// Fallback for a record without an artist.
pub const UNKNOWN_ARTIST: &str = "Unknown artist";
/// Fallback for a missing or unparsable release date.
pub const UNKNOWN_DATE: &str = "Unknown date";

/// Characters of description kept, roughly two terminal lines.
const DESCRIPTION_CHARS: usize = 160;

/// Complete view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsViewModel {
    /// Title bar.
    pub header: HeaderInfo,

    /// Error banner, shown above the results while an error is retained.
    pub banner: Option<ErrorBanner>,

    /// Visible rows, in result order.
    pub rows: Vec<TrackRow>,

    /// Shown instead of rows when there is nothing to list.
    pub empty_state: Option<EmptyState>,

    /// Status line under the results.
    pub footer: FooterInfo,
}

/// One result, ready to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRow {
    /// Position in the full result list.
    pub index: usize,
    /// Track title, or [`UNKNOWN_TITLE`].
    pub title: String,
    /// Artist name, or [`UNKNOWN_ARTIST`].
    pub artist: String,
    /// Medium-style date such as `Jul 1, 2025`, or [`UNKNOWN_DATE`].
    pub release_date: String,
    /// Truncated long description, if the record has one.
    pub description: Option<String>,
}

/// Title bar contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Application name shown on the left.
    pub title: String,
    /// Effective term the results belong to.
    pub term: String,
}

/// Error shown above the results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBanner {
    /// Failure message of the last fetch.
    pub message: String,
}

/// Placeholder for a frame with no rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Main message.
    pub message: String,
    /// Hint under the message.
    pub subtitle: String,
}

/// Status line under the results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Loading, count, or end-of-results status.
    pub status: String,
    /// Whether `status` describes a fetch in flight.
    pub is_loading: bool,
    /// Command hints.
    pub keybindings: String,
}

impl ResultsViewModel {
    /// Builds the view model for rows `first..first + visible` of `snapshot`.
    ///
    /// The window is clamped to the known results.
    #[must_use]
    pub fn from_snapshot(snapshot: &SearchSnapshot, first: usize, visible: usize) -> Self {
        let rows: Vec<TrackRow> = snapshot
            .results
            .iter()
            .enumerate()
            .skip(first)
            .take(visible)
            .map(|(index, record)| TrackRow::from_record(index, record))
            .collect();

        let empty_state = (snapshot.is_empty() && !snapshot.is_loading && snapshot.error.is_none())
            .then(|| empty_state_for(&snapshot.term));

        Self {
            header: HeaderInfo {
                title: "tunesearch".to_string(),
                term: snapshot.term.clone(),
            },
            banner: snapshot.error.as_ref().map(|message| ErrorBanner {
                message: message.clone(),
            }),
            rows,
            empty_state,
            footer: footer_for(snapshot),
        }
    }

    /// Index of the last row in this frame.
    #[must_use]
    pub fn last_index(&self) -> Option<usize> {
        self.rows.last().map(|row| row.index)
    }
}

impl TrackRow {
    /// Applies display fallbacks to one record.
    #[must_use]
    pub fn from_record(index: usize, record: &SearchRecord) -> Self {
        let release_date = record
            .parsed_release_date()
            .map_or_else(|| UNKNOWN_DATE.to_string(), |date| date.format("%b %-d, %Y").to_string());

        Self {
            index,
            title: record.title.clone().unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
            artist: record.subtitle.clone().unwrap_or_else(|| UNKNOWN_ARTIST.to_string()),
            release_date,
            description: record
                .long_description
                .as_deref()
                .map(|text| truncate_chars(text, DESCRIPTION_CHARS)),
        }
    }
}

fn empty_state_for(term: &str) -> EmptyState {
    if term.is_empty() {
        EmptyState {
            message: "Search music".to_string(),
            subtitle: "Type a term and press Enter".to_string(),
        }
    } else {
        EmptyState {
            message: "No results".to_string(),
            subtitle: format!("Nothing matched \"{term}\""),
        }
    }
}

fn footer_for(snapshot: &SearchSnapshot) -> FooterInfo {
    let count = snapshot.len();
    let status = if snapshot.is_loading {
        if count == 0 {
            "Searching…".to_string()
        } else {
            format!("{count} results, loading more…")
        }
    } else if count > 0 && !snapshot.has_more {
        format!("{count} results, end of list")
    } else {
        format!("{count} results")
    };

    FooterInfo {
        status,
        is_loading: snapshot.is_loading,
        keybindings: ":more scroll | :q quit".to_string(),
    }
}

/// Cuts `text` to at most `max` characters, marking the cut with an ellipsis.
fn truncate_chars(text: &str, max: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max {
        return collapsed;
    }
    let mut cut: String = collapsed.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
