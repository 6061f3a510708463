//! Observable search state.
//!
//! [`SearchSnapshot`] is what the presentation layer sees. The runtime
//! publishes a fresh snapshot after every transition that changes results,
//! loading status, or the error message, and before any side effect of that
//! transition is executed.

use super::modes::Phase;
use super::state::SessionId;
use crate::domain::SearchRecord;

/// Immutable projection of the active session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchSnapshot {
    /// Session this snapshot was taken from.
    pub session: SessionId,

    /// Effective term of the session (empty for the initial state).
    pub term: String,

    /// All records accumulated for the term, in arrival order.
    pub results: Vec<SearchRecord>,

    /// True iff a fetch is in flight for the session.
    pub is_loading: bool,

    /// Message of the most recent failed fetch, if it has not been cleared.
    pub error: Option<String>,

    /// Whether another page may be requested.
    pub has_more: bool,

    /// Number of records fetched so far; equals `results.len()`.
    pub offset: usize,

    /// Coordinator phase at the time of the snapshot.
    pub phase: Phase,
}

impl SearchSnapshot {
    /// Number of accumulated records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether no records have been accumulated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
