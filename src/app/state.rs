//! Coordinator state: the active search session and its phase.
//!
//! [`AppState`] is the single owner of everything the coordinator knows. It
//! holds exactly one [`SearchSession`] at a time. A new effective term
//! replaces the session wholesale, and with it the relevance of any fetch
//! still in flight.
//!
//! # Invariants
//!
//! - `session.offset == session.results.len()` after every transition
//! - `phase == Phase::Fetching` iff one request is outstanding for `session`
//! - session ids are strictly increasing; a completion tagged with any id
//!   other than `session.id` is stale
//!
//! # Example
//!
//! ```
//! use tunesearch::app::{AppState, Phase};
//!
//! let mut state = AppState::new(10, 3);
//! state.start_session("blur");
//! let request = state.begin_fetch()?.expect("idle session accepts a trigger");
//! assert_eq!(request.offset, 0);
//! assert_eq!(state.phase, Phase::Fetching);
//! # Ok::<(), tunesearch::TunesearchError>(())
//! ```

use super::accumulator::{accumulate, has_more_after};
use super::actions::PageRequest;
use super::modes::{FetchStatus, Phase};
use super::snapshot::SearchSnapshot;
use crate::domain::error::Result;
use crate::domain::SearchRecord;
use crate::Config;
use std::fmt;

/// Identity of a search session.
///
/// Every issued fetch carries the id of the session that issued it, and the
/// coordinator compares ids on completion before applying any effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl SessionId {
    /// Wraps a raw id.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Pagination and result state for one effective term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSession {
    /// Session identity.
    pub id: SessionId,
    /// Effective term; empty for an empty session.
    pub term: String,
    /// Records accumulated so far.
    pub offset: usize,
    /// Page size, fixed for the lifetime of the session.
    pub page_size: usize,
    /// Whether another page may exist.
    pub has_more: bool,
    /// Accumulated records in arrival order.
    pub results: Vec<SearchRecord>,
}

impl SearchSession {
    fn new(id: SessionId, term: String, page_size: usize) -> Self {
        let has_more = !term.is_empty();
        Self {
            id,
            term,
            offset: 0,
            page_size,
            has_more,
            results: Vec::new(),
        }
    }

    /// Builds the request for the next page of this session.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` for an empty session or a zero page size.
    pub fn next_page_request(&self) -> Result<PageRequest> {
        PageRequest::new(self.id, self.term.clone(), self.page_size, self.offset)
    }
}

/// Central coordinator state container.
///
/// Mutated only by [`crate::app::handle_event`] (and by tests). The runtime
/// publishes [`AppState::snapshot`] after each change.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Active session.
    pub session: SearchSession,

    /// Phase of the active session.
    pub phase: Phase,

    /// Message of the most recent failed fetch.
    ///
    /// Cleared by a successful page and by any term change.
    pub error: Option<String>,

    /// Page size given to every new session.
    pub page_size: usize,

    /// How close to the end of the results a rendered index must be to
    /// request the next page.
    pub lookahead: usize,

    /// Last session id handed out.
    last_session: u64,
}

impl AppState {
    /// Creates an empty coordinator state.
    ///
    /// The initial session has id `#0`, an empty term, and phase
    /// [`Phase::Empty`].
    #[must_use]
    pub fn new(page_size: usize, lookahead: usize) -> Self {
        Self {
            session: SearchSession::new(SessionId::new(0), String::new(), page_size),
            phase: Phase::Empty,
            error: None,
            page_size,
            lookahead,
            last_session: 0,
        }
    }

    /// Creates an empty coordinator state sized from configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.page_size, config.lookahead)
    }

    /// Replaces the active session with a fresh one for `term`.
    ///
    /// Results, offset, and error are reset. The phase becomes
    /// [`Phase::Idle`] for a non-empty term and [`Phase::Empty`] otherwise;
    /// no fetch is started here.
    pub fn start_session(&mut self, term: &str) -> SessionId {
        let id = self.next_session_id();
        self.last_session = id.get();

        tracing::debug!(
            session = %id,
            previous = %self.session.id,
            term_len = term.len(),
            "starting search session"
        );

        self.session = SearchSession::new(id, term.to_string(), self.page_size);
        self.error = None;
        self.phase = if term.is_empty() { Phase::Empty } else { Phase::Idle };
        id
    }

    /// Id the next call to [`AppState::start_session`] will assign.
    #[must_use]
    pub const fn next_session_id(&self) -> SessionId {
        SessionId::new(self.last_session + 1)
    }

    /// Whether `id` names the active session.
    #[must_use]
    pub fn is_active(&self, id: SessionId) -> bool {
        self.session.id == id
    }

    /// Whether a fetch is in flight for the active session.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase.fetch_status() == FetchStatus::InFlight
    }

    /// Whether rendering `index` is close enough to the end of the results
    /// to warrant another page.
    #[must_use]
    pub fn needs_next_page(&self, index: usize) -> bool {
        index.saturating_add(self.lookahead) >= self.session.results.len()
    }

    /// Starts a fetch if the session accepts one.
    ///
    /// Returns `Ok(None)` without touching state when the phase is anything
    /// but [`Phase::Idle`] or the session has no more results. Otherwise the
    /// phase becomes [`Phase::Fetching`] and the request is returned.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` if an idle session carries an empty term or
    /// a zero page size, which the state machine never produces.
    pub fn begin_fetch(&mut self) -> Result<Option<PageRequest>> {
        if !self.phase.accepts_trigger() || !self.session.has_more {
            tracing::trace!(phase = ?self.phase, has_more = self.session.has_more, "fetch trigger dropped");
            return Ok(None);
        }

        debug_assert!(
            !self.session.term.is_empty() && self.session.page_size > 0,
            "idle session must have a term and a positive page size"
        );
        let request = self.session.next_page_request()?;
        self.phase = Phase::Fetching;

        tracing::debug!(
            session = %request.session,
            offset = request.offset,
            page_size = request.page_size,
            "fetch started"
        );
        Ok(Some(request))
    }

    /// Folds a successfully fetched page into the active session.
    pub fn complete_page(&mut self, records: Vec<SearchRecord>) {
        let page_len = records.len();
        let results = std::mem::take(&mut self.session.results);
        self.session.results = accumulate(results, records);
        self.session.offset += page_len;
        self.session.has_more = has_more_after(page_len, self.session.page_size);
        self.error = None;
        self.phase = if self.session.has_more { Phase::Idle } else { Phase::Exhausted };

        tracing::debug!(
            session = %self.session.id,
            page_len = page_len,
            offset = self.session.offset,
            has_more = self.session.has_more,
            "page folded into session"
        );
    }

    /// Records a failed fetch for the active session.
    pub fn fail_page(&mut self, message: String) {
        tracing::debug!(session = %self.session.id, error = %message, "fetch failed");
        self.error = Some(message);
        self.session.has_more = false;
        self.phase = Phase::Errored;
    }

    /// Projects the current state into an observable snapshot.
    #[must_use]
    pub fn snapshot(&self) -> SearchSnapshot {
        SearchSnapshot {
            session: self.session.id,
            term: self.session.term.clone(),
            results: self.session.results.clone(),
            is_loading: self.is_loading(),
            error: self.error.clone(),
            has_more: self.session.has_more,
            offset: self.session.offset,
            phase: self.phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn records(n: usize) -> Vec<SearchRecord> {
        (0..n).map(|i| SearchRecord::new(format!("t{i}"), "a")).collect()
    }

    #[test]
    fn new_state_is_empty() {
        let state = AppState::new(10, 3);
        assert_eq!(state.phase, Phase::Empty);
        assert!(!state.session.has_more);
        assert!(state.session.results.is_empty());
    }

    #[test]
    fn session_ids_increase() {
        let mut state = AppState::new(10, 3);
        let a = state.start_session("a");
        let b = state.start_session("b");
        assert!(b > a);
        assert!(state.is_active(b));
        assert!(!state.is_active(a));
    }

    #[test]
    fn empty_session_never_fetches() {
        let mut state = AppState::new(10, 3);
        state.start_session("");
        assert_eq!(state.begin_fetch().unwrap(), None);
        assert_eq!(state.phase, Phase::Empty);
    }

    #[test]
    fn offset_tracks_results() {
        let mut state = AppState::new(5, 3);
        state.start_session("x");
        state.begin_fetch().unwrap();
        state.complete_page(records(5));
        state.begin_fetch().unwrap();
        state.complete_page(records(2));

        assert_eq!(state.session.offset, state.session.results.len());
        assert_eq!(state.session.offset, 7);
        assert_eq!(state.phase, Phase::Exhausted);
    }

    #[test]
    fn failure_stops_pagination() {
        let mut state = AppState::new(5, 3);
        state.start_session("x");
        state.begin_fetch().unwrap();
        state.fail_page("boom".to_string());

        assert_eq!(state.phase, Phase::Errored);
        assert!(!state.session.has_more);
        assert_eq!(state.begin_fetch().unwrap(), None);
        assert_eq!(state.snapshot().error.as_deref(), Some("boom"));
    }

    #[rstest]
    #[case(0, 0, true)]
    #[case(6, 10, false)]
    #[case(7, 10, true)]
    #[case(9, 10, true)]
    #[case(12, 10, true)]
    fn lookahead_window(#[case] index: usize, #[case] known: usize, #[case] expected: bool) {
        let mut state = AppState::new(10, 3);
        state.start_session("x");
        state.session.results = records(known);
        state.session.offset = known;
        assert_eq!(state.needs_next_page(index), expected);
    }
}
