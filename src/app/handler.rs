//! Event handling and state transition logic.
//!
//! This module implements the query coordinator's transition function. It
//! is pure: [`handle_event`] mutates an [`AppState`] and returns the actions
//! the runtime must perform, but never performs I/O itself.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow:
//! 1. Events arrive on the runtime's single event queue (debounced terms,
//!    lookahead notifications, fetch completions)
//! 2. [`handle_event`] pattern-matches the event
//! 3. State mutations occur via `AppState` methods
//! 4. The runtime publishes a snapshot if anything observable changed, then
//!    executes the returned actions
//!
//! # Example
//!
//! ```
//! use tunesearch::app::{handle_event, Action, AppState, Event};
//!
//! let mut state = AppState::new(10, 3);
//! let (changed, actions) = handle_event(&mut state, Event::TermChanged("blur".into()))?;
//! assert!(changed);
//! assert!(matches!(actions.as_slice(), [Action::FetchPage(_)]));
//! # Ok::<(), tunesearch::TunesearchError>(())
//! ```

use super::actions::{Action, PageRequest};
use super::modes::Phase;
use super::state::{AppState, SessionId};
use crate::domain::error::Result;
use crate::domain::SearchRecord;

/// Inputs to the query coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The debounced, deduplicated input produced a new effective term.
    TermChanged(String),

    /// The presentation layer rendered the row at this index.
    ///
    /// Triggers the next page when the index is within the lookahead window
    /// of the end of the known results.
    RenderedIndex(usize),

    /// A fetch completed successfully.
    PageLoaded {
        /// Session that issued the fetch.
        session: SessionId,
        /// Records of the page, in server order.
        records: Vec<SearchRecord>,
    },

    /// A fetch failed.
    PageFailed {
        /// Session that issued the fetch.
        session: SessionId,
        /// Human-readable failure description.
        message: String,
    },
}

/// Processes an event, mutates coordinator state, and returns actions to execute.
///
/// # Returns
///
/// `(changed, actions)`: `changed` is true when the observable snapshot
/// differs from the one before the event; `actions` must be executed in
/// order after the snapshot is published.
///
/// # Errors
///
/// Returns `InvalidRequest` if a new term cannot produce a valid page
/// request, which only happens with a zero page size. State is left exactly
/// as it was before the event; callers treat the error as a bug.
pub fn handle_event(state: &mut AppState, event: Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!(
        "handle_event",
        event_type = event_name(&event),
        session = %state.session.id,
        phase = ?state.phase
    )
    .entered();

    match event {
        Event::TermChanged(term) => {
            if !term.is_empty() {
                // Rejected requests must not replace the active session.
                PageRequest::new(state.next_session_id(), term.as_str(), state.page_size, 0)?;
            }

            let mut actions = vec![];

            if state.phase == Phase::Fetching {
                actions.push(Action::CancelFetch {
                    session: state.session.id,
                });
            }

            state.start_session(&term);

            if term.is_empty() {
                tracing::debug!("term cleared, results discarded");
                return Ok((true, actions));
            }

            if let Some(request) = state.begin_fetch()? {
                actions.push(Action::FetchPage(request));
            }
            Ok((true, actions))
        }
        Event::RenderedIndex(index) => {
            if !state.needs_next_page(index) {
                return Ok((false, vec![]));
            }

            match state.begin_fetch()? {
                Some(request) => {
                    tracing::debug!(index = index, known = state.session.results.len(), "lookahead reached");
                    Ok((true, vec![Action::FetchPage(request)]))
                }
                None => Ok((false, vec![])),
            }
        }
        Event::PageLoaded { session, records } => {
            if !accepts_completion(state, session) {
                tracing::debug!(stale_session = %session, records = records.len(), "discarding stale page");
                return Ok((false, vec![]));
            }

            state.complete_page(records);
            Ok((true, vec![]))
        }
        Event::PageFailed { session, message } => {
            if !accepts_completion(state, session) {
                tracing::debug!(stale_session = %session, error = %message, "discarding stale failure");
                return Ok((false, vec![]));
            }

            state.fail_page(message);
            Ok((true, vec![]))
        }
    }
}

/// A completion is applied only to the session that issued it, and only
/// while that session is waiting for it.
fn accepts_completion(state: &AppState, session: SessionId) -> bool {
    state.is_active(session) && state.phase == Phase::Fetching
}

const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::TermChanged(_) => "TermChanged",
        Event::RenderedIndex(_) => "RenderedIndex",
        Event::PageLoaded { .. } => "PageLoaded",
        Event::PageFailed { .. } => "PageFailed",
    }
}
