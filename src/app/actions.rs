//! Actions representing side effects to be executed by the runtime.
//!
//! The event handler never performs I/O. It returns a `Vec<Action>` and the
//! runtime executes them in order, after the resulting snapshot has been
//! published.
//!
//! # Example
//!
//! ```
//! use tunesearch::app::{Action, PageRequest, SessionId};
//!
//! let request = PageRequest::new(SessionId::new(1), "blur", 10, 0)?;
//! let actions = vec![Action::FetchPage(request)];
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), tunesearch::TunesearchError>(())
//! ```

use super::state::SessionId;
use crate::domain::error::{Result, TunesearchError};

/// Parameters of one page fetch, tagged with the session that issued it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Session the response must be delivered to.
    pub session: SessionId,
    /// Effective search term.
    pub term: String,
    /// Number of records requested.
    pub page_size: usize,
    /// Number of records already accumulated for this term.
    pub offset: usize,
}

impl PageRequest {
    /// Builds a page request, rejecting an empty term or a zero page size.
    ///
    /// # Errors
    ///
    /// Returns [`TunesearchError::InvalidRequest`] when `term` is empty or
    /// `page_size` is zero.
    pub fn new(session: SessionId, term: impl Into<String>, page_size: usize, offset: usize) -> Result<Self> {
        let term = term.into();
        if term.is_empty() {
            return Err(TunesearchError::InvalidRequest(format!(
                "empty term for session {session}"
            )));
        }
        if page_size == 0 {
            return Err(TunesearchError::InvalidRequest(format!(
                "zero page size for session {session}"
            )));
        }

        Ok(Self {
            session,
            term,
            page_size,
            offset,
        })
    }
}

/// Side effects requested by the coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Start a fetch through the search client.
    ///
    /// The outcome comes back as `Event::PageLoaded` or `Event::PageFailed`
    /// carrying the same session id.
    FetchPage(PageRequest),

    /// The fetch issued for `session` is no longer relevant.
    ///
    /// Emitted when a new term supersedes a session that still has a fetch
    /// in flight. The runtime may abort the request; its result is discarded
    /// either way.
    CancelFetch {
        /// Session whose request was superseded.
        session: SessionId,
    },
}
