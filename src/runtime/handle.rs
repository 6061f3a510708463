//! The presentation layer's view of a running search.

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;

use crate::app::{Event, SearchSnapshot};
use crate::domain::error::{Result, TunesearchError};

/// Handle to a running search coordinator.
///
/// Created by [`crate::runtime::spawn`] or [`crate::initialize`]. Dropping
/// the handle stops the coordinator; [`SearchHandle::shutdown`] does the
/// same and waits for the background tasks to finish.
///
/// # Example
///
/// ```no_run
/// # async fn demo(handle: tunesearch::SearchHandle) -> tunesearch::Result<()> {
/// let mut updates = handle.subscribe();
/// handle.set_input_text("daft punk")?;
/// updates.changed().await.ok();
/// let snapshot = updates.borrow().clone();
/// if let Some(last) = snapshot.results.len().checked_sub(1) {
///     handle.notify_rendered_index(last)?;
/// }
/// handle.shutdown().await
/// # }
/// ```
pub struct SearchHandle {
    raw: mpsc::UnboundedSender<String>,
    events: mpsc::UnboundedSender<Event>,
    snapshots: watch::Receiver<SearchSnapshot>,
    shutdown: oneshot::Sender<()>,
    tasks: Vec<JoinHandle<()>>,
}

impl SearchHandle {
    pub(crate) fn new(
        raw: mpsc::UnboundedSender<String>,
        events: mpsc::UnboundedSender<Event>,
        snapshots: watch::Receiver<SearchSnapshot>,
        shutdown: oneshot::Sender<()>,
        tasks: Vec<JoinHandle<()>>,
    ) -> Self {
        Self {
            raw,
            events,
            snapshots,
            shutdown,
            tasks,
        }
    }

    /// Feeds a raw input value to the debouncer.
    ///
    /// # Errors
    ///
    /// Returns [`TunesearchError::Runtime`] if the debouncer has stopped.
    pub fn set_input_text(&self, raw: impl Into<String>) -> Result<()> {
        self.raw
            .send(raw.into())
            .map_err(|_| TunesearchError::Runtime("debouncer stopped".to_string()))
    }

    /// Reports that the row at `index` has been rendered.
    ///
    /// Requests the next page when `index` is within the lookahead window of
    /// the end of the known results. Ignored while a fetch is in flight or
    /// once the term is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`TunesearchError::Runtime`] if the coordinator has stopped.
    pub fn notify_rendered_index(&self, index: usize) -> Result<()> {
        self.events
            .send(Event::RenderedIndex(index))
            .map_err(|_| TunesearchError::Runtime("coordinator stopped".to_string()))
    }

    /// Subscribes to snapshot updates.
    ///
    /// The receiver always holds the latest snapshot; intermediate snapshots
    /// published between two reads are coalesced.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SearchSnapshot> {
        self.snapshots.clone()
    }

    /// Returns a copy of the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> SearchSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Stops the coordinator and debouncer and waits for both.
    ///
    /// A fetch still in flight is aborted and its outcome discarded.
    ///
    /// # Errors
    ///
    /// Returns [`TunesearchError::Runtime`] if a background task panicked.
    pub async fn shutdown(self) -> Result<()> {
        let Self {
            raw,
            events,
            shutdown,
            tasks,
            ..
        } = self;

        // Either outcome means the coordinator is stopping.
        let _ = shutdown.send(());
        drop(raw);
        drop(events);

        for task in tasks {
            task.await
                .map_err(|err| TunesearchError::Runtime(format!("background task failed: {err}")))?;
        }
        tracing::info!("search runtime stopped");
        Ok(())
    }
}
