//! The coordinator task: sole owner of search state.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tracing::Instrument;

use crate::app::{handle_event, Action, AppState, Event, PageRequest, SearchSnapshot, SessionId};
use crate::client::SearchClient;

pub(super) struct Coordinator {
    state: AppState,
    client: Arc<dyn SearchClient>,
    events: mpsc::UnboundedSender<Event>,
    snapshots: watch::Sender<SearchSnapshot>,
    cancel_superseded: bool,
    in_flight: Option<(SessionId, JoinHandle<()>)>,
}

impl Coordinator {
    pub(super) fn new(
        state: AppState,
        client: Arc<dyn SearchClient>,
        events: mpsc::UnboundedSender<Event>,
        snapshots: watch::Sender<SearchSnapshot>,
        cancel_superseded: bool,
    ) -> Self {
        Self {
            state,
            client,
            events,
            snapshots,
            cancel_superseded,
            in_flight: None,
        }
    }

    /// Processes events until shutdown is requested or the handle is dropped.
    pub(super) async fn run(
        mut self,
        mut events: mpsc::UnboundedReceiver<Event>,
        mut shutdown: oneshot::Receiver<()>,
    ) {
        loop {
            tokio::select! {
                biased;

                _ = &mut shutdown => {
                    tracing::debug!("coordinator shutting down");
                    break;
                }
                event = events.recv() => match event {
                    Some(event) => self.dispatch(event),
                    None => break,
                },
            }
        }

        if let Some((session, task)) = self.in_flight.take() {
            tracing::debug!(session = %session, "aborting in-flight fetch on shutdown");
            task.abort();
        }
    }

    fn dispatch(&mut self, event: Event) {
        match handle_event(&mut self.state, event) {
            Ok((changed, actions)) => {
                // Observers must see the new state before any fetch it implies starts.
                if changed {
                    self.snapshots.send_replace(self.state.snapshot());
                }
                for action in actions {
                    self.execute(action);
                }
            }
            Err(err) => {
                tracing::error!(error = %err, "coordinator rejected event");
            }
        }
    }

    fn execute(&mut self, action: Action) {
        match action {
            Action::FetchPage(request) => self.spawn_fetch(request),
            Action::CancelFetch { session } => {
                let Some((in_flight, task)) = self.in_flight.take() else {
                    return;
                };
                if in_flight != session {
                    self.in_flight = Some((in_flight, task));
                } else if self.cancel_superseded {
                    tracing::debug!(session = %session, "aborting superseded fetch");
                    task.abort();
                } else {
                    tracing::debug!(session = %session, "superseded fetch left to complete");
                }
            }
        }
    }

    fn spawn_fetch(&mut self, request: PageRequest) {
        let span = tracing::debug_span!(
            "fetch_page",
            session = %request.session,
            offset = request.offset,
            page_size = request.page_size
        );
        let client = Arc::clone(&self.client);
        let events = self.events.clone();
        let session = request.session;

        let task = tokio::spawn(
            async move {
                let event = match client
                    .fetch_page(&request.term, request.page_size, request.offset)
                    .await
                {
                    Ok(records) => Event::PageLoaded { session, records },
                    Err(err) => {
                        tracing::warn!(error = %err, "search request failed");
                        Event::PageFailed {
                            session,
                            message: err.to_string(),
                        }
                    }
                };

                if events.send(event).is_err() {
                    tracing::debug!("coordinator gone, dropping fetch outcome");
                }
            }
            .instrument(span),
        );

        self.in_flight = Some((session, task));
    }
}
