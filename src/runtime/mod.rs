//! Async runtime wiring for the search coordinator.
//!
//! The pure state machine in [`crate::app`] is driven here by tokio tasks:
//!
//! - `coordinator`: the single owner of [`crate::app::AppState`]; consumes
//!   one event queue, publishes snapshots, executes actions
//! - `handle`: [`SearchHandle`], the presentation layer's entry point
//! - the debouncer task from [`crate::app::Debouncer`], feeding the same
//!   event queue
//!
//! Every fetch runs in its own task tagged with the session that issued it.
//! Its outcome re-enters the event queue, so all state mutation stays
//! serialized on the coordinator.

mod coordinator;
pub mod handle;

pub use handle::SearchHandle;

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, watch};

use crate::app::{AppState, Debouncer};
use crate::client::SearchClient;
use crate::domain::error::{Result, TunesearchError};
use crate::Config;
use coordinator::Coordinator;

/// Starts the coordinator and debouncer tasks on the current tokio runtime.
///
/// # Errors
///
/// Returns [`TunesearchError::Config`] if the configuration is invalid, or
/// [`TunesearchError::Runtime`] if called outside a tokio runtime.
pub fn spawn(config: &Config, client: Arc<dyn SearchClient>) -> Result<SearchHandle> {
    config.validate()?;
    tokio::runtime::Handle::try_current()
        .map_err(|err| TunesearchError::Runtime(format!("no tokio runtime: {err}")))?;

    let state = AppState::from_config(config);
    let (snapshots_tx, snapshots_rx) = watch::channel(state.snapshot());
    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let (raw_tx, raw_rx) = mpsc::unbounded_channel();
    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let coordinator = Coordinator::new(
        state,
        client,
        events_tx.clone(),
        snapshots_tx,
        config.cancel_superseded,
    );
    let coordinator_task = tokio::spawn(coordinator.run(events_rx, shutdown_rx));
    let debouncer_task = Debouncer::spawn(config.debounce(), raw_rx, events_tx.clone());

    tracing::info!(
        page_size = config.page_size,
        lookahead = config.lookahead,
        debounce_ms = config.debounce_ms,
        cancel_superseded = config.cancel_superseded,
        "search runtime started"
    );

    Ok(SearchHandle::new(
        raw_tx,
        events_tx,
        snapshots_rx,
        shutdown_tx,
        vec![coordinator_task, debouncer_task],
    ))
}
