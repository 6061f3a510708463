//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot, watch};

use tunesearch::app::SearchSnapshot;
use tunesearch::client::SearchClient;
use tunesearch::{Config, FetchError, SearchRecord};

/// One `fetch_page` call waiting for the test to answer it.
#[derive(Debug)]
pub struct PendingCall {
    pub term: String,
    pub page_size: usize,
    pub offset: usize,
    /// Whether the coordinator had already published `is_loading` when the
    /// call arrived.
    pub loading_published: bool,
    reply: oneshot::Sender<Result<Vec<SearchRecord>, FetchError>>,
}

impl PendingCall {
    /// Answers with `n` records named after the term and offset.
    pub fn respond(self, n: usize) {
        let records = (0..n)
            .map(|i| SearchRecord::new(format!("{} #{}", self.term, self.offset + i), "artist"))
            .collect();
        let _ = self.reply.send(Ok(records));
    }

    pub fn fail(self, error: FetchError) {
        let _ = self.reply.send(Err(error));
    }

    /// Whether the caller has stopped waiting for the answer.
    pub fn is_abandoned(&self) -> bool {
        self.reply.is_closed()
    }
}

/// A client whose answers are supplied by the test, one call at a time.
pub struct ScriptedClient {
    calls: mpsc::UnboundedSender<PendingCall>,
    snapshots: std::sync::Mutex<Option<watch::Receiver<SearchSnapshot>>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl ScriptedClient {
    pub fn new() -> (Arc<Self>, mpsc::UnboundedReceiver<PendingCall>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let client = Arc::new(Self {
            calls: tx,
            snapshots: std::sync::Mutex::new(None),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        });
        (client, rx)
    }

    /// Lets calls record whether `is_loading` was visible when they started.
    pub fn observe(&self, snapshots: watch::Receiver<SearchSnapshot>) {
        *self.snapshots.lock().unwrap() = Some(snapshots);
    }

    /// Highest number of calls that were ever outstanding at once.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

struct InFlightGuard<'a>(&'a AtomicUsize);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl SearchClient for ScriptedClient {
    async fn fetch_page(&self, term: &str, page_size: usize, offset: usize) -> Result<Vec<SearchRecord>, FetchError> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        let _guard = InFlightGuard(&self.in_flight);

        let loading_published = self
            .snapshots
            .lock()
            .unwrap()
            .as_ref()
            .is_some_and(|rx| rx.borrow().is_loading);

        let (reply, answer) = oneshot::channel();
        self.calls
            .send(PendingCall {
                term: term.to_string(),
                page_size,
                offset,
                loading_published,
                reply,
            })
            .map_err(|_| FetchError::Network("test harness gone".to_string()))?;

        answer
            .await
            .unwrap_or_else(|_| Err(FetchError::Network("test dropped the call".to_string())))
    }
}

/// Test configuration: page size 10, lookahead 3, 500 ms debounce.
pub fn config() -> Config {
    Config {
        page_size: 10,
        lookahead: 3,
        debounce_ms: 500,
        ..Config::default()
    }
}

/// Waits until `predicate` holds for the latest snapshot.
pub async fn wait_for(
    updates: &mut watch::Receiver<SearchSnapshot>,
    predicate: impl Fn(&SearchSnapshot) -> bool,
) -> SearchSnapshot {
    let snapshot = tokio::time::timeout(Duration::from_secs(60), updates.wait_for(|s| predicate(s)))
        .await
        .expect("timed out waiting for snapshot")
        .expect("coordinator stopped");
    snapshot.clone()
}

/// Waits for the next client call.
pub async fn next_call(calls: &mut mpsc::UnboundedReceiver<PendingCall>) -> PendingCall {
    tokio::time::timeout(Duration::from_secs(60), calls.recv())
        .await
        .expect("timed out waiting for a fetch")
        .expect("client dropped")
}

/// Asserts that no client call arrives within `window`.
pub async fn assert_no_call(calls: &mut mpsc::UnboundedReceiver<PendingCall>, window: Duration) {
    if let Ok(Some(call)) = tokio::time::timeout(window, calls.recv()).await {
        panic!("unexpected fetch: term={:?} offset={}", call.term, call.offset);
    }
}
