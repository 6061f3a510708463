//! Input debouncing for the search field.
//!
//! Raw text values arrive once per keystroke. The debouncer holds the most
//! recent one until the input has been quiet for the configured delay, then
//! emits it as the effective term, unless it equals the term emitted last.
//!
//! The logic is split in two:
//! - [`DebounceState`]: a pure timer-free core driven by explicit instants,
//!   used by the task and directly by tests
//! - [`Debouncer`]: a tokio task that feeds raw values into the state and
//!   sleeps until the pending deadline
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use tokio::time::Instant;
//! use tunesearch::app::DebounceState;
//!
//! let mut state = DebounceState::new(Duration::from_millis(500));
//! let start = Instant::now();
//! state.push("a".into(), start);
//! state.push("ab".into(), start + Duration::from_millis(100));
//! assert_eq!(state.deadline(), Some(start + Duration::from_millis(600)));
//! assert_eq!(state.fire().as_deref(), Some("ab"));
//! ```

use super::handler::Event;
use std::time::Duration;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::Instrument;

/// Quiet period used when none is configured.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Timer-free debounce core.
#[derive(Debug, Clone)]
pub struct DebounceState {
    delay: Duration,
    pending: Option<(String, Instant)>,
    last_emitted: Option<String>,
}

impl DebounceState {
    /// Creates a debouncer core that has emitted nothing yet.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            last_emitted: None,
        }
    }

    /// Records a raw value observed at `now`, restarting the quiet period.
    pub fn push(&mut self, value: String, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    /// Instant at which the pending value becomes effective, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    /// Takes the pending value as the next effective term.
    ///
    /// Returns `None` when nothing is pending or when the value equals the
    /// previously emitted term. The pending slot is cleared either way.
    pub fn fire(&mut self) -> Option<String> {
        let (value, _) = self.pending.take()?;
        if self.last_emitted.as_deref() == Some(value.as_str()) {
            tracing::trace!(term_len = value.len(), "debounced value unchanged");
            return None;
        }
        self.last_emitted = Some(value.clone());
        Some(value)
    }
}

/// Background task turning raw input into [`Event::TermChanged`] events.
pub struct Debouncer;

impl Debouncer {
    /// Spawns the debounce loop.
    ///
    /// The task ends when either channel closes. A value still pending when
    /// the raw input closes is dropped; the session is going away.
    ///
    /// # Parameters
    ///
    /// * `delay` - Quiet period after the last raw value
    /// * `raw` - Raw text values, one per keystroke
    /// * `events` - Coordinator event queue
    pub fn spawn(
        delay: Duration,
        mut raw: UnboundedReceiver<String>,
        events: UnboundedSender<Event>,
    ) -> JoinHandle<()> {
        let span = tracing::debug_span!("debouncer", delay_ms = delay.as_millis() as u64);

        tokio::spawn(
            async move {
                let mut state = DebounceState::new(delay);

                loop {
                    let deadline = state.deadline();

                    tokio::select! {
                        biased;

                        value = raw.recv() => match value {
                            Some(value) => state.push(value, Instant::now()),
                            None => {
                                tracing::debug!("raw input closed");
                                break;
                            }
                        },
                        () = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                            if let Some(term) = state.fire() {
                                tracing::debug!(term_len = term.len(), "effective term");
                                if events.send(Event::TermChanged(term)).is_err() {
                                    tracing::debug!("coordinator gone, stopping debouncer");
                                    break;
                                }
                            }
                        }
                    }
                }
            }
            .instrument(span),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;
    use tokio::time::sleep;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn later_push_moves_deadline() {
        let mut state = DebounceState::new(500 * MS);
        let t0 = Instant::now();
        state.push("a".into(), t0);
        state.push("ab".into(), t0 + 100 * MS);
        state.push("abc".into(), t0 + 200 * MS);

        assert_eq!(state.deadline(), Some(t0 + 700 * MS));
        assert_eq!(state.fire().as_deref(), Some("abc"));
        assert_eq!(state.deadline(), None);
        assert_eq!(state.fire(), None);
    }

    #[test]
    fn repeated_value_is_suppressed() {
        let mut state = DebounceState::new(500 * MS);
        let t0 = Instant::now();
        state.push("x".into(), t0);
        assert_eq!(state.fire().as_deref(), Some("x"));

        state.push("x".into(), t0 + 900 * MS);
        assert_eq!(state.fire(), None);

        state.push("y".into(), t0 + 1800 * MS);
        assert_eq!(state.fire().as_deref(), Some("y"));
    }

    #[tokio::test(start_paused = true)]
    async fn burst_emits_once_after_quiet_period() {
        let (raw_tx, raw_rx) = mpsc::unbounded_channel();
        let (events_tx, mut events_rx) = mpsc::unbounded_channel();
        let task = Debouncer::spawn(DEFAULT_DEBOUNCE, raw_rx, events_tx);
        let start = Instant::now();

        raw_tx.send("a".to_string()).unwrap();
        sleep(100 * MS).await;
        raw_tx.send("ab".to_string()).unwrap();
        sleep(100 * MS).await;
        raw_tx.send("abc".to_string()).unwrap();

        let event = events_rx.recv().await.unwrap();
        assert_eq!(event, Event::TermChanged("abc".into()));
        let elapsed = start.elapsed();
        assert!(elapsed >= 700 * MS && elapsed < 710 * MS, "emitted at {elapsed:?}");

        drop(raw_tx);
        task.await.unwrap();
        assert!(events_rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn identical_value_after_silence_does_not_reemit() {
        let (raw_tx, raw_rx) = mpsc::unbounded_channel();
        let (events_tx, mut events_rx) = mpsc::unbounded_channel();
        let task = Debouncer::spawn(DEFAULT_DEBOUNCE, raw_rx, events_tx);

        raw_tx.send("blur".to_string()).unwrap();
        assert_eq!(events_rx.recv().await, Some(Event::TermChanged("blur".into())));

        raw_tx.send("blu".to_string()).unwrap();
        sleep(50 * MS).await;
        raw_tx.send("blur".to_string()).unwrap();
        sleep(2 * DEFAULT_DEBOUNCE).await;
        raw_tx.send(String::new()).unwrap();

        assert_eq!(events_rx.recv().await, Some(Event::TermChanged(String::new())));
        drop(raw_tx);
        task.await.unwrap();
    }
}
