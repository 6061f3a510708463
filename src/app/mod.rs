//! Search orchestration: debouncing, coordination, and accumulation.
//!
//! This module is the core of the crate. It sits between the runtime (which
//! owns channels and tasks) and the domain types, and it performs no I/O of
//! its own.
//!
//! # Architecture
//!
//! ```text
//! raw text → Debouncer → Event::TermChanged ─┐
//! rendered index → Event::RenderedIndex ─────┼→ handle_event → AppState → snapshot
//! fetch outcome → Event::PageLoaded/Failed ──┘        │
//!                                                     └→ Actions → runtime → SearchClient
//! ```
//!
//! # Modules
//!
//! - [`accumulator`]: Append-only page folding and end-of-results detection
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`debounce`]: Quiet-period coalescing of raw input
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Coordinator phase state machine
//! - [`snapshot`]: Observable state handed to subscribers
//! - [`state`]: Session and coordinator state container

pub mod accumulator;
pub mod actions;
pub mod debounce;
pub mod handler;
pub mod modes;
pub mod snapshot;
pub mod state;

pub use actions::{Action, PageRequest};
pub use debounce::{DebounceState, Debouncer, DEFAULT_DEBOUNCE};
pub use handler::{handle_event, Event};
pub use modes::{FetchStatus, Phase};
pub use snapshot::SearchSnapshot;
pub use state::{AppState, SearchSession, SessionId};
