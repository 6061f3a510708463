//! Coordinator phase and fetch status enums.
//!
//! These types name the states of the query coordinator's state machine.
//! Exactly one [`Phase`] is current at any time and it is scoped to the
//! active search session; starting a new session resets it.
//!
//! # State Machine
//!
//! ```text
//!             term ""                      term "t"
//!   any ───────────────▶ Empty     any ───────────────▶ Idle ──▶ Fetching
//!
//!   Idle ──trigger──▶ Fetching ──full page──▶ Idle
//!                        │ ──short page──▶ Exhausted
//!                        └ ──failure────▶ Errored
//! ```
//!
//! Triggers arriving in any phase other than `Idle` are dropped.

/// State of the query coordinator for the active session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    /// The effective term is empty. No fetch is ever issued.
    #[default]
    Empty,

    /// No fetch is in flight and more pages may exist.
    Idle,

    /// Exactly one fetch is in flight for the active session.
    Fetching,

    /// The last page was short; the term has no further results.
    Exhausted,

    /// The last fetch failed; pagination stops until the term changes.
    Errored,
}

impl Phase {
    /// Whether a fetch trigger may start a new fetch in this phase.
    #[must_use]
    pub const fn accepts_trigger(self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Fetch status implied by this phase.
    #[must_use]
    pub const fn fetch_status(self) -> FetchStatus {
        match self {
            Self::Fetching => FetchStatus::InFlight,
            Self::Empty | Self::Idle | Self::Exhausted | Self::Errored => FetchStatus::Idle,
        }
    }
}

/// Whether the active session has a request outstanding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FetchStatus {
    /// Nothing in flight.
    #[default]
    Idle,
    /// One request in flight.
    InFlight,
}
