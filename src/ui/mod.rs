//! Terminal rendering of search snapshots.
//!
//! ```text
//! SearchSnapshot → ResultsViewModel::from_snapshot → render → ANSI lines
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready projection of a snapshot
//! - [`renderer`]: Frame layout
//! - [`components`]: Header, banner, rows, empty state, footer
//! - [`theme`]: Color schemes and ANSI escape sequences

pub mod components;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{EmptyState, ErrorBanner, FooterInfo, HeaderInfo, ResultsViewModel, TrackRow};
