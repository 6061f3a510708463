//! Tunesearch: debounced, paginated search-as-you-type over the iTunes Search API.
//!
//! Tunesearch turns a rapidly changing text input into a disciplined
//! sequence of paginated fetches:
//! - Keystrokes are debounced and deduplicated into effective terms
//! - Each effective term starts a fresh session; the first page loads at once
//! - Further pages load when the presentation layer renders near the end
//! - At most one fetch is in flight per session, and responses that arrive
//!   for a superseded session are discarded
//! - Loading, error, and result state is published as immutable snapshots

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Line Frontend (main.rs)                            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!          │ set_input_text / notify_rendered_index ↑ snapshots
//! ┌─────────────────────────────────────────────────────┐
//! │  Runtime (runtime/)                                 │  ← tokio tasks
//! │  - Coordinator task owning AppState                 │
//! │  - Debouncer task                                   │
//! │  - One task per in-flight fetch                     │
//! └─────────────────────────────────────────────────────┘
//!          │                                   │
//! ┌───────────────────────────┐   ┌───────────────────────────┐
//! │ Application Layer (app/)  │   │ Client Layer (client/)    │
//! │ - Pure event handling     │   │ - SearchClient trait      │
//! │ - Session state machine   │   │ - iTunes HTTP client      │
//! │ - Debounce core           │   │                           │
//! └───────────────────────────┘   └───────────────────────────┘
//!          │                                   │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - SearchRecord, error types (domain/)              │
//! │  - Platform paths (infrastructure/)                 │
//! └─────────────────────────────────────────────────────┘
//!          │
//! ┌─────────────────────────────────────────────────────┐
//! │  UI (ui/) and Observability (observability/)        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Search state machine with event/action model
//! - [`client`]: Remote search client trait and iTunes implementation
//! - [`domain`]: Core domain types (`SearchRecord`, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`runtime`]: tokio tasks driving the state machine
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: OpenTelemetry tracing
//!
//! # Configuration
//!
//! Configuration is read from `<config dir>/tunesearch/config.toml`:
//!
//! ```toml
//! debounce_ms = 500
//! page_size = 10
//! lookahead = 3
//! country = "DK"
//! media = "music"
//! theme = "catppuccin-mocha"
//! trace_level = "info"
//! ```
//!
//! Every key is optional.
//!
//! # Example
//!
//! ```no_run
//! use tunesearch::{initialize, Config};
//!
//! # async fn demo() -> tunesearch::Result<()> {
//! let handle = initialize(&Config::load_default()?)?;
//! let mut updates = handle.subscribe();
//!
//! handle.set_input_text("blur")?;
//! while updates.changed().await.is_ok() {
//!     let snapshot = updates.borrow().clone();
//!     if !snapshot.is_loading {
//!         println!("{} results", snapshot.results.len());
//!         break;
//!     }
//! }
//! handle.shutdown().await
//! # }
//! ```

pub mod app;
pub mod client;
pub mod domain;
pub mod infrastructure;
pub mod runtime;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, Phase, SearchSnapshot, SessionId};
pub use client::{ItunesClient, SearchClient};
pub use domain::{FetchError, Result, SearchRecord, TunesearchError};
pub use runtime::SearchHandle;
pub use ui::Theme;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;

/// Application configuration.
///
/// Loaded from TOML; missing keys take their default values.
///
/// # Example
///
/// ```
/// use tunesearch::Config;
///
/// let config = Config::from_toml_str("page_size = 25\ncountry = \"US\"")?;
/// assert_eq!(config.page_size, 25);
/// assert_eq!(config.country, "US");
/// assert_eq!(config.debounce_ms, 500);
/// # Ok::<(), tunesearch::TunesearchError>(())
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Quiet period after the last keystroke before a term takes effect.
    ///
    /// Default: 500
    pub debounce_ms: u64,

    /// Records requested per page. Must be positive. Default: 10
    pub page_size: usize,

    /// How many rows before the end of the known results a rendered index
    /// must reach to request the next page. Default: 3
    pub lookahead: usize,

    /// Storefront country code sent with every request. Default: `"DK"`
    pub country: String,

    /// Media kind sent with every request. Default: `"music"`
    pub media: String,

    /// Search endpoint.
    pub base_url: String,

    /// Per-request timeout enforced by the HTTP client. Must be positive.
    /// Default: 15
    pub request_timeout_secs: u64,

    /// Abort a superseded in-flight request instead of letting it complete.
    ///
    /// Stale results are discarded either way. Default: `false`
    pub cancel_superseded: bool,

    /// Rows shown at once by the terminal frontend. Default: 6
    pub viewport_rows: usize,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`. Ignored if
    /// `theme_file` is set.
    #[serde(rename = "theme")]
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Tracing level for log output and OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. `RUST_LOG` takes
    /// precedence. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debounce_ms: 500,
            page_size: 10,
            lookahead: 3,
            country: "DK".to_string(),
            media: "music".to_string(),
            base_url: client::itunes::DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 15,
            cancel_superseded: false,
            viewport_rows: 6,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses and validates configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`TunesearchError::Config`] if the TOML is malformed, contains
    /// unknown keys, or fails [`Config::validate`].
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)
            .map_err(|e| TunesearchError::Config(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`TunesearchError::Io`] if the file cannot be read, or
    /// [`TunesearchError::Config`] if its contents are invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loaded configuration file");
        Self::from_toml_str(&contents)
    }

    /// Loads `<config dir>/tunesearch/config.toml`, or defaults if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_default() -> Result<Self> {
        let path = infrastructure::paths::default_config_path();
        if path.is_file() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`TunesearchError::Config`] if `page_size`, `debounce_ms`, or
    /// `request_timeout_secs` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(TunesearchError::Config("page_size must be positive".to_string()));
        }
        if self.debounce_ms == 0 {
            return Err(TunesearchError::Config("debounce_ms must be positive".to_string()));
        }
        if self.request_timeout_secs == 0 {
            return Err(TunesearchError::Config("request_timeout_secs must be positive".to_string()));
        }
        Ok(())
    }

    /// Debounce delay as a [`Duration`].
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Starts a search runtime backed by the iTunes Search API.
///
/// Must be called from within a tokio runtime.
///
/// # Parameters
///
/// * `config` - Application configuration
///
/// # Returns
///
/// A [`SearchHandle`] for feeding input and observing snapshots.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the HTTP client cannot
/// be built, or no tokio runtime is running.
pub fn initialize(config: &Config) -> Result<SearchHandle> {
    tracing::debug!("initializing tunesearch");

    let client = ItunesClient::new(config)?;
    runtime::spawn(config, Arc::new(client))
}
