//! Theme management and ANSI escape sequence generation.
//!
//! Supports built-in Catppuccin themes and custom themes loaded from TOML
//! files.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme with warm tones (default)
//! - `catppuccin-latte`: Light theme with soft pastels
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! header_bg = "#313244"     # optional
//! accent = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! error_fg = "#1e1e2e"
//! error_bg = "#f38ba8"
//! loading_fg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! ```
//!
//! # Example
//!
//! ```
//! use tunesearch::ui::Theme;
//!
//! let theme = Theme::from_name("catppuccin-latte").expect("built-in theme");
//! print!("{}Bold{}", Theme::bold(), Theme::reset());
//! assert_eq!(Theme::fg("#ff0000"), "\u{1b}[38;2;255;0;0m");
//! # let _ = theme;
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::error::{Result, TunesearchError};
use crate::infrastructure::paths::expand_tilde;
use crate::Config;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "catppuccin-mocha";

/// Color scheme for terminal rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette.
    pub colors: ThemeColors,
}

/// Hex colors (`"#rrggbb"`) for every styled element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Title bar text.
    pub header_fg: String,
    /// Optional title bar background.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Current term and row numbers.
    pub accent: String,

    /// Track titles.
    pub text_normal: String,
    /// Artist, date, description, footer hints.
    pub text_dim: String,

    /// Separator lines.
    pub border: String,

    /// Error banner text.
    pub error_fg: String,
    /// Error banner background.
    pub error_bg: String,

    /// Loading status in the footer.
    pub loading_fg: String,

    /// Empty state message.
    pub empty_state_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name, or `None` if the name is unknown.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file. A leading `~` is expanded.
    ///
    /// # Errors
    ///
    /// Returns [`TunesearchError::Theme`] if the file cannot be read or is
    /// not a valid theme.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let path = path.to_str().map_or_else(|| path.to_path_buf(), expand_tilde);

        let contents = fs::read_to_string(&path)
            .map_err(|e| TunesearchError::Theme(format!("failed to read {}: {e}", path.display())))?;

        toml::from_str(&contents).map_err(|e| TunesearchError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Resolves the configured theme: `theme_file`, then `theme`, then the default.
    ///
    /// Failures are logged and fall back to the default theme.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        if let Some(theme_file) = &config.theme_file {
            match Self::from_file(theme_file) {
                Ok(theme) => return theme,
                Err(e) => {
                    tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme file, using default");
                }
            }
        }

        config.theme_name.as_deref().map_or_else(Self::default, |name| {
            Self::from_name(name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %name, "unknown theme, using default");
                Self::default()
            })
        })
    }

    /// Parses `#rrggbb`, falling back to white on malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .unwrap_or(255)
        };

        if hex.len() != 6 {
            return (255, 255, 255);
        }
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// 24-bit foreground color escape for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background color escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }

    /// Neutral palette used only if the embedded default cannot be parsed.
    fn plain() -> Self {
        let white = "#ffffff".to_string();
        let grey = "#808080".to_string();
        Self {
            name: "plain".to_string(),
            colors: ThemeColors {
                header_fg: white.clone(),
                header_bg: None,
                accent: white.clone(),
                text_normal: white.clone(),
                text_dim: grey.clone(),
                border: grey,
                error_fg: white.clone(),
                error_bg: "#aa0000".to_string(),
                loading_fg: white.clone(),
                empty_state_fg: white,
            },
        }
    }
}

impl Default for Theme {
    /// Returns the default theme (Catppuccin Mocha).
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).unwrap_or_else(Self::plain)
    }
}
