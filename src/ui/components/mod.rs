//! Composable UI component renderers.
//!
//! Each component writes whole lines to an [`std::io::Write`] and knows
//! nothing about cursor positioning; the frame is drawn top to bottom.
//!
//! # Components
//!
//! - [`header`]: Title bar with the current term
//! - [`banner`]: Error banner
//! - [`table`]: Result rows
//! - [`empty`]: Empty state message
//! - [`footer`]: Status and command hints

pub mod banner;
pub mod empty;
pub mod footer;
pub mod header;
pub mod table;

use std::io::{self, Write};

use crate::ui::theme::Theme;

/// Writes a full-width separator line.
pub fn render_border<W: Write>(out: &mut W, color: &str, cols: usize) -> io::Result<()> {
    writeln!(out, "{}{}{}", Theme::fg(color), "─".repeat(cols), Theme::reset())
}

/// Pads `text` with spaces to center it in `cols` columns.
pub(crate) fn centered(text: &str, cols: usize) -> String {
    let len = text.chars().count();
    let left = cols.saturating_sub(len) / 2;
    let right = cols.saturating_sub(left + len);
    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}
