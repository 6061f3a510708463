//! Empty state component.

use std::io::{self, Write};

use super::centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a centered message with a dimmed subtitle, framed by blank lines.
pub fn render_empty_state<W: Write>(out: &mut W, empty: &EmptyState, theme: &Theme, cols: usize) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{}{}{}",
        Theme::fg(&theme.colors.empty_state_fg),
        centered(&empty.message, cols),
        Theme::reset()
    )?;
    writeln!(
        out,
        "{}{}{}{}",
        Theme::dim(),
        Theme::fg(&theme.colors.text_dim),
        centered(&empty.subtitle, cols),
        Theme::reset()
    )?;
    writeln!(out)
}
