//! Header component renderer.

use std::io::{self, Write};

use super::centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title bar and, below it, the effective term.
pub fn render_header<W: Write>(out: &mut W, header: &HeaderInfo, theme: &Theme, cols: usize) -> io::Result<()> {
    let bg = theme.colors.header_bg.as_deref().map(Theme::bg).unwrap_or_default();
    writeln!(
        out,
        "{}{}{bg}{}{}",
        Theme::bold(),
        Theme::fg(&theme.colors.header_fg),
        centered(&header.title, cols),
        Theme::reset()
    )?;

    if header.term.is_empty() {
        return Ok(());
    }
    writeln!(
        out,
        "{}search:{} {}{}{}",
        Theme::fg(&theme.colors.text_dim),
        Theme::reset(),
        Theme::fg(&theme.colors.accent),
        header.term,
        Theme::reset()
    )
}
