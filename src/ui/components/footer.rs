//! Footer component renderer.

use std::io::{self, Write};

use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the status on the left and command hints on the right.
pub fn render_footer<W: Write>(out: &mut W, footer: &FooterInfo, theme: &Theme, cols: usize) -> io::Result<()> {
    let status_color = if footer.is_loading {
        &theme.colors.loading_fg
    } else {
        &theme.colors.text_dim
    };
    let gap = cols.saturating_sub(footer.status.chars().count() + footer.keybindings.chars().count());

    writeln!(
        out,
        "{}{}{}{}{}{}{}",
        Theme::fg(status_color),
        footer.status,
        Theme::reset(),
        " ".repeat(gap.max(1)),
        Theme::dim(),
        footer.keybindings,
        Theme::reset()
    )
}
