//! Error banner component.

use std::io::{self, Write};

use super::centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ErrorBanner;

/// Renders the error message as one full-width line on the error colors.
pub fn render_banner<W: Write>(out: &mut W, banner: &ErrorBanner, theme: &Theme, cols: usize) -> io::Result<()> {
    writeln!(
        out,
        "{}{}{}{}{}",
        Theme::bold(),
        Theme::fg(&theme.colors.error_fg),
        Theme::bg(&theme.colors.error_bg),
        centered(&banner.message, cols),
        Theme::reset()
    )
}
