//! Result table component.
//!
//! Each result takes two or three lines:
//!
//! ```text
//!   12  Song 2
//!       Blur · Apr 7, 1997
//!       Optional description, already truncated by the view model
//! ```

use std::io::{self, Write};

use crate::ui::theme::Theme;
use crate::ui::viewmodel::TrackRow;

/// Width of the row number gutter.
const GUTTER: usize = 6;

/// Renders all rows in order.
pub fn render_rows<W: Write>(out: &mut W, rows: &[TrackRow], theme: &Theme) -> io::Result<()> {
    for row in rows {
        render_row(out, row, theme)?;
    }
    Ok(())
}

fn render_row<W: Write>(out: &mut W, row: &TrackRow, theme: &Theme) -> io::Result<()> {
    let number = format!("{:>4}", row.index + 1);
    writeln!(
        out,
        "{}{number}{}  {}{}{}{}",
        Theme::fg(&theme.colors.accent),
        Theme::reset(),
        Theme::bold(),
        Theme::fg(&theme.colors.text_normal),
        row.title,
        Theme::reset()
    )?;

    let pad = " ".repeat(GUTTER);
    writeln!(
        out,
        "{pad}{}{} · {}{}",
        Theme::fg(&theme.colors.text_dim),
        row.artist,
        row.release_date,
        Theme::reset()
    )?;

    if let Some(description) = &row.description {
        writeln!(
            out,
            "{pad}{}{}{description}{}",
            Theme::dim(),
            Theme::fg(&theme.colors.text_dim),
            Theme::reset()
        )?;
    }
    Ok(())
}
