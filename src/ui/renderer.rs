//! Top-level rendering coordinator.
//!
//! Draws one frame, top to bottom:
//!
//! ```text
//! [Header]
//! [Error banner, if any]
//! [Border]
//! [Rows | Empty state]
//! [Border]
//! [Footer]
//! ```
//!
//! The renderer returns the index of the last row it drew so the caller can
//! report it through [`crate::SearchHandle::notify_rendered_index`].

use std::io::{self, Write};

use crate::ui::components::banner::render_banner;
use crate::ui::components::empty::render_empty_state;
use crate::ui::components::footer::render_footer;
use crate::ui::components::header::render_header;
use crate::ui::components::render_border;
use crate::ui::components::table::render_rows;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ResultsViewModel;

/// Renders a view model to `out`.
///
/// # Parameters
///
/// * `out` - Destination, typically a locked stdout
/// * `vm` - Pre-computed view model
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The result index of the last row drawn, or `None` if no rows were drawn.
///
/// # Errors
///
/// Propagates any error from writing to `out`.
///
/// # Example
///
/// ```
/// use tunesearch::app::SearchSnapshot;
/// use tunesearch::ui::{render, ResultsViewModel, Theme};
///
/// let vm = ResultsViewModel::from_snapshot(&SearchSnapshot::default(), 0, 6);
/// let mut frame = Vec::new();
/// assert_eq!(render(&mut frame, &vm, &Theme::default(), 80)?, None);
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn render<W: Write>(out: &mut W, vm: &ResultsViewModel, theme: &Theme, cols: usize) -> io::Result<Option<usize>> {
    render_header(out, &vm.header, theme, cols)?;
    if let Some(banner) = &vm.banner {
        render_banner(out, banner, theme, cols)?;
    }
    render_border(out, &theme.colors.border, cols)?;

    if let Some(empty) = &vm.empty_state {
        render_empty_state(out, empty, theme, cols)?;
    } else {
        render_rows(out, &vm.rows, theme)?;
    }

    render_border(out, &theme.colors.border, cols)?;
    render_footer(out, &vm.footer, theme, cols)?;
    out.flush()?;

    Ok(vm.last_index())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::SearchSnapshot;
    use crate::domain::SearchRecord;

    fn draw(snapshot: &SearchSnapshot, first: usize) -> (String, Option<usize>) {
        let vm = ResultsViewModel::from_snapshot(snapshot, first, 3);
        let mut frame = Vec::new();
        let last = render(&mut frame, &vm, &Theme::default(), 60).unwrap();
        (String::from_utf8(frame).unwrap(), last)
    }

    #[test]
    fn draws_visible_rows_and_reports_last_index() {
        let snapshot = SearchSnapshot {
            term: "blur".to_string(),
            results: (0..5).map(|i| SearchRecord::new(format!("Track {i}"), "Blur")).collect(),
            offset: 5,
            has_more: true,
            ..Default::default()
        };
        let (frame, last) = draw(&snapshot, 1);

        assert_eq!(last, Some(3));
        assert!(frame.contains("Track 1") && frame.contains("Track 3"));
        assert!(!frame.contains("Track 0") && !frame.contains("Track 4"));
        assert!(frame.contains("blur"));
    }

    #[test]
    fn error_banner_is_drawn() {
        let snapshot = SearchSnapshot {
            term: "x".to_string(),
            error: Some("Network error: refused".to_string()),
            ..Default::default()
        };
        let (frame, last) = draw(&snapshot, 0);

        assert_eq!(last, None);
        assert!(frame.contains("Network error: refused"));
        assert!(!frame.contains("No results"));
    }
}
