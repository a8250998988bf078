//! Title bar.

use crate::ui::helpers::{center_padding, fit_line, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Draws the centered, full-width title bar on `row` and returns the row below it.
///
/// ```text
///           Shelfwise - Home (120 results)
/// ```
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title = fit_line(&header.title, cols);
    let left = center_padding(&title, cols);
    let right = cols.saturating_sub(left + title.chars().count());

    let fill = theme.colors.header_bg.as_deref().map(Theme::bg).unwrap_or_default();

    position_cursor(row, 1);
    print!(
        "{}{}{fill}{}{title}{}{}",
        Theme::bold(),
        Theme::fg(&theme.colors.header_fg),
        " ".repeat(left),
        " ".repeat(right),
        Theme::reset()
    );
    row + 1
}
