//! Detail panel renderer.
//!
//! Shows the full record of one book in place of the card list. Long fields
//! wrap instead of being cut.

use crate::ui::helpers::{fit_line, position_cursor, wrap};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailView;

const LABEL_WIDTH: usize = 10;

/// Renders the detail panel in at most `max_rows` rows starting at `row`.
///
/// # Returns
///
/// The next available row position.
pub fn render_details(
    row: usize,
    detail: &DetailView,
    theme: &Theme,
    cols: usize,
    max_rows: usize,
) -> usize {
    let end = row + max_rows;
    let mut lines: Vec<(&str, String)> = Vec::new();

    let value_width = cols.saturating_sub(LABEL_WIDTH);
    let mut push_field = |label: &'static str, value: &str| {
        for (i, line) in wrap(value, value_width).into_iter().enumerate() {
            lines.push((if i == 0 { label } else { "" }, line));
        }
    };

    push_field("ID", &detail.id.to_string());
    push_field("Author", &detail.author);
    push_field("Genres", &detail.genres);
    push_field("Subjects", &detail.subjects);
    push_field("Cover", &detail.cover_url);
    push_field("Wishlist", if detail.wishlisted { "\u{2665} yes" } else { "no" });

    let mut current_row = row;
    for title_line in wrap(&detail.title, cols) {
        if current_row >= end {
            return current_row;
        }
        position_cursor(current_row, 1);
        print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.title_fg));
        print!("{}", fit_line(&title_line, cols));
        print!("{}", Theme::reset());
        current_row += 1;
    }
    current_row += 1;

    for (label, value) in lines {
        if current_row >= end {
            break;
        }
        position_cursor(current_row, 1);
        print!("{}{:<width$}", Theme::fg(&theme.colors.label_fg), label, width = LABEL_WIDTH);
        print!("{}{value}", Theme::fg(&theme.colors.text_normal));
        print!("{}", Theme::reset());
        current_row += 1;
    }

    current_row
}
