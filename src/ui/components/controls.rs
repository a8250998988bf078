//! Search and genre controls.

use crate::ui::helpers::{fit_line, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ControlsInfo;

/// Rows occupied by the controls block.
pub const CONTROLS_HEIGHT: usize = 2;

/// Renders the active search and genre, then the genres available on the
/// current page.
///
/// Always occupies [`CONTROLS_HEIGHT`] rows so the layout below stays fixed.
pub fn render_controls(row: usize, controls: &ControlsInfo, theme: &Theme, cols: usize) -> usize {
    let search: &str = if controls.search.is_empty() { "-" } else { &controls.search };
    let genre: &str = if controls.genre.is_empty() { "All Genres" } else { &controls.genre };

    let value_width = cols.saturating_sub(20) / 2;

    position_cursor(row, 1);
    print!("{}Search: {}", Theme::fg(&theme.colors.label_fg), Theme::reset());
    print!("{}{}", Theme::fg(&theme.colors.text_normal), fit_line(search, value_width));
    print!("   {}Genre: {}", Theme::fg(&theme.colors.label_fg), Theme::reset());
    print!("{}{}", Theme::fg(&theme.colors.text_normal), fit_line(genre, value_width));
    print!("{}", Theme::reset());

    let options = if controls.genre_options.is_empty() {
        String::new()
    } else {
        format!("Genres: {}", controls.genre_options.join(", "))
    };

    position_cursor(row + 1, 1);
    print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    print!("{}", fit_line(&options, cols));
    print!("{}", Theme::reset());

    row + CONTROLS_HEIGHT
}
