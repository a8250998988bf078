//! Empty state and loading indicator renderers.
//!
//! Both replace the card list: the empty state when a loaded view has nothing
//! to show or the last fetch failed, the loading line while a request is out.

use crate::ui::helpers::{center_padding, fit_line, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty state message starting at `row`.
///
/// # Layout
///
/// ```text
/// [left padding] MESSAGE [right padding]
/// [left padding] subtitle [right padding]
/// ```
///
/// Both lines are horizontally centered. The message uses `error_fg` for load
/// failures and `empty_state_fg` otherwise; the subtitle is dimmed.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let color = if empty.is_error {
        &theme.colors.error_fg
    } else {
        &theme.colors.empty_state_fg
    };

    let row = render_centered(row, &empty.message, &Theme::fg(color), cols);
    let style = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    render_centered(row, &empty.subtitle, &style, cols)
}

/// Renders the loading indicator at `row`.
pub fn render_loading(row: usize, theme: &Theme, cols: usize) -> usize {
    render_centered(row, "Loading...", &Theme::fg(&theme.colors.loading_fg), cols)
}

fn render_centered(row: usize, text: &str, style: &str, cols: usize) -> usize {
    let text = fit_line(text, cols);
    let len = text.chars().count();
    let padding = center_padding(&text, cols);

    position_cursor(row, 1);
    print!("{style}");
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
    print!("{}", Theme::reset());
    row + 1
}
