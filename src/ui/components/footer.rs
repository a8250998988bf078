//! Footer component renderer.
//!
//! This module renders the help bar with centered command hints, or the status
//! notice left by the last command.

use crate::ui::helpers::{center_padding, fit_line, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer at the specified row.
///
/// A status notice takes the place of the command hints and is drawn in the
/// error color. Text wider than the terminal is truncated.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let (text, color) = match &footer.status {
        Some(status) => (status.as_str(), &theme.colors.error_fg),
        None => (footer.keybindings.as_str(), &theme.colors.text_dim),
    };

    let text = fit_line(text, cols);
    let text_len = text.chars().count();
    let padding = center_padding(&text, cols);

    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the command prompt and leaves the cursor after it.
pub fn render_prompt(row: usize, theme: &Theme) {
    position_cursor(row, 1);
    print!("{}> {}", Theme::fg(&theme.colors.label_fg), Theme::reset());
}
