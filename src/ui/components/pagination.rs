//! Pagination bar renderer.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{PageButton, Pagination};

/// Renders Previous, the numbered window, Next, and a page counter on one row.
///
/// ```text
/// < Previous   1  [2]  3  4  5   Next >    page 2 of 10
/// ```
pub fn render_pagination(row: usize, pagination: &Pagination, theme: &Theme) -> usize {
    position_cursor(row, 1);

    render_button(&pagination.previous, &format!("< {}", pagination.previous.label), theme);
    print!("  ");

    for button in &pagination.pages {
        print!(" ");
        if button.current {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.page_current_fg));
            print!("{}", Theme::bg(&theme.colors.page_current_bg));
            print!("[{}]", button.label);
            print!("{}", Theme::reset());
        } else {
            render_button(button, &format!(" {} ", button.label), theme);
        }
    }

    print!("   ");
    render_button(&pagination.next, &format!("{} >", pagination.next.label), theme);

    let current = pagination
        .pages
        .iter()
        .find(|button| button.current)
        .map_or(0, |button| button.target);
    print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    print!("    page {current} of {}", pagination.total_pages);
    print!("{}", Theme::reset());

    row + 1
}

fn render_button(button: &PageButton, text: &str, theme: &Theme) {
    let color = if button.enabled {
        &theme.colors.text_normal
    } else {
        &theme.colors.disabled_fg
    };
    print!("{}{text}{}", Theme::fg(color), Theme::reset());
}
