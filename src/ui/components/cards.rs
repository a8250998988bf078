//! Book card list renderer.
//!
//! Each card takes two rows:
//!
//! ```text
//! ♥   1342  Pride and Prejudice
//!           Austen, Jane | Love stories, Best Books Ever Listings
//! ```

use crate::ui::helpers::{fit_line, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::BookCard;

/// Rows used by one card.
pub const CARD_HEIGHT: usize = 2;

const INDENT: usize = 10;

/// Number of cards that fit in `max_rows`, leaving a row for the overflow
/// notice when not all of `total` fit.
#[must_use]
pub fn visible_cards(total: usize, max_rows: usize) -> usize {
    let capacity = max_rows / CARD_HEIGHT;
    if total <= capacity {
        total
    } else {
        max_rows.saturating_sub(1) / CARD_HEIGHT
    }
}

/// Renders as many cards as fit in `max_rows` starting at `row`.
///
/// # Returns
///
/// The next available row position.
pub fn render_cards(
    row: usize,
    cards: &[BookCard],
    theme: &Theme,
    cols: usize,
    max_rows: usize,
) -> usize {
    let shown = visible_cards(cards.len(), max_rows);
    let mut current_row = row;

    for card in &cards[..shown] {
        current_row = render_card(current_row, card, theme, cols);
    }

    let hidden = cards.len() - shown;
    if hidden > 0 {
        position_cursor(current_row, 1);
        print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
        print!("{}", fit_line(&format!("... {hidden} more not shown at this height"), cols));
        print!("{}", Theme::reset());
        current_row += 1;
    }

    current_row
}

fn render_card(row: usize, card: &BookCard, theme: &Theme, cols: usize) -> usize {
    let text_width = cols.saturating_sub(INDENT);

    position_cursor(row, 1);
    if card.wishlisted {
        print!("{}\u{2665}", Theme::fg(&theme.colors.wishlist_fg));
    } else {
        print!("{}\u{2661}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{}{:>7}  ", Theme::fg(&theme.colors.text_dim), card.id);
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.title_fg));
    print!("{}", fit_line(&card.title, text_width));
    print!("{}", Theme::reset());

    position_cursor(row + 1, INDENT + 1);
    let authors = fit_line(&card.authors, text_width);
    print!("{}{authors}", Theme::fg(&theme.colors.text_normal));
    let remaining = text_width.saturating_sub(authors.chars().count() + 3);
    if remaining > 0 {
        print!("{} | {}", Theme::fg(&theme.colors.border), Theme::fg(&theme.colors.text_dim));
        print!("{}", fit_line(&card.genres, remaining));
    }
    print!("{}", Theme::reset());

    row + CARD_HEIGHT
}
