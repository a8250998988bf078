//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for different UI
//! elements. Each component draws one part of the screen starting at a given
//! row and returns the next free row.
//!
//! # Components
//!
//! - [`header`]: Title bar with view name and result count
//! - [`controls`]: Active search and genre, plus genre choices
//! - [`cards`]: Two-row book cards
//! - [`details`]: Full record panel
//! - [`pagination`]: Previous / numbered window / Next
//! - [`empty`]: Empty state message and loading indicator
//! - [`footer`]: Command hints, status notice and prompt

pub mod cards;
pub mod controls;
pub mod details;
pub mod empty;
pub mod footer;
pub mod header;
pub mod pagination;

pub use cards::render_cards;
pub use controls::render_controls;
pub use details::render_details;
pub use empty::{render_empty_state, render_loading};
pub use footer::{render_footer, render_prompt};
pub use header::render_header;
pub use pagination::render_pagination;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "\u{2500}".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}
