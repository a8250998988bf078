//! Shared rendering utilities and helpers.
//!
//! Cursor positioning, character-safe truncation, line fitting, and the
//! pagination window calculation used by the view model.
//!
//! # Example
//!
//! ```rust
//! use shelfwise::ui::helpers::{page_window, truncate};
//!
//! assert_eq!(truncate("Pride and Prejudice", 5), "Pride...");
//! assert_eq!(page_window(1, 10, 5).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
//! ```

use std::ops::RangeInclusive;

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Clears the screen and homes the cursor.
pub fn clear_screen() {
    print!("\u{1b}[2J\u{1b}[H");
}

/// Cuts `text` to its first `max` characters and appends `...`.
///
/// Text of `max` characters or fewer is returned unchanged. Counts characters,
/// not bytes, so multi-byte titles are never split mid-character.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

/// Fits `text` into `width` display columns for a single terminal line.
///
/// Longer text is cut and ends in `...`; shorter text is returned as-is.
#[must_use]
pub fn fit_line(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }
    truncate(text, width - 3)
}

/// Word-wraps `text` into lines of at most `width` characters.
///
/// Words longer than `width` are split. Always returns at least one line.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        if word.is_empty() {
            continue;
        }

        let needed = if current_len == 0 { word.len() } else { current_len + 1 + word.len() };
        if needed > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Left padding that centers `text` in `cols` columns.
#[must_use]
pub fn center_padding(text: &str, cols: usize) -> usize {
    cols.saturating_sub(text.chars().count()) / 2
}

/// Pages to show as numbered buttons.
///
/// Up to `max_buttons` pages, centered on `current` and clamped to
/// `1..=total_pages`. Empty when `total_pages` is 0.
///
/// ```text
/// start = max(1, current - max/2)
/// end   = min(total, start + max - 1)
/// if end - start < max - 1: start = max(1, end - max + 1)
/// ```
#[must_use]
pub fn page_window(current: u32, total_pages: u32, max_buttons: u32) -> RangeInclusive<u32> {
    if total_pages == 0 || max_buttons == 0 {
        return 1..=0;
    }

    let mut start = current.saturating_sub(max_buttons / 2).max(1);
    let end = total_pages.min(start.saturating_add(max_buttons - 1));

    if end.saturating_sub(start) < max_buttons - 1 {
        start = (end + 1).saturating_sub(max_buttons).max(1);
    }

    start..=end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("Emma", 30), "Emma");
        assert_eq!(truncate(&"x".repeat(30), 30), "x".repeat(30));
    }

    #[test]
    fn truncate_cuts_at_character_boundary() {
        let title = "Les Misérables: Tome I—Fantine, étude complète";
        let cut = truncate(title, 30);

        assert_eq!(cut.chars().count(), 33);
        assert!(cut.ends_with("..."));
        assert!(title.starts_with(cut.trim_end_matches("...")));
    }

    #[test]
    fn fit_line_respects_width() {
        assert_eq!(fit_line("hello", 10), "hello");
        assert_eq!(fit_line("hello world", 8), "hello...");
        assert_eq!(fit_line("hello", 2), "he");
    }

    #[test]
    fn wrap_breaks_on_words() {
        assert_eq!(
            wrap("Whales -- Fiction, Sea stories, Adventure stories", 20),
            vec!["Whales -- Fiction,", "Sea stories,", "Adventure stories"]
        );
    }

    #[test]
    fn wrap_splits_long_words_and_handles_empty() {
        assert_eq!(wrap("abcdefghij xy", 4), vec!["abcd", "efgh", "ij", "xy"]);
        assert_eq!(wrap("", 10), vec![String::new()]);
    }

    #[test]
    fn centering() {
        assert_eq!(center_padding("abcd", 10), 3);
        assert_eq!(center_padding("too long for it", 4), 0);
    }

    #[test]
    fn window_at_start() {
        assert_eq!(page_window(1, 10, 5), 1..=5);
        assert_eq!(page_window(2, 10, 3), 1..=3);
    }

    #[test]
    fn window_in_middle() {
        assert_eq!(page_window(5, 10, 5), 3..=7);
        assert_eq!(page_window(5, 10, 3), 4..=6);
    }

    #[test]
    fn window_at_end_shifts_left() {
        assert_eq!(page_window(10, 10, 5), 6..=10);
        assert_eq!(page_window(9, 10, 5), 6..=10);
    }

    #[test]
    fn window_with_few_pages() {
        assert_eq!(page_window(1, 2, 5), 1..=2);
        assert_eq!(page_window(2, 2, 5), 1..=2);
        assert!(page_window(1, 0, 5).is_empty());
    }
}
