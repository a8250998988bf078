//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state,
//! following the MVVM pattern. View models are optimized for rendering and
//! contain pre-formatted display text: truncated titles, joined author and
//! genre lists with their fallbacks, and the pagination window.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data.
//!
//! # Example
//!
//! ```rust
//! use shelfwise::domain::BookRecord;
//! use shelfwise::ui::viewmodel::BookCard;
//!
//! let card = BookCard::from_record(&BookRecord::new(84, "Frankenstein"), true);
//! assert_eq!(card.authors, "Unknown");
//! assert_eq!(card.genres, "N/A");
//! assert!(card.wishlisted);
//! ```

use crate::domain::BookRecord;
use crate::ui::helpers::{page_window, truncate};

/// Maximum title length on a book card before truncation.
pub const CARD_TITLE_MAX: usize = 30;

/// Maximum joined-genre length on a book card before truncation.
pub const CARD_GENRES_MAX: usize = 50;

/// Shown when a book has no authors.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Shown when a book has no genres or subjects.
pub const NOT_AVAILABLE: &str = "N/A";

/// Shown instead of results when a page fetch fails.
pub const LOAD_ERROR_MESSAGE: &str = "Error loading books. Please try again later.";

/// Shown when a page fetch succeeds with zero results.
pub const NO_RESULTS_MESSAGE: &str = "No books found";

/// Shown when the wishlist view has nothing to display.
pub const EMPTY_WISHLIST_MESSAGE: &str = "No books in your wishlist.";

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Header information (title, result count).
    pub header: HeaderInfo,

    /// Search and genre controls. `None` in the wishlist view.
    pub controls: Option<ControlsInfo>,

    /// Book cards in display order.
    pub cards: Vec<BookCard>,

    /// Pagination controls. `None` in the wishlist view or before a page loads.
    pub pagination: Option<Pagination>,

    /// Open detail panel, drawn over the card list.
    pub detail: Option<DetailView>,

    /// Message shown in place of cards (no results, empty wishlist, error).
    pub empty_state: Option<EmptyState>,

    /// Whether a request is outstanding.
    pub loading: bool,

    /// Footer information (keybindings, help text).
    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Search text, selected genre, and the genre choices from the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlsInfo {
    pub search: String,
    pub genre: String,
    pub genre_options: Vec<String>,
}

/// One book in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookCard {
    pub id: u64,
    /// Title, truncated to [`CARD_TITLE_MAX`] characters plus `...`.
    pub title: String,
    /// All author names joined with `, `, or [`UNKNOWN_AUTHOR`].
    pub authors: String,
    /// Genres joined with `, ` and truncated to [`CARD_GENRES_MAX`], or [`NOT_AVAILABLE`].
    pub genres: String,
    pub wishlisted: bool,
    pub cover_url: String,
}

impl BookCard {
    #[must_use]
    pub fn from_record(book: &BookRecord, wishlisted: bool) -> Self {
        let authors = book.author_names();
        let authors = if authors.is_empty() {
            UNKNOWN_AUTHOR.to_string()
        } else {
            authors.join(", ")
        };

        let genres = if book.bookshelves.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            truncate(&book.bookshelves.join(", "), CARD_GENRES_MAX)
        };

        Self {
            id: book.id,
            title: truncate(&book.title, CARD_TITLE_MAX),
            authors,
            genres,
            wishlisted,
            cover_url: book.cover_url().to_string(),
        }
    }
}

/// Full record shown in the detail panel. Nothing is truncated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub id: u64,
    pub title: String,
    /// First author only, or [`UNKNOWN_AUTHOR`].
    pub author: String,
    pub genres: String,
    pub subjects: String,
    pub cover_url: String,
    pub wishlisted: bool,
}

impl DetailView {
    #[must_use]
    pub fn from_record(book: &BookRecord, wishlisted: bool) -> Self {
        let join_or_na = |items: &[String]| {
            if items.is_empty() {
                NOT_AVAILABLE.to_string()
            } else {
                items.join(", ")
            }
        };

        Self {
            id: book.id,
            title: book.title.clone(),
            author: book.first_author().unwrap_or(UNKNOWN_AUTHOR).to_string(),
            genres: join_or_na(&book.bookshelves),
            subjects: join_or_na(&book.subjects),
            cover_url: book.cover_url().to_string(),
            wishlisted,
        }
    }
}

/// One pagination control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageButton {
    pub label: String,
    /// Page this button navigates to.
    pub target: u32,
    pub enabled: bool,
    /// Marks the button for the page being shown.
    pub current: bool,
}

/// Previous button, a window of numbered pages, and a Next button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub previous: PageButton,
    pub pages: Vec<PageButton>,
    pub next: PageButton,
    pub total_pages: u32,
}

impl Pagination {
    /// Builds controls for `current` of `total_pages`.
    ///
    /// The numbered window holds 3 pages when `narrow` and 5 otherwise. The
    /// current page's button is disabled, Previous is disabled on page 1, and
    /// Next is disabled on or past the last page.
    #[must_use]
    pub fn new(current: u32, total_pages: u32, narrow: bool) -> Self {
        let max_buttons = if narrow { 3 } else { 5 };

        let pages = page_window(current, total_pages, max_buttons)
            .map(|page| PageButton {
                label: page.to_string(),
                target: page,
                enabled: page != current,
                current: page == current,
            })
            .collect();

        Self {
            previous: PageButton {
                label: "Previous".to_string(),
                target: current.saturating_sub(1),
                enabled: current > 1,
                current: false,
            },
            pages,
            next: PageButton {
                label: "Next".to_string(),
                target: current.saturating_add(1),
                enabled: current < total_pages,
                current: false,
            },
            total_pages,
        }
    }

    /// Page numbers in the window, in order.
    #[must_use]
    pub fn numbers(&self) -> Vec<u32> {
        self.pages.iter().map(|button| button.target).collect()
    }
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Command help text.
    pub keybindings: String,

    /// One-off notice from the last command (bad input, storage failure).
    pub status: Option<String>,
}

/// Message displayed in place of the card list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No books found").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,

    /// Rendered with the error color when set.
    pub is_error: bool,
}
