//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! browser, along with view model generation. It is the single source of
//! truth for everything the UI shows and is only mutated by
//! [`handle_event`](crate::app::handle_event).
//!
//! # State Components
//!
//! - **Query**: `(page, search, genre)` plus the single cached page
//! - **View Mode**: Home list or wishlist
//! - **Load State**: Idle, loading with a sequence number, ready, or failed
//! - **Wishlist**: Mirror of the persisted identifiers, and the resolved books
//! - **Genre Options**: Genres seen on the last loaded page
//! - **Detail**: Book shown in the detail panel, if open
//!
//! # Example
//!
//! ```rust
//! use shelfwise::app::AppState;
//! use shelfwise::ui::Theme;
//!
//! let state = AppState::new(Theme::default(), 12, 80);
//! let viewmodel = state.compute_viewmodel(24, 100);
//! assert!(viewmodel.cards.is_empty());
//! ```

use super::modes::{LoadState, ViewMode};
use super::query::QueryState;
use crate::domain::{BookId, BookRecord};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BookCard, ControlsInfo, DetailView, EmptyState, FooterInfo, HeaderInfo, Pagination, UIViewModel,
    EMPTY_WISHLIST_MESSAGE, LOAD_ERROR_MESSAGE, NO_RESULTS_MESSAGE,
};

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Active query and the cached page for it.
    pub query: QueryState,

    /// Which list is shown.
    pub view_mode: ViewMode,

    /// Progress of the latest request.
    pub load_state: LoadState,

    /// Wishlisted identifiers in insertion order.
    ///
    /// Mirrors persistent storage; refreshed after every toggle.
    pub wishlist: Vec<BookId>,

    /// Books resolved for the wishlist view.
    ///
    /// Cached-page hits first, then individually fetched records.
    pub wishlist_items: Vec<BookRecord>,

    /// Genre choices derived from the last loaded page.
    pub genre_options: Vec<String>,

    /// Book in the open detail panel.
    pub detail: Option<BookRecord>,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Terminal widths below this use the narrow pagination window.
    pub narrow_width: usize,

    /// Notice shown in the footer until the next command.
    pub status: Option<String>,

    last_seq: u64,
}

impl AppState {
    /// Creates an idle state with an empty query and no data.
    ///
    /// # Parameters
    ///
    /// * `theme` - Color scheme for UI rendering
    /// * `page_size` - Results per catalog page, for page count math
    /// * `narrow_width` - Column threshold for the narrow layout
    #[must_use]
    pub fn new(theme: Theme, page_size: u32, narrow_width: usize) -> Self {
        Self {
            query: QueryState::new(page_size),
            view_mode: ViewMode::Home,
            load_state: LoadState::Idle,
            wishlist: Vec::new(),
            wishlist_items: Vec::new(),
            genre_options: Vec::new(),
            detail: None,
            theme,
            narrow_width,
            status: None,
            last_seq: 0,
        }
    }

    /// Allocates the next request sequence number and marks it as awaited.
    ///
    /// Any response carrying an earlier number is stale from this point on.
    pub fn begin_request(&mut self) -> u64 {
        self.last_seq += 1;
        self.load_state = LoadState::Loading(self.last_seq);
        self.last_seq
    }

    #[must_use]
    pub fn is_wishlisted(&self, id: &BookId) -> bool {
        self.wishlist.contains(id)
    }

    /// Books currently listed in the active view.
    #[must_use]
    pub fn visible_books(&self) -> &[BookRecord] {
        match self.view_mode {
            ViewMode::Home => match self.query.cached() {
                Some(page) => &page.books,
                None => &[],
            },
            ViewMode::Wishlist => &self.wishlist_items,
        }
    }

    /// Finds a book in the active view by identifier.
    #[must_use]
    pub fn find_visible(&self, id: &BookId) -> Option<&BookRecord> {
        self.visible_books().iter().find(|book| &book.key() == id)
    }

    /// Splits the wishlist into books already on the cached page and
    /// identifiers that must be fetched, both in wishlist order.
    #[must_use]
    pub fn partition_wishlist(&self) -> (Vec<BookRecord>, Vec<BookId>) {
        let cached = self.query.cached();
        let mut hits = Vec::new();
        let mut missing = Vec::new();

        for id in &self.wishlist {
            match cached.and_then(|page| page.find(id)) {
                Some(book) => hits.push(book.clone()),
                None => missing.push(id.clone()),
            }
        }

        (hits, missing)
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// # Parameters
    ///
    /// * `rows` - Terminal height in character cells
    /// * `cols` - Terminal width in character cells
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _span = tracing::trace_span!("compute_viewmodel", rows = rows, cols = cols).entered();

        let narrow = cols < self.narrow_width;
        let loading = self.load_state.is_loading();

        let cards = if loading {
            Vec::new()
        } else {
            self.visible_books()
                .iter()
                .map(|book| BookCard::from_record(book, self.is_wishlisted(&book.key())))
                .collect()
        };

        let empty_state = if loading {
            None
        } else {
            self.compute_empty_state(cards.is_empty())
        };

        let pagination = match self.view_mode {
            ViewMode::Home if !loading => self
                .query
                .cached()
                .filter(|_| self.query.total_pages() > 0)
                .map(|_| Pagination::new(self.query.page(), self.query.total_pages(), narrow)),
            _ => None,
        };

        let detail = self
            .detail
            .as_ref()
            .map(|book| DetailView::from_record(book, self.is_wishlisted(&book.key())));

        UIViewModel {
            header: self.compute_header(),
            controls: self.compute_controls(),
            cards,
            pagination,
            detail,
            empty_state,
            loading,
            footer: self.compute_footer(),
        }
    }

    fn compute_empty_state(&self, no_cards: bool) -> Option<EmptyState> {
        match (self.view_mode, self.load_state) {
            (ViewMode::Home, LoadState::Error) => Some(EmptyState {
                message: LOAD_ERROR_MESSAGE.to_string(),
                subtitle: "h: reload".to_string(),
                is_error: true,
            }),
            (ViewMode::Home, LoadState::Ready) if no_cards => Some(EmptyState {
                message: NO_RESULTS_MESSAGE.to_string(),
                subtitle: "Try another search or genre".to_string(),
                is_error: false,
            }),
            (ViewMode::Wishlist, _) if no_cards => Some(EmptyState {
                message: EMPTY_WISHLIST_MESSAGE.to_string(),
                subtitle: "t <id>: add a book from the home list".to_string(),
                is_error: false,
            }),
            _ => None,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = match self.view_mode {
            ViewMode::Home => match self.query.cached() {
                Some(page) => format!(" Shelfwise - Home ({} results) ", page.count),
                None => " Shelfwise - Home ".to_string(),
            },
            ViewMode::Wishlist => format!(" Shelfwise - Wishlist ({}) ", self.wishlist.len()),
        };
        HeaderInfo { title }
    }

    fn compute_controls(&self) -> Option<ControlsInfo> {
        match self.view_mode {
            ViewMode::Home => Some(ControlsInfo {
                search: self.query.query().search.clone(),
                genre: self.query.query().genre.clone(),
                genre_options: self.genre_options.clone(),
            }),
            ViewMode::Wishlist => None,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.detail.is_some() {
            "x: close  t <id>: wishlist  h: home  w: wishlist  q: quit"
        } else {
            match self.view_mode {
                ViewMode::Home => {
                    "/text: search  g <genre>: genre  n/p/<num>: page  d <id>: details  \
                     t <id>: wishlist  w: wishlist  q: quit"
                }
                ViewMode::Wishlist => "d <id>: details  t <id>: wishlist  h: home  q: quit",
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
            status: self.status.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Author, ResultPage};

    fn state_with_page(count: u64, books: Vec<BookRecord>) -> AppState {
        let mut state = AppState::new(Theme::default(), 12, 80);
        let page = ResultPage::new(state.query.query().clone(), count, books);
        state.query.store(page);
        state.load_state = LoadState::Ready;
        state
    }

    #[test]
    fn begin_request_increments_sequence() {
        let mut state = AppState::new(Theme::default(), 12, 80);
        let first = state.begin_request();
        let second = state.begin_request();

        assert!(second > first);
        assert!(state.load_state.awaits(second));
        assert!(!state.load_state.awaits(first));
    }

    #[test]
    fn viewmodel_for_loaded_page() {
        let mut book = BookRecord::new(42, "Pride and Prejudice");
        book.authors = vec![Author::new("Austen, Jane")];
        let mut state = state_with_page(120, vec![book]);
        state.wishlist = vec![BookId::from(42)];

        let vm = state.compute_viewmodel(40, 120);

        assert_eq!(vm.cards.len(), 1);
        assert!(vm.cards[0].wishlisted);
        assert_eq!(vm.cards[0].authors, "Austen, Jane");
        let pagination = vm.pagination.unwrap();
        assert_eq!(pagination.numbers(), vec![1, 2, 3, 4, 5]);
        assert!(!pagination.previous.enabled);
        assert!(pagination.next.enabled);
        assert_eq!(pagination.total_pages, 10);
        assert!(vm.empty_state.is_none());
        assert!(vm.header.title.contains("120 results"));
    }

    #[test]
    fn narrow_viewport_uses_three_buttons() {
        let state = state_with_page(120, vec![BookRecord::new(1, "One")]);
        let vm = state.compute_viewmodel(40, 60);
        assert_eq!(vm.pagination.unwrap().numbers(), vec![1, 2, 3]);
    }

    #[test]
    fn empty_results_show_message() {
        let state = state_with_page(0, vec![]);
        let vm = state.compute_viewmodel(40, 120);

        assert_eq!(vm.empty_state.unwrap().message, "No books found");
        assert!(vm.pagination.is_none());
    }

    #[test]
    fn error_state_shows_fixed_message() {
        let mut state = AppState::new(Theme::default(), 12, 80);
        state.load_state = LoadState::Error;

        let empty = state.compute_viewmodel(40, 120).empty_state.unwrap();
        assert_eq!(empty.message, "Error loading books. Please try again later.");
        assert!(empty.is_error);
    }

    #[test]
    fn loading_hides_cards() {
        let mut state = state_with_page(5, vec![BookRecord::new(1, "One")]);
        state.begin_request();

        let vm = state.compute_viewmodel(40, 120);
        assert!(vm.loading);
        assert!(vm.cards.is_empty());
        assert!(vm.empty_state.is_none());
    }

    #[test]
    fn empty_wishlist_view() {
        let mut state = AppState::new(Theme::default(), 12, 80);
        state.view_mode = ViewMode::Wishlist;
        state.load_state = LoadState::Ready;

        let vm = state.compute_viewmodel(40, 120);
        assert_eq!(vm.empty_state.unwrap().message, "No books in your wishlist.");
        assert!(vm.controls.is_none());
        assert!(vm.pagination.is_none());
    }

    #[test]
    fn partition_uses_cached_page() {
        let mut state = state_with_page(2, vec![BookRecord::new(42, "Cached")]);
        state.wishlist = vec![BookId::from(99), BookId::from(42)];

        let (hits, missing) = state.partition_wishlist();

        assert_eq!(hits.iter().map(|b| b.id).collect::<Vec<_>>(), vec![42]);
        assert_eq!(missing, vec![BookId::from(99)]);
    }
}
