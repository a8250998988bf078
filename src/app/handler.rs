//! State transitions for every event the browser receives.
//!
//! Command lines from stdin and completions from worker tasks arrive as
//! [`Event`]s. [`handle_event`] applies each one to [`AppState`] and hands back
//! the side effects it implies as [`Action`]s; it never performs I/O itself.
//!
//! Network actions carry a sequence number from [`AppState::begin_request`];
//! a completion whose number is no longer awaited is dropped untouched.
//!
//! ```rust
//! use shelfwise::app::{handle_event, Action, AppState, Event};
//! use shelfwise::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default(), 12, 80);
//! let (render, actions) = handle_event(&mut state, &Event::SearchInput("whale".into()))?;
//! assert!(render);
//! assert!(matches!(actions[0], Action::FetchPage { .. }));
//! # Ok::<(), shelfwise::ShelfError>(())
//! ```

use super::modes::{LoadState, ViewMode};
use super::query::QueryState;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{BookId, BookRecord, CatalogError, ResultPage};
use crate::storage::Preferences;

/// Events triggered by user commands or completed background work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Startup with persisted state. Triggers the first page fetch.
    Init {
        /// Search text and genre from the last session.
        preferences: Preferences,
        /// Persisted wishlist.
        wishlist: Vec<BookId>,
    },

    /// Replaces the search text and reloads from page 1.
    SearchInput(String),
    /// Replaces the genre filter and reloads from page 1. Empty means all genres.
    GenreSelected(String),
    /// Jumps to a page of the current results.
    GoToPage(u32),
    /// Moves one page forward.
    NextPage,
    /// Moves one page back.
    PrevPage,

    /// Shows the paginated results, fetching only if the cache is cold.
    ShowHome,
    /// Shows wishlisted books.
    ShowWishlist,
    /// Opens the detail panel for a listed book.
    ShowDetails(BookId),
    /// Closes the detail panel.
    CloseDetails,

    /// Adds or removes a book from the wishlist.
    ToggleWishlist(BookId),

    /// Terminal size changed or a redraw was requested.
    Resize,
    /// Exits the browser.
    Quit,

    /// A command line could not be understood.
    InvalidCommand(String),

    /// A page fetch finished.
    PageLoaded {
        /// Sequence number from the originating [`Action::FetchPage`].
        seq: u64,
        /// Fetched page or the failure.
        result: std::result::Result<ResultPage, CatalogError>,
    },

    /// Per-identifier wishlist lookups finished. Failures are already omitted.
    WishlistResolved {
        /// Sequence number from the originating [`Action::ResolveWishlist`].
        seq: u64,
        /// Books found, in wishlist order.
        books: Vec<BookRecord>,
    },

    /// The persisted wishlist changed.
    WishlistUpdated {
        /// Wishlist after the change.
        ids: Vec<BookId>,
    },

    /// A storage read or write failed.
    StorageFailed {
        /// Error description.
        message: String,
    },
}

impl Event {
    /// Returns `true` for events that originate from the user.
    #[must_use]
    pub const fn is_user_input(&self) -> bool {
        !matches!(
            self,
            Self::PageLoaded { .. }
                | Self::WishlistResolved { .. }
                | Self::WishlistUpdated { .. }
                | Self::StorageFailed { .. }
        )
    }
}

/// Applies `event` to `state`.
///
/// Returns whether the screen needs a redraw, plus the actions to run in order.
///
/// # Errors
///
/// None of the current transitions fail; the `Result` keeps the loop's `?` in place.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    if event.is_user_input() {
        state.status = None;
    }

    match event {
        Event::Init { preferences, wishlist } => {
            tracing::debug!(
                search = %preferences.search,
                genre = %preferences.genre,
                wishlist_size = wishlist.len(),
                "initializing from persisted state"
            );
            state.query = QueryState::with_preferences(
                preferences.search.clone(),
                preferences.genre.clone(),
                state.query.page_size(),
            );
            state.wishlist.clone_from(wishlist);
            state.view_mode = ViewMode::Home;
            Ok((true, vec![start_page_fetch(state)]))
        }
        Event::SearchInput(text) => {
            state.query.set_search(text.clone());
            Ok((true, query_changed(state)))
        }
        Event::GenreSelected(genre) => {
            state.query.set_genre(genre.clone());
            Ok((true, query_changed(state)))
        }
        Event::GoToPage(page) => Ok(go_to_page(state, *page)),
        Event::NextPage => {
            let target = state.query.page().saturating_add(1);
            Ok(go_to_page(state, target))
        }
        Event::PrevPage => {
            if state.query.page() <= 1 {
                return Ok((false, vec![]));
            }
            let target = state.query.page() - 1;
            Ok(go_to_page(state, target))
        }
        Event::ShowHome => {
            state.view_mode = ViewMode::Home;
            state.detail = None;

            if state.query.cached().is_some() {
                tracing::debug!("home rendered from cache");
                state.load_state = LoadState::Ready;
                Ok((true, vec![]))
            } else {
                Ok((true, vec![start_page_fetch(state)]))
            }
        }
        Event::ShowWishlist => {
            state.view_mode = ViewMode::Wishlist;
            state.detail = None;

            let (hits, missing) = state.partition_wishlist();
            tracing::debug!(
                cached = hits.len(),
                missing = missing.len(),
                "resolving wishlist"
            );
            state.wishlist_items = hits;

            if missing.is_empty() {
                state.load_state = LoadState::Ready;
                Ok((true, vec![]))
            } else {
                let seq = state.begin_request();
                Ok((true, vec![Action::ResolveWishlist { seq, ids: missing }]))
            }
        }
        Event::ShowDetails(id) => {
            if let Some(book) = state.find_visible(id).cloned() {
                tracing::debug!(book_id = %id, "opening details");
                state.detail = Some(book);
            } else {
                tracing::debug!(book_id = %id, "details requested for book not in view");
                state.status = Some(format!("Book {id} is not in the current list"));
            }
            Ok((true, vec![]))
        }
        Event::CloseDetails => {
            let was_open = state.detail.take().is_some();
            Ok((was_open, vec![]))
        }
        Event::ToggleWishlist(id) => Ok((false, vec![Action::ToggleWishlist(id.clone())])),
        Event::WishlistUpdated { ids } => {
            tracing::debug!(wishlist_size = ids.len(), "wishlist updated");
            state.wishlist.clone_from(ids);
            Ok((true, vec![]))
        }
        Event::Resize => Ok((true, vec![])),
        Event::Quit => Ok((false, vec![Action::Quit])),
        Event::InvalidCommand(message) => {
            state.status = Some(message.clone());
            Ok((true, vec![]))
        }
        Event::PageLoaded { seq, result } => {
            if !state.load_state.awaits(*seq) {
                tracing::debug!(
                    seq = seq,
                    load_state = ?state.load_state,
                    "discarding stale page response"
                );
                return Ok((false, vec![]));
            }

            match result {
                Ok(page) => {
                    let genres = page.genres();
                    if state.query.store(page.clone()) {
                        state.genre_options = genres;
                    }
                    state.load_state = LoadState::Ready;
                    tracing::debug!(
                        seq = seq,
                        count = page.count,
                        books = page.books.len(),
                        "page loaded"
                    );
                }
                Err(e) => {
                    tracing::error!(seq = seq, error = %e, "page fetch failed");
                    state.load_state = LoadState::Error;
                }
            }
            Ok((true, vec![]))
        }
        Event::WishlistResolved { seq, books } => {
            if !state.load_state.awaits(*seq) {
                tracing::debug!(seq = seq, "discarding stale wishlist resolution");
                return Ok((false, vec![]));
            }

            tracing::debug!(seq = seq, fetched = books.len(), "wishlist resolved");
            state.wishlist_items.extend(books.iter().cloned());
            state.load_state = LoadState::Ready;
            Ok((true, vec![]))
        }
        Event::StorageFailed { message } => {
            tracing::warn!(error = %message, "storage operation failed");
            state.status = Some(format!("Storage error: {message}"));
            Ok((true, vec![]))
        }
    }
}

fn start_page_fetch(state: &mut AppState) -> Action {
    state.query.invalidate();
    let seq = state.begin_request();
    Action::FetchPage {
        seq,
        query: state.query.query().clone(),
    }
}

fn query_changed(state: &mut AppState) -> Vec<Action> {
    state.view_mode = ViewMode::Home;
    state.detail = None;

    let query = state.query.query();
    let preferences = Preferences::new(query.search.clone(), query.genre.clone());

    vec![start_page_fetch(state), Action::SavePreferences(preferences)]
}

fn go_to_page(state: &mut AppState, page: u32) -> (bool, Vec<Action>) {
    if state.view_mode != ViewMode::Home {
        state.status = Some("Pages are only available on the home list".to_string());
        return (true, vec![]);
    }

    if page == state.query.page() {
        return (false, vec![]);
    }

    if !state.query.set_page(page) {
        state.status = Some(format!("Page {page} is out of range"));
        return (true, vec![]);
    }

    state.detail = None;
    (true, vec![start_page_fetch(state)])
}
