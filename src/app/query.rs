//! Query state and the single-slot result cache.
//!
//! [`QueryState`] owns the `(page, search, genre)` tuple and the one cached
//! [`ResultPage`]. Every mutation that changes what would be fetched clears the
//! cache, and a stored page is only served back while the query that produced
//! it is still current. No I/O happens here.

use crate::domain::{total_pages, Query, ResultPage};

/// Active query plus the cached page for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    query: Query,
    cache: Option<ResultPage>,
    last_count: Option<u64>,
    page_size: u32,
}

impl QueryState {
    /// Creates a state on page 1 with empty search and genre.
    #[must_use]
    pub fn new(page_size: u32) -> Self {
        Self {
            query: Query::default(),
            cache: None,
            last_count: None,
            page_size,
        }
    }

    /// Creates a state on page 1 seeded with persisted search and genre.
    #[must_use]
    pub fn with_preferences(
        search: impl Into<String>,
        genre: impl Into<String>,
        page_size: u32,
    ) -> Self {
        Self {
            query: Query::new(1, search, genre),
            ..Self::new(page_size)
        }
    }

    #[must_use]
    pub const fn query(&self) -> &Query {
        &self.query
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        self.query.page
    }

    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Cached page for the current query, if any.
    #[must_use]
    pub fn cached(&self) -> Option<&ResultPage> {
        self.cache.as_ref().filter(|page| page.query == self.query)
    }

    /// Total result count reported for the current search and genre.
    ///
    /// Kept across page changes so bounds can still be checked while the next
    /// page loads; cleared when the search or genre changes.
    #[must_use]
    pub const fn last_count(&self) -> Option<u64> {
        self.last_count
    }

    /// Number of pages implied by [`last_count`](Self::last_count), 0 if unknown.
    #[must_use]
    pub fn total_pages(&self) -> u32 {
        self.last_count.map_or(0, |count| total_pages(count, self.page_size))
    }

    /// Sets the search text, returns to page 1, and clears the cache.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.query.search = text.into();
        self.restart();
    }

    /// Sets the genre, returns to page 1, and clears the cache.
    pub fn set_genre(&mut self, genre: impl Into<String>) {
        self.query.genre = genre.into();
        self.restart();
    }

    /// A different result set: the old count no longer bounds paging.
    fn restart(&mut self) {
        self.query.page = 1;
        self.last_count = None;
        self.invalidate();
    }

    /// Moves to page `n`.
    ///
    /// Returns `false` without touching anything when `n` is the current page,
    /// below 1, or beyond the last page of the last known result count.
    pub fn set_page(&mut self, n: u32) -> bool {
        if n == self.query.page {
            return false;
        }
        if n < 1 || n > self.total_pages() {
            tracing::debug!(requested = n, total_pages = self.total_pages(), "page out of range");
            return false;
        }

        self.query.page = n;
        self.invalidate();
        true
    }

    /// Clears the cache unconditionally.
    pub fn invalidate(&mut self) {
        self.cache = None;
    }

    /// Stores `page` if it was produced by the current query.
    ///
    /// Returns `false` and drops the page when the query has moved on.
    pub fn store(&mut self, page: ResultPage) -> bool {
        if page.query != self.query {
            tracing::debug!(
                page_query = ?page.query,
                current = ?self.query,
                "dropping page for stale query"
            );
            return false;
        }

        self.last_count = Some(page.count);
        self.cache = Some(page);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BookRecord;

    fn loaded(count: u64) -> QueryState {
        let mut state = QueryState::new(12);
        let page = ResultPage::new(state.query().clone(), count, vec![BookRecord::new(1, "One")]);
        assert!(state.store(page));
        state
    }

    #[test]
    fn store_fills_cache_for_current_query() {
        let state = loaded(120);
        assert!(state.cached().is_some());
        assert_eq!(state.total_pages(), 10);
    }

    #[test]
    fn mutations_clear_cache() {
        let mut state = loaded(120);
        state.set_search("whale");
        assert!(state.cached().is_none());

        let mut state = loaded(120);
        state.set_genre("Horror");
        assert!(state.cached().is_none());

        let mut state = loaded(120);
        assert!(state.set_page(2));
        assert!(state.cached().is_none());

        let mut state = loaded(120);
        state.invalidate();
        assert!(state.cached().is_none());
    }

    #[test]
    fn search_and_genre_reset_page() {
        let mut state = loaded(120);
        assert!(state.set_page(4));

        state.set_search("whale");
        assert_eq!(state.page(), 1);

        assert!(state.set_page(3));
        state.set_genre("Adventure");
        assert_eq!(state.page(), 1);
        assert_eq!(state.query().genre, "Adventure");
    }

    #[test]
    fn set_current_page_is_noop() {
        let mut state = loaded(120);
        let before = state.clone();

        assert!(!state.set_page(1));
        assert_eq!(state, before);
        assert!(state.cached().is_some());
    }

    #[test]
    fn out_of_range_pages_are_rejected() {
        let mut state = loaded(120);
        let before = state.clone();

        assert!(!state.set_page(0));
        assert!(!state.set_page(11));
        assert_eq!(state, before);

        assert!(state.set_page(10));
        assert_eq!(state.page(), 10);
    }

    #[test]
    fn query_change_forgets_previous_count() {
        let mut state = loaded(120);
        state.set_search("zzzz-no-such-book");
        assert_eq!(state.last_count(), None);
        assert!(!state.set_page(7));
        assert_eq!(state.page(), 1);

        let mut state = loaded(120);
        state.set_genre("Poetry");
        assert_eq!(state.total_pages(), 0);
        assert!(!state.set_page(2));
    }

    #[test]
    fn page_change_keeps_count() {
        let mut state = loaded(120);
        assert!(state.set_page(3));
        assert_eq!(state.last_count(), Some(120));
        assert!(state.set_page(10));
    }

    #[test]
    fn pages_rejected_before_first_load() {
        let mut state = QueryState::new(12);
        assert!(!state.set_page(2));
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn stale_page_is_not_stored() {
        let mut state = QueryState::new(12);
        let stale = ResultPage::new(Query::new(1, "old", ""), 5, vec![]);
        state.set_search("new");

        assert!(!state.store(stale));
        assert!(state.cached().is_none());
        assert_eq!(state.last_count(), None);
    }

    #[test]
    fn preferences_seed_query() {
        let state = QueryState::with_preferences("whale", "Adventure", 12);
        assert_eq!(state.query(), &Query::new(1, "whale", "Adventure"));
    }
}
