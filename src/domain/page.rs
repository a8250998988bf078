//! Query and result page types.
//!
//! A [`Query`] is the `(page, search, genre)` tuple that drives what is
//! fetched; a [`ResultPage`] is one page of records bound to the query that
//! produced it, so cached data can always be checked against the active query.

use super::book::{BookId, BookRecord};
use serde::{Deserialize, Serialize};

/// The `(page, search, genre)` tuple sent to the catalog.
///
/// `page` is 1-indexed. `genre` is matched case-insensitively by the API, so
/// [`Query::topic`] lowercases it before it goes on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Query {
    pub page: u32,
    pub search: String,
    pub genre: String,
}

impl Query {
    #[must_use]
    pub fn new(page: u32, search: impl Into<String>, genre: impl Into<String>) -> Self {
        Self {
            page: page.max(1),
            search: search.into(),
            genre: genre.into(),
        }
    }

    /// Returns the genre in the lowercase form the API expects.
    #[must_use]
    pub fn topic(&self) -> String {
        self.genre.to_lowercase()
    }
}

impl Default for Query {
    fn default() -> Self {
        Self::new(1, "", "")
    }
}

/// One page of catalog results plus the total matching count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPage {
    /// Query that produced this page.
    pub query: Query,

    /// Total number of matching records across all pages.
    pub count: u64,

    /// Records on this page, in API order.
    pub books: Vec<BookRecord>,
}

impl ResultPage {
    #[must_use]
    pub fn new(query: Query, count: u64, books: Vec<BookRecord>) -> Self {
        Self {
            query,
            count,
            books,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Finds a record on this page by identifier.
    #[must_use]
    pub fn find(&self, id: &BookId) -> Option<&BookRecord> {
        self.books.iter().find(|book| &book.key() == id)
    }

    /// Collects the distinct genre tags present on this page.
    ///
    /// Tags keep the order in which they are first seen.
    #[must_use]
    pub fn genres(&self) -> Vec<String> {
        let mut genres: Vec<String> = Vec::new();
        for tag in self.books.iter().flat_map(|book| book.bookshelves.iter()) {
            if !genres.contains(tag) {
                genres.push(tag.clone());
            }
        }
        genres
    }
}

/// Number of pages needed to show `count` records at `page_size` per page.
///
/// # Examples
///
/// ```
/// use shelfwise::domain::total_pages;
///
/// assert_eq!(total_pages(120, 12), 10);
/// assert_eq!(total_pages(121, 12), 11);
/// assert_eq!(total_pages(0, 12), 0);
/// ```
#[must_use]
pub fn total_pages(count: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    u32::try_from(count.div_ceil(u64::from(page_size))).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shelved(id: u64, shelves: &[&str]) -> BookRecord {
        let mut book = BookRecord::new(id, format!("Book {id}"));
        book.bookshelves = shelves.iter().map(ToString::to_string).collect();
        book
    }

    #[test]
    fn query_page_is_at_least_one() {
        assert_eq!(Query::new(0, "", "").page, 1);
    }

    #[test]
    fn topic_is_lowercased() {
        let query = Query::new(1, "", "Science Fiction");
        assert_eq!(query.topic(), "science fiction");
    }

    #[test]
    fn genres_are_deduplicated_in_first_seen_order() {
        let page = ResultPage::new(
            Query::default(),
            3,
            vec![
                shelved(1, &["Horror", "Gothic Fiction"]),
                shelved(2, &["Gothic Fiction"]),
                shelved(3, &["Adventure"]),
            ],
        );

        assert_eq!(page.genres(), vec!["Horror", "Gothic Fiction", "Adventure"]);
    }

    #[test]
    fn find_matches_by_text_id() {
        let page = ResultPage::new(Query::default(), 1, vec![shelved(42, &[])]);
        assert!(page.find(&BookId::new("42")).is_some());
        assert!(page.find(&BookId::new("4")).is_none());
    }
}
