//! Remote catalog access.
//!
//! The [`Catalog`] trait is the seam between the browser and the book API:
//! the worker only ever talks to a `Catalog`, and tests swap in an in-memory
//! implementation. [`HttpCatalog`] is the production client.
//!
//! # Modules
//!
//! - `client`: reqwest-based HTTP implementation
//! - `resolve`: per-identifier lookups for wishlist entries missing from the cache

pub mod client;
pub mod resolve;

pub use client::HttpCatalog;
pub use resolve::fetch_missing;

use crate::domain::{BookId, BookRecord, CatalogError, Query, ResultPage};
use std::future::Future;

/// Read-only access to a paginated book catalog.
///
/// Both methods are side-effect free on the client; callers are responsible
/// for caching and for discarding stale responses.
pub trait Catalog: Send + Sync + 'static {
    /// Fetches one page of results for `query`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] on transport failure, non-2xx status, timeout,
    /// or a malformed response body.
    fn fetch_page(
        &self,
        query: &Query,
    ) -> impl Future<Output = Result<ResultPage, CatalogError>> + Send;

    /// Fetches the records for `ids`. Unknown identifiers are silently omitted.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Catalog::fetch_page`].
    fn fetch_by_ids(
        &self,
        ids: &[BookId],
    ) -> impl Future<Output = Result<Vec<BookRecord>, CatalogError>> + Send;
}

#[cfg(test)]
pub(crate) mod fake {
    //! In-memory catalog that records every call.

    use super::Catalog;
    use crate::domain::{BookId, BookRecord, CatalogError, Query, ResultPage};
    use std::collections::BTreeMap;
    use std::sync::Mutex;
    use tokio::sync::Notify;

    #[derive(Debug, Default)]
    pub struct FakeCatalog {
        pub books: BTreeMap<u64, BookRecord>,
        pub failing: Vec<BookId>,
        pub page_error: Option<CatalogError>,
        /// Fetches for these pages wait on `gate` before answering.
        pub gated_pages: Vec<u32>,
        pub gate: Notify,
        pub page_calls: Mutex<Vec<Query>>,
        pub id_calls: Mutex<Vec<Vec<BookId>>>,
    }

    impl FakeCatalog {
        pub fn with_books(books: impl IntoIterator<Item = BookRecord>) -> Self {
            Self {
                books: books.into_iter().map(|b| (b.id, b)).collect(),
                ..Self::default()
            }
        }

        pub fn id_calls(&self) -> Vec<Vec<BookId>> {
            self.id_calls.lock().unwrap().clone()
        }

        pub fn page_calls(&self) -> Vec<Query> {
            self.page_calls.lock().unwrap().clone()
        }
    }

    impl Catalog for FakeCatalog {
        async fn fetch_page(&self, query: &Query) -> Result<ResultPage, CatalogError> {
            self.page_calls.lock().unwrap().push(query.clone());
            if self.gated_pages.contains(&query.page) {
                self.gate.notified().await;
            }
            if let Some(err) = &self.page_error {
                return Err(err.clone());
            }
            let books: Vec<BookRecord> = self.books.values().cloned().collect();
            Ok(ResultPage::new(query.clone(), books.len() as u64, books))
        }

        async fn fetch_by_ids(&self, ids: &[BookId]) -> Result<Vec<BookRecord>, CatalogError> {
            self.id_calls.lock().unwrap().push(ids.to_vec());
            if ids.iter().any(|id| self.failing.contains(id)) {
                return Err(CatalogError::Status(500));
            }
            Ok(self
                .books
                .values()
                .filter(|b| ids.contains(&b.key()))
                .cloned()
                .collect())
        }
    }
}
