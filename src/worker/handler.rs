//! Worker implementation for asynchronous catalog requests and storage writes.
//!
//! Completed work is reported back to the event loop as [`Event`]s over an
//! unbounded channel, so the handler never blocks on I/O.

use crate::app::{Action, Event};
use crate::catalog::{fetch_missing, Catalog};
use crate::domain::error::Result;
use crate::domain::{BookId, Query};
use crate::storage::{
    load_preferences, load_wishlist, save_preferences, toggle_wishlist, Preferences, Storage,
};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::Instrument;

/// Executes actions against a catalog and a storage backend.
///
/// At most one page fetch and one wishlist resolution are in flight at a time;
/// starting a new one aborts the previous task of the same kind.
pub struct Worker<C: Catalog, S: Storage> {
    catalog: Arc<C>,
    storage: S,
    events: UnboundedSender<Event>,
    page_task: Option<JoinHandle<()>>,
    wishlist_task: Option<JoinHandle<()>>,
}

impl<C: Catalog, S: Storage> Worker<C, S> {
    /// Creates a worker that reports completions on `events`.
    pub fn new(catalog: Arc<C>, storage: S, events: UnboundedSender<Event>) -> Self {
        Self {
            catalog,
            storage,
            events,
            page_task: None,
            wishlist_task: None,
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Builds the startup event from persisted preferences and wishlist.
    ///
    /// Read failures are logged and replaced with empty values.
    pub fn initial_event(&self) -> Event {
        let preferences = load_preferences(&self.storage).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to load preferences, using defaults");
            Preferences::default()
        });

        let wishlist = load_wishlist(&self.storage).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to load wishlist, starting empty");
            Vec::new()
        });

        Event::Init { preferences, wishlist }
    }

    /// Executes `actions` in order.
    ///
    /// Must be called from within a tokio runtime. Returns `false` once
    /// [`Action::Quit`] is reached; later actions are not run.
    pub fn execute(&mut self, actions: Vec<Action>) -> bool {
        for action in actions {
            let _span = tracing::debug_span!("execute_action", action = ?action).entered();

            match action {
                Action::FetchPage { seq, query } => self.spawn_fetch_page(seq, query),
                Action::ResolveWishlist { seq, ids } => self.spawn_resolve_wishlist(seq, ids),
                Action::SavePreferences(preferences) => self.handle_save_preferences(&preferences),
                Action::ToggleWishlist(id) => self.handle_toggle_wishlist(&id),
                Action::Quit => {
                    self.abort_all();
                    return false;
                }
            }
        }
        true
    }

    fn spawn_fetch_page(&mut self, seq: u64, query: Query) {
        if let Some(previous) = self.page_task.take() {
            previous.abort();
        }

        let catalog = Arc::clone(&self.catalog);
        let events = self.events.clone();
        let span = tracing::debug_span!("page_task", seq = seq, page = query.page);

        self.page_task = Some(tokio::spawn(
            async move {
                let result = catalog.fetch_page(&query).await;
                if events.send(Event::PageLoaded { seq, result }).is_err() {
                    tracing::debug!("event loop closed before page arrived");
                }
            }
            .instrument(span),
        ));
    }

    fn spawn_resolve_wishlist(&mut self, seq: u64, ids: Vec<BookId>) {
        if let Some(previous) = self.wishlist_task.take() {
            previous.abort();
        }

        let catalog = Arc::clone(&self.catalog);
        let events = self.events.clone();
        let span = tracing::debug_span!("wishlist_task", seq = seq, missing = ids.len());

        self.wishlist_task = Some(tokio::spawn(
            async move {
                let books = fetch_missing(catalog.as_ref(), &ids).await;
                if events.send(Event::WishlistResolved { seq, books }).is_err() {
                    tracing::debug!("event loop closed before wishlist resolved");
                }
            }
            .instrument(span),
        ));
    }

    fn handle_save_preferences(&mut self, preferences: &Preferences) {
        let result = save_preferences(&mut self.storage, preferences);
        self.report("save preferences", result, |()| None);
    }

    fn handle_toggle_wishlist(&mut self, id: &BookId) {
        let result =
            toggle_wishlist(&mut self.storage, id).and_then(|_| load_wishlist(&self.storage));
        self.report("toggle wishlist", result, |ids| Some(Event::WishlistUpdated { ids }));
    }

    /// Logs a storage result and forwards the matching event.
    fn report<T, F>(&self, operation: &str, result: Result<T>, on_success: F)
    where
        F: FnOnce(T) -> Option<Event>,
    {
        let event = match result {
            Ok(value) => {
                tracing::debug!(operation = operation, "storage operation successful");
                on_success(value)
            }
            Err(e) => {
                tracing::warn!(operation = operation, error = %e, "storage operation failed");
                Some(Event::StorageFailed {
                    message: format!("{operation}: {e}"),
                })
            }
        };

        if let Some(event) = event {
            if self.events.send(event).is_err() {
                tracing::debug!(operation = operation, "event loop closed");
            }
        }
    }

    fn abort_all(&mut self) {
        for task in [self.page_task.take(), self.wishlist_task.take()].into_iter().flatten() {
            task.abort();
        }
    }
}

impl<C: Catalog, S: Storage> Drop for Worker<C, S> {
    fn drop(&mut self) {
        self.abort_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fake::FakeCatalog;
    use crate::domain::{BookRecord, CatalogError, ShelfError};
    use crate::storage::MemoryStorage;
    use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

    fn worker(
        catalog: FakeCatalog,
    ) -> (Worker<FakeCatalog, MemoryStorage>, UnboundedReceiver<Event>) {
        let (tx, rx) = unbounded_channel();
        (Worker::new(Arc::new(catalog), MemoryStorage::new(), tx), rx)
    }

    struct FailingStorage;

    impl Storage for FailingStorage {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(ShelfError::Storage("disk unavailable".into()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(ShelfError::Storage("disk unavailable".into()))
        }
    }

    #[tokio::test]
    async fn fetch_page_reports_with_sequence() {
        let (mut worker, mut rx) = worker(FakeCatalog::with_books([BookRecord::new(1, "One")]));

        let query = Query::new(1, "whale", "");
        assert!(worker.execute(vec![Action::FetchPage { seq: 7, query: query.clone() }]));

        match rx.recv().await.unwrap() {
            Event::PageLoaded { seq, result } => {
                assert_eq!(seq, 7);
                let page = result.unwrap();
                assert_eq!(page.query, query);
                assert_eq!(page.books.len(), 1);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[tokio::test]
    async fn new_fetch_aborts_the_one_in_flight() {
        let catalog = Arc::new(FakeCatalog {
            gated_pages: vec![1],
            ..FakeCatalog::with_books([BookRecord::new(1, "One")])
        });
        let (tx, mut rx) = unbounded_channel();
        let mut worker = Worker::new(Arc::clone(&catalog), MemoryStorage::new(), tx);

        worker.execute(vec![Action::FetchPage { seq: 1, query: Query::new(1, "", "") }]);
        while catalog.page_calls().is_empty() {
            tokio::task::yield_now().await;
        }

        worker.execute(vec![Action::FetchPage { seq: 2, query: Query::new(2, "", "") }]);
        catalog.gate.notify_waiters();

        match rx.recv().await.unwrap() {
            Event::PageLoaded { seq, result } => {
                assert_eq!(seq, 2);
                assert_eq!(result.unwrap().query.page, 2);
            }
            other => panic!("unexpected event {other:?}"),
        }

        drop(worker);
        assert!(rx.recv().await.is_none());
        assert_eq!(catalog.page_calls().len(), 2);
    }

    #[tokio::test]
    async fn fetch_failure_is_forwarded() {
        let catalog = FakeCatalog {
            page_error: Some(CatalogError::Timeout),
            ..FakeCatalog::default()
        };
        let (mut worker, mut rx) = worker(catalog);

        worker.execute(vec![Action::FetchPage { seq: 1, query: Query::default() }]);

        assert_eq!(
            rx.recv().await.unwrap(),
            Event::PageLoaded { seq: 1, result: Err(CatalogError::Timeout) }
        );
    }

    #[tokio::test]
    async fn resolve_fetches_each_missing_id() {
        let mut catalog = FakeCatalog::with_books([
            BookRecord::new(99, "Fetched"),
            BookRecord::new(7, "Seven"),
        ]);
        catalog.failing = vec![BookId::from(5)];
        let catalog = Arc::new(catalog);
        let (tx, mut rx) = unbounded_channel();
        let mut worker = Worker::new(Arc::clone(&catalog), MemoryStorage::new(), tx);

        let ids = vec![BookId::from(99), BookId::from(5), BookId::from(7)];
        worker.execute(vec![Action::ResolveWishlist { seq: 3, ids }]);

        match rx.recv().await.unwrap() {
            Event::WishlistResolved { seq, books } => {
                assert_eq!(seq, 3);
                assert_eq!(books.iter().map(|b| b.id).collect::<Vec<_>>(), vec![99, 7]);
            }
            other => panic!("unexpected event {other:?}"),
        }
        assert_eq!(catalog.id_calls().len(), 3);
    }

    #[tokio::test]
    async fn toggle_persists_and_reports_wishlist() {
        let (mut worker, mut rx) = worker(FakeCatalog::default());

        worker.execute(vec![Action::ToggleWishlist(BookId::from(42))]);
        assert_eq!(
            rx.recv().await.unwrap(),
            Event::WishlistUpdated { ids: vec![BookId::from(42)] }
        );

        worker.execute(vec![Action::ToggleWishlist(BookId::from(42))]);
        assert_eq!(rx.recv().await.unwrap(), Event::WishlistUpdated { ids: vec![] });
        assert!(load_wishlist(worker.storage()).unwrap().is_empty());
    }

    #[tokio::test]
    async fn preferences_saved_silently() {
        let (mut worker, mut rx) = worker(FakeCatalog::default());

        worker.execute(vec![Action::SavePreferences(Preferences::new("whale", "Adventure"))]);

        assert_eq!(
            load_preferences(worker.storage()).unwrap(),
            Preferences::new("whale", "Adventure")
        );
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn storage_failure_is_reported() {
        let (tx, mut rx) = unbounded_channel();
        let mut worker = Worker::new(Arc::new(FakeCatalog::default()), FailingStorage, tx);

        worker.execute(vec![Action::ToggleWishlist(BookId::from(1))]);

        assert!(matches!(
            rx.recv().await.unwrap(),
            Event::StorageFailed { message } if message.starts_with("toggle wishlist")
        ));
    }

    #[tokio::test]
    async fn initial_event_reads_storage() {
        let (mut worker, _rx) = worker(FakeCatalog::default());
        worker.execute(vec![
            Action::SavePreferences(Preferences::new("whale", "")),
            Action::ToggleWishlist(BookId::from(3)),
        ]);

        assert_eq!(
            worker.initial_event(),
            Event::Init {
                preferences: Preferences::new("whale", ""),
                wishlist: vec![BookId::from(3)],
            }
        );
    }

    #[tokio::test]
    async fn initial_event_tolerates_storage_errors() {
        let (tx, _rx) = unbounded_channel();
        let worker = Worker::new(Arc::new(FakeCatalog::default()), FailingStorage, tx);

        assert_eq!(
            worker.initial_event(),
            Event::Init { preferences: Preferences::default(), wishlist: vec![] }
        );
    }

    #[tokio::test]
    async fn quit_stops_execution() {
        let (mut worker, mut rx) = worker(FakeCatalog::default());

        let keep_running =
            worker.execute(vec![Action::Quit, Action::ToggleWishlist(BookId::from(1))]);

        assert!(!keep_running);
        assert!(rx.try_recv().is_err());
    }
}
