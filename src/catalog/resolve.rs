//! Lookup of wishlist entries that are not on the cached page.

use super::Catalog;
use crate::domain::{BookId, BookRecord};

/// Fetches each of `ids` with its own single-identifier request, in order.
///
/// Failed lookups and unknown identifiers are logged and left out of the
/// result; one bad entry never hides the rest of the wishlist.
pub async fn fetch_missing<C: Catalog>(catalog: &C, ids: &[BookId]) -> Vec<BookRecord> {
    let mut books = Vec::with_capacity(ids.len());

    for id in ids {
        match catalog.fetch_by_ids(std::slice::from_ref(id)).await {
            Ok(mut found) if !found.is_empty() => books.push(found.swap_remove(0)),
            Ok(_) => {
                tracing::warn!(book_id = %id, "wishlisted book not found in catalog");
            }
            Err(e) => {
                tracing::warn!(book_id = %id, error = %e, "failed to fetch wishlisted book");
            }
        }
    }

    tracing::debug!(requested = ids.len(), resolved = books.len(), "wishlist lookups finished");
    books
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fake::FakeCatalog;

    #[tokio::test]
    async fn one_request_per_identifier() {
        let catalog = FakeCatalog::with_books([
            BookRecord::new(99, "Ninety-Nine"),
            BookRecord::new(7, "Seven"),
        ]);

        let books = fetch_missing(&catalog, &[BookId::from(99)]).await;

        assert_eq!(books.len(), 1);
        assert_eq!(books[0].id, 99);
        assert_eq!(catalog.id_calls(), vec![vec![BookId::from(99)]]);
    }

    #[tokio::test]
    async fn failures_and_unknown_ids_are_omitted() {
        let mut catalog =
            FakeCatalog::with_books([BookRecord::new(1, "One"), BookRecord::new(3, "Three")]);
        catalog.failing.push(BookId::from(2));

        let ids = [BookId::from(1), BookId::from(2), BookId::from(3), BookId::from(404)];
        let books = fetch_missing(&catalog, &ids).await;

        let resolved: Vec<u64> = books.iter().map(|b| b.id).collect();
        assert_eq!(resolved, vec![1, 3]);
        assert_eq!(catalog.id_calls().len(), 4);
    }
}
