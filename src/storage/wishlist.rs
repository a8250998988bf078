//! Persisted wishlist.
//!
//! The wishlist is a JSON-encoded list of identifier strings stored under a
//! single key. Every mutation reads the current list, changes it, and writes
//! the whole list back. Identifiers compare by their text form via [`BookId`].

use crate::domain::error::{Result, ShelfError};
use crate::domain::BookId;
use crate::storage::backend::Storage;

/// Storage key holding the JSON-encoded wishlist.
pub const WISHLIST_KEY: &str = "wishlist";

/// Reads the wishlist in insertion order.
///
/// A missing key is an empty wishlist. A value that is not a JSON list of
/// strings is logged and treated as empty; the next toggle overwrites it.
///
/// # Errors
///
/// Returns an error if the backend cannot be read.
pub fn load_wishlist<S: Storage + ?Sized>(storage: &S) -> Result<Vec<BookId>> {
    let Some(raw) = storage.get(WISHLIST_KEY)? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str::<Vec<BookId>>(&raw) {
        Ok(ids) => Ok(ids),
        Err(e) => {
            tracing::warn!(error = %e, "stored wishlist is malformed, treating as empty");
            Ok(Vec::new())
        }
    }
}

fn store_wishlist<S: Storage + ?Sized>(storage: &mut S, ids: &[BookId]) -> Result<()> {
    let json = serde_json::to_string(ids)
        .map_err(|e| ShelfError::Storage(format!("failed to serialize wishlist: {e}")))?;
    storage.set(WISHLIST_KEY, &json)
}

/// Adds `id` if absent, removes it if present, and persists the result.
///
/// Returns `true` if the book is wishlisted after the call.
///
/// # Errors
///
/// Returns an error if the wishlist cannot be read or written.
///
/// # Examples
///
/// ```
/// use shelfwise::domain::BookId;
/// use shelfwise::storage::{is_wishlisted, toggle_wishlist, MemoryStorage};
///
/// let mut storage = MemoryStorage::new();
/// let id = BookId::from(84);
/// assert!(toggle_wishlist(&mut storage, &id)?);
/// assert!(is_wishlisted(&storage, &id)?);
/// assert!(!toggle_wishlist(&mut storage, &id)?);
/// # Ok::<(), shelfwise::ShelfError>(())
/// ```
pub fn toggle_wishlist<S: Storage + ?Sized>(storage: &mut S, id: &BookId) -> Result<bool> {
    let mut ids = load_wishlist(storage)?;

    let added = if let Some(index) = ids.iter().position(|existing| existing == id) {
        ids.remove(index);
        false
    } else {
        ids.push(id.clone());
        true
    };

    store_wishlist(storage, &ids)?;

    tracing::debug!(book_id = %id, added = added, size = ids.len(), "wishlist toggled");
    Ok(added)
}

/// Returns `true` if `id` is in the persisted wishlist.
///
/// # Errors
///
/// Returns an error if the wishlist cannot be read.
pub fn is_wishlisted<S: Storage + ?Sized>(storage: &S, id: &BookId) -> Result<bool> {
    Ok(load_wishlist(storage)?.contains(id))
}
