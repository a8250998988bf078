//! Actions representing side effects to be executed by the runtime.
//!
//! This module defines the [`Action`] type, which represents imperative commands
//! produced by the event handler after processing user input or fetch
//! completions. Actions bridge pure state transformations and effectful
//! operations like network requests and storage writes.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event, allowing
//! multiple side effects to be queued atomically. The runtime executes these
//! actions in order via [`Worker`](crate::worker::Worker). Network actions
//! complete asynchronously and report back as events tagged with their `seq`.
//!
//! # Example
//!
//! ```rust
//! use shelfwise::app::Action;
//! use shelfwise::domain::Query;
//!
//! let actions = vec![Action::FetchPage {
//!     seq: 1,
//!     query: Query::new(1, "whale", ""),
//! }];
//! ```

use crate::domain::{BookId, Query};
use crate::storage::Preferences;

/// Commands representing side effects to be executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Fetches one catalog page.
    ///
    /// Supersedes any page fetch still in flight; the result comes back as
    /// [`Event::PageLoaded`](crate::app::Event::PageLoaded) with the same `seq`.
    FetchPage {
        /// Sequence number of this request.
        seq: u64,
        /// Query to send.
        query: Query,
    },

    /// Fetches wishlist entries that were not on the cached page, one request
    /// per identifier.
    ///
    /// Completes as [`Event::WishlistResolved`](crate::app::Event::WishlistResolved).
    ResolveWishlist {
        /// Sequence number of this request.
        seq: u64,
        /// Identifiers to look up, in wishlist order.
        ids: Vec<BookId>,
    },

    /// Persists the search text and genre.
    SavePreferences(Preferences),

    /// Adds or removes a book from the persisted wishlist.
    ///
    /// Completes as [`Event::WishlistUpdated`](crate::app::Event::WishlistUpdated).
    ToggleWishlist(BookId),

    /// Stops the event loop.
    Quit,
}
