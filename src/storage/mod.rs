//! Storage layer for persisted browser state.
//!
//! This module provides a durable key-value abstraction and the two stores
//! layered on it: search/genre preferences and the wishlist. Values survive
//! restarts when backed by [`JsonStorage`].
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction for backend implementations
//! - `json`: JSON file-based storage implementation
//! - `memory`: In-process storage for tests and fallback
//! - `preferences`: Last-used search text and genre
//! - `wishlist`: Ordered set of wishlisted book identifiers

pub mod backend;
pub mod json;
pub mod memory;
pub mod preferences;
pub mod wishlist;

pub use backend::Storage;
pub use json::JsonStorage;
pub use memory::MemoryStorage;
pub use preferences::{load_preferences, save_preferences, Preferences};
pub use wishlist::{is_wishlisted, load_wishlist, toggle_wishlist};
