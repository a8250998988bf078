//! Persisted search and genre preferences.
//!
//! Two scalar keys in the key-value store. They are loaded once at startup,
//! before the first fetch, and written after every search or genre change.

use crate::domain::error::Result;
use crate::storage::backend::Storage;

/// Storage key holding the last search text.
pub const SEARCH_KEY: &str = "searchPreference";

/// Storage key holding the last selected genre.
pub const GENRE_KEY: &str = "genrePreference";

/// Last-used search text and genre.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preferences {
    pub search: String,
    pub genre: String,
}

impl Preferences {
    #[must_use]
    pub fn new(search: impl Into<String>, genre: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            genre: genre.into(),
        }
    }
}

/// Reads both preferences, defaulting missing keys to the empty string.
///
/// # Errors
///
/// Returns an error if the backend cannot be read.
pub fn load_preferences<S: Storage + ?Sized>(storage: &S) -> Result<Preferences> {
    let search = storage.get(SEARCH_KEY)?.unwrap_or_default();
    let genre = storage.get(GENRE_KEY)?.unwrap_or_default();

    tracing::debug!(search = %search, genre = %genre, "preferences loaded");
    Ok(Preferences { search, genre })
}

/// Writes both preferences.
///
/// # Errors
///
/// Returns an error if either write fails.
pub fn save_preferences<S: Storage + ?Sized>(
    storage: &mut S,
    preferences: &Preferences,
) -> Result<()> {
    storage.set(SEARCH_KEY, &preferences.search)?;
    storage.set(GENRE_KEY, &preferences.genre)?;

    tracing::debug!(search = %preferences.search, genre = %preferences.genre, "preferences saved");
    Ok(())
}
