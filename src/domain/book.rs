//! Book domain model.
//!
//! This module defines [`BookRecord`], one catalog entry as returned by the
//! remote API, along with [`BookId`], the canonical text form of a book
//! identifier used for wishlist membership and cache lookups.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// MIME type key under which the catalog publishes cover images.
pub const COVER_FORMAT: &str = "image/jpeg";

/// Cover shown when a record has no image format.
pub const PLACEHOLDER_COVER: &str = "placeholder.jpg";

/// Canonical text form of a book identifier.
///
/// The catalog returns numeric identifiers while the wishlist persists them as
/// strings. All comparisons go through this type so a numeric `42` and a
/// stored `"42"` always compare equal.
///
/// # Examples
///
/// ```
/// use shelfwise::domain::BookId;
///
/// assert_eq!(BookId::from(42), BookId::new("42"));
/// assert_eq!(BookId::new(" 42 ").as_str(), "42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    /// Creates an identifier from its text form, trimming surrounding whitespace.
    #[must_use]
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(id.as_ref().trim().to_string())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for BookId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An author entry attached to a book record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub birth_year: Option<i32>,
    #[serde(default)]
    pub death_year: Option<i32>,
}

impl Author {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            birth_year: None,
            death_year: None,
        }
    }
}

/// One catalog entry as returned by the remote API.
///
/// Only the fields the browser consumes are modelled; unknown fields in the
/// API payload are ignored during deserialization. List fields default to
/// empty when absent so partially populated records still parse.
///
/// # Fields
///
/// - `id`: Stable numeric identifier
/// - `title`: Full title
/// - `authors`: Ordered author list, possibly empty
/// - `bookshelves`: Genre tags, possibly empty
/// - `subjects`: Subject tags
/// - `formats`: MIME type to download URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub bookshelves: Vec<String>,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub formats: BTreeMap<String, String>,
}

impl BookRecord {
    /// Creates a record with the given id and title and no other metadata.
    ///
    /// # Examples
    ///
    /// ```
    /// use shelfwise::domain::BookRecord;
    ///
    /// let book = BookRecord::new(84, "Frankenstein");
    /// assert!(book.authors.is_empty());
    /// assert_eq!(book.cover_url(), "placeholder.jpg");
    /// ```
    #[must_use]
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            authors: Vec::new(),
            bookshelves: Vec::new(),
            subjects: Vec::new(),
            formats: BTreeMap::new(),
        }
    }

    /// Returns the canonical text identifier of this record.
    #[must_use]
    pub fn key(&self) -> BookId {
        BookId::from(self.id)
    }

    /// Returns author names in catalog order.
    #[must_use]
    pub fn author_names(&self) -> Vec<&str> {
        self.authors.iter().map(|a| a.name.as_str()).collect()
    }

    #[must_use]
    pub fn first_author(&self) -> Option<&str> {
        self.authors.first().map(|a| a.name.as_str())
    }

    /// Returns the cover image URL, or the placeholder when none is published.
    #[must_use]
    pub fn cover_url(&self) -> &str {
        self.formats
            .get(COVER_FORMAT)
            .map_or(PLACEHOLDER_COVER, String::as_str)
    }
}
