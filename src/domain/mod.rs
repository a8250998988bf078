//! Domain layer for shelfwise.
//!
//! Core catalog types independent of HTTP, storage, or rendering concerns.
//!
//! # Organization
//!
//! - [`book`]: Book records and canonical identifiers
//! - [`page`]: Queries and result pages
//! - [`error`]: Error types and result aliases
//!
//! # Examples
//!
//! ```
//! use shelfwise::domain::{BookRecord, Query, ResultPage};
//!
//! let page = ResultPage::new(Query::default(), 1, vec![BookRecord::new(1, "Dracula")]);
//! assert_eq!(page.books.len(), 1);
//! ```

pub mod book;
pub mod error;
pub mod page;

pub use book::{Author, BookId, BookRecord, COVER_FORMAT, PLACEHOLDER_COVER};
pub use error::{CatalogError, Result, ShelfError};
pub use page::{total_pages, Query, ResultPage};
