//! Error types for shelfwise.
//!
//! This module defines the centralized error type [`ShelfError`] and a type alias
//! [`Result`] used throughout the crate. Catalog failures have their own
//! [`CatalogError`] so they can be carried inside events and compared in tests.

use thiserror::Error;

/// Failure of a single catalog request.
///
/// Users never see the distinction between variants; the browser shows one
/// fixed message for all of them. The variants exist for logs and for deciding
/// whether a request may be retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The request could not be sent or the connection failed.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("unexpected status: {0}")]
    Status(u16),

    /// The request exceeded the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The response body was not the expected JSON document.
    #[error("malformed response: {0}")]
    Parse(String),
}

impl CatalogError {
    /// Returns `true` for failures where resending the same request may succeed.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Timeout)
    }
}

/// The main error type for shelfwise operations.
///
/// # Examples
///
/// ```
/// use shelfwise::domain::ShelfError;
///
/// fn read_store() -> Result<(), ShelfError> {
///     Err(ShelfError::Storage("failed to parse store".to_string()))
/// }
/// assert!(read_store().is_err());
/// ```
#[derive(Debug, Error)]
pub enum ShelfError {
    /// Reading or writing the key-value store failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A catalog request failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// A specialized `Result` type for shelfwise operations.
pub type Result<T> = std::result::Result<T, ShelfError>;
