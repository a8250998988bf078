//! Shelfwise: a terminal browser for a public-domain book catalog.
//!
//! Shelfwise pages through a Gutendex-compatible catalog and provides:
//! - Free-text search and genre filtering with server-side pagination
//! - A single-page result cache bound to the active query
//! - A locally persisted wishlist, resolved from the cached page first and
//!   from per-book lookups for the rest
//! - Search and genre preferences restored on the next start
//! - A detail panel for any listed book
//!
//! # Data flow
//!
//! ```text
//! stdin ─parse_command─▶ Event ─handle_event─▶ AppState ─compute_viewmodel─▶ ui::render
//!                          ▲                     │
//!                          │                  Actions
//!                          │                     ▼
//!                          └──── completions ── Worker ──▶ Catalog (HTTP), Storage (JSON)
//! ```
//!
//! `main.rs` owns the loop: it loads [`Config`], starts tracing, opens storage,
//! sends the persisted preferences and wishlist as `Event::Init`, then feeds
//! every event through [`handle_event`] and redraws on request.
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`catalog`]: Catalog trait and HTTP client
//! - [`domain`]: Core domain types (books, queries, pages, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`storage`]: Key-value persistence, wishlist and preferences
//! - [`worker`]: Executor for network and storage actions
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: Structured logging to a rotating file
//!
//! # Configuration
//!
//! Settings are read from `<config_dir>/shelfwise/config.toml` (or the file
//! given with `--config`). Every key is optional:
//!
//! ```toml
//! api_url = "https://gutendex.com/books"
//! page_size = 12
//! timeout_secs = 10
//! max_retries = 0
//! narrow_width = 80
//! theme = "shelf-light"
//! theme_file = "~/.config/shelfwise/my-theme.toml"
//! trace_level = "debug"
//! data_dir = "~/books-data"
//! ```
//!
//! # Examples
//!
//! ```rust
//! use shelfwise::{handle_event, initialize, Action, Config, Event};
//!
//! let config = Config {
//!     page_size: 10,
//!     ..Default::default()
//! };
//!
//! let mut state = initialize(&config);
//!
//! let (_, actions) = handle_event(&mut state, &Event::GenreSelected("Horror".into()))?;
//! assert!(matches!(&actions[0], Action::FetchPage { query, .. } if query.topic() == "horror"));
//! # Ok::<(), shelfwise::ShelfError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod ui;
pub mod worker;

pub use app::{handle_event, Action, AppState, Event, LoadState, ViewMode};
pub use domain::{CatalogError, Result, ShelfError};
pub use ui::Theme;

use infrastructure::paths;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default catalog endpoint.
pub const DEFAULT_API_URL: &str = "https://gutendex.com/books";

/// File holding the persisted key-value store, inside the data directory.
pub const STORAGE_FILE_NAME: &str = "shelfwise.json";

/// Browser configuration.
///
/// Loaded from TOML; missing keys take their default. Command-line flags are
/// applied on top by the binary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Catalog endpoint. Default: `https://gutendex.com/books`
    pub api_url: String,

    /// Results per page served by the catalog, used for page count math.
    /// Default: 12
    pub page_size: u32,

    /// Per-request timeout in seconds. Default: 10
    pub timeout_secs: u64,

    /// Extra attempts after a transport failure or timeout. Default: 0
    pub max_retries: u32,

    /// Terminals narrower than this many columns get the 3-button page window.
    /// Default: 80
    pub narrow_width: usize,

    /// Built-in theme name.
    ///
    /// Options: `shelf-dark`, `shelf-light`. Ignored if `theme_file` is set.
    pub theme: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Tracing filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Directory for the storage and log files. Default: the platform data
    /// directory (see [`infrastructure::paths`]).
    pub data_dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            page_size: 12,
            timeout_secs: 10,
            max_retries: 0,
            narrow_width: 80,
            theme: None,
            theme_file: None,
            trace_level: None,
            data_dir: None,
        }
    }
}

impl Config {
    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfError::Config`] if the text is not valid TOML, a value
    /// has the wrong type, or `page_size` is 0.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shelfwise::Config;
    ///
    /// let config = Config::from_toml("page_size = 32\ntheme = \"shelf-light\"")?;
    /// assert_eq!(config.page_size, 32);
    /// assert_eq!(config.timeout_secs, 10);
    /// # Ok::<(), shelfwise::ShelfError>(())
    /// ```
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)
            .map_err(|e| ShelfError::Config(format!("failed to parse config TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfError::Config`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| ShelfError::Config(format!("failed to read {}: {e}", path.display())))?;
        Self::from_toml(&text)
    }

    /// Loads configuration from `explicit` if given, else from the default
    /// config file if it exists, else returns defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfError::Config`] if the chosen file cannot be read or
    /// parsed. A missing default file is not an error; a missing explicit
    /// file is.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match paths::config_file() {
            Some(path) if path.exists() => Self::from_file(path),
            _ => Ok(Self::default()),
        }
    }

    /// Directory for storage and logs, with `~` expanded.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .as_deref()
            .map_or_else(paths::data_dir, paths::expand_tilde)
    }

    /// Path of the JSON key-value store.
    #[must_use]
    pub fn storage_path(&self) -> PathBuf {
        self.data_dir().join(STORAGE_FILE_NAME)
    }

    fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(ShelfError::Config("page_size must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Creates the initial application state from configuration.
///
/// The theme comes from `theme_file` if set, else the built-in `theme`, else
/// the default. A theme that fails to load is logged and replaced with the
/// default.
///
/// # Example
///
/// ```rust
/// use shelfwise::{initialize, Config};
///
/// let config = Config {
///     theme: Some("shelf-light".to_string()),
///     ..Default::default()
/// };
///
/// let state = initialize(&config);
/// assert_eq!(state.theme.name, "shelf-light");
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(
        api_url = %config.api_url,
        page_size = config.page_size,
        "initializing shelfwise"
    );

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(paths::expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::warn!(
                    theme_file = %theme_file,
                    error = %e,
                    "failed to load theme from file, using default"
                );
                Theme::default()
            })
        },
    );

    AppState::new(theme, config.page_size, config.narrow_width)
}
