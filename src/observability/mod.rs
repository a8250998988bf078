//! File-based structured logging.
//!
//! The terminal belongs to the UI, so every `tracing` span and event is written
//! as JSON lines to a size-rotated file instead of stdout.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter → fmt (JSON) layer → FileWriter → shelfwise.log.json
//! ```
//!
//! # Features
//!
//! - **File Output**: `<data_dir>/shelfwise.log.json`
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//! - **Structured Fields**: Span fields and event fields are kept as JSON keys
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option or `--trace-level`
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! ```rust,no_run
//! use shelfwise::observability::init_tracing;
//! use shelfwise::Config;
//!
//! let config = Config::default();
//! init_tracing(&config);
//!
//! tracing::debug!("browser initialized");
//! ```
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

pub mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::{init_tracing, LOG_FILE_NAME};
