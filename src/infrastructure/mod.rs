//! Infrastructure layer for filesystem and environment interactions.
//!
//! Platform directory lookup for configuration, storage, and logs.

pub mod paths;

pub use paths::{config_file, data_dir, expand_tilde, APP_DIR};
