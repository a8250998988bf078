//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::Config;
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log file name inside the data directory.
pub const LOG_FILE_NAME: &str = "shelfwise.log.json";

/// Initializes the tracing subscriber with JSON output to a rotating file.
///
/// Sets up a subscriber pipeline that:
/// 1. Filters spans and events by `RUST_LOG`, else the configured trace level
/// 2. Formats each event as one JSON object with its span context
/// 3. Writes to `<data_dir>/shelfwise.log.json`, rotating at 10MB
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently gives up if the directory cannot be created; logging is optional
/// - Idempotent: only the first call installs a subscriber
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.clone().unwrap_or_else(|| "info".to_string());

    let data_dir = config.data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let writer = Arc::new(FileWriter::new(data_dir.join(LOG_FILE_NAME)));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(false)
        .with_target(true)
        .with_ansi(false)
        .with_writer(writer);

    let _ = tracing_subscriber::registry().with(filter).with(json_layer).try_init();
}
