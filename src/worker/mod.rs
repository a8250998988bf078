//! Action executor for network and storage side effects.
//!
//! This module runs the [`Action`](crate::app::Action)s produced by the event
//! handler. Network requests run as spawned tokio tasks and report back to the
//! event loop over a channel; storage writes run inline because they are small
//! local file operations.
//!
//! # Architecture
//!
//! - `handler`: [`Worker`] implementation and action processing logic

pub mod handler;

pub use handler::Worker;
