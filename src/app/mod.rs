//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! terminal runtime (main.rs) and the domain/storage/worker layers. It
//! implements the event-driven architecture that powers the browser.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Command Line → Events → Event Handler → State Mutations → Actions → Side Effects
//!                             ↑                                  ↓
//!                             └──────── Worker Responses ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`commands`]: Parsing of typed command lines into events
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: View mode and load state machine types
//! - [`query`]: Active query and single-page result cache
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use shelfwise::app::{handle_event, parse_command, AppState};
//! use shelfwise::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default(), 12, 80);
//! let event = parse_command("/whale").unwrap();
//! let (render, actions) = handle_event(&mut state, &event)?;
//! assert!(render);
//! assert_eq!(actions.len(), 2);
//! # Ok::<(), shelfwise::ShelfError>(())
//! ```

pub mod actions;
pub mod commands;
pub mod handler;
pub mod modes;
pub mod query;
pub mod state;

pub use actions::Action;
pub use commands::{parse_command, CommandError};
pub use handler::{handle_event, Event};
pub use modes::{LoadState, ViewMode};
pub use query::QueryState;
pub use state::AppState;
