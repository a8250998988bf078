//! Terminal drawing.
//!
//! Rendering is a pure projection of [`AppState`](crate::app::AppState): the
//! state computes a [`UIViewModel`] for the current terminal size and
//! [`render`] paints it top to bottom with ANSI sequences. Nothing here
//! mutates state or talks to the catalog.
//!
//! ```text
//! AppState ──compute_viewmodel(rows, cols)──▶ UIViewModel ──render──▶ stdout
//! ```
//!
//! ```rust,no_run
//! use shelfwise::app::AppState;
//! use shelfwise::ui::{render, Theme};
//!
//! let state = AppState::new(Theme::default(), 12, 80);
//! render(&state, 24, 80);
//! ```

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    BookCard, ControlsInfo, DetailView, EmptyState, FooterInfo, HeaderInfo, PageButton, Pagination,
    UIViewModel,
};
