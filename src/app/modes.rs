//! View and load state types for the application.
//!
//! # State Machine
//!
//! Data loading moves through [`LoadState`]:
//!
//! ```text
//! Idle ──action──▶ Loading(seq) ──ok──▶ Ready
//!                      │  ▲               │
//!                      │  └────action─────┤
//!                      └──err──▶ Error ───┘
//! ```
//!
//! A response only completes `Loading(seq)` when it carries the same `seq`;
//! anything older is discarded.

/// Which list the browser is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Paginated catalog results for the active query.
    ///
    /// Search, genre filter and pagination controls are visible.
    #[default]
    Home,

    /// Books the user has wishlisted, resolved from cache or by id.
    ///
    /// Search and pagination controls are hidden.
    Wishlist,
}

/// Progress of the most recent data request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Nothing requested yet.
    #[default]
    Idle,

    /// Waiting for the response tagged with this sequence number.
    Loading(u64),

    /// Last request completed.
    Ready,

    /// Last request failed. Not retried until the next user action.
    Error,
}

impl LoadState {
    #[must_use]
    pub const fn is_loading(self) -> bool {
        matches!(self, Self::Loading(_))
    }

    /// Returns `true` if a response tagged `seq` is the one being waited for.
    #[must_use]
    pub const fn awaits(self, seq: u64) -> bool {
        matches!(self, Self::Loading(current) if current == seq)
    }
}
