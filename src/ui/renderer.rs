//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view model
//! computation and delegation to UI components.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers
//!
//! # Screen Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Controls - 2 lines, home view only]
//! [Border      - home view only]
//! [Body: cards, details, loading or empty state]
//! [Pagination]
//! [Border]
//! [Footer]
//! [> prompt]
//! ```

use crate::app::AppState;
use crate::ui::components::{self, controls::CONTROLS_HEIGHT};
use crate::ui::helpers::clear_screen;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// First row after the header and its border.
const TOP_ROWS: usize = 4;

/// Row positions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// First row of the body.
    pub body_start: usize,
    /// Rows available to the body.
    pub body_rows: usize,
    pub pagination_row: usize,
    pub footer_border_row: usize,
    pub footer_row: usize,
    pub prompt_row: usize,
}

impl Layout {
    /// Computes row positions for a terminal `rows` high.
    #[must_use]
    pub fn new(rows: usize, has_controls: bool) -> Self {
        let body_start = if has_controls {
            TOP_ROWS + CONTROLS_HEIGHT + 1
        } else {
            TOP_ROWS
        };

        let prompt_row = rows.max(1);
        let footer_row = prompt_row.saturating_sub(1);
        let footer_border_row = footer_row.saturating_sub(1);
        let pagination_row = footer_border_row.saturating_sub(1);

        Self {
            body_start,
            body_rows: pagination_row.saturating_sub(body_start),
            pagination_row,
            footer_border_row,
            footer_row,
            prompt_row,
        }
    }
}

/// Renders the browser UI to stdout.
///
/// Clears the screen, draws every component, and leaves the cursor on the
/// prompt row. The caller flushes stdout.
///
/// # Parameters
///
/// * `state` - Current application state
/// * `rows` - Terminal height in rows
/// * `cols` - Terminal width in columns
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    clear_screen();
    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

/// Renders a view model.
///
/// The body shows, in order of precedence: the detail panel, the loading
/// indicator, the empty state, or the card list.
fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let layout = Layout::new(rows, vm.controls.is_some());

    let mut current_row = 2;
    current_row = components::render_header(current_row, &vm.header, theme, cols);
    current_row = components::render_border(current_row, &theme.colors.border, cols);

    if let Some(controls) = &vm.controls {
        current_row = components::render_controls(current_row, controls, theme, cols);
        components::render_border(current_row, &theme.colors.border, cols);
    }

    if let Some(detail) = &vm.detail {
        components::render_details(layout.body_start, detail, theme, cols, layout.body_rows);
    } else if vm.loading {
        components::render_loading(layout.body_start + 1, theme, cols);
    } else if let Some(empty) = &vm.empty_state {
        components::render_empty_state(layout.body_start + 1, empty, theme, cols);
    } else {
        components::render_cards(layout.body_start, &vm.cards, theme, cols, layout.body_rows);
    }

    if let (Some(pagination), None) = (&vm.pagination, &vm.detail) {
        components::render_pagination(layout.pagination_row, pagination, theme);
    }

    components::render_border(layout.footer_border_row, &theme.colors.border, cols);
    components::render_footer(layout.footer_row, &vm.footer, theme, cols);
    components::render_prompt(layout.prompt_row, theme);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_layout_reserves_controls() {
        let layout = Layout::new(24, true);

        assert_eq!(layout.body_start, 7);
        assert_eq!(layout.prompt_row, 24);
        assert_eq!(layout.footer_row, 23);
        assert_eq!(layout.footer_border_row, 22);
        assert_eq!(layout.pagination_row, 21);
        assert_eq!(layout.body_rows, 14);
    }

    #[test]
    fn wishlist_layout_starts_higher() {
        let layout = Layout::new(24, false);
        assert_eq!(layout.body_start, 4);
        assert_eq!(layout.body_rows, 17);
    }

    #[test]
    fn tiny_terminal_has_no_body() {
        let layout = Layout::new(5, true);
        assert_eq!(layout.body_rows, 0);
        assert_eq!(Layout::new(0, false).prompt_row, 1);
    }
}
