//! Top-level rendering coordinator.
//!
//! Computes the view model from [`AppState`], draws the chrome and the body
//! for the current screen, then the overlays (notification cards and the
//! delete confirmation).
//!
//! # Example
//!
//! ```rust
//! use userspot::app::AppState;
//! use userspot::store::DisplayMode;
//! use userspot::ui::{render, theme::ThemeSet};
//!
//! let state = AppState::new(ThemeSet::default(), DisplayMode::Dark);
//! render(&state, 24, 80); // Renders to stdout
//! ```

use crate::app::AppState;
use crate::ui::components::{self, BODY_START_ROW};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Body, EmptyState, UIViewModel};

/// Renders the plugin UI to stdout.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, state.theme(), rows, cols);
}

/// Renders a view model with screen-specific layout.
fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    components::render_chrome(vm, theme, cols, rows);

    match &vm.body {
        Body::Loading => {
            let loading = EmptyState {
                message: "Loading users…".to_string(),
                subtitle: String::new(),
            };
            components::render_status_mode(&loading, &theme.colors.accent, theme, cols);
        }
        Body::Error(error) => {
            components::render_status_mode(error, &theme.colors.error_fg, theme, cols);
        }
        Body::List(list) => components::render_list_mode(list, theme, cols),
        Body::Detail(detail) => components::render_detail_mode(detail, theme, cols),
        Body::Form(form) => components::render_form_mode(form, theme, cols),
    }

    components::render_notifications(BODY_START_ROW, &vm.notifications, cols);

    if let Some(confirm) = &vm.confirm {
        components::render_confirm(confirm, theme, rows, cols);
    }
}
