//! Composable UI component renderers.
//!
//! Each component draws one part of the screen at a given row and returns the
//! next free row. The layout functions here stack them into full screens.
//!
//! # Components
//!
//! - [`header`]: Title bar with the display mode label
//! - [`footer`]: Keybinding hints
//! - [`search`]: Search input box
//! - [`table`]: User table, sort markers, and pagination line
//! - [`filter`]: Filter dropdown
//! - [`empty`]: Centered message for loading, errors, and empty lists
//! - [`detail`]: Single-record field list
//! - [`form`]: Add and edit form
//! - [`notifications`]: Stacked notification cards
//! - [`confirm`]: Delete confirmation dialog
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Body: list, detail, form, or status message]
//! [Blank padding to fill screen]
//! [Border]
//! [Footer]
//! ```
//!
//! Notification cards and the confirm dialog are overlays drawn after the body.

mod confirm;
mod detail;
mod empty;
mod filter;
mod footer;
mod form;
mod header;
mod notifications;
mod search;
mod table;

pub use confirm::render_confirm;
pub use notifications::render_notifications;
pub use table::column_widths;

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailBody, EmptyState, FormBody, ListBody, UIViewModel};

use empty::render_empty_state;
use filter::render_filter_panel;
use footer::render_footer;
use header::render_header;
use search::render_search_bar;
use table::{render_pagination, render_table_headers, render_table_rows};

/// First row below the header border.
pub const BODY_START_ROW: usize = 4;

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Header, its border, the bottom border, and the footer.
pub fn render_chrome(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let current_row = render_header(2, &vm.header, theme, cols);
    render_border(current_row, &theme.colors.border, cols);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

/// Renders the list screen body.
///
/// ```text
/// [Search Bar - 3 lines, when open]
/// [Active filters, when any]
/// [Table Headers]
/// [Table Rows or empty message]
/// [Pagination]
/// ```
///
/// The filter dropdown is drawn last, hanging from the table header row.
pub fn render_list_mode(list: &ListBody, theme: &Theme, cols: usize) {
    let mut current_row = BODY_START_ROW;

    if let Some(search) = &list.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }

    if !list.active_filters.is_empty() {
        position_cursor(current_row, 1);
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{}", truncate(&format!("Filtered by: {}", list.active_filters), cols));
        print!("{}", Theme::reset());
        current_row += 1;
    }

    let header_row = current_row;
    current_row = render_table_headers(current_row, list.name_sort, list.email_sort, theme, cols);

    current_row = match &list.empty_state {
        Some(empty) => render_empty_state(current_row + 1, empty, &theme.colors.empty_state_fg, theme, cols) + 1,
        None => render_table_rows(current_row, &list.rows, theme, cols),
    };

    render_pagination(current_row + 1, &list.pagination, theme, cols);

    if let Some(panel) = &list.filter_panel {
        render_filter_panel(header_row + 1, panel, theme, cols);
    }
}

pub fn render_detail_mode(detail: &DetailBody, theme: &Theme, cols: usize) {
    detail::render_detail(BODY_START_ROW + 1, detail, theme, cols);
}

pub fn render_form_mode(form: &FormBody, theme: &Theme, cols: usize) {
    form::render_form(BODY_START_ROW + 1, form, theme, cols);
}

/// Centered status message for the loading and fetch error screens.
pub fn render_status_mode(status: &EmptyState, color: &str, theme: &Theme, cols: usize) {
    render_empty_state(BODY_START_ROW + 2, status, color, theme, cols);
}
