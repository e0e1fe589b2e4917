//! View model types representing renderable UI state.
//!
//! View models are built by `AppState::compute_viewmodel()` and consumed by the
//! renderer. They carry display-ready strings and flags only; no component needs
//! access to the record store or the list view-model.

use crate::app::list::SortDirective;
use crate::domain::NotificationKind;

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub footer: FooterInfo,
    /// Visible notification cards, oldest first.
    pub notifications: Vec<NotificationInfo>,
    pub body: Body,
    /// Modal drawn on top of the body.
    pub confirm: Option<ConfirmInfo>,
}

/// Main content area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// Fetch in flight.
    Loading,
    /// Fetch failed; the message is shown inline.
    Error(EmptyState),
    List(ListBody),
    Detail(DetailBody),
    Form(FormBody),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    /// `"dark"` or `"light"`, shown at the right edge.
    pub mode_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationInfo {
    pub message: String,
    pub kind: NotificationKind,
}

/// Delete confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmInfo {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
    /// Whether keystrokes currently edit the query.
    pub typing: bool,
}

/// Table, search bar, filter dropdown, and pagination for the list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListBody {
    pub search_bar: Option<SearchBarInfo>,
    pub name_sort: SortDirective,
    pub email_sort: SortDirective,
    pub rows: Vec<DisplayItem>,
    pub empty_state: Option<EmptyState>,
    pub pagination: PaginationInfo,
    pub filter_panel: Option<FilterPanelInfo>,
    /// Short summary of active filter tokens, empty when none.
    pub active_filters: String,
}

/// One table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub name: String,
    pub email: String,
    pub address: String,
    pub company: String,
    pub is_selected: bool,
    /// Character ranges of the search match within `name`.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationInfo {
    /// `"{page} OF {total}"`.
    pub label: String,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub page_size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPanelInfo {
    pub sections: Vec<FilterSection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSection {
    pub title: String,
    pub options: Vec<FilterOptionInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptionInfo {
    pub label: String,
    pub checked: bool,
    pub is_cursor: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailBody {
    pub title: String,
    pub fields: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormBody {
    pub title: String,
    pub fields: Vec<FormFieldInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFieldInfo {
    pub label: String,
    pub value: String,
    pub required: bool,
    pub read_only: bool,
    pub focused: bool,
    pub error: Option<String>,
}
