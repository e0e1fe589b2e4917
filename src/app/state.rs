//! Application state management and view model computation.
//!
//! [`AppState`] is the explicit session container passed to the event handler.
//! It owns the record store, the notification queue, the list view-model, the
//! display mode, and the transient UI state (screen, input mode, form, cursors).
//!
//! # View Model Computation
//!
//! `compute_viewmodel` turns a state snapshot into a [`UIViewModel`]: which body
//! to draw (loading, error, list, detail, form), the rows of the current page,
//! search highlight ranges, the filter dropdown, and the footer hints.
//!
//! # Example
//!
//! ```rust
//! use userspot::app::AppState;
//! use userspot::store::DisplayMode;
//! use userspot::ui::theme::ThemeSet;
//!
//! let state = AppState::new(ThemeSet::default(), DisplayMode::Dark);
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert_eq!(viewmodel.header.title, "UserSpot");
//! ```

use super::detail::DetailViewModel;
use super::form::{FormField, FormKind, UserForm};
use super::list::{ListViewModel, PageSize};
use super::modes::{FetchStatus, InputMode, Screen, SearchFocus};
use crate::app::Action;
use crate::domain::{NotificationCard, NotificationKind, User};
use crate::store::{DisplayMode, NotificationQueue, RecordStore};
use crate::ui::helpers::{match_ranges, truncate};
use crate::ui::theme::{Theme, ThemeSet};
use crate::ui::viewmodel::{
    Body, ConfirmInfo, DetailBody, DisplayItem, EmptyState, FilterOptionInfo, FilterPanelInfo,
    FilterSection, FooterInfo, FormBody, FormFieldInfo, HeaderInfo, ListBody, NotificationInfo,
    PaginationInfo, SearchBarInfo, UIViewModel,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Title shown in the header bar.
pub const APP_TITLE: &str = "UserSpot";

/// Default users endpoint.
pub const DEFAULT_USERS_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Authoritative user records for the session.
    pub records: RecordStore,

    /// Visible notification cards and their pending expiries.
    pub notifications: NotificationQueue,

    /// Search, filter, sort, and pagination over `records`.
    pub list: ListViewModel,

    /// Current display mode. Persisted through `Action::PersistMode`.
    pub mode: DisplayMode,

    pub screen: Screen,

    /// Determines active keybindings and what the footer advertises.
    pub input_mode: InputMode,

    /// State of the one-time fetch that seeds `records`.
    pub fetch: FetchStatus,

    /// Add or edit form, present while `input_mode` is `Form`.
    pub form: Option<UserForm>,

    /// Zero-based row within the visible page.
    pub selected_row: usize,

    /// Zero-based position within the flattened filter options.
    pub filter_cursor: usize,

    pub themes: ThemeSet,

    /// Endpoint requested when the list mounts with an empty store.
    pub users_url: String,

    rng: SmallRng,
}

impl AppState {
    /// Creates an empty session using the given themes and initial display mode.
    #[must_use]
    pub fn new(themes: ThemeSet, mode: DisplayMode) -> Self {
        Self {
            records: RecordStore::new(),
            notifications: NotificationQueue::new(),
            list: ListViewModel::default(),
            mode,
            screen: Screen::List,
            input_mode: InputMode::Normal,
            fetch: FetchStatus::Idle,
            form: None,
            selected_row: 0,
            filter_cursor: 0,
            themes,
            users_url: DEFAULT_USERS_URL.to_string(),
            rng: SmallRng::from_entropy(),
        }
    }

    #[must_use]
    pub fn with_users_url(mut self, url: impl Into<String>) -> Self {
        self.users_url = url.into();
        self
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.list.set_page_size(page_size);
        self
    }

    /// Replaces the coordinate generator, typically with a seeded one in tests.
    #[must_use]
    pub fn with_rng(mut self, rng: SmallRng) -> Self {
        self.rng = rng;
        self
    }

    /// Theme for the current display mode.
    #[must_use]
    pub const fn theme(&self) -> &Theme {
        self.themes.for_mode(self.mode)
    }

    /// Recomputes the list from the store and keeps the row cursor on the page.
    pub fn refresh_list(&mut self) {
        self.list.recompute(&self.records);
        self.clamp_selection();
    }

    pub fn clamp_selection(&mut self) {
        let visible = self.list.visible_page().len();
        self.selected_row = if visible == 0 {
            0
        } else {
            self.selected_row.min(visible - 1)
        };
    }

    /// Moves the row cursor down, wrapping to the top of the page.
    pub fn move_selection_down(&mut self) {
        let visible = self.list.visible_page().len();
        if visible == 0 {
            return;
        }
        self.selected_row = (self.selected_row + 1) % visible;
    }

    /// Moves the row cursor up, wrapping to the bottom of the page.
    pub fn move_selection_up(&mut self) {
        let visible = self.list.visible_page().len();
        if visible == 0 {
            return;
        }
        self.selected_row = self.selected_row.checked_sub(1).unwrap_or(visible - 1);
    }

    /// Record under the row cursor on the current page.
    #[must_use]
    pub fn selected_user(&self) -> Option<&User> {
        self.list.visible_page().get(self.selected_row)
    }

    /// Record addressed by the detail screen, if that screen is showing.
    #[must_use]
    pub fn detail(&self) -> Option<DetailViewModel> {
        match self.screen {
            Screen::Detail(id) => Some(DetailViewModel::new(id)),
            Screen::List => None,
        }
    }

    pub fn move_filter_cursor_down(&mut self) {
        let count = self.records.filter_options().len();
        if count > 0 {
            self.filter_cursor = (self.filter_cursor + 1) % count;
        }
    }

    pub fn move_filter_cursor_up(&mut self) {
        let count = self.records.filter_options().len();
        if count > 0 {
            self.filter_cursor = self.filter_cursor.checked_sub(1).unwrap_or(count - 1);
        }
    }

    /// Filter option under the cursor.
    #[must_use]
    pub fn filter_option_at_cursor(&self) -> Option<String> {
        self.records
            .filter_options()
            .all()
            .get(self.filter_cursor)
            .map(|s| (*s).to_string())
    }

    /// Fills the open form's coordinates from the session generator.
    pub fn generate_coordinates(&mut self) -> bool {
        let Some(form) = self.form.as_mut() else {
            return false;
        };
        form.generate_coordinates(&mut self.rng);
        true
    }

    /// Pushes a card and returns the action that arms its expiry timer.
    pub fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) -> Action {
        let id = self.notifications.next_id(now_millis());
        let card = match kind {
            NotificationKind::Success => NotificationCard::success(id.clone(), message),
            NotificationKind::Error => NotificationCard::error(id.clone(), message),
        };
        self.notifications.push(card);
        Action::ScheduleNotificationExpiry { id }
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// `rows` caps how many notification cards are stacked and `cols` bounds the
    /// active filter summary. Table columns are truncated by the table component.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let max_cards = (rows / 8).max(1);
        let skip = self.notifications.len().saturating_sub(max_cards);

        UIViewModel {
            header: HeaderInfo {
                title: APP_TITLE.to_string(),
                mode_label: self.mode.as_str().to_string(),
            },
            footer: self.compute_footer(),
            notifications: self
                .notifications
                .iter()
                .skip(skip)
                .map(|c| NotificationInfo {
                    message: c.message.clone(),
                    kind: c.kind,
                })
                .collect(),
            body: self.compute_body(cols),
            confirm: self.compute_confirm(),
        }
    }

    fn compute_body(&self, cols: usize) -> Body {
        if let (InputMode::Form, Some(form)) = (self.input_mode, self.form.as_ref()) {
            return Body::Form(Self::compute_form(form));
        }

        if let Some(detail) = self.detail() {
            let title = detail
                .resolve(&self.records)
                .map(|u| u.name.clone())
                .unwrap_or_default();
            return Body::Detail(DetailBody {
                title,
                fields: detail
                    .fields(&self.records)
                    .into_iter()
                    .map(|(label, value)| (label.to_string(), value))
                    .collect(),
            });
        }

        match &self.fetch {
            FetchStatus::Loading => Body::Loading,
            FetchStatus::Failed(message) if self.records.is_empty() => Body::Error(EmptyState {
                message: format!("Error: {message}"),
                subtitle: "Users could not be loaded this session".to_string(),
            }),
            _ => Body::List(self.compute_list(cols)),
        }
    }

    fn compute_list(&self, cols: usize) -> ListBody {
        let query = self.list.query();
        let show_search = matches!(self.input_mode, InputMode::Search(_)) || !query.is_empty();
        let highlight = !query.trim().is_empty();

        let rows: Vec<DisplayItem> = self
            .list
            .visible_page()
            .iter()
            .enumerate()
            .map(|(idx, user)| DisplayItem {
                name: user.name.clone(),
                email: user.email.clone(),
                address: user.address_line(),
                company: user.company.name.clone(),
                is_selected: idx == self.selected_row
                    && matches!(
                        self.input_mode,
                        InputMode::Normal
                            | InputMode::Search(SearchFocus::Navigating)
                            | InputMode::ConfirmDelete(_)
                    ),
                highlight_ranges: if highlight {
                    match_ranges(&user.name, query)
                } else {
                    vec![]
                },
            })
            .collect();

        let empty_state = rows.is_empty().then(|| {
            if self.records.is_empty() {
                EmptyState {
                    message: "No users yet".to_string(),
                    subtitle: "Press 'a' to add one".to_string(),
                }
            } else {
                EmptyState {
                    message: "No users match".to_string(),
                    subtitle: "Adjust the search or filters".to_string(),
                }
            }
        });

        ListBody {
            search_bar: show_search.then(|| SearchBarInfo {
                query: query.to_string(),
                typing: self.input_mode == InputMode::Search(SearchFocus::Typing),
            }),
            name_sort: self.list.sort().name,
            email_sort: self.list.sort().email,
            rows,
            empty_state,
            pagination: PaginationInfo {
                label: format!("{} OF {}", self.list.page(), self.list.total_pages()),
                can_go_back: self.list.can_go_back(),
                can_go_forward: self.list.can_go_forward(),
                page_size: self.list.page_size().get(),
            },
            filter_panel: self.list.filter_panel_open().then(|| self.compute_filter_panel()),
            active_filters: truncate(&self.list.filters().join(", "), cols / 2),
        }
    }

    fn compute_filter_panel(&self) -> FilterPanelInfo {
        let options = self.records.filter_options();
        let offset = options.cities.len();
        let section = |title: &str, values: &[String], base: usize| FilterSection {
            title: title.to_string(),
            options: values
                .iter()
                .enumerate()
                .map(|(i, value)| FilterOptionInfo {
                    label: value.clone(),
                    checked: self.list.is_filter_active(value),
                    is_cursor: base + i == self.filter_cursor,
                })
                .collect(),
        };

        FilterPanelInfo {
            sections: vec![
                section("City", &options.cities, 0),
                section("Company", &options.companies, offset),
            ],
        }
    }

    fn compute_form(form: &UserForm) -> FormBody {
        let title = match form.kind() {
            FormKind::Create => "Add User",
            FormKind::Edit(_) => "Edit User",
        };

        FormBody {
            title: title.to_string(),
            fields: FormField::ALL
                .into_iter()
                .map(|field| FormFieldInfo {
                    label: field.label().to_string(),
                    value: form.value(field).to_string(),
                    required: field.is_required(),
                    read_only: field.is_read_only(),
                    focused: form.focused() == field,
                    error: form.error_for(field).map(str::to_string),
                })
                .collect(),
        }
    }

    fn compute_confirm(&self) -> Option<ConfirmInfo> {
        let InputMode::ConfirmDelete(id) = self.input_mode else {
            return None;
        };
        let name = self.records.get(id).map(|u| u.name.as_str()).unwrap_or_default();
        Some(ConfirmInfo {
            title: "Are you sure ?".to_string(),
            message: format!("Delete {name} data it can't be recovered."),
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.input_mode, self.screen) {
            (InputMode::ConfirmDelete(_), _) => "y/Enter: delete  n/ESC: cancel",
            (InputMode::Form, _) => {
                "Tab/↓: next  ↑: prev  Ctrl+g: coordinates  Enter: save  ESC: cancel"
            }
            (InputMode::FilterPanel, _) => "j/k: move  Space: toggle  c: clear  f/ESC: close",
            (InputMode::Search(SearchFocus::Typing), _) => {
                "ESC: clear search  Enter: browse results  Type to search"
            }
            (InputMode::Search(SearchFocus::Navigating), _) => {
                "j/k: row  h/l: page  Enter: open  /: edit query  ESC: clear search"
            }
            (InputMode::Normal, Screen::Detail(_)) => "e: edit  d: delete  m: mode  ESC: back",
            (InputMode::Normal, Screen::List) => {
                "j/k: row  h/l: page  /: search  f: filter  n/e: sort  p: per page  a: add  d: delete  m: mode  q: quit"
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

/// Current wall-clock time in epoch milliseconds.
#[must_use]
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(names: &[&str]) -> AppState {
        let mut state = AppState::new(ThemeSet::default(), DisplayMode::Dark);
        let users = names
            .iter()
            .zip(1..)
            .map(|(name, id)| {
                let mut u = User::empty(id);
                u.name = (*name).to_string();
                u.address.city = format!("City{id}");
                u.company.name = format!("Co{id}");
                u
            })
            .collect();
        state.records.seed(users);
        state.refresh_list();
        state
    }

    #[test]
    fn selection_wraps_within_page() {
        let mut state = state_with(&["a", "b", "c"]);
        state.move_selection_up();
        assert_eq!(state.selected_user().map(|u| u.name.as_str()), Some("c"));
        state.move_selection_down();
        assert_eq!(state.selected_row, 0);
    }

    #[test]
    fn loading_body_while_fetching() {
        let mut state = AppState::new(ThemeSet::default(), DisplayMode::Dark);
        state.fetch = FetchStatus::Loading;
        assert_eq!(state.compute_viewmodel(24, 80).body, Body::Loading);
    }

    #[test]
    fn failed_fetch_shows_inline_error() {
        let mut state = AppState::new(ThemeSet::default(), DisplayMode::Dark);
        state.fetch = FetchStatus::Failed("status 500".into());
        let Body::Error(empty) = state.compute_viewmodel(24, 80).body else {
            panic!("expected error body");
        };
        assert_eq!(empty.message, "Error: status 500");
    }

    #[test]
    fn pagination_label_and_rows() {
        let state = state_with(&["a", "b", "c", "d", "e", "f", "g"]);
        let Body::List(list) = state.compute_viewmodel(24, 80).body else {
            panic!("expected list body");
        };
        assert_eq!(list.pagination.label, "1 OF 2");
        assert_eq!(list.rows.len(), 5);
        assert!(list.rows[0].is_selected);
        assert!(!list.pagination.can_go_back);
        assert!(list.pagination.can_go_forward);
    }

    #[test]
    fn filter_panel_lists_cities_then_companies() {
        let mut state = state_with(&["a", "b"]);
        state.list.open_filter_panel();
        state.filter_cursor = 2;
        let Body::List(list) = state.compute_viewmodel(24, 80).body else {
            panic!("expected list body");
        };
        let panel = list.filter_panel.unwrap();
        assert_eq!(panel.sections[0].title, "City");
        assert_eq!(panel.sections[1].options[0].label, "Co1");
        assert!(panel.sections[1].options[0].is_cursor);
        assert_eq!(state.filter_option_at_cursor().as_deref(), Some("Co1"));
    }

    #[test]
    fn confirm_dialog_names_record() {
        let mut state = state_with(&["Kurtis Weissnat"]);
        state.input_mode = InputMode::ConfirmDelete(1);
        let confirm = state.compute_viewmodel(24, 80).confirm.unwrap();
        assert_eq!(confirm.message, "Delete Kurtis Weissnat data it can't be recovered.");
    }

    #[test]
    fn detail_of_missing_record_has_empty_fields() {
        let mut state = state_with(&["a"]);
        state.screen = Screen::Detail(99);
        let Body::Detail(detail) = state.compute_viewmodel(24, 80).body else {
            panic!("expected detail body");
        };
        assert!(detail.title.is_empty());
        assert!(detail.fields.iter().all(|(_, v)| v.is_empty()));
    }

    #[test]
    fn notify_schedules_expiry_for_the_card() {
        let mut state = state_with(&[]);
        let action = state.notify(NotificationKind::Success, "User added.");
        let Action::ScheduleNotificationExpiry { id } = action else {
            panic!("expected expiry action");
        };
        assert_eq!(state.notifications.latest().map(|c| c.id.clone()), Some(id));
        assert_eq!(state.notifications.pending_expiries(), 1);
    }
}
