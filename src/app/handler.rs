//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single entry point for everything that can change the
//! session: keystrokes already mapped by the plugin shim, the fetch result, timer
//! firings, and focus changes. It mutates [`AppState`] and returns whether a
//! re-render is needed along with the side effects to perform.
//!
//! # Event Types
//!
//! - **Lifecycle**: `ListMounted`, `PermissionsResult`, `UsersFetched`, `FetchFailed`
//! - **List**: `KeyDown`, `KeyUp`, `NextPage`, `PrevPage`, `CyclePageSize`,
//!   `SortByName`, `SortByEmail`, `OpenDetail`
//! - **Search**: `SearchMode`, `FocusSearchBar`, `FocusResults`, `ExitSearch`,
//!   `Char`, `Backspace`
//! - **Filter panel**: `ToggleFilterPanel`, `ToggleFilterOption`, `ClearFilters`,
//!   `FocusLost`
//! - **Mutations**: `NewUser`, `EditUser`, `SubmitForm`, `RequestDelete`,
//!   `ConfirmDelete`
//! - **Chrome**: `ToggleMode`, `DismissNotification`, `NotificationExpired`,
//!   `CloseFocus`, `Escape`
//!
//! # Example
//!
//! ```rust
//! use userspot::app::{handle_event, Action, AppState, Event};
//! use userspot::store::DisplayMode;
//! use userspot::ui::theme::ThemeSet;
//!
//! let mut state = AppState::new(ThemeSet::default(), DisplayMode::Dark);
//! let (render, actions) = handle_event(&mut state, &Event::ListMounted)?;
//! assert!(render);
//! assert!(matches!(actions[0], Action::FetchUsers { .. }));
//! # Ok::<(), userspot::UserspotError>(())
//! ```

use super::form::{FormKind, UserForm};
use super::modes::{FetchStatus, InputMode, Screen, SearchFocus};
use super::state::now_millis;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{NotificationKind, User};

/// Events triggered by user input or by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The list screen became active. Starts the fetch if the store is empty.
    ListMounted,
    /// Outcome of the permission prompt. A grant mounts the list.
    PermissionsResult { granted: bool },
    /// The users endpoint answered with a decodable list.
    UsersFetched { users: Vec<User> },
    /// The users request failed or its body could not be decoded.
    FetchFailed { error: String },

    /// Moves the row, filter, or field cursor down depending on the mode.
    KeyDown,
    /// Moves the row, filter, or field cursor up depending on the mode.
    KeyUp,
    NextPage,
    PrevPage,
    /// Cycles rows per page through 2, 5, and 10.
    CyclePageSize,
    SortByName,
    SortByEmail,
    /// Opens the detail screen for the selected row.
    OpenDetail,

    /// Opens the search bar with typing focus.
    SearchMode,
    /// Returns focus from the results to the query.
    FocusSearchBar,
    /// Moves focus from the query to the results.
    FocusResults,
    /// Closes the search bar and clears the query.
    ExitSearch,
    /// Types into the search bar or the focused form field.
    Char(char),
    Backspace,

    ToggleFilterPanel,
    /// Toggles the filter token under the panel cursor.
    ToggleFilterOption,
    /// Deactivates every filter token.
    ClearFilters,
    /// Focus left the plugin; open panels close.
    FocusLost,

    NewUser,
    /// Opens the edit form for the record on the detail screen.
    EditUser,
    NextField,
    PrevField,
    GenerateCoordinates,
    SubmitForm,
    CancelForm,
    /// Asks for confirmation before deleting the selected or displayed record.
    RequestDelete,
    ConfirmDelete,
    CancelDelete,

    ToggleMode,
    /// Removes the most recent notification card.
    DismissNotification,
    /// One notification lifetime timer fired.
    NotificationExpired,
    /// Backs out of whatever currently has focus.
    Escape,
    /// Hides the plugin pane.
    CloseFocus,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. Actions must be executed in order.
///
/// # Errors
///
/// Reserved for failures in state transitions; current transitions are
/// infallible and always return `Ok`.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::ListMounted => Ok(mount_list(state)),
        Event::PermissionsResult { granted } => {
            if *granted {
                Ok(mount_list(state))
            } else {
                tracing::warn!("web access denied - users cannot be fetched");
                Ok((false, vec![]))
            }
        }
        Event::UsersFetched { users } => {
            tracing::debug!(count = users.len(), "users fetched");
            state.fetch = FetchStatus::Loaded;
            if state.records.seed(users.clone()) {
                state.refresh_list();
            }
            Ok((true, vec![]))
        }
        Event::FetchFailed { error } => {
            tracing::error!(error = %error, "user fetch failed");
            state.fetch = FetchStatus::Failed(error.clone());
            let expiry = state.notify(NotificationKind::Error, format!("Error: {error}"));
            Ok((true, vec![expiry]))
        }

        Event::KeyDown => {
            match state.input_mode {
                InputMode::FilterPanel => state.move_filter_cursor_down(),
                InputMode::Form => return handle_event(state, &Event::NextField),
                InputMode::Normal | InputMode::Search(SearchFocus::Navigating)
                    if state.screen == Screen::List =>
                {
                    state.move_selection_down();
                }
                _ => return Ok((false, vec![])),
            }
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            match state.input_mode {
                InputMode::FilterPanel => state.move_filter_cursor_up(),
                InputMode::Form => return handle_event(state, &Event::PrevField),
                InputMode::Normal | InputMode::Search(SearchFocus::Navigating)
                    if state.screen == Screen::List =>
                {
                    state.move_selection_up();
                }
                _ => return Ok((false, vec![])),
            }
            Ok((true, vec![]))
        }
        Event::NextPage => {
            if !browsing_list(state) || !state.list.can_go_forward() {
                return Ok((false, vec![]));
            }
            state.list.change_page(1);
            state.selected_row = 0;
            Ok((true, vec![]))
        }
        Event::PrevPage => {
            if !browsing_list(state) || !state.list.can_go_back() {
                return Ok((false, vec![]));
            }
            state.list.change_page(-1);
            state.selected_row = 0;
            Ok((true, vec![]))
        }
        Event::CyclePageSize => {
            if state.screen != Screen::List {
                return Ok((false, vec![]));
            }
            let next = state.list.page_size().next();
            tracing::debug!(page_size = next.get(), "page size changed");
            state.list.set_page_size(next);
            state.clamp_selection();
            Ok((true, vec![]))
        }
        Event::SortByName => {
            if state.screen != Screen::List {
                return Ok((false, vec![]));
            }
            state.list.cycle_name_sort(&state.records);
            state.clamp_selection();
            tracing::debug!(directive = ?state.list.sort().name, "name sort cycled");
            Ok((true, vec![]))
        }
        Event::SortByEmail => {
            if state.screen != Screen::List {
                return Ok((false, vec![]));
            }
            state.list.cycle_email_sort(&state.records);
            state.clamp_selection();
            tracing::debug!(directive = ?state.list.sort().email, "email sort cycled");
            Ok((true, vec![]))
        }
        Event::OpenDetail => {
            if !browsing_list(state) {
                return Ok((false, vec![]));
            }
            let Some(id) = state.selected_user().map(|u| u.id) else {
                tracing::debug!("no user selected");
                return Ok((false, vec![]));
            };
            tracing::debug!(id, "opening detail");
            state.screen = Screen::Detail(id);
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }

        Event::SearchMode => {
            if state.screen != Screen::List {
                return Ok((false, vec![]));
            }
            tracing::debug!("entering search mode");
            state.list.close_filter_panel();
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.list.query().is_empty() {
                state.input_mode = InputMode::Normal;
            } else {
                state.input_mode = InputMode::Search(SearchFocus::Navigating);
            }
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.list.query(), "exiting search mode");
            state.input_mode = InputMode::Normal;
            state.list.set_query("", &state.records);
            state.clamp_selection();
            Ok((true, vec![]))
        }
        Event::Char(c) => match state.input_mode {
            InputMode::Search(SearchFocus::Typing) => {
                state.list.push_query_char(*c, &state.records);
                state.clamp_selection();
                tracing::trace!(query = %state.list.query(), "search query updated");
                Ok((true, vec![]))
            }
            InputMode::Form => {
                let Some(form) = state.form.as_mut() else {
                    return Ok((false, vec![]));
                };
                form.insert_char(*c);
                Ok((true, vec![]))
            }
            _ => Ok((false, vec![])),
        },
        Event::Backspace => match state.input_mode {
            InputMode::Search(SearchFocus::Typing) => {
                state.list.pop_query_char(&state.records);
                state.clamp_selection();
                Ok((true, vec![]))
            }
            InputMode::Form => {
                let Some(form) = state.form.as_mut() else {
                    return Ok((false, vec![]));
                };
                form.backspace();
                Ok((true, vec![]))
            }
            _ => Ok((false, vec![])),
        },

        Event::ToggleFilterPanel => {
            if state.screen != Screen::List {
                return Ok((false, vec![]));
            }
            state.list.toggle_filter_panel();
            if state.list.filter_panel_open() {
                state.input_mode = InputMode::FilterPanel;
                let count = state.records.filter_options().len();
                state.filter_cursor = state.filter_cursor.min(count.saturating_sub(1));
            } else if state.input_mode == InputMode::FilterPanel {
                state.input_mode = InputMode::Normal;
            }
            Ok((true, vec![]))
        }
        Event::ToggleFilterOption => {
            if state.input_mode != InputMode::FilterPanel {
                return Ok((false, vec![]));
            }
            let Some(token) = state.filter_option_at_cursor() else {
                return Ok((false, vec![]));
            };
            state.list.toggle_filter(&token, &state.records);
            state.clamp_selection();
            Ok((true, vec![]))
        }
        Event::ClearFilters => {
            if state.list.filters().is_empty() {
                return Ok((false, vec![]));
            }
            state.list.clear_filters(&state.records);
            state.clamp_selection();
            Ok((true, vec![]))
        }
        Event::FocusLost => {
            if !state.list.filter_panel_open() {
                return Ok((false, vec![]));
            }
            tracing::debug!("focus lost, closing filter panel");
            state.list.focus_lost();
            if state.input_mode == InputMode::FilterPanel {
                state.input_mode = InputMode::Normal;
            }
            Ok((true, vec![]))
        }

        Event::NewUser => {
            if !browsing_list(state) {
                return Ok((false, vec![]));
            }
            state.form = Some(UserForm::create());
            state.input_mode = InputMode::Form;
            Ok((true, vec![]))
        }
        Event::EditUser => {
            if state.input_mode != InputMode::Normal {
                return Ok((false, vec![]));
            }
            let Some(user) = state.detail().and_then(|d| d.resolve(&state.records)) else {
                return Ok((false, vec![]));
            };
            state.form = Some(UserForm::edit(user));
            state.input_mode = InputMode::Form;
            Ok((true, vec![]))
        }
        Event::NextField => {
            let Some(form) = state.form.as_mut() else {
                return Ok((false, vec![]));
            };
            form.focus_next();
            Ok((true, vec![]))
        }
        Event::PrevField => {
            let Some(form) = state.form.as_mut() else {
                return Ok((false, vec![]));
            };
            form.focus_prev();
            Ok((true, vec![]))
        }
        Event::GenerateCoordinates => Ok((state.generate_coordinates(), vec![])),
        Event::SubmitForm => Ok(submit_form(state)),
        Event::CancelForm => {
            if state.form.take().is_none() {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::RequestDelete => {
            if state.input_mode != InputMode::Normal {
                return Ok((false, vec![]));
            }
            let target = match state.screen {
                Screen::List => state.selected_user().map(|u| u.id),
                Screen::Detail(id) => state.records.get(id).map(|u| u.id),
            };
            let Some(id) = target else {
                return Ok((false, vec![]));
            };
            state.input_mode = InputMode::ConfirmDelete(id);
            Ok((true, vec![]))
        }
        Event::ConfirmDelete => {
            let InputMode::ConfirmDelete(id) = state.input_mode else {
                return Ok((false, vec![]));
            };
            state.input_mode = InputMode::Normal;

            let mut actions = vec![];
            if state.records.delete(id).is_some() {
                state.refresh_list();
                actions.push(state.notify(NotificationKind::Success, "User deleted."));
            }

            if state.screen.is_detail() {
                state.screen = Screen::List;
                let (_, mount_actions) = mount_list(state);
                actions.extend(mount_actions);
            }
            Ok((true, actions))
        }
        Event::CancelDelete => {
            if !matches!(state.input_mode, InputMode::ConfirmDelete(_)) {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }

        Event::ToggleMode => {
            state.mode = state.mode.toggle();
            tracing::debug!(mode = %state.mode, "display mode toggled");
            Ok((true, vec![Action::PersistMode(state.mode)]))
        }
        Event::DismissNotification => {
            let Some(id) = state.notifications.latest().map(|c| c.id.clone()) else {
                return Ok((false, vec![]));
            };
            Ok((state.notifications.remove(&id), vec![]))
        }
        Event::NotificationExpired => {
            let before = state.notifications.len();
            let expired = state.notifications.expire_next();
            tracing::debug!(id = ?expired, "notification timer fired");
            Ok((state.notifications.len() != before, vec![]))
        }
        Event::Escape => {
            let next = match (state.input_mode, state.screen) {
                (InputMode::Search(_), _) => Event::ExitSearch,
                (InputMode::FilterPanel, _) => Event::ToggleFilterPanel,
                (InputMode::Form, _) => Event::CancelForm,
                (InputMode::ConfirmDelete(_), _) => Event::CancelDelete,
                (InputMode::Normal, Screen::Detail(_)) => {
                    state.screen = Screen::List;
                    state.clamp_selection();
                    return Ok(mount_list(state));
                }
                (InputMode::Normal, Screen::List) => return Ok((false, vec![])),
            };
            handle_event(state, &next)
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}

/// List screen with no modal input in progress.
fn browsing_list(state: &AppState) -> bool {
    state.screen == Screen::List
        && matches!(
            state.input_mode,
            InputMode::Normal | InputMode::Search(SearchFocus::Navigating)
        )
}

/// Starts the one-time fetch when the list mounts over an empty store.
///
/// A failed fetch is final for the session.
fn mount_list(state: &mut AppState) -> (bool, Vec<Action>) {
    if state.screen != Screen::List {
        return (false, vec![]);
    }
    if !state.records.is_empty() || !state.fetch.can_start() {
        state.refresh_list();
        return (true, vec![]);
    }

    tracing::debug!(url = %state.users_url, "fetching users");
    state.fetch = FetchStatus::Loading;
    (
        true,
        vec![Action::FetchUsers {
            url: state.users_url.clone(),
        }],
    )
}

fn submit_form(state: &mut AppState) -> (bool, Vec<Action>) {
    let Some(form) = state.form.as_mut() else {
        return (false, vec![]);
    };

    if !form.validate() {
        tracing::debug!(errors = form.errors().len(), "form validation failed");
        return (true, vec![]);
    }

    let kind = form.kind();
    let action = match kind {
        FormKind::Create => {
            let id = state.records.next_id(now_millis());
            let user = form.to_user(id);
            state.records.add(user);
            state.notify(NotificationKind::Success, "User added.")
        }
        FormKind::Edit(id) => {
            let user = form.to_user(id);
            state.records.update(user);
            state.notify(NotificationKind::Success, "User updated.")
        }
    };

    state.form = None;
    state.input_mode = InputMode::Normal;
    state.refresh_list();
    (true, vec![action])
}
