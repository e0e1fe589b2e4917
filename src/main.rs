//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the UserSpot library and the Zellij plugin
//! system. It translates Zellij events into library events, runs them through
//! `handle_event`, and turns the returned actions into Zellij API calls.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, read the persisted display mode,
//!    create `AppState`
//! 2. **Permissions**: Request `WebAccess`; a grant mounts the list, which fetches
//!    the users once
//! 3. **Update**: Map events, delegate to the library, execute actions
//! 4. **Render**: Call the library render function
//!
//! # Event Mapping
//!
//! - `PermissionRequestResult` → `Event::PermissionsResult { granted }`
//! - `WebRequestResult` → `Event::UsersFetched` or `Event::FetchFailed`
//! - `Timer` → `Event::NotificationExpired` (one timer per notification)
//! - `Visible(false)` → `Event::FocusLost`; `Visible(true)` → `Event::ListMounted`
//! - `Key` → mode-dependent, see below
//!
//! # Keybindings
//!
//! List:
//! - `j`/`k`/arrows: Move row; `h`/`l`/arrows: Change page
//! - `/`: Search; `f`: Filter dropdown; `n`/`e`: Sort by name/email
//! - `p`: Rows per page; `a`: Add; `Enter`: Details; `d`: Delete
//! - `m`: Toggle display mode; `x`: Dismiss notification; `q`: Close plugin
//!
//! Search: type to filter, `Enter`/`Tab`/`Down` to browse results, `/` back to
//! the query, `Esc` to clear.
//!
//! Filter dropdown: `j`/`k` move, `Space`/`Enter` toggle, `c` clear all,
//! `f`/`Esc` close.
//!
//! Detail: `e` edit, `d` delete, `Esc` back.
//!
//! Form: `Tab`/`Down` next field, `Up` previous, `Ctrl+g` generate
//! coordinates, `Enter` save, `Esc` cancel.
//!
//! Delete confirmation: `y`/`Enter` delete, `n`/`Esc` cancel.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use userspot::app::modes::{InputMode, Screen, SearchFocus};
use userspot::infrastructure::{decode_users, mode_file_path};
use userspot::store::{load_or_default, DisplayMode, JsonModeStore, MemoryModeStore, ModeStore, NOTIFICATION_TTL_SECS};
use userspot::{handle_event, Action, Config, Event};

register_plugin!(State);

/// Context key tagging the users request so unrelated web results are ignored.
const REQUEST_KEY: &str = "request";
const USERS_REQUEST: &str = "users";

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with Zellij-specific concerns: where the
/// display mode is persisted and whether web access has been granted.
struct State {
    /// Core application state from library layer.
    app: userspot::AppState,

    /// Persisted display mode backend. Falls back to memory if the data
    /// directory is unavailable.
    mode_store: Box<dyn ModeStore>,

    /// Set once the `WebAccess` permission is granted.
    web_access: bool,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: userspot::initialize(&Config::default(), DisplayMode::default()),
            mode_store: Box::new(MemoryModeStore::default()),
            web_access: false,
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, initializes tracing and state, requests
    /// permissions, and subscribes to events.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        userspot::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(config = ?config, "parsed configuration");

        self.mode_store = match JsonModeStore::new(mode_file_path()) {
            Ok(store) => Box::new(store),
            Err(e) => {
                tracing::warn!(error = %e, "mode store unavailable, display mode will not persist");
                Box::new(MemoryModeStore::default())
            }
        };
        let mode = load_or_default(self.mode_store.as_ref());

        self.app = userspot::initialize(&config, mode);
        tracing::debug!("app state initialized");

        request_permission(&[PermissionType::WebAccess]);

        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::Timer,
            EventType::Visible,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Translates a Zellij event, delegates to `handle_event`, and executes the
    /// resulting actions. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                self.web_access = matches!(status, PermissionStatus::Granted);
                Event::PermissionsResult {
                    granted: self.web_access,
                }
            }
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_result(status, &body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::NotificationExpired,
            zellij_tile::prelude::Event::Visible(true) if self.web_access => Event::ListMounted,
            zellij_tile::prelude::Event::Visible(false) => Event::FocusLost,
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        userspot::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::Visible(visible) => format!("Visible({visible})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps the users response to a fetch outcome. Results for other requests
    /// are ignored.
    fn map_web_result(status: u16, body: &[u8], context: &BTreeMap<String, String>) -> Option<Event> {
        if context.get(REQUEST_KEY).map(String::as_str) != Some(USERS_REQUEST) {
            tracing::debug!(context = ?context, "ignoring unrelated web result");
            return None;
        }

        Some(match decode_users(status, body) {
            Ok(users) => Event::UsersFetched { users },
            Err(e) => Event::FetchFailed {
                error: e.to_string(),
            },
        })
    }

    /// Maps keyboard events to application events for the current input mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, input_mode = ?self.app.input_mode, "key event");

        match self.app.input_mode {
            InputMode::Normal => match self.app.screen {
                Screen::List => Self::map_list_key(key),
                Screen::Detail(_) => Self::map_detail_key(key),
            },
            InputMode::Search(SearchFocus::Typing) => Self::map_search_typing_key(key),
            InputMode::Search(SearchFocus::Navigating) => Self::map_search_results_key(key),
            InputMode::FilterPanel => Self::map_filter_key(key),
            InputMode::Form => Self::map_form_key(key),
            InputMode::ConfirmDelete(_) => Self::map_confirm_key(key),
        }
    }

    fn map_list_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Left | BareKey::Char('h') => Event::PrevPage,
            BareKey::Right | BareKey::Char('l') => Event::NextPage,
            BareKey::Enter => Event::OpenDetail,
            BareKey::Esc => Event::Escape,
            BareKey::Char('/') => Event::SearchMode,
            BareKey::Char('f') => Event::ToggleFilterPanel,
            BareKey::Char('n') => Event::SortByName,
            BareKey::Char('e') => Event::SortByEmail,
            BareKey::Char('p') => Event::CyclePageSize,
            BareKey::Char('a') => Event::NewUser,
            BareKey::Char('d') => Event::RequestDelete,
            BareKey::Char('m') => Event::ToggleMode,
            BareKey::Char('x') => Event::DismissNotification,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    fn map_detail_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Esc | BareKey::Backspace => Event::Escape,
            BareKey::Char('e') => Event::EditUser,
            BareKey::Char('d') => Event::RequestDelete,
            BareKey::Char('m') => Event::ToggleMode,
            BareKey::Char('x') => Event::DismissNotification,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    fn map_search_typing_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Esc => Event::ExitSearch,
            BareKey::Enter | BareKey::Tab | BareKey::Down => Event::FocusResults,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) if !key.has_modifiers(&[KeyModifier::Ctrl]) => Event::Char(c),
            _ => return None,
        })
    }

    fn map_search_results_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Char('/') | BareKey::Backspace => Event::FocusSearchBar,
            BareKey::Esc => Event::ExitSearch,
            _ => return Self::map_list_key(key).filter(|e| {
                !matches!(e, Event::SearchMode | Event::ToggleFilterPanel | Event::Escape)
            }),
        })
    }

    fn map_filter_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Char(' ') | BareKey::Enter => Event::ToggleFilterOption,
            BareKey::Char('c') => Event::ClearFilters,
            BareKey::Esc | BareKey::Char('f') => Event::ToggleFilterPanel,
            _ => return None,
        })
    }

    fn map_form_key(key: &KeyWithModifier) -> Option<Event> {
        if key.bare_key == BareKey::Char('g') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::GenerateCoordinates);
        }

        Some(match key.bare_key {
            BareKey::Tab | BareKey::Down => Event::NextField,
            BareKey::Up => Event::PrevField,
            BareKey::Enter => Event::SubmitForm,
            BareKey::Esc => Event::CancelForm,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) if !key.has_modifiers(&[KeyModifier::Ctrl]) => Event::Char(c),
            _ => return None,
        })
    }

    fn map_confirm_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Char('y') | BareKey::Enter => Event::ConfirmDelete,
            BareKey::Char('n') | BareKey::Esc => Event::CancelDelete,
            _ => return None,
        })
    }

    /// Executes an action returned from event handling.
    ///
    /// # Actions
    ///
    /// - `CloseFocus`: Hide the plugin pane
    /// - `FetchUsers`: Issue the users `GET` request
    /// - `ScheduleNotificationExpiry`: Arm a timer for one notification lifetime
    /// - `PersistMode`: Write the display mode to the mode store
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&mut self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::FetchUsers { url } => {
                tracing::debug!(url = %url, "requesting users");
                let context = BTreeMap::from([(REQUEST_KEY.to_string(), USERS_REQUEST.to_string())]);
                web_request(url.as_str(), HttpVerb::Get, BTreeMap::new(), vec![], context);
            }
            Action::ScheduleNotificationExpiry { id } => {
                tracing::debug!(id = %id, ttl_secs = NOTIFICATION_TTL_SECS, "arming notification timer");
                set_timeout(NOTIFICATION_TTL_SECS);
            }
            Action::PersistMode(mode) => {
                if let Err(e) = self.mode_store.save(*mode) {
                    tracing::warn!(error = %e, mode = %mode, "failed to persist display mode");
                }
            }
        }
    }
}
