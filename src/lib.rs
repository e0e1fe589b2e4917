//! UserSpot: a Zellij plugin for browsing and editing a user directory.
//!
//! UserSpot fetches a list of users from a REST endpoint once per session and
//! keeps them in memory. On top of that store it provides:
//! - Search across name, email, and company name with match highlighting
//! - City and company filters from a dropdown
//! - Tri-state sorting by name and email
//! - Pagination with 2, 5, or 10 rows per page
//! - A detail screen, an add and edit form, and delete with confirmation
//! - Self-expiring notification cards
//! - A light and dark display mode that persists across sessions
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling and actions                       │
//! │  - List, detail, and form view-models               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │
//! ┌───────────────┐   ┌──────────────────────────────┐
//! │ UI Layer      │   │ Store Layer (store/)         │
//! │ (ui/)         │   │ - Record store               │
//! │ - Rendering   │   │ - Notification queue         │
//! │ - Theming     │   │ - Display mode persistence   │
//! │ - Components  │   │                              │
//! └───────────────┘   └──────────────────────────────┘
//!         │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths, users endpoint (infrastructure/)  │
//! │  - User model, notifications, errors (domain/)      │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing to a rotating OTLP file    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/userspot.wasm" {
//!         api_base_url "https://jsonplaceholder.typicode.com"
//!         page_size "5"
//!         light_theme_file "~/.config/userspot/light.toml"
//!         dark_theme_file "~/.config/userspot/dark.toml"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use userspot::{handle_event, initialize, Action, Config, Event};
//! use userspot::store::DisplayMode;
//!
//! let mut state = initialize(&Config::default(), DisplayMode::Dark);
//! let (_, actions) = handle_event(&mut state, &Event::ListMounted)?;
//! assert_eq!(
//!     actions,
//!     vec![Action::FetchUsers {
//!         url: "https://jsonplaceholder.typicode.com/users".to_string()
//!     }]
//! );
//! # Ok::<(), userspot::UserspotError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod store;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode, PageSize, Screen, SearchFocus};
pub use domain::{Result, User, UserspotError};
pub use ui::Theme;

use infrastructure::{expand_tilde, users_url};
use std::collections::BTreeMap;
use store::DisplayMode;
use ui::ThemeSet;

/// Default REST API base.
pub const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the REST API; `/users` is appended.
    pub api_base_url: String,

    /// Initial rows per page. Only 2, 5, and 10 are accepted. Default: 5
    pub page_size: PageSize,

    /// TOML theme replacing the built-in light theme.
    pub light_theme_file: Option<String>,

    /// TOML theme replacing the built-in dark theme.
    pub dark_theme_file: Option<String>,

    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: PageSize::default(),
            light_theme_file: None,
            dark_theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// # Parsing Rules
    ///
    /// - `api_base_url`: blank values fall back to the default
    /// - `page_size`: must parse to 2, 5, or 10; anything else falls back to 5
    /// - `light_theme_file` / `dark_theme_file`: a leading `~` maps to `/host`
    /// - `trace_level`: passed through
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use userspot::{Config, PageSize};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page_size".to_string(), "10".to_string());
    /// map.insert("dark_theme_file".to_string(), "~/dark.toml".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.page_size, PageSize::Ten);
    /// assert_eq!(config.dark_theme_file.as_deref(), Some("/host/dark.toml"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let api_base_url = config
            .get("api_base_url")
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map_or_else(|| DEFAULT_API_BASE_URL.to_string(), String::from);

        let page_size = config.get("page_size").map_or_else(PageSize::default, |raw| {
            raw.trim()
                .parse::<usize>()
                .map_err(|e| UserspotError::Config(format!("invalid page size {raw:?}: {e}")))
                .and_then(PageSize::try_from)
                .unwrap_or_else(|e| {
                    tracing::warn!(error = %e, "ignoring page_size option");
                    PageSize::default()
                })
        });

        let theme_file = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(expand_tilde)
        };

        Self {
            api_base_url,
            page_size,
            light_theme_file: theme_file("light_theme_file"),
            dark_theme_file: theme_file("dark_theme_file"),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Builds the session state from configuration and the persisted display mode.
///
/// Loads both themes (falling back to the built-ins on any file error), points
/// the fetch at `{api_base_url}/users`, and applies the initial page size. The
/// record store starts empty; the first `ListMounted` event fetches it.
#[must_use]
pub fn initialize(config: &Config, mode: DisplayMode) -> AppState {
    tracing::debug!(mode = %mode, page_size = config.page_size.get(), "initializing userspot plugin");

    let themes = ThemeSet::load(
        config.light_theme_file.as_deref(),
        config.dark_theme_file.as_deref(),
    );

    AppState::new(themes, mode)
        .with_users_url(users_url(&config.api_base_url))
        .with_page_size(config.page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_options_use_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn invalid_page_sizes_fall_back_to_five() {
        for raw in ["3", "ten", "-2", ""] {
            let config = Config::from_zellij(&options(&[("page_size", raw)]));
            assert_eq!(config.page_size, PageSize::Five, "page_size {raw:?}");
        }
    }

    #[test]
    fn initialize_applies_url_and_page_size() {
        let config = Config::from_zellij(&options(&[
            ("api_base_url", "http://localhost:3000/"),
            ("page_size", "2"),
        ]));
        let state = initialize(&config, DisplayMode::Light);
        assert_eq!(state.users_url, "http://localhost:3000/users");
        assert_eq!(state.list.page_size(), PageSize::Two);
        assert_eq!(state.mode, DisplayMode::Light);
    }
}
