//! Screen, input mode, and fetch status state types.
//!
//! These enums decide which keybindings are active and what the renderer
//! draws. The screen says where the user is; the input mode says what the
//! keyboard currently drives on that screen.
//!
//! # Example
//!
//! ```rust
//! use userspot::app::modes::{InputMode, Screen, SearchFocus};
//!
//! let screen = Screen::Detail(3);
//! let input_mode = InputMode::Search(SearchFocus::Typing);
//! assert!(screen.is_detail());
//! assert!(input_mode.is_typing());
//! ```

use crate::domain::UserId;

/// Top-level screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Paginated table of records.
    List,
    /// Single record addressed by identifier.
    Detail(UserId),
}

impl Screen {
    #[must_use]
    pub const fn is_detail(self) -> bool {
        matches!(self, Self::Detail(_))
    }
}

/// Focus state within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// Keystrokes edit the query.
    Typing,
    /// Query is kept; j/k move through the filtered rows.
    Navigating,
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    Normal,

    /// Search bar is open.
    Search(SearchFocus),

    /// Filter dropdown is open; j/k move the cursor, space toggles a token.
    FilterPanel,

    /// Add or edit form has focus.
    Form,

    /// Waiting for the user to confirm deleting a record.
    ConfirmDelete(UserId),
}

impl InputMode {
    /// Whether plain characters should be treated as text input.
    #[must_use]
    pub const fn is_typing(self) -> bool {
        matches!(self, Self::Search(SearchFocus::Typing) | Self::Form)
    }
}

/// Progress of the one-time user list fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

impl FetchStatus {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Whether a new fetch may be issued. Failures are not retried.
    #[must_use]
    pub const fn can_start(&self) -> bool {
        matches!(self, Self::Idle | Self::Loaded)
    }
}
