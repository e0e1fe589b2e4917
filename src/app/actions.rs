//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The handler never touches the network, timers, or the filesystem itself. It
//! returns a `Vec<Action>` and the shim in `main.rs` performs each one in order
//! within the same update call.
//!
//! # Example
//!
//! ```rust
//! use userspot::app::Action;
//! use userspot::store::DisplayMode;
//!
//! let actions = vec![
//!     Action::ScheduleNotificationExpiry { id: "1700000000000".to_string() },
//!     Action::PersistMode(DisplayMode::Light),
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::store::DisplayMode;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Issues the GET request for the user list.
    ///
    /// The response comes back as a `WebRequestResult` event and is mapped to
    /// `UsersFetched` or `FetchFailed`.
    FetchUsers {
        /// Fully qualified endpoint URL.
        url: String,
    },

    /// Arms one notification lifetime timer.
    ///
    /// Exactly one of these is emitted per pushed notification. The timer is
    /// never cancelled; a card dismissed early simply expires as a no-op.
    ScheduleNotificationExpiry {
        /// Identifier of the card the timer belongs to.
        id: String,
    },

    /// Writes the display mode to persistent storage.
    PersistMode(DisplayMode),
}
