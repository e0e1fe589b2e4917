//! Notification card model.
//!
//! Cards are short-lived messages stacked in insertion order. The kind is a closed
//! two-case enum that also carries its card colors, so rendering never has to
//! branch on a free-form string.

use serde::{Deserialize, Serialize};

/// Outcome category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    /// Card background color as a hex string.
    #[must_use]
    pub const fn background(self) -> &'static str {
        match self {
            Self::Success => "#C4EC94",
            Self::Error => "#f8c0bf",
        }
    }

    /// Card text color as a hex string.
    #[must_use]
    pub const fn foreground(self) -> &'static str {
        match self {
            Self::Success => "#4F7A11",
            Self::Error => "#a7222f",
        }
    }

    /// Short marker printed before the message.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Success => "✔",
            Self::Error => "✘",
        }
    }
}

/// A single notification card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationCard {
    /// Time-derived identifier, unique within the queue.
    pub id: String,
    pub message: String,
    pub kind: NotificationKind,
}

impl NotificationCard {
    #[must_use]
    pub fn success(id: String, message: impl Into<String>) -> Self {
        Self {
            id,
            message: message.into(),
            kind: NotificationKind::Success,
        }
    }

    #[must_use]
    pub fn error(id: String, message: impl Into<String>) -> Self {
        Self {
            id,
            message: message.into(),
            kind: NotificationKind::Error,
        }
    }
}
