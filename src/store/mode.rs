//! Light/dark display mode.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display mode preference, persisted across sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    Light,
    #[default]
    Dark,
}

impl DisplayMode {
    /// The other mode.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parses `"light"` or `"dark"`, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_dark() {
        assert_eq!(DisplayMode::default(), DisplayMode::Dark);
    }

    #[test]
    fn toggle_flips_both_ways() {
        assert_eq!(DisplayMode::Dark.toggle(), DisplayMode::Light);
        assert_eq!(DisplayMode::Light.toggle().toggle(), DisplayMode::Light);
    }

    #[test]
    fn parse_accepts_known_names_only() {
        assert_eq!(DisplayMode::parse(" Light "), Some(DisplayMode::Light));
        assert_eq!(DisplayMode::parse("dark"), Some(DisplayMode::Dark));
        assert_eq!(DisplayMode::parse("sepia"), None);
    }
}
