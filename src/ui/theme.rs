//! Theme management and ANSI escape sequence generation.
//!
//! Two built-in themes ship with the plugin, one per display mode. Either can be
//! replaced by a TOML file through the `light_theme_file` and `dark_theme_file`
//! configuration keys.
//!
//! # Built-in Themes
//!
//! - `userspot-dark`: charcoal panels, white text, light-blue accent (default)
//! - `userspot-light`: off-white panels, black text, blue accent
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#ffffff"
//! header_bg = "#2d2d30"
//! selection_fg = "#ffffff"
//! selection_bg = "#252526"
//! text_normal = "#ffffff"
//! text_dim = "#9e9e9e"
//! border = "#252526"
//! accent = "#29b6f6"
//! panel_bg = "#2d2d30"
//! match_highlight_fg = "#252526"
//! match_highlight_bg = "#29b6f6"
//! sort_ascending = "#66bb6a"
//! sort_descending = "#ef5350"
//! error_fg = "#ef5350"
//! empty_state_fg = "#29b6f6"
//! ```

use crate::domain::error::{Result, UserspotError};
use crate::store::DisplayMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the built-in light theme.
pub const LIGHT_THEME: &str = "userspot-light";
/// Name of the built-in dark theme.
pub const DARK_THEME: &str = "userspot-dark";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    pub text_dim: String,

    /// Separator lines and box borders.
    pub border: String,
    /// Search box border, pagination arrows, focused form field.
    pub accent: String,
    /// Background of the filter dropdown and confirm dialog.
    pub panel_bg: String,

    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    /// Ascending sort marker.
    pub sort_ascending: String,
    /// Descending sort marker.
    pub sort_descending: String,

    /// Inline fetch and validation errors.
    pub error_fg: String,

    pub empty_state_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            LIGHT_THEME => include_str!("../../themes/userspot-light.toml"),
            DARK_THEME => include_str!("../../themes/userspot-dark.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Built-in theme matching a display mode.
    #[must_use]
    pub fn for_mode(mode: DisplayMode) -> Self {
        let name = match mode {
            DisplayMode::Light => LIGHT_THEME,
            DisplayMode::Dark => DARK_THEME,
        };
        Self::from_name(name).unwrap_or_else(Self::monochrome)
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`UserspotError::Theme`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| UserspotError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| UserspotError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Palette used only if an embedded theme ever fails to parse.
    fn monochrome() -> Self {
        let white = || "#ffffff".to_string();
        let grey = || "#808080".to_string();
        Self {
            name: "monochrome".to_string(),
            colors: ThemeColors {
                header_fg: white(),
                header_bg: None,
                selection_fg: "#000000".to_string(),
                selection_bg: white(),
                text_normal: white(),
                text_dim: grey(),
                border: grey(),
                accent: white(),
                panel_bg: "#000000".to_string(),
                match_highlight_fg: "#000000".to_string(),
                match_highlight_bg: grey(),
                sort_ascending: white(),
                sort_descending: white(),
                error_fg: white(),
                empty_state_fg: white(),
            },
        }
    }

    /// Converts a hex color to an RGB tuple. Malformed input yields white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground color escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::for_mode(DisplayMode::default())
    }
}

/// The pair of themes the display mode switches between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSet {
    pub light: Theme,
    pub dark: Theme,
}

impl Default for ThemeSet {
    fn default() -> Self {
        Self {
            light: Theme::for_mode(DisplayMode::Light),
            dark: Theme::for_mode(DisplayMode::Dark),
        }
    }
}

impl ThemeSet {
    /// Built-in themes, each optionally replaced by a TOML file.
    ///
    /// A file that fails to load is logged and the built-in theme is kept.
    #[must_use]
    pub fn load(light_file: Option<&str>, dark_file: Option<&str>) -> Self {
        let pick = |file: Option<&str>, mode: DisplayMode| {
            file.map_or_else(
                || Theme::for_mode(mode),
                |path| {
                    Theme::from_file(path).unwrap_or_else(|e| {
                        tracing::debug!(theme_file = %path, error = %e, "failed to load theme from file, using built-in");
                        Theme::for_mode(mode)
                    })
                },
            )
        };

        Self {
            light: pick(light_file, DisplayMode::Light),
            dark: pick(dark_file, DisplayMode::Dark),
        }
    }

    #[must_use]
    pub const fn for_mode(&self, mode: DisplayMode) -> &Theme {
        match mode {
            DisplayMode::Light => &self.light,
            DisplayMode::Dark => &self.dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_themes_parse() {
        assert_eq!(Theme::from_name(LIGHT_THEME).map(|t| t.name), Some(LIGHT_THEME.to_string()));
        assert_eq!(Theme::from_name(DARK_THEME).map(|t| t.name), Some(DARK_THEME.to_string()));
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn theme_set_follows_display_mode() {
        let themes = ThemeSet::default();
        assert_eq!(themes.for_mode(DisplayMode::Light).colors.accent, "#0288d1");
        assert_eq!(themes.for_mode(DisplayMode::Dark).colors.accent, "#29b6f6");
    }

    #[test]
    fn unreadable_theme_file_keeps_builtin() {
        let themes = ThemeSet::load(Some("/definitely/not/here.toml"), None);
        assert_eq!(themes.light.name, LIGHT_THEME);
    }

    #[test]
    fn theme_file_overrides_builtin() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        let mut custom = Theme::for_mode(DisplayMode::Dark);
        custom.name = "custom".into();
        std::fs::write(&path, toml::to_string(&custom).unwrap()).unwrap();

        let themes = ThemeSet::load(None, path.to_str());
        assert_eq!(themes.dark.name, "custom");
        assert_eq!(themes.light.name, LIGHT_THEME);
    }

    #[test]
    fn escape_sequences() {
        assert_eq!(Theme::fg("#0288d1"), "\u{1b}[38;2;2;136;209m");
        assert_eq!(Theme::bg("zzz"), "\u{1b}[48;2;255;255;255m");
    }
}
