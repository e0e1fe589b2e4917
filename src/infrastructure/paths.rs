//! Path handling for the Zellij plugin sandbox, where the host filesystem is
//! mounted under `/host`.

use std::path::PathBuf;

/// Name of the file holding the persisted display mode.
pub const MODE_FILE: &str = "mode.json";

/// Returns the data directory for UserSpot state.
///
/// The directory is located at `/host/.local/share/zellij/userspot` in the Zellij
/// sandbox. `/host` points to the cwd of the last focused terminal, or the folder
/// where Zellij was started, which usually makes the real path
/// `~/.local/share/zellij/userspot`.
///
/// # Examples
///
/// ```
/// use userspot::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str(), Some("/host/.local/share/zellij/userspot"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("userspot")
}

/// Location of the persisted display mode.
#[must_use]
pub fn mode_file_path() -> PathBuf {
    get_data_dir().join(MODE_FILE)
}

/// Expands tilde paths to use the `/host` prefix for the Zellij sandbox.
///
/// # Examples
///
/// ```
/// use userspot::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dim.toml"), "/host/themes/dim.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_file_lives_in_data_dir() {
        assert_eq!(
            mode_file_path(),
            PathBuf::from("/host/.local/share/zellij/userspot/mode.json")
        );
    }

    #[test]
    fn tilde_only_expands_as_prefix() {
        assert_eq!(expand_tilde("themes/~dark.toml"), "themes/~dark.toml");
    }
}
