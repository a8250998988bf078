//! Platform path resolution.
//!
//! Locations follow the platform conventions exposed by the `dirs` crate:
//!
//! | Purpose | Linux                                   | macOS                                               |
//! |---------|-----------------------------------------|-----------------------------------------------------|
//! | data    | `~/.local/share/shelfwise`              | `~/Library/Application Support/shelfwise`           |
//! | config  | `~/.config/shelfwise/config.toml`       | `~/Library/Application Support/shelfwise/config.toml` |

use std::path::PathBuf;

/// Directory name used under the platform data and config directories.
pub const APP_DIR: &str = "shelfwise";

/// Returns the default data directory for storage and log files.
///
/// Falls back to `./shelfwise` when the platform has no data directory.
#[must_use]
pub fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Returns the default config file path, if the platform has a config directory.
#[must_use]
pub fn config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading `~`, or when no home directory is known, are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use shelfwise::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = dirs::home_dir();

    match (path, home) {
        ("~", Some(home)) => home,
        (path, Some(home)) if path.starts_with("~/") => home.join(&path[2..]),
        (path, _) => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_ends_with_app_name() {
        assert!(data_dir().ends_with(APP_DIR));
    }

    #[test]
    fn config_file_is_toml_in_app_dir() {
        if let Some(path) = config_file() {
            assert!(path.ends_with("shelfwise/config.toml"));
        }
    }

    #[test]
    fn tilde_expansion() {
        assert_eq!(expand_tilde("/var/data"), PathBuf::from("/var/data"));
        assert_eq!(expand_tilde("relative/~"), PathBuf::from("relative/~"));

        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~"), home);
            assert_eq!(expand_tilde("~/books"), home.join("books"));
        }
    }
}
