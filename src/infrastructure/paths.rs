//! Platform path resolution.
//!
//! Configuration lives under the platform config directory
//! (`~/.config/tunesearch` on Linux) and trace output under the platform
//! data directory (`~/.local/share/tunesearch`). When the platform offers no
//! such directory, the current directory is used instead.

use std::path::PathBuf;

const APP_DIR: &str = "tunesearch";

/// Returns the data directory for trace output.
///
/// # Examples
///
/// ```
/// use tunesearch::infrastructure::get_data_dir;
///
/// assert!(get_data_dir().ends_with("tunesearch"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Returns the configuration directory.
#[must_use]
pub fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Path of the configuration file read by [`crate::Config::load_default`].
#[must_use]
pub fn default_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, and all paths when the home directory is
/// unknown, are returned unchanged.
///
/// # Examples
///
/// ```
/// use tunesearch::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), std::path::PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = dirs::home_dir();
    match (path, home) {
        ("~", Some(home)) => home,
        (p, Some(home)) if p.starts_with("~/") => home.join(&p[2..]),
        (p, _) => PathBuf::from(p),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_file_sits_in_app_dir() {
        let path = default_config_path();
        assert!(path.ends_with("tunesearch/config.toml"));
    }

    #[test]
    fn tilde_prefix_is_expanded() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/themes/x.toml"), home.join("themes/x.toml"));
            assert_eq!(expand_tilde("~"), home);
        }
        assert_eq!(expand_tilde("relative/x"), PathBuf::from("relative/x"));
        assert_eq!(expand_tilde("~user/x"), PathBuf::from("~user/x"));
    }
}
