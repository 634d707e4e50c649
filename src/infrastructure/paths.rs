//! Filesystem locations inside the Zellij plugin sandbox.
//!
//! Zellij mounts the host filesystem under `/host`, rooted at the working
//! directory Zellij was started from (usually the user's home).

use std::path::PathBuf;

/// Sandbox mount point of the host filesystem.
const HOST_ROOT: &str = "/host";

/// Directory holding CountryDeck's preferences and trace files.
///
/// Resolves to `/host/.local/share/zellij/countrydeck`, i.e.
/// `~/.local/share/zellij/countrydeck` on the host.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT)
        .join(".local/share/zellij")
        .join("countrydeck")
}

/// Location of the persisted view preferences.
#[must_use]
pub fn preferences_path() -> PathBuf {
    get_data_dir().join("preferences.json")
}

/// Location of the OTLP trace export.
#[must_use]
pub fn trace_path() -> PathBuf {
    get_data_dir().join("countrydeck-otlp.json")
}

/// Maps `~` and `~/...` to the sandbox's host mount.
///
/// ```
/// use countrydeck::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        format!("{HOST_ROOT}/{rest}")
    } else if path == "~" {
        HOST_ROOT.to_string()
    } else {
        path.to_string()
    }
}
