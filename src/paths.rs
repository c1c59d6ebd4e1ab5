//! Where the picker keeps its settings, config and log.

use std::ffi::OsString;
use std::path::PathBuf;

/// Directory name used under the platform data and home directories.
pub const APP_DIR: &str = "model-picker";

/// Path to the debug log file, in the OS temp directory.
#[must_use]
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join(format!("{APP_DIR}.log"))
}

/// Directory holding persisted picker settings.
///
/// `XDG_DATA_HOME` wins when set; otherwise the platform's local data
/// directory under the user's home.
#[must_use]
pub fn settings_dir() -> PathBuf {
    settings_dir_with(process_env)
}

/// Directory holding the user's picker configuration, `~/.model-picker`.
#[must_use]
pub fn config_dir() -> PathBuf {
    config_dir_with(process_env)
}

fn process_env(key: &str) -> Option<OsString> {
    std::env::var_os(key)
}

fn home_with(env: &impl Fn(&str) -> Option<OsString>) -> Option<PathBuf> {
    let home = if cfg!(windows) {
        env("USERPROFILE").or_else(|| env("HOME"))
    } else {
        env("HOME")
    };
    home.map(PathBuf::from)
}

fn settings_dir_with(env: impl Fn(&str) -> Option<OsString>) -> PathBuf {
    let data_dir = env("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(|| {
            if cfg!(windows) {
                env("LOCALAPPDATA").map(PathBuf::from)
            } else if cfg!(target_os = "macos") {
                home_with(&env).map(|home| home.join("Library/Application Support"))
            } else {
                home_with(&env).map(|home| home.join(".local/share"))
            }
        })
        .unwrap_or_else(|| PathBuf::from("."));
    data_dir.join(APP_DIR)
}

fn config_dir_with(env: impl Fn(&str) -> Option<OsString>) -> PathBuf {
    home_with(&env)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(format!(".{APP_DIR}"))
}
