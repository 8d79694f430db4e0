//! Path resolution for statusline.
//!
//! Prefers `~/.config/statusline/` with `~/.statusline/` fallback (all OSes).
//! Claude data lives under `~/.claude/` unless overridden in the config.

use std::path::{Path, PathBuf};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "STATUSLINE_CONFIG";

fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Returns the statusline configuration directory.
///
/// Prefers `~/.config/statusline/` if it exists or if `~/.statusline/` doesn't exist.
/// Falls back to `~/.statusline/` if it exists and `~/.config/statusline/` doesn't.
pub fn config_dir() -> PathBuf {
    let home = home_dir();

    let primary = home.join(".config").join("statusline");
    let fallback = home.join(".statusline");

    if primary.exists() || !fallback.exists() {
        primary
    } else {
        fallback
    }
}

/// Returns the path to the main config file.
/// `$STATUSLINE_CONFIG` or `~/.config/statusline/config.toml`
pub fn config_file() -> PathBuf {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => config_dir().join("config.toml"),
    }
}

/// Returns the Claude data directory.
/// `override_dir` (with `~/` expanded) or `~/.claude`
pub fn claude_dir(override_dir: Option<&str>) -> PathBuf {
    match override_dir {
        Some(dir) if !dir.trim().is_empty() => expand_home(dir.trim()),
        _ => home_dir().join(".claude"),
    }
}

/// Returns the per-session todo directory.
/// `<claude>/todos/`
pub fn todos_dir(claude_dir: &Path) -> PathBuf {
    claude_dir.join("todos")
}

/// Returns the update-check cache file.
/// `<claude>/cache/gsd-update-check.json`
pub fn update_cache_file(claude_dir: &Path) -> PathBuf {
    claude_dir.join("cache").join("gsd-update-check.json")
}

/// Expand a leading `~/` to the home directory.
fn expand_home(path: &str) -> PathBuf {
    if path == "~" {
        return home_dir();
    }
    match path.strip_prefix("~/") {
        Some(rest) => home_dir().join(rest),
        None => PathBuf::from(path),
    }
}
