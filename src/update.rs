//! Update-available flag written by the update checker.

use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct UpdateCheck {
    update_available: bool,
}

/// Whether the cached update check reports a newer version.
/// A missing or malformed cache file means no update.
pub fn update_available(cache_file: &Path) -> bool {
    let Ok(content) = fs::read_to_string(cache_file) else {
        return false;
    };
    match serde_json::from_str::<UpdateCheck>(&content) {
        Ok(check) => check.update_available,
        Err(e) => {
            log::debug!("parsing {}: {}", cache_file.display(), e);
            false
        }
    }
}
