//! Current task lookup from the per-session todo files.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// A single todo entry. Only the fields the status line needs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct Todo {
    status: String,
    #[serde(rename = "activeForm")]
    active_form: String,
}

/// Active form of the in-progress todo of the session's newest agent file.
///
/// Todo files are named `<session>-agent-<agent>.json`. Returns `None` when
/// the session id is empty, no file matches, or the newest file is unreadable.
pub fn current_task(todos_dir: &Path, session_id: &str) -> Option<String> {
    if session_id.is_empty() {
        return None;
    }

    let newest = newest_session_file(todos_dir, session_id)?;
    let content = match fs::read_to_string(&newest) {
        Ok(content) => content,
        Err(e) => {
            log::debug!("reading {}: {}", newest.display(), e);
            return None;
        }
    };
    let todos: Vec<Todo> = match serde_json::from_str(&content) {
        Ok(todos) => todos,
        Err(e) => {
            log::debug!("parsing {}: {}", newest.display(), e);
            return None;
        }
    };

    todos
        .into_iter()
        .find(|t| t.status == "in_progress")
        .map(|t| t.active_form)
        .filter(|task| !task.is_empty())
}

/// Most recently modified todo file belonging to the session.
fn newest_session_file(todos_dir: &Path, session_id: &str) -> Option<PathBuf> {
    let entries = fs::read_dir(todos_dir).ok()?;

    entries
        .flatten()
        .filter(|entry| {
            entry.file_name().to_str().is_some_and(|name| {
                name.starts_with(session_id) && name.contains("-agent-") && name.ends_with(".json")
            })
        })
        .map(|entry| {
            let mtime = entry
                .metadata()
                .and_then(|m| m.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH);
            (mtime, entry.path())
        })
        .max_by_key(|(mtime, _)| *mtime)
        .map(|(_, path)| path)
}
