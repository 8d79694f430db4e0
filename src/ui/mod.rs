//! Final status line assembly.

use statusline_git::style::{colors, paint};
use std::path::Path;

/// Separator between line segments.
pub const SEPARATOR: &str = " \u{2502} ";

/// Pieces of the status line, already rendered where they carry color.
#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    pub model: String,
    pub dir_name: String,
    /// Rendered repository status; empty outside a repository.
    pub git: String,
    pub task: Option<String>,
    /// Rendered context meter.
    pub meter: Option<String>,
    pub update_available: bool,
}

/// Last path component, or the whole path when it has none (e.g. `/`).
pub fn dir_name(dir: &Path) -> String {
    dir.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string())
}

/// Format the update notice that prefixes the line.
pub fn format_update_notice() -> String {
    format!("{}{}", paint(colors::YELLOW, "\u{2B06} /gsd:update"), SEPARATOR)
}

/// Join the segments: model │ dir + git │ task │ meter.
pub fn format_line(line: &StatusLine) -> String {
    let mut segments = vec![paint(colors::DIM, &line.model)];

    let mut location = paint(colors::DIM, &line.dir_name);
    if !line.git.is_empty() {
        location.push(' ');
        location.push_str(&line.git);
    }
    segments.push(location);

    if let Some(task) = line.task.as_deref().filter(|t| !t.is_empty()) {
        segments.push(paint(colors::BOLD, task));
    }

    if let Some(meter) = line.meter.as_deref().filter(|m| !m.is_empty()) {
        segments.push(meter.to_string());
    }

    let body = segments.join(SEPARATOR);
    if line.update_available {
        format!("{}{}", format_update_notice(), body)
    } else {
        body
    }
}
