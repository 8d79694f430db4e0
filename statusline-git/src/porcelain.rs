//! Parsing of `git` text output.

use regex::Regex;
use std::sync::LazyLock;

use crate::record::ChangeCounts;

static WIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bwip\b").expect("wip pattern is valid"));

/// Category of a single porcelain status entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Conflicted,
    /// Non-conflicting entry; flags may both be set (e.g. "MM").
    Changed { staged: bool, unstaged: bool },
    Untracked,
    /// Both columns blank.
    Other,
}

/// Classify a two-column status code `(x, y)`.
pub fn classify(x: char, y: char) -> EntryKind {
    if x == 'U' || y == 'U' || (x == 'A' && y == 'A') || (x == 'D' && y == 'D') {
        return EntryKind::Conflicted;
    }

    if x == '?' && y == '?' {
        return EntryKind::Untracked;
    }

    let staged = x != ' ' && x != '?';
    let unstaged = y != ' ' && y != '?';
    if staged || unstaged {
        EntryKind::Changed { staged, unstaged }
    } else {
        EntryKind::Other
    }
}

/// Count entries of `git status --porcelain=v1` output.
///
/// The output must not be trimmed beforehand: a leading space is the
/// index column of the first entry.
pub fn count_changes(output: &str) -> ChangeCounts {
    let mut counts = ChangeCounts::default();

    for line in output.lines() {
        let mut chars = line.chars();
        let (Some(x), Some(y)) = (chars.next(), chars.next()) else {
            continue;
        };

        match classify(x, y) {
            EntryKind::Conflicted => counts.conflicted += 1,
            EntryKind::Untracked => counts.untracked += 1,
            EntryKind::Changed { staged, unstaged } => {
                if staged {
                    counts.staged += 1;
                }
                if unstaged {
                    counts.unstaged += 1;
                }
            }
            EntryKind::Other => {}
        }
    }

    counts
}

/// Count non-empty lines (stash list entries).
pub fn count_lines(output: &str) -> usize {
    output.lines().filter(|l| !l.trim().is_empty()).count()
}

/// Whether a commit subject contains "wip" as a whole word, any case.
pub fn is_wip(subject: &str) -> bool {
    WIP_RE.is_match(subject)
}
