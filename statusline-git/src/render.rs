//! Status line rendering.
//!
//! Turns a [`StatusRecord`] into a single line of space-separated parts, each
//! wrapped in its own color code and a reset.

use serde::{Deserialize, Serialize};

use crate::record::{Reference, RemoteKind, StatusRecord, SyncCounts};
use crate::style::{colors, paint};

/// Names longer than this are shortened to head + ellipsis + tail.
const MAX_REF_LEN: usize = 32;
/// Characters kept on each side of the ellipsis.
const REF_KEEP: usize = 12;

/// ANSI codes used for each part of the status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub remote: String,
    pub reference: String,
    pub wip: String,
    pub sync: String,
    pub stash: String,
    pub action: String,
    pub conflicted: String,
    pub staged: String,
    pub unstaged: String,
    pub untracked: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            remote: colors::DIM.to_string(),
            reference: colors::GREEN.to_string(),
            wip: colors::YELLOW.to_string(),
            sync: colors::GREEN.to_string(),
            stash: colors::GREEN.to_string(),
            action: colors::RED.to_string(),
            conflicted: colors::RED.to_string(),
            staged: colors::YELLOW.to_string(),
            unstaged: colors::YELLOW.to_string(),
            untracked: colors::BLUE.to_string(),
        }
    }
}

/// Icon glyphs (Nerd Font private-use codepoints by default).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Icons {
    pub branch: String,
    pub tag: String,
    pub commit: String,
    pub github: String,
    pub gitlab: String,
    pub bitbucket: String,
    /// Fallback for remotes on any other host.
    pub git: String,
}

impl Default for Icons {
    fn default() -> Self {
        Self {
            branch: "\u{f126}".to_string(),
            tag: "\u{f02b}".to_string(),
            commit: "\u{f417}".to_string(),
            github: "\u{f09b}".to_string(),
            gitlab: "\u{f296}".to_string(),
            bitbucket: "\u{f171}".to_string(),
            git: "\u{e702}".to_string(),
        }
    }
}

impl Icons {
    /// Icon for a remote kind; empty overrides fall back to the generic icon.
    pub fn remote(&self, kind: RemoteKind) -> &str {
        let icon = match kind {
            RemoteKind::GitHub => &self.github,
            RemoteKind::GitLab => &self.gitlab,
            RemoteKind::Bitbucket => &self.bitbucket,
            RemoteKind::Generic => &self.git,
        };
        if icon.is_empty() { &self.git } else { icon }
    }
}

/// Sync glyph pair: (behind, ahead).
const UPSTREAM_ARROWS: (&str, &str) = ("⇣", "⇡");
const PUSH_ARROWS: (&str, &str) = ("⇠", "⇢");

/// Renders status records with a fixed palette and icon set.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    palette: Palette,
    icons: Icons,
}

impl Renderer {
    pub fn new(palette: Palette, icons: Icons) -> Self {
        Self { palette, icons }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn icons(&self) -> &Icons {
        &self.icons
    }

    /// Render a record; `None` renders as an empty string.
    pub fn render(&self, record: Option<&StatusRecord>) -> String {
        let Some(record) = record else {
            return String::new();
        };
        let p = &self.palette;
        let mut parts: Vec<String> = Vec::new();

        if let Some(kind) = record.remote {
            parts.push(paint(&p.remote, self.icons.remote(kind)));
        }

        parts.push(self.reference(&record.reference));

        if record.wip {
            parts.push(paint(&p.wip, "wip"));
        }

        if let Some(sync) = self.sync(record.upstream, UPSTREAM_ARROWS) {
            parts.push(sync);
        }
        if let Some(sync) = self.sync(record.push, PUSH_ARROWS) {
            parts.push(sync);
        }

        if record.stashes > 0 {
            parts.push(paint(&p.stash, &format!("*{}", record.stashes)));
        }

        if let Some(action) = record.action {
            parts.push(paint(&p.action, action.label()));
        }

        let changes = &record.changes;
        let counters = [
            (changes.conflicted, &p.conflicted, '~'),
            (changes.staged, &p.staged, '+'),
            (changes.unstaged, &p.unstaged, '!'),
            (changes.untracked, &p.untracked, '?'),
        ];
        for (count, color, sigil) in counters {
            if count > 0 {
                parts.push(paint(color, &format!("{}{}", sigil, count)));
            }
        }

        parts.join(" ")
    }

    fn reference(&self, reference: &Reference) -> String {
        let text = match reference {
            Reference::Branch(name) => format!("{} {}", self.icons.branch, truncate_ref(name)),
            Reference::Tag(name) => format!("{}{}", self.icons.tag, truncate_ref(name)),
            Reference::Commit(hash) => format!("{}{}", self.icons.commit, hash),
        };
        paint(&self.palette.reference, &text)
    }

    /// Behind then ahead, each wrapped separately and joined without a space.
    /// Zero counts are skipped; `None` when nothing remains.
    fn sync(&self, counts: Option<SyncCounts>, arrows: (&str, &str)) -> Option<String> {
        let counts = counts.filter(|c| !c.is_zero())?;
        let (down, up) = arrows;
        let mut out = String::new();
        if counts.behind > 0 {
            out.push_str(&paint(&self.palette.sync, &format!("{}{}", down, counts.behind)));
        }
        if counts.ahead > 0 {
            out.push_str(&paint(&self.palette.sync, &format!("{}{}", up, counts.ahead)));
        }
        Some(out)
    }
}

/// Shorten names over 32 characters to the first 12 + `…` + the last 12.
fn truncate_ref(name: &str) -> String {
    let len = name.chars().count();
    if len <= MAX_REF_LEN {
        return name.to_string();
    }
    let head: String = name.chars().take(REF_KEEP).collect();
    let tail: String = name.chars().skip(len - REF_KEEP).collect();
    format!("{}…{}", head, tail)
}
