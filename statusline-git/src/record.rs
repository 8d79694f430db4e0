//! Repository status types.
//!
//! Defines the record produced by the collector and consumed by the renderer.

use serde::{Deserialize, Serialize};

/// Snapshot of a repository's state at the time of collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRecord {
    /// What HEAD points at.
    pub reference: Reference,
    /// Hosting service of `remote.origin`, if a remote exists.
    pub remote: Option<RemoteKind>,
    /// Counts against the upstream tracking branch, if one is configured.
    pub upstream: Option<SyncCounts>,
    /// Counts against the push target, only when it differs from upstream.
    pub push: Option<SyncCounts>,
    /// Number of stash entries.
    pub stashes: usize,
    /// Multi-step operation currently in progress.
    pub action: Option<Action>,
    /// Working tree change counts.
    pub changes: ChangeCounts,
    /// Whether the latest commit subject mentions "wip".
    pub wip: bool,
}

impl StatusRecord {
    /// Create a record for the given reference with everything else empty.
    pub fn new(reference: Reference) -> Self {
        Self {
            reference,
            remote: None,
            upstream: None,
            push: None,
            stashes: 0,
            action: None,
            changes: ChangeCounts::default(),
            wip: false,
        }
    }
}

/// The current reference, resolved with precedence branch > tag > commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "name")]
pub enum Reference {
    Branch(String),
    Tag(String),
    Commit(String),
}

/// Hosting service inferred from the remote URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoteKind {
    GitHub,
    GitLab,
    Bitbucket,
    Generic,
}

impl RemoteKind {
    /// Classify a remote URL. Returns `None` for an empty URL.
    pub fn from_url(url: &str) -> Option<Self> {
        let url = url.trim();
        if url.is_empty() {
            return None;
        }

        let kind = if url.contains("github.com") {
            RemoteKind::GitHub
        } else if url.contains("gitlab.com") {
            RemoteKind::GitLab
        } else if url.contains("bitbucket.org") {
            RemoteKind::Bitbucket
        } else {
            RemoteKind::Generic
        };
        Some(kind)
    }
}

/// Commits ahead of and behind a remote reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncCounts {
    pub ahead: usize,
    pub behind: usize,
}

impl SyncCounts {
    /// Parse `git rev-list --left-right --count` output ("<ahead>\t<behind>").
    /// Missing or malformed fields count as zero.
    pub fn parse(output: &str) -> Self {
        let mut fields = output.split_whitespace();
        let mut next = || {
            fields
                .next()
                .and_then(|f| f.parse::<usize>().ok())
                .unwrap_or(0)
        };
        let ahead = next();
        let behind = next();
        Self { ahead, behind }
    }

    pub fn is_zero(&self) -> bool {
        self.ahead == 0 && self.behind == 0
    }
}

/// In-progress operation detected from marker files in the git directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Merge,
    Rebase,
    CherryPick,
    Bisect,
}

impl Action {
    /// Marker files checked in priority order. The first present one wins.
    pub const MARKERS: &'static [(&'static str, Action)] = &[
        ("MERGE_HEAD", Action::Merge),
        ("rebase-merge", Action::Rebase),
        ("rebase-apply", Action::Rebase),
        ("CHERRY_PICK_HEAD", Action::CherryPick),
        ("BISECT_LOG", Action::Bisect),
    ];

    /// Literal shown in the status line.
    pub fn label(&self) -> &'static str {
        match self {
            Action::Merge => "merge",
            Action::Rebase => "rebase",
            Action::CherryPick => "cherry-pick",
            Action::Bisect => "bisect",
        }
    }
}

/// Per-category file counts from the porcelain status listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeCounts {
    pub staged: usize,
    pub unstaged: usize,
    pub untracked: usize,
    pub conflicted: usize,
}
