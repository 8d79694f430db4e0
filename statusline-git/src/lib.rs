//! statusline-git - Git repository status for status lines.
//!
//! This library collects repository state by shelling out to `git` and
//! renders it as a single color-coded, icon-annotated line. It reports:
//! - Branch, exact tag or abbreviated commit
//! - Ahead/behind counts against the upstream and push targets
//! - Stashes, in-progress operations (merge, rebase, ...)
//! - Staged, unstaged, untracked and conflicted file counts
//!
//! # Example
//!
//! ```no_run
//! use statusline_git::{CommandRunner, Renderer, collect};
//! use std::path::Path;
//!
//! # async fn run() {
//! let runner = CommandRunner::default();
//! let record = collect(&runner, Path::new(".")).await;
//! println!("{}", Renderer::default().render(record.as_ref()));
//! # }
//! ```

mod collector;
pub mod porcelain;
mod record;
mod render;
mod runner;
pub mod style;

pub use collector::collect;
pub use record::{Action, ChangeCounts, Reference, RemoteKind, StatusRecord, SyncCounts};
pub use render::{Icons, Palette, Renderer};
pub use runner::{CommandRunner, DEFAULT_TIMEOUT, GitRunner};
