//! Repository status collection.

use std::path::{Path, PathBuf};

use crate::porcelain;
use crate::record::{Action, Reference, RemoteKind, StatusRecord, SyncCounts};
use crate::runner::GitRunner;

/// Collect repository status for `dir`.
///
/// Returns `None` when `dir` is not inside a repository or `git` cannot be
/// run at all. Every other query degrades its own field on failure.
pub async fn collect<R: GitRunner>(runner: &R, dir: &Path) -> Option<StatusRecord> {
    let git = Queries { runner, dir };

    git.text(&["rev-parse", "--git-dir"]).await?;

    let reference = git.reference().await?;
    let mut record = StatusRecord::new(reference);

    record.remote = git
        .text(&["config", "--get", "remote.origin.url"])
        .await
        .and_then(|url| RemoteKind::from_url(&url));

    let upstream = git.text(&["rev-parse", "--abbrev-ref", "@{upstream}"]).await;
    if upstream.is_some() {
        record.upstream = Some(git.sync_counts("HEAD...@{upstream}").await);
    }

    let push = git.text(&["rev-parse", "--abbrev-ref", "@{push}"]).await;
    if push.is_some() && push != upstream {
        record.push = Some(git.sync_counts("HEAD...@{push}").await);
    }

    record.stashes = git
        .raw(&["stash", "list"])
        .await
        .map(|out| porcelain::count_lines(&out))
        .unwrap_or(0);

    if let Some(git_dir) = git.text(&["rev-parse", "--absolute-git-dir"]).await {
        record.action = detect_action(runner, &PathBuf::from(git_dir));
    }

    if let Some(status) = git.raw(&["status", "--porcelain=v1"]).await {
        record.changes = porcelain::count_changes(&status);
    }

    record.wip = git
        .text(&["log", "-1", "--format=%s"])
        .await
        .is_some_and(|subject| porcelain::is_wip(&subject));

    log::debug!("collected status for {}: {:?}", dir.display(), record);
    Some(record)
}

/// Check marker files in the git directory, first match wins.
fn detect_action<R: GitRunner>(runner: &R, git_dir: &Path) -> Option<Action> {
    Action::MARKERS
        .iter()
        .find(|(marker, _)| runner.exists(&git_dir.join(marker)))
        .map(|(_, action)| *action)
}

/// Query helpers bound to one directory.
struct Queries<'a, R> {
    runner: &'a R,
    dir: &'a Path,
}

impl<R: GitRunner> Queries<'_, R> {
    /// Raw stdout of a successful query.
    async fn raw(&self, args: &[&str]) -> Option<String> {
        self.runner.run(args, self.dir).await
    }

    /// Trimmed stdout of a successful query; empty output counts as absent.
    async fn text(&self, args: &[&str]) -> Option<String> {
        let out = self.raw(args).await?;
        let out = out.trim();
        if out.is_empty() {
            None
        } else {
            Some(out.to_string())
        }
    }

    /// Resolve HEAD to a branch, an exact tag, or a short commit hash.
    async fn reference(&self) -> Option<Reference> {
        if let Some(branch) = self.text(&["symbolic-ref", "--short", "HEAD"]).await {
            return Some(Reference::Branch(branch));
        }
        if let Some(tag) = self
            .text(&["describe", "--tags", "--exact-match", "HEAD"])
            .await
        {
            return Some(Reference::Tag(tag));
        }
        self.text(&["rev-parse", "--short", "HEAD"])
            .await
            .map(Reference::Commit)
    }

    /// Ahead/behind counts for a symmetric range; failure counts as zero.
    async fn sync_counts(&self, range: &str) -> SyncCounts {
        self.text(&["rev-list", "--left-right", "--count", range])
            .await
            .map(|out| SyncCounts::parse(&out))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    const GIT_DIR: &str = "/repo/.git";

    /// In-memory stand-in for `git`, keyed by the joined argument string.
    #[derive(Default)]
    struct FakeGit {
        responses: HashMap<String, String>,
        files: HashSet<PathBuf>,
    }

    impl FakeGit {
        /// A repository on branch `main` with a clean tree.
        fn repo() -> Self {
            Self::default()
                .with("rev-parse --git-dir", ".git\n")
                .with("symbolic-ref --short HEAD", "main\n")
                .with("rev-parse --absolute-git-dir", "/repo/.git\n")
                .with("status --porcelain=v1", "")
                .with("stash list", "")
                .with("log -1 --format=%s", "initial commit\n")
        }

        fn with(mut self, args: &str, stdout: &str) -> Self {
            self.responses.insert(args.to_string(), stdout.to_string());
            self
        }

        fn without(mut self, args: &str) -> Self {
            self.responses.remove(args);
            self
        }

        fn with_file(mut self, name: &str) -> Self {
            self.files.insert(Path::new(GIT_DIR).join(name));
            self
        }
    }

    impl GitRunner for FakeGit {
        async fn run(&self, args: &[&str], _cwd: &Path) -> Option<String> {
            self.responses.get(&args.join(" ")).cloned()
        }

        fn exists(&self, path: &Path) -> bool {
            self.files.contains(path)
        }
    }

    async fn collect_fake(git: &FakeGit) -> Option<StatusRecord> {
        collect(git, Path::new("/repo")).await
    }

    #[tokio::test]
    async fn test_not_a_repository() {
        assert_eq!(collect_fake(&FakeGit::default()).await, None);
        let git = FakeGit::repo().without("rev-parse --git-dir");
        assert_eq!(collect_fake(&git).await, None);
    }

    #[tokio::test]
    async fn test_clean_branch() {
        let record = collect_fake(&FakeGit::repo()).await.unwrap();
        assert_eq!(record, StatusRecord::new(Reference::Branch("main".into())));
    }

    #[tokio::test]
    async fn test_branch_wins_over_tag() {
        let git = FakeGit::repo().with("describe --tags --exact-match HEAD", "v1.0.0\n");
        let record = collect_fake(&git).await.unwrap();
        assert_eq!(record.reference, Reference::Branch("main".into()));
    }

    #[tokio::test]
    async fn test_detached_on_tag() {
        let git = FakeGit::repo()
            .without("symbolic-ref --short HEAD")
            .with("describe --tags --exact-match HEAD", "v1.2.3\n")
            .with("rev-parse --short HEAD", "abc1234\n");
        let record = collect_fake(&git).await.unwrap();
        assert_eq!(record.reference, Reference::Tag("v1.2.3".into()));
    }

    #[tokio::test]
    async fn test_detached_commit() {
        let git = FakeGit::repo()
            .without("symbolic-ref --short HEAD")
            .with("rev-parse --short HEAD", "abc1234\n");
        let record = collect_fake(&git).await.unwrap();
        assert_eq!(record.reference, Reference::Commit("abc1234".into()));
    }

    #[tokio::test]
    async fn test_no_reference_at_all_is_none() {
        let git = FakeGit::repo().without("symbolic-ref --short HEAD");
        assert_eq!(collect_fake(&git).await, None);
    }

    #[tokio::test]
    async fn test_remote_kind() {
        let git = FakeGit::repo().with(
            "config --get remote.origin.url",
            "git@gitlab.com:group/project.git\n",
        );
        let record = collect_fake(&git).await.unwrap();
        assert_eq!(record.remote, Some(RemoteKind::GitLab));
    }

    #[tokio::test]
    async fn test_upstream_counts() {
        let git = FakeGit::repo()
            .with("rev-parse --abbrev-ref @{upstream}", "origin/main\n")
            .with("rev-list --left-right --count HEAD...@{upstream}", "2\t3\n");
        let record = collect_fake(&git).await.unwrap();
        assert_eq!(record.upstream, Some(SyncCounts { ahead: 2, behind: 3 }));
        assert_eq!(record.push, None);
    }

    #[tokio::test]
    async fn test_upstream_count_failure_defaults_to_zero() {
        let git = FakeGit::repo().with("rev-parse --abbrev-ref @{upstream}", "origin/main\n");
        let record = collect_fake(&git).await.unwrap();
        assert_eq!(record.upstream, Some(SyncCounts::default()));
    }

    #[tokio::test]
    async fn test_push_same_as_upstream_is_skipped() {
        let git = FakeGit::repo()
            .with("rev-parse --abbrev-ref @{upstream}", "origin/main\n")
            .with("rev-parse --abbrev-ref @{push}", "origin/main\n")
            .with("rev-list --left-right --count HEAD...@{push}", "9\t9\n");
        let record = collect_fake(&git).await.unwrap();
        assert_eq!(record.push, None);
    }

    #[tokio::test]
    async fn test_push_target_differs() {
        let git = FakeGit::repo()
            .with("rev-parse --abbrev-ref @{upstream}", "upstream/main\n")
            .with("rev-list --left-right --count HEAD...@{upstream}", "0\t4\n")
            .with("rev-parse --abbrev-ref @{push}", "fork/main\n")
            .with("rev-list --left-right --count HEAD...@{push}", "1\t0\n");
        let record = collect_fake(&git).await.unwrap();
        assert_eq!(record.upstream, Some(SyncCounts { ahead: 0, behind: 4 }));
        assert_eq!(record.push, Some(SyncCounts { ahead: 1, behind: 0 }));
    }

    #[tokio::test]
    async fn test_stash_count() {
        let git = FakeGit::repo().with(
            "stash list",
            "stash@{0}: WIP on main: 1234567 a\nstash@{1}: On main: b\n",
        );
        assert_eq!(collect_fake(&git).await.unwrap().stashes, 2);
    }

    #[tokio::test]
    async fn test_action_priority() {
        let git = FakeGit::repo()
            .with_file("BISECT_LOG")
            .with_file("rebase-apply");
        assert_eq!(collect_fake(&git).await.unwrap().action, Some(Action::Rebase));

        let git = FakeGit::repo()
            .with_file("CHERRY_PICK_HEAD")
            .with_file("MERGE_HEAD");
        assert_eq!(collect_fake(&git).await.unwrap().action, Some(Action::Merge));

        let git = FakeGit::repo().with_file("BISECT_LOG");
        assert_eq!(collect_fake(&git).await.unwrap().action, Some(Action::Bisect));
    }

    #[tokio::test]
    async fn test_action_needs_git_dir() {
        let git = FakeGit::repo()
            .without("rev-parse --absolute-git-dir")
            .with_file("MERGE_HEAD");
        assert_eq!(collect_fake(&git).await.unwrap().action, None);
    }

    #[tokio::test]
    async fn test_status_keeps_leading_space() {
        let git = FakeGit::repo().with("status --porcelain=v1", " M a.rs\nA  b.rs\n?? c.rs\n");
        let changes = collect_fake(&git).await.unwrap().changes;
        assert_eq!(changes.staged, 1);
        assert_eq!(changes.unstaged, 1);
        assert_eq!(changes.untracked, 1);
        assert_eq!(changes.conflicted, 0);
    }

    #[tokio::test]
    async fn test_wip_subject() {
        let git = FakeGit::repo().with("log -1 --format=%s", "WIP: fix thing\n");
        assert!(collect_fake(&git).await.unwrap().wip);

        let git = FakeGit::repo().with("log -1 --format=%s", "swiped changes\n");
        assert!(!collect_fake(&git).await.unwrap().wip);

        // Fresh repository without commits
        let git = FakeGit::repo().without("log -1 --format=%s");
        assert!(!collect_fake(&git).await.unwrap().wip);
    }
}
