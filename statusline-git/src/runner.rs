//! Running `git` queries.
//!
//! Queries never fail loudly: a non-zero exit, a missing binary or a timeout
//! all come back as `None`.

use std::future::Future;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

/// Default per-query timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// Interface to the version-control tool.
pub trait GitRunner {
    /// Run `git <args>` in `cwd` and return its raw stdout on success.
    fn run(&self, args: &[&str], cwd: &Path) -> impl Future<Output = Option<String>> + Send;

    /// Check whether a file or directory exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Runs the real `git` binary as a child process.
#[derive(Debug, Clone)]
pub struct CommandRunner {
    program: String,
    timeout: Duration,
}

impl CommandRunner {
    /// Create a runner with the given per-query timeout.
    pub fn new(timeout: Duration) -> Self {
        Self {
            program: "git".to_string(),
            timeout,
        }
    }

    /// Use a different executable instead of `git` from PATH.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl GitRunner for CommandRunner {
    async fn run(&self, args: &[&str], cwd: &Path) -> Option<String> {
        let child = Command::new(&self.program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output();

        let output = match tokio::time::timeout(self.timeout, child).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => {
                log::debug!("git {}: failed to run: {}", args.join(" "), e);
                return None;
            }
            Err(_) => {
                // Dropping the future kills the child
                log::debug!("git {}: timed out after {:?}", args.join(" "), self.timeout);
                return None;
            }
        };

        if !output.status.success() {
            log::trace!(
                "git {}: exit {}: {}",
                args.join(" "),
                output.status.code().unwrap_or(-1),
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return None;
        }

        Some(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
