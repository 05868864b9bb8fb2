use crate::error::{Result, StencilError};
use log::debug;
use std::{
    path::{Path, PathBuf},
    process::Command,
};

/// Version-control actions the painter needs, as an injectable capability so
/// schedule consumption can be tested without a real repository.
pub trait Vcs {
    /// Stage a file for the next commit.
    fn stage(&mut self, path: &Path) -> Result<()>;

    /// Commit staged changes with the author/committer date forced to
    /// `timestamp` (`YYYY-MM-DDTHH:MM:SS`).
    fn commit(&mut self, message: &str, timestamp: &str) -> Result<()>;

    /// Push accumulated commits to the default remote.
    fn push(&mut self) -> Result<()>;
}

/// Shells out to the system `git` binary.
#[derive(Debug, Clone, Default)]
pub struct GitCli {
    repo_dir: Option<PathBuf>,
}

impl GitCli {
    pub fn new(repo_dir: Option<PathBuf>) -> Self {
        Self { repo_dir }
    }

    fn run(&self, operation: &'static str, cmd: &mut Command) -> Result<()> {
        if let Some(dir) = &self.repo_dir {
            cmd.current_dir(dir);
        }

        debug!("running git {operation}");
        let output = cmd.output().map_err(|e| StencilError::GitSpawn {
            operation,
            source: e,
        })?;

        if !output.status.success() {
            return Err(StencilError::GitFailed {
                operation,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}

impl Vcs for GitCli {
    fn stage(&mut self, path: &Path) -> Result<()> {
        self.run("add", Command::new("git").arg("add").arg(path))
    }

    fn commit(&mut self, message: &str, timestamp: &str) -> Result<()> {
        self.run(
            "commit",
            Command::new("git")
                .arg("commit")
                .arg("-m")
                .arg(message)
                .env("GIT_AUTHOR_DATE", timestamp)
                .env("GIT_COMMITTER_DATE", timestamp),
        )
    }

    fn push(&mut self) -> Result<()> {
        self.run("push", Command::new("git").arg("push"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_failure_names_the_operation() {
        // A git binary that does not exist surfaces as GitSpawn.
        let cli = GitCli::new(None);
        let err = cli
            .run("add", &mut Command::new("git-binary-that-does-not-exist"))
            .unwrap_err();
        match err {
            StencilError::GitSpawn { operation, .. } => assert_eq!(operation, "add"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_surfaces_stderr() {
        let cli = GitCli::new(None);
        let err = cli
            .run(
                "commit",
                Command::new("sh").arg("-c").arg("echo boom >&2; exit 3"),
            )
            .unwrap_err();
        match err {
            StencilError::GitFailed {
                operation, stderr, ..
            } => {
                assert_eq!(operation, "commit");
                assert_eq!(stderr, "boom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
