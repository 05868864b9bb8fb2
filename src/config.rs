use crate::error::{Result, StencilError};
use std::{env, path::PathBuf};

const ENV_MESSAGE: &str = "COMMIT_STENCIL_MESSAGE";
const ENV_COMMITS_PER_CELL: &str = "COMMIT_STENCIL_COMMITS_PER_CELL";
const ENV_REPO_DIR: &str = "COMMIT_STENCIL_REPO_DIR";
const ENV_NO_PUSH: &str = "COMMIT_STENCIL_NO_PUSH";

const DEFAULT_MESSAGE: &str = "BATMAN";
const DEFAULT_COMMITS_PER_CELL: u32 = 5;

#[derive(Debug, Clone)]
pub struct Config {
    /// Word drawn onto the contribution graph.
    pub message: String,
    /// Commits made for each lit cell.
    pub commits_per_cell: u32,
    /// Repository to commit into. `None` means the current working directory.
    pub repo_dir: Option<PathBuf>,
    /// Skip the final `git push` (commits are still made).
    pub no_push: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            message: DEFAULT_MESSAGE.to_string(),
            commits_per_cell: DEFAULT_COMMITS_PER_CELL,
            repo_dir: None,
            no_push: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(message) = env::var(ENV_MESSAGE) {
            let message = message.trim().to_string();
            if message.is_empty() {
                return Err(StencilError::InvalidConfiguration(format!(
                    "{ENV_MESSAGE} must not be empty"
                )));
            }
            config.message = message;
        }

        if let Ok(value) = env::var(ENV_COMMITS_PER_CELL) {
            let count: u32 = value.trim().parse().map_err(|_| {
                StencilError::InvalidConfiguration(format!(
                    "{ENV_COMMITS_PER_CELL} must be a non-negative integer, got: {value}"
                ))
            })?;
            if count == 0 {
                return Err(StencilError::InvalidConfiguration(format!(
                    "{ENV_COMMITS_PER_CELL} must be at least 1"
                )));
            }
            config.commits_per_cell = count;
        }

        if let Ok(repo_dir) = env::var(ENV_REPO_DIR) {
            if !repo_dir.trim().is_empty() {
                let path = PathBuf::from(repo_dir);

                // The repository must already exist; we never create it.
                if !path.is_dir() {
                    return Err(StencilError::InvalidConfiguration(format!(
                        "Repository path is not a directory: {}",
                        path.display()
                    )));
                }

                config.repo_dir = Some(path);
            }
        }

        if let Ok(value) = env::var(ENV_NO_PUSH) {
            config.no_push = matches!(value.trim(), "1" | "true" | "TRUE" | "True");
        }

        Ok(config)
    }
}
