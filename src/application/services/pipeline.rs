//! Pipeline generation and publishing service
//!
//! `create` renders a catalog template into `.github/workflows/<name>.yml`;
//! `push` stages, commits, and pushes the workflow directory with git,
//! aborting on the first failing step (no rollback of earlier steps).

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::services::run_checked;
use crate::application::{ApplicationError, ApplicationResult};
use crate::config::Config;
use crate::domain::{catalog, render, Language};
use crate::infrastructure::traits::{FileSystem, ProcessRunner};

/// Fixed output directory for generated workflows, relative to the
/// repository root.
pub const WORKFLOW_DIR: &str = ".github/workflows";

/// Commit message used when the user submits a blank one.
pub const DEFAULT_COMMIT_MESSAGE: &str = "Add CI/CD pipeline";

/// Service for creating and pushing CI/CD pipelines.
pub struct PipelineService {
    fs: Arc<dyn FileSystem>,
    runner: Arc<dyn ProcessRunner>,
    config: Config,
}

impl PipelineService {
    pub fn new(fs: Arc<dyn FileSystem>, runner: Arc<dyn ProcessRunner>, config: Config) -> Self {
        Self { fs, runner, config }
    }

    /// Render the named template and write it below [`WORKFLOW_DIR`].
    ///
    /// Unknown template names touch nothing on disk; the error lists every
    /// available key. Returns the path written.
    pub fn create(&self, name: &str) -> ApplicationResult<PathBuf> {
        let template = catalog::lookup(name).ok_or_else(|| {
            crate::domain::DomainError::TemplateNotFound {
                name: name.to_string(),
                available: catalog::keys(),
            }
        })?;

        if template.language == Language::Unspecified {
            warn!("template '{}' has no language; the workflow will contain an empty setup step", name);
        }

        let yaml = render(&template);
        let path = Path::new(WORKFLOW_DIR).join(format!("{name}.yml"));
        debug!("writing pipeline to {}", path.display());

        self.fs
            .ensure_parent(&path)
            .map_err(|e| ApplicationError::OperationFailed {
                context: format!("create pipeline directory {}", WORKFLOW_DIR),
                source: Box::new(e),
            })?;
        self.fs
            .write(&path, &yaml)
            .map_err(|e| ApplicationError::OperationFailed {
                context: format!("write pipeline file {}", path.display()),
                source: Box::new(e),
            })?;

        Ok(path)
    }

    /// Stage, commit, and push the workflow directory.
    ///
    /// Runs `git add`, `git commit`, `git push` in sequence against the
    /// configured remote and branch; the first failing step aborts the rest.
    pub fn push(&self, message: &str) -> ApplicationResult<()> {
        let message = effective_commit_message(message);
        debug!(
            "pushing {} to {}/{}",
            WORKFLOW_DIR, self.config.git_remote, self.config.git_branch
        );

        let workflow_arg = format!("{WORKFLOW_DIR}/");
        let steps: [Vec<&str>; 3] = [
            vec!["add", workflow_arg.as_str()],
            vec!["commit", "-m", message],
            vec![
                "push",
                self.config.git_remote.as_str(),
                self.config.git_branch.as_str(),
            ],
        ];

        for args in &steps {
            run_checked(self.runner.as_ref(), "git", args, None)?;
        }
        Ok(())
    }
}

/// Blank commit messages fall back to [`DEFAULT_COMMIT_MESSAGE`].
pub fn effective_commit_message(input: &str) -> &str {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        DEFAULT_COMMIT_MESSAGE
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_commit_message_uses_default() {
        assert_eq!(effective_commit_message(""), DEFAULT_COMMIT_MESSAGE);
        assert_eq!(effective_commit_message("   "), DEFAULT_COMMIT_MESSAGE);
        assert_eq!(effective_commit_message("fix ci"), "fix ci");
    }
}
