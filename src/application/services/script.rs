//! Bash script service
//!
//! Runs a single bash script (path validated first) and lists `*.sh`
//! scripts in a directory, non-recursively.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;
use walkdir::WalkDir;

use crate::application::services::run_checked;
use crate::application::{ApplicationError, ApplicationResult};
use crate::infrastructure::traits::{FileSystem, ProcessRunner};

/// Service for running and listing automation scripts.
pub struct ScriptService {
    fs: Arc<dyn FileSystem>,
    runner: Arc<dyn ProcessRunner>,
}

impl ScriptService {
    pub fn new(fs: Arc<dyn FileSystem>, runner: Arc<dyn ProcessRunner>) -> Self {
        Self { fs, runner }
    }

    /// Run `bash <script>`, streaming output. The script path must exist.
    pub fn run_bash(&self, script: &Path) -> ApplicationResult<()> {
        if !self.fs.exists(script) {
            return Err(ApplicationError::ScriptNotFound(script.to_path_buf()));
        }
        debug!("running script {}", script.display());
        let script_arg = script.to_string_lossy();
        run_checked(self.runner.as_ref(), "bash", &[script_arg.as_ref()], None)
    }

    /// List `*.sh` files directly inside `dir` (non-recursive), sorted by
    /// file name.
    pub fn list(&self, dir: &Path) -> ApplicationResult<Vec<PathBuf>> {
        debug!("listing scripts in {}", dir.display());
        let mut scripts: Vec<PathBuf> = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "sh"))
            .map(|e| e.into_path())
            .collect();
        scripts.sort();
        Ok(scripts)
    }
}
