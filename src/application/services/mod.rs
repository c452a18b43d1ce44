//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (FileSystem, ProcessRunner)
//! but are themselves concrete structs, not traits.

mod pipeline;
mod script;
mod terraform;

use std::env;
use std::path::{Path, PathBuf};

pub use pipeline::{PipelineService, DEFAULT_COMMIT_MESSAGE, WORKFLOW_DIR};
pub use script::ScriptService;
pub use terraform::{TerraformOp, TerraformService};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::expand_env_vars;
use crate::infrastructure::traits::ProcessRunner;

/// Resolve a target directory: the explicit argument (with `~`/`$VAR`
/// expanded) or the current working directory.
pub fn resolve_dir(arg: Option<&str>) -> PathBuf {
    match arg {
        Some(dir) => PathBuf::from(expand_env_vars(dir)),
        None => env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Run an external program with inherited stdio and fail on non-zero exit.
///
/// Launch failures and non-zero statuses are both fatal to the invocation;
/// there are no retries and no output capture.
pub(crate) fn run_checked(
    runner: &dyn ProcessRunner,
    program: &str,
    args: &[&str],
    cwd: Option<&Path>,
) -> ApplicationResult<()> {
    match runner.run_streaming(program, args, cwd) {
        Ok(0) => Ok(()),
        Ok(code) => Err(ApplicationError::CommandFailed {
            program: program.to_string(),
            code,
        }),
        Err(source) => Err(ApplicationError::CommandLaunch {
            program: program.to_string(),
            source,
        }),
    }
}
