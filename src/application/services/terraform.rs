//! Terraform invocation service
//!
//! Thin wrapper over the process runner: resolves the operation to its
//! argument list and runs the configured terraform executable in the target
//! directory, streaming output through. Confirmation of mutating operations
//! is the dispatcher's job, not this service's.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::application::services::run_checked;
use crate::application::ApplicationResult;
use crate::config::Config;
use crate::infrastructure::traits::ProcessRunner;

/// One terraform operation and its fixed argument list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerraformOp {
    Init,
    Plan,
    Apply,
    Destroy,
}

impl TerraformOp {
    /// Arguments passed to the terraform executable. Mutating operations
    /// run auto-approved; the interactive gate happens before dispatch.
    pub fn args(&self) -> &'static [&'static str] {
        match self {
            TerraformOp::Init => &["init"],
            TerraformOp::Plan => &["plan"],
            TerraformOp::Apply => &["apply", "-auto-approve"],
            TerraformOp::Destroy => &["destroy", "-auto-approve"],
        }
    }

    /// Whether the operation mutates infrastructure and needs confirmation.
    pub fn is_mutating(&self) -> bool {
        matches!(self, TerraformOp::Apply | TerraformOp::Destroy)
    }
}

/// Service for running terraform operations.
pub struct TerraformService {
    runner: Arc<dyn ProcessRunner>,
    config: Config,
}

impl TerraformService {
    pub fn new(runner: Arc<dyn ProcessRunner>, config: Config) -> Self {
        Self { runner, config }
    }

    /// Run one terraform operation in `dir`, blocking until it exits.
    pub fn run(&self, op: TerraformOp, dir: &Path) -> ApplicationResult<()> {
        debug!(
            "terraform {} in {} via {}",
            op.args().join(" "),
            dir.display(),
            self.config.terraform_path
        );
        run_checked(
            self.runner.as_ref(),
            &self.config.terraform_path,
            op.args(),
            Some(dir),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_op_args_auto_approve_mutating_only() {
        assert_eq!(TerraformOp::Init.args(), ["init"]);
        assert_eq!(TerraformOp::Plan.args(), ["plan"]);
        assert_eq!(TerraformOp::Apply.args(), ["apply", "-auto-approve"]);
        assert_eq!(TerraformOp::Destroy.args(), ["destroy", "-auto-approve"]);
    }

    #[test]
    fn test_only_apply_and_destroy_are_mutating() {
        assert!(!TerraformOp::Init.is_mutating());
        assert!(!TerraformOp::Plan.is_mutating());
        assert!(TerraformOp::Apply.is_mutating());
        assert!(TerraformOp::Destroy.is_mutating());
    }
}
