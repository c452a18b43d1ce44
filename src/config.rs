//! In-memory CLI configuration
//!
//! Configuration lives only for the lifetime of one invocation: defaults,
//! optionally overridden by the startup prompts and `config set`. Nothing is
//! ever written to disk; `config show` renders the current value as TOML.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::expand_env_vars;

/// Default workspace directory offered by the startup prompt.
pub const DEFAULT_WORKSPACE_DIR: &str = "./workspace";

/// Default git branch offered by the startup prompt.
pub const DEFAULT_GIT_BRANCH: &str = "main";

/// Unified configuration for devopsctl.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Terraform executable (name on PATH or explicit path)
    pub terraform_path: String,
    /// Workspace directory, created at startup
    pub workspace_dir: PathBuf,
    /// Git remote used by `pipeline push`
    pub git_remote: String,
    /// Git branch pushed by `pipeline push`
    pub git_branch: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            terraform_path: "terraform".into(),
            workspace_dir: PathBuf::from(DEFAULT_WORKSPACE_DIR),
            git_remote: "origin".into(),
            git_branch: DEFAULT_GIT_BRANCH.into(),
        }
    }
}

impl Config {
    /// Set a single field by key name. Unknown keys leave the configuration
    /// untouched and report the valid keys.
    pub fn set(&mut self, key: &str, value: &str) -> Result<ConfigKey, UnknownConfigKey> {
        let key: ConfigKey = key.parse()?;
        match key {
            ConfigKey::TerraformPath => self.terraform_path = expand_env_vars(value),
            ConfigKey::WorkspaceDir => self.workspace_dir = PathBuf::from(expand_env_vars(value)),
            ConfigKey::GitRemote => self.git_remote = value.to_string(),
            ConfigKey::GitBranch => self.git_branch = value.to_string(),
        }
        Ok(key)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }
}

/// The closed set of settable configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    TerraformPath,
    WorkspaceDir,
    GitRemote,
    GitBranch,
}

impl ConfigKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::TerraformPath => "terraform-path",
            ConfigKey::WorkspaceDir => "workspace-dir",
            ConfigKey::GitRemote => "git-remote",
            ConfigKey::GitBranch => "git-branch",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigKey {
    type Err = UnknownConfigKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "terraform-path" => Ok(ConfigKey::TerraformPath),
            "workspace-dir" => Ok(ConfigKey::WorkspaceDir),
            "git-remote" => Ok(ConfigKey::GitRemote),
            "git-branch" => Ok(ConfigKey::GitBranch),
            other => Err(UnknownConfigKey(other.to_string())),
        }
    }
}

/// Rejected `config set` key. Not fatal to an interactive session; the
/// configuration is left unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown configuration key: {0} (valid keys: terraform-path, workspace-dir, git-remote, git-branch)")]
pub struct UnknownConfigKey(pub String);
