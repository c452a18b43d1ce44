//! CLI argument definitions using clap

use clap::{ArgAction, Parser, Subcommand};

/// DevOps automation CLI: Terraform operations, bash scripts, and CI/CD pipeline generation
#[derive(Parser, Debug)]
#[command(name = "devopsctl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d, -dd, -ddd)
    #[arg(short = 'd', long = "debug", action = ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run Terraform operations
    #[command(visible_alias = "tf")]
    Terraform {
        #[command(subcommand)]
        command: TerraformCommands,
    },

    /// Run automation scripts
    #[command(visible_alias = "run")]
    Script {
        #[command(subcommand)]
        command: ScriptCommands,
    },

    /// Manage CI/CD pipelines
    #[command(visible_alias = "ci")]
    Pipeline {
        #[command(subcommand)]
        command: PipelineCommands,
    },

    /// Manage CLI configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum TerraformCommands {
    /// Initialize Terraform in specified directory
    Init {
        /// Target directory (default: cwd)
        directory: Option<String>,
    },

    /// Run Terraform plan
    Plan {
        /// Target directory (default: cwd)
        directory: Option<String>,
    },

    /// Run Terraform apply (asks for confirmation)
    Apply {
        /// Target directory (default: cwd)
        directory: Option<String>,
    },

    /// Run Terraform destroy (asks for confirmation)
    Destroy {
        /// Target directory (default: cwd)
        directory: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ScriptCommands {
    /// Run a bash script
    Bash {
        /// Path to the script
        script_path: String,
    },

    /// List available scripts in directory
    List {
        /// Directory to search (default: cwd)
        directory: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum PipelineCommands {
    /// Create a CI/CD pipeline from template
    Create {
        /// Template name (see `pipeline templates`)
        template_name: String,
    },

    /// List available pipeline templates
    Templates,

    /// Commit and push generated workflows to the repository
    Push,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set configuration value
    Set {
        /// Key: terraform-path, workspace-dir, git-remote, git-branch
        key: String,
        /// New value
        value: String,
    },
}
