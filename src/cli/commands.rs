//! Command dispatch
//!
//! Maps a parsed CLI invocation to one service action. All failure paths
//! return `CliResult` so the single exit boundary in `main` decides the
//! process exit code; nothing in here terminates the process.

use std::path::PathBuf;

use tracing::debug;

use crate::application::services::{
    resolve_dir, PipelineService, ScriptService, TerraformOp, TerraformService,
};
use crate::cli::args::{
    Cli, Commands, ConfigCommands, PipelineCommands, ScriptCommands, TerraformCommands,
};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::domain::{catalog, expand_env_vars};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

pub fn execute_command(cli: &Cli, services: &mut ServiceContainer) -> CliResult<()> {
    match &cli.command {
        Commands::Terraform { command } => terraform(command, services),
        Commands::Script { command } => script(command, services),
        Commands::Pipeline { command } => pipeline(command, services),
        Commands::Config { command } => config(command, services),
        // Handled in main before dispatch (no config prompts for completions)
        Commands::Completion { .. } => Ok(()),
    }
}

fn terraform(command: &TerraformCommands, services: &ServiceContainer) -> CliResult<()> {
    let (op, directory) = match command {
        TerraformCommands::Init { directory } => (TerraformOp::Init, directory),
        TerraformCommands::Plan { directory } => (TerraformOp::Plan, directory),
        TerraformCommands::Apply { directory } => (TerraformOp::Apply, directory),
        TerraformCommands::Destroy { directory } => (TerraformOp::Destroy, directory),
    };
    let dir = resolve_dir(directory.as_deref());
    debug!("terraform {:?} in {}", op, dir.display());

    if op.is_mutating() {
        let question = match op {
            TerraformOp::Apply => "Are you sure you want to apply these changes? (yes/no):",
            _ => "Are you sure you want to destroy these resources? (yes/no):",
        };
        let confirmed = services
            .prompter
            .confirm(question)
            .map_err(|e| InfraError::io("read confirmation from stdin", e))?;
        if !confirmed {
            let cancelled = match op {
                TerraformOp::Apply => "Apply cancelled.",
                _ => "Destroy cancelled.",
            };
            output::info(cancelled);
            return Ok(());
        }
    }

    output::action(
        "run",
        &format!("terraform {} in {}", op.args().join(" "), dir.display()),
    );
    let service = TerraformService::new(services.runner.clone(), services.config.clone());
    service.run(op, &dir)?;
    Ok(())
}

fn script(command: &ScriptCommands, services: &ServiceContainer) -> CliResult<()> {
    let service = ScriptService::new(services.fs.clone(), services.runner.clone());
    match command {
        ScriptCommands::Bash { script_path } => {
            let script = PathBuf::from(expand_env_vars(script_path));
            output::action("run", &format!("script {}", script.display()));
            service.run_bash(&script)?;
            Ok(())
        }
        ScriptCommands::List { directory } => {
            let dir = resolve_dir(directory.as_deref());
            let scripts = service.list(&dir)?;
            if scripts.is_empty() {
                output::info(&format!("No bash scripts found in {}", dir.display()));
                return Ok(());
            }
            output::header(&format!("Available scripts in {}:", dir.display()));
            for script in &scripts {
                if let Some(name) = script.file_name() {
                    output::detail(&format!("- {}", name.to_string_lossy()));
                }
            }
            Ok(())
        }
    }
}

fn pipeline(command: &PipelineCommands, services: &ServiceContainer) -> CliResult<()> {
    let service = PipelineService::new(
        services.fs.clone(),
        services.runner.clone(),
        services.config.clone(),
    );
    match command {
        PipelineCommands::Create { template_name } => {
            let path = service.create(template_name)?;
            output::success(&format!("Pipeline created: {}", path.display()));
            Ok(())
        }
        PipelineCommands::Templates => {
            output::header("Available pipeline templates:");
            for (key, template) in catalog::all() {
                output::detail(&format!("- {} (Language: {})", key, template.language));
            }
            Ok(())
        }
        PipelineCommands::Push => {
            let message = services
                .prompter
                .read_line("Commit message:")
                .map_err(|e| InfraError::io("read commit message from stdin", e))?;
            service.push(&message)?;
            output::success("Pipeline pushed to repository successfully!");
            Ok(())
        }
    }
}

fn config(command: &ConfigCommands, services: &mut ServiceContainer) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::info(&services.config.to_toml()?);
            Ok(())
        }
        ConfigCommands::Set { key, value } => {
            let key = services
                .config
                .set(key, value)
                .map_err(|e| CliError::Usage(e.to_string()))?;
            output::action("set", &format!("{} = {}", key, value));
            Ok(())
        }
    }
}
