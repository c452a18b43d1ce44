//! Tests for the config command family through the dispatcher

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use devopsctl::cli::args::Cli;
use devopsctl::cli::commands::execute_command;
use devopsctl::cli::error::CliError;
use devopsctl::config::Config;
use devopsctl::exitcode;
use devopsctl::infrastructure::di::ServiceContainer;
use devopsctl::util::testing::{MockFileSystem, MockProcessRunner, MockPrompter};

fn container() -> ServiceContainer {
    ServiceContainer::with_deps(
        Config::default(),
        Arc::new(MockFileSystem::new()),
        Arc::new(MockProcessRunner::new()),
        Arc::new(MockPrompter::default()),
    )
}

#[test]
fn given_workspace_dir_key_when_set_then_only_that_field_changes() {
    // Arrange
    let mut services = container();
    let cli = Cli::try_parse_from(["devopsctl", "config", "set", "workspace-dir", "/tmp/x"]).unwrap();

    // Act
    execute_command(&cli, &mut services).unwrap();

    // Assert
    assert_eq!(services.config.workspace_dir, PathBuf::from("/tmp/x"));
    assert_eq!(services.config.terraform_path, "terraform");
    assert_eq!(services.config.git_remote, "origin");
    assert_eq!(services.config.git_branch, "main");
}

#[test]
fn given_each_valid_key_when_set_then_value_is_stored() {
    // Arrange
    let mut services = container();

    // Act
    for (key, value) in [
        ("terraform-path", "/usr/local/bin/terraform"),
        ("git-remote", "upstream"),
        ("git-branch", "develop"),
    ] {
        let cli = Cli::try_parse_from(["devopsctl", "config", "set", key, value]).unwrap();
        execute_command(&cli, &mut services).unwrap();
    }

    // Assert
    assert_eq!(services.config.terraform_path, "/usr/local/bin/terraform");
    assert_eq!(services.config.git_remote, "upstream");
    assert_eq!(services.config.git_branch, "develop");
}

#[test]
fn given_bogus_key_when_set_then_usage_error_and_config_untouched() {
    // Arrange
    let mut services = container();
    let before = services.config.clone();
    let cli = Cli::try_parse_from(["devopsctl", "config", "set", "bogus-key", "v"]).unwrap();

    // Act
    let err = execute_command(&cli, &mut services).unwrap_err();

    // Assert
    assert!(matches!(err, CliError::Usage(_)));
    assert_eq!(err.exit_code(), exitcode::USAGE);
    assert!(err.to_string().contains("bogus-key"));
    assert_eq!(services.config, before);
}

#[test]
fn given_config_when_shown_then_reports_all_four_fields() {
    // Arrange
    let mut services = container();
    services.config.set("workspace-dir", "/tmp/x").unwrap();

    // Act: show renders without error; the TOML form carries every field
    let cli = Cli::try_parse_from(["devopsctl", "config", "show"]).unwrap();
    execute_command(&cli, &mut services).unwrap();

    // Assert
    let toml = services.config.to_toml().unwrap();
    assert!(toml.contains("terraform-path"));
    assert!(toml.contains("workspace-dir = \"/tmp/x\""));
    assert!(toml.contains("git-remote"));
    assert!(toml.contains("git-branch"));
}
