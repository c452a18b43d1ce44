use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Command, CommandFactory, Parser};
use clap_complete::{generate, Generator};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use devopsctl::cli::args::{Cli, Commands};
use devopsctl::cli::commands::execute_command;
use devopsctl::cli::output;
use devopsctl::config::{Config, DEFAULT_GIT_BRANCH, DEFAULT_WORKSPACE_DIR};
use devopsctl::domain::expand_env_vars;
use devopsctl::exitcode;
use devopsctl::infrastructure::di::ServiceContainer;
use devopsctl::infrastructure::traits::{Prompter, StdinPrompter};

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

fn main() {
    let cli = Cli::parse();

    // Completions write a script to stdout; skip prompts and logging noise.
    if let Commands::Completion { shell } = &cli.command {
        let mut cmd = Cli::command();
        print_completions(*shell, &mut cmd);
        return;
    }

    setup_logging(cli.debug);

    let prompter = StdinPrompter;
    let config = match startup_config(&prompter) {
        Ok(config) => config,
        Err(e) => {
            output::error(&format!("failed to read startup input: {e}"));
            process::exit(exitcode::IOERR);
        }
    };

    if let Err(e) = std::fs::create_dir_all(&config.workspace_dir) {
        output::error(&format!(
            "failed to create workspace directory {}: {e}",
            config.workspace_dir.display()
        ));
        process::exit(exitcode::CANTCREAT);
    }

    let mut services = ServiceContainer::new(config);
    if let Err(e) = execute_command(&cli, &mut services) {
        output::error(&e);
        process::exit(e.exit_code());
    }
}

/// Build the run configuration: compiled defaults plus the two startup
/// prompts (blank input keeps the default).
fn startup_config(prompter: &dyn Prompter) -> io::Result<Config> {
    let mut config = Config::default();

    let workspace = prompter.read_line(
        "Enter workspace directory (press Enter for default './workspace'):",
    )?;
    config.workspace_dir =
        PathBuf::from(expand_env_vars(&or_default(&workspace, DEFAULT_WORKSPACE_DIR)));

    let branch = prompter.read_line("Enter Git branch (press Enter for default 'main'):")?;
    config.git_branch = or_default(&branch, DEFAULT_GIT_BRANCH);

    Ok(config)
}

fn or_default(input: &str, default: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    // Formatted output directed to stderr so it never mixes with data output
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::ENTER)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}
