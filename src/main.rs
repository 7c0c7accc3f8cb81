//! Python2Go CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use python2go::cli::{Cli, CommandContext, CommandDispatcher, Commands};
use python2go::config::{find_project_root, load_config, Python2GoConfig};
use python2go::shell::is_ci;
use python2go::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr so command output on stdout stays clean.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("python2go=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("python2go=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Python2Go starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Determine project root
    let cwd = std::env::current_dir().unwrap_or_default();
    let project_root = cli
        .project
        .clone()
        .or_else(|| find_project_root(&cwd))
        .unwrap_or(cwd);

    // Completions never need a config
    let config = if matches!(cli.command, Commands::Completions(_)) {
        Ok(Python2GoConfig::default())
    } else {
        load_config(&project_root, cli.config.as_deref())
    };

    // Check if non-interactive (CI mode or explicit flag)
    let is_interactive = !cli.non_interactive && !is_ci();

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            let mut ui = create_ui(is_interactive, cli.output_mode(OutputMode::Normal));
            ui.error(&format!("Error: {}", e));
            return ExitCode::from(1);
        }
    };

    // Create UI
    let mut ui = create_ui(is_interactive, cli.output_mode(config.shell_output));

    // Dispatch command
    let dispatcher = CommandDispatcher::new(CommandContext::new(config, is_interactive));

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code.clamp(0, 255) as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
