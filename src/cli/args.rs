//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::ui::OutputMode;

/// Python2Go - install and manage Python and its pip packages.
#[derive(Debug, Parser)]
#[command(name = "python2go")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true, arg_required_else_help = true)]
pub struct Cli {
    /// Path to config file (overrides .python2go/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show command output as it runs
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Never prompt; elevation requests are declined
    #[arg(long, global = true)]
    pub non_interactive: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// The output mode from flags, falling back to `configured`.
    pub fn output_mode(&self, configured: OutputMode) -> OutputMode {
        if self.quiet {
            OutputMode::Quiet
        } else if self.verbose {
            OutputMode::Verbose
        } else {
            configured
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a shell command through the platform shell
    Exec(ExecArgs),

    /// Install Python (and the package manager it needs)
    Install(InstallArgs),

    /// Uninstall Python
    Uninstall(UninstallArgs),

    /// Show the installed Python version
    Version(VersionArgs),

    /// Run pip with the managed interpreter
    Pip(PipArgs),

    /// List installed pip packages
    Packages(PackagesArgs),

    /// Install the pip packages listed in a gist manifest
    Sync(SyncArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `exec` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ExecArgs {
    /// Command line to run
    pub command: String,

    /// Run with administrator/root privileges
    #[arg(short, long)]
    pub elevate: bool,

    /// Reload PATH first if this command cannot be found
    #[arg(short, long, value_name = "CMD")]
    pub require: Option<String>,

    /// Context appended to the password prompt
    #[arg(long, value_name = "MSG")]
    pub prompt: Option<String>,
}

/// Arguments for the `install` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InstallArgs {
    /// Python version (defaults to the configured version)
    #[arg(long)]
    pub version: Option<String>,
}

/// Arguments for the `uninstall` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct UninstallArgs {
    /// Python version (defaults to the configured version)
    #[arg(long)]
    pub version: Option<String>,

    /// Skip the confirmation
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `version` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct VersionArgs {
    /// Interpreter to query (defaults to the managed one)
    #[arg(long)]
    pub python: Option<String>,
}

/// Arguments for the `pip` command.
#[derive(Debug, Clone, clap::Args)]
pub struct PipArgs {
    /// Interpreter to run pip with (defaults to the managed one)
    #[arg(long)]
    pub python: Option<String>,

    /// Arguments passed to pip
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Arguments for the `packages` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PackagesArgs {
    /// Interpreter whose packages to list (defaults to the managed one)
    #[arg(long)]
    pub python: Option<String>,
}

/// Arguments for the `sync` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SyncArgs {
    /// Gist with the package manifest (defaults to gist_pip_url)
    #[arg(long)]
    pub gist: Option<String>,

    /// Interpreter to install into (defaults to the managed one)
    #[arg(long)]
    pub python: Option<String>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_exec_with_options() {
        let cli = Cli::parse_from([
            "python2go",
            "exec",
            "choco -v",
            "--elevate",
            "--require",
            "choco",
            "--prompt",
            "to check choco",
        ]);
        let Commands::Exec(args) = cli.command else {
            panic!("Expected exec");
        };
        assert_eq!(args.command, "choco -v");
        assert!(args.elevate);
        assert_eq!(args.require.as_deref(), Some("choco"));
        assert_eq!(args.prompt.as_deref(), Some("to check choco"));
    }

    #[test]
    fn pip_passes_hyphenated_args_through() {
        let cli = Cli::parse_from(["python2go", "pip", "install", "-U", "numpy"]);
        let Commands::Pip(args) = cli.command else {
            panic!("Expected pip");
        };
        assert_eq!(args.args, vec!["install", "-U", "numpy"]);
        assert!(args.python.is_none());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["python2go", "version", "--debug", "--no-color"]);
        assert!(cli.debug);
        assert!(cli.no_color);
    }

    #[test]
    fn sync_accepts_gist() {
        let cli = Cli::parse_from(["python2go", "sync", "--gist", "https://gist.github.com/u/1"]);
        let Commands::Sync(args) = cli.command else {
            panic!("Expected sync");
        };
        assert_eq!(args.gist.as_deref(), Some("https://gist.github.com/u/1"));
    }

    #[test]
    fn output_mode_prefers_flags() {
        let cli = Cli::parse_from(["python2go", "-q", "version"]);
        assert_eq!(cli.output_mode(OutputMode::Verbose), OutputMode::Quiet);
        let cli = Cli::parse_from(["python2go", "version"]);
        assert_eq!(cli.output_mode(OutputMode::Silent), OutputMode::Silent);
    }

    #[test]
    fn verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["python2go", "-v", "-q", "version"]).is_err());
    }

    #[test]
    fn missing_subcommand_is_an_error() {
        assert!(Cli::try_parse_from(["python2go"]).is_err());
    }
}
