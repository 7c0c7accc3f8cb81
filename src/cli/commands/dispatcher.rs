//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandContext`] for what every command shares
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::sync::Arc;

use crate::cli::args::{Cli, Commands};
use crate::config::Python2GoConfig;
use crate::error::Result;
use crate::python;
use crate::shell::{
    select_adapter, CommandOrchestrator, CredentialPrompt, OutputSink, Platform, ShellDialect,
    SystemRunner,
};
use crate::ui::{
    credential_prompt, ConsoleSink, Python2GoTheme, SpinnerHandle, SpinnerSink, SuspendingPrompt,
    UserInterface,
};

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// Expected failures (a command exiting non-zero, a declined password
    /// prompt) are reported through `ui` and a failed [`CommandResult`];
    /// `Err` is reserved for configuration and I/O problems.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

type ShellFactory =
    Box<dyn Fn(Arc<dyn OutputSink>, Arc<dyn CredentialPrompt>) -> CommandOrchestrator>;

/// Configuration and collaborators shared by all commands.
pub struct CommandContext {
    config: Python2GoConfig,
    interactive: bool,
    shell_factory: ShellFactory,
}

impl CommandContext {
    /// Context running commands on the current platform.
    pub fn new(config: Python2GoConfig, interactive: bool) -> Self {
        Self::with_shell_factory(config, interactive, |sink, prompt| {
            let adapter = select_adapter(Platform::current());
            let dialect = adapter.dialect().unwrap_or(ShellDialect::Posix);
            CommandOrchestrator::new(adapter, Arc::new(SystemRunner::new(dialect, sink)), prompt)
        })
    }

    /// Context building its orchestrators with `factory`.
    pub fn with_shell_factory<F>(config: Python2GoConfig, interactive: bool, factory: F) -> Self
    where
        F: Fn(Arc<dyn OutputSink>, Arc<dyn CredentialPrompt>) -> CommandOrchestrator + 'static,
    {
        Self {
            config,
            interactive,
            shell_factory: Box::new(factory),
        }
    }

    /// The effective configuration.
    pub fn config(&self) -> &Python2GoConfig {
        &self.config
    }

    /// Whether prompts can be shown.
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// An orchestrator echoing command output per the UI's output mode.
    pub fn shell(&self, ui: &dyn UserInterface) -> CommandOrchestrator {
        let sink: Arc<dyn OutputSink> =
            Arc::new(ConsoleSink::new(ui.output_mode(), Python2GoTheme::detect()));
        (self.shell_factory)(sink, credential_prompt(self.interactive))
    }

    /// An orchestrator streaming command output into `spinner`.
    ///
    /// Falls back to [`shell`](Self::shell)'s behavior when the spinner
    /// has nothing to draw on.
    pub fn shell_with_spinner(
        &self,
        ui: &dyn UserInterface,
        spinner: &dyn SpinnerHandle,
        message: &str,
    ) -> CommandOrchestrator {
        match spinner.progress_bar() {
            Some(bar) if !ui.output_mode().shows_command_output() => {
                let prompt: Arc<dyn CredentialPrompt> = Arc::new(SuspendingPrompt::new(
                    bar.clone(),
                    credential_prompt(self.interactive),
                ));
                let sink: Arc<dyn OutputSink> = Arc::new(SpinnerSink::new(bar, message, 3));
                (self.shell_factory)(sink, prompt)
            }
            _ => self.shell(ui),
        }
    }

    /// The interpreter to run: `requested`, else the configured version's.
    pub fn interpreter(&self, shell: &CommandOrchestrator, requested: Option<&str>) -> String {
        match requested.map(str::trim).filter(|p| !p.is_empty()) {
            Some(python) => python.to_string(),
            None => python::interpreter(shell, &self.config.python_version),
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    context: CommandContext,
}

impl CommandDispatcher {
    /// Create a new dispatcher.
    pub fn new(context: CommandContext) -> Self {
        Self { context }
    }

    /// The shared command context.
    pub fn context(&self) -> &CommandContext {
        &self.context
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = &self.context;
        match &cli.command {
            Commands::Exec(args) => super::exec::ExecCommand::new(ctx, args.clone()).execute(ui),
            Commands::Install(args) => {
                super::install::InstallCommand::new(ctx, args.clone()).execute(ui)
            }
            Commands::Uninstall(args) => {
                super::install::UninstallCommand::new(ctx, args.clone()).execute(ui)
            }
            Commands::Version(args) => {
                super::version::VersionCommand::new(ctx, args.clone()).execute(ui)
            }
            Commands::Pip(args) => super::pip::PipCommand::new(ctx, args.clone()).execute(ui),
            Commands::Packages(args) => {
                super::pip::PackagesCommand::new(ctx, args.clone()).execute(ui)
            }
            Commands::Sync(args) => super::sync::SyncCommand::new(ctx, args.clone()).execute(ui),
            Commands::Completions(args) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::shell::testing::{FixedPrompt, ScriptedRunner};
    use crate::shell::{PlatformAdapter, ShellResult, UnixAdapter, WindowsAdapter};

    /// A context whose orchestrators replay `responses` on `platform`.
    pub fn scripted_context(
        config: Python2GoConfig,
        platform: Platform,
        responses: Vec<ShellResult>,
    ) -> (CommandContext, Arc<ScriptedRunner>) {
        let runner = Arc::new(ScriptedRunner::new(responses));
        let shared = runner.clone();
        let ctx = CommandContext::with_shell_factory(config, true, move |_, _| {
            let adapter: Box<dyn PlatformAdapter> = match platform {
                Platform::Windows => Box::new(WindowsAdapter),
                _ => Box::new(UnixAdapter::new(false)),
            };
            CommandOrchestrator::new(adapter, shared.clone(), Arc::new(FixedPrompt(Some("pw"))))
        });
        (ctx, runner)
    }
}
