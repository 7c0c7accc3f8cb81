//! Exec command implementation.
//!
//! The `python2go exec` command runs one command line through the platform
//! shell, with optional elevation and PATH recovery.

use tracing::debug;

use crate::cli::args::ExecArgs;
use crate::error::Result;
use crate::shell::{CommandOptions, FailureKind, ShellResult};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The exec command implementation.
pub struct ExecCommand<'a> {
    ctx: &'a CommandContext,
    args: ExecArgs,
}

impl<'a> ExecCommand<'a> {
    /// Create a new exec command.
    pub fn new(ctx: &'a CommandContext, args: ExecArgs) -> Self {
        Self { ctx, args }
    }

    fn options(&self) -> CommandOptions {
        CommandOptions {
            elevate: self.args.elevate,
            required_command: self.args.require.clone(),
            prompt_message: self.args.prompt.clone(),
            ..Default::default()
        }
    }
}

impl Command for ExecCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let shell = self.ctx.shell(ui);
        debug!("exec: {}", self.args.command);
        let result = shell.execute(&self.args.command, &self.options());
        Ok(report(ui, &self.args.command, &result))
    }
}

/// Print `result` the way `exec` shows it.
pub(super) fn report(ui: &mut dyn UserInterface, command: &str, result: &ShellResult) -> CommandResult {
    match result {
        ShellResult::Success { output, warnings } => {
            if !output.is_empty() {
                ui.message(output);
            }
            if let Some(warnings) = warnings {
                ui.warning(warnings);
            }
            CommandResult::success()
        }
        ShellResult::Failure {
            kind,
            error,
            output,
        } => {
            match kind {
                FailureKind::CredentialDeclined => ui.error("Elevation cancelled: no password provided"),
                FailureKind::UnsupportedPlatform => ui.error(error),
                FailureKind::Spawn | FailureKind::NonZeroExit => {
                    ui.error(&format!("Command failed ({})", kind));
                    let mut block = output.clone().unwrap_or_default();
                    if !block.is_empty() {
                        block.push('\n');
                    }
                    block.push_str(error);
                    ui.show_error_block(command, &block);
                }
            }
            CommandResult::failure(1)
        }
    }
}
