//! Install and uninstall command implementations.
//!
//! `python2go install` bootstraps the platform package manager and installs
//! the configured Python version; `python2go uninstall` removes it again.

use crate::cli::args::{InstallArgs, UninstallArgs};
use crate::error::Result;
use crate::python;
use crate::shell::ShellResult;
use crate::ui::{SpinnerHandle, UserInterface};

use super::dispatcher::{Command, CommandContext, CommandResult};

fn requested_version<'v>(ctx: &'v CommandContext, requested: Option<&'v str>) -> &'v str {
    requested
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(&ctx.config().python_version)
}

/// Finish `spinner` for `result`, showing the failure details.
fn finish(
    ui: &mut dyn UserInterface,
    spinner: &mut dyn SpinnerHandle,
    action: &str,
    done: &str,
    result: &ShellResult,
) -> CommandResult {
    match result {
        ShellResult::Success { .. } => {
            spinner.finish_success(done);
            CommandResult::success()
        }
        ShellResult::Failure { error, output, .. } => {
            spinner.finish_error(&format!("{} failed", action));
            ui.error(error);
            if let Some(output) = output.as_deref().filter(|o| !o.is_empty()) {
                ui.show_error_block(action, output);
            }
            CommandResult::failure(1)
        }
    }
}

/// The install command implementation.
pub struct InstallCommand<'a> {
    ctx: &'a CommandContext,
    args: InstallArgs,
}

impl<'a> InstallCommand<'a> {
    /// Create a new install command.
    pub fn new(ctx: &'a CommandContext, args: InstallArgs) -> Self {
        Self { ctx, args }
    }
}

impl Command for InstallCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let version = requested_version(self.ctx, self.args.version.as_deref());
        ui.show_header(&format!("Python {}", version));

        let action = format!("Installing Python {}", version);
        let mut spinner = ui.start_spinner(&action);
        let shell = self.ctx.shell_with_spinner(ui, spinner.as_ref(), &action);
        let result = python::install(&shell, version);
        let outcome = finish(
            ui,
            spinner.as_mut(),
            &action,
            &format!("Python {} installed", version),
            &result,
        );
        if !outcome.success {
            return Ok(outcome);
        }

        let interpreter = python::interpreter(&shell, version);
        match python::installed_version(&shell, &interpreter) {
            Some(found) if found.to_string() == version => {
                ui.success(&format!("{} reports Python {}", interpreter, found));
            }
            Some(found) => ui.warning(&format!(
                "{} reports Python {}; restart your shell to pick up {}",
                interpreter, found, version
            )),
            None => ui.warning(&format!(
                "{} is not on PATH yet; restart your shell",
                interpreter
            )),
        }
        Ok(outcome)
    }
}

/// The uninstall command implementation.
pub struct UninstallCommand<'a> {
    ctx: &'a CommandContext,
    args: UninstallArgs,
}

impl<'a> UninstallCommand<'a> {
    /// Create a new uninstall command.
    pub fn new(ctx: &'a CommandContext, args: UninstallArgs) -> Self {
        Self { ctx, args }
    }
}

impl Command for UninstallCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let version = requested_version(self.ctx, self.args.version.as_deref());
        if !self.args.yes && !ui.confirm(&format!("Uninstall Python {}?", version), false)? {
            ui.message("Uninstall cancelled");
            return Ok(CommandResult::success());
        }

        let action = format!("Uninstalling Python {}", version);
        let mut spinner = ui.start_spinner(&action);
        let shell = self.ctx.shell_with_spinner(ui, spinner.as_ref(), &action);
        let result = python::uninstall(&shell, version);
        Ok(finish(
            ui,
            spinner.as_mut(),
            &action,
            &format!("Python {} removed", version),
            &result,
        ))
    }
}
