//! Version command implementation.
//!
//! The `python2go version` command shows which Python the managed
//! interpreter (or `--python`) reports.

use crate::cli::args::VersionArgs;
use crate::error::Result;
use crate::python;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The version command implementation.
pub struct VersionCommand<'a> {
    ctx: &'a CommandContext,
    args: VersionArgs,
}

impl<'a> VersionCommand<'a> {
    /// Create a new version command.
    pub fn new(ctx: &'a CommandContext, args: VersionArgs) -> Self {
        Self { ctx, args }
    }
}

impl Command for VersionCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let shell = self.ctx.shell(ui);
        let interpreter = self.ctx.interpreter(&shell, self.args.python.as_deref());

        let Some(found) = python::installed_version(&shell, &interpreter) else {
            ui.error(&format!("No Python found at {}", interpreter));
            return Ok(CommandResult::failure(1));
        };

        ui.message(&format!("Python {}", found));
        let configured = &self.ctx.config().python_version;
        if self.args.python.is_none() && found.to_string() != *configured {
            ui.warning(&format!("Configured version is {}", configured));
        }
        Ok(CommandResult::success())
    }
}
