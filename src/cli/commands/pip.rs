//! Pip and packages command implementations.
//!
//! `python2go pip` passes its arguments to `<python> -m pip`;
//! `python2go packages` lists what pip reports as installed.

use crate::cli::args::{PackagesArgs, PipArgs};
use crate::error::Result;
use crate::python;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};
use super::exec::report;

/// The pip command implementation.
pub struct PipCommand<'a> {
    ctx: &'a CommandContext,
    args: PipArgs,
}

impl<'a> PipCommand<'a> {
    /// Create a new pip command.
    pub fn new(ctx: &'a CommandContext, args: PipArgs) -> Self {
        Self { ctx, args }
    }
}

impl Command for PipCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let shell = self.ctx.shell(ui);
        let interpreter = self.ctx.interpreter(&shell, self.args.python.as_deref());
        let command = python::pip_command(&interpreter, &self.args.args).render(shell.dialect());
        let result = python::run_pip(&shell, &interpreter, &self.args.args);
        Ok(report(ui, &command, &result))
    }
}

/// The packages command implementation.
pub struct PackagesCommand<'a> {
    ctx: &'a CommandContext,
    args: PackagesArgs,
}

impl<'a> PackagesCommand<'a> {
    /// Create a new packages command.
    pub fn new(ctx: &'a CommandContext, args: PackagesArgs) -> Self {
        Self { ctx, args }
    }
}

impl Command for PackagesCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let shell = self.ctx.shell(ui);
        let interpreter = self.ctx.interpreter(&shell, self.args.python.as_deref());
        match python::list_installed(&shell, &interpreter) {
            Ok(packages) if packages.is_empty() => {
                ui.message("No packages installed");
                Ok(CommandResult::success())
            }
            Ok(packages) => {
                ui.show_packages(&packages);
                Ok(CommandResult::success())
            }
            Err(e) => {
                ui.error(&e.to_string());
                Ok(CommandResult::failure(1))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::dispatcher::test_support::scripted_context;
    use crate::config::Python2GoConfig;
    use crate::shell::{Platform, ShellResult};
    use crate::ui::MockUI;

    fn python3() -> Option<String> {
        Some("python3".to_string())
    }

    #[test]
    fn pip_forwards_arguments() {
        let (ctx, runner) = scripted_context(
            Python2GoConfig::default(),
            Platform::Unix,
            vec![ShellResult::success("pip 23.1", None)],
        );
        let mut ui = MockUI::new();
        let args = PipArgs {
            python: python3(),
            args: vec!["--version".to_string()],
        };
        let result = PipCommand::new(&ctx, args).execute(&mut ui).unwrap();
        assert!(result.success);
        assert!(runner.commands()[0].ends_with("python3 -m pip --version"));
        assert_eq!(ui.messages(), ["pip 23.1"]);
    }

    #[test]
    fn pip_failure_shows_rendered_command() {
        let (ctx, _) = scripted_context(
            Python2GoConfig::default(),
            Platform::Unix,
            vec![ShellResult::non_zero_exit("No matching distribution", None)],
        );
        let mut ui = MockUI::new();
        let args = PipArgs {
            python: python3(),
            args: vec!["install".to_string(), "nope".to_string()],
        };
        let result = PipCommand::new(&ctx, args).execute(&mut ui).unwrap();
        assert!(!result.success);
        assert_eq!(ui.error_blocks()[0].0, "python3 -m pip install nope");
    }

    #[test]
    fn packages_lists_pip_output() {
        let (ctx, _) = scripted_context(
            Python2GoConfig::default(),
            Platform::Unix,
            vec![ShellResult::success(
                r#"[{"name": "numpy", "version": "1.24.0"}, {"name": "requests", "version": "2.31.0"}]"#,
                None,
            )],
        );
        let mut ui = MockUI::new();
        let args = PackagesArgs { python: python3() };
        let result = PackagesCommand::new(&ctx, args).execute(&mut ui).unwrap();
        assert!(result.success);
        let names: Vec<_> = ui.packages().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["numpy", "requests"]);
    }

    #[test]
    fn packages_reports_pip_failure() {
        let (ctx, _) = scripted_context(
            Python2GoConfig::default(),
            Platform::Unix,
            vec![ShellResult::non_zero_exit("No module named pip", None)],
        );
        let mut ui = MockUI::new();
        let args = PackagesArgs { python: python3() };
        let result = PackagesCommand::new(&ctx, args).execute(&mut ui).unwrap();
        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("No module named pip"));
    }
}
