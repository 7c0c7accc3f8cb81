//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use crate::error::Result;
use crate::python::PipPackage;

use super::{
    confirm, name_width, NonInteractiveUI, OutputMode, ProgressSpinner, Python2GoTheme,
    SpinnerHandle, UserInterface,
};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    err: Term,
    theme: Python2GoTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            term: Term::stdout(),
            err: Term::stderr(),
            theme: Python2GoTheme::detect(),
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        confirm(question, default, &self.term)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(message, self.theme.clone()))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn show_packages(&mut self, packages: &[PipPackage]) {
        let width = name_width(packages);
        for package in packages {
            writeln!(
                self.term,
                "{}",
                self.theme.format_package(&package.name, &package.version, width)
            )
            .ok();
        }
    }

    fn show_error_block(&mut self, command: &str, output: &str) {
        let b = &self.theme.dim;
        writeln!(self.err, "    {} {}", b.apply_to("┌─"), b.apply_to("Command ─────────────")).ok();
        writeln!(self.err, "    {} {}", b.apply_to("│"), self.theme.command.apply_to(command)).ok();
        if !output.is_empty() {
            writeln!(self.err, "    {} {}", b.apply_to("├─"), b.apply_to("Output ──────────────")).ok();
            for line in output.lines() {
                writeln!(self.err, "    {} {}", b.apply_to("│"), line).ok();
            }
        }
        writeln!(self.err, "    {}", b.apply_to("└───────────────────────")).ok();
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}

/// Create the appropriate UI based on context.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
