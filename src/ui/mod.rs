//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - [`MockUI`] for tests
//! - Password and confirmation prompts, spinners, and output sinks
//!
//! # Example
//!
//! ```
//! use python2go::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("Python 3.8.3");
//! ui.success("Ready to go");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::{MockSpinner, MockUI, SpinnerStatus};
pub use non_interactive::NonInteractiveUI;
pub use output::{ConsoleSink, OutputMode};
pub use prompts::{
    confirm, credential_prompt, password_prompt_text, SuspendingPrompt, TerminalCredentialPrompt,
};
pub use spinner::{ProgressSpinner, SpinnerSink};
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, Python2GoTheme};

use indicatif::ProgressBar;

use crate::error::Result;
use crate::python::PipPackage;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Ask a yes/no question.
    fn confirm(&mut self, question: &str, default: bool) -> Result<bool>;

    /// Start a spinner for an operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// List installed packages.
    fn show_packages(&mut self, packages: &[PipPackage]);

    /// Show a failed command together with its captured output.
    fn show_error_block(&mut self, command: &str, output: &str);

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Update the spinner message.
    fn set_message(&mut self, msg: &str);

    /// Mark the operation as successful.
    fn finish_success(&mut self, msg: &str);

    /// Mark the operation as failed.
    fn finish_error(&mut self, msg: &str);

    /// The underlying bar, for streaming output into the spinner.
    fn progress_bar(&self) -> Option<ProgressBar> {
        None
    }
}

/// Width of the name column when listing `packages`.
pub(crate) fn name_width(packages: &[PipPackage]) -> usize {
    packages.iter().map(|p| p.name.len()).max().unwrap_or(0)
}
