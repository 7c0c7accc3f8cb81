//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use python2go::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_confirm_response(true);
//!
//! ui.message("Installing Python");
//! ui.success("Done!");
//!
//! assert!(ui.messages().contains(&"Installing Python".to_string()));
//! assert!(ui.successes().contains(&"Done!".to_string()));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::Result;
use crate::python::PipPackage;

use super::{OutputMode, SpinnerHandle, UserInterface};

/// Status of a mock spinner when finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerStatus {
    /// Finished successfully.
    Success,
    /// Finished with error.
    Error,
}

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    spinners: Vec<String>,
    packages: Vec<PipPackage>,
    error_blocks: Vec<(String, String)>,
    confirms_shown: Vec<String>,
    confirm_response: Option<bool>,
    spinner_results: Rc<RefCell<Vec<(String, SpinnerStatus)>>>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Answer every confirmation with `response` instead of its default.
    pub fn set_confirm_response(&mut self, response: bool) {
        self.confirm_response = Some(response);
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Messages of all spinners that were started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Finish messages and statuses of all finished spinners.
    pub fn spinner_results(&self) -> Vec<(String, SpinnerStatus)> {
        self.spinner_results.borrow().clone()
    }

    /// Packages passed to `show_packages`.
    pub fn packages(&self) -> &[PipPackage] {
        &self.packages
    }

    /// `(command, output)` pairs passed to `show_error_block`.
    pub fn error_blocks(&self) -> &[(String, String)] {
        &self.error_blocks
    }

    /// Questions asked through `confirm`.
    pub fn confirms_shown(&self) -> &[String] {
        &self.confirms_shown
    }

    /// Check whether any error contains `msg`.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|e| e.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        self.confirms_shown.push(question.to_string());
        Ok(self.confirm_response.unwrap_or(default))
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner {
            messages: Vec::new(),
            results: Rc::clone(&self.spinner_results),
        })
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_packages(&mut self, packages: &[PipPackage]) {
        self.packages.extend_from_slice(packages);
    }

    fn show_error_block(&mut self, command: &str, output: &str) {
        self.error_blocks
            .push((command.to_string(), output.to_string()));
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Spinner handed out by [`MockUI`]; reports its finish back to the UI.
#[derive(Debug)]
pub struct MockSpinner {
    messages: Vec<String>,
    results: Rc<RefCell<Vec<(String, SpinnerStatus)>>>,
}

impl MockSpinner {
    /// Messages set while spinning.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn finish_success(&mut self, msg: &str) {
        self.results
            .borrow_mut()
            .push((msg.to_string(), SpinnerStatus::Success));
    }

    fn finish_error(&mut self, msg: &str) {
        self.results
            .borrow_mut()
            .push((msg.to_string(), SpinnerStatus::Error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_ui_captures_messages() {
        let mut ui = MockUI::new();
        ui.message("hello");
        ui.success("ok");
        ui.warning("careful");
        ui.error("boom");
        ui.show_header("Python2Go");

        assert_eq!(ui.messages(), ["hello"]);
        assert_eq!(ui.successes(), ["ok"]);
        assert_eq!(ui.warnings(), ["careful"]);
        assert!(ui.has_error("boom"));
        assert_eq!(ui.headers(), ["Python2Go"]);
    }

    #[test]
    fn mock_ui_confirm_uses_response_or_default() {
        let mut ui = MockUI::new();
        assert!(ui.confirm("Proceed?", true).unwrap());
        ui.set_confirm_response(false);
        assert!(!ui.confirm("Proceed?", true).unwrap());
        assert_eq!(ui.confirms_shown().len(), 2);
    }

    #[test]
    fn mock_ui_records_spinner_results() {
        let mut ui = MockUI::new();
        let mut spinner = ui.start_spinner("Installing");
        spinner.set_message("Still installing");
        spinner.finish_error("Failed");

        assert_eq!(ui.spinners(), ["Installing"]);
        assert_eq!(
            ui.spinner_results(),
            vec![("Failed".to_string(), SpinnerStatus::Error)]
        );
    }

    #[test]
    fn mock_ui_captures_packages_and_error_blocks() {
        let mut ui = MockUI::new();
        ui.show_packages(&[PipPackage {
            name: "pip".to_string(),
            version: "23.0".to_string(),
        }]);
        ui.show_error_block("pip list", "boom");
        assert_eq!(ui.packages().len(), 1);
        assert_eq!(ui.error_blocks()[0].0, "pip list");
    }

    #[test]
    fn mock_ui_output_mode_and_interactivity() {
        let mut ui = MockUI::with_mode(OutputMode::Verbose);
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
        assert!(!ui.is_interactive());
        ui.set_interactive(true);
        assert!(ui.is_interactive());
    }
}
