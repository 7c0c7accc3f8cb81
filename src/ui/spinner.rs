//! Progress spinners.

use indicatif::{ProgressBar, ProgressStyle};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use tracing::debug;

use crate::shell::{OutputLine, OutputSink};

use super::theme::Python2GoTheme;
use super::SpinnerHandle;

const MAX_LINE_WIDTH: usize = 72;

/// A progress spinner for long-running operations.
pub struct ProgressSpinner {
    bar: ProgressBar,
    theme: Python2GoTheme,
}

impl ProgressSpinner {
    /// Create a spinner with a message.
    pub fn new(message: &str, theme: Python2GoTheme) -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
            .template("{spinner:.blue} {msg}")
        {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar, theme }
    }

    /// A spinner that draws nothing (for silent mode).
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            theme: Python2GoTheme::plain(),
        }
    }

    fn finish(&mut self, msg: String) {
        if let Ok(style) = ProgressStyle::default_spinner().template("{msg}") {
            self.bar.set_style(style);
        }
        self.bar.finish_with_message(msg);
    }
}

impl SpinnerHandle for ProgressSpinner {
    fn set_message(&mut self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }

    fn finish_success(&mut self, msg: &str) {
        let msg = self.theme.format_success(msg);
        self.finish(msg);
    }

    fn finish_error(&mut self, msg: &str) {
        let msg = self.theme.format_error(msg);
        self.finish(msg);
    }

    fn progress_bar(&self) -> Option<ProgressBar> {
        Some(self.bar.clone())
    }
}

/// Shows the last few lines of command output under a spinner.
///
/// Keeps a ring buffer of `max_lines` lines and redraws the spinner
/// message as the base message followed by those lines.
pub struct SpinnerSink {
    bar: ProgressBar,
    base_message: String,
    max_lines: usize,
    theme: Python2GoTheme,
    recent: Mutex<VecDeque<String>>,
}

impl SpinnerSink {
    pub fn new(bar: ProgressBar, base_message: impl Into<String>, max_lines: usize) -> Self {
        Self {
            bar,
            base_message: base_message.into(),
            max_lines,
            theme: Python2GoTheme::detect(),
            recent: Mutex::new(VecDeque::with_capacity(max_lines + 1)),
        }
    }
}

impl OutputSink for SpinnerSink {
    fn line(&self, line: &OutputLine) {
        let text = match line {
            OutputLine::Stdout(s) | OutputLine::Stderr(s) => s.trim_end(),
        };
        debug!(target: "python2go::shell", "{}", text);
        if text.is_empty() {
            return;
        }

        let display = if text.chars().count() > MAX_LINE_WIDTH {
            let cut: String = text.chars().take(MAX_LINE_WIDTH - 3).collect();
            format!("{}...", cut)
        } else {
            text.to_string()
        };

        // A poisoned buffer only loses display lines.
        let Ok(mut recent) = self.recent.lock() else {
            return;
        };
        recent.push_back(display);
        while recent.len() > self.max_lines {
            recent.pop_front();
        }

        let mut msg = self.base_message.clone();
        for line in recent.iter() {
            msg.push('\n');
            msg.push_str("  ");
            msg.push_str(&self.theme.dim.apply_to(format!("» {}", line)).to_string());
        }
        self.bar.set_message(msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stdout(s: &str) -> OutputLine {
        OutputLine::Stdout(s.to_string())
    }

    #[test]
    fn spinner_lifecycle() {
        let mut spinner = ProgressSpinner::new("Installing...", Python2GoTheme::plain());
        spinner.set_message("Still installing...");
        spinner.finish_success("Installed");
    }

    #[test]
    fn spinner_finish_error() {
        let mut spinner = ProgressSpinner::new("Installing...", Python2GoTheme::plain());
        spinner.finish_error("Failed");
    }

    #[test]
    fn hidden_spinner_still_has_bar() {
        let spinner = ProgressSpinner::hidden();
        assert!(spinner.progress_bar().is_some());
    }

    #[test]
    fn sink_keeps_last_lines() {
        let bar = ProgressBar::hidden();
        let sink = SpinnerSink::new(bar.clone(), "Syncing...", 2);

        sink.line(&stdout("line 1"));
        sink.line(&OutputLine::Stderr("line 2".to_string()));
        let msg = bar.message();
        assert!(msg.starts_with("Syncing..."));
        assert!(msg.contains("line 1"));
        assert!(msg.contains("line 2"));

        sink.line(&stdout("line 3"));
        let msg = bar.message();
        assert!(!msg.contains("line 1"));
        assert!(msg.contains("line 3"));
    }

    #[test]
    fn sink_skips_blank_lines() {
        let bar = ProgressBar::hidden();
        let sink = SpinnerSink::new(bar.clone(), "Syncing...", 2);
        sink.line(&stdout("   "));
        sink.line(&stdout("real output"));
        assert_eq!(bar.message().matches('\n').count(), 1);
    }

    #[test]
    fn sink_truncates_long_lines() {
        let bar = ProgressBar::hidden();
        let sink = SpinnerSink::new(bar.clone(), "Syncing...", 2);
        sink.line(&stdout(&"x".repeat(100)));
        let msg = bar.message();
        assert!(msg.contains("..."));
        assert!(!msg.contains(&"x".repeat(100)));
    }
}
