//! Output mode and console output sink.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use tracing::debug;

use super::theme::Python2GoTheme;
use crate::shell::{OutputLine, OutputSink};

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Show all output including command output.
    Verbose,
    /// Show progress and status only.
    #[default]
    Normal,
    /// Show minimal output (spinners + final status).
    Quiet,
    /// Show nothing except errors.
    Silent,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbose" => Ok(Self::Verbose),
            "normal" => Ok(Self::Normal),
            "quiet" => Ok(Self::Quiet),
            "silent" => Ok(Self::Silent),
            _ => Err(format!("unknown output mode: {}", s)),
        }
    }
}

impl OutputMode {
    /// Check if this mode shows command output.
    pub fn shows_command_output(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows progress spinners.
    pub fn shows_spinners(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal | Self::Quiet)
    }

    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Silent)
    }
}

/// Echoes command output to stderr in verbose mode.
///
/// Every line is also logged at debug level, whatever the mode.
pub struct ConsoleSink {
    mode: OutputMode,
    theme: Python2GoTheme,
}

impl ConsoleSink {
    pub fn new(mode: OutputMode, theme: Python2GoTheme) -> Self {
        Self { mode, theme }
    }
}

impl OutputSink for ConsoleSink {
    fn line(&self, line: &OutputLine) {
        let (text, is_err) = match line {
            OutputLine::Stdout(text) => (text, false),
            OutputLine::Stderr(text) => (text, true),
        };
        debug!(target: "python2go::shell", "{}", text);
        if !self.mode.shows_command_output() {
            return;
        }
        if is_err {
            eprintln!("{}", self.theme.warning.apply_to(text));
        } else {
            eprintln!("{}", self.theme.dim.apply_to(text));
        }
    }
}
