//! Shell command execution.
//!
//! Layers, leaves first:
//! - [`result`] - the uniform [`ShellResult`] outcome
//! - [`builder`] - dialect-aware quoting and [`CommandLine`]
//! - [`runner`] - spawning processes and streaming their output
//! - [`elevation`] - `RunAs` / `sudo` escalation
//! - [`path_recovery`] - PATH reload guards for freshly installed tools
//! - [`platform`] - the per-platform [`PlatformAdapter`]
//! - [`orchestrator`] - [`CommandOrchestrator::execute`], the entry point

pub mod builder;
pub mod elevation;
pub mod orchestrator;
pub mod path_recovery;
pub mod platform;
pub mod result;
pub mod runner;
#[cfg(test)]
pub(crate) mod testing;

pub use builder::{CommandLine, ShellDialect};
pub use elevation::{
    is_elevated, sudo_askpass_command, sudo_chained_command, windows_elevated_command,
    CredentialPrompt, NoCredential, ASKPASS_SECRET_VAR, PASSWORD_PROMPT,
};
pub use orchestrator::{CommandOptions, CommandOrchestrator};
pub use path_recovery::{path_reload_guard, with_path_recovery};
pub use platform::{
    is_ci, select_adapter, Platform, PlatformAdapter, UnixAdapter, UnsupportedAdapter,
    WindowsAdapter,
};
pub use result::{FailureKind, ShellResult};
pub use runner::{
    Invocation, OutputLine, OutputSink, ProcessHandle, ProcessOutput, ProcessRunner, SystemRunner,
    TracingSink,
};
