//! Public entry point for running shell commands.

use std::sync::Arc;

use tracing::debug;

use super::builder::ShellDialect;
use super::elevation::CredentialPrompt;
use super::platform::{select_adapter, Platform, PlatformAdapter};
use super::result::ShellResult;
use super::runner::{Invocation, OutputSink, ProcessRunner, SystemRunner, TracingSink};

/// Options for command execution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOptions {
    /// Run with administrator/root privileges.
    pub elevate: bool,

    /// A command that must be resolvable; triggers PATH recovery.
    pub required_command: Option<String>,

    /// Extra context for the credential prompt.
    pub prompt_message: Option<String>,

    /// Let `sudo` calls inside the command's child processes reuse the
    /// credential (Unix).
    pub share_credential: bool,
}

impl CommandOptions {
    /// Options requesting elevation.
    pub fn elevated() -> Self {
        Self {
            elevate: true,
            ..Default::default()
        }
    }

    /// Require `command` to be on PATH before running.
    pub fn require(mut self, command: impl Into<String>) -> Self {
        self.required_command = Some(command.into());
        self
    }

    /// Hand the credential on to nested `sudo` calls.
    pub fn share_credential(mut self) -> Self {
        self.share_credential = true;
        self
    }

    /// Set the credential prompt context.
    pub fn with_prompt(mut self, message: impl Into<String>) -> Self {
        self.prompt_message = Some(message.into());
        self
    }
}

/// Chooses between plain and elevated execution and applies PATH recovery.
///
/// Holds no per-call state, so one orchestrator can serve concurrent calls
/// from several threads. Each call is one-shot: no retries, no timeout.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use python2go::shell::{CommandOptions, CommandOrchestrator, NoCredential};
///
/// let shell = CommandOrchestrator::system(Arc::new(NoCredential));
/// let result = shell.execute("python3 --version", &CommandOptions::default().require("python3"));
/// if result.is_success() {
///     println!("{}", result.output().unwrap_or_default());
/// }
/// ```
pub struct CommandOrchestrator {
    adapter: Box<dyn PlatformAdapter>,
    runner: Arc<dyn ProcessRunner>,
    prompt: Arc<dyn CredentialPrompt>,
}

impl CommandOrchestrator {
    /// Assemble an orchestrator from its collaborators.
    pub fn new(
        adapter: Box<dyn PlatformAdapter>,
        runner: Arc<dyn ProcessRunner>,
        prompt: Arc<dyn CredentialPrompt>,
    ) -> Self {
        Self {
            adapter,
            runner,
            prompt,
        }
    }

    /// Orchestrator for the current platform, logging output via `tracing`.
    pub fn system(prompt: Arc<dyn CredentialPrompt>) -> Self {
        Self::system_with_sink(prompt, Arc::new(TracingSink))
    }

    /// Orchestrator for the current platform with a custom output sink.
    pub fn system_with_sink(prompt: Arc<dyn CredentialPrompt>, sink: Arc<dyn OutputSink>) -> Self {
        let adapter = select_adapter(Platform::current());
        let dialect = adapter.dialect().unwrap_or(ShellDialect::Posix);
        let runner = Arc::new(SystemRunner::new(dialect, sink));
        Self::new(adapter, runner, prompt)
    }

    /// The platform commands run on.
    pub fn platform(&self) -> Platform {
        self.adapter.platform()
    }

    /// The shell dialect commands must be written in.
    pub fn dialect(&self) -> ShellDialect {
        self.adapter.dialect().unwrap_or(ShellDialect::Posix)
    }

    /// The platform adapter.
    pub fn adapter(&self) -> &dyn PlatformAdapter {
        self.adapter.as_ref()
    }

    /// Apply PATH recovery to `command` per `options`.
    pub fn compose(&self, command: &str, options: &CommandOptions) -> String {
        self.adapter
            .path_reload(options.required_command.as_deref(), command)
    }

    /// Run `command` and report the outcome.
    ///
    /// Never panics or returns `Err` for expected failures; inspect the
    /// returned [`ShellResult`].
    pub fn execute(&self, command: &str, options: &CommandOptions) -> ShellResult {
        let platform = self.adapter.platform();
        if platform == Platform::Unsupported {
            return ShellResult::unsupported_platform(platform.name());
        }

        let composed = self.compose(command, options);

        if !options.elevate {
            return self.runner.run(&Invocation::new(composed));
        }

        let credential = if self.adapter.needs_credential() {
            match self
                .prompt
                .request(options.prompt_message.as_deref())
                .filter(|c| !c.is_empty())
            {
                Some(credential) => Some(credential),
                None => {
                    debug!("Elevation cancelled: no credential provided");
                    return ShellResult::credential_declined();
                }
            }
        } else {
            None
        };

        let invocation = if options.share_credential {
            self.adapter.elevate_shared(&composed, credential)
        } else {
            self.adapter.elevate(&composed, credential)
        };
        self.runner.run(&invocation)
    }
}
