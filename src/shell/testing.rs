//! Test doubles for code that runs shell commands.

use std::sync::{Arc, Mutex};

use super::elevation::CredentialPrompt;
use super::orchestrator::CommandOrchestrator;
use super::platform::PlatformAdapter;
use super::result::ShellResult;
use super::runner::{Invocation, ProcessRunner};
use crate::secrets::Credential;

/// Replays canned results in order and records every invocation.
#[derive(Default)]
pub struct ScriptedRunner {
    responses: Mutex<Vec<ShellResult>>,
    seen: Mutex<Vec<Invocation>>,
}

impl ScriptedRunner {
    pub fn new(mut responses: Vec<ShellResult>) -> Self {
        responses.reverse();
        Self {
            responses: Mutex::new(responses),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn commands(&self) -> Vec<String> {
        self.seen
            .lock()
            .unwrap()
            .iter()
            .map(|i| i.command.clone())
            .collect()
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.seen.lock().unwrap().clone()
    }
}

impl ProcessRunner for ScriptedRunner {
    fn run(&self, invocation: &Invocation) -> ShellResult {
        self.seen.lock().unwrap().push(invocation.clone());
        self.responses
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_else(|| ShellResult::non_zero_exit("unexpected call", None))
    }
}

/// Always answers with the same password.
pub struct FixedPrompt(pub Option<&'static str>);

impl CredentialPrompt for FixedPrompt {
    fn request(&self, _message: Option<&str>) -> Option<Credential> {
        self.0.map(Credential::new)
    }
}

/// An orchestrator over `adapter` that replays `responses`.
pub fn scripted(
    adapter: Box<dyn PlatformAdapter>,
    responses: Vec<ShellResult>,
) -> (CommandOrchestrator, Arc<ScriptedRunner>) {
    scripted_with_prompt(adapter, Some("pw"), responses)
}

/// Like [`scripted`], with the password the prompt answers.
pub fn scripted_with_prompt(
    adapter: Box<dyn PlatformAdapter>,
    password: Option<&'static str>,
    responses: Vec<ShellResult>,
) -> (CommandOrchestrator, Arc<ScriptedRunner>) {
    let runner = Arc::new(ScriptedRunner::new(responses));
    let shell = CommandOrchestrator::new(adapter, runner.clone(), Arc::new(FixedPrompt(password)));
    (shell, runner)
}
