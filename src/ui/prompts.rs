//! Interactive prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Password};
use indicatif::ProgressBar;
use std::sync::Arc;

use tracing::warn;

use crate::error::{Python2GoError, Result};
use crate::secrets::Credential;
use crate::shell::{CredentialPrompt, NoCredential, PASSWORD_PROMPT};

fn map_dialoguer_err(e: dialoguer::Error) -> Python2GoError {
    Python2GoError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// The text of a password prompt with optional context.
///
/// # Example
///
/// ```
/// use python2go::ui::password_prompt_text;
///
/// assert_eq!(
///     password_prompt_text(Some("to install Homebrew")),
///     "Root Password (used to login to your computer) to install Homebrew"
/// );
/// ```
pub fn password_prompt_text(message: Option<&str>) -> String {
    match message.map(str::trim).filter(|m| !m.is_empty()) {
        Some(message) => format!("{} {}", PASSWORD_PROMPT, message),
        None => PASSWORD_PROMPT.to_string(),
    }
}

/// Ask a yes/no question.
pub fn confirm(question: &str, default: bool, term: &Term) -> Result<bool> {
    Confirm::with_theme(&prompt_theme())
        .with_prompt(question)
        .default(default)
        .interact_on(term)
        .map_err(map_dialoguer_err)
}

/// Reads the root password from the terminal without echo.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalCredentialPrompt;

impl CredentialPrompt for TerminalCredentialPrompt {
    fn request(&self, message: Option<&str>) -> Option<Credential> {
        let result = Password::with_theme(&prompt_theme())
            .with_prompt(password_prompt_text(message))
            .allow_empty_password(true)
            .interact_on(&Term::stderr());
        match result {
            Ok(password) if !password.is_empty() => Some(Credential::new(password)),
            Ok(_) => None,
            Err(e) => {
                warn!("Password prompt failed: {}", e);
                None
            }
        }
    }
}

/// Pauses a spinner while another prompt reads from the terminal.
pub struct SuspendingPrompt {
    bar: ProgressBar,
    inner: Arc<dyn CredentialPrompt>,
}

impl SuspendingPrompt {
    pub fn new(bar: ProgressBar, inner: Arc<dyn CredentialPrompt>) -> Self {
        Self { bar, inner }
    }
}

impl CredentialPrompt for SuspendingPrompt {
    fn request(&self, message: Option<&str>) -> Option<Credential> {
        self.bar.suspend(|| self.inner.request(message))
    }
}

/// The credential prompt for a session.
///
/// Non-interactive sessions cannot ask, so elevation there is declined.
pub fn credential_prompt(interactive: bool) -> Arc<dyn CredentialPrompt> {
    if interactive {
        Arc::new(TerminalCredentialPrompt)
    } else {
        Arc::new(NoCredential)
    }
}
