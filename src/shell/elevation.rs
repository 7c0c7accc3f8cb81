//! Privilege escalation.
//!
//! Windows re-launches the command in a new PowerShell with the `RunAs`
//! verb, which raises the UAC prompt. Unix authenticates `sudo` with a
//! password read from stdin and then chains the real command in the same
//! shell. The ticket that leaves behind is not visible to `sudo` run by the
//! command's own child processes; [`sudo_askpass_invocation`] covers those.

use super::builder::ShellDialect;
use super::runner::Invocation;
use crate::secrets::Credential;

/// Prompt text shown when asking for the root password.
pub const PASSWORD_PROMPT: &str = "Root Password (used to login to your computer)";

/// Supplies the password for a Unix elevation.
///
/// Returning `None` (or an empty credential) means the user declined.
pub trait CredentialPrompt: Send + Sync {
    /// Ask for a credential. `message` is caller-specific context such as
    /// "to install Homebrew".
    fn request(&self, message: Option<&str>) -> Option<Credential>;
}

/// A prompt that never yields a credential (non-interactive sessions).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCredential;

impl CredentialPrompt for NoCredential {
    fn request(&self, _message: Option<&str>) -> Option<Credential> {
        None
    }
}

/// Wrap `command` so it runs in an elevated PowerShell.
///
/// Blocks until the elevated process exits. `-ErrorAction Stop` turns a
/// declined UAC prompt into a terminating error, i.e. a non-zero exit.
///
/// # Example
///
/// ```
/// use python2go::shell::windows_elevated_command;
///
/// let cmd = windows_elevated_command("choco install python -y");
/// assert_eq!(
///     cmd,
///     "Start-Process -FilePath \"powershell\" -Wait -Verb RunAs -ErrorAction Stop \
///      -ArgumentList \"-noprofile\", \"-command &{choco install python -y}\""
/// );
/// ```
pub fn windows_elevated_command(command: &str) -> String {
    format!(
        "Start-Process -FilePath \"powershell\" -Wait -Verb RunAs -ErrorAction Stop -ArgumentList \"-noprofile\", \"-command &{{{}}}\"",
        ShellDialect::embed_in_powershell_string(command)
    )
}

/// Chain `command` after a `sudo` authentication reading the password from stdin.
///
/// The command sits in its own group so that it never runs when
/// authentication fails, whatever separators it contains.
pub fn sudo_chained_command(command: &str) -> String {
    format!("sudo -S -p '' -v && {{\n{}\n}}", command)
}

/// Build the Unix invocation: authenticate with `credential`, then run.
pub fn sudo_invocation(command: &str, credential: Credential) -> Invocation {
    Invocation::new(sudo_chained_command(command)).with_stdin(credential)
}

/// Variable the askpass helper reads the password from.
pub const ASKPASS_SECRET_VAR: &str = "PYTHON2GO_SUDO_PASSWORD";

/// Run `command` with a `SUDO_ASKPASS` helper answering every `sudo` inside it.
///
/// Installers such as Homebrew's call `sudo` themselves from a child
/// process, where the ticket from `sudo -S -v` does not apply. The password
/// is read from stdin into the shell's environment and a throwaway helper
/// script (removed on exit) prints it to any `sudo -A` that asks.
///
/// # Example
///
/// ```
/// use python2go::shell::sudo_askpass_command;
///
/// let cmd = sudo_askpass_command("/bin/bash install.sh");
/// assert!(cmd.contains("sudo -A -v && {\n/bin/bash install.sh\n}"));
/// ```
pub fn sudo_askpass_command(command: &str) -> String {
    format!(
        "askpass=\"$(mktemp)\" || exit 1\n\
         trap 'rm -f \"$askpass\"' EXIT\n\
         printf '%s\\n' '#!/bin/sh' 'printf \"%s\\\\n\" \"${var}\"' > \"$askpass\" && chmod 700 \"$askpass\" || exit 1\n\
         IFS= read -r {var}\n\
         export {var} SUDO_ASKPASS=\"$askpass\"\n\
         sudo -A -v && {{\n{command}\n}}",
        var = ASKPASS_SECRET_VAR,
        command = command
    )
}

/// Build the Unix invocation whose nested `sudo` calls can authenticate.
pub fn sudo_askpass_invocation(command: &str, credential: Credential) -> Invocation {
    Invocation::new(sudo_askpass_command(command)).with_stdin(credential)
}

/// Check if running as root/admin.
pub fn is_elevated() -> bool {
    #[cfg(unix)]
    {
        // SAFETY: geteuid() is a simple syscall that returns the effective user ID
        unsafe { libc::geteuid() == 0 }
    }

    #[cfg(not(unix))]
    {
        false
    }
}
