//! Homebrew presence check and installation.

use tracing::{debug, info};

use crate::shell::{CommandOptions, CommandOrchestrator, ShellResult};

/// Non-interactive invocation of the official install script.
pub const INSTALL_COMMAND: &str = "NONINTERACTIVE=1 /bin/bash -c \"$(curl -fsSL https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh)\"";

/// Whether `brew -v` runs and prints a version.
pub fn is_installed(shell: &CommandOrchestrator) -> bool {
    let result = shell.execute("brew -v", &CommandOptions::default().require("brew"));
    let installed = result.is_success() && result.output().is_some_and(|o| !o.is_empty());
    debug!("Homebrew installed: {}", installed);
    installed
}

/// Install Homebrew unless it is already present.
///
/// Runs the install script with elevated privileges, then re-checks
/// presence. The script calls `sudo` itself, so the password is shared
/// with it through `SUDO_ASKPASS`. Returns the install result on failure so callers can report
/// the captured error.
pub fn install(shell: &CommandOrchestrator) -> ShellResult {
    if is_installed(shell) {
        return ShellResult::success("Homebrew already installed", None);
    }

    info!("Installing Homebrew");
    let result = shell.execute(
        INSTALL_COMMAND,
        &CommandOptions::elevated()
            .with_prompt("to install Homebrew")
            .share_credential(),
    );
    if !result.is_success() {
        return result;
    }

    if is_installed(shell) {
        ShellResult::success("Homebrew installed", result.warnings().map(String::from))
    } else {
        ShellResult::non_zero_exit(
            "Homebrew install finished but `brew` is still not available",
            result.output().map(String::from),
        )
    }
}
