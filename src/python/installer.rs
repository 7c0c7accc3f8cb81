//! Interpreter installation, removal and discovery.
//!
//! Unix installs go through Homebrew's `pyenv`; Windows installs go through
//! Chocolatey's `python` package.

use tracing::info;

use super::version::PythonVersion;
use crate::managers::{chocolatey, homebrew};
use crate::shell::{CommandLine, CommandOptions, CommandOrchestrator, Platform, ShellResult};

/// The version reported by `<python> --version`, if it runs.
pub fn installed_version(shell: &CommandOrchestrator, python: &str) -> Option<PythonVersion> {
    let command = CommandLine::new(python).arg("--version").render(shell.dialect());
    let result = shell.execute(&command, &CommandOptions::default().require(python));
    if !result.is_success() {
        return None;
    }
    // Python 2 prints its version on stderr.
    result
        .output()
        .and_then(PythonVersion::parse)
        .or_else(|| result.warnings().and_then(PythonVersion::parse))
}

/// The interpreter to use for `version`.
///
/// Prefers the managed install location and falls back to the interpreter
/// on PATH.
pub fn interpreter(shell: &CommandOrchestrator, version: &str) -> String {
    match shell.adapter().locate_install(version) {
        Some(path) if path.is_file() => path.to_string_lossy().into_owned(),
        _ if shell.platform() == Platform::Windows => "python".to_string(),
        _ => "python3".to_string(),
    }
}

/// Install Python `version`, bootstrapping the package manager first.
pub fn install(shell: &CommandOrchestrator, version: &str) -> ShellResult {
    info!("Installing Python {}", version);
    match shell.platform() {
        Platform::Unix => install_with_pyenv(shell, version),
        Platform::Windows => install_with_chocolatey(shell, version),
        Platform::Unsupported => ShellResult::unsupported_platform(Platform::Unsupported.name()),
    }
}

fn install_with_pyenv(shell: &CommandOrchestrator, version: &str) -> ShellResult {
    let brew = homebrew::install(shell);
    if !brew.is_success() {
        return brew;
    }

    let dialect = shell.dialect();
    let pyenv = shell.execute(
        &CommandLine::new("brew").args(["install", "pyenv"]).render(dialect),
        &CommandOptions::default().require("brew"),
    );
    if !pyenv.is_success() {
        return pyenv;
    }

    let command = format!(
        "{} && {}",
        CommandLine::new("pyenv").args(["install", "-s", version]).render(dialect),
        CommandLine::new("pyenv").args(["global", version]).render(dialect),
    );
    shell.execute(&command, &CommandOptions::default().require("pyenv"))
}

fn install_with_chocolatey(shell: &CommandOrchestrator, version: &str) -> ShellResult {
    let choco = chocolatey::install(shell);
    if !choco.is_success() {
        return choco;
    }

    let command = CommandLine::new("choco")
        .args(["install", "python", "--version", version, "-y"])
        .render(shell.dialect());
    shell.execute(
        &command,
        &CommandOptions::elevated()
            .require("choco")
            .with_prompt(format!("to install Python {}", version)),
    )
}

/// Remove Python `version`.
pub fn uninstall(shell: &CommandOrchestrator, version: &str) -> ShellResult {
    info!("Uninstalling Python {}", version);
    match shell.platform() {
        Platform::Unix => {
            let command = CommandLine::new("pyenv")
                .args(["uninstall", "-f", version])
                .render(shell.dialect());
            shell.execute(&command, &CommandOptions::default().require("pyenv"))
        }
        Platform::Windows => chocolatey::uninstall(shell, "python", Some(version)),
        Platform::Unsupported => ShellResult::unsupported_platform(Platform::Unsupported.name()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::testing::scripted;
    use crate::shell::{FailureKind, UnixAdapter, UnsupportedAdapter, WindowsAdapter};

    #[test]
    fn installed_version_parses_stdout() {
        let (shell, _) = scripted(
            Box::new(UnixAdapter::new(false)),
            vec![ShellResult::success("Python 3.11.4", None)],
        );
        assert_eq!(
            installed_version(&shell, "python3").map(|v| v.to_string()),
            Some("3.11.4".to_string())
        );
    }

    #[test]
    fn installed_version_reads_stderr_banner() {
        let (shell, _) = scripted(
            Box::new(UnixAdapter::new(false)),
            vec![ShellResult::success("", Some("Python 2.7.18".to_string()))],
        );
        assert_eq!(
            installed_version(&shell, "python").map(|v| v.major),
            Some(2)
        );
    }

    #[test]
    fn missing_interpreter_has_no_version() {
        let (shell, _) = scripted(
            Box::new(UnixAdapter::new(false)),
            vec![ShellResult::non_zero_exit("python9: not found", None)],
        );
        assert!(installed_version(&shell, "python9").is_none());
    }

    #[test]
    fn unix_install_uses_brew_then_pyenv() {
        let (shell, runner) = scripted(
            Box::new(UnixAdapter::new(false)),
            vec![
                ShellResult::success("Homebrew 4.2.0", None),
                ShellResult::success("pyenv installed", None),
                ShellResult::success("", None),
            ],
        );
        assert!(install(&shell, "3.8.3").is_success());
        let commands = runner.commands();
        assert_eq!(commands.len(), 3);
        assert!(commands[1].contains("command -v brew"));
        assert!(commands[1].ends_with("brew install pyenv"));
        assert!(commands[2].contains("command -v pyenv"));
        assert!(commands[2].ends_with("pyenv install -s 3.8.3 && pyenv global 3.8.3"));
    }

    #[test]
    fn unix_install_stops_when_pyenv_fails() {
        let (shell, runner) = scripted(
            Box::new(UnixAdapter::new(false)),
            vec![
                ShellResult::success("Homebrew 4.2.0", None),
                ShellResult::non_zero_exit("Error: No available formula", None),
            ],
        );
        assert!(!install(&shell, "3.8.3").is_success());
        assert_eq!(runner.commands().len(), 2);
    }

    #[test]
    fn windows_install_uses_chocolatey_elevated() {
        let (shell, runner) = scripted(
            Box::new(WindowsAdapter),
            vec![
                ShellResult::success("2.2.2", None),
                ShellResult::success("", None),
            ],
        );
        assert!(install(&shell, "3.8.3").is_success());
        let commands = runner.commands();
        assert!(commands[1].starts_with("Start-Process"));
        assert!(commands[1].contains("choco install python --version 3.8.3 -y"));
    }

    #[test]
    fn unsupported_install_fails_without_running() {
        let (shell, runner) = scripted(Box::new(UnsupportedAdapter), vec![]);
        assert_eq!(
            install(&shell, "3.8.3").kind(),
            Some(FailureKind::UnsupportedPlatform)
        );
        assert!(runner.commands().is_empty());
    }

    #[test]
    fn uninstall_per_platform() {
        let (shell, runner) = scripted(
            Box::new(UnixAdapter::new(false)),
            vec![ShellResult::success("", None)],
        );
        uninstall(&shell, "3.8.3");
        assert!(runner.commands()[0].ends_with("pyenv uninstall -f 3.8.3"));

        let (shell, runner) = scripted(Box::new(WindowsAdapter), vec![ShellResult::success("", None)]);
        uninstall(&shell, "3.8.3");
        assert!(runner.commands()[0].contains("choco uninstall -y python --version 3.8.3"));
    }

    #[test]
    fn interpreter_falls_back_to_path() {
        let (shell, _) = scripted(Box::new(UnsupportedAdapter), vec![]);
        assert_eq!(interpreter(&shell, "3.8.3"), "python3");
        let (shell, _) = scripted(Box::new(WindowsAdapter), vec![]);
        if !std::path::Path::new("C:\\Python38\\python.exe").is_file() {
            assert_eq!(interpreter(&shell, "3.8.3"), "python");
        }
    }
}
