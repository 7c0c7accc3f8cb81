//! Chocolatey queries, installation and package removal.

use tracing::{debug, info};

use crate::shell::{CommandLine, CommandOptions, CommandOrchestrator, ShellDialect, ShellResult};

/// Downloads and runs the bootstrap script unless Chocolatey's directory exists.
pub const BOOTSTRAP_SCRIPT: &str = r#"if (-Not (Test-Path -Path "$env:ProgramData\Chocolatey")) {
    Set-ExecutionPolicy Bypass -Scope Process -Force
    Invoke-Expression ((New-Object System.Net.WebClient).DownloadString('https://community.chocolatey.org/install.ps1'))
} else {
    Write-Output "Chocolatey already installed"
}"#;

fn require_choco() -> CommandOptions {
    CommandOptions::default().require("choco")
}

/// The installed Chocolatey version, if any.
pub fn version(shell: &CommandOrchestrator) -> Option<String> {
    shell
        .execute("choco -v", &require_choco())
        .into_result()
        .ok()
        .filter(|v| !v.is_empty())
}

/// Whether `choco` resolves and reports a version.
pub fn is_installed(shell: &CommandOrchestrator) -> bool {
    version(shell).is_some()
}

/// Install Chocolatey if missing, returning the version afterwards.
pub fn install(shell: &CommandOrchestrator) -> ShellResult {
    if let Some(version) = version(shell) {
        debug!("Chocolatey {} already installed", version);
        return ShellResult::success(version, None);
    }

    info!("Installing Chocolatey");
    let result = shell.execute(BOOTSTRAP_SCRIPT, &CommandOptions::elevated());
    if !result.is_success() {
        return result;
    }

    match version(shell) {
        Some(version) => ShellResult::success(version, None),
        None => ShellResult::non_zero_exit(
            "Chocolatey install finished but `choco` is still not available",
            result.output().map(String::from),
        ),
    }
}

/// Remove `package`, optionally pinned to `version`.
pub fn uninstall(shell: &CommandOrchestrator, package: &str, version: Option<&str>) -> ShellResult {
    let line = CommandLine::new("choco")
        .args(["uninstall", "-y", package])
        .arg_opt("--version", version);
    shell.execute(
        &line.render(ShellDialect::PowerShell),
        &CommandOptions::elevated().require("choco"),
    )
}

/// Location of Chocolatey's summary log.
pub fn summary_log_path() -> String {
    let program_data =
        std::env::var("ProgramData").unwrap_or_else(|_| "C:\\ProgramData".to_string());
    format!("{}\\chocolatey\\logs\\choco.summary.log", program_data)
}

/// Number of lines in the summary log; 0 when it cannot be read.
pub fn summary_line_count(shell: &CommandOrchestrator) -> usize {
    let command = format!(
        "(Get-Content -Path {}).Count",
        ShellDialect::PowerShell.quote(&summary_log_path())
    );
    shell
        .execute(&command, &CommandOptions::default())
        .into_result()
        .ok()
        .and_then(|count| count.trim().parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::testing::scripted;
    use crate::shell::WindowsAdapter;

    #[test]
    fn version_is_trimmed_output() {
        let (shell, runner) = scripted(
            Box::new(WindowsAdapter),
            vec![ShellResult::success("2.2.2\r\n", None)],
        );
        assert_eq!(version(&shell).as_deref(), Some("2.2.2"));
        assert!(runner.commands()[0].contains("Get-Command choco"));
    }

    #[test]
    fn missing_choco_is_not_installed() {
        let (shell, _) = scripted(
            Box::new(WindowsAdapter),
            vec![ShellResult::non_zero_exit("choco : The term 'choco' is not recognized", None)],
        );
        assert!(!is_installed(&shell));
    }

    #[test]
    fn install_bootstraps_elevated() {
        let (shell, runner) = scripted(
            Box::new(WindowsAdapter),
            vec![
                ShellResult::non_zero_exit("not recognized", None),
                ShellResult::success("", None),
                ShellResult::success("2.2.2", None),
            ],
        );
        assert_eq!(install(&shell).output(), Some("2.2.2"));
        let commands = runner.commands();
        assert!(commands[1].starts_with("Start-Process"));
        assert!(commands[1].contains("Test-Path"));
    }

    #[test]
    fn uninstall_with_and_without_version() {
        let (shell, runner) = scripted(
            Box::new(WindowsAdapter),
            vec![ShellResult::success("", None), ShellResult::success("", None)],
        );
        uninstall(&shell, "python", Some("3.8.3"));
        uninstall(&shell, "python", None);
        let commands = runner.commands();
        assert!(commands[0].contains("choco uninstall -y python --version 3.8.3"));
        assert!(commands[1].contains("choco uninstall -y python"));
        assert!(!commands[1].contains("--version"));
    }

    #[test]
    fn summary_log_lives_under_program_data() {
        assert!(summary_log_path().ends_with("\\chocolatey\\logs\\choco.summary.log"));
    }

    #[test]
    fn summary_line_count_parses_or_defaults() {
        let (shell, _) = scripted(
            Box::new(WindowsAdapter),
            vec![
                ShellResult::success("42", None),
                ShellResult::non_zero_exit("Cannot find path", None),
            ],
        );
        assert_eq!(summary_line_count(&shell), 42);
        assert_eq!(summary_line_count(&shell), 0);
    }
}
