//! Platform detection and per-platform shell capabilities.
//!
//! The platform is resolved once and turned into a [`PlatformAdapter`]; the
//! rest of the crate asks the adapter instead of branching on the OS.

use std::path::PathBuf;

use super::builder::ShellDialect;
use super::elevation::{
    is_elevated, sudo_askpass_invocation, sudo_invocation, windows_elevated_command,
};
use super::path_recovery::with_path_recovery;
use super::runner::Invocation;
use crate::secrets::Credential;

/// Platforms with distinct shell behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// PowerShell with verb-based elevation and registry-stored PATH.
    Windows,
    /// POSIX shell with `sudo` (macOS, Linux).
    Unix,
    /// Anything else; no commands are run.
    Unsupported,
}

impl Platform {
    /// The platform this binary was built for.
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else if cfg!(unix) {
            Platform::Unix
        } else {
            Platform::Unsupported
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Unix => "unix",
            Platform::Unsupported => std::env::consts::OS,
        }
    }
}

/// Check if running under a CI service, where nobody can answer prompts.
pub fn is_ci() -> bool {
    ["CI", "GITHUB_ACTIONS", "GITLAB_CI", "CIRCLECI", "TRAVIS", "JENKINS_URL"]
        .iter()
        .any(|key| std::env::var_os(key).is_some())
}

/// Shell capabilities of one platform.
pub trait PlatformAdapter: Send + Sync {
    /// Which platform this adapter serves.
    fn platform(&self) -> Platform;

    /// The shell language commands are written in, if any.
    fn dialect(&self) -> Option<ShellDialect>;

    /// Prefix `command` with a PATH reload guard for `required`.
    fn path_reload(&self, required: Option<&str>, command: &str) -> String;

    /// Whether [`elevate`](Self::elevate) needs a credential.
    fn needs_credential(&self) -> bool;

    /// Build the invocation running `command` with elevated privileges.
    fn elevate(&self, command: &str, credential: Option<Credential>) -> Invocation;

    /// Like [`elevate`](Self::elevate), but `sudo` calls made by the
    /// command's own child processes can also authenticate.
    fn elevate_shared(&self, command: &str, credential: Option<Credential>) -> Invocation {
        self.elevate(command, credential)
    }

    /// Where the interpreter for `version` (e.g. `3.8.3`) is installed.
    fn locate_install(&self, version: &str) -> Option<PathBuf>;
}

/// Select the adapter for `platform`.
///
/// # Example
///
/// ```
/// use python2go::shell::{select_adapter, Platform, ShellDialect};
///
/// let adapter = select_adapter(Platform::Windows);
/// assert_eq!(adapter.dialect(), Some(ShellDialect::PowerShell));
/// assert!(!adapter.needs_credential());
/// ```
pub fn select_adapter(platform: Platform) -> Box<dyn PlatformAdapter> {
    match platform {
        Platform::Windows => Box::new(WindowsAdapter),
        Platform::Unix => Box::new(UnixAdapter::new(is_elevated())),
        Platform::Unsupported => Box::new(UnsupportedAdapter),
    }
}

/// Windows: PowerShell and `Start-Process -Verb RunAs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsAdapter;

impl PlatformAdapter for WindowsAdapter {
    fn platform(&self) -> Platform {
        Platform::Windows
    }

    fn dialect(&self) -> Option<ShellDialect> {
        Some(ShellDialect::PowerShell)
    }

    fn path_reload(&self, required: Option<&str>, command: &str) -> String {
        with_path_recovery(ShellDialect::PowerShell, required, command)
    }

    fn needs_credential(&self) -> bool {
        false
    }

    fn elevate(&self, command: &str, _credential: Option<Credential>) -> Invocation {
        Invocation::new(windows_elevated_command(command))
    }

    fn locate_install(&self, version: &str) -> Option<PathBuf> {
        let mut parts = version.split('.');
        let major = parts.next().filter(|s| !s.is_empty())?;
        let minor = parts.next().unwrap_or_default();
        let drive = std::env::var("SystemDrive").unwrap_or_else(|_| "C:".to_string());
        Some(
            PathBuf::from(format!("{}\\", drive))
                .join(format!("Python{}{}", major, minor))
                .join("python.exe"),
        )
    }
}

/// Unix: `sh` and credential-piped `sudo`.
#[derive(Debug, Clone, Copy)]
pub struct UnixAdapter {
    already_root: bool,
}

impl UnixAdapter {
    /// Create an adapter; `already_root` skips the password step.
    pub fn new(already_root: bool) -> Self {
        Self { already_root }
    }
}

impl PlatformAdapter for UnixAdapter {
    fn platform(&self) -> Platform {
        Platform::Unix
    }

    fn dialect(&self) -> Option<ShellDialect> {
        Some(ShellDialect::Posix)
    }

    fn path_reload(&self, required: Option<&str>, command: &str) -> String {
        with_path_recovery(ShellDialect::Posix, required, command)
    }

    fn needs_credential(&self) -> bool {
        !self.already_root
    }

    fn elevate(&self, command: &str, credential: Option<Credential>) -> Invocation {
        match credential {
            Some(credential) if !self.already_root => sudo_invocation(command, credential),
            _ => Invocation::new(command),
        }
    }

    fn elevate_shared(&self, command: &str, credential: Option<Credential>) -> Invocation {
        match credential {
            Some(credential) if !self.already_root => sudo_askpass_invocation(command, credential),
            _ => Invocation::new(command),
        }
    }

    fn locate_install(&self, version: &str) -> Option<PathBuf> {
        if version.trim().is_empty() {
            return None;
        }
        let home = dirs::home_dir()?;
        Some(
            home.join(".pyenv")
                .join("versions")
                .join(version.trim())
                .join("bin")
                .join("python"),
        )
    }
}

/// No shell behavior defined.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedAdapter;

impl PlatformAdapter for UnsupportedAdapter {
    fn platform(&self) -> Platform {
        Platform::Unsupported
    }

    fn dialect(&self) -> Option<ShellDialect> {
        None
    }

    fn path_reload(&self, _required: Option<&str>, command: &str) -> String {
        command.to_string()
    }

    fn needs_credential(&self) -> bool {
        false
    }

    fn elevate(&self, command: &str, _credential: Option<Credential>) -> Invocation {
        Invocation::new(command)
    }

    fn locate_install(&self, _version: &str) -> Option<PathBuf> {
        None
    }
}
