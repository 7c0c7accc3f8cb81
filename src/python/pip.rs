//! Installed-package queries and requirement syncing through pip.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::version::NumericVersion;
use crate::error::{Python2GoError, Result};
use crate::shell::{CommandLine, CommandOptions, CommandOrchestrator, Platform, ShellResult};

const AT_LEAST: &str = ">=";
const AT_MOST: &str = "<=";

/// A package reported by `pip list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipPackage {
    pub name: String,
    pub version: String,
}

/// A package a manifest asks for.
///
/// `version` may be an exact version, or carry a `>=` / `<=` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRequest {
    pub package: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl PackageRequest {
    /// A request for any version of `package`.
    pub fn any(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            version: None,
        }
    }

    /// A request for `package` at `version`.
    pub fn at(package: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            version: Some(version.into()),
        }
    }

    /// The pip requirement used to install this package (`name==version`).
    ///
    /// # Example
    ///
    /// ```
    /// use python2go::python::PackageRequest;
    ///
    /// assert_eq!(PackageRequest::at("numpy", ">=1.20").requirement(), "numpy==1.20");
    /// assert_eq!(PackageRequest::any("requests").requirement(), "requests");
    /// ```
    pub fn requirement(&self) -> String {
        match self.version.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
            Some(version) => {
                let pinned = version.replace(AT_MOST, "").replace(AT_LEAST, "");
                format!("{}=={}", self.package, pinned.trim())
            }
            None => self.package.clone(),
        }
    }

    fn matches(&self, installed: &PipPackage) -> bool {
        normalize_name(&self.package) == normalize_name(&installed.name)
    }
}

/// Packages to remove and requirements to install.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncPlan {
    /// Names of installed packages at a wrong version.
    pub uninstall: Vec<String>,
    /// Requirements (`name` or `name==version`) to install.
    pub install: Vec<String>,
}

impl SyncPlan {
    /// Whether nothing needs to change.
    pub fn is_empty(&self) -> bool {
        self.uninstall.is_empty() && self.install.is_empty()
    }
}

/// How a sync went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    /// Packages were installed, so running interpreters should restart.
    pub reload_required: bool,
    pub success: bool,
    pub message: Option<String>,
}

impl SyncOutcome {
    fn failed(message: impl Into<String>) -> Self {
        Self {
            reload_required: false,
            success: false,
            message: Some(message.into()),
        }
    }
}

/// Pip normalizes `_`, `.` and case when matching names.
fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase().replace(['_', '.'], "-")
}

/// Whether `installed` violates the version `requested` asks for.
///
/// A request without a version accepts anything. `>=v` rejects anything
/// older than `v`, `<=v` anything newer. Other versions must match exactly.
/// Bounds that cannot be parsed numerically are treated as satisfied.
pub fn is_wrong_version(installed: &PipPackage, requested: &PackageRequest) -> bool {
    let Some(wanted) = requested
        .version
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
    else {
        return false;
    };

    let bounded = |bound: &str| {
        NumericVersion::parse(&installed.version).zip(NumericVersion::parse(bound))
    };

    if let Some(bound) = wanted.strip_prefix(AT_LEAST) {
        bounded(bound).is_some_and(|(have, want)| have < want)
    } else if let Some(bound) = wanted.strip_prefix(AT_MOST) {
        bounded(bound).is_some_and(|(have, want)| have > want)
    } else {
        wanted != installed.version.trim()
    }
}

/// Decide what to change so `installed` satisfies `requested`.
///
/// Requested packages installed at a wrong version are uninstalled and then
/// reinstalled; requested packages that are missing are installed.
pub fn plan_sync(installed: &[PipPackage], requested: &[PackageRequest]) -> SyncPlan {
    let mut plan = SyncPlan::default();
    for request in requested {
        match installed.iter().find(|pkg| request.matches(pkg)) {
            Some(pkg) if is_wrong_version(pkg, request) => {
                plan.uninstall.push(pkg.name.clone());
                plan.install.push(request.requirement());
            }
            Some(_) => {}
            None => plan.install.push(request.requirement()),
        }
    }
    plan
}

/// `<python> -m pip <args>`.
pub fn pip_command<S: AsRef<str>>(python: &str, args: &[S]) -> CommandLine {
    CommandLine::new(python)
        .args(["-m", "pip"])
        .args(args.iter().map(|a| a.as_ref().to_string()))
}

/// Run an arbitrary pip command with `python`.
pub fn run_pip<S: AsRef<str>>(shell: &CommandOrchestrator, python: &str, args: &[S]) -> ShellResult {
    let command = pip_command(python, args).render(shell.dialect());
    debug!("Running pip: {}", command);
    shell.execute(&command, &CommandOptions::default().require(python))
}

/// Packages installed for `python`.
pub fn list_installed(shell: &CommandOrchestrator, python: &str) -> Result<Vec<PipPackage>> {
    let output = run_pip(shell, python, &["list", "--format=json"])
        .into_result()
        .map_err(|message| Python2GoError::CommandFailed { message })?;
    parse_pip_list(&output)
}

/// Parse `pip list --format=json` output.
pub fn parse_pip_list(output: &str) -> Result<Vec<PipPackage>> {
    // pip may print upgrade notices after the JSON array.
    let json = output.lines().next().unwrap_or_default();
    serde_json::from_str(json).map_err(|e| Python2GoError::CommandFailed {
        message: format!("Unexpected pip list output: {}", e),
    })
}

/// Bring `python`'s packages in line with `requested`.
pub fn sync(shell: &CommandOrchestrator, python: &str, requested: &[PackageRequest]) -> SyncOutcome {
    let installed = match list_installed(shell, python) {
        Ok(installed) => installed,
        Err(e) => return SyncOutcome::failed(e.to_string()),
    };

    let plan = plan_sync(&installed, requested);
    if plan.is_empty() {
        return SyncOutcome {
            reload_required: false,
            success: true,
            message: None,
        };
    }

    if !plan.uninstall.is_empty() {
        info!("Uninstalling wrong versions: {}", plan.uninstall.join(" "));
        let mut args = vec!["uninstall".to_string(), "-y".to_string()];
        args.extend(plan.uninstall.iter().cloned());
        if let Err(e) = run_pip(shell, python, &args).into_result() {
            return SyncOutcome::failed(e);
        }
    }

    info!("Installing: {}", plan.install.join(" "));
    let mut args = vec!["install".to_string()];
    if shell.platform() == Platform::Windows {
        args.push("--user".to_string());
    }
    args.extend(plan.install.iter().cloned());
    match run_pip(shell, python, &args).into_result() {
        Ok(_) => SyncOutcome {
            reload_required: true,
            success: true,
            message: None,
        },
        Err(e) => SyncOutcome::failed(e),
    }
}
