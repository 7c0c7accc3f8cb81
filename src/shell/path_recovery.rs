//! PATH recovery for freshly installed tools.
//!
//! A package manager may put a new executable on the persistent PATH while
//! the shell we spawn still inherits the stale PATH of this process. When a
//! command depends on such a tool, it is prefixed with a guard that reloads
//! PATH only if the tool cannot be resolved. Composition is pure string
//! building; nothing is executed here.

use super::builder::ShellDialect;

/// Rebuilds `$env:Path` from the machine and user registry values.
pub const WINDOWS_RELOAD_PATH: &str = "$env:Path = [System.Environment]::GetEnvironmentVariable('Path','Machine') + ';' + [System.Environment]::GetEnvironmentVariable('Path','User')";

/// Rebuilds `PATH` from macOS `path_helper` and the Homebrew/pyenv locations.
pub const UNIX_RELOAD_PATH: &str = "if [ -x /usr/libexec/path_helper ]; then eval \"$(/usr/libexec/path_helper -s)\"; fi; export PATH=\"$HOME/.pyenv/shims:$HOME/.pyenv/bin:/opt/homebrew/bin:/usr/local/bin:$PATH\"";

/// The guard statement that reloads PATH when `required` is not resolvable.
///
/// # Example
///
/// ```
/// use python2go::shell::{path_reload_guard, ShellDialect};
///
/// let guard = path_reload_guard(ShellDialect::PowerShell, "choco");
/// assert!(guard.starts_with("If (-Not (Get-Command choco -ErrorAction SilentlyContinue))"));
/// ```
pub fn path_reload_guard(dialect: ShellDialect, required: &str) -> String {
    let required = dialect.quote(required);
    match dialect {
        ShellDialect::PowerShell => format!(
            "If (-Not (Get-Command {} -ErrorAction SilentlyContinue)) {{ {} }}",
            required, WINDOWS_RELOAD_PATH
        ),
        ShellDialect::Posix => format!(
            "if ! command -v {} >/dev/null 2>&1; then {}; fi",
            required, UNIX_RELOAD_PATH
        ),
    }
}

/// Prefix `command` with the PATH reload guard when `required` is set.
///
/// Without a required command the input is returned unchanged.
pub fn with_path_recovery(dialect: ShellDialect, required: Option<&str>, command: &str) -> String {
    match required {
        Some(required) if !required.trim().is_empty() => {
            format!("{}; {}", path_reload_guard(dialect, required.trim()), command)
        }
        _ => command.to_string(),
    }
}
