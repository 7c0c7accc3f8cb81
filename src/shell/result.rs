//! Uniform outcome of a shell invocation.

use std::fmt;

/// Why a shell invocation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The shell process could not be started.
    Spawn,
    /// The command ran and exited with a non-zero code.
    NonZeroExit,
    /// Elevation needed a credential and none was supplied.
    CredentialDeclined,
    /// No shell behavior is defined for the current platform.
    UnsupportedPlatform,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Spawn => "spawn error",
            Self::NonZeroExit => "non-zero exit",
            Self::CredentialDeclined => "credential declined",
            Self::UnsupportedPlatform => "unsupported platform",
        };
        f.write_str(name)
    }
}

/// Result of running a shell command.
///
/// Expected failures are values, never `Err` or panics. Branch on
/// [`is_success`](Self::is_success) or match the variants.
///
/// # Example
///
/// ```
/// use python2go::shell::ShellResult;
///
/// let ok = ShellResult::success("  3.8.3\n", None);
/// assert_eq!(ok.output(), Some("3.8.3"));
///
/// let err = ShellResult::non_zero_exit("pip: not found", None);
/// assert!(!err.is_success());
/// assert_eq!(err.error(), Some("pip: not found"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellResult {
    /// The command completed.
    Success {
        /// Trimmed standard output.
        output: String,
        /// Diagnostic text (usually stderr) emitted alongside a success.
        warnings: Option<String>,
    },
    /// The command could not run or reported failure.
    Failure {
        /// Failure category.
        kind: FailureKind,
        /// Human-readable error message.
        error: String,
        /// Partial standard output, if any was captured.
        output: Option<String>,
    },
}

impl ShellResult {
    /// Create a success result. The output is trimmed; empty warnings are dropped.
    pub fn success(stdout: impl AsRef<str>, warnings: Option<String>) -> Self {
        Self::Success {
            output: stdout.as_ref().trim().to_string(),
            warnings: warnings.filter(|w| !w.trim().is_empty()),
        }
    }

    /// Create a failure result of the given kind.
    pub fn failure(kind: FailureKind, error: impl Into<String>, output: Option<String>) -> Self {
        Self::Failure {
            kind,
            error: error.into(),
            output,
        }
    }

    /// Failure for a command that exited with a non-zero code.
    pub fn non_zero_exit(error: impl Into<String>, output: Option<String>) -> Self {
        Self::failure(FailureKind::NonZeroExit, error, output)
    }

    /// Failure for a process that could not be started.
    pub fn spawn_error(error: &std::io::Error) -> Self {
        Self::failure(
            FailureKind::Spawn,
            format!("{:?}: {}", error.kind(), error),
            None,
        )
    }

    /// Failure for an elevation that received no credential.
    pub fn credential_declined() -> Self {
        Self::failure(
            FailureKind::CredentialDeclined,
            "Error: No root password provided",
            None,
        )
    }

    /// Failure for a platform without shell support.
    pub fn unsupported_platform(platform: &str) -> Self {
        Self::failure(
            FailureKind::UnsupportedPlatform,
            format!("Unsupported platform: {}", platform),
            None,
        )
    }

    /// Whether the command succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The captured output (trimmed stdout on success, partial output on failure).
    pub fn output(&self) -> Option<&str> {
        match self {
            Self::Success { output, .. } => Some(output),
            Self::Failure { output, .. } => output.as_deref(),
        }
    }

    /// The warnings attached to a success.
    pub fn warnings(&self) -> Option<&str> {
        match self {
            Self::Success { warnings, .. } => warnings.as_deref(),
            Self::Failure { .. } => None,
        }
    }

    /// The error message of a failure.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error, .. } => Some(error),
        }
    }

    /// The failure category, if this is a failure.
    pub fn kind(&self) -> Option<FailureKind> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { kind, .. } => Some(*kind),
        }
    }

    /// Convert into a `Result`, keeping the output on success and the error text on failure.
    pub fn into_result(self) -> std::result::Result<String, String> {
        match self {
            Self::Success { output, .. } => Ok(output),
            Self::Failure { error, .. } => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_trims_output() {
        let result = ShellResult::success("\n  hello world \n", None);
        assert_eq!(result.output(), Some("hello world"));
        assert!(result.is_success());
        assert_eq!(result.error(), None);
    }

    #[test]
    fn success_drops_blank_warnings() {
        let result = ShellResult::success("ok", Some("  \n".to_string()));
        assert_eq!(result.warnings(), None);

        let result = ShellResult::success("ok", Some("deprecated flag".to_string()));
        assert_eq!(result.warnings(), Some("deprecated flag"));
    }

    #[test]
    fn failure_keeps_partial_output() {
        let result = ShellResult::non_zero_exit("boom", Some("partial".to_string()));
        assert!(!result.is_success());
        assert_eq!(result.kind(), Some(FailureKind::NonZeroExit));
        assert_eq!(result.output(), Some("partial"));
        assert_eq!(result.warnings(), None);
    }

    #[test]
    fn spawn_error_names_the_io_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "program not found");
        let result = ShellResult::spawn_error(&io);
        assert_eq!(result.kind(), Some(FailureKind::Spawn));
        let msg = result.error().unwrap();
        assert!(msg.starts_with("NotFound"));
        assert!(msg.contains("program not found"));
    }

    #[test]
    fn credential_declined_has_no_output() {
        let result = ShellResult::credential_declined();
        assert_eq!(result.kind(), Some(FailureKind::CredentialDeclined));
        assert_eq!(result.error(), Some("Error: No root password provided"));
        assert_eq!(result.output(), None);
    }

    #[test]
    fn into_result_maps_variants() {
        assert_eq!(
            ShellResult::success("v", None).into_result(),
            Ok("v".to_string())
        );
        assert_eq!(
            ShellResult::unsupported_platform("wasm").into_result(),
            Err("Unsupported platform: wasm".to_string())
        );
    }

    #[test]
    fn failure_kind_display() {
        assert_eq!(FailureKind::Spawn.to_string(), "spawn error");
        assert_eq!(
            FailureKind::UnsupportedPlatform.to_string(),
            "unsupported platform"
        );
    }
}
