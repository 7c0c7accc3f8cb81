//! Output masking for secret values.
//!
//! Masking works on whole lines: a line is replaced only when it consists
//! of nothing but a registered secret, as when a password is echoed back.
//! Text that merely contains the secret is left alone, so a short password
//! cannot corrupt version strings or install logs.

use super::Credential;

/// Masks lines that are exactly a secret value.
///
/// # Example
///
/// ```
/// use python2go::secrets::OutputMasker;
///
/// let mut masker = OutputMasker::new();
/// masker.add_secret("super-secret-value");
///
/// assert_eq!(masker.mask("  super-secret-value "), "[REDACTED]");
/// assert_eq!(masker.mask("The key is super-secret-value"), "The key is super-secret-value");
/// ```
#[derive(Debug, Clone)]
pub struct OutputMasker {
    secrets: Vec<String>,
    mask: String,
}

impl OutputMasker {
    /// Create a new masker with default mask string.
    pub fn new() -> Self {
        Self::with_mask("[REDACTED]")
    }

    /// Create a masker with a custom mask string.
    pub fn with_mask(mask: impl Into<String>) -> Self {
        Self {
            secrets: Vec::new(),
            mask: mask.into(),
        }
    }

    /// Create a masker that hides the given credential.
    pub fn for_credential(credential: &Credential) -> Self {
        let mut masker = Self::new();
        masker.add_secret(credential.expose());
        masker
    }

    /// Register a secret value to be masked.
    ///
    /// Empty and whitespace-only strings are ignored.
    pub fn add_secret(&mut self, value: impl Into<String>) {
        let value = value.into();
        let value = value.trim();
        if !value.is_empty() && !self.secrets.iter().any(|s| s == value) {
            self.secrets.push(value.to_string());
        }
    }

    /// Mask `line` if it is a secret, ignoring surrounding whitespace.
    pub fn mask(&self, line: &str) -> String {
        if self.is_secret(line) {
            self.mask.clone()
        } else {
            line.to_string()
        }
    }

    /// Whether `line` is exactly one of the secrets.
    pub fn is_secret(&self, line: &str) -> bool {
        let line = line.trim();
        self.secrets.iter().any(|s| s == line)
    }

    /// Whether any secrets are registered.
    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
    }

    /// Get the number of registered secrets.
    pub fn secret_count(&self) -> usize {
        self.secrets.len()
    }
}

impl Default for OutputMasker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_line_that_is_the_secret() {
        let mut masker = OutputMasker::new();
        masker.add_secret("super-secret-value");

        assert_eq!(masker.mask("super-secret-value"), "[REDACTED]");
        assert_eq!(masker.mask("\tsuper-secret-value  "), "[REDACTED]");
    }

    #[test]
    fn leaves_lines_containing_the_secret() {
        let masker = OutputMasker::for_credential(&Credential::new("3"));

        assert_eq!(masker.mask("Python 3.8.3 installed"), "Python 3.8.3 installed");
        assert_eq!(masker.mask("3"), "[REDACTED]");
    }

    #[test]
    fn ignores_empty_and_duplicate_secrets() {
        let mut masker = OutputMasker::new();
        masker.add_secret("");
        masker.add_secret("   ");
        masker.add_secret("real-secret");
        masker.add_secret("real-secret");

        assert_eq!(masker.secret_count(), 1);
        assert!(masker.is_secret("real-secret"));
    }

    #[test]
    fn custom_mask_string() {
        let mut masker = OutputMasker::with_mask("***");
        masker.add_secret("password123");

        assert_eq!(masker.mask("password123"), "***");
        assert_eq!(masker.mask("pw=password123"), "pw=password123");
    }

    #[test]
    fn no_masking_without_secrets() {
        let masker = OutputMasker::default();
        assert!(masker.is_empty());
        assert_eq!(masker.mask("nothing to hide"), "nothing to hide");
    }

    #[test]
    fn for_credential_registers_password() {
        let masker = OutputMasker::for_credential(&Credential::new("hunter2"));
        assert_eq!(masker.secret_count(), 1);
        assert_eq!(masker.mask("hunter2"), "[REDACTED]");
    }
}
