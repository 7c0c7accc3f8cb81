//! Elevation credentials.

use std::fmt;

/// A password used to authenticate a privilege escalation.
///
/// The value is only reachable through [`expose`](Self::expose); `Debug`
/// never prints it, so a credential can sit inside logged structs safely.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a password.
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// The raw password, for writing to the authenticating process only.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Whether the password is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_never_prints_secret() {
        let credential = Credential::new("s3cret");
        let debug = format!("{:?}", Some(&credential));
        assert!(!debug.contains("s3cret"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn expose_returns_raw_value() {
        let credential = Credential::new("s3cret");
        assert_eq!(credential.expose(), "s3cret");
        assert!(!credential.is_empty());
        assert!(Credential::new("").is_empty());
    }
}
