//! Credential handling and output redaction.
//!
//! - [`Credential`] - A password supplied for privilege elevation
//! - [`OutputMasker`] - Redacts output lines that echo a secret back
//!
//! # Example
//!
//! ```
//! use python2go::secrets::{Credential, OutputMasker};
//!
//! let credential = Credential::new("hunter2");
//! assert_eq!(format!("{:?}", credential), "Credential([REDACTED])");
//!
//! let masker = OutputMasker::for_credential(&credential);
//! assert_eq!(masker.mask("hunter2"), "[REDACTED]");
//! assert_eq!(masker.mask("Python 3.8.3"), "Python 3.8.3");
//! ```

pub mod credential;
pub mod mask;

pub use credential::Credential;
pub use mask::OutputMasker;
