//! Python and package version handling.

use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

/// Interpreter version installed when none is configured.
pub const DEFAULT_PYTHON_VERSION: &str = "3.8.3";

/// Matches the banner printed by `python --version`.
static PYTHON_VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Python (?<major>\d+)\.(?<minor>\d+)\.(?<release>\d+)")
        .expect("PYTHON_VERSION_REGEX must compile")
});

/// Matches a dotted package version; the patch part is optional and may carry a suffix.
static PACKAGE_VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?<major>\d+)\.(?<minor>\d+)(?:\.(?<patch>\d+))?")
        .expect("PACKAGE_VERSION_REGEX must compile")
});

/// A Python interpreter version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PythonVersion {
    pub major: u32,
    pub minor: u32,
    pub release: u32,
}

impl PythonVersion {
    /// Parse the output of `python --version`.
    ///
    /// # Example
    ///
    /// ```
    /// use python2go::python::PythonVersion;
    ///
    /// let v = PythonVersion::parse("Python 3.10.12").unwrap();
    /// assert_eq!((v.major, v.minor, v.release), (3, 10, 12));
    /// assert!(PythonVersion::parse("command not found").is_none());
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        let caps = PYTHON_VERSION_REGEX.captures(raw)?;
        Some(Self {
            major: caps["major"].parse().ok()?,
            minor: caps["minor"].parse().ok()?,
            release: caps["release"].parse().ok()?,
        })
    }
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.release)
    }
}

/// A package version reduced to its numeric (major, minor, patch) parts.
///
/// Missing or non-numeric patch parts count as zero, so `1.2` equals `1.2.0`
/// and `1.2.0rc1` equals `1.2.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl NumericVersion {
    /// Extract the first dotted version in `raw`.
    pub fn parse(raw: &str) -> Option<Self> {
        let caps = PACKAGE_VERSION_REGEX.captures(raw)?;
        Some(Self {
            major: caps["major"].parse().ok()?,
            minor: caps["minor"].parse().ok()?,
            patch: caps
                .name("patch")
                .and_then(|m| m.as_str().parse().ok())
                .unwrap_or(0),
        })
    }
}

impl PartialOrd for NumericVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NumericVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch).cmp(&(other.major, other.minor, other.patch))
    }
}
