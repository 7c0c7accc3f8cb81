//! Configuration schema types.
//!
//! ```yaml
//! python_version: 3.8.3
//! gist_pip_url: https://gist.github.com/<user>/<id>
//! shell_output: normal
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::error::{Python2GoError, Result};
use crate::python::DEFAULT_PYTHON_VERSION;
use crate::ui::OutputMode;

/// Overrides `python_version`.
pub const ENV_PYTHON_VERSION: &str = "PYTHON2GO_PYTHON_VERSION";
/// Overrides `gist_pip_url`.
pub const ENV_GIST_PIP_URL: &str = "PYTHON2GO_GIST_PIP_URL";

static INSTALLABLE_VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+\.\d+\.\d+$").expect("INSTALLABLE_VERSION_REGEX must compile")
});

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Python2GoConfig {
    /// Interpreter version to install and use.
    pub python_version: String,

    /// Gist publishing the pip package manifest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gist_pip_url: Option<String>,

    /// How much shell output to show.
    pub shell_output: OutputMode,
}

impl Default for Python2GoConfig {
    fn default() -> Self {
        Self {
            python_version: DEFAULT_PYTHON_VERSION.to_string(),
            gist_pip_url: None,
            shell_output: OutputMode::default(),
        }
    }
}

impl Python2GoConfig {
    /// Apply `PYTHON2GO_*` overrides read through `lookup`.
    ///
    /// Blank values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(version) = get(ENV_PYTHON_VERSION) {
            self.python_version = version.trim().to_string();
        }
        if let Some(url) = get(ENV_GIST_PIP_URL) {
            self.gist_pip_url = Some(url.trim().to_string());
        }
    }

    /// Apply overrides from the process environment.
    pub fn apply_process_env(&mut self) {
        self.apply_env(|key| std::env::var(key).ok());
    }

    /// The manifest gist, if one is configured.
    pub fn gist_url(&self) -> Option<&str> {
        self.gist_pip_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
    }

    /// Check values that cannot be expressed in the types.
    pub fn validate(&self) -> Result<()> {
        if !INSTALLABLE_VERSION_REGEX.is_match(&self.python_version) {
            return Err(Python2GoError::ConfigValidationError {
                message: format!(
                    "python_version must look like 3.8.3, got '{}'",
                    self.python_version
                ),
            });
        }
        if let Some(url) = self.gist_url() {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(Python2GoError::ConfigValidationError {
                    message: format!("gist_pip_url must be an http(s) URL, got '{}'", url),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn empty_yaml_gives_defaults() {
        let config: Python2GoConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, Python2GoConfig::default());
        assert_eq!(config.python_version, "3.8.3");
        assert_eq!(config.shell_output, OutputMode::Normal);
    }

    #[test]
    fn parses_all_fields() {
        let config: Python2GoConfig = serde_yaml::from_str(
            "python_version: 3.11.4\ngist_pip_url: https://gist.github.com/u/1\nshell_output: quiet\n",
        )
        .unwrap();
        assert_eq!(config.python_version, "3.11.4");
        assert_eq!(config.gist_url(), Some("https://gist.github.com/u/1"));
        assert_eq!(config.shell_output, OutputMode::Quiet);
    }

    #[test]
    fn rejects_unknown_output_mode() {
        let result: std::result::Result<Python2GoConfig, _> =
            serde_yaml::from_str("shell_output: loud");
        assert!(result.is_err());
    }

    #[test]
    fn env_overrides_win() {
        let env: HashMap<&str, &str> = [
            (ENV_PYTHON_VERSION, "3.12.0"),
            (ENV_GIST_PIP_URL, "https://gist.github.com/u/2"),
        ]
        .into_iter()
        .collect();
        let mut config = Python2GoConfig::default();
        config.apply_env(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(config.python_version, "3.12.0");
        assert_eq!(config.gist_url(), Some("https://gist.github.com/u/2"));
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let mut config = Python2GoConfig::default();
        config.apply_env(|_| Some("  ".to_string()));
        assert_eq!(config, Python2GoConfig::default());
    }

    #[test]
    fn blank_gist_url_counts_as_unset() {
        let config = Python2GoConfig {
            gist_pip_url: Some(" ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.gist_url(), None);
    }

    #[test]
    fn validate_checks_version_and_url() {
        assert!(Python2GoConfig::default().validate().is_ok());

        let bad_version = Python2GoConfig {
            python_version: "3.8".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            bad_version.validate(),
            Err(Python2GoError::ConfigValidationError { .. })
        ));

        let bad_url = Python2GoConfig {
            gist_pip_url: Some("gist.github.com/u/1".to_string()),
            ..Default::default()
        };
        assert!(bad_url.validate().is_err());
    }
}
