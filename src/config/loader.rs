//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::merger::merge_configs;
use crate::config::schema::Python2GoConfig;
use crate::error::{Python2GoError, Result};

/// Directory holding configuration files.
pub const CONFIG_DIR: &str = ".python2go";

/// Configuration files in merge order (later overrides earlier).
///
/// 1. User global config (`~/.python2go/config.yml`)
/// 2. Project config (`.python2go/config.yml`)
/// 3. Local overrides (`.python2go/config.local.yml`)
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    pub user_global: Option<PathBuf>,
    pub project: Option<PathBuf>,
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover existing config files for `project_root`.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            user_global: dirs::home_dir()
                .and_then(|home| existing(home.join(CONFIG_DIR).join("config.yml"))),
            project: existing(project_root.join(CONFIG_DIR).join("config.yml")),
            project_local: existing(project_root.join(CONFIG_DIR).join("config.local.yml")),
        }
    }

    /// Existing paths in merge order.
    pub fn all_existing(&self) -> Vec<&Path> {
        [&self.user_global, &self.project, &self.project_local]
            .into_iter()
            .filter_map(|p| p.as_deref())
            .collect()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    path.is_file().then_some(path)
}

/// Walk up from `start` to the nearest directory with `.python2go` or `.git`.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(CONFIG_DIR).is_dir() || dir.join(".git").exists())
        .map(Path::to_path_buf)
}

/// Read one config file as a raw YAML value.
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Python2GoError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Python2GoError::Io(e)
        }
    })?;

    serde_yaml::from_str(&content).map_err(|e| Python2GoError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Parse YAML content into a config.
pub fn parse_config(content: &str, source_path: &Path) -> Result<Python2GoConfig> {
    let value: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| Python2GoError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;
    from_value(merge_configs([value]), source_path)
}

fn from_value(value: serde_yaml::Value, source_path: &Path) -> Result<Python2GoConfig> {
    serde_yaml::from_value(value).map_err(|e| Python2GoError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load the effective configuration.
///
/// With `config_override` only that file is read (and must exist);
/// otherwise discovered files are merged, and defaults apply when there
/// are none. Environment overrides are applied last, then the result is
/// validated.
///
/// # Example
///
/// ```
/// use python2go::config::load_config;
/// use std::fs;
/// use tempfile::TempDir;
///
/// let temp = TempDir::new().unwrap();
/// fs::create_dir_all(temp.path().join(".python2go")).unwrap();
/// fs::write(temp.path().join(".python2go/config.yml"), "shell_output: quiet").unwrap();
///
/// let config = load_config(temp.path(), None).unwrap();
/// assert_eq!(config.shell_output, python2go::ui::OutputMode::Quiet);
/// ```
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<Python2GoConfig> {
    let mut config = load_config_files(project_root, config_override)?;
    config.apply_process_env();
    config.validate()?;
    Ok(config)
}

/// Load configuration files without environment overrides or validation.
pub fn load_config_files(
    project_root: &Path,
    config_override: Option<&Path>,
) -> Result<Python2GoConfig> {
    if let Some(path) = config_override {
        debug!("Loading config from {}", path.display());
        return from_value(merge_configs([load_config_value(path)?]), path);
    }

    let paths = ConfigPaths::discover(project_root);
    let mut layers = Vec::new();
    for path in paths.all_existing() {
        debug!("Loading config layer {}", path.display());
        layers.push(load_config_value(path)?);
    }
    from_value(
        merge_configs(layers),
        &project_root.join(CONFIG_DIR).join("config.yml"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::OutputMode;
    use tempfile::TempDir;

    fn project(files: &[(&str, &str)]) -> TempDir {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(CONFIG_DIR);
        fs::create_dir_all(&dir).unwrap();
        for (name, content) in files {
            fs::write(dir.join(name), content).unwrap();
        }
        temp
    }

    #[test]
    fn discover_finds_project_and_local() {
        let temp = project(&[("config.yml", ""), ("config.local.yml", "")]);
        let paths = ConfigPaths::discover(temp.path());
        assert!(paths.project.is_some());
        assert!(paths.project_local.is_some());
        let all = paths.all_existing();
        assert!(all.ends_with(&[
            paths.project.as_deref().unwrap(),
            paths.project_local.as_deref().unwrap()
        ]));
    }

    #[test]
    fn discover_skips_missing_files() {
        let temp = TempDir::new().unwrap();
        let paths = ConfigPaths::discover(temp.path());
        assert!(paths.project.is_none());
        assert!(paths.project_local.is_none());
    }

    #[test]
    fn find_project_root_walks_up() {
        let temp = project(&[]);
        let nested = temp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        assert_eq!(find_project_root(&nested), Some(temp.path().to_path_buf()));
    }

    #[test]
    fn local_overrides_project() {
        let temp = project(&[
            ("config.yml", "python_version: 3.9.7\nshell_output: verbose"),
            ("config.local.yml", "shell_output: silent"),
        ]);
        let config = load_config_files(temp.path(), None).unwrap();
        assert_eq!(config.python_version, "3.9.7");
        assert_eq!(config.shell_output, OutputMode::Silent);
    }

    #[test]
    fn no_files_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config_files(temp.path(), None).unwrap();
        assert_eq!(config.python_version, "3.8.3");
    }

    #[test]
    fn override_file_is_used_alone() {
        let temp = project(&[("config.yml", "python_version: 3.9.7")]);
        let custom = temp.path().join("custom.yml");
        fs::write(&custom, "gist_pip_url: https://gist.github.com/u/1").unwrap();
        let config = load_config_files(temp.path(), Some(&custom)).unwrap();
        assert_eq!(config.python_version, "3.8.3");
        assert_eq!(config.gist_url(), Some("https://gist.github.com/u/1"));
    }

    #[test]
    fn missing_override_is_not_found() {
        let temp = TempDir::new().unwrap();
        let result = load_config_files(temp.path(), Some(&temp.path().join("nope.yml")));
        assert!(matches!(result, Err(Python2GoError::ConfigNotFound { .. })));
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let result = parse_config("python_version: [", Path::new("bad.yml"));
        assert!(matches!(result, Err(Python2GoError::ConfigParseError { .. })));
    }

    #[test]
    fn empty_file_parses_to_defaults() {
        let config = parse_config("", Path::new("empty.yml")).unwrap();
        assert_eq!(config, Python2GoConfig::default());
    }
}
