//! Integration tests for the config module public API.

use python2go::config::{
    find_project_root, load_config, load_config_files, Python2GoConfig, CONFIG_DIR,
};
use python2go::ui::OutputMode;
use python2go::Python2GoError;
use std::fs;
use tempfile::TempDir;

fn project(config: &str, local: Option<&str>) -> TempDir {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join(CONFIG_DIR);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.yml"), config).unwrap();
    if let Some(local) = local {
        fs::write(dir.join("config.local.yml"), local).unwrap();
    }
    temp
}

#[test]
fn defaults_without_files() {
    let temp = TempDir::new().unwrap();
    let config = load_config_files(temp.path(), None).unwrap();
    assert_eq!(config.python_version, "3.8.3");
    assert_eq!(config.gist_url(), None);
}

#[test]
fn local_file_overrides_project_file() {
    let temp = project(
        "python_version: 3.9.1\ngist_pip_url: https://gist.github.com/u/1\n",
        Some("python_version: 3.11.4\n"),
    );
    let config = load_config_files(temp.path(), None).unwrap();
    assert_eq!(config.python_version, "3.11.4");
    assert_eq!(config.gist_url(), Some("https://gist.github.com/u/1"));
}

#[test]
fn local_null_removes_project_value() {
    let temp = project(
        "gist_pip_url: https://gist.github.com/u/1\n",
        Some("gist_pip_url: null\n"),
    );
    let config = load_config_files(temp.path(), None).unwrap();
    assert_eq!(config.gist_pip_url, None);
}

#[test]
fn shell_output_mode_parses() {
    let temp = project("shell_output: verbose\n", None);
    let config = load_config_files(temp.path(), None).unwrap();
    assert_eq!(config.shell_output, OutputMode::Verbose);
}

#[test]
fn invalid_yaml_is_a_parse_error() {
    let temp = project("python_version: [unclosed\n", None);
    let err = load_config_files(temp.path(), None).unwrap_err();
    assert!(matches!(err, Python2GoError::ConfigParseError { .. }));
}

#[test]
fn override_path_is_used_exclusively() {
    let temp = project("python_version: 3.9.1\n", None);
    let other = temp.path().join("other.yml");
    fs::write(&other, "python_version: 3.10.2\n").unwrap();
    let config = load_config_files(temp.path(), Some(&other)).unwrap();
    assert_eq!(config.python_version, "3.10.2");
}

#[test]
fn validation_rejects_bad_version() {
    let temp = project("python_version: latest\n", None);
    let err = load_config(temp.path(), None).unwrap_err();
    assert!(err.to_string().contains("python_version"));
}

#[test]
fn env_lookup_overrides_values() {
    let mut config = Python2GoConfig::default();
    config.apply_env(|key| match key {
        "PYTHON2GO_PYTHON_VERSION" => Some("3.12.0".to_string()),
        "PYTHON2GO_GIST_PIP_URL" => Some("   ".to_string()),
        _ => None,
    });
    assert_eq!(config.python_version, "3.12.0");
    assert_eq!(config.gist_pip_url, None);
}

#[test]
fn project_root_found_from_subdirectory() {
    let temp = project("{}\n", None);
    let nested = temp.path().join("src").join("pkg");
    fs::create_dir_all(&nested).unwrap();
    let root = find_project_root(&nested).unwrap();
    assert_eq!(root, temp.path());
}
