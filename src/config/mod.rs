//! Configuration loading.
//!
//! - Schema and environment overrides in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Layer merging in [`merger`]
//!
//! Files are merged in this order:
//! 1. User global config (`~/.python2go/config.yml`)
//! 2. Project config (`.python2go/config.yml`)
//! 3. Local overrides (`.python2go/config.local.yml`)
//!
//! `PYTHON2GO_PYTHON_VERSION` and `PYTHON2GO_GIST_PIP_URL` override the
//! merged values.

pub mod loader;
pub mod merger;
pub mod schema;

pub use loader::{
    find_project_root, load_config, load_config_files, load_config_value, parse_config,
    ConfigPaths, CONFIG_DIR,
};
pub use merger::{deep_merge, merge_configs};
pub use schema::{Python2GoConfig, ENV_GIST_PIP_URL, ENV_PYTHON_VERSION};
