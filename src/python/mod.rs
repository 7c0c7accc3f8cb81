//! Python interpreter and pip package management.

pub mod installer;
pub mod manifest;
pub mod pip;
pub mod version;

pub use installer::{install, installed_version, interpreter, uninstall};
pub use manifest::{raw_url, HttpManifestSource, ManifestCache, ManifestSource};
pub use pip::{
    is_wrong_version, list_installed, parse_pip_list, pip_command, plan_sync, run_pip, sync,
    PackageRequest, PipPackage, SyncOutcome, SyncPlan,
};
pub use version::{NumericVersion, PythonVersion, DEFAULT_PYTHON_VERSION};
