//! Python2Go - install, configure and manage a Python interpreter.
//!
//! Python2Go bootstraps a platform package manager (Homebrew on macOS and
//! Linux, Chocolatey on Windows), installs a pinned Python version with it,
//! and keeps that interpreter's pip packages in line with a manifest
//! published as a GitHub gist.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, merging, and validation
//! - [`error`] - Error types and result aliases
//! - [`managers`] - Homebrew and Chocolatey bootstrapping
//! - [`python`] - Interpreter installation, version parsing, and pip sync
//! - [`secrets`] - Elevation credentials and output masking
//! - [`shell`] - Shell command execution
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use python2go::python::{plan_sync, PackageRequest, PipPackage};
//!
//! let installed = vec![PipPackage { name: "numpy".into(), version: "1.19.5".into() }];
//! let requested = vec![PackageRequest::at("numpy", ">=1.20.0")];
//! let plan = plan_sync(&installed, &requested);
//! assert_eq!(plan.uninstall, vec!["numpy".to_string()]);
//! assert_eq!(plan.install, vec!["numpy==1.20.0".to_string()]);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod managers;
pub mod python;
pub mod secrets;
pub mod shell;
pub mod ui;

pub use error::{Python2GoError, Result};
