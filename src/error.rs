//! Error types for Python2Go operations.
//!
//! This module defines [`Python2GoError`], the error type used outside the
//! shell core, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Shell invocations never return `Err`: their expected failures (missing
//!   binary, non-zero exit, declined credential) are carried by
//!   [`ShellResult`](crate::shell::ShellResult)
//! - Use `Python2GoError` for configuration, manifest and prompt failures
//! - Use `anyhow::Error` (via `Python2GoError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Python2Go operations.
#[derive(Debug, Error)]
pub enum Python2GoError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// The pip package manifest could not be downloaded or decoded.
    #[error("Package manifest could not be loaded from {url}: {message}")]
    ManifestUnavailable { url: String, message: String },

    /// A shell command reported failure where the caller needed success.
    #[error("Command failed: {message}")]
    CommandFailed { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Python2Go operations.
pub type Result<T> = std::result::Result<T, Python2GoError>;
