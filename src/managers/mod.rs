//! System package managers used to bootstrap Python.
//!
//! - [`homebrew`] on macOS, which provides `pyenv`
//! - [`chocolatey`] on Windows, which provides Python directly

pub mod chocolatey;
pub mod homebrew;
