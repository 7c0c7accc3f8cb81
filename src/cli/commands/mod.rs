//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`python2go install`, `python2go sync`)
//! - Shared configuration and shell construction through [`CommandContext`]
//! - Consistent global flag handling

pub mod completions;
pub mod dispatcher;
pub mod exec;
pub mod install;
pub mod pip;
pub mod sync;
pub mod version;

pub use dispatcher::{Command, CommandContext, CommandDispatcher, CommandResult};
