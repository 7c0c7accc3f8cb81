//! Sync command implementation.
//!
//! The `python2go sync` command downloads the package manifest published
//! in a gist and makes pip's installed set match it.

use crate::cli::args::SyncArgs;
use crate::error::Result;
use crate::python::{self, HttpManifestSource, ManifestCache, ManifestSource};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The sync command implementation.
pub struct SyncCommand<'a> {
    ctx: &'a CommandContext,
    args: SyncArgs,
    source: Option<Box<dyn ManifestSource + 'a>>,
}

impl<'a> SyncCommand<'a> {
    /// Create a new sync command fetching manifests over HTTP.
    pub fn new(ctx: &'a CommandContext, args: SyncArgs) -> Self {
        Self {
            ctx,
            args,
            source: None,
        }
    }

    /// Use `source` instead of HTTP.
    pub fn with_source(mut self, source: impl ManifestSource + 'a) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    fn gist_url(&self) -> Option<String> {
        self.args
            .gist
            .as_deref()
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .or_else(|| self.ctx.config().gist_url())
            .map(String::from)
    }
}

impl Command for SyncCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(gist_url) = self.gist_url() else {
            ui.error("No gist_pip_url specified");
            return Ok(CommandResult::failure(1));
        };

        let http;
        let source: &dyn ManifestSource = match &self.source {
            Some(source) => source.as_ref(),
            None => {
                http = HttpManifestSource::new()?;
                &http
            }
        };

        let mut cache = ManifestCache::new(Some(gist_url));
        let requested = match cache.get_or_fetch(source) {
            Ok(requested) => requested.to_vec(),
            Err(e) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
        };
        if requested.is_empty() {
            ui.message("Manifest lists no packages");
            return Ok(CommandResult::success());
        }

        let action = format!("Syncing {} pip packages", requested.len());
        let mut spinner = ui.start_spinner(&action);
        let shell = self.ctx.shell_with_spinner(ui, spinner.as_ref(), &action);
        let interpreter = self.ctx.interpreter(&shell, self.args.python.as_deref());
        let outcome = python::sync(&shell, &interpreter, &requested);

        if !outcome.success {
            spinner.finish_error("Package sync failed");
            if let Some(message) = &outcome.message {
                ui.error(message);
            }
            return Ok(CommandResult::failure(1));
        }

        if outcome.reload_required {
            spinner.finish_success("Packages installed");
            ui.warning("Restart running Python sessions to load the new packages");
        } else {
            spinner.finish_success("Packages already up to date");
        }
        Ok(CommandResult::success())
    }
}
