//! CLI argument parsing with clap derive

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::commands;
use crate::infra::config::YamlConfigStore;

/// Unpack a docker application bundle, run its stack and open its index page
#[derive(Parser)]
#[command(name = "dap", version)]
pub struct Cli {
    /// Application bundle (tar or tar.gz) to run
    pub bundle: Option<PathBuf>,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// Without a bundle there is nothing to do and this returns immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the run fails.
    pub async fn run(self) -> Result<()> {
        let Some(bundle) = self.bundle else {
            return Ok(());
        };
        commands::run::run(&bundle, &YamlConfigStore::default()).await
    }
}
