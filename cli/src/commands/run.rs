//! `dap <bundle>` — unpack, run the stack, open the index page.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::application::ports::ConfigStore;
use crate::application::services::session::{self, Application};
use crate::infra::browser::SystemBrowser;
use crate::infra::bundle::TarBundle;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::network::TokioNetworkProbe;
use crate::infra::workdir;

/// Run one unpack, launch, open cycle for `bundle`.
///
/// The working directory lives until the stack has exited and is removed on
/// every return path.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded, the bundle cannot be
/// unpacked, or the orchestration tool fails.
pub async fn run(bundle: &Path, store: &impl ConfigStore) -> Result<()> {
    let config = store.load()?;
    if let Ok(path) = store.path() {
        tracing::debug!(
            path = %path.display(),
            compose = %config.compose.command,
            "configuration loaded"
        );
    }
    let workdir = workdir::create()?;

    let app = {
        let bundle = bundle.to_path_buf();
        let dest = workdir.path().to_path_buf();
        tokio::task::spawn_blocking(move || session::open_application(&TarBundle, &bundle, &dest))
            .await
            .context("spawn_blocking for open_application")??
    };
    print_application(&app);

    let interrupts = tokio::spawn(outlast_interrupts());
    let served = session::serve(
        Arc::new(TokioCommandRunner),
        &TokioNetworkProbe,
        &SystemBrowser,
        app.stack(&config.compose.command),
        &app.metadata.index,
    )
    .await;
    interrupts.abort();

    let readiness = served?;
    tracing::debug!(?readiness, "stack finished");

    let path = workdir.path().to_path_buf();
    if let Err(e) = workdir.close() {
        tracing::warn!("cannot remove {}: {e}", path.display());
    }
    Ok(())
}

fn print_application(app: &Application) {
    println!("Application: {}", app.name);
    println!("Version: {}", app.metadata.version);
    println!("Author: {}", app.metadata.author);
}

/// Keep Ctrl-C from killing dap while the stack runs.
///
/// The orchestration tool receives the same interrupt from the terminal and
/// brings the stack down; dap then exits through the normal path and removes
/// its working directory.
async fn outlast_interrupts() {
    while tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("interrupt received, waiting for the stack to stop");
    }
}
