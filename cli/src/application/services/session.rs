//! Application service — the unpack, launch, open sequence for one bundle.
//!
//! Split in two so the caller can report the application between the steps:
//! [`open_application`] unpacks the bundle, [`serve`] runs the stack on a
//! background task while waiting for the index page on the caller's task.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::application::ports::{BundleExtractor, CommandRunner, ReadinessProbe, UrlOpener};
use crate::application::services::launch::{StackSpec, spawn_stack};
use crate::application::services::readiness::{Readiness, open_when_ready};
use crate::application::signal::StopSignal;
use crate::domain::{COMPOSE_ENTRY, Metadata, application_name};

/// An unpacked bundle, ready to launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    /// Display name derived from the bundle file name.
    pub name: String,
    pub metadata: Metadata,
    /// Where the compose descriptor was (or would have been) written.
    pub compose_file: PathBuf,
}

impl Application {
    /// The stack to run for this application with the given orchestration tool.
    #[must_use]
    pub fn stack(&self, program: &str) -> StackSpec {
        StackSpec {
            program: program.to_string(),
            compose_file: self.compose_file.clone(),
        }
    }
}

/// Unpack `bundle` into `workdir`.
///
/// # Errors
///
/// Returns an error if extraction fails; files already written are left in
/// place for the working directory guard to remove.
pub fn open_application(
    extractor: &impl BundleExtractor,
    bundle: &Path,
    workdir: &Path,
) -> Result<Application> {
    let metadata = extractor
        .extract(bundle, workdir)
        .with_context(|| format!("cannot unpack {}", bundle.display()))?;
    Ok(Application {
        name: application_name(bundle),
        metadata,
        compose_file: workdir.join(COMPOSE_ENTRY),
    })
}

/// Run `stack` in the background and open `index` once it is reachable.
///
/// Returns after the stack has exited. The readiness wait always finishes
/// first: the stack closes the stop signal on exit.
///
/// # Errors
///
/// Returns an error if the orchestration tool fails to start or exits
/// unsuccessfully.
pub async fn serve<R>(
    runner: Arc<R>,
    probe: &impl ReadinessProbe,
    opener: &impl UrlOpener,
    stack: StackSpec,
    index: &str,
) -> Result<Readiness>
where
    R: CommandRunner + Send + Sync + 'static,
{
    let stop = StopSignal::new();
    let program = stack.program.clone();
    let background = spawn_stack(runner, stack, stop.clone());

    let readiness = open_when_ready(probe, opener, &stop, index).await;

    background
        .await
        .context("stack task panicked")?
        .with_context(|| format!("{program} failed"))?;
    Ok(readiness)
}
