//! Application service — run the orchestration tool against the extracted
//! compose descriptor.
//!
//! Imports only from `crate::domain` and `crate::application`.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::application::ports::CommandRunner;
use crate::application::signal::StopSignal;
use crate::domain::LaunchError;

/// Extra environment for the orchestration tool: translate Windows host paths
/// in volume mounts.
pub const PATH_TRANSLATION_ENV: (&str, &str) = ("COMPOSE_CONVERT_WINDOWS_PATHS", "1");

/// What to run: `<program> -f <compose_file> up`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackSpec {
    /// Orchestration executable, e.g. `docker-compose`.
    pub program: String,
    /// Extracted compose descriptor.
    pub compose_file: PathBuf,
}

/// Run the stack in the foreground until the orchestration tool exits.
///
/// `stop` is closed on every exit path so a poller waiting on the stack
/// never outlives it.
///
/// # Errors
///
/// Returns [`LaunchError::Spawn`] if the tool cannot be started and
/// [`LaunchError::Exit`] if it exits unsuccessfully.
pub async fn run_stack(
    runner: &impl CommandRunner,
    spec: &StackSpec,
    stop: &StopSignal,
) -> Result<(), LaunchError> {
    let _closed = stop.close_on_drop();
    let compose = spec.compose_file.to_string_lossy();

    tracing::info!(program = %spec.program, compose = %compose, "starting stack");
    let status = runner
        .run_status(&spec.program, &["-f", compose.as_ref(), "up"], &[PATH_TRANSLATION_ENV])
        .await
        .map_err(|source| LaunchError::Spawn {
            program: spec.program.clone(),
            source,
        })?;

    if !status.success() {
        return Err(LaunchError::Exit {
            program: spec.program.clone(),
            status,
        });
    }
    tracing::info!(program = %spec.program, "stack exited");
    Ok(())
}

/// Start [`run_stack`] on a background task.
pub fn spawn_stack<R>(
    runner: Arc<R>,
    spec: StackSpec,
    stop: StopSignal,
) -> JoinHandle<Result<(), LaunchError>>
where
    R: CommandRunner + Send + Sync + 'static,
{
    tokio::spawn(async move { run_stack(runner.as_ref(), &spec, &stop).await })
}
