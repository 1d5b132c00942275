//! Infrastructure implementation of the `CommandRunner` port.
//!
//! `TokioCommandRunner` is the production implementation: the child inherits
//! stdin/stdout/stderr so the orchestration tool's output reaches the
//! terminal unchanged.

use std::process::ExitStatus;

use crate::application::ports::CommandRunner;

/// Production `CommandRunner` — spawns with tokio and waits for exit.
///
/// `kill_on_drop` is left off: the stack is never cancelled from our side,
/// it stops when the orchestration tool exits.
pub struct TokioCommandRunner;

impl CommandRunner for TokioCommandRunner {
    async fn run_status(
        &self,
        program: &str,
        args: &[&str],
        envs: &[(&str, &str)],
    ) -> std::io::Result<ExitStatus> {
        let mut child = tokio::process::Command::new(program)
            .args(args)
            .envs(envs.iter().copied())
            .spawn()?;
        child.wait().await
    }
}
