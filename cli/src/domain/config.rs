//! Domain types for dap configuration.
//!
//! Pure types only — no I/O, no async, no filesystem access.

use serde::Deserialize;

/// Orchestration tool invoked when no configuration overrides it.
pub const DEFAULT_COMPOSE_COMMAND: &str = "docker-compose";

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.dap/config.yaml`.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DapConfig {
    /// Orchestration tool settings.
    pub compose: ComposeConfig,
}

/// Orchestration tool settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ComposeConfig {
    /// Executable name or path, e.g. `docker-compose`.
    #[serde(default = "default_compose_command")]
    pub command: String,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            command: default_compose_command(),
        }
    }
}

fn default_compose_command() -> String {
    DEFAULT_COMPOSE_COMMAND.to_string()
}
