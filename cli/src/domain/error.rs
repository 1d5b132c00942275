//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

// ── Bundle errors ─────────────────────────────────────────────────────────────

/// Errors raised while unpacking an application bundle.
#[derive(Debug, Error)]
pub enum BundleError {
    /// The bundle file itself could not be opened.
    #[error("cannot open bundle {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An entry could not be read, or its destination file could not be written.
    #[error("{context}")]
    Stream {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// The metadata entry is not a valid application descriptor.
    #[error("cannot decode docker-application.yml")]
    Decode(#[source] serde_yaml::Error),
}

impl BundleError {
    pub(crate) fn stream(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Stream {
            context: context.into(),
            source,
        }
    }
}

// ── Launch errors ─────────────────────────────────────────────────────────────

/// Errors raised by the orchestration subprocess.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("failed to start {program}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}")]
    Exit { program: String, status: ExitStatus },
}
