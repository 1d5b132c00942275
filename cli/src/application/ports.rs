//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`
//! or `crate::commands`.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use std::time::Duration;

use anyhow::Result;

use crate::domain::{BundleError, DapConfig, Metadata};

// ── Bundle Port ───────────────────────────────────────────────────────────────

/// Unpacks an application bundle into a working directory.
pub trait BundleExtractor {
    /// Stream every entry of `bundle`, materialising the compose descriptor
    /// under `dest` and decoding the metadata entry.
    ///
    /// # Errors
    ///
    /// Returns a [`BundleError`] when the bundle cannot be opened, an entry
    /// cannot be read or written, or the metadata cannot be decoded.
    fn extract(&self, bundle: &Path, dest: &Path) -> Result<Metadata, BundleError>;
}

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
///
/// The returned future is `Send` because the stack runs on a background task.
pub trait CommandRunner {
    /// Run a program with inherited stdio and the extra `envs` layered on
    /// top of the current environment, returning its exit status.
    ///
    /// No timeout — the caller waits for the program to finish.
    fn run_status(
        &self,
        program: &str,
        args: &[&str],
        envs: &[(&str, &str)],
    ) -> impl Future<Output = std::io::Result<ExitStatus>> + Send;
}

// ── Readiness Ports ───────────────────────────────────────────────────────────

/// Network reachability check.
#[allow(async_fn_in_trait)]
pub trait ReadinessProbe {
    /// Attempt a single TCP connection to `address` (`host:port`), giving up
    /// after `timeout`. Returns `true` if the connection was accepted.
    async fn is_reachable(&self, address: &str, timeout: Duration) -> bool;
}

/// Hands a URL to the host's default handler.
pub trait UrlOpener {
    /// Open `url` without waiting for the handler to exit.
    ///
    /// # Errors
    ///
    /// Returns an error if the handler cannot be started.
    fn open(&self, url: &str) -> Result<()>;
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Loads user configuration.
pub trait ConfigStore {
    /// Load the configuration, returning defaults when none is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if a stored configuration cannot be read or parsed.
    fn load(&self) -> Result<DapConfig>;

    /// Location of the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the location cannot be determined.
    fn path(&self) -> Result<PathBuf>;
}
