//! Working directory for an unpacked bundle.

use anyhow::{Context, Result};
use tempfile::TempDir;

/// Prefix of every working directory created under the system temp dir.
pub const WORKDIR_PREFIX: &str = "dap-";

/// Create a fresh working directory.
///
/// The returned [`TempDir`] deletes the directory and everything in it when
/// dropped, so it must outlive every task that reads from it.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn create() -> Result<TempDir> {
    tempfile::Builder::new()
        .prefix(WORKDIR_PREFIX)
        .tempdir()
        .context("creating working directory")
}
