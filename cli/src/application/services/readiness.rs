//! Application service — wait for the index page to accept connections,
//! then open it.
//!
//! Probes back-to-back with no pause between attempts; each attempt is
//! bounded by [`PROBE_TIMEOUT`]. The loop ends only on success or when the
//! stack has stopped.

use std::time::Duration;

use crate::application::ports::{ReadinessProbe, UrlOpener};
use crate::application::signal::StopSignal;
use crate::domain::probe_address;

/// Upper bound on a single connection attempt.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(1);

/// How [`open_when_ready`] finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    /// The application has no index page; nothing was probed.
    NoIndex,
    /// The endpoint accepted a connection and the index was handed to the opener.
    Opened,
    /// The stack stopped before the endpoint became reachable.
    Stopped,
}

/// Poll the address behind `index` until it is reachable or `stop` closes.
///
/// On success the original `index` string (not the probed address) is
/// opened exactly once. A failure to open is logged, not returned.
pub async fn open_when_ready(
    probe: &impl ReadinessProbe,
    opener: &impl UrlOpener,
    stop: &StopSignal,
    index: &str,
) -> Readiness {
    if index.is_empty() {
        return Readiness::NoIndex;
    }

    let address = probe_address(index);
    tracing::debug!(%address, "waiting for index page");

    loop {
        if stop.is_closed() {
            tracing::debug!(%address, "stack stopped before index became reachable");
            return Readiness::Stopped;
        }
        if probe.is_reachable(&address, PROBE_TIMEOUT).await {
            tracing::info!(%index, "opening index page");
            if let Err(e) = opener.open(index) {
                tracing::warn!("cannot open {index}: {e:#}");
            }
            return Readiness::Opened;
        }
    }
}
