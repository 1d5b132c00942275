//! Network infrastructure — implements `ReadinessProbe` with tokio sockets.

use std::time::Duration;

use crate::application::ports::ReadinessProbe;

/// Production probe: one `TcpStream::connect` bounded by a timeout.
pub struct TokioNetworkProbe;

impl ReadinessProbe for TokioNetworkProbe {
    async fn is_reachable(&self, address: &str, timeout: Duration) -> bool {
        matches!(
            tokio::time::timeout(timeout, tokio::net::TcpStream::connect(address)).await,
            Ok(Ok(_))
        )
    }
}
