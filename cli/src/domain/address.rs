//! Derivation of the TCP address probed for readiness.

/// Turn an index URL into the `host:port` the readiness probe dials.
///
/// The scheme is stripped, anything after the authority (path, query,
/// fragment) is dropped, and the scheme's default port is appended when the
/// authority has none. Strings without a known scheme are used as-is up to
/// the first `/`.
///
/// ```
/// use dap_cli::domain::probe_address;
///
/// assert_eq!(probe_address("http://localhost:8080"), "localhost:8080");
/// assert_eq!(probe_address("http://example.test/app/"), "example.test:80");
/// ```
#[must_use]
pub fn probe_address(index: &str) -> String {
    let (rest, default_port) = if let Some(rest) = index.strip_prefix("http://") {
        (rest, Some(80))
    } else if let Some(rest) = index.strip_prefix("https://") {
        (rest, Some(443))
    } else {
        (index, None)
    };

    let authority = rest
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();

    match default_port {
        Some(port) if !has_port(authority) => format!("{authority}:{port}"),
        _ => authority.to_string(),
    }
}

fn has_port(authority: &str) -> bool {
    // `[::1]:8080` carries a port, `[::1]` does not.
    match authority.rfind(']') {
        Some(end) => authority[end..].contains(':'),
        None => authority.contains(':'),
    }
}
