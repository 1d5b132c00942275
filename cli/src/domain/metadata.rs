//! Application descriptor carried inside a bundle.

use std::path::Path;

use serde::{Deserialize, Deserializer};

/// Archive entry holding the compose descriptor, copied verbatim.
pub const COMPOSE_ENTRY: &str = "docker-compose.yml";

/// Archive entry holding the application [`Metadata`].
pub const METADATA_ENTRY: &str = "docker-application.yml";

/// Display and readiness information for a bundled application.
///
/// Every field is optional in the YAML document and falls back to an empty
/// string. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Metadata {
    /// Display version, e.g. `"1.0"`.
    #[serde(deserialize_with = "scalar_string")]
    pub version: String,
    /// Display author.
    #[serde(deserialize_with = "scalar_string")]
    pub author: String,
    /// Index page URL. Empty means there is nothing to wait for or open.
    #[serde(deserialize_with = "scalar_string")]
    pub index: String,
}

/// Accept any YAML scalar for a string field, keeping its source text.
///
/// `version: 1.10` yields `"1.10"` (not a re-rendered float), `index: ~`
/// and `index:` yield `""`. Sequences and mappings are rejected.
fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Display name for the bundle at `path`: its file name with everything
/// from the last `.` removed.
///
/// `apps/myapp.dap` → `myapp`, `bundle.tar.gz` → `bundle.tar`, and a
/// dotfile such as `.myapp` has an empty name.
#[must_use]
pub fn application_name(path: &Path) -> String {
    let base = path
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    match base.rfind('.') {
        Some(dot) => base[..dot].to_string(),
        None => base,
    }
}
