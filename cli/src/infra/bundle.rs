//! Tar bundle extraction — implements `BundleExtractor`.
//!
//! Bundles are plain tar, or gzip-compressed tar detected by magic bytes.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;

use crate::application::ports::BundleExtractor;
use crate::domain::{BundleError, COMPOSE_ENTRY, METADATA_ENTRY, Metadata};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Production `BundleExtractor` backed by the `tar` crate.
pub struct TarBundle;

impl BundleExtractor for TarBundle {
    fn extract(&self, bundle: &Path, dest: &Path) -> Result<Metadata, BundleError> {
        let file = File::open(bundle).map_err(|source| BundleError::Read {
            path: bundle.to_path_buf(),
            source,
        })?;
        let mut reader = BufReader::new(file);
        let gzipped = reader
            .fill_buf()
            .map_err(|e| BundleError::stream("reading bundle header", e))?
            .starts_with(&GZIP_MAGIC);

        if gzipped {
            extract_entries(GzDecoder::new(reader), dest)
        } else {
            extract_entries(reader, dest)
        }
    }
}

/// Walk the archive once, writing the compose descriptor into `dest` and
/// decoding the metadata entry. Other entries are skipped.
///
/// Stops at the first failure; anything already written stays in `dest`.
///
/// # Errors
///
/// Returns [`BundleError::Stream`] for read/write failures and
/// [`BundleError::Decode`] for malformed metadata.
pub fn extract_entries(reader: impl Read, dest: &Path) -> Result<Metadata, BundleError> {
    let mut archive = tar::Archive::new(reader);
    let mut metadata = Metadata::default();

    let entries = archive
        .entries()
        .map_err(|e| BundleError::stream("reading bundle entries", e))?;
    for entry in entries {
        let mut entry = entry.map_err(|e| BundleError::stream("reading bundle entry", e))?;
        let path = entry
            .path()
            .map_err(|e| BundleError::stream("reading bundle entry name", e))?
            .into_owned();
        let name = path.strip_prefix(".").unwrap_or(path.as_path());

        if name == Path::new(COMPOSE_ENTRY) {
            let target = dest.join(COMPOSE_ENTRY);
            let mut out = File::create(&target).map_err(|e| {
                BundleError::stream(format!("cannot create {}", target.display()), e)
            })?;
            let bytes = std::io::copy(&mut entry, &mut out).map_err(|e| {
                BundleError::stream(format!("cannot write {}", target.display()), e)
            })?;
            tracing::debug!(path = %target.display(), bytes, "extracted compose descriptor");
        } else if name == Path::new(METADATA_ENTRY) {
            metadata = serde_yaml::from_reader(&mut entry).map_err(BundleError::Decode)?;
            tracing::debug!(?metadata, "decoded application metadata");
        }
    }
    Ok(metadata)
}
