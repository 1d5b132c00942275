//! Domain layer — pure types, decoding rules and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod address;
pub mod config;
pub mod error;
pub mod metadata;

pub use address::probe_address;
pub use config::DapConfig;
pub use error::{BundleError, LaunchError};
pub use metadata::{COMPOSE_ENTRY, METADATA_ENTRY, Metadata, application_name};
