//! Application layer — port trait definitions and use-case orchestration.
//!
//! This module depends only on `crate::domain` — never on `crate::infra`,
//! `crate::commands`, or the terminal.

pub mod ports;
pub mod services;
pub mod signal;

pub use ports::{BundleExtractor, CommandRunner, ConfigStore, ReadinessProbe, UrlOpener};
pub use signal::StopSignal;
