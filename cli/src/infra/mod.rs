//! Infrastructure layer — concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: archive reading, process
//! execution, network probing, browser launch, configuration loading and
//! the working directory.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` are forbidden.

pub mod browser;
pub mod bundle;
pub mod command_runner;
pub mod config;
pub mod network;
pub mod workdir;
