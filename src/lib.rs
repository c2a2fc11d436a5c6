// file: src/lib.rs
// version: 1.0.0
// guid: c38253f3-fc7e-45ef-a61b-577ca0e161f1

//! # cloud-config-export
//!
//! Reads a running machine's hostname and SSH posture (root login policy,
//! authorized keys, ssh-import-id entries, public key files) and emits a
//! cloud-config document that recreates it on a freshly booted instance.
//!
//! Probes in [`probes`] read local state, the records in [`cloud_config`]
//! turn it into fragments, and [`cloud_config::CloudConfigGenerator`] merges
//! the fragments into one document.

pub mod cli;
pub mod cloud_config;
pub mod config;
pub mod error;
pub mod logging;
pub mod probes;

pub use error::{ExportError, Result};

/// Version information for the exporter
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
