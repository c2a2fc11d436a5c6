// file: src/logging/mod.rs
// version: 1.0.0
// guid: f38005ac-0c5d-4269-8196-a34ce8925c14

//! Logging system for the exporter

pub mod logger;

pub use logger::{init_logger, with_operation_span};
