// file: src/cli/mod.rs
// version: 1.0.0
// guid: 3a6d7aef-637c-44a0-9ab7-d79ae1264322

//! Command line interface for the exporter

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::*;
