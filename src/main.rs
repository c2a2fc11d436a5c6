// file: src/main.rs
// version: 1.0.0
// guid: 032c93d6-e4e6-444a-a4be-ab4d9de5dcd2

//! cloud-config-export - Main entry point

use clap::Parser;
use cloud_config_export::{
    cli::{
        args::{Cli, Commands},
        commands::{generate_command, probe_command},
    },
    logging::init_logger,
};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logger(cli.verbose, cli.quiet)?;

    match cli.command {
        Commands::Generate {
            source,
            include_private_keys,
            owner,
            format,
            output,
        } => generate_command(&source, include_private_keys, owner, format, output),
        Commands::Probe { probe, source } => probe_command(probe, &source),
    }
}
