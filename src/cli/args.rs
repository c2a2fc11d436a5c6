// file: src/cli/args.rs
// version: 1.0.0
// guid: 193dc673-a434-4178-8c46-e2728419f4a2

//! Command line argument definitions

use crate::config::ExportSettings;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cloud-config-export")]
#[command(about = "Export this machine's hostname and SSH posture as a cloud-config document")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a cloud-config document for this machine
    Generate {
        #[command(flatten)]
        source: SourceArgs,

        #[arg(long, help = "Also export private keys as 0600 write_files entries")]
        include_private_keys: bool,

        #[arg(long, help = "Owner for exported key files instead of the $USER placeholder")]
        owner: Option<String>,

        #[arg(short, long, value_enum, default_value = "yaml")]
        format: OutputFormat,

        #[arg(short, long, help = "Write the document to a file instead of stdout")]
        output: Option<PathBuf>,
    },

    /// Run a single probe and print what it found
    Probe {
        #[arg(value_enum)]
        probe: ProbeKind,

        #[command(flatten)]
        source: SourceArgs,
    },
}

/// Where probes read from
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    #[arg(
        short,
        long,
        env = "CLOUD_CONFIG_EXPORT_CONFIG",
        help = "Settings file (YAML)"
    )]
    pub config: Option<PathBuf>,

    #[arg(long, help = "SSH directory to read keys from [default: ~/.ssh]")]
    pub ssh_dir: Option<PathBuf>,

    #[arg(long, help = "authorized_keys file [default: <ssh-dir>/authorized_keys]")]
    pub authorized_keys: Option<PathBuf>,

    #[arg(long, help = "SSH daemon configuration [default: /etc/ssh/sshd_config]")]
    pub sshd_config: Option<PathBuf>,

    #[arg(long = "key-type", value_name = "TYPE", help = "Public key type to export (repeatable)")]
    pub key_types: Vec<String>,
}

impl SourceArgs {
    /// Override settings with the flags that were given
    pub fn apply(&self, settings: &mut ExportSettings) {
        if let Some(ssh_dir) = &self.ssh_dir {
            settings.ssh_dir = ssh_dir.clone();
        }
        if let Some(authorized_keys) = &self.authorized_keys {
            settings.authorized_keys = Some(authorized_keys.clone());
        }
        if let Some(sshd_config) = &self.sshd_config {
            settings.sshd_config = sshd_config.clone();
        }
        if !self.key_types.is_empty() {
            settings.public_key_types = self.key_types.clone();
        }
    }
}

/// Output format for the generated document
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Yaml,
    Json,
}

/// Probes runnable on their own
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProbeKind {
    Hostname,
    ImportIds,
    AuthorizedKeys,
    RootLogin,
    PublicKeys,
    PrivateKeys,
}
