// file: src/cli/commands.rs
// version: 1.0.0
// guid: e7f93bd3-7237-45f8-8738-d08518f13d72

//! Command implementations for the CLI

use super::args::{OutputFormat, ProbeKind, SourceArgs};
use crate::{
    cloud_config::CloudConfigGenerator,
    config::{loader::ConfigLoader, ExportSettings},
    probes, Result,
};
use anyhow::Context;
use std::path::PathBuf;
use tracing::info;

/// Build settings from the optional settings file and the CLI overrides
pub fn load_settings(source: &SourceArgs) -> Result<ExportSettings> {
    let mut settings = match &source.config {
        Some(path) => ConfigLoader::new().load_settings(path)?,
        None => ExportSettings::default(),
    };

    source.apply(&mut settings);
    settings.validate()?;
    Ok(settings)
}

/// Generate the cloud-config document for this machine
pub fn generate_command(
    source: &SourceArgs,
    include_private_keys: bool,
    owner: Option<String>,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let mut settings = load_settings(source)?;
    if include_private_keys {
        settings.include_private_keys = true;
    }
    if owner.is_some() {
        settings.owner = owner;
    }
    settings.validate()?;

    let ctx = settings.probe_context()?;
    info!("Reading SSH state from {}", ctx.ssh_dir.display());

    let mut generator = CloudConfigGenerator::with_default_records(settings.owner.as_deref());
    generator.gather(&ctx)?;
    let document = generator.generate();

    let rendered = match format {
        OutputFormat::Yaml => document.to_yaml()?,
        OutputFormat::Json => document.to_json()?,
    };

    match output {
        Some(path) => {
            std::fs::write(&path, rendered)
                .with_context(|| format!("Failed to write document to: {}", path.display()))?;
            info!("Cloud config written to: {}", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

/// Run one probe and print its result
///
/// Key probes print file paths only, never key material.
pub fn probe_command(probe: ProbeKind, source: &SourceArgs) -> anyhow::Result<()> {
    let settings = load_settings(source)?;
    let ctx = settings.probe_context()?;

    match probe {
        ProbeKind::Hostname => match probes::get_hostname() {
            Some(hostname) => println!("{}", hostname),
            None => anyhow::bail!("The operating system did not report a hostname"),
        },
        ProbeKind::ImportIds => {
            for entry in probes::get_ssh_import_id_entries(&ctx.authorized_keys)? {
                println!("{}", entry);
            }
        }
        ProbeKind::AuthorizedKeys => {
            for line in probes::get_authorized_keys_lines(&ctx.authorized_keys)? {
                println!("{}", line);
            }
        }
        ProbeKind::RootLogin => {
            let enabled = probes::is_root_login_enabled(&ctx.sshd_config);
            println!("{}", if enabled { "enabled" } else { "disabled" });
        }
        ProbeKind::PublicKeys => {
            let keys = probes::get_public_ssh_keys(&ctx.ssh_dir, ctx.public_key_types.as_slice())?;
            for key in keys {
                println!("{}", key.path.display());
            }
        }
        ProbeKind::PrivateKeys => {
            for key in probes::get_private_ssh_keys(&ctx.ssh_dir)? {
                println!("{}", key.path.display());
            }
        }
    }

    Ok(())
}
