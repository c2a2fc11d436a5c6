// file: src/config/mod.rs
// version: 1.0.0
// guid: 72f8f096-1ded-48c4-a877-0150bfeb7fd2

//! Configuration module for the exporter
//!
//! Handles export settings (from a YAML file and CLI overrides) and resolves
//! them into the absolute paths the probes read.

pub mod loader;

use crate::error::ExportError;
use crate::probes::key_files::{CLOUD_INIT_PUBLIC_KEY_TYPES, DEFAULT_PUBLIC_KEY_TYPES};
use crate::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default location of the per-user SSH directory
pub const DEFAULT_SSH_DIR: &str = "~/.ssh";

/// Default location of the SSH daemon configuration
pub const DEFAULT_SSHD_CONFIG: &str = "/etc/ssh/sshd_config";

/// File name of the authorized keys file inside the SSH directory
pub const AUTHORIZED_KEYS_FILE: &str = "authorized_keys";

/// Settings controlling what gets exported and where it is read from
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Per-user SSH directory (a leading `~` is expanded)
    pub ssh_dir: PathBuf,
    /// Authorized keys file (defaults to `<ssh_dir>/authorized_keys`)
    pub authorized_keys: Option<PathBuf>,
    /// SSH daemon configuration file
    pub sshd_config: PathBuf,
    /// Key type prefixes accepted by the public key probe
    pub public_key_types: Vec<String>,
    /// Also export private keys as 0600 write_files entries
    pub include_private_keys: bool,
    /// Owner written on write_files entries (defaults to the `$USER` placeholder)
    pub owner: Option<String>,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            ssh_dir: PathBuf::from(DEFAULT_SSH_DIR),
            authorized_keys: None,
            sshd_config: PathBuf::from(DEFAULT_SSHD_CONFIG),
            public_key_types: DEFAULT_PUBLIC_KEY_TYPES
                .iter()
                .map(|t| t.to_string())
                .collect(),
            include_private_keys: false,
            owner: None,
        }
    }
}

impl ExportSettings {
    /// Validate the export settings
    pub fn validate(&self) -> Result<()> {
        if self.public_key_types.is_empty() {
            return Err(ExportError::validation(
                "At least one public key type must be enabled",
            ));
        }

        let unsupported: Vec<&str> = self
            .public_key_types
            .iter()
            .map(String::as_str)
            .filter(|t| !CLOUD_INIT_PUBLIC_KEY_TYPES.contains(t))
            .collect();
        if !unsupported.is_empty() {
            return Err(ExportError::validation(format!(
                "Unsupported public key types: {}",
                unsupported.join(", ")
            )));
        }

        if let Some(owner) = &self.owner {
            if owner.trim().is_empty() {
                return Err(ExportError::validation("Owner cannot be empty"));
            }
        }

        Ok(())
    }

    /// Resolve the settings into the context handed to config records
    pub fn probe_context(&self) -> Result<ProbeContext> {
        let ssh_dir = expand_home(&self.ssh_dir)?;
        let authorized_keys = match &self.authorized_keys {
            Some(path) => expand_home(path)?,
            None => ssh_dir.join(AUTHORIZED_KEYS_FILE),
        };

        Ok(ProbeContext {
            ssh_dir,
            authorized_keys,
            sshd_config: expand_home(&self.sshd_config)?,
            public_key_types: self.public_key_types.clone(),
            include_private_keys: self.include_private_keys,
        })
    }
}

/// Resolved inputs for a single gather pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeContext {
    pub ssh_dir: PathBuf,
    pub authorized_keys: PathBuf,
    pub sshd_config: PathBuf,
    pub public_key_types: Vec<String>,
    pub include_private_keys: bool,
}

impl ProbeContext {
    /// Build a context rooted at an arbitrary SSH directory
    pub fn for_ssh_dir(ssh_dir: impl Into<PathBuf>, sshd_config: impl Into<PathBuf>) -> Self {
        let ssh_dir = ssh_dir.into();
        Self {
            authorized_keys: ssh_dir.join(AUTHORIZED_KEYS_FILE),
            ssh_dir,
            sshd_config: sshd_config.into(),
            public_key_types: DEFAULT_PUBLIC_KEY_TYPES
                .iter()
                .map(|t| t.to_string())
                .collect(),
            include_private_keys: false,
        }
    }
}

/// Expand a leading `~` component to the current user's home directory
pub fn expand_home(path: &Path) -> Result<PathBuf> {
    match path.strip_prefix("~") {
        Ok(rest) => {
            let home = dirs::home_dir().ok_or(ExportError::HomeDirectoryUnavailable)?;
            Ok(home.join(rest))
        }
        Err(_) => Ok(path.to_path_buf()),
    }
}
