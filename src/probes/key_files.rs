// file: src/probes/key_files.rs
// version: 1.0.0
// guid: 41eb90f6-6a41-48c6-85d0-c71933528215

//! SSH key file probes
//!
//! Unlike the authorized_keys probes, a missing SSH directory is a hard
//! error here: [`ExportError::SshDirectoryNotFound`].

use crate::error::ExportError;
use crate::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Public key types cloud-init accepts
pub const CLOUD_INIT_PUBLIC_KEY_TYPES: &[&str] = &[
    "ecdsa-sha2-nistp256-cert-v01@openssh.com",
    "ecdsa-sha2-nistp256",
    "ecdsa-sha2-nistp384-cert-v01@openssh.com",
    "ecdsa-sha2-nistp384",
    "ecdsa-sha2-nistp521-cert-v01@openssh.com",
    "ecdsa-sha2-nistp521",
    "sk-ecdsa-sha2-nistp256-cert-v01@openssh.com",
    "sk-ecdsa-sha2-nistp256@openssh.com",
    "sk-ssh-ed25519-cert-v01@openssh.com",
    "sk-ssh-ed25519@openssh.com",
    "ssh-ed25519-cert-v01@openssh.com",
    "ssh-ed25519",
    "ssh-rsa-cert-v01@openssh.com",
    "ssh-rsa",
    "ssh-xmss-cert-v01@openssh.com",
    "ssh-xmss@openssh.com",
];

/// Public key types exported unless configured otherwise
pub const DEFAULT_PUBLIC_KEY_TYPES: &[&str] = &["ssh-rsa"];

/// First-line markers identifying a private key file
pub const PRIVATE_KEY_MARKERS: &[&str] = &["BEGIN RSA PRIVATE KEY", "BEGIN OPENSSH PRIVATE KEY"];

/// A key file found in the SSH directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SshKeyFile {
    /// Absolute path of the key file
    pub path: PathBuf,
    /// File contents
    pub content: String,
    /// Whether this is a public key
    pub public: bool,
}

/// Read every regular, UTF-8 file directly inside `ssh_dir`, in listing order
fn read_ssh_dir_files(ssh_dir: &Path) -> Result<Vec<(PathBuf, String)>> {
    let entries = match fs::read_dir(ssh_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ExportError::ssh_directory_not_found(ssh_dir));
        }
        Err(e) => return Err(e.into()),
    };

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }

        match String::from_utf8(fs::read(&path)?) {
            Ok(content) => files.push((path, content)),
            Err(_) => debug!("Skipping non-text file {}", path.display()),
        }
    }

    Ok(files)
}

/// Collect the public keys in `ssh_dir` whose type is in `key_types`
pub fn get_public_ssh_keys<S: AsRef<str>>(ssh_dir: &Path, key_types: &[S]) -> Result<Vec<SshKeyFile>> {
    let public_keys: Vec<SshKeyFile> = read_ssh_dir_files(ssh_dir)?
        .into_iter()
        .filter_map(|(path, content)| {
            let content = content.trim();
            key_types
                .iter()
                .any(|key_type| content.starts_with(key_type.as_ref()))
                .then(|| SshKeyFile {
                    path,
                    content: content.to_string(),
                    public: true,
                })
        })
        .collect();

    debug!("Found {} public keys", public_keys.len());
    Ok(public_keys)
}

/// Collect the private keys in `ssh_dir`, identified by their first line
pub fn get_private_ssh_keys(ssh_dir: &Path) -> Result<Vec<SshKeyFile>> {
    let private_keys: Vec<SshKeyFile> = read_ssh_dir_files(ssh_dir)?
        .into_iter()
        .filter(|(_, content)| {
            let first_line = content.lines().next().unwrap_or_default();
            PRIVATE_KEY_MARKERS
                .iter()
                .any(|marker| first_line.contains(marker))
        })
        .map(|(path, content)| SshKeyFile {
            path,
            content,
            public: false,
        })
        .collect();

    debug!("Found {} private keys", private_keys.len());
    Ok(private_keys)
}
