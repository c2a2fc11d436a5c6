// file: src/probes/authorized_keys.rs
// version: 1.0.0
// guid: 6fc165cd-784b-41bf-8eda-7a2e6e976622

//! Authorized keys probes
//!
//! Both probes treat a missing authorized_keys file as "no keys": they log a
//! warning and return an empty list. Any other read failure is an error.

use crate::error::ExportError;
use crate::Result;
use std::fmt;
use std::io::ErrorKind;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

/// Marker comment appended by ssh-import-id to the keys it installs
pub const SSH_IMPORT_ID_MARKER: &str = "ssh-import-id";

/// A key imported from a key server, e.g. `lp:alice` or `gh:bob`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SshImportIdEntry {
    /// Key server identifier, usually "lp" or "gh"
    pub key_server: String,
    /// Username of the key owner on the key server
    pub username: String,
}

impl SshImportIdEntry {
    pub fn new(key_server: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            key_server: key_server.into(),
            username: username.into(),
        }
    }
}

impl fmt::Display for SshImportIdEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key_server, self.username)
    }
}

impl FromStr for SshImportIdEntry {
    type Err = ExportError;

    /// Parse `<key_server>:<username>`; exactly one colon, both sides non-empty
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut parts = s.split(':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(server), Some(user), None) if !server.is_empty() && !user.is_empty() => {
                Ok(Self::new(server, user))
            }
            _ => Err(ExportError::validation(format!(
                "Malformed ssh-import-id token: {}",
                s
            ))),
        }
    }
}

/// Read the authorized_keys file, or `None` when it does not exist
fn read_authorized_keys(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("No authorized_keys file found at {}", path.display());
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Collect the ssh-import-id entries recorded in the authorized_keys file
///
/// Lines whose last token is not a valid `server:user` pair are skipped
/// with a warning.
pub fn get_ssh_import_id_entries(path: &Path) -> Result<Vec<SshImportIdEntry>> {
    let Some(content) = read_authorized_keys(path)? else {
        return Ok(Vec::new());
    };

    let mut entries = Vec::new();
    for (index, line) in content.lines().enumerate() {
        if !line.contains(SSH_IMPORT_ID_MARKER) {
            continue;
        }

        let token = line.split_whitespace().last().unwrap_or_default();
        match token.parse::<SshImportIdEntry>() {
            Ok(entry) => entries.push(entry),
            Err(e) => warn!("Skipping authorized_keys line {}: {}", index + 1, e),
        }
    }

    debug!("Found {} ssh-import-id entries", entries.len());
    Ok(entries)
}

/// Collect every key line of the authorized_keys file, trimmed, in file order
///
/// Blank lines and `#` comments are dropped.
pub fn get_authorized_keys_lines(path: &Path) -> Result<Vec<String>> {
    let Some(content) = read_authorized_keys(path)? else {
        return Ok(Vec::new());
    };

    let lines: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();

    debug!("Found {} authorized key lines", lines.len());
    Ok(lines)
}
