// file: src/probes/mod.rs
// version: 1.0.0
// guid: 72fc536c-2093-4931-9e46-e153637d4bad

//! Probes reading local machine state
//!
//! Each probe reads one piece of operating-system state and returns a typed
//! value, or an empty/default value where absence is expected.

pub mod authorized_keys;
pub mod hostname;
pub mod key_files;
pub mod sshd;

pub use authorized_keys::{get_authorized_keys_lines, get_ssh_import_id_entries, SshImportIdEntry};
pub use hostname::get_hostname;
pub use key_files::{get_private_ssh_keys, get_public_ssh_keys, SshKeyFile};
pub use sshd::is_root_login_enabled;
