// file: src/probes/sshd.rs
// version: 1.0.0
// guid: 8c864478-9023-4ef4-8670-6c4357418fb1

//! SSH daemon policy probe

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// Start-anchored, case-sensitive, not end-anchored. Commented directives never match.
static PERMIT_ROOT_LOGIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"(?m)^[ \t]*PermitRootLogin[ \t]+yes").expect("valid regex")
});

/// Check whether sshd_config permits remote root login
///
/// Every failure to answer (unreadable file, directive absent) reports
/// `false` and logs a warning.
pub fn is_root_login_enabled(sshd_config: &Path) -> bool {
    let content = match std::fs::read_to_string(sshd_config) {
        Ok(content) => content,
        Err(e) => {
            warn!(
                "Could not determine root login status from {}: {}",
                sshd_config.display(),
                e
            );
            return false;
        }
    };

    match PERMIT_ROOT_LOGIN_RE.find(&content) {
        Some(found) => {
            debug!("Root login status line found: {}", found.as_str().trim());
            true
        }
        None => {
            warn!("Could not determine root login status: directive not set to yes");
            false
        }
    }
}
