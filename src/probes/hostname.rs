// file: src/probes/hostname.rs
// version: 1.0.0
// guid: 0e834471-4ddd-4198-bbf5-cbb213721957

//! Host name probe

use sysinfo::System;
use tracing::{debug, warn};

/// Get the host name the operating system reports for this machine
pub fn get_hostname() -> Option<String> {
    match System::host_name() {
        Some(hostname) => {
            debug!("Found hostname: {}", hostname);
            Some(hostname)
        }
        None => {
            warn!("Operating system did not report a hostname");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_hostname_is_stable() {
        let first = get_hostname();
        let second = get_hostname();
        assert_eq!(first, second);
    }

    #[test]
    fn test_get_hostname_not_blank() {
        if let Some(hostname) = get_hostname() {
            assert!(!hostname.trim().is_empty());
        }
    }
}
