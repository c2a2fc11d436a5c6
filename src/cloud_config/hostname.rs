// file: src/cloud_config/hostname.rs
// version: 1.0.0
// guid: 2b168d3d-d495-4c29-b41e-fb21d6391850

use super::{key, BaseConfig};
use crate::config::ProbeContext;
use crate::probes::get_hostname;
use crate::Result;
use serde_yaml::{Mapping, Value};
use tracing::debug;

/// Host name of the machine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostnameConfig {
    pub hostname: Option<String>,
}

impl HostnameConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BaseConfig for HostnameConfig {
    fn name(&self) -> &'static str {
        "hostname"
    }

    fn gather(&mut self, _ctx: &ProbeContext) -> Result<()> {
        debug!("Gathering HostnameConfig");
        self.hostname = get_hostname();
        Ok(())
    }

    fn generate_cloud_config(&self) -> Mapping {
        let mut fragment = Mapping::new();
        fragment.insert(
            key("hostname"),
            self.hostname.clone().map_or(Value::Null, Value::String),
        );
        fragment
    }
}
