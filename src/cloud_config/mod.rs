// file: src/cloud_config/mod.rs
// version: 1.0.0
// guid: aa3ed287-7293-4d06-8915-c5efe63e4e97

//! Cloud-config records
//!
//! Each record gathers the probe results for one configuration domain and
//! projects them into a fragment of the cloud-config document. Fragments are
//! merged by the [`generator::CloudConfigGenerator`].

pub mod document;
pub mod generator;
pub mod hostname;
pub mod ssh;

pub use document::CloudConfigDocument;
pub use generator::CloudConfigGenerator;
pub use hostname::HostnameConfig;
pub use ssh::SshConfig;

use crate::config::ProbeContext;
use crate::Result;
use serde_yaml::{Mapping, Value};

/// Contract shared by every config record
pub trait BaseConfig {
    /// Name used in logs and errors
    fn name(&self) -> &'static str;

    /// Populate the record from the local machine
    fn gather(&mut self, ctx: &ProbeContext) -> Result<()>;

    /// Project the gathered fields into a cloud-config fragment
    ///
    /// Must not touch the machine; repeated calls return equal fragments.
    fn generate_cloud_config(&self) -> Mapping;
}

/// Render a boolean the way cloud-config documents historically spell it
pub fn cloud_config_bool(value: bool) -> Value {
    Value::String(if value { "True" } else { "False" }.to_string())
}

pub(crate) fn key(name: &str) -> Value {
    Value::String(name.to_string())
}
