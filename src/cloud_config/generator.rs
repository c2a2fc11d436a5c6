// file: src/cloud_config/generator.rs
// version: 1.0.0
// guid: 853db7d9-dffc-496b-b3d3-36fce194202c

use super::{BaseConfig, CloudConfigDocument, HostnameConfig, SshConfig};
use crate::config::ProbeContext;
use crate::error::ExportError;
use crate::logging::with_operation_span;
use crate::Result;
use tracing::{debug, info};

/// Gathers every registered config record and merges their fragments
pub struct CloudConfigGenerator {
    records: Vec<Box<dyn BaseConfig>>,
    gathered: bool,
}

impl CloudConfigGenerator {
    /// Create a generator with no records
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            gathered: false,
        }
    }

    /// Create a generator with the hostname and SSH records
    ///
    /// `owner` replaces the `$USER` placeholder on exported key files.
    pub fn with_default_records(owner: Option<&str>) -> Self {
        let ssh = match owner {
            Some(owner) => SshConfig::with_owner(owner),
            None => SshConfig::new(),
        };

        Self::new()
            .with_record(Box::new(HostnameConfig::new()))
            .with_record(Box::new(ssh))
    }

    /// Register another config record; fragments merge in registration order
    pub fn with_record(mut self, record: Box<dyn BaseConfig>) -> Self {
        self.records.push(record);
        self
    }

    /// Gather every record from the local machine, once
    ///
    /// A failed gather is final: later calls are rejected like a second call
    /// after success, so no record is ever gathered twice.
    pub fn gather(&mut self, ctx: &ProbeContext) -> Result<()> {
        if self.gathered {
            return Err(ExportError::AlreadyGathered);
        }
        self.gathered = true;

        for record in &mut self.records {
            let name = record.name();
            with_operation_span(name, || record.gather(ctx))?;
            debug!("Gathered {} record", name);
        }

        info!("Gathered {} config records", self.records.len());
        Ok(())
    }

    /// Merge every record's fragment into one document
    pub fn generate(&self) -> CloudConfigDocument {
        let mut document = CloudConfigDocument::new();
        for record in &self.records {
            document.merge(record.generate_cloud_config());
        }
        document
    }

    /// Generate the document as cloud-config YAML
    pub fn to_yaml(&self) -> Result<String> {
        self.generate().to_yaml()
    }
}

impl Default for CloudConfigGenerator {
    fn default() -> Self {
        Self::new()
    }
}
