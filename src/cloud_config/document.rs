// file: src/cloud_config/document.rs
// version: 1.0.0
// guid: 3961ea26-4ed9-4194-ada9-40bae1d01251

//! Merged cloud-config document

use crate::Result;
use serde_yaml::{Mapping, Value};
use tracing::warn;

/// First line cloud-init requires on user-data in cloud-config format
pub const CLOUD_CONFIG_HEADER: &str = "#cloud-config";

/// A cloud-config document assembled from record fragments
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CloudConfigDocument {
    root: Mapping,
}

impl CloudConfigDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a fragment into the document
    ///
    /// New keys are appended in fragment order. On a repeated key, sequences
    /// are concatenated, mappings are merged recursively and anything else is
    /// replaced by the fragment's value.
    pub fn merge(&mut self, fragment: Mapping) {
        merge_mapping(&mut self.root, fragment, "");
    }

    /// Top-level mapping of the document
    pub fn as_mapping(&self) -> &Mapping {
        &self.root
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    /// Render the document as cloud-config YAML, header included
    pub fn to_yaml(&self) -> Result<String> {
        let body = serde_yaml::to_string(&self.root)?;
        Ok(format!("{}\n{}", CLOUD_CONFIG_HEADER, body))
    }

    /// Render the document as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.root)?)
    }
}

fn merge_mapping(target: &mut Mapping, fragment: Mapping, parent: &str) {
    for (key, value) in fragment {
        let path = match key.as_str() {
            Some(name) if parent.is_empty() => name.to_string(),
            Some(name) => format!("{}.{}", parent, name),
            None => parent.to_string(),
        };

        match (target.get_mut(&key), value) {
            (None, value) => {
                target.insert(key, value);
            }
            (Some(Value::Sequence(existing)), Value::Sequence(incoming)) => {
                existing.extend(incoming);
            }
            (Some(Value::Mapping(existing)), Value::Mapping(incoming)) => {
                merge_mapping(existing, incoming, &path);
            }
            (Some(existing), value) => {
                warn!("Key '{}' set by more than one config record, keeping the later value", path);
                *existing = value;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(yaml: &str) -> Mapping {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_merge_keeps_fragment_order() {
        let mut document = CloudConfigDocument::new();
        document.merge(mapping("hostname: web-01\n"));
        document.merge(mapping("ssh_import_id: []\ndisable_root: 'False'\n"));

        let keys: Vec<_> = document
            .as_mapping()
            .keys()
            .filter_map(Value::as_str)
            .collect();
        assert_eq!(keys, vec!["hostname", "ssh_import_id", "disable_root"]);
    }

    #[test]
    fn test_merge_concatenates_sequences() {
        let mut document = CloudConfigDocument::new();
        document.merge(mapping("write_files:\n  - path: /a\n"));
        document.merge(mapping("write_files:\n  - path: /b\n"));

        let files = document.get("write_files").unwrap().as_sequence().unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[1]["path"], Value::String("/b".to_string()));
    }

    #[test]
    fn test_merge_nested_mappings() {
        let mut document = CloudConfigDocument::new();
        document.merge(mapping("ssh:\n  ssh_authorized_keys: [a]\n"));
        document.merge(mapping("ssh:\n  ssh_authorized_keys: [b]\n  emit_keys_to_console: false\n"));

        let ssh = document.get("ssh").unwrap();
        assert_eq!(ssh["ssh_authorized_keys"].as_sequence().unwrap().len(), 2);
        assert_eq!(ssh["emit_keys_to_console"], Value::Bool(false));
    }

    #[test]
    fn test_merge_scalar_conflict_later_wins() {
        let mut document = CloudConfigDocument::new();
        document.merge(mapping("hostname: first\n"));
        document.merge(mapping("hostname: second\n"));

        assert_eq!(document.get("hostname"), Some(&Value::String("second".to_string())));
    }

    #[test]
    fn test_to_yaml_has_header_and_string_booleans() {
        let mut document = CloudConfigDocument::new();
        document.merge(mapping("hostname: web-01\n"));
        let mut fragment = Mapping::new();
        fragment.insert(
            Value::String("disable_root".to_string()),
            Value::String("True".to_string()),
        );
        document.merge(fragment);

        let yaml = document.to_yaml().unwrap();

        assert!(yaml.starts_with("#cloud-config\n"));
        let parsed: Value = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed["hostname"], Value::String("web-01".to_string()));
        assert_eq!(parsed["disable_root"], Value::String("True".to_string()));
    }

    #[test]
    fn test_to_json() {
        let mut document = CloudConfigDocument::new();
        document.merge(mapping("hostname: web-01\nssh_import_id: [lp:alice]\n"));

        let json: serde_json::Value = serde_json::from_str(&document.to_json().unwrap()).unwrap();

        assert_eq!(json["hostname"], "web-01");
        assert_eq!(json["ssh_import_id"][0], "lp:alice");
    }
}
