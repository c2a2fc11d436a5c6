// file: src/config/loader.rs
// version: 1.0.0
// guid: cd248271-a15e-4562-8ab9-087d43ec809a

//! Settings file loading and environment variable substitution

use super::ExportSettings;
use crate::error::ExportError;
use crate::Result;
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Settings loader with environment variable substitution
pub struct ConfigLoader {
    env_vars: HashMap<String, String>,
}

impl ConfigLoader {
    /// Create a new config loader
    pub fn new() -> Self {
        Self {
            env_vars: std::env::vars().collect(),
        }
    }

    /// Load export settings from a YAML file
    pub fn load_settings<P: AsRef<Path>>(&self, path: P) -> Result<ExportSettings> {
        let content = fs::read_to_string(&path).map_err(|e| {
            ExportError::config(format!(
                "Failed to read settings file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let settings = self.parse_settings(&content)?;
        debug!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Parse export settings from YAML content
    pub fn parse_settings(&self, content: &str) -> Result<ExportSettings> {
        let expanded = self.expand_env_vars(content)?;
        // An empty document means "all defaults".
        let settings: ExportSettings = if expanded.trim().is_empty() {
            ExportSettings::default()
        } else {
            serde_yaml::from_str(&expanded)?
        };

        settings.validate()?;

        Ok(settings)
    }

    /// Expand `${VAR}` references in settings content
    ///
    /// A bare `$USER` is not a reference and passes through untouched.
    fn expand_env_vars(&self, content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| ExportError::config(format!("Invalid regex pattern: {}", e)))?;

        let mut result = content.to_string();
        let mut missing_vars = Vec::new();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];

            if let Some(value) = self.env_vars.get(var_name) {
                result = result.replace(placeholder, value);
            } else {
                missing_vars.push(var_name.to_string());
            }
        }

        if !missing_vars.is_empty() {
            return Err(ExportError::config(format!(
                "Missing environment variables: {}",
                missing_vars.join(", ")
            )));
        }

        Ok(result)
    }

    /// Set environment variable for substitution
    pub fn set_env_var(&mut self, key: String, value: String) {
        self.env_vars.insert(key, value);
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
