//! Config loading.

use super::model::Config;
use crate::error::{RelnotesError, Result};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// A file that cannot be read or parsed is fatal: the caller gets a
    /// `RelnotesError::Config` and nothing downstream runs.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            RelnotesError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| RelnotesError::Config(format!("failed to parse config YAML: {}", e)))
    }

    /// Number of sections that query the issue tracker.
    pub fn query_section_count(&self) -> usize {
        self.sections
            .iter()
            .filter(|s| matches!(s, super::SectionSpec::Query(_)))
            .count()
    }
}
