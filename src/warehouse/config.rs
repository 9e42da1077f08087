//! Warehouse configuration
//!
//! Passed explicitly to a provider; there is no process-wide storage folder.
//! Loadable from a JSON file:
//!
//! ```json
//! { "storage_folder": "./CrawlingStorage", "require_identifier": true }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::errors::{WarehouseError, WarehouseResult};

/// Configuration for a filesystem warehouse
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseConfig {
    /// Folder holding one file per record (required)
    pub storage_folder: PathBuf,

    /// Extension of record files, without dot (default "crawl")
    #[serde(default = "default_file_extension")]
    pub file_extension: String,

    /// Create the storage folder on first store (default true)
    #[serde(default = "default_true")]
    pub create_folder: bool,

    /// Reject records without natural id instead of dropping them (default false)
    #[serde(default)]
    pub require_identifier: bool,

    /// Emit structured log events (default true)
    #[serde(default = "default_true")]
    pub log_events: bool,
}

fn default_file_extension() -> String {
    "crawl".to_string()
}

fn default_true() -> bool {
    true
}

impl WarehouseConfig {
    /// Defaults for the given storage folder
    pub fn new(storage_folder: impl Into<PathBuf>) -> Self {
        Self {
            storage_folder: storage_folder.into(),
            file_extension: default_file_extension(),
            create_folder: true,
            require_identifier: false,
            log_events: true,
        }
    }

    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> WarehouseResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| WarehouseError::Config(format!("Failed to read config: {}", e)))?;

        let config: WarehouseConfig = serde_json::from_str(&content)
            .map_err(|e| WarehouseError::Config(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate field values
    pub fn validate(&self) -> WarehouseResult<()> {
        if self.storage_folder.as_os_str().is_empty() {
            return Err(WarehouseError::Config("storage_folder must not be empty".into()));
        }

        if self.file_extension.is_empty()
            || self
                .file_extension
                .chars()
                .any(|c| matches!(c, '.' | '/' | '\\') || c.is_control())
        {
            return Err(WarehouseError::Config(format!(
                "Invalid file_extension: '{}'",
                self.file_extension
            )));
        }

        Ok(())
    }

    /// File name for a natural id
    pub fn file_name(&self, natural_id: &str) -> String {
        format!("{}.{}", natural_id, self.file_extension)
    }

    /// Returns true if `name` is a record file
    pub fn is_record_file(&self, name: &str) -> bool {
        name.strip_suffix(&self.file_extension)
            .and_then(|stem| stem.strip_suffix('.'))
            .is_some_and(|stem| !stem.is_empty())
    }

    /// Builder: reject records without natural id
    pub fn requiring_identifier(mut self) -> Self {
        self.require_identifier = true;
        self
    }

    /// Builder: silence log events
    pub fn quiet(mut self) -> Self {
        self.log_events = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = WarehouseConfig::new("store");
        assert_eq!(config.file_extension, "crawl");
        assert!(config.create_folder);
        assert!(!config.require_identifier);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_file_names() {
        let config = WarehouseConfig::new("store");
        assert_eq!(config.file_name("42"), "42.crawl");
        assert!(config.is_record_file("42.crawl"));
        assert!(!config.is_record_file(".crawl"));
        assert!(!config.is_record_file("42.txt"));
        assert!(!config.is_record_file("42crawl"));
    }

    #[test]
    fn test_invalid_extension() {
        let mut config = WarehouseConfig::new("store");
        config.file_extension = ".crawl".into();
        assert!(matches!(config.validate(), Err(WarehouseError::Config(_))));
        config.file_extension = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_json_with_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("crawlstore.json");
        fs::write(&path, r#"{"storage_folder": "/tmp/crawl", "require_identifier": true}"#).unwrap();

        let config = WarehouseConfig::load(&path).unwrap();
        assert_eq!(config.storage_folder, PathBuf::from("/tmp/crawl"));
        assert!(config.require_identifier);
        assert!(config.log_events);
        assert_eq!(config.file_extension, "crawl");
    }

    #[test]
    fn test_load_rejects_bad_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(WarehouseConfig::load(&path), Err(WarehouseError::Config(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        assert!(WarehouseConfig::load(&temp.path().join("absent.json")).is_err());
    }
}
