//! Filesystem warehouse provider
//!
//! Store: normalize → identity → encode → write `{natural_id}.{ext}`.
//! Dig: list folder → read → decode → match.
//!
//! There is no locking. Two writers storing the same natural id race and the
//! last write wins.

use crate::codec::{decode_with_report, encode};
use crate::observability::{Logger, Severity, WarehouseMetrics};
use crate::query::QueryMatcher;
use crate::record::{normalize, Identity, MarkupStripper, NormalizedRecord, RawRecord, TagStripper, TextRecord};

use super::backend::StorageBackend;
use super::config::WarehouseConfig;
use super::errors::{WarehouseError, WarehouseResult};
use super::local::LocalBackend;
use super::provider::{StoreOutcome, WarehouseProvider};

/// Warehouse keeping one flat file per record
#[derive(Debug)]
pub struct FilesystemProvider<B = LocalBackend, S = TagStripper> {
    config: WarehouseConfig,
    backend: B,
    stripper: S,
    metrics: WarehouseMetrics,
}

impl FilesystemProvider<LocalBackend, TagStripper> {
    /// Provider over the local folder named in `config`
    pub fn new(config: WarehouseConfig) -> WarehouseResult<Self> {
        let backend = LocalBackend::new(config.storage_folder.clone(), config.create_folder);
        Self::with_parts(config, backend, TagStripper)
    }
}

impl<B: StorageBackend, S: MarkupStripper> FilesystemProvider<B, S> {
    /// Provider with an explicit backend and markup stripper
    pub fn with_parts(config: WarehouseConfig, backend: B, stripper: S) -> WarehouseResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            backend,
            stripper,
            metrics: WarehouseMetrics::new(),
        })
    }

    /// Operational counters
    pub fn metrics(&self) -> &WarehouseMetrics {
        &self.metrics
    }

    /// Normalizes a raw record and derives its identity without storing it
    pub fn prepare(&self, record: &RawRecord) -> (NormalizedRecord, Identity) {
        let normalized = normalize(record, &self.stripper);
        let identity = Identity::of(&normalized);
        (normalized, identity)
    }

    fn log(&self, severity: Severity, event: &str, fields: &[(&str, &str)]) {
        if self.config.log_events {
            Logger::log(severity, event, fields);
        }
    }

    fn drop_unidentified(&self, identity: Identity) -> WarehouseResult<StoreOutcome> {
        self.metrics.increment_records_dropped();

        if self.config.require_identifier {
            self.log(
                Severity::Error,
                "RECORD_REJECTED",
                &[("fingerprint", identity.fingerprint.as_str()), ("reason", "no natural id")],
            );
            return Err(WarehouseError::NoIdentifier {
                fingerprint: identity.fingerprint,
            });
        }

        self.log(
            Severity::Warn,
            "RECORD_DROPPED",
            &[("fingerprint", identity.fingerprint.as_str()), ("reason", "no natural id")],
        );
        Ok(StoreOutcome::Dropped {
            fingerprint: identity.fingerprint,
        })
    }

    /// Reads and decodes one stored file, or `None` if it must be skipped
    fn load(&self, name: &str) -> Option<TextRecord> {
        let bytes = match self.backend.read(name) {
            Ok(bytes) => bytes,
            Err(e) => {
                self.metrics.increment_files_skipped();
                self.log(
                    Severity::Warn,
                    "CRAWL_FILE_SKIPPED",
                    &[("file", name), ("reason", e.to_string().as_str())],
                );
                return None;
            }
        };

        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(_) => {
                self.metrics.increment_files_skipped();
                self.log(
                    Severity::Warn,
                    "CRAWL_FILE_SKIPPED",
                    &[("file", name), ("reason", "not valid UTF-8")],
                );
                return None;
            }
        };

        let report = decode_with_report(&text);
        for line in &report.skipped_lines {
            self.log(
                Severity::Warn,
                "CRAWL_LINE_SKIPPED",
                &[("file", name), ("line", line.to_string().as_str())],
            );
        }

        Some(report.record)
    }
}

/// Rejects ids that would escape or break the storage folder
fn validate_natural_id(natural_id: &str) -> WarehouseResult<()> {
    if natural_id.contains("..")
        || natural_id
            .chars()
            .any(|c| matches!(c, '/' | '\\') || c.is_control())
    {
        return Err(WarehouseError::InvalidIdentifier(natural_id.to_string()));
    }
    Ok(())
}

impl<B: StorageBackend, S: MarkupStripper> WarehouseProvider for FilesystemProvider<B, S> {
    fn store_information(&self, record: &RawRecord) -> WarehouseResult<StoreOutcome> {
        let (normalized, identity) = self.prepare(record);

        if !identity.has_natural_id() {
            return self.drop_unidentified(identity);
        }
        validate_natural_id(&identity.natural_id)?;

        let name = self.config.file_name(&identity.natural_id);
        let content = encode(&normalized);
        if let Err(e) = self.backend.write(&name, content.as_bytes()) {
            self.log(
                Severity::Error,
                "RECORD_WRITE_FAILED",
                &[("file", name.as_str()), ("reason", e.to_string().as_str())],
            );
            return Err(e);
        }

        let location = self.backend.location(&name);
        self.metrics.increment_records_stored();
        self.log(
            Severity::Info,
            "RECORD_STORED",
            &[
                ("fingerprint", identity.fingerprint.as_str()),
                ("natural_id", identity.natural_id.as_str()),
                ("path", location.as_str()),
            ],
        );

        Ok(StoreOutcome::Stored { identity, location })
    }

    fn dig_information(&self, query: &TextRecord) -> WarehouseResult<Vec<TextRecord>> {
        let matcher = QueryMatcher::compile(query)?;

        let names = match self.backend.list() {
            Ok(names) => names,
            Err(e) => {
                self.log(Severity::Warn, "STORAGE_UNREADABLE", &[("reason", e.to_string().as_str())]);
                Vec::new()
            }
        };

        let mut scanned = 0usize;
        let mut found = Vec::new();
        for name in names.iter().filter(|n| self.config.is_record_file(n)) {
            let Some(record) = self.load(name) else { continue };
            scanned += 1;
            self.metrics.increment_files_scanned();

            if matcher.matches(&record) {
                self.metrics.increment_files_matched();
                self.log(Severity::Trace, "CRAWL_FILE_MATCHED", &[("file", name.as_str())]);
                found.push(record);
            }
        }

        self.metrics.increment_digs();
        self.log(
            Severity::Info,
            "DIG_COMPLETE",
            &[
                ("matched", found.len().to_string().as_str()),
                ("scanned", scanned.to_string().as_str()),
            ],
        );

        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn raw(entries: &[(&str, &[&str])]) -> RawRecord {
        entries
            .iter()
            .map(|(k, vs)| (k.to_string(), vs.iter().map(|v| v.to_string()).collect()))
            .collect()
    }

    fn provider(temp: &TempDir) -> FilesystemProvider {
        FilesystemProvider::new(WarehouseConfig::new(temp.path()).quiet()).unwrap()
    }

    #[test]
    fn test_store_writes_named_file() {
        let temp = TempDir::new().unwrap();
        let warehouse = provider(&temp);

        let outcome = warehouse
            .store_information(&raw(&[("page.id", &["7"]), ("title", &["<b>Hi</b>  "])]))
            .unwrap();
        assert!(outcome.is_stored());

        let content = fs::read_to_string(temp.path().join("7.crawl")).unwrap();
        assert!(content.lines().any(|l| l == "title = Hi"));
        assert!(content.lines().any(|l| l == "id = 7"));
    }

    #[test]
    fn test_store_without_id_is_dropped() {
        let temp = TempDir::new().unwrap();
        let warehouse = provider(&temp);

        let outcome = warehouse.store_information(&raw(&[("title", &["x"])])).unwrap();
        assert!(matches!(outcome, StoreOutcome::Dropped { .. }));
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
        assert_eq!(warehouse.metrics().snapshot().records_dropped, 1);
    }

    #[test]
    fn test_store_without_id_rejected_when_required() {
        let temp = TempDir::new().unwrap();
        let config = WarehouseConfig::new(temp.path()).quiet().requiring_identifier();
        let warehouse = FilesystemProvider::new(config).unwrap();

        let err = warehouse.store_information(&raw(&[("title", &["x"])])).unwrap_err();
        assert!(matches!(err, WarehouseError::NoIdentifier { .. }));
    }

    #[test]
    fn test_store_rejects_path_like_id() {
        let temp = TempDir::new().unwrap();
        let warehouse = provider(&temp);

        let err = warehouse
            .store_information(&raw(&[("id", &["../escape"])]))
            .unwrap_err();
        assert!(matches!(err, WarehouseError::InvalidIdentifier(_)));
    }

    #[test]
    fn test_store_rejects_parent_dir_id() {
        let temp = TempDir::new().unwrap();
        let warehouse = provider(&temp);

        let err = warehouse.store_information(&raw(&[("id", &[".."])])).unwrap_err();
        assert!(matches!(err, WarehouseError::InvalidIdentifier(ref id) if id == ".."));
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_last_write_wins() {
        let temp = TempDir::new().unwrap();
        let warehouse = provider(&temp);

        warehouse.store_information(&raw(&[("id", &["a1"]), ("v", &["old"])])).unwrap();
        warehouse.store_information(&raw(&[("id", &["a1"]), ("w", &["new"])])).unwrap();

        let content = fs::read_to_string(temp.path().join("a1.crawl")).unwrap();
        assert_eq!(content, "id = a1\nw = new\n");
    }

    #[test]
    fn test_dig_finds_stored_record() {
        let temp = TempDir::new().unwrap();
        let warehouse = provider(&temp);
        warehouse
            .store_information(&raw(&[("page.id", &["7"]), ("title", &["<b>Hi</b>  "])]))
            .unwrap();

        let found = warehouse.dig_information(&raw(&[("title", &["hi"])])).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0]["title"], vec!["Hi"]);
    }

    #[test]
    fn test_dig_missing_folder_is_empty() {
        let temp = TempDir::new().unwrap();
        let config = WarehouseConfig::new(temp.path().join("absent")).quiet();
        let warehouse = FilesystemProvider::new(config).unwrap();

        assert!(warehouse.dig_information(&raw(&[("title", &["x"])])).unwrap().is_empty());
    }

    #[test]
    fn test_dig_ignores_other_files_and_bad_encoding() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("notes.txt"), "title = hi\n").unwrap();
        fs::write(temp.path().join("bin.crawl"), [0xff, 0xfe, 0x00]).unwrap();
        fs::write(temp.path().join("ok.crawl"), "title = hi\njunk\n").unwrap();
        let warehouse = provider(&temp);

        let found = warehouse.dig_information(&raw(&[("title", &["hi"])])).unwrap();
        assert_eq!(found.len(), 1);

        let snapshot = warehouse.metrics().snapshot();
        assert_eq!(snapshot.files_scanned, 1);
        assert_eq!(snapshot.files_skipped, 1);
        assert_eq!(snapshot.files_matched, 1);
    }

    #[test]
    fn test_dig_invalid_pattern() {
        let temp = TempDir::new().unwrap();
        let warehouse = provider(&temp);

        let err = warehouse.dig_information(&raw(&[("title", &["("])])).unwrap_err();
        assert_eq!(err.code(), "CRAWL_INVALID_QUERY_PATTERN");
    }

    #[test]
    fn test_custom_stripper() {
        let temp = TempDir::new().unwrap();
        let config = WarehouseConfig::new(temp.path()).quiet();
        let backend = LocalBackend::new(temp.path().to_path_buf(), true);
        let warehouse =
            FilesystemProvider::with_parts(config, backend, |s: &str| s.replace("[x]", "")).unwrap();

        warehouse.store_information(&raw(&[("id", &["1"]), ("t", &["a[x]b"])])).unwrap();
        let content = fs::read_to_string(temp.path().join("1.crawl")).unwrap();
        assert!(content.contains("t = ab"));
    }
}
