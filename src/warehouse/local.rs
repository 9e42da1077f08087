//! # Local Filesystem Backend

use std::fs;
use std::io;
use std::path::PathBuf;

use super::backend::StorageBackend;
use super::errors::{WarehouseError, WarehouseResult};

/// Local filesystem storage backend rooted at the storage folder
#[derive(Debug)]
pub struct LocalBackend {
    root: PathBuf,
    create_root: bool,
}

impl LocalBackend {
    /// Create a new local backend
    pub fn new(root: PathBuf, create_root: bool) -> Self {
        Self { root, create_root }
    }

    fn full_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    fn map_io(name: &str, e: io::Error) -> WarehouseError {
        if e.kind() == io::ErrorKind::NotFound {
            WarehouseError::NotFound(name.to_string())
        } else {
            WarehouseError::IoError(e.to_string())
        }
    }
}

impl StorageBackend for LocalBackend {
    fn write(&self, name: &str, data: &[u8]) -> WarehouseResult<()> {
        if self.create_root {
            fs::create_dir_all(&self.root).map_err(|e| WarehouseError::IoError(e.to_string()))?;
        }

        fs::write(self.full_path(name), data).map_err(|e| {
            WarehouseError::IoError(format!("{}: {}", self.location(name), e))
        })
    }

    fn read(&self, name: &str) -> WarehouseResult<Vec<u8>> {
        fs::read(self.full_path(name)).map_err(|e| Self::map_io(name, e))
    }

    fn list(&self) -> WarehouseResult<Vec<String>> {
        let mut names = Vec::new();

        if !self.root.is_dir() {
            return Ok(names);
        }

        for entry in fs::read_dir(&self.root).map_err(|e| WarehouseError::IoError(e.to_string()))? {
            let Ok(entry) = entry else { continue };
            if !entry.file_type().is_ok_and(|t| t.is_file()) {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }

        names.sort();
        Ok(names)
    }

    fn location(&self, name: &str) -> String {
        self.full_path(name).display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_read() {
        let temp = TempDir::new().unwrap();
        let backend = LocalBackend::new(temp.path().to_path_buf(), false);

        backend.write("1.crawl", b"id = 1\n").unwrap();
        assert_eq!(backend.read("1.crawl").unwrap(), b"id = 1\n");
        assert_eq!(backend.list().unwrap(), vec!["1.crawl"]);
    }

    #[test]
    fn test_overwrite() {
        let temp = TempDir::new().unwrap();
        let backend = LocalBackend::new(temp.path().to_path_buf(), false);

        backend.write("1.crawl", b"old").unwrap();
        backend.write("1.crawl", b"new").unwrap();
        assert_eq!(backend.read("1.crawl").unwrap(), b"new");
    }

    #[test]
    fn test_creates_missing_root() {
        let temp = TempDir::new().unwrap();
        let backend = LocalBackend::new(temp.path().join("a/b"), true);

        backend.write("x.crawl", b"k = v").unwrap();
        assert_eq!(backend.list().unwrap(), vec!["x.crawl"]);
    }

    #[test]
    fn test_missing_root_without_create_fails_write() {
        let temp = TempDir::new().unwrap();
        let backend = LocalBackend::new(temp.path().join("absent"), false);
        assert!(matches!(backend.write("x.crawl", b""), Err(WarehouseError::IoError(_))));
    }

    #[test]
    fn test_list_missing_root_is_empty() {
        let temp = TempDir::new().unwrap();
        let backend = LocalBackend::new(temp.path().join("absent"), false);
        assert!(backend.list().unwrap().is_empty());
    }

    #[test]
    fn test_list_skips_directories() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("nested")).unwrap();
        fs::write(temp.path().join("b.crawl"), "").unwrap();
        fs::write(temp.path().join("a.crawl"), "").unwrap();

        let backend = LocalBackend::new(temp.path().to_path_buf(), false);
        assert_eq!(backend.list().unwrap(), vec!["a.crawl", "b.crawl"]);
    }

    #[test]
    fn test_not_found() {
        let temp = TempDir::new().unwrap();
        let backend = LocalBackend::new(temp.path().to_path_buf(), false);
        assert!(matches!(backend.read("nope.crawl"), Err(WarehouseError::NotFound(_))));
    }
}
