//! # Storage Backend Trait

use super::errors::WarehouseResult;

/// Byte-oriented access to the storage folder
pub trait StorageBackend: std::fmt::Debug {
    /// Write (overwrite) a file
    fn write(&self, name: &str, data: &[u8]) -> WarehouseResult<()>;

    /// Read a file
    fn read(&self, name: &str) -> WarehouseResult<Vec<u8>>;

    /// List file names; a missing folder lists as empty
    fn list(&self) -> WarehouseResult<Vec<String>>;

    /// Human-readable location of a file, for logs
    fn location(&self, name: &str) -> String;
}
