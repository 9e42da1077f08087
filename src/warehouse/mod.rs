//! Warehouse subsystem for crawlstore
//!
//! Persists normalized records as flat files named by natural id and answers
//! approximate queries by scanning them.
//!
//! # Behaviour
//!
//! - One file per record: `{storage_folder}/{natural_id}.crawl`
//! - Overwrite on store (last write wins, no merge)
//! - Records without natural id are dropped, or rejected when configured
//! - Missing or unreadable storage folder digs as empty
//! - Unreadable or non-UTF-8 files are skipped during a dig
//! - Single writer; no locking

mod backend;
mod config;
mod errors;
mod filesystem;
mod local;
mod provider;

pub use backend::StorageBackend;
pub use config::WarehouseConfig;
pub use errors::{WarehouseError, WarehouseResult};
pub use filesystem::FilesystemProvider;
pub use local::LocalBackend;
pub use provider::{StoreOutcome, WarehouseProvider};
