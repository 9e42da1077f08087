//! # Warehouse Provider Trait

use serde::Serialize;

use crate::record::{Identity, RawRecord, TextRecord};

use super::errors::WarehouseResult;

/// Result of storing one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum StoreOutcome {
    /// The record was written, replacing any earlier file with the same id
    Stored {
        /// Derived identity
        identity: Identity,
        /// Location of the written file
        location: String,
    },
    /// The record carried no natural id and was not written
    Dropped {
        /// Fingerprint of the dropped content
        fingerprint: String,
    },
}

impl StoreOutcome {
    /// Returns true if a file was written
    pub fn is_stored(&self) -> bool {
        matches!(self, StoreOutcome::Stored { .. })
    }
}

/// Storage seam consumed by ingestion callers and exposed to query callers
pub trait WarehouseProvider {
    /// Normalize a raw record and persist it under its natural id.
    fn store_information(&self, record: &RawRecord) -> WarehouseResult<StoreOutcome>;

    /// Return every stored record that matches `query`.
    fn dig_information(&self, query: &TextRecord) -> WarehouseResult<Vec<TextRecord>>;
}
