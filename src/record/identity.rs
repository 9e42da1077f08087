//! Record identity: content fingerprint and natural id
//!
//! The fingerprint is a CRC32 over per-key hashes and is meant for change
//! detection only. It changes when any key or any value (including value
//! order within a key) changes.

use serde::{Deserialize, Serialize};

use crate::coercion::TypedValue;

use super::types::NormalizedRecord;

/// Suffix marking a natural-id key (compared lower-cased)
const ID_SUFFIX: &str = "id";

/// Identity derived from a normalized record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Content fingerprint
    pub fingerprint: String,
    /// Natural id, empty when the record carries none
    pub natural_id: String,
}

impl Identity {
    /// Derives both identity parts from a record
    pub fn of(record: &NormalizedRecord) -> Self {
        Self {
            fingerprint: fingerprint(record),
            natural_id: natural_id(record),
        }
    }

    /// Returns true if the record carried a natural id
    pub fn has_natural_id(&self) -> bool {
        !self.natural_id.is_empty()
    }
}

fn hash(data: &str) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(data.as_bytes());
    hasher.finalize()
}

fn hash_value(value: &TypedValue) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(value.type_name().as_bytes());
    hasher.update(&[0]);
    hasher.update(value.render().as_bytes());
    hasher.finalize()
}

/// Computes the content fingerprint of a record.
pub fn fingerprint(record: &NormalizedRecord) -> String {
    let mut combined = String::new();

    for (key, values) in record {
        let values_joined: String = values.iter().map(|v| hash_value(v).to_string()).collect();
        combined.push_str(&format!("{}.{}", hash(key), hash(&values_joined)));
    }

    hash(&combined).to_string()
}

/// Returns the first value of the first key ending in `id`, rendered as text.
pub fn natural_id(record: &NormalizedRecord) -> String {
    record
        .iter()
        .find(|(key, _)| key.to_lowercase().ends_with(ID_SUFFIX))
        .and_then(|(_, values)| values.first())
        .map(|value| value.render())
        .unwrap_or_default()
}
