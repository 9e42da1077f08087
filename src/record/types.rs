//! Record type aliases
//!
//! Records are ordered by key so iteration (and therefore fingerprinting and
//! encoding) is reproducible across processes.

use std::collections::BTreeMap;

use crate::coercion::TypedValue;

/// Raw scraper output: field key to raw text values
pub type RawRecord = BTreeMap<String, Vec<String>>;

/// Cleaned keys mapped to coerced values
pub type NormalizedRecord = BTreeMap<String, Vec<TypedValue>>;

/// String-valued record as decoded from storage, also the query shape
pub type TextRecord = BTreeMap<String, Vec<String>>;
