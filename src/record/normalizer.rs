//! Record normalization
//!
//! Keys lose their first dot-segment (the scraper namespace). Values are
//! stripped of markup and control characters, trimmed and coerced. Keys that
//! collide after stripping have their values appended in key order.

use crate::coercion::coerce;

use super::markup::MarkupStripper;
use super::types::{NormalizedRecord, RawRecord};

/// Removes the leading namespace segment from a key.
///
/// `page.meta.title` becomes `meta.title`; keys without a dot are unchanged.
pub fn strip_namespace(key: &str) -> &str {
    match key.split_once('.') {
        Some((_, rest)) => rest,
        None => key,
    }
}

/// Removes markup and control characters, then trims surrounding whitespace.
pub fn clean_value<S: MarkupStripper + ?Sized>(raw: &str, stripper: &S) -> String {
    let stripped = stripper.strip(raw);
    let without_controls: String = stripped.chars().filter(|c| !c.is_control()).collect();
    without_controls.trim().to_string()
}

/// Normalizes a raw record. An empty record yields an empty record.
pub fn normalize<S: MarkupStripper + ?Sized>(record: &RawRecord, stripper: &S) -> NormalizedRecord {
    let mut normalized = NormalizedRecord::new();

    for (key, values) in record {
        let typed = values
            .iter()
            .map(|raw| coerce(&clean_value(raw, stripper)));
        normalized
            .entry(strip_namespace(key).to_string())
            .or_default()
            .extend(typed);
    }

    normalized
}
