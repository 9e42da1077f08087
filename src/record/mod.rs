//! Record subsystem for crawlstore
//!
//! A record is a field-name to value-list collection describing one crawled
//! entity. This module turns raw scraper output into a normalized, typed
//! record and derives its identity.
//!
//! # Pipeline
//!
//! - Namespace stripping: `source.title` becomes `title`
//! - Markup removal (pluggable [`MarkupStripper`])
//! - Control character removal and trimming
//! - Coercion of every value to a [`TypedValue`](crate::coercion::TypedValue)
//!
//! Value order inside a key is preserved throughout.

mod identity;
mod markup;
mod normalizer;
mod types;

pub use identity::{fingerprint, natural_id, Identity};
pub use markup::{MarkupStripper, NoMarkup, TagStripper};
pub use normalizer::{clean_value, normalize, strip_namespace};
pub use types::{NormalizedRecord, RawRecord, TextRecord};
