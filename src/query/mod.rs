//! Approximate query matching over stored records
//!
//! Query values are case-insensitive regular expressions. A stored record
//! matches when any query value finds a match inside any value of the
//! corresponding stored field (OR across keys and values). Stored values are
//! lower-cased and stripped of parentheses before matching.
//!
//! A query key `title` resolves to the stored key `title` when present,
//! otherwise to the first namespaced key ending in `.title`.

mod errors;
mod matcher;

pub use errors::{QueryError, QueryResult};
pub use matcher::{clean_target_value, matches, QueryMatcher};
