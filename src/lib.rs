//! crawlstore - flat-file warehouse for crawled records
//!
//! Turns loosely structured scraper output into typed, content-addressed
//! records, stores them one file per natural id, and answers approximate
//! regex queries over the stored files.

pub mod cli;
pub mod codec;
pub mod coercion;
pub mod observability;
pub mod query;
pub mod record;
pub mod warehouse;
