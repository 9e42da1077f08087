//! Observability subsystem for crawlstore
//!
//! - Structured logging (JSON lines)
//! - Monotonic counters per provider
//!
//! Observability is read-only: nothing here changes what is stored or
//! returned.
//!
//! ```ignore
//! use crawlstore::observability::{Logger, Severity};
//!
//! Logger::log(Severity::Info, "RECORD_STORED", &[("natural_id", "42")]);
//! ```

mod logger;
mod metrics;

pub use logger::{Logger, Severity};
pub use metrics::{MetricsSnapshot, WarehouseMetrics};
