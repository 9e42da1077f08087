//! Warehouse counters
//!
//! Counters only, monotonic, reset on process start.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Operational counters for one warehouse provider
#[derive(Debug, Default)]
pub struct WarehouseMetrics {
    records_stored: AtomicU64,
    records_dropped: AtomicU64,
    digs_executed: AtomicU64,
    files_scanned: AtomicU64,
    files_matched: AtomicU64,
    files_skipped: AtomicU64,
}

impl WarehouseMetrics {
    /// Create a registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// A record was written to storage
    pub fn increment_records_stored(&self) {
        self.records_stored.fetch_add(1, Ordering::Relaxed);
    }

    /// A record without natural id was dropped or rejected
    pub fn increment_records_dropped(&self) {
        self.records_dropped.fetch_add(1, Ordering::Relaxed);
    }

    /// A dig completed
    pub fn increment_digs(&self) {
        self.digs_executed.fetch_add(1, Ordering::Relaxed);
    }

    /// A stored file was decoded and tested
    pub fn increment_files_scanned(&self) {
        self.files_scanned.fetch_add(1, Ordering::Relaxed);
    }

    /// A stored file matched a query
    pub fn increment_files_matched(&self) {
        self.files_matched.fetch_add(1, Ordering::Relaxed);
    }

    /// A stored file could not be read or decoded
    pub fn increment_files_skipped(&self) {
        self.files_skipped.fetch_add(1, Ordering::Relaxed);
    }

    /// Point-in-time copy of every counter
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            records_stored: self.records_stored.load(Ordering::Relaxed),
            records_dropped: self.records_dropped.load(Ordering::Relaxed),
            digs_executed: self.digs_executed.load(Ordering::Relaxed),
            files_scanned: self.files_scanned.load(Ordering::Relaxed),
            files_matched: self.files_matched.load(Ordering::Relaxed),
            files_skipped: self.files_skipped.load(Ordering::Relaxed),
        }
    }
}

/// Snapshot of [`WarehouseMetrics`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub records_stored: u64,
    pub records_dropped: u64,
    pub digs_executed: u64,
    pub files_scanned: u64,
    pub files_matched: u64,
    pub files_skipped: u64,
}
