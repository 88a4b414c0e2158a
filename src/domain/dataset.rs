//! The session dataset: normalized records in chronological order.

use crate::domain::{normalize_at, ordering, NormalizedRecord, RawRecord};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Shared handle to a normalized record. Buckets and navigation subsets hold these.
pub type RecordRef = Arc<NormalizedRecord>;

/// Normalized records, stable-sorted by `timestamp_ms`.
///
/// Rebuilt wholesale on every ingestion; never appended to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<RecordRef>,
}

impl Dataset {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Normalize raw records against a single ingestion instant and sort them.
    pub fn from_raw(raw: &[RawRecord], now: DateTime<Utc>) -> Self {
        let normalized = raw.iter().map(|r| normalize_at(r, now)).collect();
        Self::from_normalized(normalized)
    }

    pub fn from_normalized(records: Vec<NormalizedRecord>) -> Self {
        let mut records: Vec<RecordRef> = records.into_iter().map(Arc::new).collect();
        ordering::sort_records_chronologically(&mut records);
        Self { records }
    }

    pub fn records(&self) -> &[RecordRef] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
