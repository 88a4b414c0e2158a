//! Stable chronological ordering of normalized records.

use crate::domain::NormalizedRecord;
use std::borrow::Borrow;

/// Sort records ascending by `timestamp_ms`.
///
/// The sort is stable: records with equal timestamps keep their ingestion order.
pub fn sort_records_chronologically<R: Borrow<NormalizedRecord>>(records: &mut [R]) {
    records.sort_by_key(|r| r.borrow().timestamp_ms);
}
