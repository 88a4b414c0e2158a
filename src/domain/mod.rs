//! Domain types for round-record analytics.
//!
//! This module provides:
//! - Lossless numeric handling via the Decimal wrapper
//! - Domain primitives: TimeMs and the UTC month/day/hour bucket keys
//! - Raw and normalized round records, and the record normalizer
//! - Stable chronological ordering and the session Dataset

pub mod dataset;
pub mod decimal;
pub mod ordering;
pub mod primitives;
pub mod record;

pub use dataset::{Dataset, RecordRef};
pub use decimal::Decimal;
pub use ordering::sort_records_chronologically;
pub use primitives::{
    has_fixed_width_keys, DayKey, Hour, KeyParseError, MonthKey, TimeMs, HOURS_PER_DAY,
    KEY_YEAR_RANGE,
};
pub use record::{normalize, normalize_at, NormalizedRecord, RawRecord, TimeSource};
