//! Payout multiplier histogram over fixed upper-inclusive thresholds.

use crate::domain::{Decimal, RecordRef};
use serde::Serialize;

/// Ascending thresholds as `(mantissa, scale)`; `(105, 2)` is `1.05`.
const THRESHOLDS: &[(i64, u32)] = &[
    (0, 0),
    (101, 2),
    (102, 2),
    (103, 2),
    (104, 2),
    (105, 2),
    (11, 1),
    (12, 1),
    (13, 1),
    (14, 1),
    (15, 1),
    (2, 0),
    (3, 0),
    (4, 0),
    (5, 0),
    (10, 0),
    (25, 0),
    (50, 0),
    (100, 0),
    (250, 0),
    (500, 0),
    (1000, 0),
];

/// The fixed threshold list, ascending.
pub fn thresholds() -> Vec<Decimal> {
    THRESHOLDS
        .iter()
        .map(|&(mantissa, scale)| Decimal::from_parts(mantissa, scale))
        .collect()
}

/// Index of the smallest threshold `>= multiplier`, if any.
pub fn bucket_index(thresholds: &[Decimal], multiplier: Decimal) -> Option<usize> {
    let idx = thresholds.partition_point(|t| *t < multiplier);
    (idx < thresholds.len()).then_some(idx)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistogramRow {
    /// Threshold rendered as a normalized decimal, e.g. `"1.1"`.
    pub threshold_key: String,
    pub threshold: Decimal,
    pub count: u64,
    /// `count / total * 100`, rounded to 2 places; 0 when total is 0.
    pub percentage: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Histogram {
    /// One row per threshold, ascending, zero-count rows included.
    pub rows: Vec<HistogramRow>,
    /// Sum of row counts.
    pub total: u64,
    /// Multipliers above the largest threshold. Not part of any row or of `total`.
    pub overflow: u64,
}

/// Bucket every record carrying a numeric payout multiplier.
///
/// Records without one are skipped. Multipliers above the largest threshold find
/// no bucket and are only reported through `overflow`.
pub fn histogram(records: &[RecordRef]) -> Histogram {
    let thresholds = thresholds();
    let mut counts = vec![0u64; thresholds.len()];
    let mut overflow = 0u64;

    for multiplier in records.iter().filter_map(|r| r.payout_multiplier) {
        match bucket_index(&thresholds, multiplier) {
            Some(idx) => counts[idx] += 1,
            None => {
                tracing::debug!(%multiplier, "payout multiplier above largest threshold");
                overflow += 1;
            }
        }
    }

    let total: u64 = counts.iter().sum();
    let rows = thresholds
        .into_iter()
        .zip(counts)
        .map(|(threshold, count)| HistogramRow {
            threshold_key: threshold.to_canonical_string(),
            threshold,
            count,
            percentage: Decimal::percentage(count, total),
        })
        .collect();

    Histogram {
        rows,
        total,
        overflow,
    }
}
