//! Month / day / hour grouping and per-bucket summary statistics.
//!
//! Grouping is a pure partition by key: every input record lands in exactly one
//! bucket, and bucket contents keep the order the records were given in.

use crate::domain::{DayKey, Decimal, Hour, MonthKey, RecordRef, HOURS_PER_DAY};
use serde::Serialize;
use std::collections::BTreeMap;

/// Records grouped by UTC month. Iterate with `.iter().rev()` for display order.
pub type MonthBuckets = BTreeMap<MonthKey, Vec<RecordRef>>;

/// Records grouped by UTC date.
pub type DayBuckets = BTreeMap<DayKey, Vec<RecordRef>>;

/// Records grouped by UTC hour; always holds all 24 slots.
#[derive(Debug, Clone, PartialEq)]
pub struct HourBuckets {
    slots: Vec<Vec<RecordRef>>,
}

impl HourBuckets {
    fn empty() -> Self {
        Self {
            slots: vec![Vec::new(); HOURS_PER_DAY],
        }
    }

    pub fn get(&self, hour: Hour) -> &[RecordRef] {
        &self.slots[hour.index()]
    }

    /// `(hour, records)` for hours 0..=23, empty hours included.
    pub fn iter(&self) -> impl Iterator<Item = (Hour, &[RecordRef])> + '_ {
        self.slots.iter().enumerate().filter_map(|(h, records)| {
            Hour::new(h as u32)
                .ok()
                .map(|hour| (hour, records.as_slice()))
        })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Summary statistics for one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStats {
    pub total_pnl: Decimal,
    pub count: u64,
    /// Records with `pnl > 0`.
    pub wins: u64,
    /// `wins / count * 100`, rounded to 2 places; 0 when empty.
    pub win_rate: Decimal,
}

pub fn group_by_month(records: &[RecordRef]) -> MonthBuckets {
    let mut months = MonthBuckets::new();
    for record in records {
        months
            .entry(record.utc_month_key.clone())
            .or_default()
            .push(record.clone());
    }
    months
}

pub fn group_by_day(records: &[RecordRef]) -> DayBuckets {
    let mut days = DayBuckets::new();
    for record in records {
        days.entry(record.utc_date_key.clone())
            .or_default()
            .push(record.clone());
    }
    days
}

/// Group by UTC hour, zero-filling every hour without records.
pub fn group_by_hour(records: &[RecordRef]) -> HourBuckets {
    let mut hours = HourBuckets::empty();
    for record in records {
        hours.slots[record.utc_hour.index()].push(record.clone());
    }
    hours
}

/// Total PnL saturates at the decimal bounds, so summarizing never fails.
pub fn summarize(records: &[RecordRef]) -> AggregateStats {
    let mut total_pnl = Decimal::zero();
    let mut wins = 0u64;
    for record in records {
        total_pnl = total_pnl.saturating_add(record.pnl);
        if record.is_win() {
            wins += 1;
        }
    }
    let count = records.len() as u64;

    AggregateStats {
        total_pnl,
        count,
        wins,
        win_rate: Decimal::percentage(wins, count),
    }
}

/// Flatten buckets back into one sequence, in key order.
pub fn flatten<K>(buckets: &BTreeMap<K, Vec<RecordRef>>) -> Vec<RecordRef> {
    buckets.values().flatten().cloned().collect()
}
