//! Read models for each drill-down level.

use super::aggregator::{group_by_day, group_by_hour, group_by_month, summarize, AggregateStats};
use super::histogram::{histogram, Histogram};
use crate::domain::{Dataset, DayKey, Decimal, Hour, MonthKey, RecordRef};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthEntry {
    pub key: MonthKey,
    pub label: String,
    pub stats: AggregateStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayEntry {
    pub key: DayKey,
    pub label: String,
    pub stats: AggregateStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HourEntry {
    pub hour: Hour,
    pub label: String,
    pub total_pnl: Decimal,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum RootView {
    /// No records loaded; the placeholder state.
    Empty,
    Loaded {
        /// Newest month first.
        months: Vec<MonthEntry>,
        overall: AggregateStats,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthView {
    pub month: MonthKey,
    pub label: String,
    /// Newest day first.
    pub days: Vec<DayEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayView {
    pub month: MonthKey,
    pub day: DayKey,
    pub label: String,
    /// Exactly 24 entries, hour 0 first.
    pub hours: Vec<HourEntry>,
}

pub fn root_view(records: &[RecordRef]) -> RootView {
    if records.is_empty() {
        return RootView::Empty;
    }
    let months = group_by_month(records)
        .iter()
        .rev()
        .map(|(key, items)| MonthEntry {
            key: key.clone(),
            label: key.label(),
            stats: summarize(items),
        })
        .collect();

    RootView::Loaded {
        months,
        overall: summarize(records),
    }
}

/// Day listing over records already narrowed to `month`.
pub fn month_view(month: &MonthKey, month_items: &[RecordRef]) -> MonthView {
    let days = group_by_day(month_items)
        .iter()
        .rev()
        .map(|(key, items)| DayEntry {
            key: key.clone(),
            label: key.label(),
            stats: summarize(items),
        })
        .collect();

    MonthView {
        month: month.clone(),
        label: month.label(),
        days,
    }
}

/// 24-hour breakdown over records already narrowed to `day`.
pub fn day_view(month: &MonthKey, day: &DayKey, day_items: &[RecordRef]) -> DayView {
    let hours = group_by_hour(day_items)
        .iter()
        .map(|(hour, items)| {
            let stats = summarize(items);
            HourEntry {
                hour,
                label: hour.label(),
                total_pnl: stats.total_pnl,
                count: stats.count,
            }
        })
        .collect();

    DayView {
        month: month.clone(),
        day: day.clone(),
        label: day.label(),
        hours,
    }
}

/// Records of `dataset` falling in `month`, in dataset order.
pub fn month_records(dataset: &Dataset, month: &MonthKey) -> Vec<RecordRef> {
    dataset
        .records()
        .iter()
        .filter(|r| &r.utc_month_key == month)
        .cloned()
        .collect()
}

/// Records of `items` falling on `day`, in input order.
pub fn day_records(items: &[RecordRef], day: &DayKey) -> Vec<RecordRef> {
    items
        .iter()
        .filter(|r| &r.utc_date_key == day)
        .cloned()
        .collect()
}

pub fn view_root(dataset: &Dataset) -> RootView {
    root_view(dataset.records())
}

pub fn view_month(dataset: &Dataset, month: &MonthKey) -> MonthView {
    month_view(month, &month_records(dataset, month))
}

/// Hour breakdown of `day` within `month`. A day outside the month has no records.
pub fn view_day(dataset: &Dataset, month: &MonthKey, day: &DayKey) -> DayView {
    let items = day_records(&month_records(dataset, month), day);
    day_view(month, day, &items)
}

pub fn view_histogram(dataset: &Dataset) -> Histogram {
    histogram(dataset.records())
}
