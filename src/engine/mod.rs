//! Pure computation engine(s) for round-record analytics.

pub mod aggregator;
pub mod arbitrage;
pub mod histogram;
pub mod navigation;
pub mod views;

pub use aggregator::{
    group_by_day, group_by_hour, group_by_month, summarize, AggregateStats, DayBuckets,
    HourBuckets, MonthBuckets,
};
pub use arbitrage::{ArbitrageOutcome, ThreeWayOdds, STAKE_PRESETS};
pub use histogram::{histogram, Histogram, HistogramRow};
pub use navigation::{NavError, NavLevel, NavState, View};
pub use views::{
    view_day, view_histogram, view_month, view_root, DayEntry, DayView, HourEntry, MonthEntry,
    MonthView, RootView,
};
