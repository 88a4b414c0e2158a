//! Drill-down navigation: Root -> Month -> Day, plus the standalone Histogram mode.
//!
//! Each state carries the record subsets its level was built from, so a single
//! back-step re-derives the parent listing without touching the full dataset
//! (except Month -> Root, which regroups the dataset by month).

use super::histogram::{histogram, Histogram};
use super::views::{
    day_records, day_view, month_records, month_view, root_view, DayView, MonthView, RootView,
};
use crate::domain::{Dataset, DayKey, MonthKey, RecordRef};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum NavState {
    #[default]
    Root,
    Month {
        month: MonthKey,
        items: Vec<RecordRef>,
    },
    Day {
        month: MonthKey,
        month_items: Vec<RecordRef>,
        day: DayKey,
        items: Vec<RecordRef>,
    },
    Histogram,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NavLevel {
    Root,
    Month,
    Day,
    Histogram,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("month {0} has no records")]
    UnknownMonth(MonthKey),
    #[error("day {day} has no records in month {month}")]
    UnknownDay { month: MonthKey, day: DayKey },
    #[error("cannot {action} from the {from:?} level")]
    InvalidTransition { from: NavLevel, action: &'static str },
}

/// What the current level displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "level", rename_all = "camelCase")]
pub enum View {
    Root(RootView),
    Month(MonthView),
    Day(DayView),
    Histogram(Histogram),
}

impl NavState {
    pub fn level(&self) -> NavLevel {
        match self {
            NavState::Root => NavLevel::Root,
            NavState::Month { .. } => NavLevel::Month,
            NavState::Day { .. } => NavLevel::Day,
            NavState::Histogram => NavLevel::Histogram,
        }
    }

    pub fn selected_month(&self) -> Option<&MonthKey> {
        match self {
            NavState::Month { month, .. } | NavState::Day { month, .. } => Some(month),
            _ => None,
        }
    }

    pub fn selected_day(&self) -> Option<&DayKey> {
        match self {
            NavState::Day { day, .. } => Some(day),
            _ => None,
        }
    }

    /// Root -> Month. Captures the month's record subset.
    pub fn select_month(self, dataset: &Dataset, month: MonthKey) -> Result<NavState, NavError> {
        if !matches!(self, NavState::Root) {
            return Err(NavError::InvalidTransition {
                from: self.level(),
                action: "select a month",
            });
        }
        let items = month_records(dataset, &month);
        if items.is_empty() {
            return Err(NavError::UnknownMonth(month));
        }
        tracing::debug!(%month, records = items.len(), "navigate to month");
        Ok(NavState::Month { month, items })
    }

    /// Month -> Day. Captures the day's subset out of the retained month subset.
    pub fn select_day(self, day: DayKey) -> Result<NavState, NavError> {
        let from = self.level();
        let NavState::Month { month, items } = self else {
            return Err(NavError::InvalidTransition {
                from,
                action: "select a day",
            });
        };
        let day_items = day_records(&items, &day);
        if day_items.is_empty() {
            return Err(NavError::UnknownDay { month, day });
        }
        tracing::debug!(%day, records = day_items.len(), "navigate to day");
        Ok(NavState::Day {
            month,
            month_items: items,
            day,
            items: day_items,
        })
    }

    /// Switch to the histogram mode, dropping any retained subsets.
    pub fn enter_histogram(self) -> NavState {
        NavState::Histogram
    }

    /// Exactly one level up: Day -> Month, Month -> Root, Histogram -> Root.
    /// Root stays at Root.
    pub fn back(self) -> NavState {
        match self {
            NavState::Day {
                month, month_items, ..
            } => NavState::Month {
                month,
                items: month_items,
            },
            NavState::Month { .. } | NavState::Histogram | NavState::Root => NavState::Root,
        }
    }

    /// Build the view for the current level.
    pub fn render(&self, dataset: &Dataset) -> View {
        match self {
            NavState::Root => View::Root(root_view(dataset.records())),
            NavState::Month { month, items } => View::Month(month_view(month, items)),
            NavState::Day {
                month, day, items, ..
            } => View::Day(day_view(month, day, items)),
            NavState::Histogram => View::Histogram(histogram(dataset.records())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RawRecord;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn dataset() -> Dataset {
        let now = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let raw: Vec<RawRecord> = vec![
            json!({"created_at": "2025-09-29T10:00:00Z", "data": {"amount": 100, "payout": 150}}),
            json!({"created_at": "2025-09-29T23:30:00Z", "data": {"amount": 50, "payout": 0}}),
            json!({"created_at": "2025-09-02T08:00:00Z", "data": {"amount": 20, "payout": 25}}),
            json!({"created_at": "2025-08-15T12:00:00Z", "data": {"amount": 10, "payout": 0}}),
        ]
        .into_iter()
        .map(RawRecord::new)
        .collect();
        Dataset::from_raw(&raw, now)
    }

    fn month(s: &str) -> MonthKey {
        MonthKey::parse(s).unwrap()
    }

    fn day(s: &str) -> DayKey {
        DayKey::parse(s).unwrap()
    }

    #[test]
    fn test_forward_transitions_capture_subsets() {
        let ds = dataset();
        let state = NavState::Root.select_month(&ds, month("2025-09")).unwrap();
        match &state {
            NavState::Month { items, .. } => assert_eq!(items.len(), 3),
            other => panic!("unexpected state {:?}", other),
        }

        let state = state.select_day(day("2025-09-29")).unwrap();
        match &state {
            NavState::Day {
                month_items, items, ..
            } => {
                assert_eq!(month_items.len(), 3);
                assert_eq!(items.len(), 2);
            }
            other => panic!("unexpected state {:?}", other),
        }
        assert_eq!(state.selected_month(), Some(&month("2025-09")));
        assert_eq!(state.selected_day(), Some(&day("2025-09-29")));
    }

    #[test]
    fn test_back_is_one_level() {
        let ds = dataset();
        let state = NavState::Root
            .select_month(&ds, month("2025-09"))
            .unwrap()
            .select_day(day("2025-09-29"))
            .unwrap();

        let state = state.back();
        assert_eq!(state.level(), NavLevel::Month);
        assert_eq!(state.selected_month(), Some(&month("2025-09")));
        assert_eq!(state.selected_day(), None);

        let state = state.back();
        assert_eq!(state, NavState::Root);
        assert_eq!(state.back(), NavState::Root);
    }

    #[test]
    fn test_back_from_day_rederives_month_listing() {
        let ds = dataset();
        let month_state = NavState::Root.select_month(&ds, month("2025-09")).unwrap();
        let before = month_state.render(&ds);

        let after = month_state
            .select_day(day("2025-09-02"))
            .unwrap()
            .back()
            .render(&ds);
        assert_eq!(before, after);
    }

    #[test]
    fn test_histogram_back_returns_to_root() {
        let ds = dataset();
        let state = NavState::Root
            .select_month(&ds, month("2025-09"))
            .unwrap()
            .enter_histogram();
        assert_eq!(state.level(), NavLevel::Histogram);
        assert_eq!(state.selected_month(), None);
        assert_eq!(state.back(), NavState::Root);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let ds = dataset();
        assert_eq!(
            NavState::Root.select_month(&ds, month("2020-01")),
            Err(NavError::UnknownMonth(month("2020-01")))
        );

        let state = NavState::Root.select_month(&ds, month("2025-08")).unwrap();
        assert!(matches!(
            state.select_day(day("2025-09-29")),
            Err(NavError::UnknownDay { .. })
        ));
    }

    #[test]
    fn test_invalid_transitions_rejected() {
        let ds = dataset();
        assert!(matches!(
            NavState::Root.select_day(day("2025-09-29")),
            Err(NavError::InvalidTransition {
                from: NavLevel::Root,
                ..
            })
        ));
        assert!(matches!(
            NavState::Histogram.select_month(&ds, month("2025-09")),
            Err(NavError::InvalidTransition {
                from: NavLevel::Histogram,
                ..
            })
        ));
    }

    #[test]
    fn test_render_levels() {
        let ds = dataset();
        assert!(matches!(
            NavState::Root.render(&ds),
            View::Root(RootView::Loaded { .. })
        ));
        assert!(matches!(
            NavState::Root.render(&Dataset::empty()),
            View::Root(RootView::Empty)
        ));

        let state = NavState::Root
            .select_month(&ds, month("2025-09"))
            .unwrap()
            .select_day(day("2025-09-29"))
            .unwrap();
        match state.render(&ds) {
            View::Day(view) => {
                assert_eq!(view.hours.len(), 24);
                assert_eq!(view.hours[10].count, 1);
                assert_eq!(view.hours[23].count, 1);
            }
            other => panic!("unexpected view {:?}", other),
        }

        assert!(matches!(
            NavState::Histogram.render(&ds),
            View::Histogram(_)
        ));
    }
}
