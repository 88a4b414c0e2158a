//! The analysis session: the current dataset plus the navigation state over it.

use super::ingest::{IngestReport, SourceFailure};
use crate::domain::{Dataset, DayKey, MonthKey};
use crate::engine::{NavError, NavState, View};

#[derive(Debug, Clone, Default)]
pub struct Session {
    dataset: Dataset,
    nav: NavState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the dataset wholesale and return to the root level.
    pub fn load(&mut self, report: IngestReport) -> Vec<SourceFailure> {
        self.dataset = report.dataset;
        self.nav = NavState::Root;
        report.failures
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    pub fn view(&self) -> View {
        self.nav.render(&self.dataset)
    }

    /// Drill into a month. On error the session stays where it was.
    pub fn select_month(&mut self, month: MonthKey) -> Result<View, NavError> {
        let next = self.nav.clone().select_month(&self.dataset, month)?;
        Ok(self.transition(next))
    }

    /// Drill into a day of the selected month. On error the session stays where it was.
    pub fn select_day(&mut self, day: DayKey) -> Result<View, NavError> {
        let next = self.nav.clone().select_day(day)?;
        Ok(self.transition(next))
    }

    pub fn enter_histogram(&mut self) -> View {
        let next = self.nav.clone().enter_histogram();
        self.transition(next)
    }

    /// One level up. At the root this is a no-op.
    pub fn back(&mut self) -> View {
        let next = std::mem::take(&mut self.nav).back();
        self.nav = next;
        tracing::debug!(to = ?self.nav.level(), "navigate back");
        self.view()
    }

    fn transition(&mut self, next: NavState) -> View {
        tracing::debug!(from = ?self.nav.level(), to = ?next.level(), "navigation");
        self.nav = next;
        self.view()
    }
}
