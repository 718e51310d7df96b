//! Month navigation and read-only views for the ContentCalendar.

use jiff::civil::Date;

use super::ContentCalendar;
use crate::{
    calendar::{build_month_grid, MonthGrid},
    dates::{self, DateKey},
    error::Result,
    models::{CalendarSummary, ScheduledItem, ViewFilter},
};

/// A move of the viewed month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthStep {
    Next,
    Previous,
    /// Back to the month containing today
    Reset,
    /// Any number of months, negative for the past
    Offset(i32),
}

impl ContentCalendar {
    /// First day of the viewed month.
    pub fn view_month(&self) -> Date {
        self.lock().view_month
    }

    /// Moves the viewed month and returns its grid.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::InvalidInput` when the target month, or one
    /// of its padding weeks, is out of the supported range; the viewed month
    /// is left unchanged.
    pub fn go_to_month(&self, step: MonthStep) -> Result<MonthGrid> {
        let today = self.config.clock.today();
        let mut state = self.lock();
        let month = match step {
            MonthStep::Next => dates::add_months(state.view_month, 1)?,
            MonthStep::Previous => dates::add_months(state.view_month, -1)?,
            MonthStep::Reset => dates::month_start(today),
            MonthStep::Offset(n) => dates::add_months(state.view_month, n)?,
        };
        let grid = build_month_grid(month, &state.index, today)?;
        state.view_month = month;
        Ok(grid)
    }

    /// Grid for the viewed month.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::InvalidInput` when the builder was pointed at
    /// a month whose padding weeks are out of the supported range.
    pub fn month_grid(&self) -> Result<MonthGrid> {
        let today = self.config.clock.today();
        let state = self.lock();
        build_month_grid(state.view_month, &state.index, today)
    }

    /// Aggregate counts for the viewed month.
    pub fn summary(&self) -> CalendarSummary {
        let state = self.lock();
        CalendarSummary::tally(
            state.view_month,
            &state.items,
            state.index.count_in_month(state.view_month),
            state.suggestions.len(),
        )
    }

    /// Placed items at or after now, ascending, at most `limit` of them.
    pub fn upcoming(&self, limit: usize) -> Vec<ScheduledItem> {
        let now = self.config.clock.now();
        let state = self.lock();
        state.index.upcoming(now).take(limit).cloned().collect()
    }

    /// Items placed on `date` under the current filter.
    pub fn items_on(&self, date: Date) -> Vec<ScheduledItem> {
        self.lock().index.items_on(DateKey::from(date)).to_vec()
    }

    pub fn filter(&self) -> ViewFilter {
        self.lock().filter
    }

    /// Replaces the view filter and rebuilds the index.
    pub fn set_filter(&self, filter: ViewFilter) {
        let mut state = self.lock();
        if state.filter != filter {
            state.filter = filter;
            state.reindex();
        }
    }
}
