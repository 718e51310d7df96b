//! Calendar grid cell.

use jiff::civil::Date;
use serde::Serialize;

use super::ScheduledItem;
use crate::dates::DateKey;

/// A single grid cell: one date and the items bound to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: Date,
    /// Whether `date` falls in the month being viewed
    pub is_current_month: bool,
    /// Whether `date` is the current date at evaluation time
    pub is_today: bool,
    /// Items on this date, ascending by scheduled time
    pub events: Vec<ScheduledItem>,
}

impl CalendarDay {
    pub fn key(&self) -> DateKey {
        DateKey::from(self.date)
    }
}
