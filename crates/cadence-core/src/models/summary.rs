//! Month-scoped aggregate counts.

use std::collections::BTreeMap;

use jiff::civil::Date;
use serde::Serialize;

use super::{ItemStatus, Platform, ScheduledItem};

/// Aggregate counts shown alongside a month grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarSummary {
    /// First day of the viewed month
    pub month: Date,
    /// Items placed on days of the viewed month
    pub events_in_month: usize,
    /// Suggestions still waiting for a decision
    pub pending_suggestions: usize,
    /// Items still in `draft` status, across all dates
    pub backlog: usize,
    /// Item counts per status, across all dates
    pub by_status: BTreeMap<ItemStatus, usize>,
    /// Item counts per platform, across all dates
    pub by_platform: BTreeMap<Platform, usize>,
    /// Items whose timestamp could not be parsed
    pub unplaced: usize,
}

impl CalendarSummary {
    /// Tallies the collection-wide counts; month-scoped numbers are
    /// supplied by the caller.
    pub fn tally(
        month: Date,
        items: &[ScheduledItem],
        events_in_month: usize,
        pending_suggestions: usize,
    ) -> Self {
        let mut by_status = BTreeMap::new();
        let mut by_platform = BTreeMap::new();
        let mut unplaced = 0;

        for item in items {
            *by_status.entry(item.status).or_insert(0) += 1;
            if let Some(platform) = item.platform {
                *by_platform.entry(platform).or_insert(0) += 1;
            }
            if !item.is_placeable() {
                unplaced += 1;
            }
        }

        Self {
            month,
            events_in_month,
            pending_suggestions,
            backlog: by_status.get(&ItemStatus::Draft).copied().unwrap_or(0),
            by_status,
            by_platform,
            unplaced,
        }
    }
}
