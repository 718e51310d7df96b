//! Rectangular month grid covering whole Monday-to-Sunday weeks.

use jiff::civil::Date;
use serde::Serialize;

use super::EventIndex;
use crate::{
    dates::{self, DateKey},
    error::Result,
    models::CalendarDay,
};

/// Days shown for one month, padded to complete weeks.
///
/// The days form a contiguous range that starts on a Monday and ends on a
/// Sunday, so the length is always a multiple of seven.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthGrid {
    month: Date,
    days: Vec<CalendarDay>,
}

/// Builds the grid for the month containing `month`.
///
/// `today` marks the cell flagged `is_today`; events come from `index`.
///
/// # Errors
///
/// Returns `CalendarError::InvalidInput` for a month whose padding weeks
/// leave the supported date range.
pub fn build_month_grid(month: Date, index: &EventIndex, today: Date) -> Result<MonthGrid> {
    let first = dates::month_start(month);
    let (start, end) = dates::week_bounds(first)?;
    let today = DateKey::from(today);

    let days = dates::days_inclusive(start, end)
        .map(|date| {
            let key = DateKey::from(date);
            CalendarDay {
                date,
                is_current_month: date.year() == first.year() && date.month() == first.month(),
                is_today: key == today,
                events: index.items_on(key).to_vec(),
            }
        })
        .collect();

    Ok(MonthGrid { month: first, days })
}

impl MonthGrid {
    /// First day of the viewed month.
    pub fn month(&self) -> Date {
        self.month
    }

    pub fn days(&self) -> &[CalendarDay] {
        &self.days
    }

    pub fn into_days(self) -> Vec<CalendarDay> {
        self.days
    }

    /// Rows of seven days, Monday first.
    pub fn weeks(&self) -> std::slice::ChunksExact<'_, CalendarDay> {
        self.days.chunks_exact(7)
    }

    /// First date shown (a Monday).
    pub fn start(&self) -> Option<Date> {
        self.days.first().map(|day| day.date)
    }

    /// Last date shown (a Sunday).
    pub fn end(&self) -> Option<Date> {
        self.days.last().map(|day| day.date)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Cells belonging to the viewed month.
    pub fn current_month_days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.days.iter().filter(|day| day.is_current_month)
    }

    /// Events placed on days of the viewed month.
    pub fn event_count(&self) -> usize {
        self.current_month_days().map(|day| day.events.len()).sum()
    }

    /// Cell for a given date, if shown.
    pub fn day(&self, date: Date) -> Option<&CalendarDay> {
        self.days.iter().find(|day| day.date == date)
    }

    /// The cell flagged as today, if it is shown.
    pub fn today(&self) -> Option<&CalendarDay> {
        self.days.iter().find(|day| day.is_today)
    }
}

#[cfg(test)]
mod tests {
    use jiff::{civil::date, ToSpan};

    use super::*;
    use crate::{
        error::CalendarError,
        models::{ContentType, ItemStatus, ScheduledItem},
    };

    fn item(id: &str, at: &str) -> ScheduledItem {
        ScheduledItem {
            id: id.to_string(),
            title: id.to_string(),
            scheduled_at: at.to_string(),
            platform: None,
            status: ItemStatus::Scheduled,
            content_type: ContentType::Post,
            ai_generated: false,
            campaign: None,
            description: None,
            priority: None,
        }
    }

    #[test]
    fn test_may_2024_grid_bounds() {
        let index = EventIndex::build(&[
            item("first", "2024-05-01T09:00"),
            item("last", "2024-05-31T23:00"),
        ]);
        let grid = build_month_grid(date(2024, 5, 15), &index, date(2024, 5, 10)).unwrap();

        assert_eq!(grid.month(), date(2024, 5, 1));
        assert_eq!(grid.start(), Some(date(2024, 4, 29)));
        assert_eq!(grid.end(), Some(date(2024, 6, 2)));
        assert_eq!(grid.len(), 35);
        assert_eq!(grid.weeks().count(), 5);

        let first = grid.day(date(2024, 5, 1)).unwrap();
        assert_eq!(first.events.len(), 1);
        assert_eq!(first.events[0].id, "first");
        let last = grid.day(date(2024, 5, 31)).unwrap();
        assert_eq!(last.events[0].id, "last");
        assert_eq!(grid.event_count(), 2);
    }

    #[test]
    fn test_month_starting_on_monday_has_no_leading_days() {
        // April 2024 starts on a Monday and ends on a Tuesday.
        let grid = build_month_grid(date(2024, 4, 1), &EventIndex::default(), date(2024, 1, 1))
            .unwrap();
        assert_eq!(grid.start(), Some(date(2024, 4, 1)));
        assert_eq!(grid.end(), Some(date(2024, 5, 5)));
        assert!(grid.days()[0].is_current_month);
    }

    #[test]
    fn test_february_spanning_four_weeks() {
        // February 2021: Monday 1st through Sunday 28th.
        let grid = build_month_grid(date(2021, 2, 10), &EventIndex::default(), date(2021, 2, 1))
            .unwrap();
        assert_eq!(grid.len(), 28);
        assert!(grid.days().iter().all(|day| day.is_current_month));
    }

    #[test]
    fn test_six_week_month() {
        // September 2024 starts on a Sunday.
        let grid = build_month_grid(date(2024, 9, 1), &EventIndex::default(), date(2024, 9, 1))
            .unwrap();
        assert_eq!(grid.start(), Some(date(2024, 8, 26)));
        assert_eq!(grid.end(), Some(date(2024, 10, 6)));
        assert_eq!(grid.len(), 42);
        assert_eq!(grid.current_month_days().count(), 30);
    }

    #[test]
    fn test_today_flag() {
        let grid = build_month_grid(date(2024, 5, 1), &EventIndex::default(), date(2024, 6, 1))
            .unwrap();
        let today = grid.today().unwrap();
        assert_eq!(today.date, date(2024, 6, 1));
        assert!(!today.is_current_month);
        assert_eq!(grid.days().iter().filter(|day| day.is_today).count(), 1);

        let elsewhere = build_month_grid(date(2024, 5, 1), &EventIndex::default(), date(2024, 8, 1))
            .unwrap();
        assert!(elsewhere.today().is_none());
    }

    #[test]
    fn test_padding_days_carry_their_events() {
        let index = EventIndex::build(&[item("april", "2024-04-30T10:00")]);
        let grid = build_month_grid(date(2024, 5, 1), &index, date(2024, 5, 1)).unwrap();

        let padding = grid.day(date(2024, 4, 30)).unwrap();
        assert!(!padding.is_current_month);
        assert_eq!(padding.events.len(), 1);
        assert_eq!(grid.event_count(), 0);
    }

    #[test]
    fn test_range_edges_keep_whole_weeks() {
        let first_months = Date::MIN.series(1.month()).take(24);
        let last_months = Date::MAX.first_of_month().series((-1).month()).take(24);

        for month in first_months.chain(last_months) {
            match build_month_grid(month, &EventIndex::default(), month) {
                Ok(grid) => {
                    assert_eq!(grid.len() % 7, 0, "{month}");
                    assert_eq!(grid.weeks().count() * 7, grid.len(), "{month}");
                    let in_month = grid.current_month_days().count();
                    assert_eq!(in_month, month.days_in_month() as usize, "{month}");
                }
                Err(err) => assert!(matches!(err, CalendarError::InvalidInput { .. }), "{month}"),
            }
        }

        // December 9999 ends on a Friday; its last padding week does not exist.
        let index = EventIndex::default();
        assert!(build_month_grid(date(9999, 12, 1), &index, date(2024, 5, 10)).is_err());
        let november = build_month_grid(date(9999, 11, 1), &index, date(2024, 5, 10)).unwrap();
        assert_eq!(november.end(), Some(date(9999, 12, 5)));
    }
}
