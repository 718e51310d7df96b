//! Calendar-day keys and month arithmetic.
//!
//! Everything here is pure: no clock reads, no I/O. Weeks start on Monday
//! regardless of the platform locale.

use std::fmt;

use jiff::{
    civil::{self, Date, DateTime, Time},
    tz::TimeZone,
    Timestamp, ToSpan,
};
use serde::{Serialize, Serializer};

use crate::error::{CalendarError, Result};

/// Minimum lead time before the default slot of a new draft.
pub const SLOT_LEAD_MINUTES: i64 = 45;

/// Granularity of default draft slots.
pub const SLOT_STEP_MINUTES: i8 = 15;

/// Comparable key for a single calendar day.
///
/// Two instants share a key iff they share year, month and day in local
/// time. Keys order chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateKey(Date);

impl DateKey {
    /// The calendar day this key stands for.
    pub fn date(self) -> Date {
        self.0
    }
}

impl From<Date> for DateKey {
    fn from(date: Date) -> Self {
        Self(date)
    }
}

impl From<DateTime> for DateKey {
    fn from(datetime: DateTime) -> Self {
        Self(datetime.date())
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Key of the calendar day an instant falls on.
pub fn date_key(datetime: DateTime) -> DateKey {
    DateKey::from(datetime)
}

/// First day of the month containing `date`.
pub fn month_start(date: Date) -> Date {
    date.first_of_month()
}

/// Last day of the month containing `date`.
pub fn month_end(date: Date) -> Date {
    date.last_of_month()
}

/// Start of the month `n` months away from the month containing `date`.
///
/// # Errors
///
/// Returns `CalendarError::InvalidInput` when the result falls outside the
/// supported date range.
pub fn add_months(date: Date, n: i32) -> Result<Date> {
    month_start(date).checked_add(n.months()).map_err(|e| {
        CalendarError::invalid_input("month").with_reason(format!(
            "cannot move {n} months from {}: {e}",
            month_start(date)
        ))
    })
}

/// First Monday and last Sunday of the whole weeks covering the month
/// containing `date`.
///
/// # Errors
///
/// Returns `CalendarError::InvalidInput` when a padding week would fall
/// outside the supported date range, as it does for December 9999.
pub fn week_bounds(date: Date) -> Result<(Date, Date)> {
    let first = month_start(date);
    let last = month_end(date);
    let out_of_range = |e: jiff::Error| {
        CalendarError::invalid_input("month")
            .with_reason(format!("weeks around {first} are out of range: {e}"))
    };
    let start = first
        .checked_sub(i64::from(weekday_index(first)).days())
        .map_err(out_of_range)?;
    let end = last
        .checked_add(i64::from(6 - weekday_index(last)).days())
        .map_err(out_of_range)?;
    Ok((start, end))
}

/// Day-of-week index with Monday = 0 through Sunday = 6.
pub fn weekday_index(date: Date) -> u8 {
    date.weekday().to_monday_zero_offset() as u8
}

/// Every date in `[start, end]`, ascending. Empty when `end < start`.
pub fn days_inclusive(start: Date, end: Date) -> impl Iterator<Item = Date> {
    start.series(1.day()).take_while(move |day| *day <= end)
}

/// Parses a record timestamp into local civil time.
///
/// Instants carrying an offset (or `Z`) are converted to the system time
/// zone; civil datetimes are taken as-is; bare dates map to midnight.
/// Anything else yields `None`.
pub fn parse_local(raw: &str) -> Option<DateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(timestamp) = raw.parse::<Timestamp>() {
        return Some(timestamp.to_zoned(TimeZone::system()).datetime());
    }
    if let Ok(datetime) = raw.parse::<DateTime>() {
        return Some(datetime);
    }
    raw.parse::<Date>()
        .ok()
        .map(|date| date.to_datetime(Time::midnight()))
}

/// Formats a date as `YYYY-MM-DD`.
pub fn format_date(date: Date) -> String {
    date.strftime("%Y-%m-%d").to_string()
}

/// Formats a time as `HH:MM`.
pub fn format_time(time: Time) -> String {
    time.strftime("%H:%M").to_string()
}

/// Formats a datetime as `YYYY-MM-DDTHH:MM`, the form items are stored in.
pub fn format_datetime(datetime: DateTime) -> String {
    datetime.strftime("%Y-%m-%dT%H:%M").to_string()
}

/// The next quarter-hour slot at least [`SLOT_LEAD_MINUTES`] after `now`.
pub fn default_slot(now: DateTime) -> DateTime {
    let earliest = now.saturating_add(SLOT_LEAD_MINUTES.minutes());
    let remainder = earliest.minute() % SLOT_STEP_MINUTES;
    let floored = earliest.date().to_datetime(civil::time(
        earliest.hour(),
        earliest.minute() - remainder,
        0,
        0,
    ));

    if remainder == 0 && earliest.second() == 0 && earliest.subsec_nanosecond() == 0 {
        floored
    } else {
        floored.saturating_add(i64::from(SLOT_STEP_MINUTES).minutes())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::{date, datetime};

    use super::*;

    #[test]
    fn test_date_key_ignores_time_of_day() {
        let morning = datetime(2024, 5, 1, 0, 0, 0, 0);
        let night = datetime(2024, 5, 1, 23, 59, 59, 0);
        let next = datetime(2024, 5, 2, 0, 0, 0, 0);

        assert_eq!(date_key(morning), date_key(night));
        assert_ne!(date_key(night), date_key(next));
        assert!(date_key(night) < date_key(next));
        assert_eq!(date_key(morning).to_string(), "2024-05-01");
    }

    #[test]
    fn test_month_boundaries() {
        assert_eq!(month_start(date(2024, 2, 17)), date(2024, 2, 1));
        assert_eq!(month_end(date(2024, 2, 17)), date(2024, 2, 29));
        assert_eq!(month_end(date(2023, 2, 1)), date(2023, 2, 28));
        assert_eq!(month_end(date(2024, 12, 5)), date(2024, 12, 31));
    }

    #[test]
    fn test_add_months_rolls_over_years() {
        assert_eq!(add_months(date(2024, 12, 31), 1).unwrap(), date(2025, 1, 1));
        assert_eq!(add_months(date(2024, 1, 15), -1).unwrap(), date(2023, 12, 1));
        assert_eq!(add_months(date(2024, 5, 10), 0).unwrap(), date(2024, 5, 1));
        assert_eq!(add_months(date(2024, 5, 10), -29).unwrap(), date(2021, 12, 1));
    }

    #[test]
    fn test_add_months_out_of_range() {
        let result = add_months(date(9999, 12, 1), 1);
        assert!(matches!(
            result,
            Err(CalendarError::InvalidInput { ref field, .. }) if field == "month"
        ));
    }

    #[test]
    fn test_week_bounds() {
        assert_eq!(
            week_bounds(date(2024, 5, 17)).unwrap(),
            (date(2024, 4, 29), date(2024, 6, 2))
        );
        assert_eq!(
            week_bounds(date(9999, 11, 1)).unwrap(),
            (date(9999, 11, 1), date(9999, 12, 5))
        );
        assert!(matches!(
            week_bounds(date(9999, 12, 1)),
            Err(CalendarError::InvalidInput { ref field, .. }) if field == "month"
        ));
    }

    #[test]
    fn test_weekday_index_starts_monday() {
        assert_eq!(weekday_index(date(2024, 4, 29)), 0); // Monday
        assert_eq!(weekday_index(date(2024, 5, 1)), 2); // Wednesday
        assert_eq!(weekday_index(date(2024, 6, 2)), 6); // Sunday
    }

    #[test]
    fn test_days_inclusive() {
        let days: Vec<Date> = days_inclusive(date(2024, 2, 27), date(2024, 3, 1)).collect();
        assert_eq!(
            days,
            vec![
                date(2024, 2, 27),
                date(2024, 2, 28),
                date(2024, 2, 29),
                date(2024, 3, 1)
            ]
        );
        assert_eq!(days_inclusive(date(2024, 3, 2), date(2024, 3, 1)).count(), 0);
    }

    #[test]
    fn test_parse_local_civil_forms() {
        assert_eq!(
            parse_local("2024-05-10T10:00"),
            Some(datetime(2024, 5, 10, 10, 0, 0, 0))
        );
        assert_eq!(
            parse_local("2024-05-10T10:00:30"),
            Some(datetime(2024, 5, 10, 10, 0, 30, 0))
        );
        assert_eq!(
            parse_local("2024-05-10"),
            Some(datetime(2024, 5, 10, 0, 0, 0, 0))
        );
    }

    #[test]
    fn test_parse_local_rejects_garbage() {
        assert_eq!(parse_local(""), None);
        assert_eq!(parse_local("   "), None);
        assert_eq!(parse_local("not a date"), None);
        assert_eq!(parse_local("2024-13-40T10:00"), None);
    }

    #[test]
    fn test_formatting() {
        let at = datetime(2024, 5, 3, 9, 5, 0, 0);
        assert_eq!(format_date(at.date()), "2024-05-03");
        assert_eq!(format_time(at.time()), "09:05");
        assert_eq!(format_datetime(at), "2024-05-03T09:05");
    }

    #[test]
    fn test_default_slot_rounds_up_to_quarter_hour() {
        // 10:07 + 45m = 10:52 -> 11:00
        assert_eq!(
            default_slot(datetime(2024, 5, 10, 10, 7, 0, 0)),
            datetime(2024, 5, 10, 11, 0, 0, 0)
        );
        // 10:00 + 45m = 10:45, already on a slot
        assert_eq!(
            default_slot(datetime(2024, 5, 10, 10, 0, 0, 0)),
            datetime(2024, 5, 10, 10, 45, 0, 0)
        );
        // seconds push to the following slot
        assert_eq!(
            default_slot(datetime(2024, 5, 10, 10, 0, 1, 0)),
            datetime(2024, 5, 10, 11, 0, 0, 0)
        );
    }

    #[test]
    fn test_default_slot_crosses_midnight() {
        assert_eq!(
            default_slot(datetime(2024, 12, 31, 23, 20, 0, 0)),
            datetime(2025, 1, 1, 0, 15, 0, 0)
        );
    }
}
