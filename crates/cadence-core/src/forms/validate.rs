//! Field validation shared by drafts and suggestion edits.

use std::str::FromStr;

use jiff::civil::{Date, DateTime, Time};

use super::FormField;
use crate::{
    error::{CalendarError, FieldErrors, Result},
    models::Platform,
};

/// Message for a missing required field.
pub const REQUIRED: &str = "required";

/// The validated core of a form: everything needed to place an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidFields {
    pub title: String,
    pub platform: Platform,
    pub scheduled_at: DateTime,
}

/// Validates title, platform, date and time together.
///
/// Every failing field is reported, not just the first one.
///
/// # Errors
///
/// Returns `CalendarError::Validation` carrying one message per failing
/// field.
pub fn validate(title: &str, platform: &str, date: &str, time: &str) -> Result<ValidFields> {
    let mut errors = FieldErrors::new();

    let title = title.trim();
    if title.is_empty() {
        errors.insert(FormField::Title, REQUIRED);
    }

    let platform = match platform.trim() {
        "" => {
            errors.insert(FormField::Platform, REQUIRED);
            None
        }
        raw => match Platform::from_str(raw) {
            Ok(platform) => Some(platform),
            Err(_) => {
                errors.insert(
                    FormField::Platform,
                    "must be one of instagram, facebook, tiktok, linkedin",
                );
                None
            }
        },
    };

    let date = match date.trim() {
        "" => {
            errors.insert(FormField::Date, REQUIRED);
            None
        }
        raw => match raw.parse::<Date>() {
            Ok(date) => Some(date),
            Err(_) => {
                errors.insert(FormField::Date, "invalid date, expected YYYY-MM-DD");
                None
            }
        },
    };

    let time = match time.trim() {
        "" => {
            errors.insert(FormField::Time, REQUIRED);
            None
        }
        raw => match raw.parse::<Time>() {
            Ok(time) => Some(time),
            Err(_) => {
                errors.insert(FormField::Time, "invalid time, expected HH:MM");
                None
            }
        },
    };

    if let (Some(platform), Some(date), Some(time)) = (platform, date, time) {
        if errors.is_empty() {
            return Ok(ValidFields {
                title: title.to_string(),
                platform,
                scheduled_at: date.to_datetime(time),
            });
        }
    }
    // A `None` above always recorded a message, so this set is non-empty.
    Err(CalendarError::Validation(errors))
}
