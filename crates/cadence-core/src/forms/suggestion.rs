//! Detail form used while a suggestion is being edited.

use super::{
    draft::non_empty,
    validate::{validate, ValidFields},
};
use crate::{
    dates,
    error::Result,
    models::{ContentType, ItemStatus, Priority, ScheduledItem, Suggestion, SuggestionPatch},
};

/// Local copy of a suggestion's fields, with `scheduled_for` split into
/// date and time. Edits stay here until saved or inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionForm {
    pub title: String,
    pub description: String,
    pub platform: String,
    pub date: String,
    pub time: String,
    pub priority: Priority,
    pub reason: String,
}

impl From<&Suggestion> for SuggestionForm {
    fn from(suggestion: &Suggestion) -> Self {
        // An unparseable timestamp leaves both fields blank so that save and
        // insert report them as required.
        let (date, time) = suggestion
            .scheduled_datetime()
            .map(|at| (dates::format_date(at.date()), dates::format_time(at.time())))
            .unwrap_or_default();

        Self {
            title: suggestion.title.clone(),
            description: suggestion.description.clone(),
            platform: suggestion
                .platform
                .map(|p| p.as_str().to_string())
                .unwrap_or_default(),
            date,
            time,
            priority: suggestion.priority,
            reason: suggestion.reason.clone(),
        }
    }
}

impl SuggestionForm {
    /// Returns the form with every field present in `patch` replaced.
    #[must_use]
    pub fn apply(self, patch: &SuggestionPatch) -> Self {
        Self {
            title: patch.title.clone().unwrap_or(self.title),
            description: patch.description.clone().unwrap_or(self.description),
            platform: patch.platform.clone().unwrap_or(self.platform),
            date: patch.date.clone().unwrap_or(self.date),
            time: patch.time.clone().unwrap_or(self.time),
            priority: patch.priority.unwrap_or(self.priority),
            reason: patch.reason.clone().unwrap_or(self.reason),
        }
    }

    /// # Errors
    ///
    /// Returns `CalendarError::Validation` with per-field messages.
    pub fn validate(&self) -> Result<ValidFields> {
        validate(&self.title, &self.platform, &self.date, &self.time)
    }

    /// The suggestion as it reads after saving this form.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::Validation` when the form is invalid.
    pub fn to_suggestion(&self, id: &str) -> Result<Suggestion> {
        let valid = self.validate()?;
        Ok(Suggestion {
            id: id.to_string(),
            title: valid.title,
            description: self.description.clone(),
            platform: Some(valid.platform),
            priority: self.priority,
            scheduled_for: dates::format_datetime(valid.scheduled_at),
            reason: self.reason.clone(),
        })
    }

    /// The scheduled item produced by inserting this form.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::Validation` when the form is invalid.
    pub fn to_item(&self, id: String) -> Result<ScheduledItem> {
        let valid = self.validate()?;
        Ok(ScheduledItem {
            id,
            title: valid.title,
            scheduled_at: dates::format_datetime(valid.scheduled_at),
            platform: Some(valid.platform),
            status: ItemStatus::Scheduled,
            content_type: ContentType::default(),
            ai_generated: true,
            campaign: None,
            description: non_empty(&self.description),
            priority: Some(self.priority),
        })
    }
}
