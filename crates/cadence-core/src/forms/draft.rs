//! Draft form: input state for a new scheduled item.

use jiff::civil::DateTime;

use super::validate::{validate, ValidFields};
use crate::{
    dates,
    error::Result,
    models::{ContentType, DraftStatus, Platform, Priority, ScheduledItem},
};

/// Input state for a new item. Lives until submission commits or the form
/// is reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftForm {
    pub title: String,
    /// Raw platform name, validated against [`Platform`]
    pub platform: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    pub content_type: ContentType,
    pub status: DraftStatus,
    pub priority: Priority,
    pub description: String,
    pub campaign: String,
    /// Whether the user asked for AI help writing the copy. Carried on the
    /// form only; content generation happens elsewhere.
    pub ai_assist: bool,
}

/// A single field change, applied with [`DraftForm::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftEdit {
    Title(String),
    Platform(String),
    Date(String),
    Time(String),
    ContentType(ContentType),
    Status(DraftStatus),
    Priority(Priority),
    Description(String),
    Campaign(String),
    AiAssist(bool),
}

impl DraftForm {
    /// Blank form scheduled at the default slot after `now`.
    pub fn with_default_schedule(now: DateTime) -> Self {
        let slot = dates::default_slot(now);
        Self {
            title: String::new(),
            platform: Platform::Instagram.as_str().to_string(),
            date: dates::format_date(slot.date()),
            time: dates::format_time(slot.time()),
            content_type: ContentType::default(),
            status: DraftStatus::default(),
            priority: Priority::default(),
            description: String::new(),
            campaign: String::new(),
            ai_assist: false,
        }
    }

    /// Returns the form with one field replaced.
    #[must_use]
    pub fn apply(self, edit: DraftEdit) -> Self {
        match edit {
            DraftEdit::Title(title) => Self { title, ..self },
            DraftEdit::Platform(platform) => Self { platform, ..self },
            DraftEdit::Date(date) => Self { date, ..self },
            DraftEdit::Time(time) => Self { time, ..self },
            DraftEdit::ContentType(content_type) => Self {
                content_type,
                ..self
            },
            DraftEdit::Status(status) => Self { status, ..self },
            DraftEdit::Priority(priority) => Self { priority, ..self },
            DraftEdit::Description(description) => Self {
                description,
                ..self
            },
            DraftEdit::Campaign(campaign) => Self { campaign, ..self },
            DraftEdit::AiAssist(ai_assist) => Self { ai_assist, ..self },
        }
    }

    /// Applies several edits in order.
    #[must_use]
    pub fn apply_all(self, edits: impl IntoIterator<Item = DraftEdit>) -> Self {
        edits.into_iter().fold(self, DraftForm::apply)
    }

    /// Validates the required fields.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::Validation` with per-field messages.
    pub fn validate(&self) -> Result<ValidFields> {
        validate(&self.title, &self.platform, &self.date, &self.time)
    }

    /// Builds the item this form describes under the given id.
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
            status: self.status.into(),
            content_type: self.content_type,
            ai_generated: false,
            campaign: non_empty(&self.campaign),
            description: non_empty(&self.description),
            priority: Some(self.priority),
        })
    }
}

pub(crate) fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
