//! Request types for changing suggestions.

use super::{Platform, Priority};

/// Optional field changes applied to an open suggestion editor.
///
/// Date and time are raw form strings; they are validated on save or
/// insert, not when applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuggestionPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub platform: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub priority: Option<Priority>,
    pub reason: Option<String>,
}

impl SuggestionPatch {
    /// Patch that only moves the suggestion to another platform.
    pub fn platform(platform: Platform) -> Self {
        Self {
            platform: Some(platform.as_str().to_string()),
            ..Default::default()
        }
    }

    /// Patch that only reschedules the suggestion.
    pub fn schedule(date: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            date: Some(date.into()),
            time: Some(time.into()),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Human-readable list of the fields this patch touches.
    pub fn describe(&self) -> Vec<String> {
        let mut changes = Vec::new();
        if let Some(title) = &self.title {
            changes.push(format!("Title set to '{title}'"));
        }
        if self.description.is_some() {
            changes.push("Description updated".to_string());
        }
        if let Some(platform) = &self.platform {
            changes.push(format!("Platform set to {platform}"));
        }
        if let Some(date) = &self.date {
            changes.push(format!("Date set to {date}"));
        }
        if let Some(time) = &self.time {
            changes.push(format!("Time set to {time}"));
        }
        if let Some(priority) = self.priority {
            changes.push(format!("Priority set to {}", priority.as_str()));
        }
        if self.reason.is_some() {
            changes.push("Reason updated".to_string());
        }
        changes
    }
}
