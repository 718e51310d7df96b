//! Result wrapper types for displaying operation outcomes.
//!
//! This module provides wrapper types that format the results of create,
//! update and dismiss operations with consistent messaging and resource
//! display.

use std::fmt;

use crate::models::{ScheduledItem, Suggestion};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use cadence_core::{
///     display::CreateResult,
///     models::{ContentType, ItemStatus, Platform, ScheduledItem},
/// };
///
/// let item = ScheduledItem {
///     id: "p1".to_string(),
///     title: "Launch teaser".to_string(),
///     scheduled_at: "2024-05-10T09:00".to_string(),
///     platform: Some(Platform::Instagram),
///     status: ItemStatus::Scheduled,
///     content_type: ContentType::Post,
///     ai_generated: false,
///     campaign: None,
///     description: None,
///     priority: None,
/// };
/// let output = CreateResult::new(item).to_string();
/// assert!(output.contains("Created item with ID: p1"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<ScheduledItem> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created item with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations, with the
/// list of changes made.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<Suggestion> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated suggestion with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying a dismissed suggestion.
pub struct DismissResult<T> {
    pub resource: T,
}

impl<T> DismissResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DismissResult<Suggestion> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Dismissed suggestion '{}' (ID: {})",
            self.resource.title, self.resource.id
        )
    }
}
