//! Collection wrapper types for displaying groups of domain objects.
//!
//! This module provides wrapper types that format collections of domain objects
//! with consistent structure and empty collection handling.

use std::{fmt, ops::Index};

use crate::models::{ScheduledItem, Suggestion};

/// Newtype wrapper for displaying a list of scheduled items.
///
/// # Examples
///
/// ```rust
/// use cadence_core::{
///     display::Items,
///     models::{ContentType, ItemStatus, Platform, ScheduledItem},
/// };
///
/// let item = ScheduledItem {
///     id: "p1".to_string(),
///     title: "Launch teaser".to_string(),
///     scheduled_at: "2024-05-10T09:00".to_string(),
///     platform: Some(Platform::Instagram),
///     status: ItemStatus::Draft,
///     content_type: ContentType::Post,
///     ai_generated: false,
///     campaign: None,
///     description: None,
///     priority: None,
/// };
/// let output = format!("{}", Items(vec![item]));
/// assert!(output.contains("Launch teaser"));
/// ```
pub struct Items(pub Vec<ScheduledItem>);

impl Items {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of items in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&ScheduledItem> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScheduledItem> {
        self.0.iter()
    }
}

impl Index<usize> for Items {
    type Output = ScheduledItem;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Items {
    type Item = ScheduledItem;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Items {
    type Item = &'a ScheduledItem;
    type IntoIter = std::slice::Iter<'a, ScheduledItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Items {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No items found.")
        } else {
            for item in &self.0 {
                write!(f, "{item}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying the pending suggestion list.
pub struct Suggestions(pub Vec<Suggestion>);

impl Suggestions {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Suggestion> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Suggestions {
    type Item = &'a Suggestion;
    type IntoIter = std::slice::Iter<'a, Suggestion>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Suggestions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No pending suggestions.")
        } else {
            for suggestion in &self.0 {
                write!(f, "{suggestion}")?;
            }
            Ok(())
        }
    }
}
