//! AI scheduling suggestion model.

use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

use super::{Platform, Priority};
use crate::dates;

/// A proposed, not-yet-committed content idea.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Target platform; a producer may leave it for the user to pick
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    #[serde(default)]
    pub priority: Priority,
    /// Proposed local timestamp, kept verbatim like item timestamps
    pub scheduled_for: String,
    /// Rationale given by the generator
    #[serde(default)]
    pub reason: String,
}

impl Suggestion {
    pub fn scheduled_datetime(&self) -> Option<DateTime> {
        dates::parse_local(&self.scheduled_for)
    }
}

/// How a suggestion left the pending set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    /// Converted into a scheduled item
    Inserted,
    /// Discarded by the user
    Dismissed,
}
