//! Scheduled item model definition.

use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

use super::{ContentType, ItemStatus, Platform, Priority};
use crate::dates;

/// A content post bound to a moment in time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledItem {
    /// Unique, stable identifier
    pub id: String,

    /// Display title
    pub title: String,

    /// Local, time-zone-naive timestamp as received from the producer.
    ///
    /// Kept verbatim; see [`ScheduledItem::scheduled_datetime`].
    pub scheduled_at: String,

    /// Target platform, absent for producers that do not track it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,

    /// Lifecycle status
    pub status: ItemStatus,

    /// Format of the content
    #[serde(default)]
    pub content_type: ContentType,

    /// True when the item came from a converted suggestion
    #[serde(default)]
    pub ai_generated: bool,

    /// Free-text campaign label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign: Option<String>,

    /// Longer description carried over from the draft or suggestion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Priority carried over from the draft or suggestion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl ScheduledItem {
    /// Parsed `scheduled_at`, or `None` when the producer sent something
    /// unparseable. Such items have no day membership.
    pub fn scheduled_datetime(&self) -> Option<DateTime> {
        dates::parse_local(&self.scheduled_at)
    }

    pub fn is_placeable(&self) -> bool {
        self.scheduled_datetime().is_some()
    }
}
