//! Status enumerations for scheduled items and drafts.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of scheduled item statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    /// Item is being prepared and not yet queued for publishing
    Draft,

    /// Item is queued to publish at its scheduled time
    Scheduled,

    /// Item went out successfully
    Published,

    /// Publishing was attempted and failed
    Failed,
}

impl ItemStatus {
    /// All statuses in display order.
    pub const ALL: [ItemStatus; 4] = [
        ItemStatus::Draft,
        ItemStatus::Scheduled,
        ItemStatus::Published,
        ItemStatus::Failed,
    ];

    /// Convert to the wire string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Draft => "draft",
            ItemStatus::Scheduled => "scheduled",
            ItemStatus::Published => "published",
            ItemStatus::Failed => "failed",
        }
    }
}

impl FromStr for ItemStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "draft" => Ok(ItemStatus::Draft),
            "scheduled" => Ok(ItemStatus::Scheduled),
            "published" => Ok(ItemStatus::Published),
            "failed" => Ok(ItemStatus::Failed),
            _ => Err(format!("Invalid item status: {s}")),
        }
    }
}

/// The statuses a user may pick for a new draft.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DraftStatus {
    /// Keep the item as a draft
    #[default]
    Draft,

    /// Queue the item right away
    Scheduled,
}

impl DraftStatus {
    pub fn as_str(&self) -> &'static str {
        ItemStatus::from(*self).as_str()
    }
}

impl From<DraftStatus> for ItemStatus {
    fn from(status: DraftStatus) -> Self {
        match status {
            DraftStatus::Draft => ItemStatus::Draft,
            DraftStatus::Scheduled => ItemStatus::Scheduled,
        }
    }
}

impl FromStr for DraftStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match ItemStatus::from_str(s) {
            Ok(ItemStatus::Draft) => Ok(DraftStatus::Draft),
            Ok(ItemStatus::Scheduled) => Ok(DraftStatus::Scheduled),
            _ => Err(format!(
                "Invalid draft status: {s}. Must be 'draft' or 'scheduled'"
            )),
        }
    }
}
