//! Display labels and icons for the closed enumerations.
//!
//! Kept apart from the model types: the models carry wire names only, and
//! every human-facing spelling lives here.

use crate::models::{ContentType, DraftStatus, ItemStatus, Platform, Priority};

/// Human-facing name and icon of an enumeration value.
pub trait Label {
    fn label(&self) -> &'static str;

    fn icon(&self) -> &'static str;

    /// Icon and label, e.g. `"✓ Published"`.
    fn with_icon(&self) -> String {
        format!("{} {}", self.icon(), self.label())
    }
}

impl Label for ItemStatus {
    fn label(&self) -> &'static str {
        match self {
            ItemStatus::Draft => "Draft",
            ItemStatus::Scheduled => "Scheduled",
            ItemStatus::Published => "Published",
            ItemStatus::Failed => "Failed",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ItemStatus::Draft => "○",
            ItemStatus::Scheduled => "◷",
            ItemStatus::Published => "✓",
            ItemStatus::Failed => "✗",
        }
    }
}

impl Label for DraftStatus {
    fn label(&self) -> &'static str {
        ItemStatus::from(*self).label()
    }

    fn icon(&self) -> &'static str {
        ItemStatus::from(*self).icon()
    }
}

impl Label for Platform {
    fn label(&self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::Facebook => "Facebook",
            Platform::Tiktok => "TikTok",
            Platform::Linkedin => "LinkedIn",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Platform::Instagram => "IG",
            Platform::Facebook => "FB",
            Platform::Tiktok => "TT",
            Platform::Linkedin => "IN",
        }
    }
}

impl Label for ContentType {
    fn label(&self) -> &'static str {
        match self {
            ContentType::Post => "Post",
            ContentType::Reel => "Reel",
            ContentType::Carousel => "Carousel",
            ContentType::Story => "Story",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ContentType::Post => "▣",
            ContentType::Reel => "▶",
            ContentType::Carousel => "❐",
            ContentType::Story => "◔",
        }
    }
}

impl Label for Priority {
    fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Priority::High => "▲",
            Priority::Medium => "■",
            Priority::Low => "▼",
        }
    }
}
