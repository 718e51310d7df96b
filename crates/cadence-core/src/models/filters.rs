//! Filter types narrowing which items are placed on the grid.

use super::{ItemStatus, Platform, ScheduledItem};

/// Narrows the items bound to calendar days.
///
/// An empty filter (the default) admits every item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewFilter {
    /// Only items targeting this platform
    pub platform: Option<Platform>,

    /// Only items in this status
    pub status: Option<ItemStatus>,
}

impl ViewFilter {
    /// Filter on a single platform.
    pub fn for_platform(platform: Platform) -> Self {
        Self {
            platform: Some(platform),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.platform.is_none() && self.status.is_none()
    }

    /// Whether `item` passes the filter.
    ///
    /// Items without a platform never match a platform filter.
    pub fn matches(&self, item: &ScheduledItem) -> bool {
        let platform_ok = self
            .platform
            .map_or(true, |platform| item.platform == Some(platform));
        let status_ok = self.status.map_or(true, |status| item.status == status);
        platform_ok && status_ok
    }
}
