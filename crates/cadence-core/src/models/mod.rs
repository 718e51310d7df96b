//! Data models for scheduled items, suggestions and calendar cells.
//!
//! Records arrive from external producers (a campaign planner, an AI
//! suggestion generator) as JSON with camelCase field names. Timestamps are
//! kept verbatim and parsed lazily so that a malformed record degrades to
//! "not placed on the grid" instead of failing the whole load.
//!
//! Display implementations live in [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use cadence_core::models::{ContentType, ItemStatus, Platform, ScheduledItem};
//!
//! let item = ScheduledItem {
//!     id: "post-1".to_string(),
//!     title: "Launch teaser".to_string(),
//!     scheduled_at: "2024-05-10T09:00".to_string(),
//!     platform: Some(Platform::Instagram),
//!     status: ItemStatus::Scheduled,
//!     content_type: ContentType::Reel,
//!     ai_generated: false,
//!     campaign: None,
//!     description: None,
//!     priority: None,
//! };
//! assert!(item.is_placeable());
//! ```

pub mod day;
pub mod filters;
pub mod item;
pub mod kinds;
pub mod requests;
pub mod status;
pub mod suggestion;
pub mod summary;

#[cfg(test)]
mod tests;

pub use day::CalendarDay;
pub use filters::ViewFilter;
pub use item::ScheduledItem;
pub use kinds::{ContentType, Platform, Priority};
pub use requests::SuggestionPatch;
pub use status::{DraftStatus, ItemStatus};
pub use suggestion::{Resolution, Suggestion};
pub use summary::CalendarSummary;
