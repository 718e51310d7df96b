#![allow(dead_code)]

use cadence_core::{
    CalendarBuilder, Clock, ContentCalendar, ContentType, ItemStatus, Platform, Priority,
    ScheduledItem, Suggestion,
};
use jiff::civil::datetime;

pub fn item(id: &str, scheduled_at: &str) -> ScheduledItem {
    ScheduledItem {
        id: id.to_string(),
        title: format!("Item {id}"),
        scheduled_at: scheduled_at.to_string(),
        platform: Some(Platform::Instagram),
        status: ItemStatus::Scheduled,
        content_type: ContentType::Post,
        ai_generated: false,
        campaign: None,
        description: None,
        priority: None,
    }
}

pub fn suggestion(id: &str, title: &str, scheduled_for: &str) -> Suggestion {
    Suggestion {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        platform: Some(Platform::Instagram),
        priority: Priority::Medium,
        scheduled_for: scheduled_for.to_string(),
        reason: String::new(),
    }
}

/// Calendar fixed at 2024-05-10 08:10 with no simulated latency.
pub fn create_test_calendar(
    items: Vec<ScheduledItem>,
    suggestions: Vec<Suggestion>,
) -> ContentCalendar {
    CalendarBuilder::new()
        .with_clock(Clock::Fixed(datetime(2024, 5, 10, 8, 10, 0, 0)))
        .with_latency(std::time::Duration::ZERO)
        .with_items(items)
        .with_suggestions(suggestions)
        .build()
}
