//! Display implementations for domain models.
//!
//! Markdown output meant for the terminal renderer: headings for records,
//! bullet lists for metadata, a table for the month grid.

use std::fmt;

use super::{datetime::LocalDateTime, labels::Label};
use crate::{
    calendar::MonthGrid,
    dates,
    models::{
        CalendarDay, CalendarSummary, ContentType, DraftStatus, ItemStatus, Platform, Priority,
        ScheduledItem, Suggestion,
    },
};

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

macro_rules! display_as_str {
    ($($kind:ty),*) => {
        $(
            impl fmt::Display for $kind {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.as_str())
                }
            }
        )*
    };
}

display_as_str!(ItemStatus, DraftStatus, Platform, ContentType, Priority);

impl fmt::Display for ScheduledItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} ({})", self.title, self.status.with_icon())?;
        writeln!(f)?;

        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- When: {}", LocalDateTime(&self.scheduled_at))?;
        if let Some(platform) = self.platform {
            writeln!(f, "- Platform: {}", platform.label())?;
        }
        writeln!(f, "- Type: {}", self.content_type.label())?;
        if let Some(priority) = self.priority {
            writeln!(f, "- Priority: {}", priority.with_icon())?;
        }
        if let Some(campaign) = &self.campaign {
            writeln!(f, "- Campaign: {campaign}")?;
        }
        if self.ai_generated {
            writeln!(f, "- AI generated")?;
        }

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} ({} priority)", self.title, self.priority.with_icon())?;
        writeln!(f)?;

        writeln!(f, "- ID: {}", self.id)?;
        if let Some(platform) = self.platform {
            writeln!(f, "- Platform: {}", platform.label())?;
        }
        writeln!(f, "- Proposed: {}", LocalDateTime(&self.scheduled_for))?;

        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }
        if !self.reason.is_empty() {
            writeln!(f)?;
            writeln!(f, "> {}", self.reason)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for CalendarSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Summary for {}", self.month.strftime("%B %Y"))?;
        writeln!(f)?;
        writeln!(f, "- **Scheduled this month**: {}", self.events_in_month)?;
        writeln!(f, "- **Pending suggestions**: {}", self.pending_suggestions)?;
        writeln!(f, "- **Backlog (drafts)**: {}", self.backlog)?;
        if self.unplaced > 0 {
            writeln!(f, "- **Unplaced (bad timestamp)**: {}", self.unplaced)?;
        }

        if !self.by_status.is_empty() {
            writeln!(f)?;
            writeln!(f, "## By status")?;
            writeln!(f)?;
            for (status, count) in &self.by_status {
                writeln!(f, "- {}: {count}", status.with_icon())?;
            }
        }

        if !self.by_platform.is_empty() {
            writeln!(f)?;
            writeln!(f, "## By platform")?;
            writeln!(f)?;
            for (platform, count) in &self.by_platform {
                writeln!(f, "- {}: {count}", platform.label())?;
            }
        }
        Ok(())
    }
}

impl CalendarDay {
    /// Table cell text: day number, today in bold, event count if any.
    fn cell(&self) -> String {
        let day = if self.is_current_month {
            self.date.day().to_string()
        } else {
            format!("_{}_", self.date.day())
        };
        let day = if self.is_today {
            format!("**{day}**")
        } else {
            day
        };
        match self.events.len() {
            0 => day,
            n => format!("{day} ({n})"),
        }
    }
}

impl fmt::Display for MonthGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.month().strftime("%B %Y"))?;
        writeln!(f)?;

        writeln!(f, "|{}|", WEEKDAYS.join("|"))?;
        writeln!(f, "|{}|", vec![":-:"; 7].join("|"))?;
        for week in self.weeks() {
            let cells: Vec<String> = week.iter().map(CalendarDay::cell).collect();
            writeln!(f, "|{}|", cells.join("|"))?;
        }

        let busy: Vec<&CalendarDay> = self.days().iter().filter(|d| !d.events.is_empty()).collect();
        if busy.is_empty() {
            writeln!(f)?;
            return writeln!(f, "No items scheduled.");
        }

        for day in busy {
            writeln!(f)?;
            writeln!(f, "## {}", day.date.strftime("%a %Y-%m-%d"))?;
            writeln!(f)?;
            for event in &day.events {
                let time = event
                    .scheduled_datetime()
                    .map(|at| dates::format_time(at.time()))
                    .unwrap_or_default();
                let platform = event.platform.map(|p| p.label()).unwrap_or("any platform");
                writeln!(
                    f,
                    "- {time} {} ({platform}, {})",
                    event.title,
                    event.status.with_icon()
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::calendar::{build_month_grid, EventIndex};

    fn create_test_item() -> ScheduledItem {
        ScheduledItem {
            id: "p1".to_string(),
            title: "Launch teaser".to_string(),
            scheduled_at: "2024-05-10T09:00".to_string(),
            platform: Some(Platform::Tiktok),
            status: ItemStatus::Scheduled,
            content_type: ContentType::Reel,
            ai_generated: true,
            campaign: Some("Spring".to_string()),
            description: None,
            priority: Some(Priority::High),
        }
    }

    #[test]
    fn test_item_display() {
        let output = create_test_item().to_string();
        assert!(output.contains("### Launch teaser (◷ Scheduled)"));
        assert!(output.contains("- When: Fri 2024-05-10 09:00"));
        assert!(output.contains("- Platform: TikTok"));
        assert!(output.contains("- Campaign: Spring"));
        assert!(output.contains("- AI generated"));
    }

    #[test]
    fn test_month_grid_table() {
        let index = EventIndex::build(&[create_test_item()]);
        let grid = build_month_grid(date(2024, 5, 1), &index, date(2024, 5, 10)).unwrap();
        let output = grid.to_string();

        assert!(output.starts_with("# May 2024"));
        assert!(output.contains("|Mon|Tue|Wed|Thu|Fri|Sat|Sun|"));
        assert!(output.contains("|_29_|_30_|1|2|3|4|5|"));
        assert!(output.contains("**10** (1)"));
        assert!(output.contains("## Fri 2024-05-10"));
        assert!(output.contains("- 09:00 Launch teaser (TikTok, ◷ Scheduled)"));
        // header, separator and five weeks
        assert_eq!(output.lines().filter(|line| line.starts_with('|')).count(), 7);
    }

    #[test]
    fn test_empty_month_grid() {
        let grid = build_month_grid(date(2024, 2, 1), &EventIndex::default(), date(2024, 5, 10))
            .unwrap();
        assert!(grid.to_string().contains("No items scheduled."));
    }

    #[test]
    fn test_status_display_uses_wire_name() {
        assert_eq!(ItemStatus::Failed.to_string(), "failed");
        assert_eq!(Platform::Linkedin.to_string(), "linkedin");
    }
}
