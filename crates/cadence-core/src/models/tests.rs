#[cfg(test)]
mod model_tests {
    use std::str::FromStr;

    use jiff::civil::{date, datetime};

    use crate::models::{
        CalendarSummary, ContentType, DraftStatus, ItemStatus, Platform, Priority, ScheduledItem,
        Suggestion, SuggestionPatch, ViewFilter,
    };

    fn create_test_item(id: &str, scheduled_at: &str, status: ItemStatus) -> ScheduledItem {
        ScheduledItem {
            id: id.to_string(),
            title: format!("Item {id}"),
            scheduled_at: scheduled_at.to_string(),
            platform: Some(Platform::Instagram),
            status,
            content_type: ContentType::Post,
            ai_generated: false,
            campaign: None,
            description: None,
            priority: None,
        }
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!(ItemStatus::from_str("draft").unwrap(), ItemStatus::Draft);
        assert_eq!(ItemStatus::from_str("PUBLISHED").unwrap(), ItemStatus::Published);
        assert_eq!(ItemStatus::from_str(" failed ").unwrap(), ItemStatus::Failed);
        assert!(ItemStatus::from_str("archived").is_err());
    }

    #[test]
    fn test_draft_status_subset() {
        assert_eq!(DraftStatus::from_str("scheduled").unwrap(), DraftStatus::Scheduled);
        assert_eq!(DraftStatus::default(), DraftStatus::Draft);
        assert_eq!(ItemStatus::from(DraftStatus::Scheduled), ItemStatus::Scheduled);

        let err = DraftStatus::from_str("published").unwrap_err();
        assert!(err.contains("Must be 'draft' or 'scheduled'"));
    }

    #[test]
    fn test_platform_and_kinds_from_str() {
        assert_eq!(Platform::from_str("TikTok").unwrap(), Platform::Tiktok);
        assert_eq!(Platform::from_str("linkedin").unwrap(), Platform::Linkedin);
        assert!(Platform::from_str("myspace").is_err());
        assert_eq!(ContentType::from_str("carousel").unwrap(), ContentType::Carousel);
        assert_eq!(Priority::from_str("High").unwrap(), Priority::High);
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn test_item_deserializes_camel_case() {
        let json = r#"{
            "id": "p1",
            "title": "Tip",
            "scheduledAt": "2024-05-10T10:00",
            "platform": "facebook",
            "status": "scheduled",
            "contentType": "story",
            "aiGenerated": true,
            "campaign": "Spring"
        }"#;
        let item: ScheduledItem = serde_json::from_str(json).unwrap();

        assert_eq!(item.platform, Some(Platform::Facebook));
        assert_eq!(item.content_type, ContentType::Story);
        assert!(item.ai_generated);
        assert_eq!(item.campaign.as_deref(), Some("Spring"));
        assert_eq!(
            item.scheduled_datetime(),
            Some(datetime(2024, 5, 10, 10, 0, 0, 0))
        );
    }

    #[test]
    fn test_suggestion_without_platform_still_loads() {
        let json = r#"{"id":"s1","title":"Tip","scheduledFor":"2024-05-10T10:00"}"#;
        let suggestion: Suggestion = serde_json::from_str(json).unwrap();

        assert_eq!(suggestion.platform, None);
        let out = serde_json::to_string(&suggestion).unwrap();
        assert!(!out.contains("platform"));
    }

    #[test]
    fn test_item_without_platform_or_content_type() {
        let json = r#"{"id":"p2","title":"Legacy","scheduledAt":"2024-05-10T10:00","status":"draft"}"#;
        let item: ScheduledItem = serde_json::from_str(json).unwrap();

        assert_eq!(item.platform, None);
        assert_eq!(item.content_type, ContentType::Post);
        assert!(!item.ai_generated);

        let out = serde_json::to_string(&item).unwrap();
        assert!(out.contains("\"scheduledAt\""));
        assert!(!out.contains("platform"));
    }

    #[test]
    fn test_unparseable_item_is_not_placeable() {
        let item = create_test_item("bad", "someday soon", ItemStatus::Scheduled);
        assert_eq!(item.scheduled_datetime(), None);
        assert!(!item.is_placeable());
    }

    #[test]
    fn test_suggestion_deserializes_with_defaults() {
        let json = r#"{"id":"s1","title":"Tip","platform":"instagram","scheduledFor":"2024-05-10T10:00"}"#;
        let suggestion: Suggestion = serde_json::from_str(json).unwrap();

        assert_eq!(suggestion.priority, Priority::Medium);
        assert!(suggestion.description.is_empty());
        assert_eq!(
            suggestion.scheduled_datetime(),
            Some(datetime(2024, 5, 10, 10, 0, 0, 0))
        );
    }

    #[test]
    fn test_view_filter_matches() {
        let mut item = create_test_item("a", "2024-05-10T10:00", ItemStatus::Draft);

        assert!(ViewFilter::default().matches(&item));
        assert!(ViewFilter::for_platform(Platform::Instagram).matches(&item));
        assert!(!ViewFilter::for_platform(Platform::Tiktok).matches(&item));

        let drafts = ViewFilter {
            status: Some(ItemStatus::Draft),
            ..Default::default()
        };
        assert!(drafts.matches(&item));

        item.platform = None;
        assert!(!ViewFilter::for_platform(Platform::Instagram).matches(&item));
        assert!(drafts.matches(&item));
    }

    #[test]
    fn test_summary_tally() {
        let items = vec![
            create_test_item("a", "2024-05-10T10:00", ItemStatus::Draft),
            create_test_item("b", "2024-05-11T10:00", ItemStatus::Draft),
            create_test_item("c", "broken", ItemStatus::Scheduled),
            ScheduledItem {
                platform: None,
                ..create_test_item("d", "2024-06-01T10:00", ItemStatus::Published)
            },
        ];

        let summary = CalendarSummary::tally(date(2024, 5, 1), &items, 2, 3);

        assert_eq!(summary.events_in_month, 2);
        assert_eq!(summary.pending_suggestions, 3);
        assert_eq!(summary.backlog, 2);
        assert_eq!(summary.unplaced, 1);
        assert_eq!(summary.by_status.get(&ItemStatus::Scheduled), Some(&1));
        assert_eq!(summary.by_status.get(&ItemStatus::Failed), None);
        assert_eq!(summary.by_platform.get(&Platform::Instagram), Some(&3));
    }

    #[test]
    fn test_suggestion_patch_describe() {
        assert!(SuggestionPatch::default().is_empty());

        let patch = SuggestionPatch {
            title: Some("New".to_string()),
            ..SuggestionPatch::schedule("2024-05-11", "08:30")
        };
        assert!(!patch.is_empty());
        assert_eq!(
            patch.describe(),
            vec![
                "Title set to 'New'".to_string(),
                "Date set to 2024-05-11".to_string(),
                "Time set to 08:30".to_string(),
            ]
        );
    }
}
