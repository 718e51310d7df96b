mod common;

use std::time::Duration;

use cadence_core::{
    CalendarBuilder, CalendarError, Clock, DraftEdit, DraftForm, DraftPhase, FormField,
    ItemStatus, MonthStep, RefreshOutcome, Resolution, SubmitOutcome, SuggestionOutcome,
    SuggestionPatch,
};
use jiff::civil::{date, datetime};

use common::{create_test_calendar, item, suggestion};

#[tokio::test]
async fn test_insert_suggestion_scenario() {
    let calendar = create_test_calendar(vec![], vec![suggestion("s1", "Tip", "2024-05-10T10:00")]);

    let inserted = calendar
        .insert_suggestion("s1")
        .expect("Failed to insert suggestion")
        .done()
        .expect("Suggestion was pending");

    assert!(calendar.suggestions().is_empty());
    let items = calendar.items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0], inserted);
    assert_eq!(inserted.status, ItemStatus::Scheduled);
    assert!(inserted.ai_generated);
    assert_eq!(inserted.scheduled_at, "2024-05-10T10:00");
    assert_ne!(inserted.id, "s1");

    // Rapid second trigger: no duplicate, no error.
    let again = calendar.insert_suggestion("s1").expect("No-op, not an error");
    assert_eq!(again, SuggestionOutcome::AlreadyResolved(Resolution::Inserted));
    assert_eq!(calendar.items().len(), 1);
    assert_eq!(calendar.summary().events_in_month, 1);
}

#[tokio::test]
async fn test_create_draft_empty_title_scenario() {
    let calendar = create_test_calendar(vec![item("a", "2024-05-03T09:00")], vec![]);
    let form = DraftForm {
        title: String::new(),
        platform: "instagram".to_string(),
        date: "2024-05-10".to_string(),
        time: "09:00".to_string(),
        ..calendar.draft()
    };

    match calendar.create_draft(form).await {
        Err(CalendarError::Validation(errors)) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors.get(FormField::Title), Some("required"));
        }
        other => panic!("Expected validation error, got {other:?}"),
    }
    assert_eq!(calendar.items().len(), 1);
}

#[tokio::test]
async fn test_draft_to_grid_workflow() {
    let calendar = create_test_calendar(vec![], vec![]);

    calendar.update_draft(DraftEdit::Title("Carousel recap".to_string()));
    calendar.update_draft(DraftEdit::Date("2024-06-03".to_string()));
    let handle = calendar.submit_draft().expect("Failed to submit draft");
    let outcome = handle.wait().await.expect("Submission failed");
    let SubmitOutcome::Committed(created) = outcome else {
        panic!("Expected commit");
    };

    assert_eq!(calendar.month_grid().unwrap().event_count(), 0);
    let june = calendar.go_to_month(MonthStep::Next).unwrap();
    let day = june.day(date(2024, 6, 3)).unwrap();
    assert_eq!(day.events.len(), 1);
    assert_eq!(day.events[0].id, created.id);
    assert_eq!(calendar.draft_phase(), DraftPhase::Idle);
}

#[tokio::test]
async fn test_cancelled_submission_never_lands() {
    let calendar = CalendarBuilder::new()
        .with_clock(Clock::Fixed(datetime(2024, 5, 10, 8, 10, 0, 0)))
        .with_submit_latency(Duration::from_millis(50))
        .build();
    calendar.update_draft(DraftEdit::Title("Too late".to_string()));

    let handle = calendar.submit_draft().unwrap();
    calendar.reset_draft();
    tokio::time::sleep(Duration::from_millis(100)).await;

    assert!(calendar.items().is_empty());
    assert_eq!(handle.wait().await.unwrap(), SubmitOutcome::Cancelled);
}

#[tokio::test]
async fn test_refresh_while_editing() {
    let calendar = create_test_calendar(
        vec![],
        vec![
            suggestion("s1", "Tip", "2024-05-10T10:00"),
            suggestion("s2", "Poll", "2024-05-11T12:00"),
        ],
    );
    calendar
        .edit_suggestion("s1", &SuggestionPatch::schedule("2024-05-18", "11:00"))
        .unwrap();
    calendar.dismiss_suggestion("s2").unwrap();

    let RefreshOutcome::Started(handle) = calendar.refresh_suggestions().unwrap() else {
        panic!("Expected refresh to start");
    };
    handle.wait().await.unwrap();

    // s1 survives with its editor, s2 stays resolved.
    let pending = calendar.suggestions();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, "s1");
    assert_eq!(calendar.suggestion_form("s1").unwrap().date, "2024-05-18");

    let item = calendar.insert_suggestion("s1").unwrap().done().unwrap();
    assert_eq!(item.scheduled_at, "2024-05-18T11:00");
}

#[test]
fn test_unparseable_items_are_kept_but_unplaced() {
    let calendar = create_test_calendar(
        vec![item("good", "2024-05-03T09:00"), item("bad", "03/05/2024 9am")],
        vec![],
    );

    assert_eq!(calendar.items().len(), 2);
    assert_eq!(calendar.month_grid().unwrap().event_count(), 1);
    assert_eq!(calendar.summary().unplaced, 1);
}
