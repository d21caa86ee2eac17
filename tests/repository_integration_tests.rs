//! Integration tests for the local repository implementation.

use timepick::api::{EventId, ScheduleId, UserId};
use timepick::db::repositories::LocalRepository;
use timepick::db::{
    EventRepository, ParticipantRepository, RepositoryError, ScheduleRepository,
    SelectionRepository,
};
use timepick::models::{Event, EventCategory, ParticipantId, Schedule, UserStatus};

fn day_event(ranges: &[&str]) -> Event {
    Event {
        id: None,
        title: "study group".to_string(),
        category: EventCategory::Day,
        start_time: "10:00".parse().unwrap(),
        end_time: "12:00".parse().unwrap(),
        ranges: ranges.iter().map(|s| s.to_string()).collect(),
    }
}

fn slot(event_id: EventId, timepoint: &str, start: &str) -> Schedule {
    Schedule {
        id: None,
        event_id,
        timepoint: timepoint.to_string(),
        slot_start: start.parse().unwrap(),
    }
}

#[tokio::test]
async fn test_health_check() {
    let repo = LocalRepository::new();
    assert!(repo.health_check().await.unwrap());

    repo.set_healthy(false);
    assert!(!repo.health_check().await.unwrap());
}

#[tokio::test]
async fn test_store_and_get_event() {
    let repo = LocalRepository::new();
    let stored = repo.store_event(&day_event(&["월", "화"])).await.unwrap();
    let id = stored.id.unwrap();

    let fetched = repo.get_event(id).await.unwrap();
    assert_eq!(fetched, stored);
    assert_eq!(fetched.ranges, vec!["월", "화"]);
}

#[tokio::test]
async fn test_get_event_not_found() {
    let repo = LocalRepository::new();
    let result = repo.get_event(EventId(999)).await;
    assert!(matches!(result.unwrap_err(), RepositoryError::NotFound(_)));
}

#[tokio::test]
async fn test_insert_schedules_preserves_creation_order() {
    let repo = LocalRepository::new();
    let event = repo.store_event(&day_event(&["월"])).await.unwrap();
    let id = event.id.unwrap();

    let rows = vec![
        slot(id, "월", "10:00"),
        slot(id, "월", "10:30"),
        slot(id, "월", "11:00"),
    ];
    let stored = repo.insert_schedules(&rows).await.unwrap();
    assert_eq!(stored.len(), 3);
    assert!(stored.iter().all(|s| s.id.is_some()));

    let fetched = repo.schedules_for_event(id).await.unwrap();
    let starts: Vec<String> = fetched.iter().map(|s| s.slot_start.to_string()).collect();
    assert_eq!(starts, vec!["10:00", "10:30", "11:00"]);
}

#[tokio::test]
async fn test_insert_schedules_unknown_event() {
    let repo = LocalRepository::new();
    let result = repo
        .insert_schedules(&[slot(EventId(42), "월", "10:00")])
        .await;
    assert!(matches!(result.unwrap_err(), RepositoryError::NotFound(_)));
}

#[tokio::test]
async fn test_schedules_for_timepoint() {
    let repo = LocalRepository::new();
    let event = repo.store_event(&day_event(&["월", "화"])).await.unwrap();
    let id = event.id.unwrap();

    repo.insert_schedules(&[
        slot(id, "월", "10:00"),
        slot(id, "화", "10:00"),
        slot(id, "월", "10:30"),
    ])
    .await
    .unwrap();

    let monday = repo.schedules_for_timepoint(id, "월").await.unwrap();
    assert_eq!(monday.len(), 2);
    assert!(monday.iter().all(|s| s.timepoint == "월"));
}

#[tokio::test]
async fn test_member_names_unique_within_event() {
    let repo = LocalRepository::new();
    let event = repo.store_event(&day_event(&["월"])).await.unwrap();
    let id = event.id.unwrap();

    repo.add_member(id, "철수").await.unwrap();
    let clash = repo.add_member(id, "철수").await;
    assert!(matches!(
        clash.unwrap_err(),
        RepositoryError::ValidationError(_)
    ));

    // Same name in a different event is fine.
    let other = repo.store_event(&day_event(&["화"])).await.unwrap();
    repo.add_member(other.id.unwrap(), "철수").await.unwrap();
}

#[tokio::test]
async fn test_active_participants_excludes_bare_creator() {
    let repo = LocalRepository::new();
    let event = repo.store_event(&day_event(&["월"])).await.unwrap();
    let id = event.id.unwrap();

    repo.add_member(id, "A").await.unwrap();
    repo.register_user_participation(id, UserId(1), "creator", UserStatus::Creator)
        .await
        .unwrap();
    repo.register_user_participation(id, UserId(2), "B", UserStatus::Participant)
        .await
        .unwrap();

    let active = repo.active_participants(id).await.unwrap();
    let names: Vec<&str> = active.iter().map(|p| p.display_name()).collect();
    assert_eq!(names, vec!["A", "B"]);
}

#[tokio::test]
async fn test_replace_is_wholesale_not_merge() {
    let repo = LocalRepository::new();
    let event = repo.store_event(&day_event(&["월"])).await.unwrap();
    let id = event.id.unwrap();

    let stored = repo
        .insert_schedules(&[
            slot(id, "월", "10:00"),
            slot(id, "월", "10:30"),
            slot(id, "월", "11:00"),
        ])
        .await
        .unwrap();
    let ids: Vec<ScheduleId> = stored.iter().map(|s| s.id.unwrap()).collect();

    let member = repo.add_member(id, "A").await.unwrap();
    let pid = member.id();

    repo.replace_for_participant(pid, id, &[ids[0], ids[1]])
        .await
        .unwrap();
    assert_eq!(repo.selection_count_for_event(id).await.unwrap(), 2);

    // Resubmission replaces, never accumulates.
    repo.replace_for_participant(pid, id, &[ids[2]])
        .await
        .unwrap();
    assert_eq!(repo.selection_count_for_event(id).await.unwrap(), 1);

    let rows = repo.selections_for_event(id).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].0.slot_start.to_string(), "11:00");
}

#[tokio::test]
async fn test_replace_idempotent() {
    let repo = LocalRepository::new();
    let event = repo.store_event(&day_event(&["월"])).await.unwrap();
    let id = event.id.unwrap();

    let stored = repo
        .insert_schedules(&[slot(id, "월", "10:00"), slot(id, "월", "10:30")])
        .await
        .unwrap();
    let ids: Vec<ScheduleId> = stored.iter().map(|s| s.id.unwrap()).collect();
    let pid = repo.add_member(id, "A").await.unwrap().id();

    let first = repo.replace_for_participant(pid, id, &ids).await.unwrap();
    let second = repo.replace_for_participant(pid, id, &ids).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(repo.selection_count_for_event(id).await.unwrap(), 2);
}

#[tokio::test]
async fn test_replace_scoped_to_one_event() {
    let repo = LocalRepository::new();
    let event_a = repo.store_event(&day_event(&["월"])).await.unwrap();
    let event_b = repo.store_event(&day_event(&["화"])).await.unwrap();
    let (a, b) = (event_a.id.unwrap(), event_b.id.unwrap());

    let rows_a = repo
        .insert_schedules(&[slot(a, "월", "10:00")])
        .await
        .unwrap();
    let rows_b = repo
        .insert_schedules(&[slot(b, "화", "10:00")])
        .await
        .unwrap();

    // One authenticated user participating in both events.
    repo.register_user_participation(a, UserId(9), "U", UserStatus::Participant)
        .await
        .unwrap();
    repo.register_user_participation(b, UserId(9), "U", UserStatus::Participant)
        .await
        .unwrap();
    let pid = ParticipantId::User(UserId(9));

    repo.replace_for_participant(pid, a, &[rows_a[0].id.unwrap()])
        .await
        .unwrap();
    repo.replace_for_participant(pid, b, &[rows_b[0].id.unwrap()])
        .await
        .unwrap();

    // Clearing availability in event A leaves event B untouched.
    repo.replace_for_participant(pid, a, &[]).await.unwrap();
    assert_eq!(repo.selection_count_for_event(a).await.unwrap(), 0);
    assert_eq!(repo.selection_count_for_event(b).await.unwrap(), 1);
}

#[tokio::test]
async fn test_replace_unknown_participant() {
    let repo = LocalRepository::new();
    let event = repo.store_event(&day_event(&["월"])).await.unwrap();
    let id = event.id.unwrap();

    let result = repo
        .replace_for_participant(ParticipantId::User(UserId(404)), id, &[])
        .await;
    assert!(matches!(result.unwrap_err(), RepositoryError::NotFound(_)));
}

#[tokio::test]
async fn test_replace_rejects_foreign_schedule() {
    let repo = LocalRepository::new();
    let event_a = repo.store_event(&day_event(&["월"])).await.unwrap();
    let event_b = repo.store_event(&day_event(&["화"])).await.unwrap();
    let (a, b) = (event_a.id.unwrap(), event_b.id.unwrap());

    let rows_b = repo
        .insert_schedules(&[slot(b, "화", "10:00")])
        .await
        .unwrap();
    let pid = repo.add_member(a, "A").await.unwrap().id();

    let result = repo
        .replace_for_participant(pid, a, &[rows_b[0].id.unwrap()])
        .await;
    assert!(matches!(
        result.unwrap_err(),
        RepositoryError::ValidationError(_)
    ));
    // Nothing was applied.
    assert_eq!(repo.selection_count_for_event(a).await.unwrap(), 0);
}

#[tokio::test]
async fn test_replace_promotes_creator() {
    let repo = LocalRepository::new();
    let event = repo.store_event(&day_event(&["월"])).await.unwrap();
    let id = event.id.unwrap();

    let rows = repo
        .insert_schedules(&[slot(id, "월", "10:00")])
        .await
        .unwrap();
    repo.register_user_participation(id, UserId(1), "creator", UserStatus::Creator)
        .await
        .unwrap();
    assert!(repo.active_participants(id).await.unwrap().is_empty());

    repo.replace_for_participant(
        ParticipantId::User(UserId(1)),
        id,
        &[rows[0].id.unwrap()],
    )
    .await
    .unwrap();

    let active = repo.active_participants(id).await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].display_name(), "creator");
}

#[tokio::test]
async fn test_selections_grouped_in_schedule_order() {
    let repo = LocalRepository::new();
    let event = repo.store_event(&day_event(&["월"])).await.unwrap();
    let id = event.id.unwrap();

    let stored = repo
        .insert_schedules(&[slot(id, "월", "10:00"), slot(id, "월", "10:30")])
        .await
        .unwrap();
    let ids: Vec<ScheduleId> = stored.iter().map(|s| s.id.unwrap()).collect();

    let a = repo.add_member(id, "A").await.unwrap().id();
    let b = repo.add_member(id, "B").await.unwrap().id();

    // B submits the later slot first; rows must still come back grouped
    // by schedule creation order.
    repo.replace_for_participant(b, id, &[ids[1]]).await.unwrap();
    repo.replace_for_participant(a, id, &[ids[0], ids[1]])
        .await
        .unwrap();

    let rows = repo.selections_for_event(id).await.unwrap();
    let order: Vec<(String, String)> = rows
        .iter()
        .map(|(s, p)| (s.slot_start.to_string(), p.display_name().to_string()))
        .collect();
    assert_eq!(
        order,
        vec![
            ("10:00".to_string(), "A".to_string()),
            ("10:30".to_string(), "B".to_string()),
            ("10:30".to_string(), "A".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_clear_resets_counts() {
    let repo = LocalRepository::new();
    repo.store_event(&day_event(&["월"])).await.unwrap();
    assert_eq!(repo.event_count(), 1);

    repo.clear();
    assert_eq!(repo.event_count(), 0);
    assert_eq!(repo.schedule_count(), 0);
    assert_eq!(repo.selection_count(), 0);
}
