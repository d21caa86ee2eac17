//! Event lifecycle services: creation and enrollment.

use log::info;

use crate::api::{EventId, UserId};
use crate::db::repository::{
    EventRepository, ParticipantRepository, RepositoryError, ScheduleRepository,
};
use crate::models::timepoint::sort_timepoints;
use crate::models::{Event, NewEvent, Participant, UserStatus};

use super::error::{ServiceError, ServiceResult};
use super::slots::generate_schedules;

/// Create an event and its full schedule grid.
///
/// Validates the category/timepoint match before anything is persisted;
/// a DAY event given date-looking timepoints (or vice versa) is a hard
/// error. The stored event and its schedule rows come from one creation
/// pass and the rows are never regenerated.
pub async fn create_event<R>(repo: &R, new_event: NewEvent) -> ServiceResult<Event>
where
    R: EventRepository + ScheduleRepository,
{
    if new_event.ranges.is_empty() {
        return Err(ServiceError::Repository(RepositoryError::ValidationError(
            "an event needs at least one timepoint".to_string(),
        )));
    }

    let mut deduped = new_event.ranges.clone();
    deduped.sort();
    deduped.dedup();
    if deduped.len() != new_event.ranges.len() {
        return Err(ServiceError::Repository(RepositoryError::ValidationError(
            "duplicate timepoints in event ranges".to_string(),
        )));
    }

    if !new_event.category.matches_timepoints(&new_event.ranges) {
        return Err(ServiceError::FormatMismatch(format!(
            "timepoints {:?} do not match category {:?}",
            new_event.ranges, new_event.category
        )));
    }

    if new_event.start_time >= new_event.end_time {
        return Err(ServiceError::Repository(RepositoryError::ValidationError(
            format!(
                "empty time window [{}, {})",
                new_event.start_time, new_event.end_time
            ),
        )));
    }

    let event = repo
        .store_event(&Event {
            id: None,
            title: new_event.title,
            category: new_event.category,
            start_time: new_event.start_time,
            end_time: new_event.end_time,
            ranges: new_event.ranges.clone(),
        })
        .await?;

    generate_schedules(
        repo,
        &event,
        &new_event.ranges,
        event.start_time,
        event.end_time,
    )
    .await?;

    info!("created event {:?} ({})", event.id, event.title);
    Ok(event)
}

/// Join an event as an anonymous member.
///
/// The display name must be unique within the event.
pub async fn join_event<R: ParticipantRepository>(
    repo: &R,
    event_id: EventId,
    display_name: &str,
) -> ServiceResult<Participant> {
    let member = repo.add_member(event_id, display_name).await?;
    info!("member {:?} joined event {}", display_name, event_id.0);
    Ok(member)
}

/// Record an authenticated user as the creator of an event.
///
/// A bare creator does not count toward availability tallies until their
/// first submission promotes them.
pub async fn register_creator<R: ParticipantRepository>(
    repo: &R,
    event_id: EventId,
    user_id: UserId,
    display_name: &str,
) -> ServiceResult<Participant> {
    let user = repo
        .register_user_participation(event_id, user_id, display_name, UserStatus::Creator)
        .await?;
    Ok(user)
}

/// The event's timepoints sorted under its category's order, as reported
/// back to API consumers.
pub async fn event_ranges<R: EventRepository>(
    repo: &R,
    event_id: EventId,
) -> ServiceResult<Vec<String>> {
    let event = repo.get_event(event_id).await?;
    let mut ranges = event.ranges;
    sort_timepoints(event.category, &mut ranges);
    Ok(ranges)
}
