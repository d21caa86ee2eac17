//! Selection replacement protocol.
//!
//! A participant's (re-)submission of availability is never an
//! incremental merge: all of their prior selections for the event are
//! deleted and the submitted set is inserted, as one atomic unit, so a
//! concurrent aggregator read never observes the participant half-applied.

use std::collections::HashMap;

use log::info;

use crate::api::{EventId, ScheduleId};
use crate::db::repository::{EventRepository, ScheduleRepository, SelectionRepository};
use crate::models::{ClockTime, ParticipantId};

use super::error::{ServiceError, ServiceResult};

/// Replace a participant's availability for an event.
///
/// Each `(timepoint, time)` pair in `slots_by_timepoint` must resolve to
/// an existing schedule row of the event; a missing row is a hard error,
/// never silently skipped. On success the participant's selection set for
/// this event is exactly the submitted one (selections against other
/// events are untouched), so resubmitting the same map is idempotent.
///
/// # Returns
/// * `Ok(usize)` - Number of selections now held by the participant
/// * `Err(ServiceError::NotFound)` - Unknown event, participant, or
///   `(timepoint, time)` pair
pub async fn replace_participant_selections<R>(
    repo: &R,
    participant_id: ParticipantId,
    event_id: EventId,
    slots_by_timepoint: &HashMap<String, Vec<ClockTime>>,
) -> ServiceResult<usize>
where
    R: EventRepository + ScheduleRepository + SelectionRepository,
{
    // Existence check up front so an unknown event surfaces as NotFound
    // rather than an empty schedule lookup.
    repo.get_event(event_id).await?;

    let schedules = repo.schedules_for_event(event_id).await?;
    let mut by_key: HashMap<(&str, ClockTime), ScheduleId> = HashMap::new();
    for schedule in &schedules {
        if let Some(id) = schedule.id {
            by_key.insert((schedule.timepoint.as_str(), schedule.slot_start), id);
        }
    }

    let mut schedule_ids = Vec::new();
    for (timepoint, times) in slots_by_timepoint {
        for time in times {
            let id = by_key.get(&(timepoint.as_str(), *time)).ok_or_else(|| {
                ServiceError::NotFound(format!(
                    "schedule ({}, {}) of event {}",
                    timepoint, time, event_id.0
                ))
            })?;
            schedule_ids.push(*id);
        }
    }

    let inserted = repo
        .replace_for_participant(participant_id, event_id, &schedule_ids)
        .await?;
    info!(
        "replaced selections of participant {:?} for event {}: {} slots",
        participant_id, event_id.0, inserted
    );
    Ok(inserted)
}
