//! Canonical 30-minute slot generation.
//!
//! An event's time window `[start_time, end_time)` is expanded into slot
//! start times at 30-minute granularity once, at event creation, and one
//! schedule row is produced per `(timepoint, slot)` pair. Schedules are
//! never regenerated afterwards.

use log::info;

use crate::db::repository::{RepositoryError, ScheduleRepository};
use crate::models::{ClockTime, Event, Schedule, SLOT_MINUTES};

use super::error::{ServiceError, ServiceResult};

/// Generate the slot start times for a `[start, end)` window.
///
/// Emits `start`, `start + 30`, … while the remaining span to `end` is at
/// least 30 minutes. An `end` of `24:00` is the end-of-day sentinel: the
/// loop runs against a `23:59` bound and one terminal `23:30` slot is
/// appended, so the last half-hour of the day is represented without an
/// illegal `24:00` slot start.
pub fn generate_slot_starts(start: ClockTime, end: ClockTime) -> Vec<ClockTime> {
    let bound = if end.is_end_of_day() {
        ClockTime::LAST_MINUTE
    } else {
        end
    };

    let mut slots = Vec::new();
    let mut current = start;
    while current.span_until(bound) >= SLOT_MINUTES {
        slots.push(current);
        current = current.add_minutes(SLOT_MINUTES);
    }

    if end.is_end_of_day() {
        slots.push(ClockTime::LAST_HALF_HOUR);
    }

    slots
}

/// Generate and persist the schedule grid for an event.
///
/// Produces the cross product of `timepoints` and the slot starts of
/// `[start, end)`, in timepoint order with slots chronological within
/// each timepoint, and bulk-inserts the rows.
///
/// # Errors
/// * [`ServiceError::FormatMismatch`] if the timepoints don't match the
///   event's category
/// * [`ServiceError::Repository`] if the event has no id yet or the
///   insert fails
pub async fn generate_schedules<R: ScheduleRepository>(
    repo: &R,
    event: &Event,
    timepoints: &[String],
    start: ClockTime,
    end: ClockTime,
) -> ServiceResult<Vec<Schedule>> {
    let event_id = event.id.ok_or_else(|| {
        ServiceError::Repository(RepositoryError::ValidationError(
            "cannot generate schedules for an unsaved event".to_string(),
        ))
    })?;

    if !event.category.matches_timepoints(timepoints) {
        return Err(ServiceError::FormatMismatch(format!(
            "timepoints {:?} do not match category {:?}",
            timepoints, event.category
        )));
    }

    let slot_starts = generate_slot_starts(start, end);
    let mut rows = Vec::with_capacity(timepoints.len() * slot_starts.len());
    for timepoint in timepoints {
        for slot_start in &slot_starts {
            rows.push(Schedule {
                id: None,
                event_id,
                timepoint: timepoint.clone(),
                slot_start: *slot_start,
            });
        }
    }

    let stored = repo.insert_schedules(&rows).await?;
    info!(
        "generated {} schedules for event {} ({} timepoints x {} slots)",
        stored.len(),
        event_id.0,
        timepoints.len(),
        slot_starts.len()
    );
    Ok(stored)
}
