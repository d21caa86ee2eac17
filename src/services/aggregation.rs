//! Availability aggregation: the "most possible time" computation.
//!
//! Given an event, find the slots with the largest overlapping
//! availability, merge contiguous slots that share an identical
//! participant set into windows, cap the output at [`MAX_WINDOWS`], and
//! order it by timepoint.
//!
//! The computation is a pure, synchronous function of already-fetched
//! rows; only the fetches themselves are async.

use std::collections::HashSet;

use log::debug;

use crate::api::{EventId, PossibleTimeWindow};
use crate::db::repository::FullRepository;
use crate::models::timepoint::compare_timepoints;
use crate::models::{EventCategory, Participant, Schedule};

use super::error::ServiceResult;

/// Maximum number of windows ever reported for one event.
pub const MAX_WINDOWS: usize = 6;

/// One schedule and the display names of everyone who marked it available,
/// in selection insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScheduleGroup {
    pub schedule: Schedule,
    pub names: Vec<String>,
}

/// Group joined selection rows by schedule.
///
/// Rows arrive grouped in schedule creation order (chronological within a
/// timepoint) and that order is preserved; grouping tolerates interleaved
/// rows by keying on schedule id at first-seen position.
pub(crate) fn group_by_schedule(rows: Vec<(Schedule, Participant)>) -> Vec<ScheduleGroup> {
    let mut groups: Vec<ScheduleGroup> = Vec::new();
    let mut index: std::collections::HashMap<crate::api::ScheduleId, usize> =
        std::collections::HashMap::new();

    for (schedule, participant) in rows {
        let name = participant.display_name().to_string();
        match schedule.id.and_then(|id| index.get(&id).copied()) {
            Some(i) => groups[i].names.push(name),
            None => {
                if let Some(id) = schedule.id {
                    index.insert(id, groups.len());
                }
                groups.push(ScheduleGroup {
                    schedule,
                    names: vec![name],
                });
            }
        }
    }
    groups
}

/// Whether two name lists contain the same names, order-insensitive.
fn same_name_set(a: &[String], b: &[String]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let set: HashSet<&str> = a.iter().map(String::as_str).collect();
    b.iter().all(|name| set.contains(name.as_str()))
}

/// Fold state for the scan-and-merge pass.
///
/// Carries the accepted windows; the merge candidate is always the last
/// element, matching the "last accepted window" reference of the scan.
#[derive(Debug, Default)]
pub(crate) struct WindowAccumulator {
    windows: Vec<PossibleTimeWindow>,
}

impl WindowAccumulator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Feed one qualifying (max-count) schedule group.
    ///
    /// Merges into the last accepted window iff it has the same timepoint,
    /// is exactly contiguous, and carries an identical name set; a merge
    /// never consumes output capacity. Otherwise a new window opens,
    /// unless the cap is already reached.
    ///
    /// # Returns
    /// `true` to keep scanning, `false` once the cap stops the scan.
    pub(crate) fn accept(&mut self, group: &ScheduleGroup, active_names: &[String]) -> bool {
        let slot_start = group.schedule.slot_start;
        let slot_end = group.schedule.slot_end();

        if let Some(last) = self.windows.last_mut() {
            if last.timepoint == group.schedule.timepoint
                && last.end_time == slot_start
                && same_name_set(&last.possible_names, &group.names)
            {
                last.end_time = slot_end;
                return true;
            }
        }

        if self.windows.len() >= MAX_WINDOWS {
            return false;
        }

        let possible: HashSet<&str> = group.names.iter().map(String::as_str).collect();
        let impossible_names: Vec<String> = active_names
            .iter()
            .filter(|name| !possible.contains(name.as_str()))
            .cloned()
            .collect();

        self.windows.push(PossibleTimeWindow {
            timepoint: group.schedule.timepoint.clone(),
            start_time: slot_start,
            end_time: slot_end,
            possible_count: group.names.len(),
            possible_names: group.names.clone(),
            impossible_names,
        });
        true
    }

    /// Finish the scan: reorder accepted windows by timepoint.
    ///
    /// The sort is stable, so windows within one timepoint stay in
    /// chronological scan order.
    pub(crate) fn into_windows(mut self, category: EventCategory) -> Vec<PossibleTimeWindow> {
        self.windows
            .sort_by(|a, b| compare_timepoints(category, &a.timepoint, &b.timepoint));
        self.windows
    }
}

/// Compute the ranked, merged, capped best-overlap windows for an event.
///
/// Returns at most [`MAX_WINDOWS`] windows ordered by timepoint, or an
/// empty list when the event has no selections at all. Every returned
/// window's `possible_count` equals the event's global maximum group
/// size; slots below that count never surface, even when adjacent to a
/// reported window.
///
/// # Errors
/// * [`ServiceError::NotFound`] if the event doesn't exist
/// * [`ServiceError::Repository`] on storage failure
///
/// [`ServiceError::NotFound`]: super::error::ServiceError::NotFound
/// [`ServiceError::Repository`]: super::error::ServiceError::Repository
pub async fn compute_most_possible_times<R: FullRepository>(
    repo: &R,
    event_id: EventId,
) -> ServiceResult<Vec<PossibleTimeWindow>> {
    let event = repo.get_event(event_id).await?;

    let rows = repo.selections_for_event(event_id).await?;
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let active = repo.active_participants(event_id).await?;
    let active_names: Vec<String> = active
        .iter()
        .map(|p| p.display_name().to_string())
        .collect();

    let groups = group_by_schedule(rows);
    let max_count = groups.iter().map(|g| g.names.len()).max().unwrap_or(0);
    debug!(
        "event {}: {} schedule groups, max consensus {}",
        event_id.0,
        groups.len(),
        max_count
    );

    let mut acc = WindowAccumulator::new();
    for group in &groups {
        if group.names.len() != max_count {
            continue;
        }
        if !acc.accept(group, &active_names) {
            break;
        }
    }

    Ok(acc.into_windows(event.category))
}
