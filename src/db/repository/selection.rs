//! Selection repository trait.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{EventId, ScheduleId};
use crate::models::{Participant, ParticipantId, Schedule};

/// Repository trait for availability selections.
#[async_trait]
pub trait SelectionRepository: Send + Sync {
    /// Every selection of an event, joined to its schedule and participant.
    ///
    /// Rows come back grouped by schedule in schedule creation order; the
    /// aggregator depends on that order and never re-sorts it.
    ///
    /// # Returns
    /// * `Ok(Vec<(Schedule, Participant)>)` - One row per selection
    /// * `Err(RepositoryError)` - If the operation fails
    async fn selections_for_event(
        &self,
        event_id: EventId,
    ) -> RepositoryResult<Vec<(Schedule, Participant)>>;

    /// Atomically replace one participant's selections for one event.
    ///
    /// Deletes all of the participant's existing selections scoped to the
    /// event's schedules, then inserts one selection per schedule id given.
    /// The two steps are a single atomic unit: a concurrent reader never
    /// observes the participant with a transient empty set. A user's
    /// `Creator` participation status is promoted to
    /// `CreatorAndParticipant` inside the same unit.
    ///
    /// Selections the participant holds against other events are untouched.
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of selections inserted
    /// * `Err(RepositoryError::NotFound)` - If the participant is unknown
    /// * `Err(RepositoryError)` - If the operation fails; no partial state
    ///   remains
    async fn replace_for_participant(
        &self,
        participant_id: ParticipantId,
        event_id: EventId,
        schedule_ids: &[ScheduleId],
    ) -> RepositoryResult<usize>;

    /// Number of selections recorded for an event.
    async fn selection_count_for_event(&self, event_id: EventId) -> RepositoryResult<usize>;
}
