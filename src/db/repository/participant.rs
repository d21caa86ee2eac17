//! Participant repository trait.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{EventId, UserId};
use crate::models::{Participant, ParticipantId, UserStatus};

/// Repository trait for event participants of both kinds.
#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    /// Add an anonymous member to an event.
    ///
    /// # Returns
    /// * `Ok(Participant)` - The stored member with an assigned id
    /// * `Err(RepositoryError::ValidationError)` - If the display name is
    ///   already taken within the event
    async fn add_member(&self, event_id: EventId, name: &str) -> RepositoryResult<Participant>;

    /// Attach an authenticated user to an event with an explicit status.
    async fn register_user_participation(
        &self,
        event_id: EventId,
        user_id: UserId,
        name: &str,
        status: UserStatus,
    ) -> RepositoryResult<Participant>;

    /// Look up one participant of an event.
    ///
    /// # Returns
    /// * `Ok(Participant)` - The participant
    /// * `Err(RepositoryError::NotFound)` - If no such participant exists
    ///   for this event
    async fn get_participant(
        &self,
        event_id: EventId,
        participant_id: ParticipantId,
    ) -> RepositoryResult<Participant>;

    /// The active participant set of an event, in stable registration
    /// order (members and users interleaved as they joined): everyone
    /// whose participation counts toward tallies, which excludes only a
    /// bare `Creator`.
    async fn active_participants(&self, event_id: EventId) -> RepositoryResult<Vec<Participant>>;
}
