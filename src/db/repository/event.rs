//! Event repository trait.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::EventId;
use crate::models::Event;

/// Repository trait for event storage.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Check if the storage backend is healthy.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Store a new event and assign it an identifier.
    ///
    /// # Returns
    /// * `Ok(Event)` - The stored event with `id` populated
    /// * `Err(RepositoryError)` - If the operation fails
    async fn store_event(&self, event: &Event) -> RepositoryResult<Event>;

    /// Retrieve an event by ID.
    ///
    /// # Returns
    /// * `Ok(Event)` - The event
    /// * `Err(RepositoryError::NotFound)` - If the event doesn't exist
    async fn get_event(&self, event_id: EventId) -> RepositoryResult<Event>;
}
