//! Schedule repository trait.
//!
//! Schedules are written exactly once, at event creation, and never
//! mutated or partially deleted afterwards; the trait deliberately has no
//! update or delete operations.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::EventId;
use crate::models::Schedule;

/// Repository trait for the immutable schedule grid.
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// Bulk-insert the schedule rows for an event, assigning identifiers.
    ///
    /// Insertion order is preserved as the canonical creation order, which
    /// callers rely on being chronological within each timepoint.
    ///
    /// # Returns
    /// * `Ok(Vec<Schedule>)` - The stored rows with `id` populated, in
    ///   insertion order
    /// * `Err(RepositoryError)` - If the operation fails
    async fn insert_schedules(&self, schedules: &[Schedule]) -> RepositoryResult<Vec<Schedule>>;

    /// All schedule rows of an event, in creation order.
    async fn schedules_for_event(&self, event_id: EventId) -> RepositoryResult<Vec<Schedule>>;

    /// Schedule rows of one timepoint of an event, in creation
    /// (chronological) order.
    async fn schedules_for_timepoint(
        &self,
        event_id: EventId,
        timepoint: &str,
    ) -> RepositoryResult<Vec<Schedule>>;
}
