//! Repository trait definitions for storage operations.
//!
//! This module provides a collection of focused repository traits that
//! abstract the storage backend. By splitting responsibilities across
//! multiple traits, implementations can be more focused and testable.
//!
//! # Module Organization
//!
//! - [`error`]: Error types for repository operations
//! - [`event`]: Event storage and retrieval
//! - [`schedule`]: The immutable per-event slot grid
//! - [`selection`]: Availability selections and atomic replacement
//! - [`participant`]: Members, users, and the active participant set
//!
//! # Convenience Trait Bound
//!
//! For functions that need all repository capabilities, use the
//! [`FullRepository`] trait bound:
//!
//! ```ignore
//! async fn my_service<R: FullRepository>(repo: &R) -> RepositoryResult<()> {
//!     let event = repo.get_event(event_id).await?;
//!     let rows = repo.selections_for_event(event_id).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod event;
pub mod participant;
pub mod schedule;
pub mod selection;

// Re-export error types
pub use error::{RepositoryError, RepositoryResult};

// Re-export all traits
pub use event::EventRepository;
pub use participant::ParticipantRepository;
pub use schedule::ScheduleRepository;
pub use selection::SelectionRepository;

/// Composite trait bound for a complete repository implementation.
///
/// Automatically implemented for any type that implements all four
/// repository traits.
pub trait FullRepository:
    EventRepository + ScheduleRepository + SelectionRepository + ParticipantRepository
{
}

impl<T> FullRepository for T where
    T: EventRepository + ScheduleRepository + SelectionRepository + ParticipantRepository
{
}
