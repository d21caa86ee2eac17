//! Service layer for business logic and orchestration.
//!
//! Services sit between the repository traits and the surrounding
//! application. Each service is repository-agnostic: it takes any
//! implementation of the trait bounds it names and contains the business
//! logic that must behave identically regardless of the storage backend.
//!
//! - [`events`]: event creation (validation + schedule generation) and
//!   participant enrollment
//! - [`slots`]: canonical 30-minute slot generation
//! - [`selections`]: the atomic selection replacement protocol
//! - [`aggregation`]: the "most possible time" computation

pub mod aggregation;
pub mod error;
pub mod events;
pub mod selections;
pub mod slots;

pub use aggregation::{compute_most_possible_times, MAX_WINDOWS};
pub use error::{ServiceError, ServiceResult};
pub use events::{create_event, event_ranges, join_event, register_creator};
pub use selections::replace_participant_selections;
pub use slots::{generate_schedules, generate_slot_starts};
