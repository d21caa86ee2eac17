//! Domain model types for the availability core.
//!
//! - [`time`]: wall-clock [`ClockTime`] with the `24:00` end-of-day sentinel
//! - [`event`]: [`Event`] and its DAY/DATE category
//! - [`participant`]: the tagged Member/User [`Participant`] variant
//! - [`schedule`]: immutable [`Schedule`] slots and [`Selection`] marks
//! - [`timepoint`]: pure ordering functions for timepoint strings

pub mod event;
pub mod participant;
pub mod schedule;
pub mod time;
pub mod timepoint;

pub use event::{Event, EventCategory, NewEvent};
pub use participant::{Participant, ParticipantId, UserStatus};
pub use schedule::{Schedule, Selection};
pub use time::{ClockTime, SLOT_MINUTES};
pub use timepoint::{compare_timepoints, sort_timepoints};
