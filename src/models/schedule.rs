use serde::{Deserialize, Serialize};

use crate::api::{EventId, ScheduleId};

use super::participant::ParticipantId;
use super::time::ClockTime;

/// One canonical 30-minute slot of one timepoint of one event.
///
/// Schedules are the cross product of an event's timepoints and its slot
/// grid, created once at event creation and immutable afterwards. Storage
/// preserves creation order, which is chronological within each timepoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: Option<ScheduleId>,
    pub event_id: EventId,
    pub timepoint: String,
    pub slot_start: ClockTime,
}

impl Schedule {
    /// Exclusive end of this slot.
    pub fn slot_end(&self) -> ClockTime {
        self.slot_start.add_minutes(super::time::SLOT_MINUTES)
    }
}

/// One participant's "available here" mark against one schedule.
///
/// At most one selection exists per (participant, schedule) pair; the
/// replacement protocol rewrites a participant's whole set per submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub schedule_id: ScheduleId,
    pub participant_id: ParticipantId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_end() {
        let s = Schedule {
            id: None,
            event_id: EventId(1),
            timepoint: "월".to_string(),
            slot_start: "10:00".parse().unwrap(),
        };
        assert_eq!(s.slot_end(), "10:30".parse().unwrap());
    }

    #[test]
    fn test_last_slot_ends_at_midnight() {
        let s = Schedule {
            id: None,
            event_id: EventId(1),
            timepoint: "월".to_string(),
            slot_start: "23:30".parse().unwrap(),
        };
        assert_eq!(s.slot_end(), ClockTime::END_OF_DAY);
    }
}
