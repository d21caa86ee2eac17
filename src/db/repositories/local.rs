//! In-memory local repository implementation.
//!
//! This module provides a local implementation of all repository traits
//! suitable for unit testing and local development. All data is stored in
//! memory using Vec and HashMap structures, providing fast, deterministic,
//! and isolated execution.
//!
//! Every operation takes the single data lock exactly once, so the
//! delete-then-insert of [`replace_for_participant`] is atomic with
//! respect to concurrent readers without any extra machinery.
//!
//! [`replace_for_participant`]: crate::db::repository::SelectionRepository::replace_for_participant

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::api::{EventId, MemberId, ScheduleId, UserId};
use crate::db::repository::*;
use crate::models::{Event, Participant, ParticipantId, Schedule, Selection, UserStatus};

/// In-memory local repository.
///
/// # Example
/// ```
/// use timepick::db::repositories::LocalRepository;
///
/// let repo = LocalRepository::new();
/// assert_eq!(repo.event_count(), 0);
/// ```
#[derive(Clone, Default)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

#[derive(Default)]
struct LocalData {
    events: HashMap<EventId, Event>,
    /// Creation order is load-bearing: chronological within a timepoint.
    schedules: Vec<Schedule>,
    selections: Vec<Selection>,
    /// Participation records per event, in registration order.
    participants: Vec<(EventId, Participant)>,

    next_event_id: i64,
    next_schedule_id: i64,
    next_member_id: i64,

    is_healthy: bool,
}

impl LocalData {
    fn schedule_ids_of_event(&self, event_id: EventId) -> HashSet<ScheduleId> {
        self.schedules
            .iter()
            .filter(|s| s.event_id == event_id)
            .filter_map(|s| s.id)
            .collect()
    }

    fn participant_of_event(
        &self,
        event_id: EventId,
        participant_id: ParticipantId,
    ) -> Option<&Participant> {
        self.participants
            .iter()
            .filter(|(eid, _)| *eid == event_id)
            .map(|(_, p)| p)
            .find(|p| p.id() == participant_id)
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData {
                next_event_id: 1,
                next_schedule_id: 1,
                next_member_id: 1,
                is_healthy: true,
                ..Default::default()
            })),
        }
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        let mut data = self.data.write();
        let healthy = data.is_healthy;
        *data = LocalData {
            next_event_id: 1,
            next_schedule_id: 1,
            next_member_id: 1,
            is_healthy: healthy,
            ..Default::default()
        };
    }

    /// Number of events stored.
    pub fn event_count(&self) -> usize {
        self.data.read().events.len()
    }

    /// Number of schedule rows stored across all events.
    pub fn schedule_count(&self) -> usize {
        self.data.read().schedules.len()
    }

    /// Number of selections stored across all events.
    pub fn selection_count(&self) -> usize {
        self.data.read().selections.len()
    }
}

#[async_trait]
impl EventRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn store_event(&self, event: &Event) -> RepositoryResult<Event> {
        let mut data = self.data.write();
        let id = EventId(data.next_event_id);
        data.next_event_id += 1;

        let mut stored = event.clone();
        stored.id = Some(id);
        data.events.insert(id, stored.clone());
        Ok(stored)
    }

    async fn get_event(&self, event_id: EventId) -> RepositoryResult<Event> {
        self.data
            .read()
            .events
            .get(&event_id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("event {}", event_id.0)))
    }
}

#[async_trait]
impl ScheduleRepository for LocalRepository {
    async fn insert_schedules(&self, schedules: &[Schedule]) -> RepositoryResult<Vec<Schedule>> {
        let mut data = self.data.write();
        let mut stored = Vec::with_capacity(schedules.len());
        for schedule in schedules {
            if !data.events.contains_key(&schedule.event_id) {
                return Err(RepositoryError::NotFound(format!(
                    "event {}",
                    schedule.event_id.0
                )));
            }
            let id = ScheduleId(data.next_schedule_id);
            data.next_schedule_id += 1;

            let mut row = schedule.clone();
            row.id = Some(id);
            data.schedules.push(row.clone());
            stored.push(row);
        }
        Ok(stored)
    }

    async fn schedules_for_event(&self, event_id: EventId) -> RepositoryResult<Vec<Schedule>> {
        Ok(self
            .data
            .read()
            .schedules
            .iter()
            .filter(|s| s.event_id == event_id)
            .cloned()
            .collect())
    }

    async fn schedules_for_timepoint(
        &self,
        event_id: EventId,
        timepoint: &str,
    ) -> RepositoryResult<Vec<Schedule>> {
        Ok(self
            .data
            .read()
            .schedules
            .iter()
            .filter(|s| s.event_id == event_id && s.timepoint == timepoint)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl SelectionRepository for LocalRepository {
    async fn selections_for_event(
        &self,
        event_id: EventId,
    ) -> RepositoryResult<Vec<(Schedule, Participant)>> {
        let data = self.data.read();
        let mut rows = Vec::new();
        // Outer loop over schedules keeps rows grouped in creation order.
        for schedule in data.schedules.iter().filter(|s| s.event_id == event_id) {
            let sid = match schedule.id {
                Some(id) => id,
                None => continue,
            };
            for selection in data.selections.iter().filter(|s| s.schedule_id == sid) {
                let participant = data
                    .participant_of_event(event_id, selection.participant_id)
                    .ok_or_else(|| {
                        RepositoryError::InternalError(format!(
                            "selection references unknown participant {:?}",
                            selection.participant_id
                        ))
                    })?;
                rows.push((schedule.clone(), participant.clone()));
            }
        }
        Ok(rows)
    }

    async fn replace_for_participant(
        &self,
        participant_id: ParticipantId,
        event_id: EventId,
        schedule_ids: &[ScheduleId],
    ) -> RepositoryResult<usize> {
        let mut data = self.data.write();

        if data.participant_of_event(event_id, participant_id).is_none() {
            return Err(RepositoryError::NotFound(format!(
                "participant {:?} of event {}",
                participant_id, event_id.0
            )));
        }

        let event_schedules = data.schedule_ids_of_event(event_id);
        for sid in schedule_ids {
            if !event_schedules.contains(sid) {
                return Err(RepositoryError::ValidationError(format!(
                    "schedule {} does not belong to event {}",
                    sid.0, event_id.0
                )));
            }
        }

        // Delete: only this participant's selections against this event.
        data.selections.retain(|s| {
            s.participant_id != participant_id || !event_schedules.contains(&s.schedule_id)
        });

        // Insert, collapsing duplicates to one selection per schedule.
        let mut seen = HashSet::new();
        let mut inserted = 0;
        for sid in schedule_ids {
            if seen.insert(*sid) {
                data.selections.push(Selection {
                    schedule_id: *sid,
                    participant_id,
                });
                inserted += 1;
            }
        }

        // First submission turns a bare creator into a counted participant.
        for (eid, participant) in data.participants.iter_mut() {
            if *eid == event_id && participant.id() == participant_id {
                if let Participant::User { status, .. } = participant {
                    *status = status.after_submission();
                }
            }
        }

        Ok(inserted)
    }

    async fn selection_count_for_event(&self, event_id: EventId) -> RepositoryResult<usize> {
        let data = self.data.read();
        let event_schedules = data.schedule_ids_of_event(event_id);
        Ok(data
            .selections
            .iter()
            .filter(|s| event_schedules.contains(&s.schedule_id))
            .count())
    }
}

#[async_trait]
impl ParticipantRepository for LocalRepository {
    async fn add_member(&self, event_id: EventId, name: &str) -> RepositoryResult<Participant> {
        let mut data = self.data.write();

        if !data.events.contains_key(&event_id) {
            return Err(RepositoryError::NotFound(format!("event {}", event_id.0)));
        }

        let clash = data
            .participants
            .iter()
            .any(|(eid, p)| *eid == event_id && p.display_name() == name);
        if clash {
            return Err(RepositoryError::ValidationError(format!(
                "display name {:?} already taken in event {}",
                name, event_id.0
            )));
        }

        let id = MemberId(data.next_member_id);
        data.next_member_id += 1;

        let member = Participant::Member {
            id,
            event_id,
            name: name.to_string(),
        };
        data.participants.push((event_id, member.clone()));
        Ok(member)
    }

    async fn register_user_participation(
        &self,
        event_id: EventId,
        user_id: UserId,
        name: &str,
        status: UserStatus,
    ) -> RepositoryResult<Participant> {
        let mut data = self.data.write();

        if !data.events.contains_key(&event_id) {
            return Err(RepositoryError::NotFound(format!("event {}", event_id.0)));
        }

        let pid = ParticipantId::User(user_id);
        for (eid, participant) in data.participants.iter_mut() {
            if *eid == event_id && participant.id() == pid {
                // Upsert: a re-registration refreshes name and status.
                *participant = Participant::User {
                    id: user_id,
                    name: name.to_string(),
                    status,
                };
                return Ok(participant.clone());
            }
        }

        let user = Participant::User {
            id: user_id,
            name: name.to_string(),
            status,
        };
        data.participants.push((event_id, user.clone()));
        Ok(user)
    }

    async fn get_participant(
        &self,
        event_id: EventId,
        participant_id: ParticipantId,
    ) -> RepositoryResult<Participant> {
        self.data
            .read()
            .participant_of_event(event_id, participant_id)
            .cloned()
            .ok_or_else(|| {
                RepositoryError::NotFound(format!(
                    "participant {:?} of event {}",
                    participant_id, event_id.0
                ))
            })
    }

    async fn active_participants(&self, event_id: EventId) -> RepositoryResult<Vec<Participant>> {
        let data = self.data.read();
        Ok(data
            .participants
            .iter()
            .filter(|(eid, _)| *eid == event_id)
            .map(|(_, p)| p)
            .filter(|p| match p {
                Participant::Member { .. } => true,
                Participant::User { status, .. } => status.is_active(),
            })
            .cloned()
            .collect())
    }
}
