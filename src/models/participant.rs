use serde::{Deserialize, Serialize};

use crate::api::{EventId, MemberId, UserId};

/// How an authenticated user is attached to an event.
///
/// A `Creator` has made the event but never submitted availability; the
/// first submission promotes them to `CreatorAndParticipant`. Only
/// `Creator` records are excluded from the active participant set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Creator,
    Participant,
    CreatorAndParticipant,
}

impl UserStatus {
    /// Whether this participation record counts toward availability
    /// tallies (possible and impossible alike).
    pub fn is_active(&self) -> bool {
        !matches!(self, UserStatus::Creator)
    }

    /// Status after the user submits availability.
    pub fn after_submission(&self) -> UserStatus {
        match self {
            UserStatus::Creator => UserStatus::CreatorAndParticipant,
            other => *other,
        }
    }
}

/// Identifier of a participant of either kind.
///
/// Member and user ids come from different tables; keeping the
/// discriminant in the id type means they can never collide in a map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum ParticipantId {
    Member(MemberId),
    User(UserId),
}

/// A participant of an event.
///
/// Members are anonymous and scoped to one event; users are authenticated
/// and may participate in many events, carrying a per-event status. The
/// core only ever needs `id()` and `display_name()`; adding a third kind
/// means adding a variant here, not touching call sites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Participant {
    Member {
        id: MemberId,
        event_id: EventId,
        name: String,
    },
    User {
        id: UserId,
        name: String,
        status: UserStatus,
    },
}

impl Participant {
    pub fn id(&self) -> ParticipantId {
        match self {
            Participant::Member { id, .. } => ParticipantId::Member(*id),
            Participant::User { id, .. } => ParticipantId::User(*id),
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Participant::Member { name, .. } => name,
            Participant::User { name, .. } => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_identity() {
        let p = Participant::Member {
            id: MemberId(7),
            event_id: EventId(1),
            name: "철수".to_string(),
        };
        assert_eq!(p.id(), ParticipantId::Member(MemberId(7)));
        assert_eq!(p.display_name(), "철수");
    }

    #[test]
    fn test_user_identity() {
        let p = Participant::User {
            id: UserId(7),
            name: "영희".to_string(),
            status: UserStatus::Participant,
        };
        assert_eq!(p.id(), ParticipantId::User(UserId(7)));
        assert_eq!(p.display_name(), "영희");
    }

    #[test]
    fn test_member_and_user_ids_never_collide() {
        assert_ne!(
            ParticipantId::Member(MemberId(7)),
            ParticipantId::User(UserId(7))
        );
    }

    #[test]
    fn test_creator_is_not_active() {
        assert!(!UserStatus::Creator.is_active());
        assert!(UserStatus::Participant.is_active());
        assert!(UserStatus::CreatorAndParticipant.is_active());
    }

    #[test]
    fn test_submission_promotes_creator() {
        assert_eq!(
            UserStatus::Creator.after_submission(),
            UserStatus::CreatorAndParticipant
        );
        assert_eq!(
            UserStatus::Participant.after_submission(),
            UserStatus::Participant
        );
    }
}
