//! Public API surface for the availability core.
//!
//! This file consolidates the typed identifiers and DTO types returned to
//! API consumers. All types derive Serialize/Deserialize for JSON
//! serialization.

use serde::{Deserialize, Serialize};

pub use crate::models::ClockTime;

/// Event identifier (database primary key).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EventId(pub i64);

/// Schedule identifier (one 30-minute slot of one timepoint).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ScheduleId(pub i64);

/// Anonymous member identifier, scoped to a single event.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MemberId(pub i64);

/// Authenticated user identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub i64);

impl EventId {
    pub fn new(value: i64) -> Self {
        EventId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl ScheduleId {
    pub fn new(value: i64) -> Self {
        ScheduleId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl MemberId {
    pub fn new(value: i64) -> Self {
        MemberId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl UserId {
    pub fn new(value: i64) -> Self {
        UserId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// One aggregated best-overlap window reported to consumers.
///
/// A window covers a contiguous run of 30-minute slots within a single
/// timepoint whose participant sets are identical and of maximal size for
/// the event. `possible_names` and `impossible_names` partition the
/// event's active participant set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PossibleTimeWindow {
    pub timepoint: String,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    pub possible_count: usize,
    pub possible_names: Vec<String>,
    pub impossible_names: Vec<String>,
}
