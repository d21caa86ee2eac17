use serde::{Deserialize, Serialize};

use crate::api::EventId;

use super::time::ClockTime;

/// Kind of timepoint an event is built from.
///
/// The category is fixed at creation and never mixed: a DAY event only
/// ever carries weekday labels, a DATE event only calendar-date strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EventCategory {
    Day,
    Date,
}

impl EventCategory {
    /// Check that a timepoint list matches this category.
    ///
    /// Detection mirrors the creation-time contract: a date string starts
    /// with an ASCII digit, a weekday label does not. Only the first
    /// timepoint is sniffed; per-element validation happens when ordering
    /// and schedule resolution touch the strings.
    pub fn matches_timepoints(&self, timepoints: &[String]) -> bool {
        let first = match timepoints.first() {
            Some(t) => t,
            None => return true,
        };
        let starts_with_digit = first.chars().next().is_some_and(|c| c.is_ascii_digit());
        match self {
            EventCategory::Day => !starts_with_digit,
            EventCategory::Date => starts_with_digit,
        }
    }
}

/// An event someone scheduled: a time-of-day window replicated across a
/// set of timepoints.
///
/// The window is `[start_time, end_time)`; `end_time` may be the `24:00`
/// sentinel meaning the window runs to the end of the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: Option<EventId>,
    pub title: String,
    pub category: EventCategory,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    /// The timepoints ("ranges") this event covers, in creation order.
    pub ranges: Vec<String>,
}

/// Input for creating a new event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEvent {
    pub title: String,
    pub category: EventCategory,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    pub ranges: Vec<String>,
}
