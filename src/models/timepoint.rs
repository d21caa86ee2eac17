//! Ordering for timepoint strings.
//!
//! Timepoints come in two disjoint flavors selected by the event category:
//! fixed weekday labels for DAY events and calendar-date strings for DATE
//! events. Both orders are implemented as pure, stateless comparison
//! functions; there is no shared lookup table to mutate.

use std::cmp::Ordering;

use chrono::NaiveDate;

use super::event::EventCategory;

/// Weekday labels in precedence order: 일 < 월 < 화 < 수 < 목 < 금 < 토.
pub const WEEKDAY_ORDER: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

/// Rank of a weekday label within [`WEEKDAY_ORDER`], or `None` for an
/// unrecognized label.
pub fn weekday_rank(label: &str) -> Option<usize> {
    WEEKDAY_ORDER.iter().position(|w| *w == label)
}

/// Parse a calendar-date timepoint.
///
/// The canonical format is `yyyy.MM.dd`; `yyyy-MM-dd` is accepted as a
/// fallback. Date strings must be parsed into real dates before comparison
/// so that month/day and zero-padding boundaries order correctly.
pub fn parse_calendar_date(timepoint: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(timepoint, "%Y.%m.%d")
        .or_else(|_| NaiveDate::parse_from_str(timepoint, "%Y-%m-%d"))
        .ok()
}

/// Compare two timepoint strings under the given category's total order.
///
/// Unrecognized labels and unparseable dates sort after all valid ones,
/// falling back to lexicographic order among themselves so the comparison
/// stays total.
pub fn compare_timepoints(category: EventCategory, a: &str, b: &str) -> Ordering {
    match category {
        EventCategory::Day => match (weekday_rank(a), weekday_rank(b)) {
            (Some(ra), Some(rb)) => ra.cmp(&rb),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.cmp(b),
        },
        EventCategory::Date => match (parse_calendar_date(a), parse_calendar_date(b)) {
            (Some(da), Some(db)) => da.cmp(&db),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.cmp(b),
        },
    }
}

/// Sort timepoint strings in place under the category's order.
///
/// The sort is stable, so duplicate timepoints collapse to their
/// first-seen position.
pub fn sort_timepoints(category: EventCategory, timepoints: &mut [String]) {
    timepoints.sort_by(|a, b| compare_timepoints(category, a, b));
}
