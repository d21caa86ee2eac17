//! # timepick
//!
//! Availability aggregation core for group scheduling.
//!
//! Participants mark personal availability against an event's configured
//! time window; this crate determines which time windows have the largest
//! overlapping availability. HTTP routing, authentication, and concrete
//! persistence engines are external collaborators behind the repository
//! traits in [`db`].
//!
//! ## Architecture
//!
//! - [`api`]: typed identifiers and DTO types returned to consumers
//! - [`models`]: domain types (events, schedules, participants, times)
//! - [`db`]: repository traits, the in-memory implementation, factory
//!   and configuration
//! - [`services`]: slot generation, selection replacement, and the
//!   availability aggregator
//!
//! ## Flow
//!
//! Event creation expands the event's `[start, end)` window into a
//! 30-minute slot grid, one schedule row per `(timepoint, slot)` pair.
//! Participants submit availability through the replacement protocol,
//! which atomically swaps their prior selections for the new set. Any
//! reader then asks [`services::compute_most_possible_times`] for the
//! ranked, merged, capped list of best-overlap windows.

pub mod api;
pub mod db;
pub mod models;
pub mod services;
