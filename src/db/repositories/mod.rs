//! Repository implementations.
//!
//! Currently only the in-memory [`LocalRepository`] ships with the core;
//! SQL-backed implementations live with the surrounding application and
//! plug in through the traits in [`crate::db::repository`].

pub mod local;

pub use local::LocalRepository;
