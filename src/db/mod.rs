//! Storage module for the availability core.
//!
//! This module provides abstractions for storage operations via the
//! Repository pattern, allowing different backends to be swapped easily.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (HTTP handlers, jobs, etc.)          │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services/) - Business Logic             │
//! │  - Slot generation                                       │
//! │  - Selection replacement                                 │
//! │  - Availability aggregation                              │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Traits (repository/) - Abstract Interface    │
//! │  - EventRepository                                       │
//! │  - ScheduleRepository                                    │
//! │  - SelectionRepository                                   │
//! │  - ParticipantRepository                                 │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────▼──────────────────────────────┐
//!     │             Local Repository                  │
//!     │               (in-memory)                     │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! # Transaction Boundary
//!
//! The only cross-request consistency requirement in the core is that a
//! participant's delete-then-insert selection replacement is atomic. The
//! repository trait expresses that as the single
//! `replace_for_participant` call; the local implementation holds its one
//! write lock across both steps, and SQL-backed implementations are
//! expected to wrap them in one transaction.

pub mod factory;
pub mod repo_config;
pub mod repositories;
pub mod repository;

pub use factory::{RepositoryFactory, RepositoryType};
pub use repo_config::RepositoryConfig;
pub use repositories::LocalRepository;
pub use repository::{
    EventRepository, FullRepository, ParticipantRepository, RepositoryError, RepositoryResult,
    ScheduleRepository, SelectionRepository,
};
