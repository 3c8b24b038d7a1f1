//! Pure derivation utilities over in-memory planner collections.
//!
//! # Responsibility
//! - Compute filtered/sorted views (today's classes, upcoming and overdue
//!   tasks), grade scoring and display formatting.
//!
//! # Invariants
//! - Functions never touch storage and are deterministic for explicit
//!   inputs; "today" is always a parameter, [`format::today`] reads the clock.

pub mod format;
pub mod grades;
pub mod schedule;
pub mod tasks;
