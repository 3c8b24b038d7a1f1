//! Planner use-case services.
//!
//! # Responsibility
//! - Bundle repositories over one explicitly constructed store.
//! - Provide snapshot backup/restore, full reset and cross-record lookups.
//!
//! # Invariants
//! - Services never bypass repository persistence contracts.
//! - Services remain storage-agnostic (any [`crate::store::KeyValueStore`]).

pub mod backup;
pub mod planner_service;
