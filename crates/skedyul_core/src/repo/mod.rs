//! Repository layer over the key-value store.
//!
//! # Responsibility
//! - Provide per-entity CRUD with whole-collection read-modify-write.
//! - Provide get/put for singleton records with default substitution.
//!
//! # Invariants
//! - Collections preserve insertion order; `update` replaces in place.
//! - Not-found on `update`/`delete` is a silent no-op reported as `false`.
//! - No locking: two concurrent writers to one collection can lose an update.

pub mod collection_repo;
pub mod singleton_repo;
