//! In-memory text search over loaded planner collections.
//!
//! # Responsibility
//! - Case-insensitive substring matching against a fixed set of text fields
//!   per record type.

pub mod text;
