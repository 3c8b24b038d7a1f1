//! Flutter-facing bindings for the Skedyul planner core.

pub mod api;
