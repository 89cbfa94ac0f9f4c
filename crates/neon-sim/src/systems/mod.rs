//! Per-collection systems run by the managers each tick.
//!
//! Systems are free functions over a manager's `World` (`&World` when
//! read-only). They do not own state; all state lives in components.

pub mod cleanup;
pub mod collision;
pub mod movement;
pub mod snapshot;
