//! Simulation core for NEON.
//!
//! Owns the authoritative laser and space object collections, advances them
//! once per tick, and resolves laser impacts against space objects and
//! enemy ships. Produces view snapshots for the renderer.

pub mod engine;
pub mod ids;
pub mod lasers;
pub mod publish;
pub mod scheduler;
pub mod space_objects;
pub mod systems;
pub mod targets;

pub use engine::{SimConfig, SimulationEngine};
pub use lasers::LaserManager;
pub use neon_core as core;
pub use space_objects::{RockSpawnConfig, SpaceObjectManager};
