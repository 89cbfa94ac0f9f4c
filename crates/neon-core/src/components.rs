//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in the managers, not components.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::EntityId;

/// Identity and ordering shared by every managed entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: EntityId,
    /// Monotonic spawn counter used to publish views in creation order.
    pub spawn_seq: u64,
}

/// Offset and extent of an entity.
///
/// For lasers `offset.y` is measured from the bottom edge the renderer anchors
/// projectiles to (negative is up). For space objects it is top-origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub offset: Vec2,
    pub size: Vec2,
}

/// Cosmetic rotation in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rotation(pub f32);

/// A player-fired laser.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Laser {
    pub kind: LaserKind,
    pub class: LaserClass,
    pub impact_power: u32,
    /// Travel distance after which the laser is out of bounds.
    pub y_range: f32,
}

/// A destructible hazard drifting down the screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpaceRock {
    pub hp: i32,
    /// Only destroyable rocks take part in collision.
    pub destroyable: bool,
    /// Downward drift per tick.
    pub fall_speed: f32,
    /// Screen height the rock falls through.
    pub screen_height: f32,
}
