//! View snapshots: the render-facing state published after every mutation.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::ImpactEvent;
use crate::types::{EntityId, SimTime};

/// A laser as the renderer sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaserView {
    pub id: EntityId,
    pub drawable: Drawable,
    pub x_offset: f32,
    pub y_offset: f32,
    pub width: f32,
    pub height: f32,
    /// Degrees.
    pub rotation: f32,
}

/// A space object as the renderer sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceObjectView {
    pub id: EntityId,
    pub drawable: Drawable,
    pub x_offset: f32,
    pub y_offset: f32,
    pub size: f32,
    /// Degrees.
    pub rotation: f32,
}

/// Complete simulation state handed to the host after each engine tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub ship_lasers: Vec<LaserView>,
    pub ultimate_lasers: Vec<LaserView>,
    pub space_objects: Vec<SpaceObjectView>,
    /// Impacts resolved during this tick, in resolution order.
    pub impacts: Vec<ImpactEvent>,
}
