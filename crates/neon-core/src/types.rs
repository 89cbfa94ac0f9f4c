//! Fundamental geometric and simulation types.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Stable identifier of a laser, space object, enemy or scheduled task.
///
/// Identifiers are unique within the collection that issued them and never
/// reused while the entity is alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:016x}", self.0)
    }
}

/// Axis-aligned rectangle in top-origin screen space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// Rectangle with its top-left corner at `offset`.
    pub fn from_offset_size(offset: Vec2, size: Vec2) -> Self {
        Self {
            min: offset,
            max: offset + size,
        }
    }

    /// Bounding square of a circle.
    pub fn from_center(center: Vec2, radius: f32) -> Self {
        Self {
            min: center - Vec2::splat(radius),
            max: center + Vec2::splat(radius),
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Strict overlap: rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        if self.max.x <= other.min.x || other.max.x <= self.min.x {
            return false;
        }
        if self.max.y <= other.min.y || other.max.y <= self.min.y {
            return false;
        }
        true
    }
}

/// Read-only ship state consumed at the moment lasers are fired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipState {
    pub x_offset: f32,
    pub width: f32,
    pub height: f32,
    pub laser_booster_enabled: bool,
    pub triple_laser_booster_enabled: bool,
}

impl ShipState {
    pub fn new(x_offset: f32, width: f32, height: f32) -> Self {
        Self {
            x_offset,
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_boosters(mut self, laser_booster: bool, triple_laser_booster: bool) -> Self {
        self.laser_booster_enabled = laser_booster;
        self.triple_laser_booster_enabled = triple_laser_booster;
        self
    }
}

/// Geometry of an enemy ship as reported by the enemy collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: EntityId,
    pub x_offset: f32,
    pub y_offset: f32,
    pub width: f32,
    pub height: f32,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the nominal tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
