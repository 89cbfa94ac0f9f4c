//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Laser variant. Each variant has fixed geometry, speed and impact power.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LaserKind {
    /// Regular ship laser.
    #[default]
    Standard,
    /// Ship laser fired while the laser booster is active.
    Boosted,
    /// One beam of the screen-wide ultimate volley.
    Ultimate,
}

impl LaserKind {
    pub fn width(self) -> f32 {
        match self {
            LaserKind::Standard => SHIP_LASER_WIDTH,
            LaserKind::Boosted => SHIP_BOOSTED_LASER_WIDTH,
            LaserKind::Ultimate => ULTIMATE_LASER_WIDTH,
        }
    }

    pub fn height(self) -> f32 {
        match self {
            LaserKind::Standard => SHIP_LASER_HEIGHT,
            LaserKind::Boosted => SHIP_BOOSTED_LASER_HEIGHT,
            LaserKind::Ultimate => ULTIMATE_LASER_HEIGHT,
        }
    }

    /// Distance travelled toward the top of the screen per tick.
    pub fn speed(self) -> f32 {
        match self {
            LaserKind::Standard => SHIP_LASER_SPEED,
            LaserKind::Boosted => SHIP_BOOSTED_LASER_SPEED,
            LaserKind::Ultimate => ULTIMATE_LASER_SPEED,
        }
    }

    pub fn impact_power(self) -> u32 {
        match self {
            LaserKind::Standard => SHIP_LASER_IMPACT_POWER,
            LaserKind::Boosted => SHIP_BOOSTED_LASER_IMPACT_POWER,
            LaserKind::Ultimate => ULTIMATE_LASER_IMPACT_POWER,
        }
    }

    pub fn drawable(self) -> Drawable {
        match self {
            LaserKind::Standard => Drawable::ShipLaser,
            LaserKind::Boosted => Drawable::ShipBoostedLaser,
            LaserKind::Ultimate => Drawable::UltimateLaser,
        }
    }

    pub fn class(self) -> LaserClass {
        match self {
            LaserKind::Standard | LaserKind::Boosted => LaserClass::Ship,
            LaserKind::Ultimate => LaserClass::Ultimate,
        }
    }
}

/// The two independently tracked laser collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LaserClass {
    /// Standard and boosted lasers fired by the ship. Destroyed on impact.
    Ship,
    /// The ultimate volley. Passes through targets.
    Ultimate,
}

/// Asset reference handed to the renderer. The core never resolves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Drawable {
    ShipLaser,
    ShipBoostedLaser,
    UltimateLaser,
    SpaceRock,
}

/// Kind of entity that received an impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetKind {
    SpaceObject,
    Enemy,
}

/// How entity identifiers are generated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdMode {
    /// Monotonic counter. Fully reproducible.
    #[default]
    Sequential,
    /// Random 64-bit ids drawn from a generator seeded by the sim seed.
    Random,
}

/// Engine run state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Active,
    Paused,
}
