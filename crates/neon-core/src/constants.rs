//! Simulation constants and tuning parameters.
//!
//! All lengths are in logical screen units (the renderer maps them to pixels).

/// Nominal tick rate the host is expected to drive the simulation at (Hz).
/// The core never paces itself; this only converts ticks to seconds.
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Screen ---

pub const DEFAULT_SCREEN_WIDTH: f32 = 400.0;
pub const DEFAULT_SCREEN_HEIGHT: f32 = 800.0;

/// Vertical correction between a projectile's bottom-anchored offset and
/// top-origin screen space, used only by the collision frame.
pub const LASER_ANCHOR_CORRECTION: f32 = 50.0;

// --- Ship lasers ---

pub const SHIP_LASER_WIDTH: f32 = 6.0;
pub const SHIP_LASER_HEIGHT: f32 = 24.0;
pub const SHIP_LASER_SPEED: f32 = 12.0;
pub const SHIP_LASER_IMPACT_POWER: u32 = 10;

pub const SHIP_BOOSTED_LASER_WIDTH: f32 = 12.0;
pub const SHIP_BOOSTED_LASER_HEIGHT: f32 = 32.0;
pub const SHIP_BOOSTED_LASER_SPEED: f32 = 14.0;
pub const SHIP_BOOSTED_LASER_IMPACT_POWER: u32 = 20;

/// Horizontal distance between the center laser and each side laser
/// in triple-laser mode.
pub const TRIPLE_LASER_SIDE_OFFSET: f32 = 20.0;

// --- Ultimate lasers ---

pub const ULTIMATE_LASER_WIDTH: f32 = 14.0;
pub const ULTIMATE_LASER_HEIGHT: f32 = 90.0;
pub const ULTIMATE_LASER_SPEED: f32 = 8.0;
pub const ULTIMATE_LASER_IMPACT_POWER: u32 = 50;

/// Number of gaps across the screen width. The volley has one laser per
/// gap boundary, so `ULTIMATE_LASER_COUNT + 1` lasers in total.
pub const ULTIMATE_LASER_COUNT: u32 = 10;

/// Rotation step (degrees) between neighbouring ultimate lasers. Purely cosmetic.
pub const ULTIMATE_LASER_FAN_DEGREES: f32 = 3.0;

// --- Space rocks ---

pub const MIN_ROCK_SIZE: u32 = 20;
pub const MAX_ROCK_SIZE: u32 = 80;
pub const ROCK_HP: i32 = 30;

/// Ticks a rock needs to fall one full screen height.
pub const ROCK_FALL_TICKS: f32 = 600.0;

pub const ROCK_SPIN_DEGREES_PER_TICK: f32 = 0.75;

// --- Scheduling defaults ---

pub const ROCK_SPAWN_INTERVAL_TICKS: u64 = 90;
pub const FIRE_INTERVAL_TICKS: u64 = 15;
