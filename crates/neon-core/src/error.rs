//! Configuration errors surfaced to the host.
//!
//! The simulation has no I/O, so the only failures it reports are invalid
//! parameters. Stale references and double removals are not errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("rock size range is empty: min {min} must be below max {max}")]
    RockSizeRange { min: u32, max: u32 },

    #[error("screen width {screen_width} cannot fit a rock of size {max_size} on both sides")]
    ScreenTooNarrow { screen_width: f32, max_size: u32 },

    #[error("screen dimensions must be positive, got {width}x{height}")]
    NonPositiveScreen { width: f32, height: f32 },

    #[error("rock hit points must be positive, got {0}")]
    NonPositiveHp(i32),

    #[error("rock size must be positive, got {0}")]
    NonPositiveSize(f32),

    #[error("task interval for {task} must be at least one tick")]
    ZeroInterval { task: &'static str },
}
