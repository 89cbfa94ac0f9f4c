//! Host commands sent to the simulation engine.
//!
//! Commands are queued and applied at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All host-initiated actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimCommand {
    /// Launch the screen-wide ultimate volley, replacing any volley in flight.
    FireUltimate,
    /// Enable or disable the periodic ship laser task.
    SetAutoFire { enabled: bool },
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
