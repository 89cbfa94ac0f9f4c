//! Game loop: drives the simulation engine through a scripted session.
//!
//! The host owns the ship and the enemy fleet. Each tick it queues any
//! scripted commands, hands the fleet to the engine's collision pass, sweeps
//! destroyed enemies and folds the snapshot into the session statistics.
//! There is no frame pacing; ticks run back to back.

use tracing::{debug, info};

use neon_core::commands::SimCommand;
use neon_core::state::FrameSnapshot;
use neon_core::types::ShipState;
use neon_sim::engine::{SimConfig, SimulationEngine};

use crate::fleet::EnemyFleet;
use crate::state::{SessionStats, SessionSummary};

const SHIP_WIDTH: f32 = 40.0;
const SHIP_HEIGHT: f32 = 60.0;
const FLEET_ROW_Y: f32 = 120.0;
const FLEET_SIZE: u32 = 5;
const ENEMY_SIZE: f32 = 40.0;
const ENEMY_HP: i32 = 60;

/// What the host does during a session besides ticking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionScript {
    pub ship: ShipState,
    /// Fire the ultimate volley on every tick divisible by this, tick 0 excluded.
    pub ultimate_every: Option<u64>,
}

impl SessionScript {
    /// A ship parked at the horizontal centre of the screen.
    pub fn centered(config: &SimConfig) -> Self {
        Self {
            ship: ShipState::new(
                config.screen_width / 2.0 - SHIP_WIDTH / 2.0,
                SHIP_WIDTH,
                SHIP_HEIGHT,
            ),
            ultimate_every: None,
        }
    }
}

/// The fleet the headless binary plays against.
pub fn demo_fleet(config: &SimConfig) -> EnemyFleet {
    EnemyFleet::row(config.screen_width, FLEET_ROW_Y, FLEET_SIZE, ENEMY_SIZE, ENEMY_HP)
}

pub struct SessionOutcome {
    pub summary: SessionSummary,
    pub last_frame: Option<FrameSnapshot>,
}

/// Run `ticks` engine ticks against `fleet`.
pub fn run_session(
    engine: &mut SimulationEngine,
    fleet: &mut EnemyFleet,
    script: &SessionScript,
    ticks: u64,
    seed: u64,
) -> SessionOutcome {
    let mut stats = SessionStats::new(seed);
    let mut last_frame = None;

    info!(ticks, "session started");

    for t in 0..ticks {
        if let Some(every) = script.ultimate_every {
            if t > 0 && t % every == 0 {
                engine.queue_command(SimCommand::FireUltimate);
                stats.record_ultimate();
            }
        }

        let snapshot = engine.tick(&script.ship, fleet);

        let destroyed = fleet.sweep();
        if !destroyed.is_empty() {
            debug!(tick = snapshot.time.tick, count = destroyed.len(), "enemy ships down");
        }

        stats.record(&snapshot);
        last_frame = Some(snapshot);
    }

    let summary = stats.finish(fleet.destroyed(), fleet.remaining());
    info!(
        final_tick = summary.final_tick,
        rock_hits = summary.rock_hits,
        enemy_hits = summary.enemy_hits,
        enemies_destroyed = summary.enemies_destroyed,
        "session finished"
    );

    SessionOutcome {
        summary,
        last_frame,
    }
}
