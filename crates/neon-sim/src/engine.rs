//! Simulation engine: drives both managers through one tick.
//!
//! `SimulationEngine` owns the laser and space object managers, a seeded RNG,
//! the command queue and the tick scheduler, and produces a `FrameSnapshot`
//! per tick. Completely headless (no renderer or clock), enabling
//! deterministic testing. Hosts that want finer control can call the
//! managers directly instead.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use neon_core::commands::SimCommand;
use neon_core::constants::*;
use neon_core::enums::{GamePhase, IdMode, LaserClass};
use neon_core::error::ConfigError;
use neon_core::events::ImpactEvent;
use neon_core::state::FrameSnapshot;
use neon_core::types::{ShipState, SimTime};

use crate::ids;
use crate::lasers::LaserManager;
use crate::scheduler::{Task, TaskHandle, TickScheduler};
use crate::space_objects::{RockSpawnConfig, SpaceObjectManager};
use crate::targets::ImpactTargets;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub screen_width: f32,
    pub screen_height: f32,
    pub id_mode: IdMode,
    pub rock: RockSpawnConfig,
    pub rock_spawn_interval_ticks: u64,
    pub fire_interval_ticks: u64,
    /// Whether the ship fires on its own every `fire_interval_ticks`.
    pub auto_fire: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            id_mode: IdMode::default(),
            rock: RockSpawnConfig::default(),
            rock_spawn_interval_ticks: ROCK_SPAWN_INTERVAL_TICKS,
            fire_interval_ticks: FIRE_INTERVAL_TICKS,
            auto_fire: true,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.screen_width > 0.0 && self.screen_height > 0.0) {
            return Err(ConfigError::NonPositiveScreen {
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        self.rock.validate(self.screen_width)?;
        if self.rock_spawn_interval_ticks == 0 {
            return Err(ConfigError::ZeroInterval {
                task: Task::SpawnRock.name(),
            });
        }
        if self.fire_interval_ticks == 0 {
            return Err(ConfigError::ZeroInterval {
                task: Task::FireLasers.name(),
            });
        }
        Ok(())
    }
}

/// The simulation engine. Owns both managers and all tick state.
pub struct SimulationEngine {
    lasers: LaserManager,
    space_objects: SpaceObjectManager,
    scheduler: TickScheduler,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    auto_fire: bool,
    command_queue: VecDeque<SimCommand>,
    impacts: Vec<ImpactEvent>,
}

impl SimulationEngine {
    /// Create a new engine. Fails if the configuration cannot produce valid rocks.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let lasers = LaserManager::new(
            config.screen_width,
            config.screen_height,
            ids::from_mode(config.id_mode, config.seed, 1),
        );
        let space_objects = SpaceObjectManager::new(
            config.screen_width,
            config.screen_height,
            config.rock,
            ids::from_mode(config.id_mode, config.seed, 2),
        );

        let mut scheduler = TickScheduler::new(ids::from_mode(config.id_mode, config.seed, 3));
        scheduler.schedule(Task::SpawnRock, config.rock_spawn_interval_ticks)?;
        scheduler.schedule(Task::FireLasers, config.fire_interval_ticks)?;
        scheduler.schedule(Task::AdvanceSpaceObjects, 1)?;
        scheduler.schedule(Task::AdvanceShipLasers, 1)?;
        scheduler.schedule(Task::AdvanceUltimateLasers, 1)?;
        scheduler.schedule(Task::ResolveCollisions, 1)?;

        debug!(seed = config.seed, id_mode = ?config.id_mode, "simulation engine created");

        Ok(Self {
            lasers,
            space_objects,
            scheduler,
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            auto_fire: config.auto_fire,
            command_queue: VecDeque::new(),
            impacts: Vec::new(),
        })
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SimCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SimCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// `ship` is read when lasers are fired; `enemies` is the enemy
    /// collaborator's target snapshot for this tick's collision pass.
    pub fn tick(&mut self, ship: &ShipState, enemies: &mut dyn ImpactTargets) -> FrameSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_tasks(ship, enemies);
            self.time.advance();
        }

        self.snapshot()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn auto_fire(&self) -> bool {
        self.auto_fire
    }

    pub fn lasers(&self) -> &LaserManager {
        &self.lasers
    }

    /// Mutable access, e.g. to install renderer sinks.
    pub fn lasers_mut(&mut self) -> &mut LaserManager {
        &mut self.lasers
    }

    pub fn space_objects(&self) -> &SpaceObjectManager {
        &self.space_objects
    }

    pub fn space_objects_mut(&mut self) -> &mut SpaceObjectManager {
        &mut self.space_objects
    }

    pub fn scheduler_mut(&mut self) -> &mut TickScheduler {
        &mut self.scheduler
    }

    pub fn task_handle(&self, task: Task) -> Option<TaskHandle> {
        self.scheduler.handle_of(task)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: SimCommand) {
        match command {
            SimCommand::FireUltimate => {
                if self.phase == GamePhase::Active {
                    self.lasers.fire_ultimate();
                }
            }
            SimCommand::SetAutoFire { enabled } => {
                self.auto_fire = enabled;
            }
            SimCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            SimCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
        }
    }

    /// Run the tasks due this tick, in registration order.
    fn run_tasks(&mut self, ship: &ShipState, enemies: &mut dyn ImpactTargets) {
        for task in self.scheduler.due(self.time.tick) {
            match task {
                Task::SpawnRock => {
                    if let Err(e) = self.space_objects.spawn(&mut self.rng) {
                        warn!(error = %e, "rock spawn skipped");
                    }
                }
                Task::FireLasers => {
                    if self.auto_fire {
                        self.lasers.fire(ship);
                    }
                }
                Task::AdvanceSpaceObjects => {
                    self.space_objects.advance();
                }
                Task::AdvanceShipLasers => {
                    if self.lasers.has_active(LaserClass::Ship) {
                        self.lasers.advance_class(LaserClass::Ship);
                    }
                }
                Task::AdvanceUltimateLasers => {
                    if self.lasers.has_active(LaserClass::Ultimate) {
                        self.lasers.advance_class(LaserClass::Ultimate);
                    }
                }
                Task::ResolveCollisions => {
                    let impacts = self
                        .lasers
                        .resolve_collisions(&mut self.space_objects, enemies);
                    self.impacts.extend(impacts);
                }
            }
        }
    }

    fn snapshot(&mut self) -> FrameSnapshot {
        FrameSnapshot {
            time: self.time,
            phase: self.phase,
            ship_lasers: self.lasers.views(LaserClass::Ship),
            ultimate_lasers: self.lasers.views(LaserClass::Ultimate),
            space_objects: self.space_objects.views(),
            impacts: std::mem::take(&mut self.impacts),
        }
    }
}
