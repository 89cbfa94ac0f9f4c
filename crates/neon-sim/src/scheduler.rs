//! Tick scheduler: recurring simulation tasks and their handles.
//!
//! The host's loop asks the scheduler which tasks are due on a tick and runs
//! them in registration order. Handles identify a registration so the host
//! can retune or cancel it; the managers never see them.

use serde::{Deserialize, Serialize};

use neon_core::error::ConfigError;
use neon_core::types::EntityId;

use crate::ids::IdSource;

/// Work the engine knows how to run on a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Task {
    SpawnRock,
    FireLasers,
    AdvanceSpaceObjects,
    AdvanceShipLasers,
    AdvanceUltimateLasers,
    ResolveCollisions,
}

impl Task {
    pub fn name(self) -> &'static str {
        match self {
            Task::SpawnRock => "spawn_rock",
            Task::FireLasers => "fire_lasers",
            Task::AdvanceSpaceObjects => "advance_space_objects",
            Task::AdvanceShipLasers => "advance_ship_lasers",
            Task::AdvanceUltimateLasers => "advance_ultimate_lasers",
            Task::ResolveCollisions => "resolve_collisions",
        }
    }
}

/// Identifies one scheduled registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskHandle(pub EntityId);

#[derive(Debug, Clone)]
struct ScheduledTask {
    handle: TaskHandle,
    task: Task,
    every_n_ticks: u64,
}

pub struct TickScheduler {
    tasks: Vec<ScheduledTask>,
    ids: Box<dyn IdSource>,
}

impl TickScheduler {
    pub fn new(ids: Box<dyn IdSource>) -> Self {
        Self {
            tasks: Vec::new(),
            ids,
        }
    }

    /// Register `task` to run on every tick divisible by `every_n_ticks`.
    pub fn schedule(&mut self, task: Task, every_n_ticks: u64) -> Result<TaskHandle, ConfigError> {
        if every_n_ticks == 0 {
            return Err(ConfigError::ZeroInterval { task: task.name() });
        }
        let handle = loop {
            let handle = TaskHandle(self.ids.next_id());
            if !self.tasks.iter().any(|t| t.handle == handle) {
                break handle;
            }
        };
        self.tasks.push(ScheduledTask {
            handle,
            task,
            every_n_ticks,
        });
        Ok(handle)
    }

    /// Remove a registration. Unknown handles are a no-op returning `false`.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.handle != handle);
        self.tasks.len() != before
    }

    /// Change how often a registration runs. Returns `Ok(false)` for unknown handles.
    pub fn set_interval(&mut self, handle: TaskHandle, every_n_ticks: u64) -> Result<bool, ConfigError> {
        let Some(entry) = self.tasks.iter_mut().find(|t| t.handle == handle) else {
            return Ok(false);
        };
        if every_n_ticks == 0 {
            return Err(ConfigError::ZeroInterval {
                task: entry.task.name(),
            });
        }
        entry.every_n_ticks = every_n_ticks;
        Ok(true)
    }

    /// First handle registered for `task`, if any.
    pub fn handle_of(&self, task: Task) -> Option<TaskHandle> {
        self.tasks.iter().find(|t| t.task == task).map(|t| t.handle)
    }

    /// Tasks due on `tick`, in registration order.
    pub fn due(&self, tick: u64) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| tick % t.every_n_ticks == 0)
            .map(|t| t.task)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
