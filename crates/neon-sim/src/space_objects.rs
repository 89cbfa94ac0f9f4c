//! Space object manager: owns the rocks drifting down the screen.
//!
//! Rocks are damaged by the laser manager's collision pass through the
//! `ImpactTargets` contract, but only this manager removes them: a rock at
//! zero hp stays in place until the next `advance` prunes it.

use std::collections::HashMap;

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use neon_core::components::{Identity, Placement, Rotation, SpaceRock};
use neon_core::constants::*;
use neon_core::enums::TargetKind;
use neon_core::error::ConfigError;
use neon_core::state::SpaceObjectView;
use neon_core::types::EntityId;

use crate::ids::IdSource;
use crate::publish::{self, ViewSink};
use crate::systems;
use crate::targets::{ImpactTargets, TargetView};

/// Parameters for procedural rock spawning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RockSpawnConfig {
    /// Smallest rock size (inclusive).
    pub min_size: u32,
    /// Largest rock size (exclusive).
    pub max_size: u32,
    /// Starting hit points.
    pub hp: i32,
}

impl Default for RockSpawnConfig {
    fn default() -> Self {
        Self {
            min_size: MIN_ROCK_SIZE,
            max_size: MAX_ROCK_SIZE,
            hp: ROCK_HP,
        }
    }
}

impl RockSpawnConfig {
    /// Check that every size in range fits on a screen of `screen_width`
    /// with a non-empty range of horizontal positions.
    pub fn validate(&self, screen_width: f32) -> Result<(), ConfigError> {
        if self.min_size == 0 || self.min_size >= self.max_size {
            return Err(ConfigError::RockSizeRange {
                min: self.min_size,
                max: self.max_size,
            });
        }
        if self.hp <= 0 {
            return Err(ConfigError::NonPositiveHp(self.hp));
        }
        let largest = u64::from(self.max_size - 1);
        if (screen_width.max(0.0) as u64) <= largest * 2 {
            return Err(ConfigError::ScreenTooNarrow {
                screen_width,
                max_size: self.max_size,
            });
        }
        Ok(())
    }
}

pub struct SpaceObjectManager {
    world: World,
    index: HashMap<EntityId, Entity>,
    ids: Box<dyn IdSource>,
    next_seq: u64,
    screen_width: f32,
    screen_height: f32,
    spawn_config: RockSpawnConfig,
    prune_buffer: Vec<Entity>,
    sink: Box<dyn ViewSink<SpaceObjectView>>,
}

impl SpaceObjectManager {
    pub fn new(
        screen_width: f32,
        screen_height: f32,
        spawn_config: RockSpawnConfig,
        ids: Box<dyn IdSource>,
    ) -> Self {
        Self {
            world: World::new(),
            index: HashMap::new(),
            ids,
            next_seq: 0,
            screen_width,
            screen_height,
            spawn_config,
            prune_buffer: Vec::new(),
            sink: publish::discard(),
        }
    }

    /// Install the renderer sink.
    pub fn set_sink(&mut self, sink: impl ViewSink<SpaceObjectView> + 'static) {
        self.sink = Box::new(sink);
    }

    /// Spawn one rock of random size at a random horizontal position that
    /// keeps it fully on screen.
    pub fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<EntityId, ConfigError> {
        self.spawn_config.validate(self.screen_width)?;

        let size = rng.gen_range(self.spawn_config.min_size..self.spawn_config.max_size);
        let width = self.screen_width as u32;
        let x_offset = rng.gen_range(size..width - size);

        self.spawn_rock(x_offset as f32, size as f32, self.spawn_config.hp)
    }

    /// Spawn a destroyable rock at an exact position.
    pub fn spawn_rock(&mut self, x_offset: f32, size: f32, hp: i32) -> Result<EntityId, ConfigError> {
        self.spawn_object(x_offset, size, hp, true)
    }

    /// Spawn a space object at the top of the field and publish.
    /// Hit points and size must both be positive.
    pub fn spawn_object(
        &mut self,
        x_offset: f32,
        size: f32,
        hp: i32,
        destroyable: bool,
    ) -> Result<EntityId, ConfigError> {
        if hp <= 0 {
            return Err(ConfigError::NonPositiveHp(hp));
        }
        if size.is_nan() || size <= 0.0 {
            return Err(ConfigError::NonPositiveSize(size));
        }

        let id = self.allocate_id();
        let seq = self.next_seq;
        self.next_seq += 1;

        let entity = self.world.spawn((
            Identity { id, spawn_seq: seq },
            SpaceRock {
                hp,
                destroyable,
                fall_speed: self.screen_height / ROCK_FALL_TICKS,
                screen_height: self.screen_height,
            },
            Placement {
                offset: Vec2::new(x_offset, 0.0),
                size: Vec2::splat(size),
            },
            Rotation::default(),
        ));
        self.index.insert(id, entity);

        debug!(%id, x_offset, size, hp, destroyable, "spawned space object");
        self.publish();
        Ok(id)
    }

    /// Move every object, then prune everything at zero hp, then publish.
    /// Returns the pruned ids.
    pub fn advance(&mut self) -> Vec<EntityId> {
        systems::movement::advance_rocks(&mut self.world);

        self.prune_buffer.clear();
        systems::cleanup::collect_destroyed_rocks(&self.world, &mut self.prune_buffer);
        let pruned = systems::cleanup::despawn_buffered(
            &mut self.world,
            &mut self.index,
            &mut self.prune_buffer,
        );

        if !pruned.is_empty() {
            debug!(pruned = pruned.len(), "pruned space objects");
        }
        trace!(remaining = self.index.len(), "advanced space objects");
        self.publish();
        pruned
    }

    pub fn has_active(&self) -> bool {
        !self.index.is_empty()
    }

    pub fn count(&self) -> usize {
        self.index.len()
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn hp(&self, id: EntityId) -> Option<i32> {
        let entity = *self.index.get(&id)?;
        self.world.get::<&SpaceRock>(entity).ok().map(|rock| rock.hp)
    }

    /// Remove an object immediately. Unknown ids are a no-op returning `false`.
    pub fn remove(&mut self, id: EntityId) -> bool {
        let Some(entity) = self.index.remove(&id) else {
            return false;
        };
        let _ = self.world.despawn(entity);
        self.publish();
        true
    }

    /// Current views, in spawn order.
    pub fn views(&self) -> Vec<SpaceObjectView> {
        systems::snapshot::space_object_views(&self.world)
    }

    fn allocate_id(&mut self) -> EntityId {
        loop {
            let id = self.ids.next_id();
            if !self.index.contains_key(&id) {
                return id;
            }
            warn!(%id, "space object id already in use, drawing another");
        }
    }

    fn publish(&mut self) {
        let views = self.views();
        self.sink.publish(&views);
    }
}

impl ImpactTargets for SpaceObjectManager {
    fn kind(&self) -> TargetKind {
        TargetKind::SpaceObject
    }

    /// Destroyable objects that still have hp, in spawn order.
    fn targets(&self) -> Vec<TargetView> {
        let mut targets: Vec<(u64, TargetView)> = self
            .world
            .query::<(&Identity, &SpaceRock, &Placement)>()
            .iter()
            .filter(|(_, (_, rock, _))| rock.destroyable && rock.hp > 0)
            .map(|(_, (identity, _, placement))| {
                let radius = placement.size.x / 2.0;
                let center = placement.offset + Vec2::splat(radius);
                (identity.spawn_seq, TargetView::circle(identity.id, center, radius))
            })
            .collect();

        targets.sort_by_key(|(seq, _)| *seq);
        targets.into_iter().map(|(_, target)| target).collect()
    }

    fn apply_impact(&mut self, id: EntityId, power: u32) -> bool {
        let Some(&entity) = self.index.get(&id) else {
            return false;
        };
        let Ok(mut rock) = self.world.get::<&mut SpaceRock>(entity) else {
            return false;
        };
        if !rock.destroyable {
            return false;
        }

        let damage = i32::try_from(power).unwrap_or(i32::MAX);
        rock.hp = rock.hp.saturating_sub(damage);
        if rock.hp <= 0 {
            debug!(%id, "space object destroyed");
        }
        true
    }
}
