//! Laser manager: owns every player-fired laser.
//!
//! Lasers live in a private hecs `World`, indexed by `EntityId`. Ship lasers
//! and the ultimate volley are tracked as two classes that advance and
//! publish independently. Lasers never call back into the manager: an
//! advance step reports which lasers left the field and the manager removes
//! them after the pass.

use std::collections::{HashMap, HashSet};

use glam::Vec2;
use hecs::{Entity, World};
use tracing::{debug, trace, warn};

use neon_core::components::{Identity, Laser, Placement, Rotation};
use neon_core::constants::*;
use neon_core::enums::{LaserClass, LaserKind};
use neon_core::events::ImpactEvent;
use neon_core::state::LaserView;
use neon_core::types::{EntityId, ShipState};

use crate::ids::IdSource;
use crate::publish::{self, ViewSink};
use crate::systems;
use crate::targets::ImpactTargets;

pub struct LaserManager {
    world: World,
    index: HashMap<EntityId, Entity>,
    ids: Box<dyn IdSource>,
    next_seq: u64,
    screen_width: f32,
    screen_height: f32,
    expired_buffer: Vec<Entity>,
    ship_sink: Box<dyn ViewSink<LaserView>>,
    ultimate_sink: Box<dyn ViewSink<LaserView>>,
}

impl LaserManager {
    pub fn new(screen_width: f32, screen_height: f32, ids: Box<dyn IdSource>) -> Self {
        Self {
            world: World::new(),
            index: HashMap::new(),
            ids,
            next_seq: 0,
            screen_width,
            screen_height,
            expired_buffer: Vec::new(),
            ship_sink: publish::discard(),
            ultimate_sink: publish::discard(),
        }
    }

    /// Install the renderer sink for ship lasers.
    pub fn set_ship_sink(&mut self, sink: impl ViewSink<LaserView> + 'static) {
        self.ship_sink = Box::new(sink);
    }

    /// Install the renderer sink for the ultimate volley.
    pub fn set_ultimate_sink(&mut self, sink: impl ViewSink<LaserView> + 'static) {
        self.ultimate_sink = Box::new(sink);
    }

    /// Fire from the ship's current position. Emits one laser, or three in
    /// triple-laser mode, boosted if the laser booster is on.
    pub fn fire(&mut self, ship: &ShipState) -> Vec<EntityId> {
        let kind = if ship.laser_booster_enabled {
            LaserKind::Boosted
        } else {
            LaserKind::Standard
        };
        let base_x = ship.x_offset + ship.width / 2.0 - kind.width() / 2.0;
        let y = -ship.height / 2.0;

        let xs = if ship.triple_laser_booster_enabled {
            vec![
                base_x - TRIPLE_LASER_SIDE_OFFSET,
                base_x,
                base_x + TRIPLE_LASER_SIDE_OFFSET,
            ]
        } else {
            vec![base_x]
        };

        let fired: Vec<EntityId> = xs
            .iter()
            .map(|&x| self.spawn_laser(kind, Vec2::new(x, y), 0.0))
            .collect();

        debug!(count = fired.len(), ?kind, "fired ship lasers");
        self.publish(LaserClass::Ship);
        fired
    }

    /// Launch the ultimate volley: `ULTIMATE_LASER_COUNT + 1` lasers evenly
    /// spaced across the screen, both edges included. Replaces any volley
    /// still in flight.
    pub fn fire_ultimate(&mut self) -> Vec<EntityId> {
        let replaced = self.clear_class(LaserClass::Ultimate);

        let spacing = self.screen_width / ULTIMATE_LASER_COUNT as f32;
        let center = ULTIMATE_LASER_COUNT as f32 / 2.0;
        let fired: Vec<EntityId> = (0..=ULTIMATE_LASER_COUNT)
            .map(|i| {
                let rotation = (i as f32 - center) * ULTIMATE_LASER_FAN_DEGREES;
                self.spawn_laser(
                    LaserKind::Ultimate,
                    Vec2::new(spacing * i as f32, 0.0),
                    rotation,
                )
            })
            .collect();

        debug!(count = fired.len(), replaced, "fired ultimate volley");
        self.publish(LaserClass::Ultimate);
        fired
    }

    /// Advance both classes. Returns the ids that left the field.
    pub fn advance(&mut self) -> Vec<EntityId> {
        let mut expired = self.advance_class(LaserClass::Ship);
        expired.extend(self.advance_class(LaserClass::Ultimate));
        expired
    }

    /// Advance one class, remove the lasers that left the field, then
    /// publish that class once.
    pub fn advance_class(&mut self, class: LaserClass) -> Vec<EntityId> {
        self.expired_buffer.clear();
        systems::movement::advance_lasers(&mut self.world, class, &mut self.expired_buffer);
        let expired = systems::cleanup::despawn_buffered(
            &mut self.world,
            &mut self.index,
            &mut self.expired_buffer,
        );

        trace!(?class, expired = expired.len(), "advanced lasers");
        self.publish(class);
        expired
    }

    pub fn has_active(&self, class: LaserClass) -> bool {
        self.count(class) > 0
    }

    pub fn count(&self, class: LaserClass) -> usize {
        self.world
            .query::<&Laser>()
            .iter()
            .filter(|(_, laser)| laser.class == class)
            .count()
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.index.contains_key(&id)
    }

    /// Remove a laser by id. Removing an unknown or already removed id is a
    /// no-op and returns `false`.
    pub fn destroy(&mut self, id: EntityId) -> bool {
        match self.remove(id) {
            Some(class) => {
                self.publish(class);
                true
            }
            None => false,
        }
    }

    /// Current views of one class, in spawn order.
    pub fn views(&self, class: LaserClass) -> Vec<LaserView> {
        systems::snapshot::laser_views(&self.world, class)
    }

    /// Resolve every laser/target overlap in two phases.
    ///
    /// Detection snapshots all lasers and all targets first and collects the
    /// overlapping pairs. Only then is damage applied, by id, once per pair.
    /// Ship lasers that hit anything are removed; ultimate lasers pass
    /// through and keep damaging whatever they overlap.
    pub fn resolve_collisions(
        &mut self,
        hazards: &mut dyn ImpactTargets,
        enemies: &mut dyn ImpactTargets,
    ) -> Vec<ImpactEvent> {
        let shots = systems::collision::collect_shots(&self.world, self.screen_height);
        if shots.is_empty() {
            return Vec::new();
        }

        let hazard_hits =
            systems::collision::detect_hits(&shots, &hazards.targets(), hazards.kind());
        let enemy_hits =
            systems::collision::detect_hits(&shots, &enemies.targets(), enemies.kind());

        let mut impacts = Vec::with_capacity(hazard_hits.len() + enemy_hits.len());
        let mut spent: HashSet<EntityId> = HashSet::new();
        apply_hits(hazards, hazard_hits, &mut impacts, &mut spent);
        apply_hits(enemies, enemy_hits, &mut impacts, &mut spent);

        let mut removed = 0;
        for id in spent {
            if self.remove(id).is_some() {
                removed += 1;
            }
        }
        if removed > 0 {
            self.publish(LaserClass::Ship);
        }

        if !impacts.is_empty() {
            debug!(impacts = impacts.len(), removed, "resolved laser impacts");
        }
        impacts
    }

    /// Place a laser at an exact offset (for tests needing precise overlaps).
    #[cfg(test)]
    pub fn spawn_test_laser(&mut self, kind: LaserKind, x_offset: f32, y_offset: f32) -> EntityId {
        let id = self.spawn_laser(kind, Vec2::new(x_offset, y_offset), 0.0);
        self.publish(kind.class());
        id
    }

    fn spawn_laser(&mut self, kind: LaserKind, offset: Vec2, rotation: f32) -> EntityId {
        let id = self.allocate_id();
        let seq = self.next_seq;
        self.next_seq += 1;

        let entity = self.world.spawn((
            Identity { id, spawn_seq: seq },
            Laser {
                kind,
                class: kind.class(),
                impact_power: kind.impact_power(),
                y_range: self.screen_height,
            },
            Placement {
                offset,
                size: Vec2::new(kind.width(), kind.height()),
            },
            Rotation(rotation),
        ));
        self.index.insert(id, entity);
        id
    }

    fn allocate_id(&mut self) -> EntityId {
        loop {
            let id = self.ids.next_id();
            if !self.index.contains_key(&id) {
                return id;
            }
            warn!(%id, "laser id already in use, drawing another");
        }
    }

    /// Remove without publishing. Returns the class of the removed laser.
    fn remove(&mut self, id: EntityId) -> Option<LaserClass> {
        let entity = self.index.remove(&id)?;
        let class = self.world.get::<&Laser>(entity).ok().map(|laser| laser.class);
        let _ = self.world.despawn(entity);
        class
    }

    fn clear_class(&mut self, class: LaserClass) -> usize {
        self.expired_buffer.clear();
        for (entity, laser) in self.world.query::<&Laser>().iter() {
            if laser.class == class {
                self.expired_buffer.push(entity);
            }
        }
        systems::cleanup::despawn_buffered(&mut self.world, &mut self.index, &mut self.expired_buffer)
            .len()
    }

    fn publish(&mut self, class: LaserClass) {
        let views = self.views(class);
        match class {
            LaserClass::Ship => self.ship_sink.publish(&views),
            LaserClass::Ultimate => self.ultimate_sink.publish(&views),
        }
    }
}

/// Apply detected hits to their source, recording what landed and which ship
/// lasers are spent.
fn apply_hits(
    source: &mut dyn ImpactTargets,
    hits: Vec<ImpactEvent>,
    impacts: &mut Vec<ImpactEvent>,
    spent: &mut HashSet<EntityId>,
) {
    for hit in hits {
        if !source.apply_impact(hit.target_id, hit.power) {
            continue;
        }
        if hit.laser_class == LaserClass::Ship {
            spent.insert(hit.laser_id);
        }
        impacts.push(hit);
    }
}
