//! Impact targets: anything a laser can damage.
//!
//! A target source hands out a snapshot of hit boxes and accepts damage by
//! id. The collision pass never holds a reference into a source between the
//! two calls.

use glam::Vec2;

use neon_core::enums::TargetKind;
use neon_core::types::{EnemyView, EntityId, Rect};

/// Snapshot of one target at the start of a collision pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetView {
    pub id: EntityId,
    /// Bounding square of the target's collision circle.
    pub hit_box: Rect,
}

impl TargetView {
    pub fn circle(id: EntityId, center: Vec2, radius: f32) -> Self {
        Self {
            id,
            hit_box: Rect::from_center(center, radius),
        }
    }
}

/// A collection of entities that can receive impact damage.
pub trait ImpactTargets {
    fn kind(&self) -> TargetKind;

    /// Current targets eligible for collision, in a stable order.
    fn targets(&self) -> Vec<TargetView>;

    /// Apply `power` damage to target `id`. Returns `false` if no such target
    /// exists any more, in which case nothing changes.
    fn apply_impact(&mut self, id: EntityId, power: u32) -> bool;
}

/// Enemy geometry plus the enemy collaborator's damage callback, supplied
/// fresh for every collision pass.
pub struct EnemyContacts<F> {
    enemies: Vec<EnemyView>,
    on_impact: F,
}

impl<F> EnemyContacts<F>
where
    F: FnMut(EntityId, u32) -> bool,
{
    pub fn new(enemies: Vec<EnemyView>, on_impact: F) -> Self {
        Self { enemies, on_impact }
    }
}

impl<F> ImpactTargets for EnemyContacts<F>
where
    F: FnMut(EntityId, u32) -> bool,
{
    fn kind(&self) -> TargetKind {
        TargetKind::Enemy
    }

    fn targets(&self) -> Vec<TargetView> {
        self.enemies
            .iter()
            .map(|enemy| {
                let center = Vec2::new(
                    enemy.x_offset + enemy.width / 2.0,
                    enemy.y_offset + enemy.height / 2.0,
                );
                TargetView::circle(enemy.id, center, enemy.width / 2.0)
            })
            .collect()
    }

    fn apply_impact(&mut self, id: EntityId, power: u32) -> bool {
        (self.on_impact)(id, power)
    }
}

/// Target source with nothing in it, for passes without enemies.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEnemies;

impl ImpactTargets for NoEnemies {
    fn kind(&self) -> TargetKind {
        TargetKind::Enemy
    }

    fn targets(&self) -> Vec<TargetView> {
        Vec::new()
    }

    fn apply_impact(&mut self, _id: EntityId, _power: u32) -> bool {
        false
    }
}
