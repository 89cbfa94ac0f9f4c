//! Demonstration enemy fleet.
//!
//! A static formation standing in for the game's enemy collaborator. It hands
//! its geometry to the collision pass and takes damage by id; destroyed ships
//! are swept out between ticks.

use glam::Vec2;
use tracing::debug;

use neon_core::enums::TargetKind;
use neon_core::types::{EnemyView, EntityId};
use neon_sim::targets::{ImpactTargets, TargetView};

#[derive(Debug, Clone, PartialEq)]
struct Enemy {
    view: EnemyView,
    hp: i32,
}

#[derive(Debug, Clone, Default)]
pub struct EnemyFleet {
    enemies: Vec<Enemy>,
    destroyed: u32,
}

impl EnemyFleet {
    pub fn new() -> Self {
        Self::default()
    }

    /// One row of `count` equally spaced ships across the top of the screen.
    pub fn row(screen_width: f32, y_offset: f32, count: u32, size: f32, hp: i32) -> Self {
        let mut fleet = Self::new();
        let slot = screen_width / count.max(1) as f32;
        for i in 0..count {
            let x_offset = slot * i as f32 + (slot - size) / 2.0;
            fleet.add(
                EntityId(10_000 + u64::from(i)),
                x_offset,
                y_offset,
                size,
                hp,
            );
        }
        fleet
    }

    pub fn add(&mut self, id: EntityId, x_offset: f32, y_offset: f32, size: f32, hp: i32) {
        self.enemies.push(Enemy {
            view: EnemyView {
                id,
                x_offset,
                y_offset,
                width: size,
                height: size,
            },
            hp,
        });
    }

    pub fn hp(&self, id: EntityId) -> Option<i32> {
        self.enemies.iter().find(|e| e.view.id == id).map(|e| e.hp)
    }

    pub fn remaining(&self) -> usize {
        self.enemies.len()
    }

    pub fn destroyed(&self) -> u32 {
        self.destroyed
    }

    /// Remove every ship at zero hp. Returns the removed ids.
    pub fn sweep(&mut self) -> Vec<EntityId> {
        let mut removed = Vec::new();
        self.enemies.retain(|enemy| {
            if enemy.hp > 0 {
                true
            } else {
                removed.push(enemy.view.id);
                false
            }
        });
        if !removed.is_empty() {
            self.destroyed += removed.len() as u32;
            debug!(count = removed.len(), "enemies destroyed");
        }
        removed
    }
}

impl ImpactTargets for EnemyFleet {
    fn kind(&self) -> TargetKind {
        TargetKind::Enemy
    }

    fn targets(&self) -> Vec<TargetView> {
        self.enemies
            .iter()
            .filter(|enemy| enemy.hp > 0)
            .map(|enemy| {
                let v = &enemy.view;
                let center = Vec2::new(v.x_offset + v.width / 2.0, v.y_offset + v.height / 2.0);
                TargetView::circle(v.id, center, v.width / 2.0)
            })
            .collect()
    }

    /// Ships killed earlier in the same pass still take the hit; only
    /// `sweep` removes them.
    fn apply_impact(&mut self, id: EntityId, power: u32) -> bool {
        let Some(enemy) = self.enemies.iter_mut().find(|e| e.view.id == id) else {
            return false;
        };
        let damage = i32::try_from(power).unwrap_or(i32::MAX);
        enemy.hp = enemy.hp.saturating_sub(damage);
        true
    }
}
