//! Collision geometry and the detection half of the collision pass.
//!
//! Detection is pure: it reads snapshots of lasers and targets and returns
//! every overlapping pair. Applying damage and removing lasers happens
//! afterwards, so no lookup here can observe a half-resolved pass.

use glam::Vec2;
use hecs::World;

use neon_core::components::{Identity, Laser, Placement};
use neon_core::constants::LASER_ANCHOR_CORRECTION;
use neon_core::enums::{LaserClass, TargetKind};
use neon_core::events::ImpactEvent;
use neon_core::types::{EntityId, Rect};

use crate::targets::TargetView;

/// Snapshot of one laser at the start of a collision pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaserShot {
    pub id: EntityId,
    pub class: LaserClass,
    pub power: u32,
    pub hit_box: Rect,
}

/// A laser's rectangle in top-origin screen space.
///
/// Laser offsets are relative to the bottom edge; `LASER_ANCHOR_CORRECTION`
/// accounts for the anchor the renderer places them at.
pub fn laser_rect(placement: &Placement, screen_height: f32) -> Rect {
    let offset = Vec2::new(
        placement.offset.x,
        placement.offset.y + screen_height - LASER_ANCHOR_CORRECTION,
    );
    Rect::from_offset_size(offset, placement.size)
}

/// Snapshot every laser in the world, both classes, in spawn order.
pub fn collect_shots(world: &World, screen_height: f32) -> Vec<LaserShot> {
    let mut shots: Vec<(u64, LaserShot)> = world
        .query::<(&Identity, &Laser, &Placement)>()
        .iter()
        .map(|(_, (identity, laser, placement))| {
            (
                identity.spawn_seq,
                LaserShot {
                    id: identity.id,
                    class: laser.class,
                    power: laser.impact_power,
                    hit_box: laser_rect(placement, screen_height),
                },
            )
        })
        .collect();

    shots.sort_by_key(|(seq, _)| *seq);
    shots.into_iter().map(|(_, shot)| shot).collect()
}

/// Every (target, laser) pair whose boxes overlap, target-major.
pub fn detect_hits(
    lasers: &[LaserShot],
    targets: &[TargetView],
    kind: TargetKind,
) -> Vec<ImpactEvent> {
    let mut hits = Vec::new();
    for target in targets {
        for laser in lasers {
            if target.hit_box.overlaps(&laser.hit_box) {
                hits.push(ImpactEvent {
                    target_kind: kind,
                    target_id: target.id,
                    laser_id: laser.id,
                    laser_class: laser.class,
                    power: laser.power,
                });
            }
        }
    }
    hits
}
