//! Snapshot system: builds the ordered view lists handed to the renderer.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use neon_core::components::{Identity, Laser, Placement, Rotation, SpaceRock};
use neon_core::enums::{Drawable, LaserClass};
use neon_core::state::{LaserView, SpaceObjectView};

/// Views of every laser in `class`, in spawn order.
pub fn laser_views(world: &World, class: LaserClass) -> Vec<LaserView> {
    let mut views: Vec<(u64, LaserView)> = world
        .query::<(&Identity, &Laser, &Placement, &Rotation)>()
        .iter()
        .filter(|(_, (_, laser, _, _))| laser.class == class)
        .map(|(_, (identity, laser, placement, rotation))| {
            (
                identity.spawn_seq,
                LaserView {
                    id: identity.id,
                    drawable: laser.kind.drawable(),
                    x_offset: placement.offset.x,
                    y_offset: placement.offset.y,
                    width: placement.size.x,
                    height: placement.size.y,
                    rotation: rotation.0,
                },
            )
        })
        .collect();

    views.sort_by_key(|(seq, _)| *seq);
    views.into_iter().map(|(_, view)| view).collect()
}

/// Views of every space object, in spawn order.
pub fn space_object_views(world: &World) -> Vec<SpaceObjectView> {
    let mut views: Vec<(u64, SpaceObjectView)> = world
        .query::<(&Identity, &SpaceRock, &Placement, &Rotation)>()
        .iter()
        .map(|(_, (identity, _rock, placement, rotation))| {
            (
                identity.spawn_seq,
                SpaceObjectView {
                    id: identity.id,
                    drawable: Drawable::SpaceRock,
                    x_offset: placement.offset.x,
                    y_offset: placement.offset.y,
                    size: placement.size.x,
                    rotation: rotation.0,
                },
            )
        })
        .collect();

    views.sort_by_key(|(seq, _)| *seq);
    views.into_iter().map(|(_, view)| view).collect()
}
