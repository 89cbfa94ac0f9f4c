//! Cleanup system: removes expired lasers and destroyed rocks.

use std::collections::HashMap;

use hecs::{Entity, World};

use neon_core::components::{Identity, SpaceRock};
use neon_core::types::EntityId;

/// Collect rocks whose hp has reached zero.
pub fn collect_destroyed_rocks(world: &World, buffer: &mut Vec<Entity>) {
    for (entity, rock) in world.query::<&SpaceRock>().iter() {
        if rock.hp <= 0 {
            buffer.push(entity);
        }
    }
}

/// Despawn every buffered entity and drop it from the id index.
/// Returns the ids actually removed; entities already gone are skipped.
pub fn despawn_buffered(
    world: &mut World,
    index: &mut HashMap<EntityId, Entity>,
    buffer: &mut Vec<Entity>,
) -> Vec<EntityId> {
    let mut removed = Vec::with_capacity(buffer.len());
    for entity in buffer.drain(..) {
        let id = match world.get::<&Identity>(entity) {
            Ok(identity) => identity.id,
            Err(_) => continue,
        };
        index.remove(&id);
        let _ = world.despawn(entity);
        removed.push(id);
    }
    removed
}
