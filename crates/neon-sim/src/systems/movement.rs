//! Kinematic integration.
//!
//! Lasers move a fixed distance toward the top of the screen each tick,
//! space rocks drift down and spin.

use hecs::{Entity, World};

use neon_core::components::{Laser, Placement, Rotation, SpaceRock};
use neon_core::constants::ROCK_SPIN_DEGREES_PER_TICK;
use neon_core::enums::LaserClass;

/// Move every laser of `class` and collect those whose travelled distance
/// now exceeds their range.
pub fn advance_lasers(world: &mut World, class: LaserClass, expired: &mut Vec<Entity>) {
    for (entity, (laser, placement)) in world.query_mut::<(&Laser, &mut Placement)>() {
        if laser.class != class {
            continue;
        }
        placement.offset.y -= laser.kind.speed();
        if placement.offset.y.abs() > laser.y_range {
            expired.push(entity);
        }
    }
}

/// Move every rock down by its fall speed. A rock whose top edge has left
/// the bottom of the screen is exhausted: its hp drops to zero so the next
/// prune removes it.
pub fn advance_rocks(world: &mut World) {
    for (_entity, (rock, placement, rotation)) in
        world.query_mut::<(&mut SpaceRock, &mut Placement, &mut Rotation)>()
    {
        placement.offset.y += rock.fall_speed;
        rotation.0 = (rotation.0 + ROCK_SPIN_DEGREES_PER_TICK).rem_euclid(360.0);
        if placement.offset.y > rock.screen_height {
            rock.hp = rock.hp.min(0);
        }
    }
}
