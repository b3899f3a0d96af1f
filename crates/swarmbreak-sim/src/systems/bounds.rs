//! Arena bounds system: clamps the player and culls escaped bullets.
//!
//! Runs right after integration. Uses a pre-allocated buffer to avoid
//! per-tick allocation.

use hecs::{Entity, World};

use swarmbreak_core::components::{Bullet, Player};
use swarmbreak_core::constants::{ARENA_HEIGHT, ARENA_WIDTH};
use swarmbreak_core::types::Position;

/// Clamp the player's circle fully inside the arena and despawn bullets
/// whose center has left it. A bullet exactly on the boundary counts as
/// out.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (_entity, (player, pos)) in world.query_mut::<(&Player, &mut Position)>() {
        pos.x = pos.x.clamp(player.radius, ARENA_WIDTH - player.radius);
        pos.y = pos.y.clamp(player.radius, ARENA_HEIGHT - player.radius);
    }

    for (entity, (_bullet, pos)) in world.query_mut::<(&Bullet, &Position)>() {
        let inside =
            pos.x > 0.0 && pos.x < ARENA_WIDTH && pos.y > 0.0 && pos.y < ARENA_HEIGHT;
        if !inside {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
