//! Kinematic integration system.
//!
//! Velocities are expressed in pixels per tick, so integration adds
//! them to positions directly.

use hecs::World;

use swarmbreak_core::types::{Position, Velocity};

/// Run kinematic integration for all entities with Position + Velocity.
pub fn run(world: &mut World) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.x += vel.x;
        pos.y += vel.y;
    }
}
