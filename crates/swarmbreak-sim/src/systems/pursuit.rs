//! Enemy pursuit system — straight-line homing toward the player.
//!
//! Each enemy's heading is recomputed every tick from the player's
//! position at the start of the tick. No pathfinding, no avoidance.

use hecs::World;

use swarmbreak_core::components::{Enemy, Player};
use swarmbreak_core::types::{Position, Velocity};

/// Point every enemy's velocity at the player.
///
/// An enemy exactly on top of the player degenerates to heading +x
/// (the atan2(0, 0) convention), matching the fire direction rule.
pub fn run(world: &mut World) {
    let player_pos = {
        let mut query = world.query::<(&Player, &Position)>();
        query.iter().next().map(|(_, (_, pos))| *pos)
    };
    let Some(player_pos) = player_pos else {
        return;
    };

    for (_entity, (enemy, pos, vel)) in world.query_mut::<(&Enemy, &Position, &mut Velocity)>() {
        let heading = pos.heading_to(&player_pos);
        *vel = Velocity::from_heading(heading, enemy.speed);
    }
}
