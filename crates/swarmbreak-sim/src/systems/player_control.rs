//! Player steering system — turns held directions into player velocity.

use hecs::World;

use swarmbreak_core::commands::FrameInput;
use swarmbreak_core::components::Player;
use swarmbreak_core::types::Velocity;

/// Set the player's velocity from the held movement keys.
///
/// Held directions sum axis-wise, unnormalized: two perpendicular keys
/// move the player √2 times faster than one. Observable behavior of the
/// game, preserved as-is.
pub fn run(world: &mut World, input: &FrameInput) {
    for (_entity, (player, vel)) in world.query_mut::<(&Player, &mut Velocity)>() {
        let mut vx = 0.0;
        let mut vy = 0.0;
        if input.up {
            vy -= player.speed;
        }
        if input.down {
            vy += player.speed;
        }
        if input.left {
            vx -= player.speed;
        }
        if input.right {
            vx += player.speed;
        }
        vel.x = vx;
        vel.y = vy;
    }
}
