//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the player, enemy waves, and bullets with their component
//! bundles.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use swarmbreak_core::components::{Bullet, Enemy, Player};
use swarmbreak_core::constants::*;
use swarmbreak_core::types::{Position, Velocity};

use crate::systems::wave_spawner::WaveState;

/// Spawn the player centered in the arena at full health.
pub fn spawn_player(world: &mut World) -> hecs::Entity {
    world.spawn((
        Player {
            radius: PLAYER_RADIUS,
            speed: PLAYER_SPEED,
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
        },
        Position::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0),
        Velocity::default(),
    ))
}

/// Spawn a full wave of enemies at uniformly random arena positions.
pub fn spawn_wave(world: &mut World, rng: &mut ChaCha8Rng, wave: &WaveState) {
    let speed = wave.enemy_speed();
    for _ in 0..wave.enemies_per_wave {
        let position = Position::new(
            rng.gen_range(0.0..ARENA_WIDTH),
            rng.gen_range(0.0..ARENA_HEIGHT),
        );
        spawn_enemy_at(world, position, speed);
    }
}

/// Spawn a single enemy. Its velocity is recomputed by the pursuit
/// system every tick, so it starts at rest.
pub fn spawn_enemy_at(world: &mut World, position: Position, speed: f32) -> hecs::Entity {
    world.spawn((
        Enemy {
            radius: ENEMY_RADIUS,
            speed,
        },
        position,
        Velocity::default(),
    ))
}

/// Spawn a bullet at the given origin along the given heading.
pub fn spawn_bullet(world: &mut World, origin: Position, heading: f32) -> hecs::Entity {
    world.spawn((
        Bullet {
            radius: BULLET_RADIUS,
        },
        origin,
        Velocity::from_heading(heading, BULLET_SPEED),
    ))
}
