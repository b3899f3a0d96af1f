//! Collision resolution system — circle-circle overlap checks.
//!
//! Two passes per tick: enemies grinding the player drain health, then
//! bullets and enemies annihilate pairwise.

use hecs::{Entity, World};

use swarmbreak_core::components::{Bullet, Enemy, Player};
use swarmbreak_core::constants::CONTACT_DAMAGE;
use swarmbreak_core::events::GameEvent;
use swarmbreak_core::types::Position;

/// Resolve player/enemy contact damage and bullet/enemy intercepts.
///
/// Bullet pairing is first-match: each enemy is removed together with
/// the first not-yet-consumed bullet overlapping it, and world iteration
/// order decides the pairing when several bullets overlap one enemy.
pub fn run(world: &mut World, events: &mut Vec<GameEvent>, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    let player = {
        let mut query = world.query::<(&Player, &Position)>();
        query
            .iter()
            .next()
            .map(|(entity, (player, pos))| (entity, *pos, player.radius))
    };
    let Some((player_entity, player_pos, player_radius)) = player else {
        return;
    };

    // Player vs enemy: CONTACT_DAMAGE per overlapping enemy, clamped at 0.
    let mut damage = 0.0;
    for (_entity, (enemy, pos)) in world.query::<(&Enemy, &Position)>().iter() {
        if pos.distance_to(&player_pos) < enemy.radius + player_radius {
            damage += CONTACT_DAMAGE;
        }
    }
    if damage > 0.0 {
        if let Ok(mut player) = world.get::<&mut Player>(player_entity) {
            player.health = (player.health - damage).max(0.0);
        }
    }

    // Bullet vs enemy: collect both sides, then pair first-match.
    let enemies: Vec<(Entity, Position, f32)> = world
        .query::<(&Enemy, &Position)>()
        .iter()
        .map(|(entity, (enemy, pos))| (entity, *pos, enemy.radius))
        .collect();
    let bullets: Vec<(Entity, Position, f32)> = world
        .query::<(&Bullet, &Position)>()
        .iter()
        .map(|(entity, (bullet, pos))| (entity, *pos, bullet.radius))
        .collect();

    let mut spent_bullets: Vec<Entity> = Vec::new();
    let mut remaining = enemies.len();
    for (enemy_entity, enemy_pos, enemy_radius) in &enemies {
        for (bullet_entity, bullet_pos, bullet_radius) in &bullets {
            if spent_bullets.contains(bullet_entity) {
                continue;
            }
            if bullet_pos.distance_to(enemy_pos) < enemy_radius + bullet_radius {
                spent_bullets.push(*bullet_entity);
                despawn_buffer.push(*enemy_entity);
                despawn_buffer.push(*bullet_entity);
                remaining -= 1;
                events.push(GameEvent::EnemyDestroyed {
                    remaining: remaining as u32,
                });
                break;
            }
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
