//! Snapshot system: queries the ECS world and builds a complete
//! GameStateSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use swarmbreak_core::components::{Bullet, Enemy, Player};
use swarmbreak_core::enums::GamePhase;
use swarmbreak_core::events::GameEvent;
use swarmbreak_core::state::{BulletView, EnemyView, GameStateSnapshot, HudView, PlayerView};
use swarmbreak_core::types::{Position, SimTime};

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    wave: u32,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    let player = build_player(world);

    let health_fraction = if player.max_health > 0.0 {
        player.health / player.max_health
    } else {
        0.0
    };

    GameStateSnapshot {
        time: *time,
        phase,
        wave,
        player,
        bullets: build_bullets(world),
        enemies: build_enemies(world),
        hud: HudView {
            health_fraction,
            wave_label: format!("Wave: {wave}"),
        },
        events,
    }
}

/// Build the PlayerView; defaults to zeroed stats before the first game.
fn build_player(world: &World) -> PlayerView {
    world
        .query::<(&Player, &Position)>()
        .iter()
        .next()
        .map(|(_, (player, pos))| PlayerView {
            position: *pos,
            radius: player.radius,
            health: player.health,
            max_health: player.max_health,
        })
        .unwrap_or_default()
}

/// Build BulletView list from all bullet entities.
fn build_bullets(world: &World) -> Vec<BulletView> {
    world
        .query::<(&Bullet, &Position)>()
        .iter()
        .map(|(_, (bullet, pos))| BulletView {
            position: *pos,
            radius: bullet.radius,
        })
        .collect()
}

/// Build EnemyView list from all enemy entities.
fn build_enemies(world: &World) -> Vec<EnemyView> {
    world
        .query::<(&Enemy, &Position)>()
        .iter()
        .map(|(_, (enemy, pos))| EnemyView {
            position: *pos,
            radius: enemy.radius,
        })
        .collect()
}
