//! SWARMBREAK — arcade survival in an 800×600 arena.
//!
//! One engine tick runs per display frame; `next_frame().await` is the
//! wait-for-next-frame primitive that paces the loop.

use macroquad::prelude::*;

use log::{debug, info};

use swarmbreak_app::{input, render};
use swarmbreak_core::constants::{ARENA_HEIGHT, ARENA_WIDTH};
use swarmbreak_core::events::GameEvent;
use swarmbreak_sim::engine::{SimConfig, SimulationEngine};

fn window_conf() -> Conf {
    Conf {
        window_title: String::from("SWARMBREAK"),
        window_width: ARENA_WIDTH as i32,
        window_height: ARENA_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    // Wall-clock seed: every run plays a different arrangement, while
    // tests construct the engine with fixed seeds.
    let seed = macroquad::miniquad::date::now() as u64;
    let mut engine = SimulationEngine::new(SimConfig { seed });
    info!("simulation seeded with {seed}");

    loop {
        let collected = input::collect(engine.phase());
        engine.queue_commands(collected.commands);

        let snapshot = engine.tick(&collected.frame);
        for event in &snapshot.events {
            log_event(event);
        }

        render::draw(&snapshot);
        next_frame().await;
    }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::WaveStarted { wave, enemy_count } => {
            info!("wave {wave} started with {enemy_count} enemies");
        }
        GameEvent::EnemyDestroyed { remaining } => {
            debug!("enemy destroyed, {remaining} remaining");
        }
        GameEvent::PlayerDied { wave } => {
            info!("player died on wave {wave}");
        }
    }
}
