//! Wave spawning system — refills the arena once it has been cleared.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use swarmbreak_core::components::Enemy;
use swarmbreak_core::constants::{
    ENEMY_BASE_SPEED, ENEMY_SPEED_PER_WAVE, FIRST_WAVE_ENEMY_COUNT, WAVE_ENEMY_INCREMENT,
};
use swarmbreak_core::events::GameEvent;

/// Wave progression owned by the engine.
#[derive(Debug, Clone)]
pub struct WaveState {
    /// Current wave number (1-based).
    pub wave: u32,
    /// Enemies spawned per wave; grows by WAVE_ENEMY_INCREMENT each wave.
    pub enemies_per_wave: u32,
}

impl Default for WaveState {
    fn default() -> Self {
        Self {
            wave: 1,
            enemies_per_wave: FIRST_WAVE_ENEMY_COUNT,
        }
    }
}

impl WaveState {
    /// Move to the next, larger wave.
    pub fn advance(&mut self) {
        self.wave += 1;
        self.enemies_per_wave += WAVE_ENEMY_INCREMENT;
    }

    /// Enemy speed for the current wave (pixels per tick).
    pub fn enemy_speed(&self) -> f32 {
        ENEMY_BASE_SPEED + self.wave as f32 * ENEMY_SPEED_PER_WAVE
    }
}

/// Advance and spawn the next wave when no enemies remain.
///
/// Wave 1 of a fresh game is spawned by the engine's reset, not here;
/// this system only fires on cleared arenas mid-game.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    wave: &mut WaveState,
    events: &mut Vec<GameEvent>,
) {
    let enemy_count = {
        let mut query = world.query::<&Enemy>();
        query.iter().count()
    };
    if enemy_count > 0 {
        return;
    }

    wave.advance();
    crate::world_setup::spawn_wave(world, rng, wave);
    events.push(GameEvent::WaveStarted {
        wave: wave.wave,
        enemy_count: wave.enemies_per_wave,
    });
}
