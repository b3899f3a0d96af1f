//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands
//! at tick boundaries, runs all systems, and produces
//! `GameStateSnapshot`s. Completely headless (no macroquad dependency),
//! enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use swarmbreak_core::commands::{FrameInput, PlayerCommand};
use swarmbreak_core::components::Player;
use swarmbreak_core::constants::GAME_OVER_MENU_DELAY_TICKS;
use swarmbreak_core::enums::GamePhase;
use swarmbreak_core::events::GameEvent;
use swarmbreak_core::state::GameStateSnapshot;
use swarmbreak_core::types::{Position, SimTime};

use crate::systems;
use crate::systems::wave_spawner::WaveState;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same enemy placement.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns the ECS world and all game state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
    wave: WaveState,
    /// Ticks until the automatic GameOver → Menu transition.
    /// Armed on death, cancelled by a restart.
    menu_return_in: Option<u32>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            wave: WaveState::default(),
            menu_return_in: None,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self, input: &FrameInput) -> GameStateSnapshot {
        self.process_commands(input);

        if self.phase == GamePhase::Playing {
            self.run_systems(input);
            self.check_player_death();
            self.time.advance();
        }

        self.update_menu_return();

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.phase, self.wave.wave, events)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self, input: &FrameInput) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command, input);
        }
    }

    /// Handle a single player command. Commands invalid for the current
    /// phase are ignored.
    fn handle_command(&mut self, command: PlayerCommand, input: &FrameInput) {
        match command {
            PlayerCommand::StartGame => {
                if matches!(self.phase, GamePhase::Menu | GamePhase::GameOver) {
                    self.reset_game();
                }
            }
            PlayerCommand::Fire => {
                if self.phase == GamePhase::Playing {
                    self.fire_bullet(input.pointer);
                }
            }
        }
    }

    /// Reset to the canonical initial state and enter Playing.
    /// Also cancels any pending automatic return to the menu.
    fn reset_game(&mut self) {
        self.world.clear();
        self.time = SimTime::default();
        self.wave = WaveState::default();
        self.menu_return_in = None;

        world_setup::spawn_player(&mut self.world);
        world_setup::spawn_wave(&mut self.world, &mut self.rng, &self.wave);

        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::WaveStarted {
            wave: self.wave.wave,
            enemy_count: self.wave.enemies_per_wave,
        });
    }

    /// Spawn one bullet at the player's center, headed toward the pointer.
    /// A pointer coincident with the player degenerates to heading +x.
    fn fire_bullet(&mut self, pointer: Position) {
        let origin = self
            .world
            .query::<(&Player, &Position)>()
            .iter()
            .next()
            .map(|(_, (_, pos))| *pos);

        if let Some(origin) = origin {
            let heading = origin.heading_to(&pointer);
            world_setup::spawn_bullet(&mut self.world, origin, heading);
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, input: &FrameInput) {
        // 1. Player steering from held keys
        systems::player_control::run(&mut self.world, input);
        // 2. Enemy pursuit retargeting
        systems::pursuit::run(&mut self.world);
        // 3. Kinematic integration
        systems::movement::run(&mut self.world);
        // 4. Arena bounds (player clamp, bullet cull)
        systems::bounds::run(&mut self.world, &mut self.despawn_buffer);
        // 5. Collision resolution (contact damage, bullet intercepts)
        systems::collision::run(&mut self.world, &mut self.events, &mut self.despawn_buffer);
        // 6. Wave advance when the arena is clear
        systems::wave_spawner::run(&mut self.world, &mut self.rng, &mut self.wave, &mut self.events);
    }

    /// Enter GameOver once the player's health is exhausted.
    fn check_player_death(&mut self) {
        let dead = self
            .world
            .query_mut::<&Player>()
            .into_iter()
            .any(|(_, player)| player.health <= 0.0);

        if dead {
            self.phase = GamePhase::GameOver;
            self.menu_return_in = Some(GAME_OVER_MENU_DELAY_TICKS);
            self.events.push(GameEvent::PlayerDied {
                wave: self.wave.wave,
            });
        }
    }

    /// Count down the GameOver → Menu delay. Entities are left in the
    /// world; the next StartGame clears them.
    fn update_menu_return(&mut self) {
        if self.phase != GamePhase::GameOver {
            return;
        }
        if let Some(remaining) = self.menu_return_in.as_mut() {
            if *remaining == 0 {
                self.phase = GamePhase::Menu;
                self.menu_return_in = None;
            } else {
                *remaining -= 1;
            }
        }
    }

    /// Apply a command immediately, outside the tick cycle (for tests
    /// that need to inspect the world before any system runs).
    #[cfg(test)]
    pub fn handle_command_now(&mut self, command: PlayerCommand, input: &FrameInput) {
        self.handle_command(command, input);
    }

    /// Despawn every enemy (for tests driving wave transitions).
    #[cfg(test)]
    pub fn clear_enemies(&mut self) {
        use swarmbreak_core::components::Enemy;

        let enemies: Vec<hecs::Entity> = self
            .world
            .query::<&Enemy>()
            .iter()
            .map(|(entity, _)| entity)
            .collect();
        for entity in enemies {
            let _ = self.world.despawn(entity);
        }
    }

    /// Spawn an enemy at an exact position (for tests needing controlled
    /// contact).
    #[cfg(test)]
    pub fn spawn_enemy_at(&mut self, position: Position, speed: f32) {
        world_setup::spawn_enemy_at(&mut self.world, position, speed);
    }

    /// Overwrite the player's health (for tests forcing a death).
    #[cfg(test)]
    pub fn set_player_health(&mut self, health: f32) {
        for (_entity, player) in self.world.query_mut::<&mut Player>() {
            player.health = health;
        }
    }
}
