//! Simulation systems, run in a fixed order each tick by the engine.

pub mod bounds;
pub mod collision;
pub mod movement;
pub mod player_control;
pub mod pursuit;
pub mod snapshot;
pub mod wave_spawner;
