//! Simulation engine for SWARMBREAK.
//!
//! Owns the hecs ECS world, runs systems once per tick,
//! and produces GameStateSnapshots for the frontend.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use swarmbreak_core as core;

#[cfg(test)]
mod tests;
