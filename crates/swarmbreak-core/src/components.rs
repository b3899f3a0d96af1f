//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

/// The player's circle: movement stats and health.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player {
    /// Circle radius (pixels).
    pub radius: f32,
    /// Movement speed per held direction (pixels per tick).
    pub speed: f32,
    /// Current health, always within [0, max_health].
    pub health: f32,
    /// Health at the start of a game.
    pub max_health: f32,
}

/// A pursuing enemy. Speed is fixed at spawn from the wave number.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    /// Circle radius (pixels).
    pub radius: f32,
    /// Pursuit speed (pixels per tick).
    pub speed: f32,
}

/// A player-fired projectile. Its direction and speed live in the
/// entity's `Velocity` component, set once at spawn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bullet {
    /// Circle radius (pixels).
    pub radius: f32,
}

// Position and Velocity from types.rs double as ECS components:
// every entity above carries both.
