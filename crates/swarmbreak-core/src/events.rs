//! Events emitted by the simulation for frontend feedback and logging.

use serde::{Deserialize, Serialize};

/// Noteworthy state transitions, drained into each snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A wave began (including wave 1 on game start).
    WaveStarted { wave: u32, enemy_count: u32 },
    /// A bullet destroyed an enemy.
    EnemyDestroyed { remaining: u32 },
    /// The player's health reached zero.
    PlayerDied { wave: u32 },
}
