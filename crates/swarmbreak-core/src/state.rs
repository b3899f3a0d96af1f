//! Game state snapshot — the complete visible state handed to the
//! renderer each tick.

use serde::{Deserialize, Serialize};

use crate::enums::GamePhase;
use crate::events::GameEvent;
use crate::types::{Position, SimTime};

/// Complete game state produced by the engine after each tick.
/// Building it never modifies the world; the renderer only reads it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// Current wave number (1-based).
    pub wave: u32,
    pub player: PlayerView,
    pub bullets: Vec<BulletView>,
    pub enemies: Vec<EnemyView>,
    pub hud: HudView,
    /// Events that occurred during this tick.
    pub events: Vec<GameEvent>,
}

/// The player circle as drawn.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub radius: f32,
    pub health: f32,
    pub max_health: f32,
}

/// A bullet circle as drawn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BulletView {
    pub position: Position,
    pub radius: f32,
}

/// An enemy circle as drawn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyView {
    pub position: Position,
    pub radius: f32,
}

/// Derived values for the status display, recomputed every tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudView {
    /// Player health as a fraction of max health, in [0, 1].
    pub health_fraction: f32,
    /// Wave counter text, e.g. "Wave: 3".
    pub wave_label: String,
}
