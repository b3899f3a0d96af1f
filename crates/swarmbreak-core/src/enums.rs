//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
///
/// `Menu → Playing → GameOver → Menu` after a fixed delay; `Playing`
/// is re-entered from `Menu` (or from `GameOver`, which cancels the
/// pending automatic return) via `PlayerCommand::StartGame`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Menu,
    Playing,
    GameOver,
}
