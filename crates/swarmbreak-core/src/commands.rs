//! Player commands and per-frame input sent from the frontend to the
//! simulation.
//!
//! Discrete, edge-triggered actions arrive as queued `PlayerCommand`s and
//! are consumed at the next tick boundary. Continuous state (held keys,
//! pointer position) is sampled once per frame into a `FrameInput` and
//! passed into the tick directly; nothing mutates mid-tick.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// All possible discrete player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start a new game. Accepted in the menu, and during the game-over
    /// delay (where it cancels the pending automatic return to menu).
    StartGame,
    /// Fire one bullet toward the current pointer position. Ignored
    /// unless a game is being played.
    Fire,
}

/// Continuous input sampled once per display frame.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FrameInput {
    /// Held movement directions. Opposing or perpendicular directions
    /// may be held simultaneously; they sum axis-wise, unnormalized.
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Latest pointer position in arena coordinates.
    pub pointer: Position,
}
