//! Input collection — polls macroquad key/mouse state once per frame.
//!
//! Held keys and the pointer become a `FrameInput`; edge-triggered
//! actions become queued `PlayerCommand`s, consumed by the engine at the
//! next tick boundary.

use macroquad::prelude::*;

use swarmbreak_core::commands::{FrameInput, PlayerCommand};
use swarmbreak_core::enums::GamePhase;
use swarmbreak_core::types::Position;

/// Everything the frontend gathered for one frame.
#[derive(Debug, Clone, Default)]
pub struct CollectedInput {
    /// Edge-triggered actions, in press order.
    pub commands: Vec<PlayerCommand>,
    /// Held keys and pointer, sampled at collection time.
    pub frame: FrameInput,
}

/// Poll input state for this frame.
///
/// Start is only offered while the menu is shown; the automatic
/// GameOver → Menu transition has no manual skip. Fire is always
/// forwarded and the engine ignores it outside Playing.
pub fn collect(phase: GamePhase) -> CollectedInput {
    let (mouse_x, mouse_y) = mouse_position();

    let frame = FrameInput {
        up: is_key_down(KeyCode::W) || is_key_down(KeyCode::Up),
        down: is_key_down(KeyCode::S) || is_key_down(KeyCode::Down),
        left: is_key_down(KeyCode::A) || is_key_down(KeyCode::Left),
        right: is_key_down(KeyCode::D) || is_key_down(KeyCode::Right),
        pointer: Position::new(mouse_x, mouse_y),
    };

    let mut commands = Vec::new();
    if phase == GamePhase::Menu
        && (is_key_pressed(KeyCode::Enter) || is_mouse_button_pressed(MouseButton::Left))
    {
        commands.push(PlayerCommand::StartGame);
    }
    if is_key_pressed(KeyCode::Space) {
        commands.push(PlayerCommand::Fire);
    }

    CollectedInput { commands, frame }
}
