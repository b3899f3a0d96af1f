//! Renderer — pure read of a GameStateSnapshot, drawn with macroquad.

use macroquad::prelude::*;

use swarmbreak_core::enums::GamePhase;
use swarmbreak_core::state::GameStateSnapshot;

/// Health bar geometry (top-left HUD corner).
const HEALTH_BAR_X: f32 = 10.0;
const HEALTH_BAR_Y: f32 = 10.0;
const HEALTH_BAR_WIDTH: f32 = 200.0;
const HEALTH_BAR_HEIGHT: f32 = 16.0;

/// Draw one frame from the snapshot. Never mutates game state.
pub fn draw(snapshot: &GameStateSnapshot) {
    clear_background(BLACK);

    if snapshot.phase == GamePhase::Menu {
        draw_menu();
        return;
    }

    // Entities: player sky-blue, bullets yellow, enemies red.
    let player = &snapshot.player;
    draw_circle(player.position.x, player.position.y, player.radius, SKYBLUE);

    for bullet in &snapshot.bullets {
        draw_circle(bullet.position.x, bullet.position.y, bullet.radius, YELLOW);
    }

    for enemy in &snapshot.enemies {
        draw_circle(enemy.position.x, enemy.position.y, enemy.radius, RED);
    }

    draw_hud(snapshot);

    if snapshot.phase == GamePhase::GameOver {
        draw_centered_text("You Died!", screen_height() / 2.0, 40.0, WHITE);
    }
}

/// Proportional width of the health bar fill for a health fraction.
fn health_bar_fill(health_fraction: f32) -> f32 {
    HEALTH_BAR_WIDTH * health_fraction.clamp(0.0, 1.0)
}

fn draw_hud(snapshot: &GameStateSnapshot) {
    draw_rectangle(
        HEALTH_BAR_X,
        HEALTH_BAR_Y,
        HEALTH_BAR_WIDTH,
        HEALTH_BAR_HEIGHT,
        DARKGRAY,
    );
    draw_rectangle(
        HEALTH_BAR_X,
        HEALTH_BAR_Y,
        health_bar_fill(snapshot.hud.health_fraction),
        HEALTH_BAR_HEIGHT,
        RED,
    );
    draw_text(
        &snapshot.hud.wave_label,
        HEALTH_BAR_X,
        HEALTH_BAR_Y + HEALTH_BAR_HEIGHT + 24.0,
        24.0,
        WHITE,
    );
}

fn draw_menu() {
    draw_centered_text("SWARMBREAK", screen_height() / 2.0 - 40.0, 56.0, SKYBLUE);
    draw_centered_text(
        "Enter or click to play",
        screen_height() / 2.0 + 20.0,
        28.0,
        WHITE,
    );
}

fn draw_centered_text(text: &str, y: f32, font_size: f32, color: Color) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    draw_text(text, (screen_width() - dims.width) / 2.0, y, font_size, color);
}
