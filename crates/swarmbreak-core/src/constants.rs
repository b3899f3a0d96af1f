//! Simulation constants and tuning parameters.
//!
//! All speeds are expressed in pixels per tick; one tick corresponds to
//! one display frame at the nominal refresh rate.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- Arena ---

/// Arena width in pixels.
pub const ARENA_WIDTH: f32 = 800.0;

/// Arena height in pixels.
pub const ARENA_HEIGHT: f32 = 600.0;

// --- Player ---

/// Player circle radius (pixels).
pub const PLAYER_RADIUS: f32 = 15.0;

/// Player movement speed per held direction (pixels per tick).
pub const PLAYER_SPEED: f32 = 5.0;

/// Player health at the start of a game.
pub const PLAYER_MAX_HEALTH: f32 = 100.0;

/// Health drained per overlapping enemy per tick of contact.
pub const CONTACT_DAMAGE: f32 = 0.5;

// --- Bullets ---

/// Bullet circle radius (pixels).
pub const BULLET_RADIUS: f32 = 5.0;

/// Bullet speed (pixels per tick).
pub const BULLET_SPEED: f32 = 7.0;

// --- Enemies ---

/// Enemy circle radius (pixels).
pub const ENEMY_RADIUS: f32 = 15.0;

/// Enemy speed floor; per-wave scaling is added on top.
pub const ENEMY_BASE_SPEED: f32 = 1.0;

/// Enemy speed gained per wave number (pixels per tick).
pub const ENEMY_SPEED_PER_WAVE: f32 = 0.2;

// --- Waves ---

/// Enemies spawned by the first wave.
pub const FIRST_WAVE_ENEMY_COUNT: u32 = 5;

/// Additional enemies per subsequent wave.
pub const WAVE_ENEMY_INCREMENT: u32 = 2;

// --- Game over ---

/// Ticks between the player's death and the automatic return to the
/// menu (1.5 seconds at 60 Hz).
pub const GAME_OVER_MENU_DELAY_TICKS: u32 = 90;
