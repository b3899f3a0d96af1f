//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 2D position in arena space (pixels).
/// x grows rightward, y grows downward, origin at the top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

/// 2D velocity in arena space (pixels per tick).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Center-to-center distance to another position in pixels.
    pub fn distance_to(&self, other: &Position) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Heading toward another position in radians (0 = +x, `atan2` convention).
    /// A zero-length offset yields 0, i.e. straight along +x.
    pub fn heading_to(&self, other: &Position) -> f32 {
        (other.y - self.y).atan2(other.x - self.x)
    }
}

impl Velocity {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Velocity of the given speed along the given heading.
    pub fn from_heading(heading: f32, speed: f32) -> Self {
        Self {
            x: heading.cos() * speed,
            y: heading.sin() * speed,
        }
    }

    /// Speed magnitude (pixels per tick).
    pub fn speed(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl SimTime {
    /// Seconds per tick at the fixed tick rate.
    pub fn dt(&self) -> f32 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
