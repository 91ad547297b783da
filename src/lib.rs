//! Color Drop - drag colored circles into the target zone
//!
//! Core modules:
//! - `sim`: Deterministic simulation (board state, placement, drag/drop)
//! - `game`: Host-facing facade tying the simulation to a seeded RNG
//! - `renderer`: Render snapshot and triangle tessellation for the host
//! - `settings`: Data-driven game configuration

pub mod game;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Radius shared by every circle
    pub const CIRCLE_RADIUS: f32 = 50.0;
    /// Circles per round
    pub const CIRCLE_COUNT: usize = 5;
    /// Upper bound accepted from settings
    pub const MAX_CIRCLE_COUNT: usize = 1000;

    /// Height of the target strip along the bottom edge
    pub const TARGET_BAND_HEIGHT: f32 = 100.0;

    /// Play area used before the host reports a real size
    pub const DEFAULT_AREA_WIDTH: f32 = 1000.0;
    pub const DEFAULT_AREA_HEIGHT: f32 = 1000.0;

    /// Rejection-sampling budget per circle before giving up
    pub const PLACEMENT_ATTEMPTS_PER_CIRCLE: u32 = 10_000;

    /// Triangle fan segments per circle
    pub const CIRCLE_SEGMENTS: u32 = 32;

    /// Round-over overlay
    pub const GAME_OVER_TEXT: &str = "Game Over!";
    pub const GAME_OVER_TEXT_SIZE: f32 = 50.0;
}

/// Whether two circles of equal radius overlap (touching does not count)
#[inline]
pub fn circles_overlap(a: Vec2, b: Vec2, radius: f32) -> bool {
    a.distance(b) < 2.0 * radius
}

/// Center of an axis-aligned span, used for overlay placement
#[inline]
pub fn midpoint(min: Vec2, max: Vec2) -> Vec2 {
    (min + max) * 0.5
}
