//! Space Garbage - A terminal arcade game
//!
//! Core modules:
//! - `sim`: Cooperative task scheduler, entity tasks, physics and collisions
//! - `platform`: Terminal/in-memory canvas (rendering + input facade)
//! - `assets`: Glyph frames (built-in and directory-backed)
//! - `settings`: Data-driven game configuration
//! - `game`: Session setup and the paced tick loop

pub mod assets;
pub mod error;
pub mod game;
pub mod platform;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed tick interval in milliseconds (10 Hz)
    pub const TICK_INTERVAL_MS: u64 = 100;

    /// Number of stars in the background field
    pub const STAR_COUNT: usize = 200;
    /// Symbols a star may be drawn with
    pub const STAR_SYMBOLS: &str = "+*.:";
    /// Upper bound for a star's random dim-phase offset (ticks)
    pub const STAR_MAX_OFFSET: u32 = 15;
    /// Blink phase durations after the offset phase: dim, normal, bold, normal
    pub const STAR_PHASE_TICKS: [u32; 4] = [20, 3, 5, 3];

    /// Year the game starts in
    pub const START_YEAR: i32 = 1957;
    /// Ticks per in-game year
    pub const TICKS_PER_YEAR: u32 = 15;
    /// Year the plasma gun becomes available
    pub const WEAPON_UNLOCK_YEAR: i32 = 2020;

    /// Garbage descent speed (rows per tick)
    pub const GARBAGE_SPEED: f32 = 0.5;
    /// Projectile speed (rows per tick, upward)
    pub const PROJECTILE_SPEED: f32 = 1.0;
    /// Cells added around the craft frame for garbage hits (shots use none)
    pub const CRAFT_HITBOX_MARGIN: f32 = 0.5;

    /// Each rocket frame stays on screen this many ticks
    pub const ROCKET_FRAME_TICKS: usize = 2;
}

/// Two-sided clamp range for one axis
///
/// `max` is raised to `min` on construction, so a surface smaller than the
/// sprite collapses the range to a single value instead of inverting it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub fn new(min: f32, max: f32) -> Self {
        Self {
            min,
            max: max.max(min),
        }
    }

    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    #[inline]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}
