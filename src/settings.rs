//! Game settings
//!
//! Loaded from an optional JSON file; every field falls back to its default.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};
use crate::sim::physics::Physics;
use crate::sim::progression::GarbageSchedule;

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Pacing ===
    /// Wall-clock length of one tick (milliseconds)
    pub tick_interval_ms: u64,

    // === Background ===
    /// Number of blinking stars
    pub star_count: usize,
    /// Upper bound of each star's random dim-phase offset (ticks)
    pub star_max_offset: u32,

    // === Progression ===
    /// Year shown when the game starts
    pub start_year: i32,
    /// Ticks per in-game year
    pub ticks_per_year: u32,
    /// Year the gun unlocks (`None` = armed from the start)
    pub weapon_unlock_year: Option<i32>,
    /// Garbage inter-arrival delays keyed by year
    pub garbage_schedule: GarbageSchedule,

    // === Entities ===
    /// Garbage descent speed (rows per tick)
    pub garbage_speed: f32,
    /// Projectile speed (rows per tick, upward)
    pub projectile_speed: f32,
    /// Extra cells added around the craft's hitbox
    pub craft_hitbox_margin: f32,
    /// Craft acceleration and drag
    pub physics: Physics,

    // === Run ===
    /// RNG seed; random when unset
    pub seed: Option<u64>,
    /// Directory with `rocket/` and `garbage/` frames; built-ins when unset
    pub frames_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_interval_ms: TICK_INTERVAL_MS,

            star_count: STAR_COUNT,
            star_max_offset: STAR_MAX_OFFSET,

            start_year: START_YEAR,
            ticks_per_year: TICKS_PER_YEAR,
            weapon_unlock_year: Some(WEAPON_UNLOCK_YEAR),
            garbage_schedule: GarbageSchedule::default(),

            garbage_speed: GARBAGE_SPEED,
            projectile_speed: PROJECTILE_SPEED,
            craft_hitbox_margin: CRAFT_HITBOX_MARGIN,
            physics: Physics::default(),

            seed: None,
            frames_dir: None,
        }
    }
}

impl Settings {
    /// Load and validate settings from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&json)?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Fixed tick interval
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Whether the gun is usable in `year`
    pub fn weapon_unlocked(&self, year: i32) -> bool {
        self.weapon_unlock_year.is_none_or(|unlock| year >= unlock)
    }

    /// Reject settings the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(Error::InvalidSettings(msg));

        if self.tick_interval_ms == 0 {
            return invalid("tick_interval_ms must be positive".into());
        }
        if self.ticks_per_year == 0 {
            return invalid("ticks_per_year must be positive".into());
        }
        if !(self.garbage_speed.is_finite() && self.garbage_speed > 0.0) {
            return invalid(format!(
                "garbage_speed must be positive, got {}",
                self.garbage_speed
            ));
        }
        if !(self.projectile_speed.is_finite() && self.projectile_speed > 0.0) {
            return invalid(format!(
                "projectile_speed must be positive, got {}",
                self.projectile_speed
            ));
        }
        if !(self.craft_hitbox_margin.is_finite() && self.craft_hitbox_margin >= 0.0) {
            return invalid(format!(
                "craft_hitbox_margin must be non-negative, got {}",
                self.craft_hitbox_margin
            ));
        }
        self.physics.validate().map_err(Error::InvalidSettings)?;
        self.garbage_schedule
            .validate()
            .map_err(Error::InvalidSettings)?;
        Ok(())
    }
}
