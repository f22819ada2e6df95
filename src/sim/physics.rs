//! Craft physics: bounded acceleration with drag
//!
//! Speeds are in cells per tick, `x` = columns, `y` = rows.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Acceleration/drag model applied once per tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Physics {
    /// Maximum row speed (cells/tick)
    pub row_limit: f32,
    /// Maximum column speed (cells are about twice as tall as wide)
    pub column_limit: f32,
    /// Fraction of the limit added per tick of held input
    pub acceleration: f32,
    /// Multiplier applied to an axis with no input
    pub fading: f32,
    /// Speeds below this snap to exactly zero
    pub snap_threshold: f32,
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            row_limit: 1.0,
            column_limit: 2.0,
            acceleration: 0.25,
            fading: 0.8,
            snap_threshold: 0.05,
        }
    }
}

impl Physics {
    /// New speed from the current speed and directional input
    ///
    /// `direction` is `(rows, columns)`; values are reduced to their sign.
    pub fn update(&self, speed: Vec2, direction: (i8, i8)) -> Vec2 {
        let (rows, columns) = direction;
        Vec2::new(
            self.update_axis(speed.x, columns.signum(), self.column_limit),
            self.update_axis(speed.y, rows.signum(), self.row_limit),
        )
    }

    fn update_axis(&self, speed: f32, direction: i8, limit: f32) -> f32 {
        let speed = speed.clamp(-limit, limit);

        let speed = if direction != 0 {
            (speed + f32::from(direction) * limit * self.acceleration).clamp(-limit, limit)
        } else {
            speed * self.fading
        };

        if speed.abs() < self.snap_threshold {
            0.0
        } else {
            speed
        }
    }

    /// Upper bound on zero-input ticks needed to stop from any speed
    pub fn max_stop_ticks(&self) -> u32 {
        let limit = self.row_limit.max(self.column_limit);
        let ticks = (self.snap_threshold / limit).ln() / self.fading.ln();
        ticks.ceil().max(0.0) as u32 + 1
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        if !(self.row_limit > 0.0 && self.column_limit > 0.0) {
            return Err("physics speed limits must be positive".into());
        }
        if !(self.acceleration > 0.0 && self.acceleration <= 1.0) {
            return Err("physics.acceleration must be in (0, 1]".into());
        }
        if !(self.fading > 0.0 && self.fading < 1.0) {
            return Err("physics.fading must be in (0, 1)".into());
        }
        if !(self.snap_threshold > 0.0) {
            return Err("physics.snap_threshold must be positive".into());
        }
        Ok(())
    }
}
