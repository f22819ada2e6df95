//! Garbage spawner
//!
//! Drops a random garbage piece at a random column, then waits for the
//! current year's delay. Years without a delay spawn nothing.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::assets::Frame;
use crate::error::{Error, Result};
use crate::sim::task::{Step, Task, TaskContext};

use super::Garbage;

pub struct GarbageSpawner {
    frames: Vec<Frame>,
}

impl GarbageSpawner {
    pub fn new(frames: Vec<Frame>) -> Self {
        Self { frames }
    }
}

impl Task for GarbageSpawner {
    fn name(&self) -> &'static str {
        "garbage_spawner"
    }

    fn resume(&mut self, ctx: &mut TaskContext<'_>) -> Result<Step> {
        let Some(delay) = ctx.settings.garbage_schedule.delay_for(ctx.world.year) else {
            return Ok(Step::NEXT);
        };

        let frame = self
            .frames
            .choose(&mut ctx.world.rng)
            .cloned()
            .ok_or_else(|| Error::Task {
                task: "garbage_spawner",
                reason: "no garbage frames".into(),
            })?;

        let (_, columns) = ctx.bounds();
        let column = if columns < 3 {
            0
        } else {
            ctx.world.rng.random_range(1..=columns - 2)
        };

        ctx.spawn(Garbage::new(frame, column as f32, ctx.settings.garbage_speed));
        ctx.world.stats.garbage_spawned += 1;
        Ok(Step::Sleep(delay))
    }
}
