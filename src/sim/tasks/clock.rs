//! Progression clock: advances the in-game year

use crate::error::Result;
use crate::sim::progression::milestone;
use crate::sim::task::{Step, Task, TaskContext};

#[derive(Default)]
pub struct ProgressionClock {
    started: bool,
}

impl ProgressionClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Task for ProgressionClock {
    fn name(&self) -> &'static str {
        "clock"
    }

    fn resume(&mut self, ctx: &mut TaskContext<'_>) -> Result<Step> {
        if self.started {
            ctx.world.year += 1;
            match milestone(ctx.world.year) {
                Some(event) => log::info!("Year {}: {}", ctx.world.year, event),
                None => log::debug!("Year {}", ctx.world.year),
            }
        }
        self.started = true;
        Ok(Step::Sleep(ctx.settings.ticks_per_year))
    }
}
