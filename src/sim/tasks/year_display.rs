//! Year caption in the bottom-left corner

use crate::error::Result;
use crate::platform::Style;
use crate::sim::progression::year_caption;
use crate::sim::task::{Step, Task, TaskContext};

#[derive(Default)]
pub struct YearDisplay {
    /// Caption and row it was drawn at
    drawn: Option<(String, f32)>,
}

impl YearDisplay {
    pub const COLUMN: f32 = 2.0;

    pub fn new() -> Self {
        Self::default()
    }

    fn clear(&mut self, ctx: &mut TaskContext<'_>) {
        if let Some((caption, row)) = self.drawn.take() {
            ctx.canvas.erase(row, Self::COLUMN, &caption);
        }
    }
}

impl Task for YearDisplay {
    fn name(&self) -> &'static str {
        "year_display"
    }

    fn resume(&mut self, ctx: &mut TaskContext<'_>) -> Result<Step> {
        self.clear(ctx);
        let (rows, _) = ctx.bounds();
        let row = rows.saturating_sub(2) as f32;
        let caption = year_caption(ctx.world.year);
        ctx.canvas.render(row, Self::COLUMN, &caption, Style::Normal);
        self.drawn = Some((caption, row));
        Ok(Step::NEXT)
    }

    fn retire(&mut self, ctx: &mut TaskContext<'_>) {
        self.clear(ctx);
    }
}
