//! Explosion animation, one frame per tick, centred on a point

use glam::Vec2;

use crate::assets::{EXPLOSION_FRAMES, frame_size};
use crate::error::Result;
use crate::platform::Style;
use crate::sim::task::{Step, Task, TaskContext};

pub struct Explosion {
    /// `x` = column, `y` = row
    center: Vec2,
    next: usize,
    drawn: Option<(Vec2, &'static str)>,
}

impl Explosion {
    pub fn new(center: Vec2) -> Self {
        Self {
            center,
            next: 0,
            drawn: None,
        }
    }

    fn clear(&mut self, ctx: &mut TaskContext<'_>) {
        if let Some((corner, frame)) = self.drawn.take() {
            ctx.canvas.erase(corner.y, corner.x, frame);
        }
    }
}

impl Task for Explosion {
    fn name(&self) -> &'static str {
        "explosion"
    }

    fn resume(&mut self, ctx: &mut TaskContext<'_>) -> Result<Step> {
        self.clear(ctx);
        let Some(frame) = EXPLOSION_FRAMES.get(self.next).copied() else {
            return Ok(Step::Done);
        };

        let (rows, columns) = frame_size(frame);
        let corner = self.center - Vec2::new(columns as f32, rows as f32) / 2.0;
        ctx.canvas.render(corner.y, corner.x, frame, Style::Normal);
        self.drawn = Some((corner, frame));
        self.next += 1;
        Ok(Step::NEXT)
    }

    fn retire(&mut self, ctx: &mut TaskContext<'_>) {
        self.clear(ctx);
    }
}
