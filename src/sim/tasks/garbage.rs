//! Falling space garbage
//!
//! A garbage piece owns exactly one obstacle while it is live. The obstacle
//! is registered on the first resumption and released on retire, whatever
//! the exit path.

use crate::Span;
use crate::assets::Frame;
use crate::error::Result;
use crate::platform::Style;
use crate::sim::collision::Rect;
use crate::sim::obstacles::ObstacleId;
use crate::sim::task::{Step, Task, TaskContext};

use super::Explosion;

pub struct Garbage {
    frame: Frame,
    column: f32,
    row: f32,
    speed: f32,
    obstacle: Option<ObstacleId>,
    /// Row the frame was last drawn at
    drawn: Option<f32>,
}

impl Garbage {
    pub fn new(frame: Frame, column: f32, speed: f32) -> Self {
        Self {
            frame,
            column,
            row: 0.0,
            speed,
            obstacle: None,
            drawn: None,
        }
    }

    fn rect(&self) -> Rect {
        Rect::new(
            self.row,
            self.column,
            self.frame.rows() as f32,
            self.frame.columns() as f32,
        )
    }

    fn clear(&mut self, ctx: &mut TaskContext<'_>) {
        if let Some(row) = self.drawn.take() {
            ctx.canvas.erase(row, self.column, self.frame.text());
        }
    }
}

impl Task for Garbage {
    fn name(&self) -> &'static str {
        "garbage"
    }

    fn resume(&mut self, ctx: &mut TaskContext<'_>) -> Result<Step> {
        let (rows, columns) = ctx.bounds();
        let id = match self.obstacle {
            Some(id) => {
                self.clear(ctx);
                self.row += self.speed;
                ctx.obstacles.set_row(id, self.row);
                id
            }
            None => {
                self.column = Span::new(0.0, columns as f32 - 1.0).clamp(self.column);
                let id = ctx.obstacles.register(self.rect());
                self.obstacle = Some(id);
                id
            }
        };

        if ctx.obstacles.take_hit(id) {
            ctx.spawn(Explosion::new(self.rect().center()));
            ctx.world.stats.garbage_destroyed += 1;
            return Ok(Step::Done);
        }
        if self.row >= rows as f32 {
            return Ok(Step::Done);
        }

        ctx.canvas
            .render(self.row, self.column, self.frame.text(), Style::Normal);
        self.drawn = Some(self.row);
        Ok(Step::NEXT)
    }

    fn retire(&mut self, ctx: &mut TaskContext<'_>) {
        self.clear(ctx);
        if let Some(id) = self.obstacle.take() {
            ctx.obstacles.remove(id);
        }
    }
}
