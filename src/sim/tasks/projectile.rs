//! Shot fired by the craft

use glam::Vec2;

use crate::error::Result;
use crate::platform::Style;
use crate::sim::collision::Rect;
use crate::sim::task::{Step, Task, TaskContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Flash,
    Tracer,
    Flight,
}

pub struct Projectile {
    pos: Vec2,
    velocity: Vec2,
    phase: Phase,
    drawn: Option<(Vec2, &'static str)>,
}

impl Projectile {
    /// `pos` and `velocity` use `x` = column, `y` = row
    pub fn new(pos: Vec2, velocity: Vec2) -> Self {
        Self {
            pos,
            velocity,
            phase: Phase::Flash,
            drawn: None,
        }
    }

    fn glyph(&self) -> &'static str {
        match self.phase {
            Phase::Flash => "*",
            Phase::Tracer => "O",
            Phase::Flight if self.velocity.x != 0.0 => "-",
            Phase::Flight => "|",
        }
    }

    fn draw(&mut self, ctx: &mut TaskContext<'_>) {
        let glyph = self.glyph();
        ctx.canvas.render(self.pos.y, self.pos.x, glyph, Style::Normal);
        self.drawn = Some((self.pos, glyph));
    }

    fn clear(&mut self, ctx: &mut TaskContext<'_>) {
        if let Some((pos, glyph)) = self.drawn.take() {
            ctx.canvas.erase(pos.y, pos.x, glyph);
        }
    }

    /// Strictly inside the border, on the rounded cell
    fn in_bounds(&self, bounds: (usize, usize)) -> bool {
        let (rows, columns) = bounds;
        let (row, column) = (self.pos.y.round(), self.pos.x.round());
        0.0 < row && row < rows as f32 - 1.0 && 0.0 < column && column < columns as f32 - 1.0
    }
}

impl Task for Projectile {
    fn name(&self) -> &'static str {
        "projectile"
    }

    fn resume(&mut self, ctx: &mut TaskContext<'_>) -> Result<Step> {
        match self.phase {
            Phase::Flash => {
                self.draw(ctx);
                self.phase = Phase::Tracer;
            }
            Phase::Tracer => {
                self.draw(ctx);
                self.phase = Phase::Flight;
            }
            Phase::Flight => {
                self.clear(ctx);
                self.pos += self.velocity;
                if !self.in_bounds(ctx.bounds()) {
                    return Ok(Step::Done);
                }

                let cell = Rect::cell(self.pos.y.round(), self.pos.x.round());
                if let Some(target) = ctx.obstacles.first_overlap(&cell, 0.0) {
                    ctx.obstacles.mark_hit(target);
                    log::debug!(
                        "Projectile hit {:?} at ({:.1}, {:.1})",
                        target,
                        self.pos.y,
                        self.pos.x
                    );
                    return Ok(Step::Done);
                }
                self.draw(ctx);
            }
        }
        Ok(Step::NEXT)
    }

    fn retire(&mut self, ctx: &mut TaskContext<'_>) {
        self.clear(ctx);
    }
}
