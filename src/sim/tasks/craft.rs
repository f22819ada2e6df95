//! The player's craft
//!
//! Each tick after the first: erase, read input, update speed, move, clamp,
//! maybe fire, check for garbage, redraw. Touching garbage ends the game.

use glam::Vec2;

use crate::Span;
use crate::assets::Frame;
use crate::consts::ROCKET_FRAME_TICKS;
use crate::error::{Error, Result};
use crate::sim::collision::Rect;
use crate::sim::task::{Step, Task, TaskContext};

use super::{Explosion, GameOver, Projectile};

pub struct Craft {
    frames: Vec<Frame>,
    rows: usize,
    columns: usize,
    /// Top-left corner (`x` = column, `y` = row)
    pos: Vec2,
    /// Cells per tick
    speed: Vec2,
    /// Ticks survived, drives the frame animation
    cycle: usize,
    /// Where and which frame was drawn last
    drawn: Option<(Vec2, usize)>,
}

impl Craft {
    pub fn new(frames: Vec<Frame>, pos: Vec2) -> Result<Self> {
        if frames.is_empty() {
            return Err(Error::Task {
                task: "craft",
                reason: "no rocket frames".into(),
            });
        }
        let rows = frames.iter().map(Frame::rows).max().unwrap_or(0);
        let columns = frames.iter().map(Frame::columns).max().unwrap_or(0);
        Ok(Self {
            frames,
            rows,
            columns,
            pos,
            speed: Vec2::ZERO,
            cycle: 0,
            drawn: None,
        })
    }

    /// Clamp ranges for the top-left corner, keeping the border free
    pub fn spans(bounds: (usize, usize), size: (usize, usize)) -> (Span, Span) {
        let (rows, columns) = bounds;
        let (frame_rows, frame_columns) = size;
        (
            Span::new(1.0, rows as f32 - frame_rows as f32 - 1.0),
            Span::new(1.0, columns as f32 - frame_columns as f32 - 1.0),
        )
    }

    /// Start position: middle of the reachable area
    pub fn start_position(bounds: (usize, usize), size: (usize, usize)) -> Vec2 {
        let (row_span, column_span) = Self::spans(bounds, size);
        Vec2::new(
            ((column_span.min + column_span.max) / 2.0).round(),
            ((row_span.min + row_span.max) / 2.0).round(),
        )
    }

    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    pub fn position(&self) -> Vec2 {
        self.pos
    }

    fn clamp(&mut self, bounds: (usize, usize)) {
        let (row_span, column_span) = Self::spans(bounds, self.size());
        self.pos = Vec2::new(column_span.clamp(self.pos.x), row_span.clamp(self.pos.y));
    }

    fn fly(&mut self, ctx: &mut TaskContext<'_>) {
        let controls = ctx.canvas.sample_input();
        self.speed = ctx
            .settings
            .physics
            .update(self.speed, (controls.rows, controls.columns));
        self.pos += self.speed;
        self.clamp(ctx.bounds());

        if controls.fire && ctx.settings.weapon_unlocked(ctx.world.year) {
            let muzzle = Vec2::new(self.pos.x + (self.columns / 2) as f32, self.pos.y);
            let velocity = Vec2::new(0.0, -ctx.settings.projectile_speed);
            ctx.spawn(Projectile::new(muzzle, velocity));
            ctx.world.stats.shots_fired += 1;
        }
        self.cycle += 1;
    }

    fn crash(&mut self, ctx: &mut TaskContext<'_>, hull: Rect) {
        log::info!(
            "Craft destroyed at ({:.1}, {:.1}) in {}",
            self.pos.y,
            self.pos.x,
            ctx.world.year
        );
        ctx.spawn(Explosion::new(hull.center()));
        ctx.spawn(GameOver::new());
        ctx.world.game_over = true;
    }
}

impl Task for Craft {
    fn name(&self) -> &'static str {
        "craft"
    }

    fn resume(&mut self, ctx: &mut TaskContext<'_>) -> Result<Step> {
        match self.drawn.take() {
            Some((pos, frame)) => {
                ctx.canvas.erase(pos.y, pos.x, self.frames[frame].text());
                self.fly(ctx);
            }
            None => self.clamp(ctx.bounds()),
        }

        let hull = Rect::at(self.pos, self.rows, self.columns);
        if ctx
            .obstacles
            .overlaps(&hull, ctx.settings.craft_hitbox_margin)
        {
            self.crash(ctx, hull);
            return Ok(Step::Done);
        }

        let frame = (self.cycle / ROCKET_FRAME_TICKS) % self.frames.len();
        ctx.canvas.render(
            self.pos.y,
            self.pos.x,
            self.frames[frame].text(),
            Default::default(),
        );
        self.drawn = Some((self.pos, frame));
        Ok(Step::NEXT)
    }

    fn retire(&mut self, ctx: &mut TaskContext<'_>) {
        if let Some((pos, frame)) = self.drawn.take() {
            ctx.canvas.erase(pos.y, pos.x, self.frames[frame].text());
        }
    }
}
