//! Game-over banner, redrawn every tick so nothing wipes it

use crate::assets::{GAME_OVER, frame_size};
use crate::error::Result;
use crate::platform::Style;
use crate::sim::task::{Step, Task, TaskContext};

#[derive(Default)]
pub struct GameOver;

impl GameOver {
    pub fn new() -> Self {
        Self
    }
}

impl Task for GameOver {
    fn name(&self) -> &'static str {
        "game_over"
    }

    fn resume(&mut self, ctx: &mut TaskContext<'_>) -> Result<Step> {
        let (rows, columns) = ctx.bounds();
        let (banner_rows, banner_columns) = frame_size(GAME_OVER);
        let row = (rows as f32 - banner_rows as f32) / 2.0;
        let column = (columns as f32 - banner_columns as f32) / 2.0;
        ctx.canvas.render(row.floor(), column.floor(), GAME_OVER, Style::Bold);
        Ok(Step::NEXT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Canvas;
    use crate::sim::testing::Harness;

    #[test]
    fn test_banner_centred_and_persistent() {
        let mut h = Harness::new(24, 80);
        h.scheduler.add(GameOver::new());
        h.tick();

        let visible = h.canvas.grid().visible_cells();
        assert!(visible > 0);
        assert!(h.canvas.grid().row_text(0).is_empty());
        assert!(h.canvas.grid().row_text(23).is_empty());

        // Something wipes the surface; the next tick restores the banner
        let wipe = "#".repeat(80);
        for row in 0..24 {
            h.canvas.erase(row as f32, 0.0, &wipe);
        }
        assert_eq!(h.canvas.grid().visible_cells(), 0);
        let reports = h.run(3);
        assert!(reports.iter().all(|r| r.retired.is_empty()));
        assert_eq!(h.canvas.grid().visible_cells(), visible);
    }
}
