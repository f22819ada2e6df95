//! Headless canvas with scripted input

use std::collections::VecDeque;

use super::{Canvas, Cell, Controls, Grid, Style};
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct MemoryCanvas {
    grid: Grid,
    /// Inputs consumed one per sample; `held` is used once drained
    script: VecDeque<Controls>,
    held: Controls,
    presented: u64,
    quit_after: Option<u64>,
}

impl MemoryCanvas {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            grid: Grid::new(rows, columns),
            script: VecDeque::new(),
            held: Controls::default(),
            presented: 0,
            quit_after: None,
        }
    }

    /// Queue inputs returned by the next samples, in order
    pub fn push_input(&mut self, controls: Controls) {
        self.script.push_back(controls);
    }

    /// Input returned whenever the script is empty
    pub fn hold(&mut self, controls: Controls) {
        self.held = controls;
    }

    /// Ask to quit once `frames` frames have been presented
    pub fn quit_after(&mut self, frames: u64) {
        self.quit_after = Some(frames);
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<Cell> {
        self.grid.get(row, column)
    }

    pub fn presented(&self) -> u64 {
        self.presented
    }
}

impl Canvas for MemoryCanvas {
    fn bounds(&self) -> (usize, usize) {
        (self.grid.rows(), self.grid.columns())
    }

    fn render(&mut self, row: f32, column: f32, glyph: &str, style: Style) {
        self.grid.draw(row, column, glyph, Some(style));
    }

    fn erase(&mut self, row: f32, column: f32, glyph: &str) {
        self.grid.draw(row, column, glyph, None);
    }

    fn sample_input(&mut self) -> Controls {
        self.script.pop_front().unwrap_or(self.held)
    }

    fn present(&mut self) -> Result<()> {
        self.presented += 1;
        Ok(())
    }

    fn should_quit(&self) -> bool {
        self.quit_after.is_some_and(|frames| self.presented >= frames)
    }
}
