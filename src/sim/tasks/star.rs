//! Blinking background star
//!
//! The dim phase that opens each blink cycle lasts a random number of ticks,
//! drawn again every cycle so the field never settles into a pattern.

use std::ops::RangeInclusive;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::consts::{STAR_PHASE_TICKS, STAR_SYMBOLS};
use crate::error::Result;
use crate::platform::Style;
use crate::sim::state::World;
use crate::sim::task::{Step, Task, TaskContext};

/// Styles of the five blink phases; the first lasts the star's offset
const PHASE_STYLES: [Style; 5] = [
    Style::Dim,
    Style::Dim,
    Style::Normal,
    Style::Bold,
    Style::Normal,
];

pub struct Star {
    row: f32,
    column: f32,
    glyph: String,
    /// Length of the current cycle's opening dim phase
    offset: u32,
    offsets: RangeInclusive<u32>,
    phase: usize,
}

impl Star {
    /// Star whose opening dim phase always lasts `offset` ticks
    pub fn new(row: f32, column: f32, symbol: char, offset: u32) -> Self {
        Self::with_offsets(row, column, symbol, offset, offset..=offset)
    }

    fn with_offsets(
        row: f32,
        column: f32,
        symbol: char,
        offset: u32,
        offsets: RangeInclusive<u32>,
    ) -> Self {
        Self {
            row,
            column,
            glyph: symbol.to_string(),
            offset,
            offsets,
            phase: 0,
        }
    }

    /// Star at a random inner position with a random symbol and offset
    pub fn random(world: &mut World, bounds: (usize, usize), max_offset: u32) -> Self {
        let (rows, columns) = bounds;
        let rng = &mut world.rng;
        let row = rng.random_range(2..=rows.saturating_sub(2).max(2));
        let column = rng.random_range(2..=columns.saturating_sub(2).max(2));
        let symbols: Vec<char> = STAR_SYMBOLS.chars().collect();
        let symbol = *symbols.choose(rng).unwrap_or(&'*');
        let offset = rng.random_range(0..=max_offset);
        Self::with_offsets(row as f32, column as f32, symbol, offset, 0..=max_offset)
    }

    fn duration(&self, phase: usize) -> u32 {
        match phase {
            0 => self.offset,
            n => STAR_PHASE_TICKS[n - 1],
        }
    }
}

impl Task for Star {
    fn name(&self) -> &'static str {
        "star"
    }

    fn resume(&mut self, ctx: &mut TaskContext<'_>) -> Result<Step> {
        // Zero-length offset phase is skipped
        while self.duration(self.phase) == 0 {
            self.phase = (self.phase + 1) % PHASE_STYLES.len();
        }

        ctx.canvas
            .render(self.row, self.column, &self.glyph, PHASE_STYLES[self.phase]);
        let ticks = self.duration(self.phase);
        self.phase = (self.phase + 1) % PHASE_STYLES.len();
        if self.phase == 0 {
            self.offset = ctx.world.rng.random_range(self.offsets.clone());
        }
        Ok(Step::Sleep(ticks))
    }
}
