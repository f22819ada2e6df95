//! Platform abstraction layer
//!
//! The simulation only talks to a `Canvas`:
//! - Glyph drawing/erasing at real-valued cell coordinates
//! - One input sample per tick
//! - Frame presentation
//!
//! `TerminalCanvas` drives a real terminal; `MemoryCanvas` is headless and
//! scriptable. Both draw through the same `Grid`.

pub mod grid;
pub mod memory;
pub mod terminal;

pub use grid::{Cell, Grid};
pub use memory::MemoryCanvas;
pub use terminal::TerminalCanvas;

use crate::error::Result;

/// Text attribute for a drawn glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    Dim,
    #[default]
    Normal,
    Bold,
}

/// Player intent sampled once per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controls {
    /// -1 up, 0 none, 1 down
    pub rows: i8,
    /// -1 left, 0 none, 1 right
    pub columns: i8,
    pub fire: bool,
}

impl Controls {
    pub fn is_neutral(&self) -> bool {
        *self == Self::default()
    }
}

/// Rendering and input facade
pub trait Canvas {
    /// Surface size as `(rows, columns)`
    fn bounds(&self) -> (usize, usize);

    /// Draw glyph text with its top-left corner at `(row, column)`
    fn render(&mut self, row: f32, column: f32, glyph: &str, style: Style);

    /// Blank every cell `glyph` would draw at `(row, column)`
    fn erase(&mut self, row: f32, column: f32, glyph: &str);

    /// Non-blocking input sample; neutral when nothing is pending
    fn sample_input(&mut self) -> Controls;

    /// Flush the current frame
    fn present(&mut self) -> Result<()>;

    /// Whether the player asked to leave
    fn should_quit(&self) -> bool {
        false
    }
}
