//! Axis-aligned rectangle overlap
//!
//! Rectangles cover half-open cell ranges: rows `[row, row + rows)` and
//! columns `[column, column + columns)`. Only strict interior overlap counts
//! as a collision; rectangles that merely share an edge do not collide.

use glam::Vec2;

/// A rectangle in cell coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub row: f32,
    pub column: f32,
    pub rows: f32,
    pub columns: f32,
}

impl Rect {
    pub fn new(row: f32, column: f32, rows: f32, columns: f32) -> Self {
        Self {
            row,
            column,
            rows,
            columns,
        }
    }

    /// A single cell at `(row, column)`
    pub fn cell(row: f32, column: f32) -> Self {
        Self::new(row, column, 1.0, 1.0)
    }

    /// Rectangle at `pos` (`x` = column, `y` = row) with the given size
    pub fn at(pos: Vec2, rows: usize, columns: usize) -> Self {
        Self::new(pos.y, pos.x, rows as f32, columns as f32)
    }

    /// Grow by `margin` cells on every side
    pub fn inflate(&self, margin: f32) -> Self {
        Self {
            row: self.row - margin,
            column: self.column - margin,
            rows: self.rows + 2.0 * margin,
            columns: self.columns + 2.0 * margin,
        }
    }

    /// Centre point (`x` = column, `y` = row)
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.column + self.columns / 2.0,
            self.row + self.rows / 2.0,
        )
    }

    /// Strict overlap test; touching edges do not collide
    pub fn overlaps(&self, other: &Rect) -> bool {
        spans_overlap(self.row, self.rows, other.row, other.rows)
            && spans_overlap(self.column, self.columns, other.column, other.columns)
    }

    /// Overlap test with this rectangle inflated by `margin`
    pub fn overlaps_with_margin(&self, other: &Rect, margin: f32) -> bool {
        if margin == 0.0 {
            self.overlaps(other)
        } else {
            self.inflate(margin).overlaps(other)
        }
    }
}

#[inline]
fn spans_overlap(a_start: f32, a_len: f32, b_start: f32, b_len: f32) -> bool {
    a_start < b_start + b_len && b_start < a_start + a_len
}
