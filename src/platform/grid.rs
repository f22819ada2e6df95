//! Cell grid shared by every canvas
//!
//! Frame semantics: coordinates round to the nearest cell, spaces are
//! transparent, anything off the grid is clipped.

use super::Style;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: Style,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        ch: ' ',
        style: Style::Normal,
    };
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![Cell::BLANK; rows * columns],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        (row < self.rows && column < self.columns).then(|| self.cells[row * self.columns + column])
    }

    pub fn set(&mut self, row: usize, column: usize, cell: Cell) {
        if row < self.rows && column < self.columns {
            self.cells[row * self.columns + column] = cell;
        }
    }

    /// Draw `glyph`, or blank its cells when `style` is `None`
    pub fn draw(&mut self, row: f32, column: f32, glyph: &str, style: Option<Style>) {
        let top = row.round() as i64;
        let left = column.round() as i64;

        for (dr, line) in glyph.lines().enumerate() {
            let r = top + dr as i64;
            if r < 0 {
                continue;
            }
            if r >= self.rows as i64 {
                break;
            }
            for (dc, ch) in line.chars().enumerate() {
                if ch == ' ' {
                    continue;
                }
                let c = left + dc as i64;
                if c < 0 {
                    continue;
                }
                if c >= self.columns as i64 {
                    break;
                }
                let cell = match style {
                    Some(style) => Cell { ch, style },
                    None => Cell::BLANK,
                };
                self.set(r as usize, c as usize, cell);
            }
        }
    }

    /// Box border around the whole grid
    pub fn draw_border(&mut self) {
        if self.rows < 2 || self.columns < 2 {
            return;
        }
        let (last_row, last_column) = (self.rows - 1, self.columns - 1);
        let edge = |ch| Cell {
            ch,
            style: Style::Normal,
        };
        for c in 1..last_column {
            self.set(0, c, edge('-'));
            self.set(last_row, c, edge('-'));
        }
        for r in 1..last_row {
            self.set(r, 0, edge('|'));
            self.set(r, last_column, edge('|'));
        }
        for (r, c) in [(0, 0), (0, last_column), (last_row, 0), (last_row, last_column)] {
            self.set(r, c, edge('+'));
        }
    }

    /// Characters of one row, trailing blanks trimmed
    pub fn row_text(&self, row: usize) -> String {
        let start = row * self.columns;
        self.cells[start..start + self.columns]
            .iter()
            .map(|cell| cell.ch)
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    /// Cells that differ from `other`, as `(row, column, cell)`
    pub fn diff<'a>(&'a self, other: &'a Grid) -> impl Iterator<Item = (usize, usize, Cell)> + 'a {
        let columns = self.columns;
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (new, old))| new != old)
            .map(move |(i, (new, _))| (i / columns, i % columns, *new))
    }

    /// Number of non-blank cells
    pub fn visible_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.ch != ' ').count()
    }
}
