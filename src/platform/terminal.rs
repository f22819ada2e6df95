//! Terminal canvas backed by crossterm
//!
//! Drawing goes to a back buffer; `present` writes only the cells that
//! changed since the previous frame.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use super::{Canvas, Controls, Grid, Style};
use crate::error::Result;

pub struct TerminalCanvas {
    out: Stdout,
    back: Grid,
    front: Grid,
    quit: bool,
}

impl TerminalCanvas {
    /// Take over the terminal: raw mode, alternate screen, hidden cursor
    pub fn new() -> Result<Self> {
        let (columns, rows) = terminal::size()?;
        let mut back = Grid::new(rows as usize, columns as usize);
        back.draw_border();

        terminal::enable_raw_mode()?;
        // Constructed before the screen switch so Drop restores on failure
        let mut canvas = Self {
            out: io::stdout(),
            front: Grid::new(rows as usize, columns as usize),
            back,
            quit: false,
        };
        execute!(
            canvas.out,
            EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All)
        )?;

        log::info!("Terminal canvas {}x{}", rows, columns);
        Ok(canvas)
    }

    fn apply_key(&mut self, key: KeyEvent, controls: &mut Controls) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('w') => controls.rows = -1,
            KeyCode::Down | KeyCode::Char('s') => controls.rows = 1,
            KeyCode::Left | KeyCode::Char('a') => controls.columns = -1,
            KeyCode::Right | KeyCode::Char('d') => controls.columns = 1,
            KeyCode::Char(' ') => controls.fire = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit = true
            }
            KeyCode::Esc | KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    fn poll_controls(&mut self) -> io::Result<Controls> {
        let mut controls = Controls::default();
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                self.apply_key(key, &mut controls);
            }
        }
        Ok(controls)
    }
}

impl Canvas for TerminalCanvas {
    fn bounds(&self) -> (usize, usize) {
        (self.back.rows(), self.back.columns())
    }

    fn render(&mut self, row: f32, column: f32, glyph: &str, style: Style) {
        self.back.draw(row, column, glyph, Some(style));
    }

    fn erase(&mut self, row: f32, column: f32, glyph: &str) {
        self.back.draw(row, column, glyph, None);
    }

    fn sample_input(&mut self) -> Controls {
        match self.poll_controls() {
            Ok(controls) => controls,
            Err(e) => {
                log::warn!("Input poll failed: {}", e);
                Controls::default()
            }
        }
    }

    fn present(&mut self) -> Result<()> {
        // Sprites clipped at the edge may have erased part of it
        self.back.draw_border();
        for (row, column, cell) in self.back.diff(&self.front) {
            let attribute = match cell.style {
                Style::Dim => Attribute::Dim,
                Style::Normal => Attribute::Reset,
                Style::Bold => Attribute::Bold,
            };
            queue!(
                self.out,
                cursor::MoveTo(column as u16, row as u16),
                SetAttribute(attribute),
                Print(cell.ch),
                SetAttribute(Attribute::Reset)
            )?;
        }
        self.out.flush()?;
        self.front.clone_from(&self.back);
        Ok(())
    }

    fn should_quit(&self) -> bool {
        self.quit
    }
}

impl Drop for TerminalCanvas {
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
