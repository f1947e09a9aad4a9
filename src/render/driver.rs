//! Crossterm terminal output backend.
//!
//! The `Driver` wraps a buffered stdout writer and paints the carousel's
//! visible window: alternate screen, cursor control, and batched `queue!`
//! writes, one line per viewport row. It does NOT automatically enter the
//! alternate screen on creation — call `enter_alt_screen` explicitly.

use std::io::{self, BufWriter, Stdout, Write};

use crossterm::{
    cursor, execute, queue,
    style::Print,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use super::window::visible_lines;
use crate::dom::Dom;
use crate::layout::CarouselState;

/// Terminal output backend using crossterm.
pub struct Driver {
    writer: BufWriter<Stdout>,
}

impl Driver {
    /// Create a new driver wrapping stdout.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            writer: BufWriter::new(io::stdout()),
        })
    }

    /// Enter alternate screen and enable raw mode.
    pub fn enter_alt_screen(&mut self) -> io::Result<()> {
        execute!(self.writer, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        Ok(())
    }

    /// Leave alternate screen and disable raw mode.
    pub fn leave_alt_screen(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.writer, LeaveAlternateScreen)?;
        Ok(())
    }

    /// Hide the cursor.
    pub fn hide_cursor(&mut self) -> io::Result<()> {
        execute!(self.writer, cursor::Hide)
    }

    /// Show the cursor.
    pub fn show_cursor(&mut self) -> io::Result<()> {
        execute!(self.writer, cursor::Show)
    }

    /// Get the terminal size (columns, rows) via crossterm.
    pub fn terminal_size() -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Paint the carousel's visible window.
    ///
    /// Each viewport row is queued as a cursor move plus a full-width line,
    /// then the buffer is flushed once.
    pub fn draw(&mut self, dom: &Dom, state: &CarouselState) -> io::Result<()> {
        for (row, line) in visible_lines(dom, state).into_iter().enumerate() {
            queue!(self.writer, cursor::MoveTo(0, row as u16), Print(line))?;
        }
        self.flush()
    }

    /// Flush the internal write buffer to the terminal.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
