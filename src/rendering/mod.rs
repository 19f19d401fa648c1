//! Text rendering of generations.
//!
//! A frame is a header line `Iteration {n}` followed by one line per grid
//! row, `x` for live cells and `.` for dead ones.

use std::fmt;
use std::io::{self, Write};

use crate::domain::Grid;

/// Output capability handed to the run loop.
/// Keeps the simulation free of any terminal dependency.
pub trait Renderer {
    /// Clear whatever the previous frame left behind
    fn clear(&mut self) -> io::Result<()>;

    /// Emit one line of text
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// Format each grid row as a string of `x` and `.`
pub fn format_grid(grid: &Grid) -> Vec<String> {
    let (rows, _) = grid.dimensions();
    (0..rows)
        .map(|row| grid.row(row).iter().map(|cell| cell.glyph()).collect())
        .collect()
}

/// Render one full frame: clear, header, then the grid rows
pub fn render_generation<R: Renderer + ?Sized>(
    renderer: &mut R,
    grid: &Grid,
    generation: u64,
) -> io::Result<()> {
    renderer.clear()?;
    renderer.write_line(&format!("Iteration {generation}"))?;
    format_grid(grid)
        .iter()
        .try_for_each(|line| renderer.write_line(line))
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_grid(self).join("\n"))
    }
}

/// ANSI sequence: erase display, cursor home
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

/// Renderer writing frames to a terminal or any other byte sink
pub struct ConsoleRenderer<W: Write> {
    out: W,
    clear_screen: bool,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W, clear_screen: bool) -> Self {
        Self { out, clear_screen }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl ConsoleRenderer<io::Stdout> {
    /// Renderer on process stdout
    pub fn stdout(clear_screen: bool) -> Self {
        Self::new(io::stdout(), clear_screen)
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            self.out.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{line}")?;
        self.out.flush()
    }
}

/// Renderer that records every line in memory
#[derive(Debug, Default, Clone)]
pub struct BufferRenderer {
    pub lines: Vec<String>,
    pub clears: usize,
    frame_start: usize,
}

impl BufferRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines written since the most recent clear
    pub fn last_frame(&self) -> &[String] {
        &self.lines[self.frame_start..]
    }
}

impl Renderer for BufferRenderer {
    fn clear(&mut self) -> io::Result<()> {
        self.clears += 1;
        self.frame_start = self.lines.len();
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}
