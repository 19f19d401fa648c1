/// Cell represents the fundamental unit in Conway's Game of Life.
/// Each cell can be either Dead or Alive.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Compute the next state from the live-neighbor count.
    ///
    /// Checked in order, first match wins:
    /// 1. Alive with fewer than 2 neighbors dies (underpopulation)
    /// 2. Alive with more than 3 neighbors dies (overcrowding)
    /// 3. Alive with 2 or 3 neighbors survives
    /// 4. Dead with exactly 3 neighbors becomes alive (procreation)
    /// 5. Anything else keeps its state
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Alive, 0 | 1) => Cell::Dead,
            (Cell::Alive, n) if n > 3 => Cell::Dead,
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            (state, _) => state,
        }
    }

    /// Text glyph used by the console renderer
    pub const fn glyph(self) -> char {
        match self {
            Cell::Alive => 'x',
            Cell::Dead => '.',
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

impl From<Cell> for bool {
    fn from(cell: Cell) -> Self {
        cell.is_alive()
    }
}
