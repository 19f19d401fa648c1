use super::Cell;
use rand::Rng;
use rayon::prelude::*;

/// Grid manages the 2D cellular automaton field.
/// Dimensions are fixed at creation; each step produces a new grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

/// Offsets of the 8 surrounding positions
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

impl Grid {
    /// Create a new grid with all cells initially dead.
    ///
    /// Panics if either dimension is zero or the cell count overflows.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "grid dimensions must be positive, got {rows}x{cols}");
        let Some(len) = rows.checked_mul(cols) else {
            panic!("grid of {rows}x{cols} cells overflows usize");
        };
        Self {
            rows,
            cols,
            cells: vec![Cell::Dead; len],
        }
    }

    /// Build a grid from rows of booleans. All rows must have the same length.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Self {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut grid = Self::new(rows.len(), cols);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            assert_eq!(
                values.len(),
                cols,
                "row {row} has {} columns, expected {cols}",
                values.len()
            );
            for (col, &alive) in values.iter().enumerate() {
                grid.set(row, col, Cell::from(alive));
            }
        }
        grid
    }

    /// Build a grid with the given coordinates alive and everything else dead
    pub fn from_alive(rows: usize, cols: usize, alive: &[(usize, usize)]) -> Self {
        let mut grid = Self::new(rows, cols);
        for &(row, col) in alive {
            grid.set(row, col, Cell::Alive);
        }
        grid
    }

    /// Get grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether (row, col) lies inside `[0, rows) x [0, cols)`
    pub const fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.rows && col < self.cols)
            .then(|| self.cells[self.get_index(row, col)])
    }

    /// Set cell at position. Panics outside the grid.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        assert!(
            row < self.rows && col < self.cols,
            "({row}, {col}) is outside a {}x{} grid",
            self.rows,
            self.cols
        );
        let idx = self.get_index(row, col);
        self.cells[idx] = cell;
    }

    /// Count live neighbors. Edges are hard: off-grid positions count as dead.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        assert!(
            row < self.rows && col < self.cols,
            "({row}, {col}) is outside a {}x{} grid",
            self.rows,
            self.cols
        );
        let (r, c) = (row as isize, col as isize);

        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dr, dc)| (r + dr, c + dc))
            .filter(|&(nr, nc)| self.in_bounds(nr, nc))
            .filter(|&(nr, nc)| self.cells[self.get_index(nr as usize, nc as usize)].is_alive())
            .count() as u8
    }

    /// Next state of a single cell, read from this snapshot only
    fn next_cell(&self, row: usize, col: usize) -> Cell {
        self.cells[self.get_index(row, col)].evolve(self.count_live_neighbors(row, col))
    }

    /// Pure functional step - returns the next generation (serial)
    pub fn step(&self) -> Self {
        let cells = (0..self.rows)
            .flat_map(|row| (0..self.cols).map(move |col| (row, col)))
            .map(|(row, col)| self.next_cell(row, col))
            .collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Parallel step using rayon, one task per row.
    /// Produces exactly the same grid as [`Grid::step`].
    pub fn step_parallel(&self) -> Self {
        let cols = self.cols;
        let mut cells = vec![Cell::Dead; self.cells.len()];
        cells
            .par_chunks_mut(cols)
            .enumerate()
            .for_each(|(row, out)| {
                for (col, cell) in out.iter_mut().enumerate() {
                    *cell = self.next_cell(row, col);
                }
            });

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// True when every cell is dead
    pub fn is_extinct(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_alive())
    }

    /// Randomize grid in place; each cell is alive with probability `density`
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        self.cells.iter_mut().for_each(|cell| {
            *cell = Cell::from(rng.random_bool(density));
        });
    }

    /// Cells of one row, left to right
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = self.get_index(row, 0);
        &self.cells[start..start + self.cols]
    }

    /// Iterate over all cells with their positions in row-major order
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.cols, idx % self.cols, cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn alive_set(grid: &Grid) -> Vec<(usize, usize)> {
        grid.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(row, col, _)| (row, col))
            .collect()
    }

    /// Neighbor count by brute force over the clipped 3x3 block
    fn brute_force_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
        let mut count = 0;
        for r in row.saturating_sub(1)..=(row + 1) {
            for c in col.saturating_sub(1)..=(col + 1) {
                if (r, c) != (row, col) && grid.get(r, c) == Some(Cell::Alive) {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn test_in_bounds() {
        let grid = Grid::new(3, 3);
        assert!(grid.in_bounds(1, 1));
        assert!(grid.in_bounds(0, 0));
        assert!(grid.in_bounds(2, 2));
        assert!(!grid.in_bounds(1, -1));
        assert!(!grid.in_bounds(1, 3));
        assert!(!grid.in_bounds(-1, 1));
        assert!(!grid.in_bounds(3, 1));
    }

    #[test]
    fn test_in_bounds_rectangular() {
        let grid = Grid::new(2, 5);
        for r in -2..4 {
            for c in -2..7 {
                let expected = (0..2).contains(&r) && (0..5).contains(&c);
                assert_eq!(grid.in_bounds(r, c), expected, "({r}, {c})");
            }
        }
    }

    #[test]
    #[should_panic]
    fn test_zero_dimension_panics() {
        Grid::new(0, 4);
    }

    #[test]
    #[should_panic(expected = "overflows")]
    fn test_overflowing_dimensions_panic() {
        Grid::new(usize::MAX, 2);
    }

    #[test]
    #[should_panic]
    fn test_set_out_of_range_panics() {
        Grid::new(2, 2).set(2, 0, Cell::Alive);
    }

    #[test]
    fn test_get_out_of_range_is_none() {
        let grid = Grid::new(2, 3);
        assert_eq!(grid.get(1, 2), Some(Cell::Dead));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 3), None);
    }

    #[test]
    fn test_from_rows() {
        let grid = Grid::from_rows(&[[true, false, false], [false, false, true]]);
        assert_eq!(grid.dimensions(), (2, 3));
        assert_eq!(alive_set(&grid), vec![(0, 0), (1, 2)]);
    }

    #[test]
    fn test_neighbors_fully_surrounded() {
        let mut grid = Grid::new(3, 3);
        for r in 0..3 {
            for c in 0..3 {
                grid.set(r, c, Cell::Alive);
            }
        }
        assert_eq!(grid.count_live_neighbors(1, 1), 8);
        // Corners see only 3 neighbors: no wraparound
        assert_eq!(grid.count_live_neighbors(0, 0), 3);
        assert_eq!(grid.count_live_neighbors(0, 1), 5);
    }

    #[test]
    fn test_neighbors_exclude_self() {
        let grid = Grid::from_alive(3, 3, &[(1, 1)]);
        assert_eq!(grid.count_live_neighbors(1, 1), 0);
        assert_eq!(grid.count_live_neighbors(0, 0), 1);
    }

    #[test]
    fn test_neighbors_no_wraparound() {
        let grid = Grid::from_alive(4, 4, &[(0, 3), (3, 0), (3, 3)]);
        assert_eq!(grid.count_live_neighbors(0, 0), 0);
    }

    #[test]
    fn test_neighbors_match_brute_force() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::new(9, 13);
        grid.randomize_with(&mut rng, 0.4);
        for (row, col, _) in grid.iter_cells() {
            let count = grid.count_live_neighbors(row, col);
            assert!(count <= 8);
            assert_eq!(count, brute_force_neighbors(&grid, row, col), "({row}, {col})");
        }
    }

    #[test]
    fn test_blinker_flips() {
        let grid = Grid::from_alive(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let next = grid.step();
        assert_eq!(alive_set(&next), vec![(1, 2), (2, 2), (3, 2)]);
        assert_eq!(next.step(), grid);
    }

    #[test]
    fn test_block_is_still_life() {
        let grid = Grid::from_alive(4, 4, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
        assert_eq!(grid.step(), grid);
    }

    #[test]
    fn test_isolated_cell_dies_and_stays_dead() {
        let grid = Grid::from_alive(4, 4, &[(2, 1)]);
        let next = grid.step();
        assert!(next.is_extinct());
        let after = next.step();
        assert!(after.is_extinct());
        assert_eq!(after, next);
    }

    #[test]
    fn test_step_is_deterministic_and_leaves_input_alone() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut grid = Grid::new(12, 17);
        grid.randomize_with(&mut rng, 0.35);
        let before = grid.clone();

        let first = grid.step();
        let second = grid.step();
        assert_eq!(first, second);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_step_preserves_dimensions() {
        let grid = Grid::from_alive(3, 7, &[(0, 0), (2, 6)]);
        assert_eq!(grid.step().dimensions(), (3, 7));
        assert_eq!(grid.step_parallel().dimensions(), (3, 7));
    }

    #[test]
    fn test_output_is_independent_copy() {
        let grid = Grid::from_alive(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let mut next = grid.step();
        next.set(0, 0, Cell::Alive);
        assert_eq!(grid.get(0, 0), Some(Cell::Dead));
        assert_eq!(grid.population(), 3);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut grid = Grid::new(40, 33);
        grid.randomize_with(&mut rng, 0.3);
        let (mut serial, mut parallel) = (grid.clone(), grid);
        for _ in 0..10 {
            serial = serial.step();
            parallel = parallel.step_parallel();
            assert_eq!(serial, parallel);
        }
    }

    #[test]
    fn test_row_slices() {
        let grid = Grid::from_alive(2, 3, &[(1, 0)]);
        assert_eq!(grid.row(0), &[Cell::Dead; 3]);
        assert_eq!(grid.row(1), &[Cell::Alive, Cell::Dead, Cell::Dead]);
    }
}
