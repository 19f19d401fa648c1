use super::{Cell, Grid};
use crate::error::{LifeError, Result};

/// Represents a pattern that can be placed on the grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: String,
    pub description: &'static str,
    pub height: usize,
    pub width: usize,
    pub cells: Vec<(usize, usize)>, // Relative (row, col) of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(
        name: impl Into<String>,
        description: &'static str,
        cells: Vec<(usize, usize)>,
    ) -> Self {
        let height = cells.iter().map(|(r, _)| *r).max().unwrap_or(0) + 1;
        let width = cells.iter().map(|(_, c)| *c).max().unwrap_or(0) + 1;
        Self { name: name.into(), description, height, width, cells }
    }

    /// Parse a pattern from the same `x` / `.` text the renderer prints.
    ///
    /// Blank lines and lines starting with `!` are skipped.
    pub fn parse(name: impl Into<String>, text: &str) -> Result<Self> {
        let name = name.into();
        let mut cells = Vec::new();
        let body = text
            .lines()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line.trim_end()))
            .filter(|(_, line)| !line.is_empty() && !line.starts_with('!'));

        for (row, (line_no, line)) in body.enumerate() {
            for (col, ch) in line.chars().enumerate() {
                match ch {
                    'x' | 'X' => cells.push((row, col)),
                    '.' => {}
                    found => {
                        return Err(LifeError::InvalidPatternChar {
                            line: line_no,
                            column: col + 1,
                            found,
                        });
                    }
                }
            }
        }

        if cells.is_empty() {
            return Err(LifeError::EmptyPattern(name));
        }
        Ok(Self::new(name, "Loaded from text", cells))
    }

    /// Place pattern on grid with its top-left corner at (row, col)
    pub fn place_on(&self, grid: &mut Grid, row: usize, col: usize) -> Result<()> {
        let (rows, cols) = grid.dimensions();
        if row + self.height > rows || col + self.width > cols {
            return Err(LifeError::PatternOutOfBounds {
                name: self.name.clone(),
                height: self.height,
                width: self.width,
                row,
                col,
                rows,
                cols,
            });
        }
        for (dr, dc) in &self.cells {
            grid.set(row + dr, col + dc, Cell::Alive);
        }
        Ok(())
    }

    /// Place pattern centered on the grid
    pub fn place_centered(&self, grid: &mut Grid) -> Result<()> {
        let (rows, cols) = grid.dimensions();
        let row = rows.saturating_sub(self.height) / 2;
        let col = cols.saturating_sub(self.width) / 2;
        self.place_on(grid, row, col)
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// The plus-shaped seed the console demo starts from.
    /// Placed at (1, 3) on a 6x12 grid.
    pub fn default_seed() -> Pattern {
        Pattern::new(
            "Default",
            "Plus-shaped seed, grows then settles",
            vec![
                (0, 1),
                (1, 0), (1, 1), (1, 2),
                (2, 1),
            ],
        )
    }

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![
                (1, 0), (1, 1), (1, 2),
            ],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (0, 1),
                (1, 0),
                (2, 3),
                (3, 2), (3, 3),
            ],
        )
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![
                (0, 1), (0, 2),
                (1, 0), (1, 1),
                (2, 1),
            ],
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (0, 1),
                (1, 0), (1, 1),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            default_seed(),
            glider(),
            blinker(),
            toad(),
            beacon(),
            r_pentomino(),
            block(),
        ]
    }

    /// Case-insensitive lookup by pattern name
    pub fn by_name(name: &str) -> Result<Pattern> {
        all_patterns()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| LifeError::UnknownPattern(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box() {
        let glider = presets::glider();
        assert_eq!((glider.height, glider.width), (3, 3));
        assert_eq!(presets::toad().width, 4);
        assert_eq!(presets::blinker().height, 2);
    }

    #[test]
    fn test_default_seed_matches_demo_layout() {
        let mut grid = Grid::new(6, 12);
        presets::default_seed().place_on(&mut grid, 1, 3).unwrap();
        assert_eq!(grid, Grid::from_alive(6, 12, &[(1, 4), (2, 3), (2, 4), (2, 5), (3, 4)]));
    }

    #[test]
    fn test_place_out_of_bounds_is_error() {
        let mut grid = Grid::new(4, 4);
        let err = presets::glider().place_on(&mut grid, 2, 0).unwrap_err();
        assert!(matches!(err, LifeError::PatternOutOfBounds { row: 2, col: 0, .. }));
        assert!(grid.is_extinct());
    }

    #[test]
    fn test_place_centered() {
        let mut grid = Grid::new(4, 4);
        presets::block().place_centered(&mut grid).unwrap();
        assert_eq!(grid, Grid::from_alive(4, 4, &[(1, 1), (1, 2), (2, 1), (2, 2)]));
    }

    #[test]
    fn test_parse_text() {
        let text = "! a blinker\n...\nxxx\n\n";
        let pattern = Pattern::parse("mine", text).unwrap();
        assert_eq!(pattern.cells, vec![(1, 0), (1, 1), (1, 2)]);
        assert_eq!((pattern.height, pattern.width), (2, 3));
    }

    #[test]
    fn test_parse_rejects_bad_char() {
        let err = Pattern::parse("bad", "x.\n.o").unwrap_err();
        assert!(matches!(err, LifeError::InvalidPatternChar { line: 2, column: 2, found: 'o' }));
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(matches!(Pattern::parse("dead", "...\n..."), Err(LifeError::EmptyPattern(_))));
    }

    #[test]
    fn test_by_name_is_case_insensitive() {
        assert_eq!(presets::by_name("GLIDER").unwrap(), presets::glider());
        assert!(matches!(presets::by_name("spaceship"), Err(LifeError::UnknownPattern(_))));
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = presets::all_patterns()
            .into_iter()
            .map(|p| p.name.to_lowercase())
            .collect();
        let count = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), count);
    }
}
