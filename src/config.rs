//! Command-line configuration for the console demo.

use std::fs;
use std::path::Path;
use std::time::Duration;

use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};

use crate::domain::{Algorithm, Grid, Pattern, presets};
use crate::error::{LifeError, Result};

/// Where the default seed sits on the default 6x12 grid
const DEFAULT_SEED_ORIGIN: (usize, usize) = (1, 3);

/// Largest grid the console demo will allocate
pub const MAX_CELLS: usize = 100_000_000;

#[derive(Parser, Debug, Clone)]
#[command(name = "console-life")]
#[command(about = "Conway's Game of Life rendered as text")]
pub struct Config {
    /// Grid height in rows
    #[arg(long, default_value_t = 6)]
    pub rows: usize,

    /// Grid width in columns
    #[arg(long, default_value_t = 12)]
    pub cols: usize,

    /// Number of generations to compute and print
    #[arg(short = 'n', long, default_value_t = 1000)]
    pub iterations: u64,

    /// Pause after each frame, in milliseconds
    #[arg(long, default_value_t = 100)]
    pub delay_ms: u64,

    /// Preset name or path to an x/. text file (centered on the grid)
    #[arg(short, long, conflicts_with = "random")]
    pub pattern: Option<String>,

    /// Seed a random soup with this live-cell density instead of a pattern
    #[arg(long)]
    pub random: Option<f64>,

    /// RNG seed for --random
    #[arg(long, requires = "random")]
    pub seed: Option<u64>,

    /// Stepping strategy: serial or parallel
    #[arg(long, default_value = "serial")]
    pub algorithm: Algorithm,

    /// Do not clear the terminal between frames
    #[arg(long)]
    pub no_clear: bool,

    /// Wait for Enter before starting
    #[arg(long)]
    pub wait: bool,

    /// List preset patterns and exit
    #[arg(long)]
    pub list_patterns: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    /// Reject values the simulation cannot start from
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(LifeError::InvalidConfig(format!(
                "grid must be at least 1x1, got {}x{}",
                self.rows, self.cols
            )));
        }
        if !self.rows.checked_mul(self.cols).is_some_and(|cells| cells <= MAX_CELLS) {
            return Err(LifeError::InvalidConfig(format!(
                "grid {}x{} exceeds {MAX_CELLS} cells",
                self.rows, self.cols
            )));
        }
        if let Some(density) = self.random
            && !(density > 0.0 && density <= 1.0)
        {
            return Err(LifeError::InvalidConfig(format!(
                "random density must be in (0, 1], got {density}"
            )));
        }
        Ok(())
    }

    pub const fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Default tracing filter directive for the verbosity flag
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }

    /// Resolve `--pattern` as a preset name first, then as a file path
    pub fn load_pattern(&self) -> Result<Option<Pattern>> {
        let Some(spec) = self.pattern.as_deref() else {
            return Ok(None);
        };
        match presets::by_name(spec) {
            Ok(pattern) => Ok(Some(pattern)),
            Err(LifeError::UnknownPattern(_)) if Path::new(spec).is_file() => {
                let text = fs::read_to_string(spec)?;
                Pattern::parse(spec, &text).map(Some)
            }
            Err(err) => Err(err),
        }
    }

    /// Build the generation-0 grid
    pub fn seed_grid(&self) -> Result<Grid> {
        self.validate()?;
        let mut grid = Grid::new(self.rows, self.cols);

        if let Some(density) = self.random {
            let mut rng = match self.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            grid.randomize_with(&mut rng, density);
            return Ok(grid);
        }

        match self.load_pattern()? {
            Some(pattern) => pattern.place_centered(&mut grid)?,
            None => {
                let (row, col) = DEFAULT_SEED_ORIGIN;
                let seed = presets::default_seed();
                // Smaller grids than the demo default still get the seed, centered
                if seed.place_on(&mut grid, row, col).is_err() {
                    seed.place_centered(&mut grid)?;
                }
            }
        }
        Ok(grid)
    }
}
