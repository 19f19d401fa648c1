//! Algorithm enum for selecting the generation stepper.
//!
//! Both strategies read only the previous snapshot, so they always
//! produce identical grids; they differ only in how work is scheduled.

use std::fmt;
use std::str::FromStr;

use super::Grid;
use crate::error::LifeError;

/// Available stepping strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Cell-by-cell on the calling thread
    #[default]
    Serial,
    /// Rows sharded across the rayon thread pool
    Parallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Serial, Algorithm::Parallel]
    }

    /// Name accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "serial",
            Algorithm::Parallel => "parallel",
        }
    }

    /// Advance `grid` by one generation using this strategy
    pub fn step(&self, grid: &Grid) -> Grid {
        match self {
            Algorithm::Serial => grid.step(),
            Algorithm::Parallel => grid.step_parallel(),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::all()
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| LifeError::InvalidConfig(format!("unknown algorithm '{s}'")))
    }
}
