//! Error types for the `console_life` crate.
//!
//! The simulation core itself never fails; these cover the surfaces around
//! it: configuration, pattern loading and placement, and renderer I/O.

use std::io;

/// Errors that can occur outside the simulation core.
#[derive(Debug, thiserror::Error)]
pub enum LifeError {
    /// A configuration value was rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// No preset pattern has this name.
    #[error("unknown pattern: {0}")]
    UnknownPattern(String),

    /// Pattern text contained something other than `x` or `.`.
    #[error("invalid character {found:?} in pattern at line {line}, column {column}")]
    InvalidPatternChar {
        /// 1-based line number.
        line: usize,
        /// 1-based column number.
        column: usize,
        /// The offending character.
        found: char,
    },

    /// Pattern text had no live cells.
    #[error("pattern '{0}' has no live cells")]
    EmptyPattern(String),

    /// Placing the pattern would put cells outside the grid.
    #[error(
        "pattern '{name}' ({height}x{width}) does not fit at ({row}, {col}) in a {rows}x{cols} grid"
    )]
    PatternOutOfBounds {
        /// Pattern name.
        name: String,
        /// Pattern height in rows.
        height: usize,
        /// Pattern width in columns.
        width: usize,
        /// Requested top row.
        row: usize,
        /// Requested left column.
        col: usize,
        /// Grid rows.
        rows: usize,
        /// Grid columns.
        cols: usize,
    },

    /// Reading a pattern or writing a frame failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, LifeError>;
