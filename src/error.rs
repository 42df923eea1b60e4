//! Errors for the strict layers of biolife
//!
//! Grid construction, rule selection, rendering and the strict seed codec
//! fail loudly through [`LifeError`]. The bio decoder never returns one.

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, LifeError>;

#[derive(Debug, thiserror::Error)]
pub enum LifeError {
    #[error("Invalid grid dimensions: {0}")]
    InvalidDimensions(String),

    #[error("Grid cannot be empty")]
    EmptyGrid,

    #[error("Invalid rule set: {0:?} (expected standard, daynight or highlife)")]
    InvalidRuleSet(String),

    #[error("Invalid display mode: {0:?} (expected full or half)")]
    InvalidDisplayMode(String),

    #[error("Coordinates ({x}, {y}) out of bounds for a {rows}x{cols} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Grid string cannot be empty")]
    EmptyInput,

    #[error("Line {line} has inconsistent width: expected {expected}, found {found}")]
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid character {ch:?} on line {line}")]
    InvalidCharacter { ch: char, line: usize },

    #[error("Invalid density {0}: must be between 0.0 and 1.0")]
    InvalidDensity(f64),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}
