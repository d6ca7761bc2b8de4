//! Error types for lattice construction and cell access

use thiserror::Error;

/// Result alias used throughout the core
pub type Result<T> = std::result::Result<T, LifeError>;

/// Why a lattice could not be given a size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeFault {
    /// Requested size was zero or negative
    NonPositive(isize),
    /// Requested size has more cells than can be addressed
    TooLarge(isize),
    /// Parsed text contained no rows
    Empty,
    /// A parsed row did not have as many characters as there are rows
    NotSquare {
        row: usize,
        length: usize,
        expected: usize,
    },
}

impl std::fmt::Display for SizeFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SizeFault::NonPositive(size) => write!(f, "size must be positive, got {}", size),
            SizeFault::TooLarge(size) => write!(f, "size {} is too large", size),
            SizeFault::Empty => write!(f, "grid text is empty"),
            SizeFault::NotSquare { row, length, expected } => write!(
                f,
                "row {} has length {}, expected {} (grid must be square)",
                row, length, expected
            ),
        }
    }
}

/// All failures the lattice and game can report
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    #[error("invalid lattice size: {0}")]
    InvalidSize(SizeFault),

    #[error("invalid symbol {symbol:?} at row {row}, column {column}")]
    InvalidSymbol {
        row: usize,
        column: usize,
        symbol: char,
    },

    #[error("coordinates ({x}, {y}) are out of bounds")]
    OutOfBounds { x: isize, y: isize },
}
