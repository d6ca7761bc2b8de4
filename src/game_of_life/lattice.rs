//! Square lattice of cells and its text representation

use crate::error::{LifeError, Result, SizeFault};
use itertools::iproduct;
use std::fmt;
use std::str::FromStr;

/// Symbol used for dead cells unless told otherwise
pub const DEFAULT_DEAD_SYMBOL: char = ' ';
/// Symbol used for live cells unless told otherwise
pub const DEFAULT_LIVE_SYMBOL: char = 'x';

/// A fixed-size square grid of live/dead cells.
///
/// Cells are addressed as `(x, y)` where `x` is the row and `y` the column,
/// both in `0..size`. Equality compares the size and every cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Lattice {
    size: usize,
    cells: Vec<bool>,
}

impl Lattice {
    /// Create a lattice of the given size with every cell dead
    pub fn new(size: isize) -> Result<Self> {
        if size <= 0 {
            return Err(LifeError::InvalidSize(SizeFault::NonPositive(size)));
        }
        let cells = (size as usize)
            .checked_mul(size as usize)
            .filter(|&cells| cells <= isize::MAX as usize);
        if cells.is_none() {
            return Err(LifeError::InvalidSize(SizeFault::TooLarge(size)));
        }
        Ok(Self::with_size(size as usize))
    }

    /// Dead lattice for a size already known to be positive
    pub(crate) fn with_size(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    /// Parse a lattice from rows of text separated by `\n`.
    ///
    /// A single trailing newline is ignored. The text must form a square:
    /// as many characters in every row as there are rows. Row index becomes
    /// `x`, column index becomes `y`.
    pub fn from_string(text: &str, dead_symbol: char, live_symbol: char) -> Result<Self> {
        let text = text.strip_suffix('\n').unwrap_or(text);
        if text.is_empty() {
            return Err(LifeError::InvalidSize(SizeFault::Empty));
        }

        let rows: Vec<&str> = text.split('\n').collect();
        let size = rows.len();
        let mut lattice = Self::with_size(size);

        for (x, row) in rows.iter().enumerate() {
            let length = row.chars().count();
            if length != size {
                return Err(LifeError::InvalidSize(SizeFault::NotSquare {
                    row: x,
                    length,
                    expected: size,
                }));
            }

            for (y, symbol) in row.chars().enumerate() {
                if symbol == live_symbol {
                    lattice.set_cell(x, y, true);
                } else if symbol != dead_symbol {
                    return Err(LifeError::InvalidSymbol {
                        row: x,
                        column: y,
                        symbol,
                    });
                }
            }
        }

        Ok(lattice)
    }

    /// Side length of the lattice
    pub fn size(&self) -> usize {
        self.size
    }

    /// Flat index of an in-bounds coordinate
    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        x * self.size + y
    }

    /// Validate signed coordinates and convert them to unsigned ones
    fn checked(&self, x: isize, y: isize) -> Result<(usize, usize)> {
        let in_range = |v: isize| v >= 0 && (v as usize) < self.size;
        if in_range(x) && in_range(y) {
            Ok((x as usize, y as usize))
        } else {
            Err(LifeError::OutOfBounds { x, y })
        }
    }

    pub(crate) fn cell(&self, x: usize, y: usize) -> bool {
        self.cells[self.index(x, y)]
    }

    pub(crate) fn set_cell(&mut self, x: usize, y: usize, live: bool) {
        let idx = self.index(x, y);
        self.cells[idx] = live;
    }

    pub fn is_live(&self, x: isize, y: isize) -> Result<bool> {
        let (x, y) = self.checked(x, y)?;
        Ok(self.cell(x, y))
    }

    pub fn is_dead(&self, x: isize, y: isize) -> Result<bool> {
        self.is_live(x, y).map(|live| !live)
    }

    pub fn make_live(&mut self, x: isize, y: isize) -> Result<()> {
        let (x, y) = self.checked(x, y)?;
        self.set_cell(x, y, true);
        Ok(())
    }

    pub fn make_dead(&mut self, x: isize, y: isize) -> Result<()> {
        let (x, y) = self.checked(x, y)?;
        self.set_cell(x, y, false);
        Ok(())
    }

    pub fn toggle_liveness(&mut self, x: isize, y: isize) -> Result<()> {
        let (x, y) = self.checked(x, y)?;
        let live = self.cell(x, y);
        self.set_cell(x, y, !live);
        Ok(())
    }

    /// Count live cells in the Moore neighbourhood of `(x, y)`.
    ///
    /// Neighbour positions that fall outside the lattice are not counted.
    pub fn get_num_of_live_neighbours(&self, x: isize, y: isize) -> Result<u8> {
        let (x, y) = self.checked(x, y)?;
        Ok(self.live_neighbours(x, y))
    }

    /// Neighbour count for a coordinate already known to be in bounds
    pub(crate) fn live_neighbours(&self, x: usize, y: usize) -> u8 {
        let mut count = 0;

        for (dx, dy) in iproduct!(-1isize..=1, -1isize..=1) {
            if dx == 0 && dy == 0 {
                continue;
            }

            if let Ok((nx, ny)) = self.checked(x as isize + dx, y as isize + dy) {
                if self.cell(nx, ny) {
                    count += 1;
                }
            }
        }

        count
    }

    /// Number of live cells
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Coordinates of every live cell, row by row
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        iproduct!(0..self.size, 0..self.size)
            .filter(|&(x, y)| self.cell(x, y))
            .collect()
    }

    /// True when no cell is live
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }

    /// Render with custom symbols; every row is terminated by `\n`
    pub fn to_string_with(&self, dead_symbol: char, live_symbol: char) -> String {
        let mut result = String::with_capacity(self.size * (self.size + 1));

        for x in 0..self.size {
            for y in 0..self.size {
                result.push(if self.cell(x, y) { live_symbol } else { dead_symbol });
            }
            result.push('\n');
        }

        result
    }
}

impl fmt::Display for Lattice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(DEFAULT_DEAD_SYMBOL, DEFAULT_LIVE_SYMBOL))
    }
}

impl FromStr for Lattice {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_string(s, DEFAULT_DEAD_SYMBOL, DEFAULT_LIVE_SYMBOL)
    }
}
