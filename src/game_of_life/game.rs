//! Game wrapper that evolves a lattice generation by generation

use super::lattice::{Lattice, DEFAULT_DEAD_SYMBOL, DEFAULT_LIVE_SYMBOL};
use crate::error::{LifeError, Result};
use itertools::iproduct;
use std::fmt;
use std::str::FromStr;

/// Conway's Game of Life on a single owned lattice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    lattice: Lattice,
}

/// Conway's rule: survive with 2 or 3 neighbours, be born with exactly 3
pub fn next_liveness(live: bool, neighbours: u8) -> bool {
    matches!((live, neighbours), (true, 2) | (true, 3) | (false, 3))
}

impl Game {
    /// Create a game on an empty lattice
    pub fn new(size: isize) -> Result<Self> {
        Lattice::new(size).map(Self::from)
    }

    /// Create a game from a text grid, see [`Lattice::from_string`]
    pub fn from_string(text: &str, dead_symbol: char, live_symbol: char) -> Result<Self> {
        Lattice::from_string(text, dead_symbol, live_symbol).map(Self::from)
    }

    pub fn size(&self) -> usize {
        self.lattice.size()
    }

    /// The current generation
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    pub fn is_live(&self, x: isize, y: isize) -> Result<bool> {
        self.lattice.is_live(x, y)
    }

    pub fn is_dead(&self, x: isize, y: isize) -> Result<bool> {
        self.lattice.is_dead(x, y)
    }

    pub fn make_live(&mut self, x: isize, y: isize) -> Result<()> {
        self.lattice.make_live(x, y)
    }

    pub fn make_dead(&mut self, x: isize, y: isize) -> Result<()> {
        self.lattice.make_dead(x, y)
    }

    pub fn toggle_liveness(&mut self, x: isize, y: isize) -> Result<()> {
        self.lattice.toggle_liveness(x, y)
    }

    /// Advance one generation.
    ///
    /// The next generation is computed in full from the current one and
    /// only then replaces it.
    pub fn make_step(&mut self) {
        let current = &self.lattice;
        let size = current.size();
        let mut next = Lattice::with_size(size);

        for (x, y) in iproduct!(0..size, 0..size) {
            let neighbours = current.live_neighbours(x, y);
            if next_liveness(current.cell(x, y), neighbours) {
                next.set_cell(x, y, true);
            }
        }

        self.lattice = next;
        log::trace!("advanced {}x{} lattice, {} live cells", size, size, self.lattice.live_count());
    }

    /// Advance several generations
    pub fn evolve(&mut self, generations: usize) {
        for _ in 0..generations {
            self.make_step();
        }
    }

    /// Render with custom symbols
    pub fn to_string_with(&self, dead_symbol: char, live_symbol: char) -> String {
        self.lattice.to_string_with(dead_symbol, live_symbol)
    }
}

impl From<Lattice> for Game {
    fn from(lattice: Lattice) -> Self {
        Self { lattice }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.lattice, f)
    }
}

impl FromStr for Game {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_string(s, DEFAULT_DEAD_SYMBOL, DEFAULT_LIVE_SYMBOL)
    }
}
