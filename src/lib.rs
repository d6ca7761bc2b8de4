//! Conway's Game of Life
//!
//! This library provides a square lattice of cells with text parsing and
//! rendering, a game that evolves it by Conway's rules, and a small display
//! driver that animates a game in the terminal.

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod runner;
pub mod utils;

pub use config::Settings;
pub use error::{LifeError, Result, SizeFault};
pub use game_of_life::{Game, Lattice};
pub use runner::Runner;
