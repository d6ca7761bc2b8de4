//! Game of Life core functionality

pub mod game;
pub mod io;
pub mod lattice;

pub use game::{next_liveness, Game};
pub use io::{create_example_patterns, load_game_from_file, read_game, save_lattice_to_file};
pub use lattice::{Lattice, DEFAULT_DEAD_SYMBOL, DEFAULT_LIVE_SYMBOL};
