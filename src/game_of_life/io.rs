//! File I/O operations for Game of Life patterns

use super::{Game, Lattice};
use crate::config::SymbolConfig;
use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Well-known patterns written by [`create_example_patterns`], in the default symbols
pub const EXAMPLE_PATTERNS: &[(&str, &str)] = &[
    ("blinker", "     \n  x  \n  x  \n  x  \n     \n"),
    ("block", "    \n xx \n xx \n    \n"),
    (
        "glider",
        " x      \n  x     \nxxx     \n        \n        \n        \n        \n        \n",
    ),
    ("beacon", "xx    \nxx    \n  xx  \n  xx  \n      \n      \n"),
    ("toad", "      \n      \n xxx  \nxxx   \n      \n      \n"),
];

/// Load a game from a text file
pub fn load_game_from_file<P: AsRef<Path>>(path: P, symbols: &SymbolConfig) -> Result<Game> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read pattern file: {}", path.display()))?;

    log::debug!("loaded {} bytes from {}", content.len(), path.display());

    Game::from_string(&content, symbols.dead, symbols.live)
        .with_context(|| format!("Failed to parse pattern file: {}", path.display()))
}

/// Read a game from any reader, e.g. standard input
pub fn read_game<R: Read>(mut reader: R, symbols: &SymbolConfig) -> Result<Game> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .context("Failed to read pattern input")?;

    log::debug!("read {} bytes of pattern input", content.len());

    Game::from_string(&content, symbols.dead, symbols.live).context("Failed to parse pattern input")
}

/// Save a lattice to a text file
pub fn save_lattice_to_file<P: AsRef<Path>>(
    lattice: &Lattice,
    path: P,
    symbols: &SymbolConfig,
) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(path, lattice.to_string_with(symbols.dead, symbols.live))
        .with_context(|| format!("Failed to write lattice to file: {}", path.display()))
}

/// Write the example patterns as `<name>.txt` files
pub fn create_example_patterns<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    for (name, content) in EXAMPLE_PATTERNS {
        let path = dir.join(format!("{}.txt", name));
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LifeError;
    use tempfile::tempdir;

    #[test]
    fn test_read_game() {
        let game = read_game("x \n x\n".as_bytes(), &SymbolConfig::default()).unwrap();
        assert_eq!(game.size(), 2);
        assert_eq!(game.lattice().living_cells(), vec![(0, 0), (1, 1)]);
    }

    #[test]
    fn test_read_game_keeps_core_error() {
        let err = read_game("x?\n  \n".as_bytes(), &SymbolConfig::default()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<LifeError>(),
            Some(&LifeError::InvalidSymbol { row: 0, column: 1, symbol: '?' })
        );
    }

    #[test]
    fn test_file_operations() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("nested/test_lattice.txt");
        let symbols = SymbolConfig { dead: '.', live: 'O' };

        let original: Lattice = "x x\n x \n  x\n".parse().unwrap();
        save_lattice_to_file(&original, &file_path, &symbols).unwrap();

        assert_eq!(std::fs::read_to_string(&file_path).unwrap(), "O.O\n.O.\n..O\n");

        let loaded = load_game_from_file(&file_path, &symbols).unwrap();
        assert_eq!(loaded.lattice(), &original);
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = tempdir().unwrap();
        let result = load_game_from_file(temp_dir.path().join("absent.txt"), &SymbolConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_create_example_patterns() {
        let temp_dir = tempdir().unwrap();
        create_example_patterns(temp_dir.path()).unwrap();

        for (name, _) in EXAMPLE_PATTERNS {
            let path = temp_dir.path().join(format!("{}.txt", name));
            assert!(path.exists(), "{} missing", name);
            load_game_from_file(&path, &SymbolConfig::default()).unwrap();
        }

        let glider = load_game_from_file(temp_dir.path().join("glider.txt"), &SymbolConfig::default()).unwrap();
        assert_eq!(glider.size(), 8);
        assert_eq!(glider.lattice().live_count(), 5);
    }

    #[test]
    fn test_glider_translates() {
        let mut glider = load_pattern("glider");
        glider.evolve(4);
        let living = glider.lattice().living_cells();
        assert_eq!(living, vec![(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)]);
    }

    #[test]
    fn test_toad_has_period_two() {
        let toad = load_pattern("toad");
        let mut game = toad.clone();
        game.make_step();
        assert_ne!(game, toad);
        game.make_step();
        assert_eq!(game, toad);
    }

    fn load_pattern(name: &str) -> Game {
        let (_, text) = EXAMPLE_PATTERNS.iter().find(|(n, _)| *n == name).unwrap();
        text.parse().unwrap()
    }
}
