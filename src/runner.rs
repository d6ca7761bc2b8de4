//! Display loop that draws a game and advances it at a fixed pace

use crate::config::Settings;
use crate::game_of_life::{load_game_from_file, read_game, Game};
use crate::utils::FrameFormatter;
use anyhow::{Context, Result};
use std::io::Write;
use std::time::Duration;

/// Load the starting game from the configured pattern file, or standard input
pub fn load_game(settings: &Settings) -> Result<Game> {
    match settings.input.pattern_file {
        Some(ref path) => load_game_from_file(path, &settings.symbols),
        None => read_game(std::io::stdin().lock(), &settings.symbols),
    }
}

/// Drives a [`Game`], writing one frame per generation
pub struct Runner<W: Write> {
    game: Game,
    settings: Settings,
    out: W,
    generation: u64,
}

impl<W: Write> Runner<W> {
    pub fn new(game: Game, settings: Settings, out: W) -> Self {
        Self {
            game,
            settings,
            out,
            generation: 0,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Draw the current generation
    pub fn draw(&mut self) -> Result<()> {
        let frame = FrameFormatter::format_frame(&self.game, self.generation, &self.settings);
        self.out
            .write_all(frame.as_bytes())
            .context("Failed to write frame")?;
        self.out.flush().context("Failed to flush output")
    }

    /// Draw, pause, advance. Returns the number of frames drawn.
    ///
    /// Runs until `display.max_generations` frames were drawn, or forever
    /// when no limit is configured.
    pub fn run(&mut self) -> Result<u64> {
        let delay = Duration::from_millis(self.settings.display.delay_ms);
        let limit = self.settings.display.max_generations;

        log::debug!(
            "starting display loop on {}x{} lattice, delay {}ms",
            self.game.size(),
            self.game.size(),
            self.settings.display.delay_ms
        );

        let mut frames = 0;
        while limit.map_or(true, |limit| frames < limit) {
            self.draw()?;
            frames += 1;
            if limit == Some(frames) {
                break;
            }

            if !delay.is_zero() {
                std::thread::sleep(delay);
            }

            self.game.make_step();
            self.generation += 1;
            log::debug!("generation {}", self.generation);
        }

        Ok(frames)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
