//! Terminal output helpers for the display loop

use crate::config::Settings;
use crate::game_of_life::Game;

/// ANSI sequence that clears the screen and homes the cursor
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Builds the text drawn for each generation
pub struct FrameFormatter;

impl FrameFormatter {
    /// Format one frame: optional header followed by the rendered grid
    pub fn format_frame(game: &Game, generation: u64, settings: &Settings) -> String {
        let mut output = String::new();

        if settings.display.clear_screen {
            output.push_str(CLEAR_SCREEN);
        }

        if settings.display.show_header {
            output.push_str(&Self::format_header(game, generation));
            output.push('\n');
        }

        output.push_str(&game.to_string_with(settings.symbols.dead, settings.symbols.live));
        output
    }

    /// One-line status: generation number and population
    pub fn format_header(game: &Game, generation: u64) -> String {
        let lattice = game.lattice();
        format!(
            "Generation {} | {}x{} | Living: {}",
            generation,
            lattice.size(),
            lattice.size(),
            lattice.live_count()
        )
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && std::env::var("TERM").unwrap_or_default() != "dumb"
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
