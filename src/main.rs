//! Command line driver for Conway's Game of Life

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use life::{
    config::{CliOverrides, Settings},
    game_of_life::{create_example_patterns, load_game_from_file},
    runner::{load_game, Runner},
    utils::ColorOutput,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "life")]
#[command(about = "Conway's Game of Life in the terminal")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Animate a pattern, one generation per frame
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Pattern file (overrides config; standard input when neither is set)
        #[arg(short, long)]
        pattern: Option<PathBuf>,

        /// Pause between generations in milliseconds (overrides config)
        #[arg(short, long)]
        delay_ms: Option<u64>,

        /// Stop after this many generations (overrides config)
        #[arg(short, long)]
        generations: Option<u64>,

        /// Do not clear the screen between generations
        #[arg(long)]
        no_clear: bool,

        /// Verbose logging
        #[arg(short, long)]
        verbose: bool,
    },

    /// Advance a pattern and print the resulting generation
    Step {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Pattern file
        #[arg(short, long)]
        pattern: PathBuf,

        /// Number of generations to advance
        #[arg(short, long, default_value_t = 1)]
        generations: usize,
    },

    /// Create example configuration and pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{}", format_error(&err));
        std::process::exit(1);
    }
}

/// One-line, colored report of an error and its context chain
fn format_error(err: &anyhow::Error) -> String {
    ColorOutput::error(&format!("Error: {:#}", err))
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();

    let verbose = matches!(cli.command, Commands::Run { verbose: true, .. });
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if verbose { "debug" } else { "warn" }),
    )
    .format_timestamp(None)
    .init();

    match cli.command {
        Commands::Run {
            config,
            pattern,
            delay_ms,
            generations,
            no_clear,
            ..
        } => {
            let overrides = CliOverrides {
                pattern_file: pattern,
                delay_ms,
                max_generations: generations,
                no_clear,
            };
            run_command(&config, &overrides)
        }
        Commands::Step {
            config,
            pattern,
            generations,
        } => {
            let output = step_command(&config, &pattern, generations)?;
            print!("{}", output);
            Ok(())
        }
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

/// Load settings from `path` when it exists, defaults otherwise
fn load_settings(path: &PathBuf) -> Result<Settings> {
    if path.exists() {
        Settings::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))
    } else {
        log::warn!("config file {} not found, using defaults", path.display());
        Ok(Settings::default())
    }
}

fn run_command(config_path: &PathBuf, overrides: &CliOverrides) -> Result<()> {
    let mut settings = load_settings(config_path)?;
    settings.merge_with_cli(overrides);
    settings.validate().context("Configuration validation failed")?;

    let game = load_game(&settings).context("Failed to load starting pattern")?;

    let stdout = std::io::stdout();
    let mut runner = Runner::new(game, settings, stdout.lock());
    let frames = runner.run()?;

    log::info!("drew {} generations", frames);
    Ok(())
}

fn step_command(config_path: &PathBuf, pattern: &Path, generations: usize) -> Result<String> {
    let settings = load_settings(config_path)?;

    let mut game = load_game_from_file(pattern, &settings.symbols)
        .with_context(|| format!("Failed to load pattern from {}", pattern.display()))?;
    game.evolve(generations);

    Ok(game.to_string_with(settings.symbols.dead, settings.symbols.live))
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up configuration and patterns..."));

    let config_dir = directory.join("config");
    let pattern_dir = directory.join("patterns");

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        let mut settings = Settings::default();
        settings.input.pattern_file = Some(PathBuf::from("patterns/glider.txt"));
        settings
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!("Skipped: {} (already exists)", config_path.display()))
        );
    }

    create_example_patterns(&pattern_dir).context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", pattern_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit {}", config_path.display());
    println!("2. Run: life run --config {}", config_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "life",
            "run",
            "--pattern",
            "glider.txt",
            "--delay-ms",
            "50",
            "--generations",
            "5",
            "--no-clear",
        ]);
        assert!(cli.is_ok());

        let cli = Cli::try_parse_from(["life", "step"]);
        assert!(cli.is_err(), "step requires a pattern");
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        setup_command(temp_dir.path().to_path_buf(), false).unwrap();

        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("patterns/blinker.txt").exists());
        assert!(temp_dir.path().join("patterns/glider.txt").exists());
    }

    #[test]
    fn test_step_command() {
        let temp_dir = tempdir().unwrap();
        let pattern = temp_dir.path().join("blinker.txt");
        std::fs::write(&pattern, "   \nxxx\n   \n").unwrap();
        let missing_config = temp_dir.path().join("none.yaml");

        let output = step_command(&missing_config, &pattern, 1).unwrap();
        assert_eq!(output, " x \n x \n x \n");

        let output = step_command(&missing_config, &pattern, 2).unwrap();
        assert_eq!(output, "   \nxxx\n   \n");
    }

    #[test]
    fn test_format_error_includes_context_chain() {
        let err = anyhow::Error::new(life::LifeError::OutOfBounds { x: 3, y: 0 })
            .context("Failed to load pattern");
        let report = format_error(&err);

        assert!(report.contains("Error: Failed to load pattern: coordinates (3, 0) are out of bounds"));
    }

    #[test]
    fn test_step_reports_parse_errors() {
        let temp_dir = tempdir().unwrap();
        let pattern = temp_dir.path().join("bad.txt");
        std::fs::write(&pattern, "xx\nx\n").unwrap();

        let err = step_command(&temp_dir.path().join("none.yaml"), &pattern, 1).unwrap_err();
        assert!(err.downcast_ref::<life::LifeError>().is_some());
    }
}
