//! Configuration settings for the Game of Life display driver

use crate::game_of_life::{DEFAULT_DEAD_SYMBOL, DEFAULT_LIVE_SYMBOL};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub symbols: SymbolConfig,
    #[serde(default)]
    pub input: InputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Pause between generations
    pub delay_ms: u64,
    pub clear_screen: bool,
    /// Stop after this many frames; run forever when absent
    pub max_generations: Option<u64>,
    pub show_header: bool,
}

/// Characters used for dead and live cells in pattern text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymbolConfig {
    pub dead: char,
    pub live: char,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Read standard input when absent
    pub pattern_file: Option<PathBuf>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            delay_ms: 100,
            clear_screen: true,
            max_generations: None,
            show_header: true,
        }
    }
}

impl Default for SymbolConfig {
    fn default() -> Self {
        Self {
            dead: DEFAULT_DEAD_SYMBOL,
            live: DEFAULT_LIVE_SYMBOL,
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.symbols.dead == self.symbols.live {
            anyhow::bail!(
                "Dead and live symbols must differ, both are {:?}",
                self.symbols.dead
            );
        }

        if self.symbols.dead == '\n' || self.symbols.live == '\n' {
            anyhow::bail!("Newline cannot be used as a cell symbol");
        }

        if let Some(ref pattern_file) = self.input.pattern_file {
            if !pattern_file.exists() {
                anyhow::bail!("Pattern file does not exist: {}", pattern_file.display());
            }
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(ref pattern_file) = cli_overrides.pattern_file {
            self.input.pattern_file = Some(pattern_file.clone());
        }
        if let Some(delay_ms) = cli_overrides.delay_ms {
            self.display.delay_ms = delay_ms;
        }
        if let Some(generations) = cli_overrides.max_generations {
            self.display.max_generations = Some(generations);
        }
        if cli_overrides.no_clear {
            self.display.clear_screen = false;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub pattern_file: Option<PathBuf>,
    pub delay_ms: Option<u64>,
    pub max_generations: Option<u64>,
    pub no_clear: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.display.delay_ms, 100);
        assert!(settings.display.clear_screen);
        assert_eq!(settings.display.max_generations, None);
        assert_eq!(settings.symbols, SymbolConfig { dead: ' ', live: 'x' });
        assert!(settings.input.pattern_file.is_none());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_yaml_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config/life.yaml");

        let mut settings = Settings::default();
        settings.display.max_generations = Some(12);
        settings.symbols = SymbolConfig { dead: '.', live: '#' };
        settings.to_file(&path).unwrap();

        assert_eq!(Settings::from_file(&path).unwrap(), settings);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let settings: Settings = serde_yaml::from_str("display:\n  delay_ms: 5\n").unwrap();
        assert_eq!(settings.display.delay_ms, 5);
        assert!(settings.display.show_header);
        assert_eq!(settings.symbols, SymbolConfig::default());
    }

    #[test]
    fn test_validation_rejects_bad_symbols() {
        let mut settings = Settings::default();
        settings.symbols.live = ' ';
        assert!(settings.validate().is_err());

        settings.symbols.live = '\n';
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_missing_pattern() {
        let mut settings = Settings::default();
        settings.input.pattern_file = Some(PathBuf::from("definitely/not/here.txt"));
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_merge_with_cli() {
        let mut settings = Settings::default();
        settings.merge_with_cli(&CliOverrides {
            pattern_file: Some(PathBuf::from("glider.txt")),
            delay_ms: Some(0),
            max_generations: Some(3),
            no_clear: true,
        });

        assert_eq!(settings.input.pattern_file, Some(PathBuf::from("glider.txt")));
        assert_eq!(settings.display.delay_ms, 0);
        assert_eq!(settings.display.max_generations, Some(3));
        assert!(!settings.display.clear_screen);
    }
}
