//! Game configuration with documented constants
//!
//! Health limits and pacing live here. Everything has a default, so a
//! partial TOML file (or none at all) still produces a playable game.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{Result, RouletteError};

/// Configuration for a game session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Upper bound for either combatant's health
    ///
    /// Also the number of pips drawn in the health bars, so a combatant
    /// starting below the maximum shows empty slots from the first round.
    pub max_health: u8,

    /// Player health at game start and after a restart
    pub initial_player_health: u8,

    /// Dealer health at game start and after a restart
    pub initial_dealer_health: u8,

    /// Pause between an emptied magazine and the next round (milliseconds)
    ///
    /// Gives the presentation time to show the "buffer empty" message
    /// before the next load replaces it.
    pub round_over_delay_ms: u64,

    /// Fixed seed for shell generation
    ///
    /// `None` draws a fresh seed per session. The seed in use is always
    /// logged so a game can be replayed.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_health: 4,
            initial_player_health: 3,
            initial_dealer_health: 3,
            round_over_delay_ms: 2500,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate a config from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.max_health == 0 {
            return Err(RouletteError::ConfigError(
                "max_health must be at least 1".into(),
            ));
        }

        for (name, value) in [
            ("initial_player_health", self.initial_player_health),
            ("initial_dealer_health", self.initial_dealer_health),
        ] {
            if value == 0 || value > self.max_health {
                return Err(RouletteError::ConfigError(format!(
                    "{} ({}) must be within 1..={}",
                    name, value, self.max_health
                )));
            }
        }

        Ok(())
    }

    pub fn round_over_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.round_over_delay_ms)
    }
}
