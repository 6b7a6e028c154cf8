//! Controller configuration with documented constants
//!
//! All tunables are collected here with explanations of their purpose.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{Result, RoverError};

/// Configuration for a rover controller
///
/// Defaults match the tuning the controller was developed against;
/// changing them shifts how cautious or restless the rover behaves.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Probability per exploration tick of a spontaneous right turn
    ///
    /// The random turn breaks wall-following loops and varies coverage.
    /// At 0.0 the rover hugs whatever open corridor it is in; near 1.0
    /// it mostly spins in place. Useful values sit around 0.1 to 0.2.
    pub explore_turn_chance: f32,

    /// Side length of the square knowledge grid, in tiles
    ///
    /// Sized to cover the largest arena the game can produce, so every
    /// reported coordinate has a cell. Memory cost is one byte per tile.
    pub arena_extent: u32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            explore_turn_chance: 0.2,
            arena_extent: 200,
        }
    }
}

impl ControllerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.explore_turn_chance) {
            return Err(RoverError::InvalidConfig(format!(
                "explore_turn_chance ({}) must be within [0.0, 1.0]",
                self.explore_turn_chance
            )));
        }

        if self.arena_extent == 0 {
            return Err(RoverError::InvalidConfig(
                "arena_extent must be nonzero".into(),
            ));
        }

        Ok(())
    }

    /// Parse a config from TOML text and validate it
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: ControllerConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }
}

/// Load a controller config from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ControllerConfig> {
    let contents = fs::read_to_string(path)?;
    ControllerConfig::from_toml_str(&contents)
}
