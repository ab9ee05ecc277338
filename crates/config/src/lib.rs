//! Configuration model and loaders for the Moon Lander.

use std::fs::File;
use std::path::Path;

use lander_core::constants::{
    DEFAULT_ENGINE_FORCE_M_S2, DEFAULT_GRAVITY_M_S2, DEFAULT_INITIAL_FUEL,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Flight parameters chosen at startup and editable between flights.
///
/// No bounds are enforced: zero or negative gravity and thrust are accepted
/// and simply produce odd flights.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GameConfig {
    pub gravity_m_s2: f64,
    pub engine_force_m_s2: f64,
    pub initial_fuel: u32,
    /// Show per-turn velocity change instead of raw velocity.
    pub display_delta_v: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity_m_s2: DEFAULT_GRAVITY_M_S2,
            engine_force_m_s2: DEFAULT_ENGINE_FORCE_M_S2,
            initial_fuel: DEFAULT_INITIAL_FUEL,
            display_delta_v: false,
        }
    }
}

impl GameConfig {
    /// Label for the current velocity display mode.
    pub fn display_mode_label(&self) -> &'static str {
        if self.display_delta_v { "Delta V" } else { "m/s" }
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load a [`GameConfig`] from a TOML (`.toml`) or YAML file.
///
/// Fields missing from the file keep their defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<GameConfig, ConfigError> {
    let path = path.as_ref();
    if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}
