use log::{debug, info};
use serde::Deserialize;
use std::path::Path;

use crate::error::ConfigError;
use crate::physic_engine::PhysicConfig;
use crate::simulator::SimulatorSettings;

/// Chemin par défaut du fichier de configuration.
pub const DEFAULT_CONFIG_PATH: &str = "assets/config/fireworks.toml";

/// Configuration complète, telle que lue dans le fichier TOML.
///
/// Toutes les sections et toutes les clés sont optionnelles.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub physic: PhysicConfig,
    pub simulator: SimulatorSettings,
}

impl AppConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file_error = |reason: String| ConfigError::ConfigFile {
            path: path.display().to_string(),
            reason,
        };
        let text = std::fs::read_to_string(path).map_err(|e| file_error(e.to_string()))?;
        toml::from_str(&text).map_err(|e| file_error(e.message().to_string()))
    }

    /// Fichier absent : valeurs par défaut. Fichier présent mais invalide : erreur
    /// de configuration, jamais de repli silencieux.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let config = Self::from_file(path)?;
        info!("Config loaded from {}", path.display());
        Ok(config)
    }
}
