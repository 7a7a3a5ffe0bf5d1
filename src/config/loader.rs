//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, EngineSettings, PaletteConfig};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── engine.yaml    # Limits, week start and reminder settings
/// └── palette.yaml   # Workplace color palette
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Max shift length: {}h", loader.config().limits().max_shift_hours);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing, contains invalid YAML, or
    /// the palette is empty.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<EngineSettings>(&path.join("engine.yaml"))?;

        let palette_path = path.join("palette.yaml");
        let palette = Self::load_yaml::<PaletteConfig>(&palette_path)?;
        if palette.colors.is_empty() {
            return Err(EngineError::ConfigParseError {
                path: palette_path.display().to_string(),
                message: "palette must contain at least one color".to_string(),
            });
        }

        info!(
            path = %path.display(),
            colors = palette.colors.len(),
            week_starts_on = %settings.week_starts_on,
            "Loaded engine configuration"
        );

        let config = EngineConfig::new(
            settings.limits,
            settings.week_starts_on,
            settings.reminders,
            palette.colors,
        );

        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::from_config(EngineConfig::default())
    }
}
