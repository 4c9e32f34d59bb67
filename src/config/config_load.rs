// src/config/config_load.rs
//
// loading of config.toml

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use super::config_types::*;
use crate::models::MaskConfig;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub paths: PathConfig,
    pub window: WindowConfig,
    pub rendering: RenderConfig,
    pub osc: OscConfig,
    pub mosaic: MosaicConfig,
    pub jitter: JitterConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    pub mosaics: Vec<MaskConfig>,
}

impl Config {
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        // First try to load from the executable's directory
        if let Some(exe_config) = Self::load_from_exe_dir() {
            return Ok(exe_config);
        }

        // Fallback to loading from the current working directory
        Self::load_from_working_dir()
    }

    fn load_from_exe_dir() -> Option<Self> {
        let exe_path = std::env::current_exe().ok()?;
        let exe_dir = exe_path.parent()?;
        let config_path = exe_dir.join("config.toml");

        if config_path.exists() {
            let content = fs::read_to_string(&config_path).ok()?;
            match Self::from_toml(&content) {
                Ok(config) => Some(config),
                Err(e) => {
                    log::warn!("Ignoring {}: {}", config_path.display(), e);
                    None
                }
            }
        } else {
            None
        }
    }

    fn load_from_working_dir() -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string("config.toml")?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), String> {
        if self.mosaics.is_empty() {
            return Err("config lists no mosaics".to_string());
        }
        let mut seen = HashSet::new();
        if let Some(dup) = self.mosaics.iter().find(|m| !seen.insert(m.id.as_str())) {
            return Err(format!("mosaic id '{}' is listed more than once", dup.id));
        }
        if self.mosaic.grid_size == 0 {
            return Err("mosaic.grid_size must be at least 1".to_string());
        }
        if !self.mosaics.iter().any(|m| m.id == self.mosaic.default_id) {
            return Err(format!(
                "mosaic.default_id '{}' does not name a configured mosaic",
                self.mosaic.default_id
            ));
        }
        Ok(())
    }

    pub fn resolve_image_dir(&self) -> PathBuf {
        if Path::new(&self.paths.image_directory).is_absolute() {
            PathBuf::from(&self.paths.image_directory)
        } else {
            // If path is relative, resolve it relative to the executable or working directory
            std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()))
                .map(|exe_dir| exe_dir.join(&self.paths.image_directory))
                .filter(|dir| dir.exists())
                .unwrap_or_else(|| PathBuf::from(&self.paths.image_directory))
        }
    }

    pub fn mosaic_ids(&self) -> Vec<String> {
        self.mosaics.iter().map(|m| m.id.clone()).collect()
    }
}
