//! Configuration system
//!
//! Config types are plain serde structs stored as TOML or RON, picked by
//! file extension. [`ViewerConfig`] mirrors the original viewer's fixed
//! window plus the scene path it loads on startup.

use crate::foundation::color::Color;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Serde-backed configuration file
pub trait ConfigFile: Serialize + DeserializeOwned + Default {
    /// Load configuration from a TOML or RON file
    fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        match extension(path) {
            Some("toml") => {
                toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            Some("ron") => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Save configuration to a TOML or RON file
    fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = match extension(path) {
            Some("toml") => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            Some("ron") => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Load configuration, falling back to defaults when the file is absent
    /// or unreadable
    fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("using default config, {}: {err}", path.display());
                Self::default()
            }
        }
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}

/// Scene viewer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Window title
    pub title: String,

    /// Window width in pixels
    pub width: u32,

    /// Window height in pixels
    pub height: u32,

    /// Scene description loaded on startup, when set
    pub scene_path: Option<PathBuf>,

    /// Stop after this many frames (headless/demo runs); `None` = run until
    /// a close event
    pub frame_limit: Option<u64>,

    /// Clear color of the viewer scene
    pub clear_color: Color,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "Scene Viewer".to_string(),
            width: 800,
            height: 600,
            scene_path: None,
            frame_limit: None,
            clear_color: Color::BLACK,
        }
    }
}

impl ViewerConfig {
    /// Set the window title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the window size
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the startup scene path
    #[must_use]
    pub fn with_scene_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.scene_path = Some(path.into());
        self
    }

    /// Set the frame limit
    #[must_use]
    pub fn with_frame_limit(mut self, frames: u64) -> Self {
        self.frame_limit = Some(frames);
        self
    }
}

impl ConfigFile for ViewerConfig {}
