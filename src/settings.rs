//! Demo settings with persistence
//!
//! Settings are saved to `~/.config/tether/settings.toml`

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use serde::{Deserialize, Serialize};
use tether_camera::RigConfig;
use tether_core::FovAxis;
use tracing::{info, warn};

/// All demo settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub video: VideoSettings,
    pub camera: RigConfig,
}

impl AppSettings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tether"))
    }

    /// Get the settings file path
    fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("settings.toml"))
    }

    /// Whether a settings file exists on disk
    pub fn exists() -> bool {
        Self::settings_path().is_some_and(|p| p.exists())
    }

    /// Load settings from disk, or return defaults if missing or unreadable
    pub fn load() -> Self {
        let Some(path) = Self::settings_path().filter(|p| p.exists()) else {
            info!("No settings file found, using defaults");
            return Self::default();
        };

        Self::load_from(&path).unwrap_or_else(|e| {
            warn!("{:#}, using default settings", e);
            Self::default()
        })
    }

    /// Parse a settings file
    fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        info!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::settings_path().context("Could not determine config directory")?;
        self.save_to(&path)
    }

    /// Write settings to a file, creating parent directories as needed
    fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        info!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Rig configuration with the video preferences folded in
    pub fn rig_config(&self) -> RigConfig {
        let mut config = self.camera.clone();
        config.fov = self.video.fov;
        config.fov_axis = self.video.fov_axis;
        config.set_viewport(self.video.width, self.video.height);
        config
    }
}

/// Video settings the camera cares about
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoSettings {
    /// Window/screen width
    pub width: u32,
    /// Window/screen height
    pub height: u32,
    /// Field of view in degrees
    pub fov: f32,
    /// Axis `fov` is measured along
    pub fov_axis: FovAxis,
}

impl Default for VideoSettings {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            fov: 90.0,
            fov_axis: FovAxis::Horizontal,
        }
    }
}
