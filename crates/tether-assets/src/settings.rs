use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Describes camera placement for a given mode.
///
/// Field names also accept the PascalCase spelling used by exported resource
/// files (`HorizontalOffset`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraSettings {
    /// Lookup key; defaults to the file stem when loaded from disk
    #[serde(default, alias = "Name")]
    pub name: String,
    /// Sideways shift of the camera; positive moves it right
    #[serde(default, alias = "HorizontalOffset")]
    pub horizontal_offset: f32,
    /// Vertical shift of the camera; positive moves it up
    #[serde(default, alias = "VerticalOffset")]
    pub vertical_offset: f32,
    /// Distance from the attach point back to the camera
    #[serde(default, alias = "TargetDistance")]
    pub target_distance: f32,
    /// Where this record was loaded from, if anywhere
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl CameraSettings {
    pub fn new(
        name: impl Into<String>,
        horizontal_offset: f32,
        vertical_offset: f32,
        target_distance: f32,
    ) -> Self {
        Self {
            name: name.into(),
            horizontal_offset,
            vertical_offset,
            target_distance,
            source: None,
        }
    }

    /// Attach the path this record came from
    pub fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(path.into());
        self
    }

    /// Human-readable origin for log messages
    pub fn source_display(&self) -> String {
        self.source
            .as_deref()
            .map(Path::display)
            .map(|p| p.to_string())
            .unwrap_or_else(|| "<memory>".to_string())
    }
}
