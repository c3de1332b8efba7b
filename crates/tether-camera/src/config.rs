//! Camera rig configuration

use serde::{Deserialize, Serialize};
use tether_core::math::DEFAULT_EPSILON;
use tether_core::{FovAxis, SOLID_TAG};

/// Camera rig configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigConfig {
    /// How fast the camera moves to its target when target values change
    pub move_smoothing: f32,
    /// How fast the camera moves to its target when blocked by obstacles
    pub obstacle_smoothing: f32,
    /// Radius of the sphere swept from the attach point to the camera
    pub trace_radius: f32,
    /// Surface tags that block the camera
    pub trace_tags: Vec<String>,
    /// Distance change below which the camera snaps instead of smoothing
    pub distance_epsilon: f32,
    /// Field of view preference in degrees
    pub fov: f32,
    /// Axis the field of view preference is measured along
    pub fov_axis: FovAxis,
    /// Viewport width divided by height
    pub aspect_ratio: f32,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            move_smoothing: 5.0,
            obstacle_smoothing: 20.0,
            trace_radius: 8.0,
            trace_tags: vec![SOLID_TAG.to_string()],
            distance_epsilon: DEFAULT_EPSILON,
            fov: 90.0,
            fov_axis: FovAxis::Horizontal,
            aspect_ratio: 16.0 / 9.0,
        }
    }
}

impl RigConfig {
    /// Set the aspect ratio from a viewport size in pixels
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect_ratio = width as f32 / height as f32;
        }
    }
}
