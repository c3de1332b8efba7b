//! Tether Camera - Third-person follow camera
//!
//! Provides the per-frame camera rig (smoothing, obstacle avoidance, position
//! resolution) and the mode stack that decides which settings drive it.

mod config;
mod follow;
mod modes;
mod rig;

pub use config::RigConfig;
pub use follow::FollowCamera;
pub use modes::{ModeEntry, ModeStack};
pub use rig::CameraRig;

#[cfg(test)]
pub(crate) mod testing;
