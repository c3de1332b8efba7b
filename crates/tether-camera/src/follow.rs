//! Follow camera owned by a tracked actor

use tether_assets::SettingsCatalog;
use tether_core::{ActorPose, CameraView, WorldQuery};

use crate::{CameraRig, ModeStack, RigConfig};

/// A camera rig together with the mode stack that drives it.
///
/// Every change to the stack pushes the winning settings into the rig, so the
/// rig starts easing toward the new configuration on the next frame.
pub struct FollowCamera {
    pub rig: CameraRig,
    modes: ModeStack,
}

impl FollowCamera {
    /// Create a follow camera with default rig config
    pub fn new(catalog: SettingsCatalog) -> Self {
        Self::with_config(catalog, RigConfig::default())
    }

    /// Create a follow camera with custom rig config
    pub fn with_config(catalog: SettingsCatalog, config: RigConfig) -> Self {
        let modes = ModeStack::new(catalog);
        let mut rig = CameraRig::with_config(config);
        modes.apply_to(&mut rig);

        Self { rig, modes }
    }

    /// Add a camera mode at priority 0
    pub fn push_mode(&mut self, mode: &str) {
        self.add_mode(mode, 0);
    }

    /// Add a camera mode to the priority stack.
    ///
    /// The camera uses the mode with the highest priority; among equal
    /// priorities the last one added wins. Unknown modes leave the camera untouched.
    pub fn add_mode(&mut self, mode: &str, priority: i32) {
        if self.modes.add_mode(mode, priority) {
            self.modes.apply_to(&mut self.rig);
        }
    }

    /// Remove every occurrence of a camera mode.
    pub fn remove_mode(&mut self, mode: &str) {
        self.modes.remove_mode(mode);
        self.modes.apply_to(&mut self.rig);
    }

    /// Name of the mode currently driving the rig
    pub fn active_mode(&self) -> &str {
        &self.modes.active().mode
    }

    pub fn modes(&self) -> &ModeStack {
        &self.modes
    }

    /// Advance the camera one frame
    pub fn frame_simulate<W>(&mut self, dt: f32, pose: &ActorPose, world: &W) -> CameraView
    where
        W: WorldQuery + ?Sized,
    {
        self.rig.frame_simulate(dt, pose, world)
    }

    /// Camera output from the last frame
    pub fn view(&self) -> CameraView {
        self.rig.view()
    }
}
