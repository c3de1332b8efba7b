//! Third-person camera rig with smoothing and obstacle avoidance

use glam::{Quat, Vec3};
use tether_core::math::{almost_equal, lerp_to, vertical_fov};
use tether_core::{ActorPose, CameraView, Trace, WorldQuery};
use tracing::debug;

use crate::RigConfig;

/// Raw target distance before any settings are applied
pub const DEFAULT_TARGET_DISTANCE: f32 = 80.0;

/// Camera rig following a single tracked actor.
///
/// Raw targets (distance and offsets) can change at any time; each frame the
/// smoothed values chase them at the move smoothing rate. Obstacle-driven
/// changes in camera distance are eased separately at the obstacle smoothing
/// rate so the camera does not pop against walls.
pub struct CameraRig {
    /// Configuration
    pub config: RigConfig,

    target_distance: f32,
    vertical_offset: f32,
    horizontal_offset: f32,

    smooth_target_distance: f32,
    smooth_vertical_offset: f32,
    smooth_horizontal_offset: f32,

    /// Pivot the camera orbits (actor position + model bounds centre)
    attach_position: Vec3,
    /// Where the obstacle sweep came to rest
    end_camera_position: Vec3,

    obstacle_hit: bool,
    obstacle_hit_distance: f32,
    obstacle_hit_vector: Vec3,

    /// Resolved distance from the previous frame
    last_camera_distance: f32,
    /// Whether the previous frame was held in by (or easing away from) an obstacle
    last_obstacle_hit: bool,

    view: CameraView,
}

impl CameraRig {
    /// Create a camera rig with default config
    pub fn new() -> Self {
        Self::with_config(RigConfig::default())
    }

    /// Create a camera rig with custom config
    pub fn with_config(config: RigConfig) -> Self {
        Self {
            config,
            target_distance: DEFAULT_TARGET_DISTANCE,
            vertical_offset: 0.0,
            horizontal_offset: 0.0,
            smooth_target_distance: 0.0,
            smooth_vertical_offset: 0.0,
            smooth_horizontal_offset: 0.0,
            attach_position: Vec3::ZERO,
            end_camera_position: Vec3::ZERO,
            obstacle_hit: false,
            obstacle_hit_distance: 0.0,
            obstacle_hit_vector: Vec3::ZERO,
            last_camera_distance: 0.0,
            last_obstacle_hit: false,
            view: CameraView::default(),
        }
    }

    /// Distance from attach point to camera
    pub fn target_distance(&self) -> f32 {
        self.target_distance
    }

    /// Set the distance from attach point to camera.
    ///
    /// The smoothed distance is seeded directly while it is still non-positive.
    pub fn set_target_distance(&mut self, value: f32) {
        self.target_distance = value;

        if self.smooth_target_distance <= 0.0 {
            self.smooth_target_distance = value;
            self.last_camera_distance = value;
        }
    }

    /// Vertical offset of the camera; positive moves it up
    pub fn vertical_offset(&self) -> f32 {
        self.vertical_offset
    }

    /// Set the vertical offset; seeds the smoothed value while it is non-positive
    pub fn set_vertical_offset(&mut self, value: f32) {
        self.vertical_offset = value;

        if self.smooth_vertical_offset <= 0.0 {
            self.smooth_vertical_offset = value;
        }
    }

    /// Horizontal offset of the camera; positive moves it right
    pub fn horizontal_offset(&self) -> f32 {
        self.horizontal_offset
    }

    /// Set the horizontal offset; seeds the smoothed value while it is non-positive
    pub fn set_horizontal_offset(&mut self, value: f32) {
        self.horizontal_offset = value;

        if self.smooth_horizontal_offset <= 0.0 {
            self.smooth_horizontal_offset = value;
        }
    }

    /// Rate used to ease toward new targets (default 5.0)
    pub fn set_move_smoothing(&mut self, rate: f32) {
        self.config.move_smoothing = rate;
    }

    /// Rate used to ease around obstacles (default 20.0)
    pub fn set_obstacle_smoothing(&mut self, rate: f32) {
        self.config.obstacle_smoothing = rate;
    }

    /// Smoothed (distance, vertical, horizontal) values currently in use
    pub fn smoothed(&self) -> (f32, f32, f32) {
        (
            self.smooth_target_distance,
            self.smooth_vertical_offset,
            self.smooth_horizontal_offset,
        )
    }

    /// Get the point the camera orbits
    pub fn attach_position(&self) -> Vec3 {
        self.attach_position
    }

    /// Whether the last sweep was stopped by an obstacle
    pub fn obstacle_hit(&self) -> bool {
        self.obstacle_hit
    }

    /// Distance from the attach point to where the last sweep stopped
    pub fn obstacle_hit_distance(&self) -> f32 {
        self.obstacle_hit_distance
    }

    /// Camera distance resolved on the last frame
    pub fn last_camera_distance(&self) -> f32 {
        self.last_camera_distance
    }

    /// Camera output from the last frame
    pub fn view(&self) -> CameraView {
        self.view
    }

    /// Run one frame of the camera pipeline and return the resulting view.
    pub fn frame_simulate<W>(&mut self, dt: f32, pose: &ActorPose, world: &W) -> CameraView
    where
        W: WorldQuery + ?Sized,
    {
        self.sync_rotation_and_fov(pose);
        self.update_attach_position(pose);

        self.step_smoothing(dt);
        self.sweep_for_obstacles(pose, world);

        if almost_equal(
            self.last_camera_distance,
            self.obstacle_hit_distance,
            self.config.distance_epsilon,
        ) {
            self.snap_to_end_position();
        } else {
            self.ease_to_hit_distance(dt);
        }

        self.view
    }

    fn sync_rotation_and_fov(&mut self, pose: &ActorPose) {
        self.view.rotation = pose.view_angles.to_rotation();
        self.view.fov_y =
            vertical_fov(self.config.fov, self.config.fov_axis, self.config.aspect_ratio);
    }

    fn update_attach_position(&mut self, pose: &ActorPose) {
        self.attach_position = pose.position + pose.bounds_center;
    }

    fn step_smoothing(&mut self, dt: f32) {
        let fraction = dt * self.config.move_smoothing;

        self.smooth_target_distance =
            lerp_to(self.smooth_target_distance, self.target_distance, fraction);
        self.smooth_vertical_offset =
            lerp_to(self.smooth_vertical_offset, self.vertical_offset, fraction);
        self.smooth_horizontal_offset =
            lerp_to(self.smooth_horizontal_offset, self.horizontal_offset, fraction);
    }

    /// Unoccluded camera position for the current smoothed values
    fn target_camera_position(&self, rotation: Quat, scale: f32) -> Vec3 {
        let up = rotation * Vec3::Y;
        let right = rotation * Vec3::X;
        let forward = rotation * -Vec3::Z;

        self.attach_position
            + up * (self.smooth_vertical_offset * scale)
            + right * (self.smooth_horizontal_offset * scale)
            - forward * (self.smooth_target_distance * scale)
    }

    fn sweep_for_obstacles<W>(&mut self, pose: &ActorPose, world: &W)
    where
        W: WorldQuery + ?Sized,
    {
        let target = self.target_camera_position(self.view.rotation, pose.scale);

        let trace = Trace::ray(self.attach_position, target)
            .with_any_tags(self.config.trace_tags.iter().cloned())
            .ignore(pose.entity)
            .radius(self.config.trace_radius);

        // A failed query counts as an unobstructed sweep
        let result = world.sweep(&trace).unwrap_or_else(|e| {
            debug!("Camera sweep failed, treating as unobstructed: {}", e);
            trace.unobstructed()
        });

        self.end_camera_position = result.end_position;
        self.obstacle_hit = result.hit;

        self.obstacle_hit_vector = self.end_camera_position - self.attach_position;
        self.obstacle_hit_distance = self.obstacle_hit_vector.length();
    }

    fn moving_away_from_obstacle(&self) -> bool {
        self.last_camera_distance < self.obstacle_hit_distance && self.last_obstacle_hit
    }

    fn moving_toward_obstacle(&self) -> bool {
        self.last_camera_distance > self.obstacle_hit_distance && self.obstacle_hit
    }

    fn ease_to_hit_distance(&mut self, dt: f32) {
        let moving_away = self.moving_away_from_obstacle();

        let distance = if moving_away || self.moving_toward_obstacle() {
            lerp_to(
                self.last_camera_distance,
                self.obstacle_hit_distance,
                dt * self.config.obstacle_smoothing,
            )
        } else {
            // Target-driven change: catch up immediately
            self.obstacle_hit_distance
        };

        self.view.position =
            self.attach_position + self.obstacle_hit_vector.normalize_or_zero() * distance;

        self.last_obstacle_hit = self.obstacle_hit || moving_away;
        self.last_camera_distance = distance;
    }

    fn snap_to_end_position(&mut self) {
        self.view.position = self.end_camera_position;
        self.last_camera_distance = self.obstacle_hit_distance;
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new()
    }
}
