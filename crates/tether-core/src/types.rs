//! Core types shared by the rig and its host collaborators

use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an entity in the host world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    /// Create a new random entity ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an entity ID from a UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

/// Euler view angles in degrees, as produced by the host's look input
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewAngles {
    /// Rotation about the right axis; positive looks up
    pub pitch: f32,
    /// Rotation about the world up axis
    pub yaw: f32,
    pub roll: f32,
}

impl ViewAngles {
    pub const fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Convert to a rotation (yaw, then pitch, then roll)
    pub fn to_rotation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.yaw.to_radians(),
            self.pitch.to_radians(),
            self.roll.to_radians(),
        )
    }
}

/// Per-frame snapshot of the tracked actor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActorPose {
    /// The actor's entity, excluded from obstacle sweeps
    pub entity: EntityId,
    /// World-space origin of the actor
    pub position: Vec3,
    /// Where the actor is looking
    pub view_angles: ViewAngles,
    /// Centre of the actor's model bounds, relative to `position`
    pub bounds_center: Vec3,
    /// Uniform scale factor applied to all camera offsets
    pub scale: f32,
}

impl ActorPose {
    /// Create a pose at the given position with identity view and unit scale
    pub fn at(entity: EntityId, position: Vec3) -> Self {
        Self {
            entity,
            position,
            view_angles: ViewAngles::default(),
            bounds_center: Vec3::ZERO,
            scale: 1.0,
        }
    }
}

/// Which axis a field-of-view preference is measured along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FovAxis {
    #[default]
    Horizontal,
    Diagonal,
}

/// Final camera output consumed by the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraView {
    pub position: Vec3,
    pub rotation: Quat,
    /// Vertical field of view in degrees
    pub fov_y: f32,
}

impl Default for CameraView {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            fov_y: 60.0,
        }
    }
}

impl CameraView {
    /// Get the forward direction (negative Z in local space)
    pub fn forward(&self) -> Vec3 {
        self.rotation * -Vec3::Z
    }

    /// Get the right direction (positive X in local space)
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Get the up direction (positive Y in local space)
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Get the view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.forward(), self.up())
    }

    /// Get a projection matrix for the given aspect ratio
    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y.to_radians(), aspect_ratio, 0.1, 10_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_identity_angles_look_down_negative_z() {
        let view = CameraView {
            rotation: ViewAngles::default().to_rotation(),
            ..Default::default()
        };
        assert!(approx(view.forward(), -Vec3::Z));
        assert!(approx(view.right(), Vec3::X));
        assert!(approx(view.up(), Vec3::Y));
    }

    #[test]
    fn test_positive_pitch_looks_up() {
        let rotation = ViewAngles::new(30.0, 0.0, 0.0).to_rotation();
        let forward = rotation * -Vec3::Z;
        assert!(forward.y > 0.0);
    }

    #[test]
    fn test_yaw_keeps_up_axis() {
        let view = CameraView {
            rotation: ViewAngles::new(0.0, 90.0, 0.0).to_rotation(),
            ..Default::default()
        };
        assert!(approx(view.up(), Vec3::Y));
        assert!(view.forward().y.abs() < 1e-5);
    }

    #[test]
    fn test_view_matrix_maps_position_to_origin() {
        let view = CameraView {
            position: Vec3::new(1.0, 2.0, 3.0),
            ..Default::default()
        };
        let origin = view.view_matrix().transform_point3(view.position);
        assert!(approx(origin, Vec3::ZERO));
    }

    #[test]
    fn test_fov_axis_deserializes_lowercase() {
        use serde::de::value::{Error, StrDeserializer};
        use serde::de::IntoDeserializer;

        let de: StrDeserializer<'_, Error> = "diagonal".into_deserializer();
        assert_eq!(FovAxis::deserialize(de).unwrap(), FovAxis::Diagonal);
    }
}
