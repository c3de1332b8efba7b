//! Tether Core - Core types and utilities for the Tether camera rig
//!
//! This crate provides the foundational types shared by the camera, physics, and
//! asset crates:
//! - Mathematical primitives (re-exported from glam)
//! - Actor pose and camera view records
//! - Interpolation helpers used by the smoothing model
//! - The world query contract used for obstacle sweeps

pub mod math;
pub mod query;
pub mod types;

pub use glam::{Mat4, Quat, Vec3};
pub use query::{QueryError, Trace, TraceResult, WorldQuery, SOLID_TAG};
pub use types::{ActorPose, CameraView, EntityId, FovAxis, ViewAngles};
