//! World query contract for obstacle sweeps

use glam::Vec3;

use crate::types::EntityId;

/// Tag carried by geometry the camera must not pass through
pub const SOLID_TAG: &str = "solid";

/// Errors a world query may report
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("unknown surface tag '{0}'")]
    UnknownTag(String),

    #[error("world query unavailable: {0}")]
    Unavailable(String),
}

/// A thick ray swept from `start` to `end`
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub start: Vec3,
    pub end: Vec3,
    /// Radius of the swept sphere
    pub radius: f32,
    /// Only surfaces carrying any of these tags can stop the sweep
    pub any_tags: Vec<String>,
    /// Entity the sweep passes through
    pub ignore: Option<EntityId>,
}

impl Trace {
    /// Start building a sweep between two points
    pub fn ray(start: Vec3, end: Vec3) -> Self {
        Self {
            start,
            end,
            radius: 0.0,
            any_tags: Vec::new(),
            ignore: None,
        }
    }

    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_any_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.any_tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn ignore(mut self, entity: EntityId) -> Self {
        self.ignore = Some(entity);
        self
    }

    /// Result for a sweep that reached `end` unobstructed
    pub fn unobstructed(&self) -> TraceResult {
        TraceResult {
            hit: false,
            end_position: self.end,
        }
    }
}

/// Outcome of a sweep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceResult {
    /// Whether the sweep was stopped by a surface
    pub hit: bool,
    /// Where the sphere centre came to rest
    pub end_position: Vec3,
}

/// Synchronous obstacle query provided by the host world.
///
/// Implementations must be deterministic for a static world within a frame.
pub trait WorldQuery {
    fn sweep(&self, trace: &Trace) -> Result<TraceResult, QueryError>;
}

impl<T: WorldQuery + ?Sized> WorldQuery for &T {
    fn sweep(&self, trace: &Trace) -> Result<TraceResult, QueryError> {
        (**self).sweep(trace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_builder() {
        let actor = EntityId::new();
        let trace = Trace::ray(Vec3::ZERO, Vec3::Z * 10.0)
            .with_any_tags([SOLID_TAG])
            .ignore(actor)
            .radius(8.0);

        assert_eq!(trace.radius, 8.0);
        assert_eq!(trace.any_tags, vec!["solid".to_string()]);
        assert_eq!(trace.ignore, Some(actor));
    }

    #[test]
    fn test_unobstructed_ends_at_target() {
        let trace = Trace::ray(Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0));
        let result = trace.unobstructed();
        assert!(!result.hit);
        assert_eq!(result.end_position, Vec3::new(1.0, 2.0, 3.0));
    }
}
