//! Sphere sweeps against the collision scene

use rapier3d::parry::query::ShapeCastOptions;
use rapier3d::parry::shape::Ball;
use rapier3d::prelude::*;
use tether_core::{QueryError, Trace, TraceResult, WorldQuery};

use crate::PhysicsWorld;

impl PhysicsWorld {
    /// Query filter for a trace: tag groups, no sensors, ignored entity excluded
    fn trace_filter(&self, trace: &Trace) -> Result<QueryFilter<'_>, QueryError> {
        let groups = self.groups_for_tags(&trace.any_tags).ok_or_else(|| {
            let unknown = trace
                .any_tags
                .iter()
                .find(|tag| self.groups_for_tags(std::slice::from_ref(*tag)).is_none())
                .cloned()
                .unwrap_or_default();
            QueryError::UnknownTag(unknown)
        })?;

        let mut filter = QueryFilter::default()
            .exclude_sensors()
            .groups(InteractionGroups::new(Group::ALL, groups));

        if let Some(handle) = trace.ignore.and_then(|entity| self.entity_collider(entity)) {
            filter = filter.exclude_collider(handle);
        }

        Ok(filter)
    }
}

impl WorldQuery for PhysicsWorld {
    fn sweep(&self, trace: &Trace) -> Result<TraceResult, QueryError> {
        let filter = self.trace_filter(trace)?;
        let travel = trace.end - trace.start;

        if travel.length_squared() <= f32::EPSILON {
            return Ok(trace.unobstructed());
        }

        let shape_pos = Isometry::translation(trace.start.x, trace.start.y, trace.start.z);
        let shape_vel = vector![travel.x, travel.y, travel.z];
        let options = ShapeCastOptions::with_max_time_of_impact(1.0);

        let hit = if trace.radius > 0.0 {
            let ball = Ball::new(trace.radius);
            self.query_pipeline
                .cast_shape(
                    &self.rigid_body_set,
                    &self.collider_set,
                    &shape_pos,
                    &shape_vel,
                    &ball,
                    options,
                    filter,
                )
                .map(|(_, hit)| hit.time_of_impact)
        } else {
            let ray = Ray::new(point![trace.start.x, trace.start.y, trace.start.z], shape_vel);
            self.query_pipeline
                .cast_ray(&self.rigid_body_set, &self.collider_set, &ray, 1.0, true, filter)
                .map(|(_, toi)| toi)
        };

        Ok(match hit {
            Some(toi) => TraceResult {
                hit: true,
                end_position: trace.start + travel * toi.clamp(0.0, 1.0),
            },
            None => trace.unobstructed(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use tether_core::{EntityId, SOLID_TAG};

    /// World with a wall whose near face sits at z = -100
    fn walled_world() -> PhysicsWorld {
        let mut world = PhysicsWorld::new();
        world.create_static_box(Vec3::new(200.0, 200.0, 10.0), Vec3::new(0.0, 0.0, -110.0));
        world
    }

    fn solid_trace(end: Vec3) -> Trace {
        Trace::ray(Vec3::ZERO, end)
            .with_any_tags([SOLID_TAG])
            .radius(8.0)
    }

    #[test]
    fn test_sweep_stops_short_of_wall() {
        let world = walled_world();
        let result = world.sweep(&solid_trace(Vec3::new(0.0, 0.0, -200.0))).unwrap();

        assert!(result.hit);
        assert!((result.end_position.z - -92.0).abs() < 0.1);
    }

    #[test]
    fn test_sweep_reaches_target_in_open_space() {
        let world = walled_world();
        let result = world.sweep(&solid_trace(Vec3::new(0.0, 0.0, 50.0))).unwrap();

        assert!(!result.hit);
        assert_eq!(result.end_position, Vec3::new(0.0, 0.0, 50.0));
    }

    #[test]
    fn test_sweep_ignores_non_solid_geometry() {
        let mut world = PhysicsWorld::new();
        world.create_tagged_box(
            Vec3::new(200.0, 200.0, 10.0),
            Vec3::new(0.0, 0.0, -110.0),
            Group::GROUP_2,
        );
        world.create_sensor_box(Vec3::new(200.0, 200.0, 10.0), Vec3::new(0.0, 0.0, -50.0));

        let result = world.sweep(&solid_trace(Vec3::new(0.0, 0.0, -200.0))).unwrap();
        assert!(!result.hit);
    }

    #[test]
    fn test_sweep_ignores_tracked_actor() {
        let mut world = PhysicsWorld::new();
        let actor = EntityId::new();
        world.spawn_actor(actor, Vec3::new(0.0, -36.0, 0.0), 72.0, 16.0);

        let blocked = world.sweep(&solid_trace(Vec3::new(0.0, 0.0, 100.0))).unwrap();
        assert!(blocked.hit);

        let ignored = world
            .sweep(&solid_trace(Vec3::new(0.0, 0.0, 100.0)).ignore(actor))
            .unwrap();
        assert!(!ignored.hit);
    }

    #[test]
    fn test_zero_radius_uses_ray() {
        let world = walled_world();
        let trace = Trace::ray(Vec3::ZERO, Vec3::new(0.0, 0.0, -200.0)).with_any_tags([SOLID_TAG]);
        let result = world.sweep(&trace).unwrap();

        assert!(result.hit);
        assert!((result.end_position.z - -100.0).abs() < 0.1);
    }

    #[test]
    fn test_unknown_tag_is_an_error() {
        let world = walled_world();
        let trace = Trace::ray(Vec3::ZERO, Vec3::Z).with_any_tags(["lava"]);
        match world.sweep(&trace) {
            Err(QueryError::UnknownTag(tag)) => assert_eq!(tag, "lava"),
            other => panic!("expected unknown tag error, got {:?}", other),
        }
    }
}
