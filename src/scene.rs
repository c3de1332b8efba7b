//! Demo collision scene: a ground plane, a wall, and a walking actor

use tether_core::{ActorPose, EntityId, Vec3, ViewAngles};
use tether_physics::{ColliderHandle, PhysicsWorld};
use tracing::info;

/// Actor capsule height in world units
const ACTOR_HEIGHT: f32 = 72.0;
/// Actor capsule radius in world units
const ACTOR_RADIUS: f32 = 16.0;
/// Walking speed along +X in world units per second
const WALK_SPEED: f32 = 50.0;

pub struct DemoScene {
    pub physics: PhysicsWorld,
    pub actor: EntityId,
    collider: ColliderHandle,
}

impl DemoScene {
    pub fn build() -> Self {
        let mut physics = PhysicsWorld::new();
        physics.create_ground(0.0);

        // Wall running alongside the walk path, behind the actor
        physics.create_static_box(Vec3::new(100.0, 120.0, 8.0), Vec3::new(200.0, 120.0, 58.0));

        // Trigger volume the camera must pass through
        physics.create_sensor_box(Vec3::new(40.0, 40.0, 40.0), Vec3::new(400.0, 40.0, 40.0));

        let actor = EntityId::new();
        let collider = physics.spawn_actor(actor, Vec3::ZERO, ACTOR_HEIGHT, ACTOR_RADIUS);

        info!("Demo scene built with actor {:?}", actor.0);
        Self {
            physics,
            actor,
            collider,
        }
    }

    /// Move the actor to where it is at `time` seconds and return its pose
    pub fn advance_actor(&mut self, time: f32) -> ActorPose {
        let position = Vec3::new(time * WALK_SPEED, 0.0, 0.0);
        self.physics.set_collider_translation(
            self.collider,
            position + Vec3::new(0.0, ACTOR_HEIGHT / 2.0, 0.0),
        );

        ActorPose {
            entity: self.actor,
            position,
            // Slow look-around so the camera swings across the wall
            view_angles: ViewAngles::new(-10.0, (time * 0.7).sin() * 30.0, 0.0),
            bounds_center: Vec3::new(0.0, ACTOR_HEIGHT / 2.0, 0.0),
            scale: 1.0,
        }
    }
}
