//! Tether Physics - Obstacle queries using rapier3d
//!
//! Holds the static collision scene the camera sweeps against, plus the
//! bookkeeping needed to turn surface tags and host entities into rapier
//! collision groups and collider handles.

mod query;

pub use rapier3d::prelude::{ColliderHandle, Group};

use std::collections::HashMap;

use glam::Vec3;
use nalgebra::Unit;
use rapier3d::prelude::*;
use tether_core::{EntityId, SOLID_TAG};
use tracing::{debug, warn};

/// Collision group carried by geometry tagged [`SOLID_TAG`]
pub const SOLID_GROUP: Group = Group::GROUP_1;

/// The collision scene used for camera sweeps
pub struct PhysicsWorld {
    /// Rigid body storage
    pub rigid_body_set: RigidBodySet,
    /// Collider storage
    pub collider_set: ColliderSet,

    /// Island manager
    island_manager: IslandManager,
    /// Query pipeline for raycasts and shape casts
    query_pipeline: QueryPipeline,
    /// Surface tag name to collision group
    tags: HashMap<String, Group>,
    /// Host entities that own a collider
    entities: HashMap<EntityId, ColliderHandle>,
}

impl PhysicsWorld {
    /// Create an empty world with the `solid` tag registered
    pub fn new() -> Self {
        let mut tags = HashMap::new();
        tags.insert(SOLID_TAG.to_string(), SOLID_GROUP);

        Self {
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            island_manager: IslandManager::new(),
            query_pipeline: QueryPipeline::new(),
            tags,
            entities: HashMap::new(),
        }
    }

    /// Register (or remap) a surface tag to a collision group
    pub fn register_tag(&mut self, tag: impl Into<String>, group: Group) {
        let tag = tag.into();
        if let Some(previous) = self.tags.insert(tag.clone(), group) {
            if previous != group {
                warn!("Surface tag '{}' remapped from {:?} to {:?}", tag, previous, group);
            }
        }
    }

    /// Collision groups matching any of the given tags.
    ///
    /// An empty tag list matches every group.
    pub fn groups_for_tags(&self, tags: &[String]) -> Option<Group> {
        if tags.is_empty() {
            return Some(Group::ALL);
        }

        let mut groups = Group::NONE;
        for tag in tags {
            groups |= *self.tags.get(tag)?;
        }
        Some(groups)
    }

    /// Rebuild the query acceleration structure after colliders change
    pub fn update_query_pipeline(&mut self) {
        self.query_pipeline.update(&self.collider_set);
    }

    /// Add a static collider (ground, walls, etc.)
    pub fn add_static_collider(&mut self, collider: Collider) -> ColliderHandle {
        let handle = self.collider_set.insert(collider);
        self.update_query_pipeline();
        handle
    }

    /// Remove a collider
    pub fn remove_collider(&mut self, handle: ColliderHandle) {
        self.collider_set
            .remove(handle, &mut self.island_manager, &mut self.rigid_body_set, true);
        self.entities.retain(|_, owned| *owned != handle);
        self.update_query_pipeline();
    }

    /// Get a collider by handle
    pub fn get_collider(&self, handle: ColliderHandle) -> Option<&Collider> {
        self.collider_set.get(handle)
    }

    /// Associate a host entity with its collider so sweeps can ignore it
    pub fn attach_entity(&mut self, entity: EntityId, handle: ColliderHandle) {
        debug!("Entity {:?} attached to collider {:?}", entity.0, handle);
        self.entities.insert(entity, handle);
    }

    /// Collider owned by a host entity
    pub fn entity_collider(&self, entity: EntityId) -> Option<ColliderHandle> {
        self.entities.get(&entity).copied()
    }

    /// Create a ground plane collider
    pub fn create_ground(&mut self, y: f32) -> ColliderHandle {
        let normal = Unit::new_normalize(vector![0.0, 1.0, 0.0]);
        let ground = ColliderBuilder::halfspace(normal)
            .translation(vector![0.0, y, 0.0])
            .collision_groups(InteractionGroups::new(SOLID_GROUP, Group::ALL))
            .build();
        self.add_static_collider(ground)
    }

    /// Create a static solid box collider
    pub fn create_static_box(&mut self, half_extents: Vec3, position: Vec3) -> ColliderHandle {
        self.create_tagged_box(half_extents, position, SOLID_GROUP)
    }

    /// Create a static box collider in the given collision groups
    pub fn create_tagged_box(
        &mut self,
        half_extents: Vec3,
        position: Vec3,
        groups: Group,
    ) -> ColliderHandle {
        let collider = ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
            .translation(vector![position.x, position.y, position.z])
            .collision_groups(InteractionGroups::new(groups, Group::ALL))
            .build();
        self.add_static_collider(collider)
    }

    /// Create a trigger volume; sweeps never stop on sensors
    pub fn create_sensor_box(&mut self, half_extents: Vec3, position: Vec3) -> ColliderHandle {
        let collider = ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
            .translation(vector![position.x, position.y, position.z])
            .sensor(true)
            .build();
        self.add_static_collider(collider)
    }

    /// Spawn an upright capsule for a host entity, standing on `position`
    pub fn spawn_actor(
        &mut self,
        entity: EntityId,
        position: Vec3,
        height: f32,
        radius: f32,
    ) -> ColliderHandle {
        let half_height = ((height - 2.0 * radius) / 2.0).max(0.01);
        let collider = ColliderBuilder::capsule_y(half_height, radius)
            .translation(vector![position.x, position.y + height / 2.0, position.z])
            .collision_groups(InteractionGroups::new(SOLID_GROUP, Group::ALL))
            .build();

        let handle = self.add_static_collider(collider);
        self.attach_entity(entity, handle);
        handle
    }

    /// Teleport a collider, keeping queries in sync
    pub fn set_collider_translation(&mut self, handle: ColliderHandle, translation: Vec3) {
        if let Some(collider) = self.collider_set.get_mut(handle) {
            collider.set_translation(vector![translation.x, translation.y, translation.z]);
            self.update_query_pipeline();
        }
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}
