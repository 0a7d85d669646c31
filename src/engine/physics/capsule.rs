use glam::Vec3;
use rapier3d::prelude::*;

use super::CollisionBody;

/// Kinematic capsule body backed by rapier3d.
///
/// The body is position-based: rapier never pushes it around on its own, the
/// character drives it through [`CollisionBody::update_collision`]. An optional
/// floor height keeps the capsule's feet from sinking below the ground.
pub struct CapsuleBody {
    bodies: RigidBodySet,
    colliders: ColliderSet,
    body_handle: RigidBodyHandle,
    collider_handle: ColliderHandle,
    floor: Option<Real>,
}

impl CapsuleBody {
    /// Create a capsule body at `position` with a unit placeholder shape.
    /// The character replaces shape and mass during construction.
    pub fn new(position: Vec3) -> Self {
        let mut bodies = RigidBodySet::new();
        let mut colliders = ColliderSet::new();

        let body = RigidBodyBuilder::kinematic_position_based()
            .translation(to_vector(position))
            .lock_rotations()
            .can_sleep(false)
            .build();
        let body_handle = bodies.insert(body);

        let collider = ColliderBuilder::capsule_y(0.5, 0.5)
            .friction(0.0)
            .restitution(0.0)
            .build();
        let collider_handle = colliders.insert_with_parent(collider, body_handle, &mut bodies);

        Self {
            bodies,
            colliders,
            body_handle,
            collider_handle,
            floor: None,
        }
    }

    /// Keep the feet of the capsule at or above `height`
    pub fn with_floor(mut self, height: f32) -> Self {
        self.floor = Some(height);
        self
    }

    /// Current translation of the rigid body
    pub fn translation(&self) -> Vec3 {
        self.bodies
            .get(self.body_handle)
            .map(|body| {
                let t = body.translation();
                Vec3::new(t.x, t.y, t.z)
            })
            .unwrap_or(Vec3::ZERO)
    }

    /// Capsule dimensions as (radius, total height)
    pub fn capsule(&self) -> Option<(f32, f32)> {
        let collider = self.colliders.get(self.collider_handle)?;
        let capsule = collider.shape().as_capsule()?;
        Some((capsule.radius, (capsule.half_height() + capsule.radius) * 2.0))
    }

    /// Mass of the collider in kilograms
    pub fn mass(&self) -> f32 {
        self.colliders
            .get(self.collider_handle)
            .map(|collider| collider.mass())
            .unwrap_or(0.0)
    }
}

impl CollisionBody for CapsuleBody {
    fn set_collision_capsule(&mut self, radius: f32, height: f32) {
        // rapier's capsule half-height excludes the rounded caps
        let half_height = (height / 2.0 - radius).max(0.0);
        if let Some(collider) = self.colliders.get_mut(self.collider_handle) {
            collider.set_shape(SharedShape::capsule_y(half_height, radius));
        }
    }

    fn set_mass(&mut self, mass: f32) {
        if let Some(collider) = self.colliders.get_mut(self.collider_handle) {
            collider.set_mass(mass);
        }
    }

    fn update_collision(&mut self, position: Vec3) -> Vec3 {
        let mut resolved = position;
        if let Some(floor) = self.floor {
            resolved.y = resolved.y.max(floor);
        }

        if let Some(body) = self.bodies.get_mut(self.body_handle) {
            body.set_translation(to_vector(resolved), true);
        }

        resolved
    }
}

impl std::fmt::Debug for CapsuleBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CapsuleBody")
            .field("translation", &self.translation())
            .field("capsule", &self.capsule())
            .field("mass", &self.mass())
            .field("floor", &self.floor)
            .finish()
    }
}

fn to_vector(v: Vec3) -> Vector<Real> {
    Vector::new(v.x, v.y, v.z)
}
