// Physics seam between the character layer and rapier3d

mod capsule;
#[cfg(test)]
pub(crate) mod testing;

pub use capsule::CapsuleBody;

use glam::Vec3;

/// The collision shape a character is simulated with.
///
/// Implementations own whatever physics state backs the shape. The character
/// configures it once at construction and then reports its desired position
/// every move; the returned position is where the body actually ended up.
pub trait CollisionBody: std::fmt::Debug {
    /// Replace the collision shape with a capsule (total height, caps included)
    fn set_collision_capsule(&mut self, radius: f32, height: f32);

    /// Set the body's mass in kilograms
    fn set_mass(&mut self, mass: f32);

    /// Move the body to `position` and return the resolved position
    fn update_collision(&mut self, position: Vec3) -> Vec3;
}
