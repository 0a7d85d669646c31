// Recording collision body for tests

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec3;

use super::CollisionBody;

/// Everything a character told its collision body
#[derive(Debug, Default)]
pub struct PhysicsLog {
    pub capsule: Option<(f32, f32)>,
    pub mass: Option<f32>,
    pub positions: Vec<Vec3>,
}

/// Collision body that records calls and optionally overrides positions
#[derive(Debug, Default)]
pub struct RecordingBody {
    log: Rc<RefCell<PhysicsLog>>,
    override_position: Option<Vec3>,
}

impl RecordingBody {
    /// Create a body and a handle to its call log
    pub fn new() -> (Self, Rc<RefCell<PhysicsLog>>) {
        let log = Rc::new(RefCell::new(PhysicsLog::default()));
        (
            Self {
                log: Rc::clone(&log),
                override_position: None,
            },
            log,
        )
    }

    /// Resolve every update to a fixed position
    pub fn overriding(mut self, position: Vec3) -> Self {
        self.override_position = Some(position);
        self
    }
}

impl CollisionBody for RecordingBody {
    fn set_collision_capsule(&mut self, radius: f32, height: f32) {
        self.log.borrow_mut().capsule = Some((radius, height));
    }

    fn set_mass(&mut self, mass: f32) {
        self.log.borrow_mut().mass = Some(mass);
    }

    fn update_collision(&mut self, position: Vec3) -> Vec3 {
        self.log.borrow_mut().positions.push(position);
        self.override_position.unwrap_or(position)
    }
}
