// Per-tick input commands for a character

use glam::Vec3;

use super::character::Character;
use crate::game::weapons::Shot;

/// One input event, as produced by the host's input layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    // Movement
    Move { direction: Vec3, dt: f32 },
    Rotate { yaw_delta: f32, dt: f32 },
    ToggleCrouch,
    StartSprint,
    StopSprint,

    // Combat
    StartAim,
    StopAim,
    Shoot,
    Reload,
    SwitchWeapon(usize),
}

impl Character {
    /// Apply a command. Returns the shot if the command fired one.
    pub fn execute(&mut self, command: Command) -> Option<Shot> {
        match command {
            Command::Move { direction, dt } => self.move_in(direction, dt),
            Command::Rotate { yaw_delta, dt } => self.rotate(yaw_delta, dt),
            Command::ToggleCrouch => self.toggle_crouch(),
            Command::StartSprint => self.start_sprint(),
            Command::StopSprint => self.stop_sprint(),
            Command::StartAim => self.start_aim(),
            Command::StopAim => self.stop_aim(),
            Command::Shoot => return self.shoot(),
            Command::Reload => self.reload(),
            Command::SwitchWeapon(slot) => {
                self.switch_weapon(slot);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::characters::clips;
    use crate::game::weapons::presets;

    #[test]
    fn test_execute_sequence() {
        let mut character = Character::spawn(Vec3::ZERO).unwrap();
        character.pickup_weapon(presets::pistol());
        character.pickup_weapon(presets::shotgun());

        let commands = [
            Command::StartSprint,
            Command::Move {
                direction: Vec3::Z,
                dt: 1.0,
            },
            Command::Rotate {
                yaw_delta: 0.5,
                dt: 1.0,
            },
            Command::StopSprint,
            Command::SwitchWeapon(1),
        ];
        for command in commands {
            assert!(character.execute(command).is_none());
        }

        assert_eq!(character.position(), Vec3::new(0.0, 0.0, 7.5));
        assert_eq!(character.yaw(), 90.0);
        assert_eq!(character.current_weapon().unwrap().weapon_type(), "shotgun");
        assert_eq!(character.current_animation(), Some(clips::WALK));

        let shot = character.execute(Command::Shoot).unwrap();
        assert_eq!(shot.damage, 80.0);
    }

    #[test]
    fn test_execute_reload_and_aim() {
        let mut character = Character::spawn(Vec3::ZERO).unwrap();
        character.pickup_weapon(presets::rifle());

        character.execute(Command::StartAim);
        assert!(character.state().is_aiming());
        character.execute(Command::StopAim);
        assert!(!character.state().is_aiming());

        character.execute(Command::Reload);
        assert!(character.state().is_reloading());
        assert_eq!(character.current_animation(), Some(clips::RELOAD));
    }
}
