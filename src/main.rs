use anyhow::Result;
use glam::Vec3;
use log::info;

use military_character::engine::clock::FIXED_TIMESTEP;
use military_character::engine::physics::CapsuleBody;
use military_character::game::characters::ClipLibrary;
use military_character::game::weapons::presets;
use military_character::{Character, CharacterConfig, Command, Weapon, WeaponStats};

/// Length of the scripted patrol in simulation ticks (4 seconds)
const PATROL_TICKS: u32 = 240;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting patrol simulation...");

    let mut soldier = Character::new(
        Vec3::ZERO,
        CharacterConfig::default(),
        Box::new(CapsuleBody::new(Vec3::ZERO).with_floor(0.0)),
        ClipLibrary::standard()?,
    )?;

    let sidearm = Weapon::new(
        "pistol",
        WeaponStats {
            max_ammo: 2,
            current_ammo: 2,
            damage: 20.0,
            range: 40.0,
            reload_time: 1.2,
            fire_rate: 4.0,
        },
    )?;
    for weapon in [sidearm, presets::rifle(), presets::shotgun(), presets::pistol()] {
        let name = weapon.weapon_type().to_string();
        if !soldier.pickup_weapon(weapon) {
            info!("No room for {name}");
        }
    }

    let mut last_animation = String::new();
    for tick in 0..PATROL_TICKS {
        for command in script(tick) {
            if let Some(shot) = soldier.execute(command) {
                info!(
                    "tick {tick:3}: fired {:.0} dmg shot at {:.2}s",
                    shot.damage, shot.time
                );
            }
        }
        soldier.update(FIXED_TIMESTEP);

        let animation = soldier.current_animation().unwrap_or("none");
        if animation != last_animation {
            info!(
                "tick {tick:3}: playing '{animation}' at ({:.2}, {:.2}, {:.2}) yaw {:.0}",
                soldier.position().x,
                soldier.position().y,
                soldier.position().z,
                soldier.yaw()
            );
            last_animation = animation.to_string();
        }
    }

    let ammo = soldier.current_weapon().map_or(0, |w| w.current_ammo());
    info!(
        "Patrol finished after {:.2}s with {ammo} rounds loaded",
        soldier.now()
    );

    Ok(())
}

/// Scripted input for a given tick
fn script(tick: u32) -> Vec<Command> {
    let forward = Command::Move {
        direction: Vec3::Z,
        dt: FIXED_TIMESTEP,
    };
    let halt = Command::Move {
        direction: Vec3::ZERO,
        dt: FIXED_TIMESTEP,
    };

    match tick {
        0 => vec![Command::StartSprint, forward],
        1..=59 => vec![forward],
        60 => vec![Command::StopSprint, Command::ToggleCrouch, forward],
        61..=89 => vec![
            forward,
            Command::Rotate {
                yaw_delta: 0.5,
                dt: FIXED_TIMESTEP,
            },
        ],
        90 => vec![Command::ToggleCrouch, halt, Command::StartAim, Command::Shoot],
        105 => vec![Command::Shoot],
        // Magazine is empty by now, so this turns into a reload
        120 => vec![Command::Shoot],
        // Still reloading, ignored
        150 => vec![Command::Shoot],
        220 => vec![Command::StopAim, Command::Shoot],
        _ => Vec::new(),
    }
}
