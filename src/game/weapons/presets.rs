// Standard issue weapons, fully loaded

use super::{Weapon, WeaponStats};

/// Sidearm: small magazine, quick reload
pub fn pistol() -> Weapon {
    Weapon::preset(
        "pistol",
        WeaponStats {
            max_ammo: 12,
            current_ammo: 12,
            damage: 20.0,
            range: 40.0,
            reload_time: 1.2,
            fire_rate: 4.0,
        },
    )
}

/// Assault rifle
pub fn rifle() -> Weapon {
    Weapon::preset(
        "rifle",
        WeaponStats {
            max_ammo: 30,
            current_ammo: 30,
            damage: 28.0,
            range: 120.0,
            reload_time: 2.2,
            fire_rate: 10.0,
        },
    )
}

/// Pump shotgun: heavy hits at short range, slow to reload
pub fn shotgun() -> Weapon {
    Weapon::preset(
        "shotgun",
        WeaponStats {
            max_ammo: 6,
            current_ammo: 6,
            damage: 80.0,
            range: 15.0,
            reload_time: 3.0,
            fire_rate: 1.2,
        },
    )
}
