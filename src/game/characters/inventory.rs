// Weapon inventory with an equipped slot

use log::debug;

use super::InventoryError;
use crate::game::weapons::Weapon;

/// Owns the weapons a character carries. The equipped weapon is a slot index.
#[derive(Debug, Clone)]
pub struct Inventory {
    weapons: Vec<Weapon>,
    capacity: usize,
    equipped: Option<usize>,
}

impl Inventory {
    pub fn new(capacity: usize) -> Self {
        Self {
            weapons: Vec::with_capacity(capacity),
            capacity,
            equipped: None,
        }
    }

    /// Store a weapon and return its slot. The first weapon stored is equipped.
    pub fn try_add(&mut self, weapon: Weapon) -> Result<usize, InventoryError> {
        if self.is_full() {
            debug!(
                "Inventory full ({} slots), leaving {} behind",
                self.capacity,
                weapon.weapon_type()
            );
            return Err(InventoryError::Full {
                capacity: self.capacity,
            });
        }

        let slot = self.weapons.len();
        self.weapons.push(weapon);
        if self.equipped.is_none() {
            self.equipped = Some(slot);
        }
        Ok(slot)
    }

    /// Equip the weapon in `slot`
    pub fn equip(&mut self, slot: usize) -> Result<(), InventoryError> {
        if slot >= self.weapons.len() {
            return Err(InventoryError::EmptySlot(slot));
        }
        self.equipped = Some(slot);
        Ok(())
    }

    pub fn equipped(&self) -> Option<&Weapon> {
        self.weapons.get(self.equipped?)
    }

    pub fn equipped_mut(&mut self) -> Option<&mut Weapon> {
        self.weapons.get_mut(self.equipped?)
    }

    pub fn equipped_slot(&self) -> Option<usize> {
        self.equipped
    }

    pub fn get(&self, slot: usize) -> Option<&Weapon> {
        self.weapons.get(slot)
    }

    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.weapons.len() >= self.capacity
    }
}
