use super::types::{Item, ItemSlot, StatBonuses};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EquipError {
    /// The item's slot type does not match the slot it was equipped into.
    #[error("cannot equip {item_slot:?} item into {target_slot:?} slot")]
    SlotMismatch {
        item_slot: ItemSlot,
        target_slot: ItemSlot,
    },
}

/// Player equipment: one optional item per slot.
///
/// IMPORTANT: When adding new slots, use `#[serde(default)]` to maintain
/// backward compatibility with old save files.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Equipment {
    #[serde(default)]
    pub weapon: Option<Item>,
    #[serde(default)]
    pub armor: Option<Item>,
    #[serde(default)]
    pub accessory: Option<Item>,
}

impl Equipment {
    pub fn new() -> Self {
        Self {
            weapon: None,
            armor: None,
            accessory: None,
        }
    }

    pub fn get(&self, slot: ItemSlot) -> &Option<Item> {
        match slot {
            ItemSlot::Weapon => &self.weapon,
            ItemSlot::Armor => &self.armor,
            ItemSlot::Accessory => &self.accessory,
        }
    }

    pub fn set(&mut self, slot: ItemSlot, item: Option<Item>) {
        match slot {
            ItemSlot::Weapon => self.weapon = item,
            ItemSlot::Armor => self.armor = item,
            ItemSlot::Accessory => self.accessory = item,
        }
    }

    /// Equips an item into the slot matching its type and returns the
    /// displaced occupant, if any.
    pub fn equip(&mut self, item: Item) -> Option<Item> {
        let slot = item.slot;
        let previous = self.get(slot).clone();
        self.set(slot, Some(item));
        previous
    }

    /// Equips into an explicit slot. Rejects items whose slot type disagrees
    /// instead of silently corrupting the loadout.
    pub fn equip_into(&mut self, slot: ItemSlot, item: Item) -> Result<Option<Item>, EquipError> {
        if item.slot != slot {
            return Err(EquipError::SlotMismatch {
                item_slot: item.slot,
                target_slot: slot,
            });
        }
        let previous = self.get(slot).clone();
        self.set(slot, Some(item));
        Ok(previous)
    }

    /// Removes and returns the occupant of a slot.
    pub fn unequip(&mut self, slot: ItemSlot) -> Option<Item> {
        let previous = self.get(slot).clone();
        self.set(slot, None);
        previous
    }

    pub fn iter_equipped(&self) -> impl Iterator<Item = &Item> {
        [&self.weapon, &self.armor, &self.accessory]
            .into_iter()
            .filter_map(|item| item.as_ref())
    }

    /// Sums the stat bonuses across all equipped items.
    pub fn combined_stats(&self) -> StatBonuses {
        let mut combined = StatBonuses::new();
        for item in self.iter_equipped() {
            combined.attack += item.stats.attack;
            combined.defense += item.stats.defense;
            combined.max_hp += item.stats.max_hp;
            combined.crit_chance += item.stats.crit_chance;
            combined.combo_bonus += item.stats.combo_bonus;
            combined.xp_bonus += item.stats.xp_bonus;
        }
        combined
    }

    /// Total XP bonus percentage across weapon, armor, and accessory.
    pub fn xp_bonus_percent(&self) -> u32 {
        self.combined_stats().xp_bonus
    }
}
