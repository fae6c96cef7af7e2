use serde::{Deserialize, Serialize};

/// Mutually exclusive equip slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemSlot {
    Weapon,
    Armor,
    Accessory,
}

impl ItemSlot {
    pub fn name(&self) -> &'static str {
        match self {
            ItemSlot::Weapon => "Weapon",
            ItemSlot::Armor => "Armor",
            ItemSlot::Accessory => "Accessory",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    Common = 0,
    Uncommon = 1,
    Rare = 2,
    Epic = 3,
    Legendary = 4,
}

impl Rarity {
    /// Returns the display name for this rarity tier.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }

    pub fn all() -> [Rarity; 5] {
        [
            Rarity::Common,
            Rarity::Uncommon,
            Rarity::Rare,
            Rarity::Epic,
            Rarity::Legendary,
        ]
    }
}

/// Additive stat bonuses granted by an equipped item. Absent stats are zero.
///
/// IMPORTANT: When adding new stats, use `#[serde(default)]` so items in
/// old save files keep loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBonuses {
    #[serde(default)]
    pub attack: u32,
    #[serde(default)]
    pub defense: u32,
    #[serde(default)]
    pub max_hp: u32,
    /// Percentage points added to crit chance.
    #[serde(default)]
    pub crit_chance: u32,
    #[serde(default)]
    pub combo_bonus: u32,
    /// Percentage added to quest XP rewards.
    #[serde(default)]
    pub xp_bonus: u32,
}

impl StatBonuses {
    pub fn new() -> Self {
        Self {
            attack: 0,
            defense: 0,
            max_hp: 0,
            crit_chance: 0,
            combo_bonus: 0,
            xp_bonus: 0,
        }
    }

    pub fn total(&self) -> u32 {
        self.attack + self.defense + self.max_hp + self.crit_chance + self.combo_bonus
            + self.xp_bonus
    }
}

impl Default for StatBonuses {
    fn default() -> Self {
        Self::new()
    }
}

/// An item definition. Inventory and equipment hold full copies, so catalog
/// changes never mutate already-dropped items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub description: String,
    pub slot: ItemSlot,
    pub rarity: Rarity,
    pub stats: StatBonuses,
    /// Lowest node tier (1-4) at which this item can drop.
    pub tier: u8,
}
