use crate::core::constants::*;
use crate::items::Equipment;

/// Effective combat stats for the player, derived from level and equipped
/// gear. Never stored; recomputed whenever a battle starts or gear changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerStats {
    pub attack: u32,
    pub defense: u32,
    pub max_hp: u32,
    pub crit_chance: u32,
    pub combo_bonus: u32,
}

/// Calculates player stats from equipment bonuses and character level.
///
/// Gear bonuses are purely additive. Level scaling uses integer arithmetic,
/// so defense gains a point every `DEFENSE_LEVEL_DIVISOR` levels.
pub fn compute_player_stats(equipment: &Equipment, level: u32) -> PlayerStats {
    let gear = equipment.combined_stats();

    // Attack = BASE_ATTACK + gear + (level × ATTACK_PER_LEVEL)
    let attack = BASE_ATTACK + gear.attack + level * ATTACK_PER_LEVEL;

    // Defense = BASE_DEFENSE + gear + (level / DEFENSE_LEVEL_DIVISOR)
    let defense = BASE_DEFENSE + gear.defense + level / DEFENSE_LEVEL_DIVISOR;

    // Max HP = BASE_MAX_HP + gear + (level × HP_PER_LEVEL)
    let max_hp = BASE_MAX_HP + gear.max_hp + level * HP_PER_LEVEL;

    // Crit chance is a flat percent; combo bonus comes only from gear
    let crit_chance = BASE_CRIT_CHANCE_PERCENT + gear.crit_chance;
    let combo_bonus = gear.combo_bonus;

    PlayerStats {
        attack,
        defense,
        max_hp,
        crit_chance,
        combo_bonus,
    }
}
