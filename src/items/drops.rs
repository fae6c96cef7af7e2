use super::types::{Item, Rarity};
use crate::catalog;
use crate::core::constants::*;
use rand::Rng;

pub fn drop_chance(is_boss: bool) -> f64 {
    if is_boss {
        BOSS_DROP_CHANCE
    } else {
        QUEST_DROP_CHANCE
    }
}

/// Selection weight for a rarity at a given node tier.
///
/// Base weights favor common gear; boss encounters raise the epic and
/// legendary weights, and tier 3+ nodes shift the table further upward.
pub fn rarity_weight(rarity: Rarity, node_tier: u8, is_boss: bool) -> u32 {
    let mut weight = match rarity {
        Rarity::Common => WEIGHT_COMMON,
        Rarity::Uncommon => WEIGHT_UNCOMMON,
        Rarity::Rare => WEIGHT_RARE,
        Rarity::Epic => {
            if is_boss {
                WEIGHT_EPIC_BOSS
            } else {
                WEIGHT_EPIC
            }
        }
        Rarity::Legendary => {
            if is_boss {
                WEIGHT_LEGENDARY_BOSS
            } else {
                WEIGHT_LEGENDARY
            }
        }
    };

    if node_tier >= 3 {
        match rarity {
            Rarity::Rare => weight += TIER3_RARE_BONUS,
            Rarity::Epic => weight += TIER3_EPIC_BONUS,
            _ => {}
        }
    }
    if node_tier >= 4 {
        match rarity {
            Rarity::Epic => weight += TIER4_EPIC_BONUS,
            Rarity::Legendary => weight += TIER4_LEGENDARY_BONUS,
            _ => {}
        }
    }

    weight
}

/// Weighted rarity pick over the rarities actually present in `pool`.
///
/// Returns `None` only when the pool is empty.
pub fn roll_rarity(pool: &[Item], node_tier: u8, is_boss: bool, rng: &mut impl Rng) -> Option<Rarity> {
    let present: Vec<Rarity> = Rarity::all()
        .into_iter()
        .filter(|r| pool.iter().any(|item| item.rarity == *r))
        .collect();

    let total: u32 = present
        .iter()
        .map(|r| rarity_weight(*r, node_tier, is_boss))
        .sum();
    if total == 0 {
        return None;
    }

    let mut roll = rng.gen_range(0..total);
    for rarity in present {
        let weight = rarity_weight(rarity, node_tier, is_boss);
        if roll < weight {
            return Some(rarity);
        }
        roll -= weight;
    }
    None
}

/// Try to drop an item after a won encounter.
///
/// One uniform draw decides whether anything drops at all; on a drop the
/// catalog is filtered to `tier <= node_tier`, a rarity is rolled from the
/// weight table, and a uniform pick lands on one item of that rarity.
pub fn roll_loot(node_tier: u8, is_boss: bool, rng: &mut impl Rng) -> Option<Item> {
    if rng.gen::<f64>() > drop_chance(is_boss) {
        return None;
    }

    let pool: Vec<Item> = catalog::item_catalog()
        .into_iter()
        .filter(|item| item.tier <= node_tier)
        .collect();

    let rarity = roll_rarity(&pool, node_tier, is_boss, rng)?;
    let candidates: Vec<&Item> = pool.iter().filter(|item| item.rarity == rarity).collect();
    let pick = rng.gen_range(0..candidates.len());
    Some(candidates[pick].clone())
}
