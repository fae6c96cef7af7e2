// Player base stats and per-level scaling
pub const BASE_ATTACK: u32 = 10;
pub const ATTACK_PER_LEVEL: u32 = 2;
pub const BASE_DEFENSE: u32 = 3;
pub const DEFENSE_LEVEL_DIVISOR: u32 = 2; // +1 defense per 2 levels
pub const BASE_MAX_HP: u32 = 100;
pub const HP_PER_LEVEL: u32 = 5;
pub const BASE_CRIT_CHANCE_PERCENT: u32 = 5;

// Combat math
pub const COMBO_DAMAGE_STEP: f64 = 0.15;
pub const COMBO_BONUS_STEP: f64 = 0.05;
pub const CRIT_MULTIPLIER: f64 = 2.0;
pub const ENEMY_DEFENSE_FACTOR: f64 = 0.3;
pub const PLAYER_DEFENSE_FACTOR: f64 = 0.4;
// Phased enemies trade defense for offense: nominal defense is halved
pub const PHASED_DEFENSE_FACTOR: f64 = 0.5;
pub const MIN_DAMAGE: u32 = 1;

// Score formula
pub const SCORE_HP_WEIGHT: f64 = 0.7;
pub const SCORE_PER_COMBO: u32 = 3;
pub const SCORE_COMBO_CAP: u32 = 20;
pub const SCORE_VICTORY_BASE: u32 = 10;
pub const PERFECT_SCORE: u32 = 100;

// Out-of-questions fallback: enemy below this HP fraction counts as a
// partial victory at reduced XP
pub const PARTIAL_VICTORY_HP_FRACTION: f64 = 0.30;
pub const PARTIAL_VICTORY_XP_SCALE: f64 = 0.6;

// Daily streak
pub const STREAK_BONUS_THRESHOLD: u32 = 3;
pub const STREAK_BONUS_XP: u32 = 25;

// Gold rewards
pub const GOLD_PER_XP: f64 = 0.5;
pub const GOLD_BOSS_BONUS: u32 = 50;
pub const GOLD_QUEST_BONUS: u32 = 10;

// Loot drop chances
pub const BOSS_DROP_CHANCE: f64 = 0.85;
pub const QUEST_DROP_CHANCE: f64 = 0.40;

// Rarity weights for loot rolls
pub const WEIGHT_COMMON: u32 = 40;
pub const WEIGHT_UNCOMMON: u32 = 25;
pub const WEIGHT_RARE: u32 = 15;
pub const WEIGHT_EPIC: u32 = 5;
pub const WEIGHT_EPIC_BOSS: u32 = 12;
pub const WEIGHT_LEGENDARY: u32 = 1;
pub const WEIGHT_LEGENDARY_BOSS: u32 = 5;
// Higher node tiers shift weight toward rarer drops
pub const TIER3_RARE_BONUS: u32 = 10;
pub const TIER3_EPIC_BONUS: u32 = 5;
pub const TIER4_EPIC_BONUS: u32 = 10;
pub const TIER4_LEGENDARY_BONUS: u32 = 3;

// Level table: (xp threshold, title, icon, color)
pub const LEVEL_TABLE: [(u32, &str, &str, &str); 7] = [
    (0, "Novice", "🌱", "#94a3b8"),
    (300, "Apprentice", "⚡", "#60a5fa"),
    (800, "Practitioner", "🔧", "#34d399"),
    (1800, "Engineer", "🏗️", "#c084fc"),
    (3500, "Architect", "🧠", "#f59e0b"),
    (5500, "Master", "👑", "#f87171"),
    (8000, "Legend", "✨", "#e879f9"),
];
// Synthetic next threshold at the top tier so progress bars keep rendering
pub const TOP_LEVEL_XP_STEP: u32 = 3000;

// Skill tree
pub const STARTER_NODE_ID: &str = "basics";
