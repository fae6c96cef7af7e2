//! Achievement system module.
//!
//! Tracks milestone unlocks for a single player profile. Unlocks live
//! inside `GameState` and persist with the rest of the save.

pub mod data;
pub mod logic;
pub mod types;

pub use data::{get_achievement_def, ALL_ACHIEVEMENTS};
pub use logic::check_achievements;
pub use types::{AchievementDef, AchievementId, Achievements, UnlockedAchievement};
