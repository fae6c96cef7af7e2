//! Achievement system types and data structures.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unique identifier for each achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementId {
    FirstQuest,   // 1 quest completed
    FiveQuests,   // 5 quests
    TenQuests,    // 10 quests
    PerfectScore, // any 100% score
    Streak3,      // 3-day streak
    Streak7,      // 7-day streak
    Level5,       // reach the Architect row of the level table
    BossSlayer,   // any boss quest completed
    PromptMaster, // every quest in the prompting node
    AgentMaster,  // every quest in the agent-design node
}

/// Static definition of an achievement.
#[derive(Debug, Clone)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// Record of an unlocked achievement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockedAchievement {
    pub unlocked_at: i64,
}

/// Unlocked achievements, saved as part of the game state. Grants are
/// permanent: nothing here ever removes an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Achievements {
    pub unlocked: HashMap<AchievementId, UnlockedAchievement>,
}

impl Achievements {
    /// Check if an achievement is unlocked.
    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.unlocked.contains_key(&id)
    }

    /// Unlock an achievement at the given timestamp. Returns true if
    /// newly unlocked, false if it was already granted.
    pub fn unlock(&mut self, id: AchievementId, now_ts: i64) -> bool {
        if self.is_unlocked(id) {
            return false;
        }
        self.unlocked
            .insert(id, UnlockedAchievement { unlocked_at: now_ts });
        true
    }

    /// Get the number of unlocked achievements.
    pub fn unlocked_count(&self) -> usize {
        self.unlocked.len()
    }

    /// Get the total number of achievements.
    pub fn total_count(&self) -> usize {
        super::data::ALL_ACHIEVEMENTS.len()
    }

    /// Get unlock percentage (0.0 - 100.0).
    pub fn unlock_percentage(&self) -> f32 {
        let total = self.total_count();
        if total == 0 {
            return 0.0;
        }
        (self.unlocked_count() as f32 / total as f32) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlock_is_idempotent() {
        let mut achievements = Achievements::default();

        assert!(achievements.unlock(AchievementId::FirstQuest, 1000));
        assert!(!achievements.unlock(AchievementId::FirstQuest, 2000));

        // The original grant timestamp is kept
        let record = &achievements.unlocked[&AchievementId::FirstQuest];
        assert_eq!(record.unlocked_at, 1000);
        assert_eq!(achievements.unlocked_count(), 1);
    }

    #[test]
    fn test_is_unlocked() {
        let mut achievements = Achievements::default();
        assert!(!achievements.is_unlocked(AchievementId::BossSlayer));

        achievements.unlock(AchievementId::BossSlayer, 5);
        assert!(achievements.is_unlocked(AchievementId::BossSlayer));
    }

    #[test]
    fn test_unlock_percentage() {
        let mut achievements = Achievements::default();
        assert_eq!(achievements.unlock_percentage(), 0.0);

        achievements.unlock(AchievementId::FirstQuest, 0);
        let expected = 1.0 / achievements.total_count() as f32 * 100.0;
        assert_eq!(achievements.unlock_percentage(), expected);
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut achievements = Achievements::default();
        achievements.unlock(AchievementId::Streak3, 1_700_000_000);
        achievements.unlock(AchievementId::Level5, 1_700_000_100);

        let json = serde_json::to_string(&achievements).unwrap();
        let loaded: Achievements = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded, achievements);
        assert_eq!(
            loaded.unlocked[&AchievementId::Streak3].unlocked_at,
            1_700_000_000
        );
    }
}
