//! Static achievement definitions.

use super::types::{AchievementDef, AchievementId};

/// All achievement definitions in display order.
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    AchievementDef {
        id: AchievementId::FirstQuest,
        name: "First Steps",
        description: "Complete your first quest",
        icon: "🎯",
    },
    AchievementDef {
        id: AchievementId::FiveQuests,
        name: "Quest Hunter",
        description: "Complete 5 quests",
        icon: "🗡️",
    },
    AchievementDef {
        id: AchievementId::TenQuests,
        name: "Veteran",
        description: "Complete 10 quests",
        icon: "🛡️",
    },
    AchievementDef {
        id: AchievementId::PerfectScore,
        name: "Flawless",
        description: "Score 100% on any quest",
        icon: "💎",
    },
    AchievementDef {
        id: AchievementId::Streak3,
        name: "On Fire",
        description: "Maintain a 3-day streak",
        icon: "🔥",
    },
    AchievementDef {
        id: AchievementId::Streak7,
        name: "Unstoppable",
        description: "Maintain a 7-day streak",
        icon: "⚡",
    },
    AchievementDef {
        id: AchievementId::Level5,
        name: "Ascended",
        description: "Reach Architect level",
        icon: "🌟",
    },
    AchievementDef {
        id: AchievementId::BossSlayer,
        name: "Boss Slayer",
        description: "Complete a Boss quest",
        icon: "🐉",
    },
    AchievementDef {
        id: AchievementId::PromptMaster,
        name: "Prompt Architect",
        description: "Complete all Prompt Engineering quests",
        icon: "✍️",
    },
    AchievementDef {
        id: AchievementId::AgentMaster,
        name: "Agent Master",
        description: "Complete all Agent Design quests",
        icon: "🤖",
    },
];

/// Look up the static definition for an achievement id.
pub fn get_achievement_def(id: AchievementId) -> Option<&'static AchievementDef> {
    ALL_ACHIEVEMENTS.iter().find(|def| def.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_achievements_have_unique_ids() {
        use std::collections::HashSet;
        let mut ids = HashSet::new();
        for achievement in ALL_ACHIEVEMENTS {
            assert!(
                ids.insert(achievement.id),
                "Duplicate achievement ID: {:?}",
                achievement.id
            );
        }
    }

    #[test]
    fn test_every_id_has_a_definition() {
        assert_eq!(ALL_ACHIEVEMENTS.len(), 10);
        for id in [
            AchievementId::FirstQuest,
            AchievementId::FiveQuests,
            AchievementId::TenQuests,
            AchievementId::PerfectScore,
            AchievementId::Streak3,
            AchievementId::Streak7,
            AchievementId::Level5,
            AchievementId::BossSlayer,
            AchievementId::PromptMaster,
            AchievementId::AgentMaster,
        ] {
            assert!(get_achievement_def(id).is_some(), "missing def for {id:?}");
        }
    }

    #[test]
    fn test_get_achievement_def() {
        let def = get_achievement_def(AchievementId::FirstQuest).unwrap();
        assert_eq!(def.name, "First Steps");
        assert_eq!(def.icon, "🎯");
    }
}
