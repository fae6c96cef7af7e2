//! Skill tree, quest, and enemy type definitions.

/// Position of a skill node along the learning track. Also decides which
/// loot tier its encounters pull from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeTier {
    Learn,
    Understand,
    Explore,
    Practice,
}

impl NodeTier {
    /// Loot tier fed into the drop tables (1 = starter gear, 4 = endgame).
    pub fn loot_tier(&self) -> u8 {
        match self {
            NodeTier::Learn => 1,
            NodeTier::Understand => 2,
            NodeTier::Explore => 3,
            NodeTier::Practice => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestType {
    Learn,
    Lab,
    Challenge,
    Boss,
}

#[derive(Debug, Clone)]
pub struct QuestDef {
    pub id: &'static str,
    pub title: &'static str,
    pub quest_type: QuestType,
    pub xp: u32,
    /// How many questions the quest carries; battles end early when the
    /// pool runs dry.
    pub question_count: u32,
}

impl QuestDef {
    pub fn is_boss(&self) -> bool {
        self.quest_type == QuestType::Boss
    }
}

/// A node in the skill tree. Unlocks when every prerequisite node has at
/// least half of its quests completed.
#[derive(Debug, Clone)]
pub struct SkillNode {
    pub id: &'static str,
    pub title: &'static str,
    pub tier: NodeTier,
    pub requires: &'static [&'static str],
    pub quests: Vec<QuestDef>,
}

impl SkillNode {
    pub fn quest_count(&self) -> usize {
        self.quests.len()
    }
}

/// One stage of a boss fight. Becomes active once the boss's HP percentage
/// falls to `hp_threshold` or below.
#[derive(Debug, Clone, Copy)]
pub struct BossPhase {
    pub name: &'static str,
    pub atk_multiplier: f64,
    pub hp_threshold: u32,
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: &'static str,
    pub name: &'static str,
    pub node_id: &'static str,
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub is_boss: bool,
    /// Empty for regular enemies; bosses list phase 0 first at threshold 100.
    pub phases: &'static [BossPhase],
    pub taunt: &'static str,
    pub death_quote: &'static str,
}

impl Enemy {
    pub fn has_phases(&self) -> bool {
        !self.phases.is_empty()
    }

    /// Attack multiplier for the active phase; 1.0 for unphased enemies.
    pub fn phase_multiplier(&self, phase_idx: usize) -> f64 {
        self.phases.get(phase_idx).map_or(1.0, |p| p.atk_multiplier)
    }

    /// Display name for the active phase; falls back to the base name.
    pub fn phase_name(&self, phase_idx: usize) -> &'static str {
        self.phases.get(phase_idx).map_or(self.name, |p| p.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_tier_loot_mapping() {
        assert_eq!(NodeTier::Learn.loot_tier(), 1);
        assert_eq!(NodeTier::Understand.loot_tier(), 2);
        assert_eq!(NodeTier::Explore.loot_tier(), 3);
        assert_eq!(NodeTier::Practice.loot_tier(), 4);
    }

    #[test]
    fn test_quest_is_boss() {
        let quest = QuestDef {
            id: "q",
            title: "Q",
            quest_type: QuestType::Boss,
            xp: 500,
            question_count: 5,
        };
        assert!(quest.is_boss());

        let quest = QuestDef {
            quest_type: QuestType::Lab,
            ..quest
        };
        assert!(!quest.is_boss());
    }

    #[test]
    fn test_unphased_enemy_multiplier() {
        let enemy = Enemy {
            id: "e",
            name: "Enemy",
            node_id: "n",
            hp: 50,
            attack: 10,
            defense: 3,
            is_boss: false,
            phases: &[],
            taunt: "",
            death_quote: "",
        };
        assert!(!enemy.has_phases());
        assert!((enemy.phase_multiplier(0) - 1.0).abs() < f64::EPSILON);
        assert!((enemy.phase_multiplier(7) - 1.0).abs() < f64::EPSILON);
        assert_eq!(enemy.phase_name(3), "Enemy");
    }

    #[test]
    fn test_phased_enemy_multiplier() {
        const PHASES: &[BossPhase] = &[
            BossPhase {
                name: "Calm",
                atk_multiplier: 1.0,
                hp_threshold: 100,
            },
            BossPhase {
                name: "Enraged",
                atk_multiplier: 1.5,
                hp_threshold: 40,
            },
        ];
        let enemy = Enemy {
            id: "b",
            name: "Boss",
            node_id: "n",
            hp: 80,
            attack: 15,
            defense: 5,
            is_boss: true,
            phases: PHASES,
            taunt: "",
            death_quote: "",
        };
        assert!(enemy.has_phases());
        assert!((enemy.phase_multiplier(1) - 1.5).abs() < f64::EPSILON);
        assert_eq!(enemy.phase_name(1), "Enraged");
        // Out-of-range phase index falls back rather than panicking
        assert!((enemy.phase_multiplier(9) - 1.0).abs() < f64::EPSILON);
    }
}
