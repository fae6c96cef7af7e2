use crate::achievements::Achievements;
use crate::catalog;
use crate::core::constants::STARTER_NODE_ID;
use crate::core::levels::level_for_xp;
use crate::items::equipment::Equipment;
use crate::items::types::Item;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Self-assessed starting point chosen during onboarding. Decides which
/// skill nodes begin unlocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerClass {
    Beginner,
    Practitioner,
    Builder,
    Architect,
}

impl PlayerClass {
    /// Skill nodes this class starts with on top of the starter node.
    /// Higher classes skip material they are assumed to already know.
    pub fn head_start_nodes(&self) -> &'static [&'static str] {
        match self {
            PlayerClass::Beginner => &[],
            PlayerClass::Practitioner => &["prompting", "projects-memory"],
            PlayerClass::Builder => &[
                "prompting",
                "projects-memory",
                "context-eng",
                "artifacts",
                "api-sdk",
                "cli-agent",
            ],
            PlayerClass::Architect => &[
                "prompting",
                "projects-memory",
                "context-eng",
                "artifacts",
                "api-sdk",
                "cli-agent",
                "tool-use",
            ],
        }
    }
}

/// What the player wants out of the curriculum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetMastery {
    Casual,
    Power,
    Developer,
    AgentDesigner,
}

/// Daily practice budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DailyTime {
    Min15,
    Min30,
    Min60,
}

impl DailyTime {
    pub fn minutes(&self) -> u32 {
        match self {
            DailyTime::Min15 => 15,
            DailyTime::Min30 => 30,
            DailyTime::Min60 => 60,
        }
    }
}

/// Horizon the player set for reaching their target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeFrame {
    TwoWeeks,
    OneMonth,
    ThreeMonths,
}

/// Onboarding answers, captured once when the profile is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub id: String,
    pub name: String,
    pub class: PlayerClass,
    pub target: TargetMastery,
    pub daily_time: DailyTime,
    pub time_frame: TimeFrame,
    pub created_at: i64,
}

impl PlayerProfile {
    pub fn new(
        name: String,
        class: PlayerClass,
        target: TargetMastery,
        daily_time: DailyTime,
        time_frame: TimeFrame,
        created_at: i64,
    ) -> Self {
        use uuid::Uuid;

        Self {
            id: Uuid::new_v4().to_string(),
            name,
            class,
            target,
            daily_time,
            time_frame,
            created_at,
        }
    }
}

/// Per-quest completion record. Replays overwrite the record wholesale;
/// `completed` never flips back to false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestProgress {
    pub completed: bool,
    /// Battle score (0-100) from the most recent winning run.
    pub score: u32,
    /// Unix seconds of the most recent completion.
    pub completed_at: i64,
}

const STARTER_WEAPON_ID: &str = "wooden-prompt";
const STARTER_ARMOR_ID: &str = "basic-shield";

/// Loadout every profile starts with. Saves from before gear existed land
/// here too, via the serde defaults.
fn starter_equipment() -> Equipment {
    let mut equipment = Equipment::new();
    if let Some(weapon) = catalog::get_item(STARTER_WEAPON_ID) {
        equipment.equip(weapon);
    }
    if let Some(armor) = catalog::get_item(STARTER_ARMOR_ID) {
        equipment.equip(armor);
    }
    equipment
}

/// Full persistent player state, the serialization root for saves.
///
/// IMPORTANT: The container-level `#[serde(default)]` plus the `Default` impl
/// is what keeps older saves loadable after new fields are added. Every new
/// field must get a sensible value in `Default`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameState {
    pub profile: Option<PlayerProfile>,
    /// Lifetime XP, never reduced.
    pub xp: u32,
    /// Consecutive active days, counting today.
    pub streak: u32,
    pub last_active_date: Option<NaiveDate>,
    pub completed_quests: HashMap<String, QuestProgress>,
    /// Node ids open on the map. Grow-only.
    pub unlocked_nodes: Vec<String>,
    pub achievements: Achievements,
    pub equipment: Equipment,
    /// Loot that dropped but was not equipped. Drops are never auto-equipped.
    pub inventory: Vec<Item>,
    pub gold: u32,
    pub total_quest_attempts: u32,
    pub perfect_quests: u32,
    pub total_kills: u32,
    pub max_combo_ever: u32,
    pub sound_enabled: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            profile: None,
            xp: 0,
            streak: 0,
            last_active_date: None,
            completed_quests: HashMap::new(),
            unlocked_nodes: vec![STARTER_NODE_ID.to_string()],
            achievements: Achievements::default(),
            equipment: starter_equipment(),
            inventory: Vec::new(),
            gold: 0,
            total_quest_attempts: 0,
            perfect_quests: 0,
            total_kills: 0,
            max_combo_ever: 0,
            sound_enabled: true,
        }
    }
}

impl GameState {
    /// Creates the state for a freshly onboarded profile. The class decides
    /// which nodes start unlocked; everyone gets the same starter loadout.
    pub fn new_game(profile: PlayerProfile, today: NaiveDate) -> Self {
        let mut unlocked_nodes = vec![STARTER_NODE_ID.to_string()];
        for node_id in profile.class.head_start_nodes() {
            unlocked_nodes.push((*node_id).to_string());
        }

        Self {
            profile: Some(profile),
            streak: 1,
            last_active_date: Some(today),
            unlocked_nodes,
            ..Self::default()
        }
    }

    /// Current level derived from lifetime XP.
    pub fn level(&self) -> u32 {
        level_for_xp(self.xp)
    }

    /// True when the quest has a completed record.
    pub fn is_quest_completed(&self, quest_id: &str) -> bool {
        self.completed_quests
            .get(quest_id)
            .is_some_and(|progress| progress.completed)
    }

    /// Number of distinct quests completed at least once.
    pub fn completed_quest_count(&self) -> usize {
        self.completed_quests
            .values()
            .filter(|progress| progress.completed)
            .count()
    }

    /// True when the node is open on the map.
    pub fn is_node_unlocked(&self, node_id: &str) -> bool {
        self.unlocked_nodes.iter().any(|id| id == node_id)
    }
}
