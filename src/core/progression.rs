use crate::achievements::{check_achievements, AchievementId};
use crate::catalog;
use crate::combat::types::{BattleState, BattleStatus};
use crate::core::constants::{
    GOLD_BOSS_BONUS, GOLD_PER_XP, GOLD_QUEST_BONUS, PERFECT_SCORE, STREAK_BONUS_THRESHOLD,
    STREAK_BONUS_XP,
};
use crate::core::game_state::{GameState, QuestProgress};
use crate::core::levels::level_info;
use crate::items::drops::roll_loot;
use crate::items::types::Item;
use chrono::NaiveDate;
use rand::Rng;

/// What a finished encounter feeds into progression.
#[derive(Debug, Clone, PartialEq)]
pub struct EncounterOutcome {
    pub quest_id: String,
    /// Quest XP before streak and gear bonuses.
    pub base_xp: u32,
    /// Battle score, 0-100.
    pub score: u32,
    /// Final battle snapshot; None for encounters resolved without combat.
    pub battle: Option<BattleState>,
}

/// Everything the player walked away with, plus the milestones crossed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EncounterRewards {
    /// Total XP granted, bonuses included.
    pub xp_earned: u32,
    /// The streak and gear share of `xp_earned`.
    pub bonus_xp: u32,
    pub gold_earned: u32,
    pub loot: Option<Item>,
    pub events: Vec<ProgressionEvent>,
}

/// Milestones crossed while applying an encounter. The caller decides how
/// to present them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressionEvent {
    LevelUp { level: u32, title: &'static str },
    NodeUnlocked { node_id: String },
    AchievementUnlocked { id: AchievementId },
}

/// Advances the daily streak for activity on `today`. Consecutive days grow
/// the streak, a gap resets it to 1, and repeat activity on the same day
/// changes nothing.
pub fn update_streak(state: &GameState, today: NaiveDate) -> GameState {
    let mut next = state.clone();
    if next.last_active_date == Some(today) {
        return next;
    }

    let continues = match (next.last_active_date, today.pred_opt()) {
        (Some(last), Some(yesterday)) => last == yesterday,
        _ => false,
    };
    next.streak = if continues { next.streak + 1 } else { 1 };
    next.last_active_date = Some(today);
    next
}

/// Applies a victorious encounter to the save and reports the rewards.
///
/// Defeats and zero-score outcomes return the state untouched: completion
/// never reverts and a lost battle costs nothing. Everything else lands in
/// one pass, so the returned snapshot is always internally consistent.
pub fn apply_encounter_outcome(
    state: &GameState,
    outcome: &EncounterOutcome,
    today: NaiveDate,
    now_ts: i64,
    rng: &mut impl Rng,
) -> (GameState, EncounterRewards) {
    let victorious = outcome
        .battle
        .as_ref()
        .map_or(true, |battle| battle.status == BattleStatus::Victory);
    if outcome.score == 0 || !victorious {
        return (state.clone(), EncounterRewards::default());
    }

    let old_level = state.level();
    let mut next = update_streak(state, today);
    let mut events = Vec::new();

    // XP with streak and gear bonuses
    let streak_bonus = if next.streak >= STREAK_BONUS_THRESHOLD {
        STREAK_BONUS_XP
    } else {
        0
    };
    let equip_bonus =
        (outcome.base_xp as f64 * next.equipment.xp_bonus_percent() as f64 / 100.0).round() as u32;
    let bonus_xp = streak_bonus + equip_bonus;
    let xp_earned = outcome.base_xp + bonus_xp;
    next.xp += xp_earned;

    // Completion record; replays overwrite
    next.completed_quests.insert(
        outcome.quest_id.clone(),
        QuestProgress {
            completed: true,
            score: outcome.score,
            completed_at: now_ts,
        },
    );

    next.total_quest_attempts += 1;
    if outcome.score == PERFECT_SCORE {
        next.perfect_quests += 1;
    }

    if let Some(battle) = &outcome.battle {
        next.total_kills += 1;
        next.max_combo_ever = next.max_combo_ever.max(battle.max_combo);
    }

    // Loot and gold; the quest's node decides the drop table
    let quest_info = catalog::get_quest(&outcome.quest_id);
    let is_boss_quest = quest_info.as_ref().is_some_and(|(_, quest)| quest.is_boss());

    let loot = quest_info
        .as_ref()
        .and_then(|(node, quest)| roll_loot(node.tier.loot_tier(), quest.is_boss(), rng));
    if let Some(item) = &loot {
        next.inventory.push(item.clone());
    }

    let gold_earned = (outcome.base_xp as f64 * GOLD_PER_XP).round() as u32
        + if is_boss_quest {
            GOLD_BOSS_BONUS
        } else {
            GOLD_QUEST_BONUS
        };
    next.gold += gold_earned;

    // Unlock scan across the whole catalog. Eligibility reads only the
    // updated quest map, so a node unlocked here never enables another in
    // the same pass.
    for node in catalog::get_all_nodes() {
        if next.is_node_unlocked(node.id) {
            continue;
        }
        let all_reqs_met = node.requires.iter().all(|req_id| {
            match catalog::get_node(req_id) {
                Some(req_node) => {
                    let completed_count = req_node
                        .quests
                        .iter()
                        .filter(|quest| next.is_quest_completed(quest.id))
                        .count();
                    // At least half the prerequisite's quests, rounded up
                    completed_count >= (req_node.quests.len() + 1) / 2
                }
                None => false,
            }
        });
        if all_reqs_met {
            next.unlocked_nodes.push(node.id.to_string());
            events.push(ProgressionEvent::NodeUnlocked {
                node_id: node.id.to_string(),
            });
        }
    }

    let new_level = next.level();
    if new_level > old_level {
        events.push(ProgressionEvent::LevelUp {
            level: new_level,
            title: level_info(next.xp).title,
        });
    }

    for id in check_achievements(&next) {
        next.achievements.unlock(id, now_ts);
        events.push(ProgressionEvent::AchievementUnlocked { id });
    }

    let rewards = EncounterRewards {
        xp_earned,
        bonus_xp,
        gold_earned,
        loot,
        events,
    };
    (next, rewards)
}
