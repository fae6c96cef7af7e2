use rand::Rng;

use crate::catalog::Enemy;
use crate::core::constants::*;
use crate::items::PlayerStats;

use super::types::{BattleAction, BattleActionKind, BattleError, BattleState, BattleStatus};

/// Starts a fresh encounter with both sides at full HP.
pub fn init_battle(stats: &PlayerStats, enemy: &Enemy) -> BattleState {
    BattleState {
        player_hp: stats.max_hp,
        player_max_hp: stats.max_hp,
        enemy_hp: enemy.hp,
        enemy_max_hp: enemy.hp,
        combo: 0,
        max_combo: 0,
        turn: 0,
        status: BattleStatus::Fighting,
        last_action: None,
        phase_idx: 0,
    }
}

/// Resolves one answered question into a turn of combat.
///
/// A correct answer lands a player attack: combo grows, the combo
/// multiplier and a crit roll scale the damage, and the enemy's defense
/// (halved for phased enemies) shaves some of it off. A wrong answer
/// breaks the combo and hands the enemy a counterattack at the current
/// phase's attack multiplier. Either side hitting 0 HP ends the battle.
pub fn resolve_answer(
    state: &BattleState,
    correct: bool,
    stats: &PlayerStats,
    enemy: &Enemy,
    rng: &mut impl Rng,
) -> Result<(BattleState, BattleAction), BattleError> {
    if state.is_over() {
        return Err(BattleError::BattleOver);
    }

    let mut next = state.clone();
    next.turn += 1;

    let action = if correct {
        next.combo += 1;
        next.max_combo = next.max_combo.max(next.combo);

        // Damage = attack × combo multiplier × crit, minus 30% of the
        // enemy's effective defense, floored at MIN_DAMAGE
        let multiplier = 1.0
            + (next.combo - 1) as f64 * COMBO_DAMAGE_STEP
            + stats.combo_bonus as f64 * COMBO_BONUS_STEP;
        let is_crit = rng.gen_range(0..100) < stats.crit_chance;
        let crit_multiplier = if is_crit { CRIT_MULTIPLIER } else { 1.0 };
        let base_damage = stats.attack as f64 * multiplier * crit_multiplier;

        let effective_defense = if enemy.has_phases() {
            enemy.defense as f64 * PHASED_DEFENSE_FACTOR
        } else {
            enemy.defense as f64
        };
        let damage = (base_damage - effective_defense * ENEMY_DEFENSE_FACTOR)
            .round()
            .max(MIN_DAMAGE as f64) as u32;

        next.enemy_hp = next.enemy_hp.saturating_sub(damage);

        if next.enemy_hp == 0 {
            next.status = BattleStatus::Victory;
        } else if enemy.has_phases() {
            // Phases only move forward. Scan from the angriest phase down
            // and take the first one whose threshold the HP bar crossed.
            let hp_percent = next.enemy_hp as f64 / next.enemy_max_hp as f64 * 100.0;
            for idx in (0..enemy.phases.len()).rev() {
                if hp_percent <= enemy.phases[idx].hp_threshold as f64 && idx > next.phase_idx {
                    next.phase_idx = idx;
                    break;
                }
            }
        }

        let kind = if next.status == BattleStatus::Victory {
            BattleActionKind::Victory
        } else if is_crit {
            BattleActionKind::CriticalHit
        } else {
            BattleActionKind::PlayerAttack
        };
        BattleAction {
            kind,
            damage,
            is_crit,
            combo: next.combo,
        }
    } else {
        next.combo = 0;

        let effective_attack = enemy.attack as f64 * enemy.phase_multiplier(next.phase_idx);
        let damage = (effective_attack - stats.defense as f64 * PLAYER_DEFENSE_FACTOR)
            .round()
            .max(MIN_DAMAGE as f64) as u32;

        next.player_hp = next.player_hp.saturating_sub(damage);

        if next.player_hp == 0 {
            next.status = BattleStatus::Defeat;
        }

        let kind = if next.status == BattleStatus::Defeat {
            BattleActionKind::Defeat
        } else {
            BattleActionKind::EnemyAttack
        };
        BattleAction {
            kind,
            damage,
            is_crit: false,
            combo: 0,
        }
    };

    next.last_action = Some(action);
    Ok((next, action))
}

/// Score for a finished battle: 70% weight on remaining HP, a combo
/// bonus capped at 20, and a flat base for winning. Anything short of
/// victory scores zero.
pub fn calculate_score(state: &BattleState) -> u32 {
    if state.status != BattleStatus::Victory {
        return 0;
    }
    let combo_bonus = (state.max_combo * SCORE_PER_COMBO).min(SCORE_COMBO_CAP);
    let raw = state.player_hp_percent() * SCORE_HP_WEIGHT
        + combo_bonus as f64
        + SCORE_VICTORY_BASE as f64;
    (raw.round() as u32).min(PERFECT_SCORE)
}

/// Outcome of a battle whose question deck ran dry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExhaustedOutcome {
    pub state: BattleState,
    pub score: u32,
    pub xp_award: u32,
}

/// Ends a still-running battle that has no questions left. An enemy
/// already worn down below the partial-victory threshold counts as a
/// win at reduced XP; otherwise the encounter is a defeat worth nothing.
pub fn resolve_exhausted(
    state: &BattleState,
    base_xp: u32,
) -> Result<ExhaustedOutcome, BattleError> {
    if state.is_over() {
        return Err(BattleError::BattleOver);
    }

    let mut terminal = state.clone();
    if terminal.enemy_hp_fraction() < PARTIAL_VICTORY_HP_FRACTION {
        terminal.status = BattleStatus::Victory;
        let score = calculate_score(&terminal);
        let xp_award = (base_xp as f64 * PARTIAL_VICTORY_XP_SCALE).round() as u32;
        Ok(ExhaustedOutcome {
            state: terminal,
            score,
            xp_award,
        })
    } else {
        terminal.status = BattleStatus::Defeat;
        Ok(ExhaustedOutcome {
            state: terminal,
            score: 0,
            xp_award: 0,
        })
    }
}
