//! Battle engine integration tests
//!
//! Drives full battles against the built-in enemy catalog with stats
//! computed from real equipment, covering victory, defeat, boss phases,
//! and the out-of-questions fallback.

use questline::catalog::{self, Enemy};
use questline::combat::{
    calculate_score, init_battle, resolve_answer, resolve_exhausted, BattleActionKind,
    BattleStatus,
};
use questline::core::{apply_encounter_outcome, EncounterOutcome, GameState};
use questline::items::{compute_player_stats, PlayerStats};
use chrono::NaiveDate;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn enemy(id: &str) -> Enemy {
    catalog::get_all_enemies()
        .into_iter()
        .find(|e| e.id == id)
        .expect("enemy missing from catalog")
}

/// Stats with no crit chance, so every damage number is exact.
fn crit_free_stats(attack: u32, defense: u32, max_hp: u32) -> PlayerStats {
    PlayerStats {
        attack,
        defense,
        max_hp,
        crit_chance: 0,
        combo_bonus: 0,
    }
}

// ============================================================================
// Starter loadout against the first node
// ============================================================================

#[test]
fn test_starter_stats_feed_the_battle() {
    // Level 1 with the starter loadout: 10+5+2 attack, 3+2 defense, 100+10+5 hp
    let state = GameState::default();
    let stats = compute_player_stats(&state.equipment, 1);
    assert_eq!(stats.attack, 17);
    assert_eq!(stats.defense, 5);
    assert_eq!(stats.max_hp, 115);
    assert_eq!(stats.crit_chance, 5);

    let battle = init_battle(&stats, &enemy("imp-vague"));
    assert_eq!(battle.player_hp, 115);
    assert_eq!(battle.enemy_hp, 40);
    assert_eq!(battle.status, BattleStatus::Fighting);
}

#[test]
fn test_perfect_answers_beat_the_first_enemy() {
    let stats = compute_player_stats(&GameState::default().equipment, 1);
    let foe = enemy("imp-vague");
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let mut battle = init_battle(&stats, &foe);
    while !battle.is_over() {
        let (next, _) = resolve_answer(&battle, true, &stats, &foe, &mut rng).unwrap();
        battle = next;
    }

    assert_eq!(battle.status, BattleStatus::Victory);
    // Without crits the 40 hp imp falls on the third hit (16+19+22);
    // a crit can only shorten that
    assert!(battle.turn >= 2 && battle.turn <= 3, "turn was {}", battle.turn);
    assert_eq!(battle.player_hp, 115, "correct answers never cost hp");
    assert_eq!(battle.max_combo, battle.turn);

    // Full hp: 70 base + 3 per combo + 10 for the win
    let score = calculate_score(&battle);
    assert!((86..=89).contains(&score), "score was {score}");
}

#[test]
fn test_all_wrong_answers_end_in_defeat() {
    let stats = compute_player_stats(&GameState::default().equipment, 1);
    let foe = enemy("dragon-overflow");
    let mut rng = ChaCha8Rng::seed_from_u64(2);

    let mut battle = init_battle(&stats, &foe);
    while !battle.is_over() {
        let (next, action) = resolve_answer(&battle, false, &stats, &foe, &mut rng).unwrap();
        // 18 attack - 5 * 0.4 defense = 16 per counter
        assert_eq!(action.damage, 16);
        battle = next;
    }

    assert_eq!(battle.status, BattleStatus::Defeat);
    assert_eq!(battle.turn, 8, "115 hp survives exactly 7 hits of 16");
    assert_eq!(battle.player_hp, 0);
    assert_eq!(battle.enemy_hp, 100, "wrong answers never hurt the enemy");
    assert_eq!(battle.max_combo, 0);
    assert_eq!(calculate_score(&battle), 0);
}

// ============================================================================
// Scripted mid-battle swings
// ============================================================================

#[test]
fn test_combo_break_and_comeback() {
    let stats = crit_free_stats(20, 10, 100);
    let foe = enemy("slime-copypaste");
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    let mut battle = init_battle(&stats, &foe);

    // Hit: 20 - 3 * 0.3 = 19.1 -> 19
    let (next, action) = resolve_answer(&battle, true, &stats, &foe, &mut rng).unwrap();
    assert_eq!(action.damage, 19);
    assert_eq!(next.enemy_hp, 31);
    battle = next;

    // Miss: counter 10 - 10 * 0.4 = 6, combo resets
    let (next, action) = resolve_answer(&battle, false, &stats, &foe, &mut rng).unwrap();
    assert_eq!(action.kind, BattleActionKind::EnemyAttack);
    assert_eq!(action.damage, 6);
    assert_eq!(next.player_hp, 94);
    assert_eq!(next.combo, 0);
    battle = next;

    // Combo rebuilds from scratch: 19 again, then 23 - 0.9 = 22.1 -> 22
    let (next, action) = resolve_answer(&battle, true, &stats, &foe, &mut rng).unwrap();
    assert_eq!(action.damage, 19);
    assert_eq!(next.enemy_hp, 12);
    battle = next;

    let (next, action) = resolve_answer(&battle, true, &stats, &foe, &mut rng).unwrap();
    assert_eq!(action.kind, BattleActionKind::Victory);
    assert_eq!(next.status, BattleStatus::Victory);
    assert_eq!(next.enemy_hp, 0);
    assert_eq!(next.turn, 4);
    assert_eq!(next.max_combo, 2);

    // 94% hp: 65.8 + 6 combo + 10 victory = 81.8 -> 82
    assert_eq!(calculate_score(&next), 82);
}

// ============================================================================
// Boss phases
// ============================================================================

#[test]
fn test_overlord_phases_escalate_through_the_fight() {
    let stats = crit_free_stats(50, 20, 200);
    let boss = catalog::pick_enemy("agent-design", "agent-2", true).unwrap();
    assert_eq!(boss.id, "overlord-rogue");
    let mut rng = ChaCha8Rng::seed_from_u64(4);

    let mut battle = init_battle(&stats, &boss);

    // Phase 0 counter: 30 * 1.0 - 20 * 0.4 = 22
    let (next, action) = resolve_answer(&battle, false, &stats, &boss, &mut rng).unwrap();
    assert_eq!(action.damage, 22);
    assert_eq!(next.player_hp, 178);
    assert_eq!(next.phase_idx, 0);
    battle = next;

    // Boss defense is halved: 50 - (10 * 0.5) * 0.3 = 48.5 -> 49
    let (next, action) = resolve_answer(&battle, true, &stats, &boss, &mut rng).unwrap();
    assert_eq!(action.damage, 49);
    assert_eq!(next.enemy_hp, 151);
    assert_eq!(next.phase_idx, 0, "75% hp stays in phase 0");
    battle = next;

    // 57.5 - 1.5 = 56; 95/200 crosses the 50% threshold
    let (next, action) = resolve_answer(&battle, true, &stats, &boss, &mut rng).unwrap();
    assert_eq!(action.damage, 56);
    assert_eq!(next.enemy_hp, 95);
    assert_eq!(next.phase_idx, 1);
    battle = next;

    // Phase 1 counter: 30 * 1.4 - 8 = 34
    let (next, action) = resolve_answer(&battle, false, &stats, &boss, &mut rng).unwrap();
    assert_eq!(action.damage, 34);
    assert_eq!(next.player_hp, 144);
    battle = next;

    // Two more hits finish it; the killing blow never re-evaluates phases
    let (next, _) = resolve_answer(&battle, true, &stats, &boss, &mut rng).unwrap();
    assert_eq!(next.enemy_hp, 46);
    assert_eq!(next.phase_idx, 1, "23% is above the 20% singularity threshold");
    battle = next;

    let (next, action) = resolve_answer(&battle, true, &stats, &boss, &mut rng).unwrap();
    assert_eq!(action.kind, BattleActionKind::Victory);
    assert_eq!(next.status, BattleStatus::Victory);
    assert_eq!(next.phase_idx, 1);
}

// ============================================================================
// Out-of-questions fallback
// ============================================================================

#[test]
fn test_exhausted_deck_grants_partial_victory_when_worn_down() {
    let stats = crit_free_stats(20, 10, 100);
    let foe = enemy("lich-loop");
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    // Five correct answers: 18+21+24+27+30 = 120 of 130
    let mut battle = init_battle(&stats, &foe);
    for _ in 0..5 {
        let (next, _) = resolve_answer(&battle, true, &stats, &foe, &mut rng).unwrap();
        battle = next;
    }
    assert_eq!(battle.enemy_hp, 10);
    assert_eq!(battle.status, BattleStatus::Fighting);

    let outcome = resolve_exhausted(&battle, 50).unwrap();
    assert_eq!(outcome.state.status, BattleStatus::Victory);
    // Full hp and a 5 combo: 70 + 15 + 10
    assert_eq!(outcome.score, 95);
    // 60% of the quest's 50 xp
    assert_eq!(outcome.xp_award, 30);
}

#[test]
fn test_exhausted_deck_is_a_defeat_when_enemy_healthy() {
    let stats = crit_free_stats(20, 10, 100);
    let foe = enemy("lich-loop");
    let mut rng = ChaCha8Rng::seed_from_u64(6);

    // Three correct answers leave the lich at 67/130, above the 30% bar
    let mut battle = init_battle(&stats, &foe);
    for _ in 0..3 {
        let (next, _) = resolve_answer(&battle, true, &stats, &foe, &mut rng).unwrap();
        battle = next;
    }
    assert_eq!(battle.enemy_hp, 67);

    let outcome = resolve_exhausted(&battle, 50).unwrap();
    assert_eq!(outcome.state.status, BattleStatus::Defeat);
    assert_eq!(outcome.score, 0);
    assert_eq!(outcome.xp_award, 0);
}

// ============================================================================
// Battle feeding progression end to end
// ============================================================================

#[test]
fn test_won_battle_flows_into_the_save() {
    let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    let state = GameState::default();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    // Fight the real enemy the first quest resolves to
    let (node, quest) = catalog::get_quest("basics-1").unwrap();
    let foe = catalog::pick_enemy(node.id, quest.id, quest.is_boss()).unwrap();
    assert!(!foe.is_boss);

    let stats = compute_player_stats(&state.equipment, state.level());
    let mut battle = init_battle(&stats, &foe);
    while !battle.is_over() {
        let (next, _) = resolve_answer(&battle, true, &stats, &foe, &mut rng).unwrap();
        battle = next;
    }
    assert_eq!(battle.status, BattleStatus::Victory);
    assert!(battle.turn <= quest.question_count, "deck never runs dry on a perfect run");

    let outcome = EncounterOutcome {
        quest_id: quest.id.to_string(),
        base_xp: quest.xp,
        score: calculate_score(&battle),
        battle: Some(battle),
    };
    let (next, rewards) = apply_encounter_outcome(&state, &outcome, today, 1_700_000_000, &mut rng);

    assert_eq!(next.xp, 50);
    assert_eq!(rewards.xp_earned, 50);
    assert_eq!(next.gold, 35);
    assert!(next.is_quest_completed("basics-1"));
    assert_eq!(next.total_kills, 1);
    assert!(next
        .achievements
        .is_unlocked(questline::achievements::AchievementId::FirstQuest));
}
