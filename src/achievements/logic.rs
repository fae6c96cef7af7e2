use super::types::AchievementId;
use crate::catalog;
use crate::core::game_state::GameState;

/// Scans persistent state and returns every achievement that is earned but
/// not yet unlocked. Conditions only read state that survives saves, so a
/// scan after each victorious encounter never misses one.
pub fn check_achievements(state: &GameState) -> Vec<AchievementId> {
    let mut earned = Vec::new();
    let mut try_unlock = |id: AchievementId| {
        if !state.achievements.is_unlocked(id) {
            earned.push(id);
        }
    };

    let completed = state.completed_quest_count();

    // Quest count milestones: 1, 5, 10
    if completed >= 1 {
        try_unlock(AchievementId::FirstQuest);
    }
    if completed >= 5 {
        try_unlock(AchievementId::FiveQuests);
    }
    if completed >= 10 {
        try_unlock(AchievementId::TenQuests);
    }

    if state.perfect_quests >= 1 {
        try_unlock(AchievementId::PerfectScore);
    }

    // Streak milestones: 3, 7
    if state.streak >= 3 {
        try_unlock(AchievementId::Streak3);
    }
    if state.streak >= 7 {
        try_unlock(AchievementId::Streak7);
    }

    // Level 5 carries the Architect title
    if state.level() >= 5 {
        try_unlock(AchievementId::Level5);
    }

    if any_boss_defeated(state) {
        try_unlock(AchievementId::BossSlayer);
    }
    if node_fully_completed(state, "prompting") {
        try_unlock(AchievementId::PromptMaster);
    }
    if node_fully_completed(state, "agent-design") {
        try_unlock(AchievementId::AgentMaster);
    }

    earned
}

/// True when any boss quest in the catalog has been beaten.
fn any_boss_defeated(state: &GameState) -> bool {
    catalog::get_all_nodes().iter().any(|node| {
        node.quests
            .iter()
            .any(|quest| quest.is_boss() && state.is_quest_completed(quest.id))
    })
}

/// True when every quest of the node is completed. Unknown nodes never count.
fn node_fully_completed(state: &GameState, node_id: &str) -> bool {
    match catalog::get_node(node_id) {
        Some(node) => node
            .quests
            .iter()
            .all(|quest| state.is_quest_completed(quest.id)),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::game_state::QuestProgress;

    fn complete(state: &mut GameState, quest_id: &str, score: u32) {
        state.completed_quests.insert(
            quest_id.to_string(),
            QuestProgress {
                completed: true,
                score,
                completed_at: 1_700_000_000,
            },
        );
    }

    #[test]
    fn test_fresh_state_earns_nothing() {
        let state = GameState::default();
        assert!(check_achievements(&state).is_empty());
    }

    #[test]
    fn test_first_quest() {
        let mut state = GameState::default();
        complete(&mut state, "basics-1", 80);

        assert_eq!(check_achievements(&state), vec![AchievementId::FirstQuest]);
    }

    #[test]
    fn test_quest_count_milestones() {
        let mut state = GameState::default();
        for i in 0..5 {
            complete(&mut state, &format!("q-{i}"), 70);
        }

        let earned = check_achievements(&state);
        assert!(earned.contains(&AchievementId::FirstQuest));
        assert!(earned.contains(&AchievementId::FiveQuests));
        assert!(!earned.contains(&AchievementId::TenQuests));
    }

    #[test]
    fn test_already_unlocked_ids_are_not_returned() {
        let mut state = GameState::default();
        complete(&mut state, "basics-1", 80);
        state
            .achievements
            .unlock(AchievementId::FirstQuest, 1_700_000_000);

        assert!(check_achievements(&state).is_empty());
    }

    #[test]
    fn test_perfect_score() {
        let mut state = GameState::default();
        state.perfect_quests = 1;

        assert_eq!(
            check_achievements(&state),
            vec![AchievementId::PerfectScore]
        );
    }

    #[test]
    fn test_streak_milestones() {
        let mut state = GameState::default();
        state.streak = 3;
        assert_eq!(check_achievements(&state), vec![AchievementId::Streak3]);

        state.streak = 7;
        let earned = check_achievements(&state);
        assert!(earned.contains(&AchievementId::Streak3));
        assert!(earned.contains(&AchievementId::Streak7));
    }

    #[test]
    fn test_ascended_at_architect_level() {
        let mut state = GameState::default();
        state.xp = 3499;
        assert!(check_achievements(&state).is_empty());

        // 3500 xp is the Architect threshold (level 5)
        state.xp = 3500;
        assert_eq!(check_achievements(&state), vec![AchievementId::Level5]);
    }

    #[test]
    fn test_boss_slayer_on_boss_quest() {
        let mut state = GameState::default();
        complete(&mut state, "agent-1", 90);
        assert!(!check_achievements(&state).contains(&AchievementId::BossSlayer));

        complete(&mut state, "agent-2", 90);
        assert!(check_achievements(&state).contains(&AchievementId::BossSlayer));
    }

    #[test]
    fn test_prompt_master_requires_every_node_quest() {
        let mut state = GameState::default();
        complete(&mut state, "prompt-1", 80);
        assert!(!check_achievements(&state).contains(&AchievementId::PromptMaster));

        complete(&mut state, "prompt-2", 80);
        assert!(check_achievements(&state).contains(&AchievementId::PromptMaster));
    }

    #[test]
    fn test_agent_master_requires_every_node_quest() {
        let mut state = GameState::default();
        complete(&mut state, "agent-1", 80);
        complete(&mut state, "agent-2", 80);

        let earned = check_achievements(&state);
        assert!(earned.contains(&AchievementId::AgentMaster));
        // The boss quest also counts toward Boss Slayer
        assert!(earned.contains(&AchievementId::BossSlayer));
    }
}
