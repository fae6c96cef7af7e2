//! Simulation report generation.

use super::runner::RunStats;
use crate::achievements::{AchievementId, ALL_ACHIEVEMENTS, get_achievement_def};
use crate::catalog;
use std::collections::HashMap;

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_completed: u32,
    pub runs_timed_out: u32,
    pub target_quests: usize,
    pub accuracy: f64,

    // Aggregated stats
    pub avg_final_level: f64,
    pub avg_final_xp: f64,
    pub avg_final_gold: f64,
    pub avg_final_streak: f64,
    pub avg_quests_completed: f64,
    pub avg_attempts: f64,
    pub avg_defeats: f64,
    pub win_rate: f64,
    pub avg_perfect_quests: f64,
    pub avg_items_dropped: f64,
    pub avg_achievements: f64,
    pub avg_days_played: f64,
    pub avg_max_combo: f64,

    // Distribution data
    pub level_distribution: HashMap<u32, u32>,

    // Per-node analysis, catalog order
    pub node_unlock_rates: Vec<(String, f64)>,
    pub node_clear_rates: Vec<(String, f64)>,

    // Per-achievement unlock rates, display order
    pub achievement_rates: Vec<(AchievementId, f64)>,

    // Individual run stats for detailed analysis
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, target_quests: usize, accuracy: f64) -> Self {
        let num_runs = runs.len() as u32;
        let denom = num_runs.max(1) as f64;
        let runs_completed = runs.iter().filter(|r| r.reached_target).count() as u32;
        let runs_timed_out = runs.iter().filter(|r| r.timed_out).count() as u32;

        // Calculate averages
        let avg_final_level = runs.iter().map(|r| r.final_level as f64).sum::<f64>() / denom;
        let avg_final_xp = runs.iter().map(|r| r.final_xp as f64).sum::<f64>() / denom;
        let avg_final_gold = runs.iter().map(|r| r.final_gold as f64).sum::<f64>() / denom;
        let avg_final_streak = runs.iter().map(|r| r.final_streak as f64).sum::<f64>() / denom;
        let avg_quests_completed =
            runs.iter().map(|r| r.quests_completed as f64).sum::<f64>() / denom;
        let avg_attempts = runs.iter().map(|r| r.total_attempts as f64).sum::<f64>() / denom;
        let avg_defeats = runs.iter().map(|r| r.battles_lost as f64).sum::<f64>() / denom;
        let avg_perfect_quests = runs.iter().map(|r| r.perfect_quests as f64).sum::<f64>() / denom;
        let avg_items_dropped = runs.iter().map(|r| r.items_dropped as f64).sum::<f64>() / denom;
        let avg_achievements =
            runs.iter().map(|r| r.achievements.len() as f64).sum::<f64>() / denom;
        let avg_days_played = runs.iter().map(|r| r.days_played as f64).sum::<f64>() / denom;
        let avg_max_combo = runs.iter().map(|r| r.max_combo as f64).sum::<f64>() / denom;

        let total_won: u64 = runs.iter().map(|r| u64::from(r.battles_won)).sum();
        let total_fought: u64 = runs
            .iter()
            .map(|r| u64::from(r.battles_won) + u64::from(r.battles_lost))
            .sum();
        let win_rate = if total_fought == 0 {
            0.0
        } else {
            total_won as f64 / total_fought as f64
        };

        // Level distribution
        let mut level_distribution = HashMap::new();
        for run in &runs {
            *level_distribution.entry(run.final_level).or_insert(0) += 1;
        }

        // Per-node unlock and clear rates, in catalog order
        let mut node_unlock_rates = Vec::new();
        let mut node_clear_rates = Vec::new();
        for node in catalog::get_all_nodes() {
            let unlocked = runs
                .iter()
                .filter(|r| r.unlocked_nodes.iter().any(|id| id == node.id))
                .count();
            let cleared = runs
                .iter()
                .filter(|r| r.cleared_nodes.iter().any(|id| id == node.id))
                .count();
            node_unlock_rates.push((node.id.to_string(), unlocked as f64 / denom));
            node_clear_rates.push((node.id.to_string(), cleared as f64 / denom));
        }

        // Per-achievement unlock rates, in display order
        let achievement_rates: Vec<(AchievementId, f64)> = ALL_ACHIEVEMENTS
            .iter()
            .map(|def| {
                let unlocked = runs
                    .iter()
                    .filter(|r| r.achievements.contains(&def.id))
                    .count();
                (def.id, unlocked as f64 / denom)
            })
            .collect();

        Self {
            num_runs,
            runs_completed,
            runs_timed_out,
            target_quests,
            accuracy,
            avg_final_level,
            avg_final_xp,
            avg_final_gold,
            avg_final_streak,
            avg_quests_completed,
            avg_attempts,
            avg_defeats,
            win_rate,
            avg_perfect_quests,
            avg_items_dropped,
            avg_achievements,
            avg_days_played,
            avg_max_combo,
            level_distribution,
            node_unlock_rates,
            node_clear_rates,
            achievement_rates,
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str(&format!(
            "               (answer accuracy {:.0}%)\n",
            self.accuracy * 100.0
        ));
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} completed, {} timed out\n\n",
            self.num_runs, self.runs_completed, self.runs_timed_out
        ));

        report.push_str("── PROGRESSION ──────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Final Level:     {:.1}\n",
            self.avg_final_level
        ));
        report.push_str(&format!("  Avg Final XP:        {:.0}\n", self.avg_final_xp));
        report.push_str(&format!(
            "  Avg Final Gold:      {:.0}\n",
            self.avg_final_gold
        ));
        report.push_str(&format!(
            "  Avg Quests Cleared:  {:.1} / {}\n",
            self.avg_quests_completed, self.target_quests
        ));
        report.push_str(&format!("  Avg Attempts:        {:.1}\n", self.avg_attempts));
        report.push_str(&format!(
            "  Avg Days Played:     {:.1}\n",
            self.avg_days_played
        ));
        report.push_str(&format!(
            "  Avg Final Streak:    {:.1}\n\n",
            self.avg_final_streak
        ));

        report.push_str("── BATTLES ──────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Win Rate:            {:.1}%\n",
            self.win_rate * 100.0
        ));
        report.push_str(&format!("  Avg Defeats:         {:.1}\n", self.avg_defeats));
        report.push_str(&format!(
            "  Avg Perfect Clears:  {:.1}\n",
            self.avg_perfect_quests
        ));
        report.push_str(&format!(
            "  Avg Best Combo:      {:.1}\n\n",
            self.avg_max_combo
        ));

        report.push_str("── LOOT & MILESTONES ────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Items Dropped:   {:.2}\n",
            self.avg_items_dropped
        ));
        report.push_str(&format!(
            "  Avg Achievements:    {:.1} / {}\n\n",
            self.avg_achievements,
            ALL_ACHIEVEMENTS.len()
        ));

        report.push_str("── NODE COMPLETION ──────────────────────────────────────────────\n");
        report.push_str("  Node              Unlocked   Cleared\n");
        report.push_str("  ────              ────────   ───────\n");
        for (idx, (node_id, unlock_rate)) in self.node_unlock_rates.iter().enumerate() {
            let clear_rate = self
                .node_clear_rates
                .get(idx)
                .map(|(_, rate)| *rate)
                .unwrap_or(0.0);
            let bar_len = (clear_rate * 100.0 / 5.0) as usize;
            let bar: String = "█".repeat(bar_len);
            report.push_str(&format!(
                "  {:<16} {:>7.1}%  {:>7.1}% {}\n",
                node_id,
                unlock_rate * 100.0,
                clear_rate * 100.0,
                bar
            ));
        }
        report.push('\n');

        report.push_str("── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
        let completion_rate = (self.runs_completed as f64 / self.num_runs.max(1) as f64) * 100.0;
        let battle_rating = if self.win_rate > 0.95 {
            "TOO EASY - Battles are rarely lost"
        } else if self.win_rate > 0.75 {
            "GOOD - Challenging but fair"
        } else if self.win_rate > 0.5 {
            "HARD - Frequent defeats but progress holds"
        } else {
            "TOO HARD - Most battles end in defeat"
        };

        report.push_str(&format!("  Completion Rate: {:.1}%\n", completion_rate));
        report.push_str(&format!("  Battle Rating:   {}\n", battle_rating));

        // Flag nodes that stall the runs that reach them
        for (idx, (node_id, unlock_rate)) in self.node_unlock_rates.iter().enumerate() {
            let clear_rate = self
                .node_clear_rates
                .get(idx)
                .map(|(_, rate)| *rate)
                .unwrap_or(0.0);
            if *unlock_rate >= 0.5 && clear_rate < unlock_rate * 0.5 {
                report.push_str(&format!(
                    "  ⚠️  {} stalls runs that reach it ({:.0}% unlocked, {:.0}% cleared)\n",
                    node_id,
                    unlock_rate * 100.0,
                    clear_rate * 100.0
                ));
            }
        }

        if completion_rate < 50.0 && self.num_runs > 0 {
            report.push_str("  ⚠️  Most runs never finish the catalog - midgame too hard?\n");
        }
        if self.avg_items_dropped < 1.0 && self.avg_quests_completed >= 3.0 {
            report.push_str("  ⚠️  Very few drops - loot chances too low?\n");
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate the per-achievement unlock table (shown with --achievements).
    pub fn achievement_table_text(&self) -> String {
        let mut text = String::new();

        text.push_str("── ACHIEVEMENT UNLOCK RATES ─────────────────────────────────────\n");
        for (id, rate) in &self.achievement_rates {
            let name = get_achievement_def(*id).map_or("?", |def| def.name);
            let bar_len = (rate * 100.0 / 5.0) as usize;
            let bar: String = "█".repeat(bar_len);
            text.push_str(&format!("  {:<22} {:>5.1}% {}\n", name, rate * 100.0, bar));
        }

        text
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

// Implement Serialize for JSON output
impl serde::Serialize for SimReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("SimReport", 21)?;
        state.serialize_field("num_runs", &self.num_runs)?;
        state.serialize_field("runs_completed", &self.runs_completed)?;
        state.serialize_field("runs_timed_out", &self.runs_timed_out)?;
        state.serialize_field("target_quests", &self.target_quests)?;
        state.serialize_field("accuracy", &self.accuracy)?;
        state.serialize_field("avg_final_level", &self.avg_final_level)?;
        state.serialize_field("avg_final_xp", &self.avg_final_xp)?;
        state.serialize_field("avg_final_gold", &self.avg_final_gold)?;
        state.serialize_field("avg_final_streak", &self.avg_final_streak)?;
        state.serialize_field("avg_quests_completed", &self.avg_quests_completed)?;
        state.serialize_field("avg_attempts", &self.avg_attempts)?;
        state.serialize_field("avg_defeats", &self.avg_defeats)?;
        state.serialize_field("win_rate", &self.win_rate)?;
        state.serialize_field("avg_perfect_quests", &self.avg_perfect_quests)?;
        state.serialize_field("avg_items_dropped", &self.avg_items_dropped)?;
        state.serialize_field("avg_achievements", &self.avg_achievements)?;
        state.serialize_field("avg_days_played", &self.avg_days_played)?;
        state.serialize_field("node_unlock_rates", &self.node_unlock_rates)?;
        state.serialize_field("node_clear_rates", &self.node_clear_rates)?;
        state.serialize_field("achievement_rates", &self.achievement_rates)?;
        state.serialize_field(
            "completion_rate",
            &((self.runs_completed as f64 / self.num_runs.max(1) as f64) * 100.0),
        )?;
        state.end()
    }
}
