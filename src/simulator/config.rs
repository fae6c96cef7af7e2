//! Simulation configuration.

use crate::catalog;
use crate::core::PlayerClass;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulated playthroughs to perform
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Probability that the simulated player answers a question correctly
    pub accuracy: f64,

    /// Class picked at onboarding; decides the head-start unlocks
    pub class: PlayerClass,

    /// Completed-quest count at which a run stops (default: full catalog)
    pub target_quests: usize,

    /// Maximum quest attempts per run before timeout
    pub max_attempts: u32,

    /// Quest attempts per simulated day (drives the streak clock)
    pub quests_per_day: u32,

    /// Log verbosity (0 = silent, 1 = summary, 2 = detailed)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            accuracy: 0.8,
            class: PlayerClass::Beginner,
            target_quests: catalog_quest_total(),
            max_attempts: 400,
            quests_per_day: 3,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for a fast balance check
    pub fn quick_check() -> Self {
        Self {
            num_runs: 100,
            ..Default::default()
        }
    }

    /// Full-catalog clear test with a strong player
    pub fn full_clear_test() -> Self {
        Self {
            num_runs: 200,
            accuracy: 0.9,
            ..Default::default()
        }
    }

    /// Config for measuring how answer accuracy shapes progression
    pub fn accuracy_test(accuracy: f64) -> Self {
        Self {
            num_runs: 500,
            accuracy,
            ..Default::default()
        }
    }
}

/// Total quest count across the built-in skill tree.
fn catalog_quest_total() -> usize {
    catalog::get_all_nodes()
        .iter()
        .map(|node| node.quests.len())
        .sum()
}
