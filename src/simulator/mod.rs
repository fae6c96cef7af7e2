//! Learning-curve simulator for Monte Carlo balance analysis.
//!
//! Run hundreds of simulated playthroughs to analyze:
//! - Quests cleared and days needed at a given answer accuracy
//! - Battle win rates and where the difficulty curve spikes
//! - Item drop rates and their effect on progression
//! - Achievement unlock rates
//!
//! The simulator drives the real combat and progression code (src/combat,
//! src/core), ensuring simulation results match real gameplay behavior.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::{run_simulation, RunStats};
