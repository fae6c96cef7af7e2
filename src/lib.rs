//! Questline - Progression Engine for Gamified Learning
//!
//! This crate holds the headless game logic: skill-tree progression,
//! quiz-driven battle resolution, loot, achievements, and saves. A
//! frontend drives it through the `core` and `combat` surfaces; the
//! `simulate` binary drives it for balance analysis.

pub mod achievements;
pub mod catalog;
pub mod combat;
pub mod core;
pub mod items;
pub mod save;
pub mod simulator;
