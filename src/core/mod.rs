//! Core game state, leveling, and progression logic.

#![allow(unused_imports)]

pub mod constants;
pub mod game_state;
pub mod levels;
pub mod progression;

pub use constants::*;
pub use game_state::*;
pub use levels::*;
pub use progression::*;
