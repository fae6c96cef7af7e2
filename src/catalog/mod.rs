//! Built-in learning content: the skill tree, its quests, the enemies
//! guarding them, and the item pool the loot tables draw from.

mod data;
mod types;

#[allow(unused_imports)]
pub use data::*;
#[allow(unused_imports)]
pub use types::*;
