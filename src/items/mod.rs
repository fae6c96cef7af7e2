//! Item system: types, equipment, derived stats, and loot drops.

pub mod drops;
pub mod equipment;
pub mod stats;
pub mod types;

pub use drops::*;
pub use equipment::*;
pub use stats::*;
pub use types::*;
