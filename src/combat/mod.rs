//! Turn-based battle engine driven by quiz answer events.

#![allow(unused_imports)]

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
