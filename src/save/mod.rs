//! Save persistence.
//!
//! One JSON snapshot per install, stored in the platform config directory.

pub mod manager;

pub use manager::SaveManager;
