//! Dice families and random face draws.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
