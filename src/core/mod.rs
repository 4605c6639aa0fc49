//! Game-wide constants shared by the combat engine and the simulator.

pub mod constants;

pub use constants::*;
