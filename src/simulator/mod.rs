//! Monte Carlo battle odds.
//!
//! Fights thousands of fresh battles for every hero/creature/loadout matchup
//! and reduces the outcomes to win, draw and loss probabilities.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{MatchupTable, OutcomeProbabilities, OutcomeTally, SimulationResult};
pub use runner::{run_simulation, simulate_matchup};
