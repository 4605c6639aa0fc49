//! Simulation configuration.

use std::collections::HashSet;

use crate::combatant::Loadout;
use crate::core::{DAY_BUDGET, DEFAULT_TRIAL_COUNT, QUICK_TRIAL_COUNT};
use crate::error::{Result, SimError};

/// Configuration for a simulation sweep.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Battles fought per hero/creature/loadout matchup
    pub trial_count: u32,

    /// Item loadouts to sweep, each reported under its own label
    pub loadouts: Vec<Loadout>,

    /// Rounds before a battle is called a draw
    pub day_budget: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Spread matchups across the rayon thread pool
    pub parallel: bool,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per matchup)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            trial_count: DEFAULT_TRIAL_COUNT,
            loadouts: Loadout::default_sweep(),
            day_budget: DAY_BUDGET,
            seed: None,
            parallel: true,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Fewer trials for a fast look at the odds
    pub fn quick() -> Self {
        Self {
            trial_count: QUICK_TRIAL_COUNT,
            ..Default::default()
        }
    }

    /// Seeded config whose results are bit-for-bit repeatable
    pub fn reproducible(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.trial_count == 0 {
            return Err(SimError::InvalidConfig(
                "trial_count must be positive".to_string(),
            ));
        }
        if self.day_budget == 0 {
            return Err(SimError::InvalidConfig(
                "day_budget must be positive".to_string(),
            ));
        }
        if self.loadouts.is_empty() {
            return Err(SimError::InvalidConfig(
                "at least one loadout is required".to_string(),
            ));
        }

        // Results are keyed by loadout label; a repeat would overwrite its twin.
        let mut seen = HashSet::new();
        if let Some(repeat) = self.loadouts.iter().find(|l| !seen.insert(*l)) {
            return Err(SimError::InvalidConfig(format!(
                "loadout '{}' is listed more than once",
                repeat
            )));
        }
        Ok(())
    }
}
