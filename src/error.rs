//! Error types for the combat engine and the simulator.
//!
//! Every variant aborts the sweep it occurs in. Skipping a single trial would
//! bias the estimated odds, so nothing here is retried or swallowed.

use thiserror::Error;

use crate::combat::BattleState;

/// Errors raised while loading a catalog or running battles.
#[derive(Debug, Error)]
pub enum SimError {
    /// Willpower is above every threshold in the combatant's dice table.
    ///
    /// The table is incomplete; the combatant's dice count is undefined.
    #[error("{name}: willpower {willpower} exceeds every dice-count threshold")]
    Configuration { name: String, willpower: i32 },

    /// The expected-roll model only covers one to three creature dice.
    #[error("{name}: expected-roll model covers 1 to 3 dice, got {count}")]
    InvalidDiceCount { name: String, count: u32 },

    /// A battle ended in a state the tally cannot classify.
    #[error("unrecognised outcome {state:?} for {hero} vs {enemy}")]
    InvalidOutcome {
        hero: String,
        enemy: String,
        state: BattleState,
    },

    #[error("unknown combatant: '{0}'")]
    UnknownCombatant(String),

    #[error("unknown item: '{0}'. Valid items: potion, helmet")]
    UnknownItem(String),

    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
