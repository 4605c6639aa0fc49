//! Andor battle odds.
//!
//! Estimates how often each hero beats, draws with, or falls to each creature
//! by fighting many simulated battles under the board game's dice rules.
//!
//! ```no_run
//! use andor_sim::catalog::Catalog;
//! use andor_sim::simulator::{run_simulation, SimConfig};
//!
//! let result = run_simulation(&SimConfig::reproducible(42), &Catalog::builtin())?;
//! let odds = result.get("potion", "Thorn", "Troll").unwrap();
//! println!("Thorn beats the troll {:.1}% of the time", odds.hero_wins * 100.0);
//! # Ok::<(), andor_sim::SimError>(())
//! ```

pub mod build_info;
pub mod catalog;
pub mod combat;
pub mod combatant;
pub mod core;
pub mod dice;
pub mod error;
pub mod simulator;

pub use catalog::Catalog;
pub use combatant::{CombatantState, CombatantTemplate, Item, Loadout, Role};
pub use crate::core::*;
pub use error::{Result, SimError};
pub use simulator::{run_simulation, SimConfig, SimulationResult};
