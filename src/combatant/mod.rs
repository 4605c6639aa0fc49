//! Combatant templates, per-battle state and hero items.

mod items;
mod state;
mod types;

pub use items::{Item, Loadout};
pub use state::CombatantState;
pub use types::{CombatantTemplate, Role};
