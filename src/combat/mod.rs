//! Combat engine: item policy, round resolution and the battle loop.

pub mod battle;
pub mod policy;
pub mod resolver;

pub use battle::{Battle, BattleState, RoundReport};
pub use policy::{choose_item, expected_enemy_roll, ItemUse};
pub use resolver::{
    best_matching_set, enemy_roll, hero_roll, highest_face, round_damage, RoundDamage,
    RoundResolver, StandardResolver,
};
