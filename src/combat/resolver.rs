//! Round resolution: effective rolls and damage.
//!
//! These are pure functions over dice already drawn; the battle loop feeds
//! them and applies the result.

use crate::combatant::CombatantState;

use super::policy::ItemUse;

/// Highest face in a draw, 0 for an empty draw.
pub fn highest_face(dice: &[i32]) -> i32 {
    dice.iter().copied().max().unwrap_or(0)
}

/// Best `count * face` over the distinct faces in a draw.
pub fn best_matching_set(dice: &[i32]) -> i32 {
    let mut sorted = dice.to_vec();
    sorted.sort_unstable();
    sorted
        .chunk_by(|a, b| a == b)
        .map(|run| run.len() as i32 * run[0])
        .max()
        .unwrap_or(0)
}

/// Hero's effective roll for the round.
///
/// # Arguments
/// * `dice` - Faces the hero drew this round
/// * `strength` - Hero's strength
/// * `item` - Item chosen by the policy
pub fn hero_roll(dice: &[i32], strength: i32, item: ItemUse) -> i32 {
    let best = highest_face(dice);
    match item {
        ItemUse::None => best + strength,
        ItemUse::Potion => 2 * best + strength,
        // The helmet never makes a roll worse.
        ItemUse::Helmet => best_matching_set(dice).max(best) + strength,
    }
}

/// Creature's effective roll: every die showing the top face counts.
pub fn enemy_roll(dice: &[i32], strength: i32) -> i32 {
    let best = highest_face(dice);
    let matches = dice.iter().filter(|&&face| face == best).count() as i32;
    matches * best + strength
}

/// Willpower lost by each side in one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoundDamage {
    pub hero: i32,
    pub enemy: i32,
}

/// The lower roll loses the difference; a tie costs nobody anything.
pub fn round_damage(hero_roll: i32, enemy_roll: i32) -> RoundDamage {
    if hero_roll > enemy_roll {
        RoundDamage {
            hero: 0,
            enemy: hero_roll - enemy_roll,
        }
    } else if enemy_roll > hero_roll {
        RoundDamage {
            hero: enemy_roll - hero_roll,
            enemy: 0,
        }
    } else {
        RoundDamage::default()
    }
}

/// Turns both sides' dice into effective rolls `(hero, enemy)`.
///
/// The battle loop is generic over this so alternative rule sets, or scripted
/// ones in tests, can drive a full battle.
pub trait RoundResolver {
    fn effective_rolls(
        &self,
        hero: &CombatantState,
        hero_dice: &[i32],
        item: ItemUse,
        enemy: &CombatantState,
        enemy_dice: &[i32],
    ) -> (i32, i32);
}

/// The board game's rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardResolver;

impl RoundResolver for StandardResolver {
    fn effective_rolls(
        &self,
        hero: &CombatantState,
        hero_dice: &[i32],
        item: ItemUse,
        enemy: &CombatantState,
        enemy_dice: &[i32],
    ) -> (i32, i32) {
        (
            hero_roll(hero_dice, hero.strength(), item),
            enemy_roll(enemy_dice, enemy.strength()),
        )
    }
}
