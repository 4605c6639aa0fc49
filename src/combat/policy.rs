//! Item-usage policy for heroes.
//!
//! Decided once per round after the hero's dice are on the table but before
//! the creature's roll is known. The creature side is judged by its expected
//! roll only, never by the dice it actually drew.

use serde::Serialize;
use strum::Display;

use crate::combatant::CombatantState;
use crate::core::MAX_POLICY_DICE;
use crate::error::{Result, SimError};

use super::resolver::highest_face;

/// Which item, if any, the hero uses this round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ItemUse {
    #[default]
    None,
    Potion,
    Helmet,
}

/// Expected best roll of a creature at its current dice count, strength excluded.
///
/// One die rolls the family mean. Each extra die adds the mean weighted by the
/// chance that all dice so far show the same face, since matching dice are
/// added together.
pub fn expected_enemy_roll(enemy: &CombatantState) -> Result<f64> {
    let count = enemy.dice_count()?;
    if !(1..=MAX_POLICY_DICE).contains(&count) {
        return Err(SimError::InvalidDiceCount {
            name: enemy.name().to_string(),
            count,
        });
    }

    let family = enemy.dice_family();
    let mean = family.mean_face();
    let expected = (2..=count).fold(mean, |acc, dice| {
        acc + family.tie_probability(dice) * mean
    });

    Ok(expected)
}

/// Pick the item for this round, spending a potion charge if one is used.
///
/// Priority: potion, then helmet, then nothing. The potion is only drunk when
/// the hero's plain roll already beats the expected creature roll, so it is
/// not wasted on a round that looks lost.
pub fn choose_item(
    hero: &mut CombatantState,
    enemy: &CombatantState,
    hero_dice: &[i32],
) -> Result<ItemUse> {
    let expected = expected_enemy_roll(enemy)?;
    let best = highest_face(hero_dice);
    let plain = (best + hero.strength()) as f64;
    let doubled = (2 * best + hero.strength()) as f64;

    if hero.potions > 0 && plain > expected && doubled > expected && hero.consume_potion() {
        return Ok(ItemUse::Potion);
    }

    if hero.helmet_applies() {
        return Ok(ItemUse::Helmet);
    }

    Ok(ItemUse::None)
}
