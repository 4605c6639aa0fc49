use crate::core::POTION_CHARGES;
use crate::dice::DiceFamily;
use crate::error::Result;

use super::items::{Item, Loadout};
use super::types::CombatantTemplate;

/// Mutable state of one combatant for the length of a single battle.
///
/// Built fresh from its template for every trial and dropped once the
/// outcome is tallied.
#[derive(Debug, Clone)]
pub struct CombatantState<'a> {
    template: &'a CombatantTemplate,
    pub willpower: i32,
    pub potions: u32,
    pub has_helmet: bool,
}

impl<'a> CombatantState<'a> {
    /// A hero at full willpower carrying `loadout`.
    pub fn hero(template: &'a CombatantTemplate, loadout: &Loadout) -> Self {
        debug_assert!(template.is_hero(), "{} is not a hero", template.name);
        Self {
            template,
            willpower: template.willpower,
            potions: if loadout.has(Item::Potion) {
                POTION_CHARGES
            } else {
                0
            },
            has_helmet: loadout.has(Item::Helmet),
        }
    }

    /// A creature at full willpower. Creatures never carry items.
    pub fn enemy(template: &'a CombatantTemplate) -> Self {
        Self {
            template,
            willpower: template.willpower,
            potions: 0,
            has_helmet: false,
        }
    }

    pub fn template(&self) -> &'a CombatantTemplate {
        self.template
    }

    pub fn name(&self) -> &'a str {
        &self.template.name
    }

    pub fn strength(&self) -> i32 {
        self.template.strength
    }

    pub fn dice_family(&self) -> DiceFamily {
        self.template.dice
    }

    /// Dice rolled at current willpower.
    pub fn dice_count(&self) -> Result<u32> {
        self.template.dice_count_at(self.willpower)
    }

    pub fn is_alive(&self) -> bool {
        self.willpower > 0
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.willpower -= amount.max(0);
    }

    /// Spend one potion charge. Returns false if none are left.
    pub fn consume_potion(&mut self) -> bool {
        if self.potions == 0 {
            return false;
        }
        self.potions -= 1;
        true
    }

    /// Carrying a helmet and able to benefit from it.
    pub fn helmet_applies(&self) -> bool {
        self.has_helmet && self.template.helmet_benefit
    }
}
