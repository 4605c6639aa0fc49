use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::{Display, EnumString};

use crate::dice::DiceFamily;
use crate::error::{Result, SimError};

/// Which side of a fight a template belongs to. Only heroes use items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Hero,
    Enemy,
}

/// Fixed catalog definition of a hero or creature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatantTemplate {
    pub name: String,
    pub role: Role,
    /// Added to the best die every round.
    pub strength: i32,
    /// Starting willpower.
    pub willpower: i32,
    /// Willpower threshold -> dice rolled while willpower is at or below it.
    pub dice_by_willpower: BTreeMap<i32, u32>,
    pub dice: DiceFamily,
    /// Whether this archetype can make use of the helmet.
    #[serde(default = "default_helmet_benefit")]
    pub helmet_benefit: bool,
}

fn default_helmet_benefit() -> bool {
    true
}

impl CombatantTemplate {
    /// A hero. Heroes always roll red dice.
    pub fn hero(
        name: &str,
        strength: i32,
        willpower: i32,
        dice_by_willpower: &[(i32, u32)],
        helmet_benefit: bool,
    ) -> Self {
        Self {
            name: name.to_string(),
            role: Role::Hero,
            strength,
            willpower,
            dice_by_willpower: dice_by_willpower.iter().copied().collect(),
            dice: DiceFamily::Red,
            helmet_benefit,
        }
    }

    pub fn enemy(
        name: &str,
        strength: i32,
        willpower: i32,
        dice_by_willpower: &[(i32, u32)],
        dice: DiceFamily,
    ) -> Self {
        Self {
            name: name.to_string(),
            role: Role::Enemy,
            strength,
            willpower,
            dice_by_willpower: dice_by_willpower.iter().copied().collect(),
            dice,
            helmet_benefit: false,
        }
    }

    /// Dice rolled at the given willpower: the entry for the smallest
    /// threshold that is at least `willpower`.
    pub fn dice_count_at(&self, willpower: i32) -> Result<u32> {
        self.dice_by_willpower
            .range(willpower..)
            .next()
            .map(|(_, &count)| count)
            .ok_or_else(|| SimError::Configuration {
                name: self.name.clone(),
                willpower,
            })
    }

    pub fn is_hero(&self) -> bool {
        self.role == Role::Hero
    }
}
