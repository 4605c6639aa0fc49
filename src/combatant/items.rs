use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString};

use crate::error::SimError;

/// Items a hero can bring into a fight.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Item {
    /// Witch's brew: doubles the best die, two uses.
    Potion,
    /// Lets matching dice be added together, never used up.
    Helmet,
}

/// The set of items a hero carries for one sweep.
///
/// Items are kept sorted and de-duplicated so two loadouts with the same items
/// always share a label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Loadout {
    items: Vec<Item>,
}

impl Loadout {
    pub fn new(items: impl IntoIterator<Item = Item>) -> Self {
        let mut items: Vec<Item> = items.into_iter().collect();
        items.sort();
        items.dedup();
        Self { items }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn potion() -> Self {
        Self::new([Item::Potion])
    }

    pub fn helmet() -> Self {
        Self::new([Item::Helmet])
    }

    /// No items, potion only, helmet only.
    pub fn default_sweep() -> Vec<Loadout> {
        vec![Self::none(), Self::potion(), Self::helmet()]
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn has(&self, item: Item) -> bool {
        self.items.contains(&item)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// `"none"`, or item names joined with `+`.
    pub fn label(&self) -> String {
        if self.items.is_empty() {
            return "none".to_string();
        }
        self.items
            .iter()
            .map(|item| item.to_string())
            .collect::<Vec<_>>()
            .join("+")
    }
}

impl fmt::Display for Loadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for Loadout {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("none") {
            return Ok(Self::none());
        }

        let items = s
            .split(['+', ','])
            .map(|part| {
                let part = part.trim();
                Item::from_str(part).map_err(|_| SimError::UnknownItem(part.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(items))
    }
}
