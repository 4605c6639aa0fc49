use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::combatant::{CombatantTemplate, Role};
use crate::core::MAX_POLICY_DICE;
use crate::error::{Result, SimError};

use super::data::{builtin_enemies, builtin_heroes};

/// Heroes and creatures available to a sweep, in sweep order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub heroes: Vec<CombatantTemplate>,
    pub enemies: Vec<CombatantTemplate>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            heroes: builtin_heroes(),
            enemies: builtin_enemies(),
        }
    }

    /// Load and validate a catalog from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check the catalog can be simulated.
    ///
    /// Every template must have dice at its starting willpower and roll at
    /// least one die in every tier. Creatures are limited to the tiers the
    /// item policy can reason about.
    pub fn validate(&self) -> Result<()> {
        if self.heroes.is_empty() {
            return Err(SimError::InvalidCatalog("no heroes".to_string()));
        }
        if self.enemies.is_empty() {
            return Err(SimError::InvalidCatalog("no enemies".to_string()));
        }

        Self::validate_side(&self.heroes, Role::Hero)?;
        Self::validate_side(&self.enemies, Role::Enemy)?;

        for enemy in &self.enemies {
            if let Some(&count) = enemy
                .dice_by_willpower
                .values()
                .find(|&&count| count > MAX_POLICY_DICE)
            {
                return Err(SimError::InvalidDiceCount {
                    name: enemy.name.clone(),
                    count,
                });
            }
        }

        Ok(())
    }

    fn validate_side(templates: &[CombatantTemplate], role: Role) -> Result<()> {
        let mut seen = HashSet::new();

        for template in templates {
            if template.role != role {
                return Err(SimError::InvalidCatalog(format!(
                    "{} is listed as {} but has role {}",
                    template.name, role, template.role
                )));
            }
            if !seen.insert(template.name.to_lowercase()) {
                return Err(SimError::InvalidCatalog(format!(
                    "duplicate {} '{}'",
                    role, template.name
                )));
            }
            if template.dice_by_willpower.values().any(|&count| count == 0) {
                return Err(SimError::InvalidCatalog(format!(
                    "{} has a tier with no dice",
                    template.name
                )));
            }
            if template.willpower <= 0 {
                return Err(SimError::InvalidCatalog(format!(
                    "{} starts with willpower {}",
                    template.name, template.willpower
                )));
            }
            template.dice_count_at(template.willpower)?;
        }

        Ok(())
    }

    pub fn hero(&self, name: &str) -> Result<&CombatantTemplate> {
        find_named(&self.heroes, name)
    }

    pub fn enemy(&self, name: &str) -> Result<&CombatantTemplate> {
        find_named(&self.enemies, name)
    }

    /// Keep only the named heroes. An empty list keeps everyone.
    pub fn retain_heroes(&mut self, names: &[String]) -> Result<()> {
        retain_named(&mut self.heroes, names)
    }

    /// Keep only the named creatures. An empty list keeps everyone.
    pub fn retain_enemies(&mut self, names: &[String]) -> Result<()> {
        retain_named(&mut self.enemies, names)
    }
}

fn find_named<'a>(templates: &'a [CombatantTemplate], name: &str) -> Result<&'a CombatantTemplate> {
    templates
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| SimError::UnknownCombatant(name.to_string()))
}

fn retain_named(templates: &mut Vec<CombatantTemplate>, names: &[String]) -> Result<()> {
    if names.is_empty() {
        return Ok(());
    }
    for name in names {
        find_named(templates, name)?;
    }
    templates.retain(|t| names.iter().any(|n| t.name.eq_ignore_ascii_case(n)));
    Ok(())
}
