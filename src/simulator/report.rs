//! Simulation results and their text/JSON rendering.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::combat::BattleState;
use crate::error::{Result, SimError};

/// Raw outcome counts for one matchup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutcomeTally {
    pub hero_wins: u32,
    pub draws: u32,
    pub enemy_wins: u32,
}

impl OutcomeTally {
    /// Count one finished battle. An unfinished one is a bug upstream.
    pub fn record(&mut self, state: BattleState, hero: &str, enemy: &str) -> Result<()> {
        match state {
            BattleState::HeroWon => self.hero_wins += 1,
            BattleState::Draw => self.draws += 1,
            BattleState::EnemyWon => self.enemy_wins += 1,
            BattleState::Active => {
                return Err(SimError::InvalidOutcome {
                    hero: hero.to_string(),
                    enemy: enemy.to_string(),
                    state,
                })
            }
        }
        Ok(())
    }

    pub fn total(&self) -> u32 {
        self.hero_wins + self.draws + self.enemy_wins
    }

    pub fn probabilities(&self) -> OutcomeProbabilities {
        let total = self.total();
        if total == 0 {
            return OutcomeProbabilities::default();
        }
        let total = total as f64;
        OutcomeProbabilities {
            hero_wins: self.hero_wins as f64 / total,
            draw: self.draws as f64 / total,
            enemy_wins: self.enemy_wins as f64 / total,
        }
    }
}

/// Estimated odds for one matchup.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OutcomeProbabilities {
    pub hero_wins: f64,
    pub draw: f64,
    pub enemy_wins: f64,
}

impl OutcomeProbabilities {
    pub fn sum(&self) -> f64 {
        self.hero_wins + self.draw + self.enemy_wins
    }
}

/// hero -> enemy -> odds
pub type MatchupTable = BTreeMap<String, BTreeMap<String, OutcomeProbabilities>>;

/// Odds for every hero/creature matchup under every swept loadout.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub trial_count: u32,
    pub seed: Option<u64>,

    /// loadout label -> hero -> enemy -> odds
    pub results: BTreeMap<String, MatchupTable>,

    // Sweep order for presentation; the maps above are sorted by name.
    pub loadout_order: Vec<String>,
    pub hero_order: Vec<String>,
    pub enemy_order: Vec<String>,
}

impl SimulationResult {
    pub fn new(
        trial_count: u32,
        seed: Option<u64>,
        loadout_order: Vec<String>,
        hero_order: Vec<String>,
        enemy_order: Vec<String>,
    ) -> Self {
        Self {
            trial_count,
            seed,
            results: BTreeMap::new(),
            loadout_order,
            hero_order,
            enemy_order,
        }
    }

    pub fn insert(&mut self, loadout: &str, hero: &str, enemy: &str, odds: OutcomeProbabilities) {
        self.results
            .entry(loadout.to_string())
            .or_default()
            .entry(hero.to_string())
            .or_default()
            .insert(enemy.to_string(), odds);
    }

    pub fn get(&self, loadout: &str, hero: &str, enemy: &str) -> Option<&OutcomeProbabilities> {
        self.results.get(loadout)?.get(hero)?.get(enemy)
    }

    /// Hero with the best chance of beating `enemy` under `loadout`.
    ///
    /// Ties go to the hero listed first in the sweep.
    pub fn best_hero_against(
        &self,
        loadout: &str,
        enemy: &str,
    ) -> Option<(&str, &OutcomeProbabilities)> {
        let mut best: Option<(&str, &OutcomeProbabilities)> = None;
        for hero in &self.hero_order {
            let Some(odds) = self.get(loadout, hero, enemy) else {
                continue;
            };
            if best.map_or(true, |(_, b)| odds.hero_wins > b.hero_wins) {
                best = Some((hero.as_str(), odds));
            }
        }
        best
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                     BATTLE ODDS REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!("Trials per matchup: {}\n", self.trial_count));
        if let Some(seed) = self.seed {
            report.push_str(&format!("Seed:               {}\n", seed));
        }
        report.push('\n');

        for loadout in &self.loadout_order {
            for hero in &self.hero_order {
                report.push_str(&format!(
                    "── {} · items: {} {}\n",
                    hero,
                    loadout,
                    "─".repeat(50usize.saturating_sub(hero.len() + loadout.len()))
                ));
                report.push_str("  Enemy        Hero wins     Draw    Enemy wins\n");
                report.push_str("  ─────        ─────────     ────    ──────────\n");
                for enemy in &self.enemy_order {
                    if let Some(odds) = self.get(loadout, hero, enemy) {
                        report.push_str(&format!(
                            "  {:<10} {:>10.2}% {:>8.2}% {:>12.2}%\n",
                            enemy,
                            odds.hero_wins * 100.0,
                            odds.draw * 100.0,
                            odds.enemy_wins * 100.0
                        ));
                    }
                }
                report.push('\n');
            }
        }

        report.push_str("═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Which hero should take on each creature, per loadout.
    pub fn advice_text(&self) -> String {
        let mut report = String::new();

        report.push_str("── RECOMMENDED HERO ─────────────────────────────────────────────\n");
        for loadout in &self.loadout_order {
            report.push_str(&format!("  items: {}\n", loadout));
            for enemy in &self.enemy_order {
                if let Some((hero, odds)) = self.best_hero_against(loadout, enemy) {
                    report.push_str(&format!(
                        "    vs {:<10} {:<8} ({:.1}% win)\n",
                        enemy,
                        hero,
                        odds.hero_wins * 100.0
                    ));
                }
            }
        }

        report
    }

    /// Generate a JSON report for charting and further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

impl Serialize for SimulationResult {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("SimulationResult", 3)?;
        state.serialize_field("trial_count", &self.trial_count)?;
        state.serialize_field("seed", &self.seed)?;
        state.serialize_field("results", &self.results)?;
        state.end()
    }
}
