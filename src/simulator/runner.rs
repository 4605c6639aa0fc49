//! Monte Carlo sweep over every hero/creature/loadout matchup.
//!
//! Each matchup owns a private ChaCha stream derived from the sweep seed and
//! the matchup's position in the sweep, so the same seed gives the same odds
//! whether matchups run one after another or on the rayon pool.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::{debug, info};

use super::config::SimConfig;
use super::report::{OutcomeTally, SimulationResult};
use crate::catalog::Catalog;
use crate::combat::Battle;
use crate::combatant::{CombatantState, CombatantTemplate, Loadout};
use crate::error::Result;

/// One cell of the sweep.
struct Matchup<'a> {
    index: u64,
    loadout: &'a Loadout,
    hero: &'a CombatantTemplate,
    enemy: &'a CombatantTemplate,
}

/// Run the full sweep and return the odds for every matchup.
///
/// Any error aborts the whole sweep; no battle is ever dropped from a tally.
pub fn run_simulation(config: &SimConfig, catalog: &Catalog) -> Result<SimulationResult> {
    config.validate()?;
    catalog.validate()?;

    let matchups = build_matchups(config, catalog);
    if config.verbosity >= 1 {
        info!(
            matchups = matchups.len(),
            trials = config.trial_count,
            parallel = config.parallel,
            "starting sweep"
        );
    }

    let tallies: Vec<OutcomeTally> = if config.parallel {
        matchups
            .par_iter()
            .map(|m| run_matchup(config, m))
            .collect::<Result<_>>()?
    } else {
        matchups
            .iter()
            .map(|m| run_matchup(config, m))
            .collect::<Result<_>>()?
    };

    let mut result = SimulationResult::new(
        config.trial_count,
        config.seed,
        config.loadouts.iter().map(Loadout::label).collect(),
        catalog.heroes.iter().map(|h| h.name.clone()).collect(),
        catalog.enemies.iter().map(|e| e.name.clone()).collect(),
    );
    for (matchup, tally) in matchups.iter().zip(&tallies) {
        result.insert(
            &matchup.loadout.label(),
            &matchup.hero.name,
            &matchup.enemy.name,
            tally.probabilities(),
        );
    }

    if config.verbosity >= 1 {
        info!("sweep complete");
    }
    Ok(result)
}

/// Fight `trial_count` fresh battles between `hero` carrying `loadout` and `enemy`.
pub fn simulate_matchup(
    hero: &CombatantTemplate,
    enemy: &CombatantTemplate,
    loadout: &Loadout,
    trial_count: u32,
    day_budget: u32,
    rng: &mut impl Rng,
) -> Result<OutcomeTally> {
    let mut tally = OutcomeTally::default();

    for _ in 0..trial_count {
        let mut battle = Battle::new(
            CombatantState::hero(hero, loadout),
            CombatantState::enemy(enemy),
            day_budget,
        )?;
        let state = battle.run(rng)?;
        tally.record(state, &hero.name, &enemy.name)?;
    }

    Ok(tally)
}

fn build_matchups<'a>(config: &'a SimConfig, catalog: &'a Catalog) -> Vec<Matchup<'a>> {
    let mut matchups = Vec::with_capacity(
        config.loadouts.len() * catalog.heroes.len() * catalog.enemies.len(),
    );

    for loadout in &config.loadouts {
        for hero in &catalog.heroes {
            for enemy in &catalog.enemies {
                matchups.push(Matchup {
                    index: matchups.len() as u64,
                    loadout,
                    hero,
                    enemy,
                });
            }
        }
    }

    matchups
}

fn run_matchup(config: &SimConfig, matchup: &Matchup) -> Result<OutcomeTally> {
    let mut rng = matchup_rng(config.seed, matchup.index);
    let tally = simulate_matchup(
        matchup.hero,
        matchup.enemy,
        matchup.loadout,
        config.trial_count,
        config.day_budget,
        &mut rng,
    )?;

    if config.verbosity >= 2 {
        info!(
            hero = %matchup.hero.name,
            enemy = %matchup.enemy.name,
            loadout = %matchup.loadout,
            hero_wins = tally.hero_wins,
            draws = tally.draws,
            enemy_wins = tally.enemy_wins,
            "matchup done"
        );
    } else {
        debug!(
            hero = %matchup.hero.name,
            enemy = %matchup.enemy.name,
            loadout = %matchup.loadout,
            "matchup done"
        );
    }

    Ok(tally)
}

/// Private random stream for one matchup.
fn matchup_rng(seed: Option<u64>, index: u64) -> ChaCha8Rng {
    let mut rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    rng.set_stream(index);
    rng
}
