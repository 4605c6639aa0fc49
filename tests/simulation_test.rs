//! Integration test: Monte Carlo sweep
//!
//! Checks the shape and reproducibility of sweep results and that estimates
//! settle down as the number of trials grows.

use andor_sim::simulator::simulate_matchup;
use andor_sim::{run_simulation, Catalog, Item, Loadout, SimConfig, DAY_BUDGET};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn seeded_config(trial_count: u32, seed: u64) -> SimConfig {
    SimConfig {
        trial_count,
        seed: Some(seed),
        verbosity: 0,
        ..Default::default()
    }
}

// =============================================================================
// Result shape
// =============================================================================

#[test]
fn test_every_matchup_sums_to_one() {
    let result = run_simulation(&seeded_config(500, 11), &Catalog::builtin()).unwrap();

    assert_eq!(result.loadout_order, vec!["none", "potion", "helmet"]);
    assert_eq!(result.hero_order, vec!["Thorn", "Chada", "Eara", "Kram"]);
    assert_eq!(result.enemy_order, vec!["Gor", "Skral", "Wardrak", "Troll"]);

    for (loadout, heroes) in &result.results {
        for (hero, enemies) in heroes {
            assert_eq!(enemies.len(), 4, "{hero} with {loadout}");
            for (enemy, odds) in enemies {
                assert!(
                    (odds.sum() - 1.0).abs() < 1e-9,
                    "{hero} vs {enemy} with {loadout} sums to {}",
                    odds.sum()
                );
                for p in [odds.hero_wins, odds.draw, odds.enemy_wins] {
                    assert!((0.0..=1.0).contains(&p));
                }
            }
        }
    }
}

#[test]
fn test_odd_trial_counts_still_sum_to_one() {
    for trials in [1, 3, 7, 333] {
        let result = run_simulation(&seeded_config(trials, 5), &Catalog::builtin()).unwrap();
        let odds = result.get("helmet", "Kram", "Wardrak").unwrap();
        assert!((odds.sum() - 1.0).abs() < 1e-9);
    }
}

#[test]
fn test_custom_loadouts_are_labelled() {
    let config = SimConfig {
        loadouts: vec![Loadout::new([Item::Potion, Item::Helmet])],
        ..seeded_config(100, 3)
    };
    let result = run_simulation(&config, &Catalog::builtin()).unwrap();

    assert_eq!(result.loadout_order, vec!["potion+helmet"]);
    assert!(result.get("potion+helmet", "Thorn", "Gor").is_some());
    assert!(result.get("none", "Thorn", "Gor").is_none());
}

#[test]
fn test_json_has_nested_loadout_hero_enemy_shape() {
    let result = run_simulation(&seeded_config(100, 9), &Catalog::builtin()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&result.to_json()).unwrap();

    let odds = &json["results"]["potion"]["Chada"]["Skral"];
    let total = odds["hero_wins"].as_f64().unwrap()
        + odds["draw"].as_f64().unwrap()
        + odds["enemy_wins"].as_f64().unwrap();
    assert!((total - 1.0).abs() < 1e-9);
}

// =============================================================================
// Reproducibility
// =============================================================================

#[test]
fn test_same_seed_is_bit_identical() {
    let catalog = Catalog::builtin();
    let first = run_simulation(&seeded_config(1_000, 42), &catalog).unwrap();
    let second = run_simulation(&seeded_config(1_000, 42), &catalog).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.to_json(), second.to_json());
}

#[test]
fn test_different_seeds_differ() {
    let catalog = Catalog::builtin();
    let a = run_simulation(&seeded_config(1_000, 1), &catalog).unwrap();
    let b = run_simulation(&seeded_config(1_000, 2), &catalog).unwrap();

    assert_ne!(a.results, b.results);
}

#[test]
fn test_helmet_is_a_no_op_for_excluded_heroes() {
    let catalog = Catalog::builtin();
    let troll = catalog.enemy("Troll").unwrap();

    for name in ["Chada", "Eara"] {
        let hero = catalog.hero(name).unwrap();
        let with_helmet = simulate_matchup(
            hero,
            troll,
            &Loadout::helmet(),
            2_000,
            DAY_BUDGET,
            &mut ChaCha8Rng::seed_from_u64(8),
        )
        .unwrap();
        let without = simulate_matchup(
            hero,
            troll,
            &Loadout::none(),
            2_000,
            DAY_BUDGET,
            &mut ChaCha8Rng::seed_from_u64(8),
        )
        .unwrap();

        assert_eq!(with_helmet, without, "{name}");
    }
}

// =============================================================================
// Convergence
// =============================================================================

#[test]
fn test_large_runs_agree_within_tolerance() {
    let catalog = Catalog::builtin();
    let kram = catalog.hero("Kram").unwrap();
    let wardrak = catalog.enemy("Wardrak").unwrap();

    let run = |seed: u64| {
        simulate_matchup(
            kram,
            wardrak,
            &Loadout::potion(),
            50_000,
            DAY_BUDGET,
            &mut ChaCha8Rng::seed_from_u64(seed),
        )
        .unwrap()
        .probabilities()
    };

    let a = run(1);
    let b = run(2);
    assert!((a.hero_wins - b.hero_wins).abs() < 0.02);
    assert!((a.draw - b.draw).abs() < 0.02);
    assert!((a.enemy_wins - b.enemy_wins).abs() < 0.02);
}

#[test]
fn test_gor_is_easier_than_troll() {
    let result = run_simulation(&seeded_config(5_000, 21), &Catalog::builtin()).unwrap();

    for hero in &result.hero_order {
        let gor = result.get("none", hero, "Gor").unwrap();
        let troll = result.get("none", hero, "Troll").unwrap();
        assert!(gor.hero_wins > troll.hero_wins, "{hero}");
    }
}
