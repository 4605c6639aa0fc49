//! Battle odds simulator CLI.
//!
//! Run Monte Carlo battles for every hero/creature/loadout matchup.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                          # 10,000 trials, default loadouts
//!   cargo run --bin simulate -- -n 1000 --seed 42     # Quick, reproducible
//!   cargo run --bin simulate -- --loadout potion+helmet --hero Thorn
//!   cargo run --bin simulate -- --catalog legend2.json --json

use andor_sim::build_info::version_stamp;
use andor_sim::catalog::Catalog;
use andor_sim::simulator::{run_simulation, SimConfig};
use andor_sim::{Loadout, DAY_BUDGET, DEFAULT_TRIAL_COUNT};
use anyhow::Context;
use clap::Parser;
use std::collections::HashSet;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Monte Carlo odds for hero-versus-creature battles
#[derive(Parser, Debug)]
#[command(name = "simulate")]
#[command(about = "Monte Carlo odds for hero-versus-creature battles")]
#[command(version)]
struct Args {
    /// Battles per matchup
    #[arg(short = 'n', long, default_value_t = DEFAULT_TRIAL_COUNT)]
    trials: u32,

    /// Random seed for reproducibility
    #[arg(short, long)]
    seed: Option<u64>,

    /// Item loadout to sweep: none, potion, helmet, potion+helmet (repeatable)
    #[arg(long = "loadout", value_name = "ITEMS")]
    loadouts: Vec<Loadout>,

    /// Only simulate these heroes (repeatable)
    #[arg(long = "hero", value_name = "NAME")]
    heroes: Vec<String>,

    /// Only simulate these creatures (repeatable)
    #[arg(long = "enemy", value_name = "NAME")]
    enemies: Vec<String>,

    /// JSON catalog of heroes and creatures (default: built-in)
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Rounds before a battle is called a draw
    #[arg(long, default_value_t = DAY_BUDGET)]
    days: u32,

    /// Run matchups on a single thread
    #[arg(long)]
    sequential: bool,

    /// Save a JSON report (default name: sim_report_<timestamp>.json)
    #[arg(long, value_name = "FILE", num_args = 0..=1)]
    json: Option<Option<PathBuf>>,

    /// Print the best hero for each creature
    #[arg(long)]
    advise: bool,

    /// Log every matchup
    #[arg(short, long)]
    verbose: bool,

    /// Only print the report
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    fn to_config(&self) -> SimConfig {
        let defaults = SimConfig::default();
        SimConfig {
            trial_count: self.trials,
            loadouts: if self.loadouts.is_empty() {
                defaults.loadouts
            } else {
                let mut seen = HashSet::new();
                self.loadouts
                    .iter()
                    .filter(|l| seen.insert(*l))
                    .cloned()
                    .collect()
            },
            day_budget: self.days,
            seed: self.seed,
            parallel: !self.sequential,
            verbosity: match (self.quiet, self.verbose) {
                (true, _) => 0,
                (_, true) => 2,
                _ => 1,
            },
        }
    }
}

fn init_tracing(verbosity: u8) {
    let default_level = if verbosity >= 2 { "info" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = args.to_config();
    init_tracing(config.verbosity);

    let mut catalog = match &args.catalog {
        Some(path) => Catalog::load_from_file(path)
            .with_context(|| format!("loading catalog {}", path.display()))?,
        None => Catalog::builtin(),
    };
    catalog.retain_heroes(&args.heroes)?;
    catalog.retain_enemies(&args.enemies)?;

    if !args.quiet {
        println!("╔═══════════════════════════════════════════════════════════════╗");
        println!("║              ANDOR BATTLE ODDS SIMULATOR                      ║");
        println!("╚═══════════════════════════════════════════════════════════════╝");
        println!("  {}", version_stamp());
        println!();
        println!("Configuration:");
        println!("  Trials:     {}", config.trial_count);
        println!("  Days:       {}", config.day_budget);
        println!(
            "  Loadouts:   {}",
            config
                .loadouts
                .iter()
                .map(Loadout::label)
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!("  Heroes:     {}", catalog.heroes.len());
        println!("  Creatures:  {}", catalog.enemies.len());
        if let Some(seed) = config.seed {
            println!("  Seed:       {}", seed);
        }
        println!();
        println!("Running simulation...");
        println!();
    }

    let result = run_simulation(&config, &catalog)?;

    println!("{}", result.to_text());
    if args.advise {
        println!("{}", result.advice_text());
    }

    if let Some(path) = &args.json {
        let filename = path.clone().unwrap_or_else(|| {
            PathBuf::from(format!(
                "sim_report_{}.json",
                chrono::Utc::now().format("%Y%m%d_%H%M%S")
            ))
        });
        std::fs::write(&filename, result.to_json())
            .with_context(|| format!("writing {}", filename.display()))?;
        println!("JSON report saved to: {}", filename.display());
    }

    Ok(())
}
