//! Run many seeded combats and report aggregate outcomes.

use anyhow::Result;
use clap::Parser;
use console::style;
use std::path::PathBuf;

use combat_core::{CombatEngine, Winner};

use crate::utils::{load_config, load_pair};

/// Run many seeded combats
#[derive(Parser)]
pub struct Batch {
    /// RON roster file containing both combatants
    #[arg(short, long, value_name = "FILE", default_value = "data/roster.ron")]
    roster: PathBuf,

    /// Attacker id in the roster
    #[arg(value_name = "ATTACKER")]
    attacker: String,

    /// Defender id in the roster
    #[arg(value_name = "DEFENDER")]
    defender: String,

    /// Number of combats to run
    #[arg(short = 'n', long, default_value_t = 1000)]
    runs: u64,

    /// First seed; run `i` uses `seed + i` (wrapping)
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// TOML balance config (defaults to built-in tuning)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Default)]
struct Tally {
    attacker: u64,
    defender: u64,
    draw: u64,
    rounds: u64,
}

impl Batch {
    pub fn execute(self) -> Result<()> {
        if self.runs == 0 {
            anyhow::bail!("--runs must be at least 1");
        }

        let config = load_config(self.config.as_deref())?;
        let (attacker, defender) = load_pair(&self.roster, &self.attacker, &self.defender)?;

        let mut tally = Tally::default();
        for i in 0..self.runs {
            let seed = run_seed(self.seed, i);
            let result = CombatEngine::seeded(attacker.clone(), defender.clone(), seed)
                .with_config(config.clone())
                .execute_combat();

            match result.winner {
                Winner::Attacker => tally.attacker += 1,
                Winner::Defender => tally.defender += 1,
                Winner::Draw => tally.draw += 1,
            }
            tally.rounds += u64::from(result.total_turns);
        }

        let percent = |count: u64| count as f64 * 100.0 / self.runs as f64;
        println!(
            "{} {} vs {} over {} combats",
            style("Batch").bold(),
            style(&attacker.name).cyan(),
            style(&defender.name).magenta(),
            self.runs
        );
        println!("  {:<10} {:>6} ({:>5.1}%)", attacker.name, tally.attacker, percent(tally.attacker));
        println!("  {:<10} {:>6} ({:>5.1}%)", defender.name, tally.defender, percent(tally.defender));
        println!("  {:<10} {:>6} ({:>5.1}%)", "draw", tally.draw, percent(tally.draw));
        println!(
            "  average rounds: {:.1}",
            tally.rounds as f64 / self.runs as f64
        );

        Ok(())
    }
}

/// Seed of run `index`, wrapping past `u64::MAX`.
fn run_seed(first: u64, index: u64) -> u64 {
    first.wrapping_add(index)
}
