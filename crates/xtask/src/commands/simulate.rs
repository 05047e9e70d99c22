//! Run a single seeded combat and print the replay.

use anyhow::Result;
use clap::Parser;
use console::style;
use std::path::PathBuf;

use combat_core::{Action, CombatEngine, CombatResult, Role, Turn, Winner};

use crate::utils::{load_config, load_pair};

/// Run one seeded combat
#[derive(Parser)]
pub struct Simulate {
    /// RON roster file containing both combatants
    #[arg(short, long, value_name = "FILE", default_value = "data/roster.ron")]
    roster: PathBuf,

    /// Attacker id in the roster
    #[arg(value_name = "ATTACKER")]
    attacker: String,

    /// Defender id in the roster
    #[arg(value_name = "DEFENDER")]
    defender: String,

    /// RNG seed (same seed, same combat)
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// TOML balance config (defaults to built-in tuning)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "replay")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Turn-by-turn replay with health bars
    Replay,
    /// Outcome line only
    Summary,
    /// Full JSON result
    Json,
}

impl Simulate {
    pub fn execute(self) -> Result<()> {
        let config = load_config(self.config.as_deref())?;
        let (attacker, defender) = load_pair(&self.roster, &self.attacker, &self.defender)?;

        let result = CombatEngine::seeded(attacker, defender, self.seed)
            .with_config(config)
            .execute_combat();

        match self.format {
            OutputFormat::Replay => print_replay(&result),
            OutputFormat::Summary => println!("{}", result.summary()),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        }

        Ok(())
    }
}

fn print_replay(result: &CombatResult) {
    println!(
        "{} {} vs {}",
        style("⚔").bold(),
        style(&result.attacker.name).cyan().bold(),
        style(&result.defender.name).magenta().bold()
    );

    let mut round = 0;
    for turn in &result.turns {
        if turn.turn_number != round {
            round = turn.turn_number;
            println!("\n{}", style(format!("Turn {round}")).bold().underlined());
        }
        print_turn(turn);
    }

    let outcome = match result.winner {
        Winner::Draw => style(result.summary()).yellow().bold(),
        _ => style(result.summary()).green().bold(),
    };
    println!("\n{outcome}");
}

fn print_turn(turn: &Turn) {
    let marker = match turn.action {
        Action::Attack(ref report) if report.dodged => style("~").dim(),
        Action::Attack(_) => style("»").red(),
        Action::Rest { .. } => style("z").blue(),
        Action::Stunned => style("!").yellow(),
    };
    println!("  {marker} {}", turn.message);

    for role in [Role::Attacker, Role::Defender] {
        let snapshot = turn.snapshot(role);
        let effects: Vec<String> = snapshot
            .buffs
            .iter()
            .chain(snapshot.debuffs.iter())
            .map(|e| format!("{}x{}({})", e.kind, e.stack_count, e.remaining_turns))
            .collect();
        println!(
            "      {:<16} HP {:>5}/{:<5} SP {:>4}/{:<4} {}",
            snapshot.name,
            snapshot.health,
            snapshot.max_health,
            snapshot.stamina,
            snapshot.max_stamina,
            style(effects.join(" ")).dim()
        );
    }
}
