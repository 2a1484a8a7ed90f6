//! Monte Carlo harness: run many autoplayed encounters and report how the
//! fight tends to go.

use std::path::PathBuf;

use clap::Parser;
use engine::api::{EncounterConfig, simulate_encounter};

#[derive(Parser)]
#[command(name = "simulate")]
#[command(about = "Monte Carlo sim: many dragon encounters on one map")]
struct Args {
    /// Path to a map file (defaults to the built-in lair)
    #[arg(long)]
    map: Option<PathBuf>,

    /// Number of trials
    #[arg(long, default_value_t = 1000)]
    trials: u32,

    /// Safety cap on rounds per trial
    #[arg(long, default_value_t = 200)]
    max_rounds: u32,

    /// RNG base seed (trial i uses seed+i)
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Scripted opening moves for the player, one token per round
    #[arg(long, default_value = "")]
    script: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let map_path = args.map.map(|p| p.to_string_lossy().into_owned());

    let mut player_wins = 0u32;
    let mut dragon_wins = 0u32;
    let mut timeouts = 0u32;
    let mut rounds_vec: Vec<u32> = Vec::with_capacity(args.trials as usize);

    for i in 0..args.trials {
        let cfg = EncounterConfig {
            map_path: map_path.clone(),
            map_id: None,
            seed: args.seed.wrapping_add(i as u64),
            max_rounds: args.max_rounds,
            script: args.script.clone(),
            autoplay: true,
        };
        let result = simulate_encounter(cfg)?;
        match result.outcome.as_str() {
            "player" => {
                player_wins += 1;
                rounds_vec.push(result.rounds);
            }
            "dragon" => {
                dragon_wins += 1;
                rounds_vec.push(result.rounds);
            }
            _ => timeouts += 1,
        }
    }

    rounds_vec.sort_unstable();
    let trials_f = args.trials as f64;
    let decided = player_wins + dragon_wins;
    let avg_rounds = if rounds_vec.is_empty() {
        0.0
    } else {
        rounds_vec.iter().map(|&r| r as u64).sum::<u64>() as f64 / decided.max(1) as f64
    };
    let median_rounds = if rounds_vec.is_empty() {
        0
    } else {
        let m = rounds_vec.len() / 2;
        if rounds_vec.len() % 2 == 1 {
            rounds_vec[m]
        } else {
            (rounds_vec[m - 1] + rounds_vec[m]) / 2
        }
    };

    println!("simulate results");
    println!("----------------");
    println!("trials:               {}", args.trials);
    println!(
        "player win rate:      {:.1}%",
        player_wins as f64 / trials_f * 100.0
    );
    println!(
        "dragon win rate:      {:.1}%",
        dragon_wins as f64 / trials_f * 100.0
    );
    println!(
        "timeouts:             {:.1}%",
        timeouts as f64 / trials_f * 100.0
    );
    println!("avg rounds (decided): {:.2}", avg_rounds);
    println!("median rounds:        {}", median_rounds);

    Ok(())
}
