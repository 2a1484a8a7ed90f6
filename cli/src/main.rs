use std::{fs, path::PathBuf};

use clap::{Parser, Subcommand};
use encoding_rs::Encoding;
use engine::api::{EncounterConfig, simulate_encounter};
use engine::{MapStore, Session};

mod tui;

#[derive(Subcommand)]
enum Cmd {
    /// Play the encounter interactively in the terminal
    Play {
        /// Path to a map file (defaults to the built-in lair)
        #[arg(long)]
        map: Option<PathBuf>,
        /// RNG seed for determinism
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
    /// Run one headless encounter and print the result as JSON
    Run {
        /// Path to a map file (defaults to the built-in lair)
        #[arg(long)]
        map: Option<PathBuf>,
        /// RNG seed for determinism
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Scripted player inputs, one action token per round
        #[arg(long, default_value = "")]
        script: String,
        /// Drive the player by the opponent policy once the script runs out
        #[arg(long, default_value_t = true)]
        autoplay: bool,
        /// Safety cap on rounds
        #[arg(long, default_value_t = 200)]
        max_rounds: u32,
        /// Pretty-print JSON
        #[arg(long, default_value_t = true)]
        pretty: bool,
    },
}

#[derive(Parser)]
#[command(name = "dragon-lair")]
#[command(about = "Turn-based dragon encounter simulator")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

/// Read text tolerating a BOM (map files saved on Windows tend to carry one).
fn read_text_auto(path: &std::path::Path) -> anyhow::Result<String> {
    let bytes = fs::read(path)?;
    if let Some((enc, bom_len)) = Encoding::for_bom(&bytes) {
        let (cow, _, _) = enc.decode(&bytes[bom_len..]);
        Ok(cow.into_owned())
    } else {
        Ok(String::from_utf8(bytes)?)
    }
}

fn load_store(map: Option<&PathBuf>) -> anyhow::Result<MapStore> {
    match map {
        Some(path) => Ok(MapStore::parse(&read_text_auto(path)?)),
        None => {
            let text = engine::content::builtin_maps()["lair"];
            Ok(MapStore::parse(text))
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Play { map, seed } => {
            let store = load_store(map.as_ref())?;
            let session = Session::new(store, seed);
            tui::run(session)?;
        }
        Cmd::Run {
            map,
            seed,
            script,
            autoplay,
            max_rounds,
            pretty,
        } => {
            let cfg = EncounterConfig {
                map_path: map.map(|p| p.to_string_lossy().into_owned()),
                map_id: None,
                seed,
                max_rounds,
                script,
                autoplay,
            };
            let result = simulate_encounter(cfg)?;
            if pretty {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", serde_json::to_string(&result)?);
            }
        }
    }
    Ok(())
}
