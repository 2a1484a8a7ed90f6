//! Headless encounter runner: the same phase machine the interactive
//! frontend drives, minus the terminal. Used for Monte Carlo reports and
//! end-to-end tests.

use std::fs;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::content;
use crate::map::MapStore;
use crate::session::{Outcome, Session};

fn default_max_rounds() -> u32 {
    200
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EncounterConfig {
    /// Map file on disk; takes precedence over `map_id`.
    #[serde(default)]
    pub map_path: Option<String>,
    /// Built-in map name (defaults to "lair").
    #[serde(default)]
    pub map_id: Option<String>,
    #[serde(default)]
    pub seed: u64,
    #[serde(default = "default_max_rounds")]
    pub max_rounds: u32,
    /// Scripted player inputs, one action token per round.
    #[serde(default)]
    pub script: String,
    /// Once the script runs out, drive the player by the opponent policy
    /// instead of waiting.
    #[serde(default)]
    pub autoplay: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct EncounterResult {
    /// "player", "dragon", "quit" or "timeout".
    pub outcome: String,
    pub rounds: u32,
    pub player_hp_end: i32,
    pub dragon_hp_end: i32,
    pub log: Vec<String>,
}

pub fn simulate_encounter(cfg: EncounterConfig) -> Result<EncounterResult> {
    let text = if let Some(path) = cfg.map_path.as_deref() {
        fs::read_to_string(path).with_context(|| format!("failed to read map file: {}", path))?
    } else {
        let id = cfg.map_id.as_deref().unwrap_or("lair");
        content::builtin_maps()
            .get(id)
            .copied()
            .ok_or_else(|| anyhow!("unknown built-in map '{}'", id))?
            .to_string()
    };

    let mut session = Session::new(MapStore::parse(&text), cfg.seed);
    let mut script = cfg.script.chars();

    let mut rounds = 0u32;
    let mut outcome = "timeout";
    while rounds < cfg.max_rounds {
        rounds += 1;
        let blocked = session.blocking_terrain();
        session.upkeep()?;

        match session.outcome()? {
            Outcome::PlayerWins => {
                outcome = "player";
                break;
            }
            Outcome::DragonWins => {
                outcome = "dragon";
                break;
            }
            Outcome::Ongoing => {}
        }

        match script.next() {
            Some(token) => {
                session.apply_player(token)?;
            }
            None if cfg.autoplay => session.autoplay_player(&blocked)?,
            None => {
                session.apply_player('.')?;
            }
        }
        if session.quit_requested() {
            outcome = "quit";
            break;
        }

        session.dragon_turn(&blocked)?;
    }

    let (_, player) = session.store().find(crate::PLAYER_SYMBOL)?;
    let (_, dragon) = session.store().find(crate::DRAGON_SYMBOL)?;
    let result = EncounterResult {
        outcome: outcome.to_string(),
        rounds,
        player_hp_end: player.health(),
        dragon_hp_end: dragon.health(),
        log: session.log().rendered_all(),
    };
    tracing::info!(
        outcome = %result.outcome,
        rounds = result.rounds,
        "encounter finished"
    );
    Ok(result)
}
