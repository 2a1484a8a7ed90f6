//! Session state and the turn-resolution phases. A `Session` owns the map
//! store, the seeded dice, the message log and the termination flag; the
//! frontend drives the phases in order, one round at a time:
//! snapshot blocking terrain → upkeep → render → outcome check → player
//! action → dragon action.

use std::collections::HashSet;

use crate::Dice;
use crate::actions::{Action, ActionOutcome, registry};
use crate::catalog::{self, DRAGON_SYMBOL, PLAYER_SYMBOL};
use crate::error::Result;
use crate::log::MessageLog;
use crate::map::{MapStore, Position};
use crate::policy;

/// Chance per upkeep tick that a burning entity takes a point of damage.
pub const BURN_CHANCE: f64 = 0.5;

/// How many log messages renderers show.
pub const LOG_TAIL: usize = 7;

/// Terminal state of the encounter, checked once per round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    PlayerWins,
    DragonWins,
}

pub struct Session {
    store: MapStore,
    dice: Dice,
    log: MessageLog,
    quit: bool,
}

impl Session {
    pub fn new(store: MapStore, seed: u64) -> Self {
        Self {
            store,
            dice: Dice::from_seed(seed),
            log: MessageLog::new(),
            quit: false,
        }
    }

    pub fn store(&self) -> &MapStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut MapStore {
        &mut self.store
    }

    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Movement obstacles for this round's policy decisions, snapshotted
    /// before anything mutates.
    pub fn blocking_terrain(&self) -> HashSet<Position> {
        self.store.blocking_terrain()
    }

    /// Round upkeep: tick down move and breath cooldowns on every mobile
    /// entity, then roll burn damage for anything on fire.
    pub fn upkeep(&mut self) -> Result<()> {
        let mut burning: Vec<char> = Vec::new();
        for (_, entity) in self.store.all_mut() {
            if !entity.mobile() {
                continue;
            }
            if entity.move_cooldown() > 0 {
                entity.set_move_cooldown(entity.move_cooldown() - 1);
            }
            if entity.breath_cooldown() > 0 {
                entity.set_breath_cooldown(entity.breath_cooldown() - 1);
            }
            if entity.burning() && entity.health() > 0 {
                burning.push(entity.symbol());
            }
        }
        for symbol in burning {
            if self.dice.chance(BURN_CHANCE) {
                let (_, entity) = self.store.find_mut(symbol)?;
                entity.set_health(entity.health() - 1);
                self.log.push(
                    symbol,
                    "You take 1 damage from the flames",
                    "The dragon takes 1 damage from the flames",
                );
            }
        }
        Ok(())
    }

    /// Actions currently legal for `symbol`, in registry order.
    pub fn legal_actions(&self, symbol: char) -> Result<Vec<Action>> {
        let mut legal = Vec::new();
        for (_, &action) in registry() {
            if action.is_legal(&self.store, symbol)? {
                legal.push(action);
            }
        }
        Ok(legal)
    }

    /// Apply a player keypress. Unrecognized and currently-illegal tokens
    /// are a no-op, not an error; the round still resolves either way.
    /// Returns whether an action was actually applied.
    pub fn apply_player(&mut self, token: char) -> Result<bool> {
        let Some(&action) = registry().get(&token) else {
            return Ok(false);
        };
        if !action.is_legal(&self.store, PLAYER_SYMBOL)? {
            return Ok(false);
        }
        match action.apply(&mut self.store, PLAYER_SYMBOL, &mut self.dice, &mut self.log)? {
            ActionOutcome::Quit => self.quit = true,
            ActionOutcome::Continue => {}
        }
        Ok(true)
    }

    /// Resolve the dragon's turn via the opponent policy.
    pub fn dragon_turn(&mut self, blocked: &HashSet<Position>) -> Result<()> {
        self.policy_turn(DRAGON_SYMBOL, blocked)
    }

    /// Drive the player by the same policy; used by headless autoplay.
    pub fn autoplay_player(&mut self, blocked: &HashSet<Position>) -> Result<()> {
        self.policy_turn(PLAYER_SYMBOL, blocked)
    }

    fn policy_turn(&mut self, symbol: char, blocked: &HashSet<Position>) -> Result<()> {
        let action = policy::choose_action(&self.store, symbol, blocked, &mut self.dice)?;
        // The policy never emits quit, so the outcome is always Continue.
        action.apply(&mut self.store, symbol, &mut self.dice, &mut self.log)?;
        Ok(())
    }

    pub fn outcome(&self) -> Result<Outcome> {
        let (_, player) = self.store.find(PLAYER_SYMBOL)?;
        let (_, dragon) = self.store.find(DRAGON_SYMBOL)?;
        if player.health() > 0 && dragon.health() <= 0 {
            Ok(Outcome::PlayerWins)
        } else if dragon.health() > 0 && player.health() <= 0 {
            Ok(Outcome::DragonWins)
        } else {
            Ok(Outcome::Ongoing)
        }
    }

    // ---------------- read-only render support ----------------

    /// "token: description" lines for the player's legal actions.
    pub fn action_lines(&self, symbol: char) -> Result<Vec<String>> {
        Ok(self
            .legal_actions(symbol)?
            .into_iter()
            .map(|a| format!("{}: {}", a.token(), a.describe()))
            .collect())
    }

    /// Player status flags, or a reassurance when none apply.
    pub fn condition_lines(&self) -> Result<Vec<String>> {
        let (_, player) = self.store.find(PLAYER_SYMBOL)?;
        let mut lines = Vec::new();
        if player.wet() {
            lines.push("You are wet".to_string());
        }
        if player.burning() {
            lines.push("You are burning".to_string());
        }
        if player.blessed() {
            lines.push("You are blessed".to_string());
        }
        if lines.is_empty() {
            lines.push("You are fine".to_string());
        }
        Ok(lines)
    }

    /// Equipped weapon, shield and backpack contents.
    pub fn equipment_lines(&self) -> Result<Vec<String>> {
        let (_, player) = self.store.find(PLAYER_SYMBOL)?;
        let weapon = catalog::weapon(player.weapon())?;
        let shield = catalog::shield(player.shield())?;
        Ok(vec![
            format!("Weapon: {}", weapon.name),
            format!("Shield: {}", shield.name),
            if player.carrying_ore() {
                "Backpack: a lump of iron ore".to_string()
            } else {
                "Backpack: empty".to_string()
            },
        ])
    }

    pub fn health_line(&self) -> Result<String> {
        let (_, player) = self.store.find(PLAYER_SYMBOL)?;
        let (_, dragon) = self.store.find(DRAGON_SYMBOL)?;
        Ok(format!(
            "Health: {} Dragon: {}",
            player.health(),
            dragon.health()
        ))
    }

    /// The last few log messages, rendered for display.
    pub fn log_lines(&self) -> Vec<String> {
        self.log.rendered_tail(LOG_TAIL)
    }
}
