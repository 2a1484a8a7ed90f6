//! The action registry and the rules behind it: one single-character token
//! per action, a legality predicate evaluated fresh against current map
//! state, and the state mutation applied when the action resolves.

use std::sync::OnceLock;

use indexmap::IndexMap;

use crate::Dice;
use crate::catalog;
use crate::error::Result;
use crate::log::MessageLog;
use crate::map::{MapStore, Position};

/// Chance a bash removes an adjacent destructible entity.
pub const BASH_CHANCE: f64 = 0.25;

/// Actors may only improvise shields up to this tier by bashing wood.
const BASH_SHIELD_CAP: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    West,
    East,
    North,
    South,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::West,
        Direction::East,
        Direction::North,
        Direction::South,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::West => (-1, 0),
            Direction::East => (1, 0),
            Direction::North => (0, -1),
            Direction::South => (0, 1),
        }
    }
}

impl Position {
    pub fn step(self, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        self.offset(dx, dy)
    }
}

/// Whether the turn loop keeps running after an action resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move(Direction),
    Attack,
    OpenDoor,
    Pray,
    Bash,
    BreatheFire,
    Quench,
    Wait,
    Quit,
}

/// Token → action table in canonical order; the order is what renderers
/// show, so it is fixed by insertion.
pub fn registry() -> &'static IndexMap<char, Action> {
    static REGISTRY: OnceLock<IndexMap<char, Action>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        IndexMap::from([
            ('h', Action::Move(Direction::West)),
            ('j', Action::Move(Direction::South)),
            ('k', Action::Move(Direction::North)),
            ('l', Action::Move(Direction::East)),
            ('a', Action::Attack),
            ('o', Action::OpenDoor),
            ('p', Action::Pray),
            ('b', Action::Bash),
            ('B', Action::BreatheFire),
            ('q', Action::Quench),
            ('.', Action::Wait),
            ('Q', Action::Quit),
        ])
    })
}

impl Action {
    pub fn token(self) -> char {
        match self {
            Action::Move(Direction::West) => 'h',
            Action::Move(Direction::South) => 'j',
            Action::Move(Direction::North) => 'k',
            Action::Move(Direction::East) => 'l',
            Action::Attack => 'a',
            Action::OpenDoor => 'o',
            Action::Pray => 'p',
            Action::Bash => 'b',
            Action::BreatheFire => 'B',
            Action::Quench => 'q',
            Action::Wait => '.',
            Action::Quit => 'Q',
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Action::Move(Direction::West) => "move west",
            Action::Move(Direction::South) => "move south",
            Action::Move(Direction::North) => "move north",
            Action::Move(Direction::East) => "move east",
            Action::Attack => "attack",
            Action::OpenDoor => "open door",
            Action::Pray => "pray",
            Action::Bash => "bash",
            Action::BreatheFire => "breathe fire",
            Action::Quench => "quench",
            Action::Wait => "wait",
            Action::Quit => "quit",
        }
    }

    /// Pure legality check for `symbol` against the current map state.
    pub fn is_legal(self, store: &MapStore, symbol: char) -> Result<bool> {
        match self {
            Action::Move(direction) => can_move(store, symbol, direction),
            Action::Attack => can_attack(store, symbol),
            Action::OpenDoor => can_open_door(store, symbol),
            Action::Pray => can_pray(store, symbol),
            Action::Bash => can_bash(store, symbol),
            Action::BreatheFire => can_breathe_fire(store, symbol),
            Action::Quench => can_quench(store, symbol),
            Action::Wait | Action::Quit => Ok(true),
        }
    }

    /// Resolve the action for `symbol`, mutating the store and appending to
    /// the message log. Legality is the caller's concern.
    pub fn apply(
        self,
        store: &mut MapStore,
        symbol: char,
        dice: &mut Dice,
        log: &mut MessageLog,
    ) -> Result<ActionOutcome> {
        match self {
            Action::Move(direction) => apply_move(store, symbol, direction, log)?,
            Action::Attack => apply_attack(store, symbol, dice, log)?,
            Action::OpenDoor => apply_open_door(store, symbol, log)?,
            Action::Pray => apply_pray(store, symbol, log)?,
            Action::Bash => apply_bash(store, symbol, dice, log)?,
            Action::BreatheFire => apply_breathe_fire(store, symbol, log)?,
            Action::Quench => apply_quench(store, symbol, log)?,
            Action::Wait => {}
            Action::Quit => return Ok(ActionOutcome::Quit),
        }
        Ok(ActionOutcome::Continue)
    }
}

// ---------------- legality predicates ----------------

fn can_move(store: &MapStore, symbol: char, direction: Direction) -> Result<bool> {
    let (pos, actor) = store.find(symbol)?;
    if actor.move_cooldown() > 0 {
        return Ok(false);
    }
    Ok(!store.is_blocked(pos.step(direction)))
}

fn can_attack(store: &MapStore, symbol: char) -> Result<bool> {
    let (pos, _) = store.find(symbol)?;
    Ok(Direction::ALL
        .iter()
        .any(|&d| store.entities_at(pos.step(d)).any(|e| e.mobile())))
}

fn can_open_door(store: &MapStore, symbol: char) -> Result<bool> {
    let (pos, _) = store.find(symbol)?;
    Ok(Direction::ALL
        .iter()
        .any(|&d| store.entities_at(pos.step(d)).any(|e| e.openable())))
}

fn can_pray(store: &MapStore, symbol: char) -> Result<bool> {
    let (pos, actor) = store.find(symbol)?;
    if actor.blessed() {
        return Ok(false);
    }
    Ok(store.entities_at(pos.offset(0, -1)).any(|e| e.altar()))
}

fn can_bash(store: &MapStore, symbol: char) -> Result<bool> {
    let (pos, actor) = store.find(symbol)?;
    for direction in Direction::ALL {
        for entity in store.entities_at(pos.step(direction)) {
            if !entity.destructible() {
                continue;
            }
            // Ore may only be harvested while holding a shield and not
            // already carrying a lump.
            if !entity.ore() || (!actor.carrying_ore() && actor.has_shield()) {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

fn can_breathe_fire(store: &MapStore, symbol: char) -> Result<bool> {
    let (pos, actor) = store.find(symbol)?;
    if actor.breath_cooldown() > 0 || actor.breath_timer() == 0 {
        return Ok(false);
    }
    let (other_pos, other) = store.other_mobile(symbol)?;
    Ok(!other.burning() && pos.manhattan(other_pos) <= actor.breath_range())
}

fn can_quench(store: &MapStore, symbol: char) -> Result<bool> {
    let (pos, actor) = store.find(symbol)?;
    if !store.entities_at(pos).any(|e| e.water()) {
        return Ok(false);
    }
    let weapon = catalog::weapon(actor.weapon())?;
    Ok(weapon.can_be_blessed && actor.blessed())
}

// ---------------- effects ----------------

fn apply_move(
    store: &mut MapStore,
    symbol: char,
    direction: Direction,
    log: &mut MessageLog,
) -> Result<()> {
    let (pos, actor) = store.find(symbol)?;
    let destination = pos.step(direction);
    let timer = actor.move_timer();
    let into_water = store.entities_at(destination).any(|e| e.water());

    let (_, actor) = store.find_mut(symbol)?;
    actor.set_move_cooldown(timer);
    if into_water {
        if actor.burning() {
            actor.set_burning(false);
            actor.set_wet(true);
            log.push(
                symbol,
                "You douse the flames on your clothes.",
                "Dragons don't catch fire",
            );
        } else if !actor.wet() {
            actor.set_wet(true);
            log.push(
                symbol,
                "You splash around in the water.",
                "The dragon splashes around in the water.",
            );
        }
    }
    store.move_to(symbol, destination)
}

fn apply_attack(
    store: &mut MapStore,
    symbol: char,
    dice: &mut Dice,
    log: &mut MessageLog,
) -> Result<()> {
    let (_, attacker) = store.find(symbol)?;
    let weapon = catalog::weapon(attacker.weapon())?;
    let (_, defender) = store.other_mobile(symbol)?;
    let shield = catalog::shield(defender.shield())?;

    log.push(
        symbol,
        format!("You attack with {}!", weapon.name),
        "The dragon bites you!",
    );

    let mut damage = weapon.damage;
    let mut degrade = false;
    if shield.defense > 0 {
        damage = (damage - shield.defense).max(0);
        log.push(
            symbol,
            format!("{} absorbs {} damage", shield.name, shield.defense),
            format!("{} absorbs {} damage", shield.name, shield.defense),
        );
        // Durability is the percent chance the shield takes damage.
        if dice.percent() < shield.durability as f64 {
            degrade = true;
            log.push(
                symbol,
                format!("{} is damaged", shield.name),
                format!("{} is damaged", shield.name),
            );
        }
    }

    let (_, defender) = store.other_mobile_mut(symbol)?;
    if degrade {
        let tier = defender.shield().saturating_sub(1);
        defender.set_shield(tier);
    }
    defender.set_health(defender.health() - damage);
    Ok(())
}

fn apply_open_door(store: &mut MapStore, symbol: char, log: &mut MessageLog) -> Result<()> {
    let (pos, _) = store.find(symbol)?;
    for direction in Direction::ALL {
        let cell = pos.step(direction);
        if store.entities_at(cell).any(|e| e.openable()) {
            store.remove_at(cell, |e| e.openable());
            log.push(
                symbol,
                "You open the door. It falls to the ground with a loud crash.",
                "The dragon tears the door off its hinges.",
            );
        }
    }
    Ok(())
}

fn apply_pray(store: &mut MapStore, symbol: char, log: &mut MessageLog) -> Result<()> {
    let (_, actor) = store.find_mut(symbol)?;
    actor.set_blessed(true);
    log.push(
        symbol,
        "You feel the favor of the gods upon you",
        "The dragon feels the favor of the gods upon it",
    );
    Ok(())
}

fn apply_bash(
    store: &mut MapStore,
    symbol: char,
    dice: &mut Dice,
    log: &mut MessageLog,
) -> Result<()> {
    let (pos, _) = store.find(symbol)?;

    // Snapshot candidates before mutating: removal must not disturb the
    // scan when several destructibles are adjacent.
    let mut candidates: Vec<(Position, bool, bool)> = Vec::new();
    for direction in Direction::ALL {
        let cell = pos.step(direction);
        for entity in store.entities_at(cell) {
            if entity.destructible() {
                candidates.push((cell, entity.ore(), entity.wood()));
            }
        }
    }

    for (cell, is_ore, is_wood) in candidates {
        if !dice.chance(BASH_CHANCE) {
            continue;
        }
        let (_, actor) = store.find_mut(symbol)?;
        if is_ore {
            actor.set_carrying_ore(true);
            log.push(
                symbol,
                "You pick up a lump of iron ore",
                "The dragon picks up a lump of iron ore",
            );
        }
        if is_wood && actor.shield() < BASH_SHIELD_CAP {
            if !actor.has_shield() {
                log.push(
                    symbol,
                    "You use a splintered piece of wood as a shield",
                    "The dragon uses a splintered piece of wood as a shield",
                );
            } else {
                let next = catalog::shield(actor.shield() + 1)?;
                log.push(
                    symbol,
                    format!("You upgrade your shield to {}", next.name),
                    format!("The dragon upgrades its shield to {}", next.name),
                );
            }
            let tier = actor.shield() + 1;
            actor.set_shield(tier);
        }
        store.remove_at(cell, |e| e.destructible());
    }
    Ok(())
}

fn apply_breathe_fire(store: &mut MapStore, symbol: char, log: &mut MessageLog) -> Result<()> {
    let (_, actor) = store.find(symbol)?;
    let breath_timer = actor.breath_timer();

    let (_, target) = store.other_mobile_mut(symbol)?;
    let target_symbol = target.symbol();
    log.push(
        target_symbol,
        "The dragon breathes fire on you",
        "The dragon giggles as you try to breathe fire on it.",
    );

    if !target.burning() {
        if target.wet() {
            target.set_wet(false);
            log.push(
                target_symbol,
                "Steam rises from your wet clothes.",
                "Steam rises from the dragon's scales.",
            );
        } else {
            target.set_burning(true);
            log.push(target_symbol, "You are on fire!", "The dragon is on fire somehow!");
        }
    }

    // The heat works the target's weapon either way: tempering consumes
    // carried ore, anything not yet tempered melts down a tier.
    let tier = target.weapon();
    if tier != 0 {
        let weapon = catalog::weapon(tier)?;
        if weapon.can_be_tempered && target.carrying_ore() {
            target.set_weapon(tier + 1);
            target.set_carrying_ore(false);
            log.push(
                target_symbol,
                format!("{} is tempered by the heat of the flames.", weapon.name),
                "The dragon's weapon is tempered by the heat.",
            );
        } else if !weapon.is_tempered {
            target.set_weapon(tier - 1);
            log.push(
                target_symbol,
                format!("{} is melted by the heat.", weapon.name),
                "The dragon's weapon is melted by the heat.",
            );
        }
    }

    let (_, actor) = store.find_mut(symbol)?;
    actor.set_breath_cooldown(breath_timer);
    Ok(())
}

fn apply_quench(store: &mut MapStore, symbol: char, log: &mut MessageLog) -> Result<()> {
    let (_, actor) = store.find_mut(symbol)?;
    let tier = actor.weapon() + 1;
    actor.set_weapon(tier);
    actor.set_blessed(false);
    let weapon = catalog::weapon(tier)?;
    log.push(
        symbol,
        format!(
            "You quench your weapon! The gods bless you with {}!",
            weapon.name
        ),
        format!("The gods bless the dragon with {}!", weapon.name),
    );
    Ok(())
}
