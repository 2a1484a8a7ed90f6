//! The opponent's decision policy: a uniform random pick over the legal
//! actions, biased toward closing distance by swapping the free directional
//! moves for the first step of a shortest path to the other combatant.

use std::collections::HashSet;

use crate::Dice;
use crate::actions::{Action, registry};
use crate::error::Result;
use crate::map::{MapStore, Position};
use crate::path::find_path;

/// Choose an action for `symbol`. `blocked` is the set of cells movement
/// must route around (blocking, non-mobile entities), snapshotted at the
/// top of the round. Works for either combatant, which is what headless
/// autoplay leans on.
pub fn choose_action(
    store: &MapStore,
    symbol: char,
    blocked: &HashSet<Position>,
    dice: &mut Dice,
) -> Result<Action> {
    let mut legal: Vec<Action> = Vec::new();
    for (_, &action) in registry() {
        if matches!(action, Action::Wait | Action::Quit) {
            continue;
        }
        if action.is_legal(store, symbol)? {
            legal.push(action);
        }
    }

    let (start, _) = store.find(symbol)?;
    let (goal, _) = store.other_mobile(symbol)?;
    let path = find_path(start, goal, blocked);

    // A single-step path means the opponent is adjacent; only bias toward
    // the path while there is still ground to cover. The path step replaces
    // every other directional option but stays an ordinary member of the
    // pick, no extra weight.
    if path.len() > 1 {
        let step = Action::Move(path[0]);
        if legal.contains(&step) {
            legal.retain(|a| !matches!(a, Action::Move(_)));
            legal.push(step);
        }
    }

    let action = match dice.pick(&legal) {
        Some(&action) => action,
        None => Action::Wait,
    };
    tracing::debug!(
        actor = %symbol,
        action = action.describe(),
        path_len = path.len(),
        options = legal.len(),
        "policy choice"
    );
    Ok(action)
}
