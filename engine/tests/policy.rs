use std::collections::HashSet;

use engine::policy::choose_action;
use engine::{Action, DRAGON_SYMBOL, Dice, Direction, MapStore};

#[test]
fn distant_opponent_forces_the_path_step() {
    // Nothing but open floor: the only legal actions are moves, and the
    // path bias collapses them to the single step toward the player.
    let store = MapStore::parse("@....D\n");
    for seed in 0..32 {
        let mut dice = Dice::from_seed(seed);
        let action = choose_action(&store, DRAGON_SYMBOL, &HashSet::new(), &mut dice)
            .expect("policy resolves");
        assert_eq!(action, Action::Move(Direction::West));
    }
}

#[test]
fn walled_in_dragon_waits() {
    let store = MapStore::parse("###\n#D#\n###\n@..\n");
    let mut dice = Dice::from_seed(3);
    let blocked = store.blocking_terrain();
    let action =
        choose_action(&store, DRAGON_SYMBOL, &blocked, &mut dice).expect("policy resolves");
    assert_eq!(action, Action::Wait);
}

#[test]
fn adjacent_opponent_keeps_the_full_option_set() {
    // Path length one means no bias: attack and every open move stay in
    // the pick. Across a handful of seeds both kinds must show up.
    let store = MapStore::parse("@D..\n");
    let mut attacked = false;
    let mut moved = false;
    for seed in 0..40 {
        let mut dice = Dice::from_seed(seed);
        let action = choose_action(&store, DRAGON_SYMBOL, &HashSet::new(), &mut dice)
            .expect("policy resolves");
        match action {
            Action::Attack => attacked = true,
            Action::Move(_) => moved = true,
            Action::BreatheFire => {}
            other => panic!("unexpected pick {other:?}"),
        }
    }
    assert!(attacked && moved);
}

#[test]
fn breathe_fire_competes_with_the_path_step_in_range() {
    let store = MapStore::parse("D..@\n");
    let mut breathed = false;
    let mut stepped = false;
    for seed in 0..40 {
        let mut dice = Dice::from_seed(seed);
        let action = choose_action(&store, DRAGON_SYMBOL, &HashSet::new(), &mut dice)
            .expect("policy resolves");
        match action {
            Action::BreatheFire => breathed = true,
            Action::Move(Direction::East) => stepped = true,
            other => panic!("unexpected pick {other:?}"),
        }
    }
    assert!(breathed && stepped);
}
