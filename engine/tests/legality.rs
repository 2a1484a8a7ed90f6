use engine::{Action, DRAGON_SYMBOL, Direction, MapStore, PLAYER_SYMBOL, registry};

fn legal(store: &MapStore, symbol: char, token: char) -> bool {
    registry()[&token]
        .is_legal(store, symbol)
        .expect("actor exists")
}

#[test]
fn registry_preserves_canonical_token_order() {
    let tokens: Vec<char> = registry().keys().copied().collect();
    assert_eq!(
        tokens,
        vec!['h', 'j', 'k', 'l', 'a', 'o', 'p', 'b', 'B', 'q', '.', 'Q']
    );
}

#[test]
fn wait_and_quit_are_always_legal() {
    let store = MapStore::parse("@\nD\n");
    assert!(legal(&store, PLAYER_SYMBOL, '.'));
    assert!(legal(&store, PLAYER_SYMBOL, 'Q'));
}

#[test]
fn every_move_into_a_blocking_entity_is_illegal() {
    let store = MapStore::parse("###\n#@#\n###\n.D\n");
    for token in ['h', 'j', 'k', 'l'] {
        assert!(!legal(&store, PLAYER_SYMBOL, token), "move {token}");
    }
}

#[test]
fn moves_into_open_or_water_cells_are_legal() {
    // The dragon sits to the south-west, off every orthogonal step.
    let store = MapStore::parse(".~.\n.@.\nD..\n");
    assert!(legal(&store, PLAYER_SYMBOL, 'k'), "north into water");
    assert!(legal(&store, PLAYER_SYMBOL, 'l'));
    assert!(legal(&store, PLAYER_SYMBOL, 'h'));
    assert!(legal(&store, PLAYER_SYMBOL, 'j'));
}

#[test]
fn move_cooldown_blocks_every_direction() {
    let mut store = MapStore::parse(".@.\nD..\n");
    assert!(legal(&store, PLAYER_SYMBOL, 'l'));
    let (_, player) = store.find_mut(PLAYER_SYMBOL).expect("player");
    player.set_move_cooldown(1);
    for token in ['h', 'j', 'k', 'l'] {
        assert!(!legal(&store, PLAYER_SYMBOL, token));
    }
}

#[test]
fn attack_requires_an_adjacent_mobile() {
    let adjacent = MapStore::parse("@D\n");
    assert!(legal(&adjacent, PLAYER_SYMBOL, 'a'));
    assert!(legal(&adjacent, DRAGON_SYMBOL, 'a'));

    let apart = MapStore::parse("@.D\n");
    assert!(!legal(&apart, PLAYER_SYMBOL, 'a'));
    let diagonal = MapStore::parse("@.\n.D\n");
    assert!(!legal(&diagonal, PLAYER_SYMBOL, 'a'));
}

#[test]
fn open_door_requires_an_adjacent_door() {
    let store = MapStore::parse("@+\nD.\n");
    assert!(legal(&store, PLAYER_SYMBOL, 'o'));
    let none = MapStore::parse("@-\nD.\n");
    assert!(!legal(&none, PLAYER_SYMBOL, 'o'));
}

#[test]
fn pray_requires_an_altar_due_north_and_no_standing_blessing() {
    let mut store = MapStore::parse("*\n@\nD\n");
    assert!(legal(&store, PLAYER_SYMBOL, 'p'));

    let (_, player) = store.find_mut(PLAYER_SYMBOL).expect("player");
    player.set_blessed(true);
    assert!(!legal(&store, PLAYER_SYMBOL, 'p'));

    // Altar south of the player does not count.
    let south = MapStore::parse("@\n*\nD\n");
    assert!(!legal(&south, PLAYER_SYMBOL, 'p'));
}

#[test]
fn bash_wood_is_legal_regardless_of_equipment() {
    let store = MapStore::parse("@-\nD.\n");
    assert!(legal(&store, PLAYER_SYMBOL, 'b'));
}

#[test]
fn bash_ore_needs_a_shield_and_an_empty_backpack() {
    // Ore is only bashable while holding a shield and not already
    // carrying a lump.
    let mut store = MapStore::parse("@%\nD.\n");
    assert!(!legal(&store, PLAYER_SYMBOL, 'b'));

    let (_, player) = store.find_mut(PLAYER_SYMBOL).expect("player");
    player.set_shield(1);
    assert!(legal(&store, PLAYER_SYMBOL, 'b'));

    let (_, player) = store.find_mut(PLAYER_SYMBOL).expect("player");
    player.set_carrying_ore(true);
    assert!(!legal(&store, PLAYER_SYMBOL, 'b'));
}

#[test]
fn breathe_fire_is_never_legal_without_a_breath_timer() {
    // The player archetype has no breath timer at all.
    let store = MapStore::parse("@D\n");
    assert!(!legal(&store, PLAYER_SYMBOL, 'B'));
}

#[test]
fn breathe_fire_range_cooldown_and_burning_target() {
    let in_range = MapStore::parse("D..@\n");
    assert!(legal(&in_range, DRAGON_SYMBOL, 'B'));

    let out_of_range = MapStore::parse("D...@\n");
    assert!(!legal(&out_of_range, DRAGON_SYMBOL, 'B'));

    let mut cooling = MapStore::parse("D..@\n");
    let (_, dragon) = cooling.find_mut(DRAGON_SYMBOL).expect("dragon");
    dragon.set_breath_cooldown(2);
    assert!(!legal(&cooling, DRAGON_SYMBOL, 'B'));

    let mut ablaze = MapStore::parse("D..@\n");
    let (_, player) = ablaze.find_mut(PLAYER_SYMBOL).expect("player");
    player.set_burning(true);
    assert!(!legal(&ablaze, DRAGON_SYMBOL, 'B'));
}

#[test]
fn quench_needs_water_blessing_and_a_blessable_weapon() {
    let mut store = MapStore::parse("@~\nD.\n");
    let mut dice = engine::Dice::from_seed(1);
    let mut log = engine::MessageLog::new();
    Action::Move(Direction::East)
        .apply(&mut store, PLAYER_SYMBOL, &mut dice, &mut log)
        .expect("move resolves");

    // Standing in water, but the untempered sword is not blessable.
    assert!(!legal(&store, PLAYER_SYMBOL, 'q'));

    let (_, player) = store.find_mut(PLAYER_SYMBOL).expect("player");
    player.set_weapon(3);
    assert!(!legal(&store, PLAYER_SYMBOL, 'q'), "still unblessed");

    let (_, player) = store.find_mut(PLAYER_SYMBOL).expect("player");
    player.set_blessed(true);
    assert!(legal(&store, PLAYER_SYMBOL, 'q'));

    // Off the water cell the same setup is illegal.
    let mut dry = MapStore::parse("@.\nD.\n");
    let (_, player) = dry.find_mut(PLAYER_SYMBOL).expect("player");
    player.set_weapon(3);
    player.set_blessed(true);
    assert!(!legal(&dry, PLAYER_SYMBOL, 'q'));
}
