use engine::api::{EncounterConfig, simulate_encounter};
use engine::{DRAGON_SYMBOL, MapStore, Outcome, PLAYER_SYMBOL, Session};

fn config(script: &str, autoplay: bool, seed: u64) -> EncounterConfig {
    EncounterConfig {
        map_path: None,
        map_id: None,
        seed,
        max_rounds: 100,
        script: script.to_string(),
        autoplay,
    }
}

#[test]
fn a_scripted_attack_lands_on_the_dragon() {
    let mut session = Session::new(MapStore::parse("@\nD\n"), 5);
    let applied = session.apply_player('a').expect("round resolves");
    assert!(applied);
    let (_, dragon) = session.store().find(DRAGON_SYMBOL).expect("dragon");
    assert_eq!(dragon.health(), 98);
}

#[test]
fn unknown_and_illegal_tokens_are_no_ops() {
    let mut session = Session::new(MapStore::parse("@\nD\n"), 5);
    assert!(!session.apply_player('z').expect("round resolves"));
    // Quench is a known token but illegal on dry land.
    assert!(!session.apply_player('q').expect("round resolves"));
    let (_, dragon) = session.store().find(DRAGON_SYMBOL).expect("dragon");
    assert_eq!(dragon.health(), 100);
}

#[test]
fn upkeep_ticks_cooldowns_down() {
    let mut session = Session::new(MapStore::parse("@.\n.D\n"), 5);
    {
        let (_, dragon) = session.store_mut().find_mut(DRAGON_SYMBOL).expect("dragon");
        dragon.set_move_cooldown(2);
        dragon.set_breath_cooldown(5);
    }
    session.upkeep().expect("upkeep resolves");
    let (_, dragon) = session.store().find(DRAGON_SYMBOL).expect("dragon");
    assert_eq!(dragon.move_cooldown(), 1);
    assert_eq!(dragon.breath_cooldown(), 4);
}

#[test]
fn burn_damage_lands_about_half_the_time() {
    let trials = 200;
    let mut burned = 0;
    for seed in 0..trials {
        let mut session = Session::new(MapStore::parse("@.\n.D\n"), seed);
        {
            let (_, player) = session
                .store_mut()
                .find_mut(PLAYER_SYMBOL)
                .expect("player");
            player.set_burning(true);
        }
        session.upkeep().expect("upkeep resolves");
        let (_, player) = session.store().find(PLAYER_SYMBOL).expect("player");
        if player.health() == 9 {
            burned += 1;
        }
    }
    let rate = burned as f64 / trials as f64;
    assert!((0.35..=0.65).contains(&rate), "rate was {rate}");
}

#[test]
fn outcome_tracks_who_is_still_standing() {
    let mut session = Session::new(MapStore::parse("@.\n.D\n"), 5);
    assert_eq!(session.outcome().expect("both present"), Outcome::Ongoing);

    {
        let (_, dragon) = session.store_mut().find_mut(DRAGON_SYMBOL).expect("dragon");
        dragon.set_health(0);
    }
    assert_eq!(
        session.outcome().expect("both present"),
        Outcome::PlayerWins
    );

    {
        let (_, dragon) = session.store_mut().find_mut(DRAGON_SYMBOL).expect("dragon");
        dragon.set_health(50);
        let (_, player) = session
            .store_mut()
            .find_mut(PLAYER_SYMBOL)
            .expect("player");
        player.set_health(0);
    }
    assert_eq!(
        session.outcome().expect("both present"),
        Outcome::DragonWins
    );
}

#[test]
fn render_lines_describe_the_player_state() {
    let session = Session::new(MapStore::parse("@.\n.D\n"), 5);
    assert_eq!(
        session.condition_lines().expect("player present"),
        vec!["You are fine"]
    );
    assert_eq!(
        session.equipment_lines().expect("player present"),
        vec![
            "Weapon: an untempered sword",
            "Shield: no shield",
            "Backpack: empty",
        ]
    );
    assert_eq!(
        session.health_line().expect("both present"),
        "Health: 10 Dragon: 100"
    );

    let actions = session.action_lines(PLAYER_SYMBOL).expect("player present");
    assert!(actions.contains(&"l: move east".to_string()));
    assert!(actions.contains(&".: wait".to_string()));
    assert!(!actions.iter().any(|a| a.starts_with("B:")));
}

#[test]
fn scripted_quit_ends_the_encounter_immediately() {
    let result = simulate_encounter(config("Q", false, 1)).expect("encounter runs");
    assert_eq!(result.outcome, "quit");
    assert_eq!(result.rounds, 1);
}

#[test]
fn waiting_out_the_clock_is_a_timeout() {
    // No script and no autoplay: the player waits every round. The dragon
    // is sealed in its own cell past breath range, so nobody can die.
    // Breath checks distance only, so the gap has to exceed the range.
    let mut cfg = config("", false, 1);
    cfg.map_path = Some(write_map(
        "#######\n#@#...#\n#######\n###D###\n#######\n",
    ));
    cfg.max_rounds = 10;
    let result = simulate_encounter(cfg).expect("encounter runs");
    assert_eq!(result.outcome, "timeout");
    assert_eq!(result.rounds, 10);
    assert_eq!(result.player_hp_end, 10);
    assert_eq!(result.dragon_hp_end, 100);
}

#[test]
fn autoplay_on_the_builtin_map_reaches_a_verdict_or_times_out() {
    let result = simulate_encounter(config("", true, 7)).expect("encounter runs");
    assert!(["player", "dragon", "timeout"].contains(&result.outcome.as_str()));
    assert!(result.rounds >= 1 && result.rounds <= 100);
    assert!(result.player_hp_end >= 0);
    assert!(result.dragon_hp_end >= 0);
}

#[test]
fn the_same_seed_replays_the_same_encounter() {
    let a = simulate_encounter(config("", true, 42)).expect("encounter runs");
    let b = simulate_encounter(config("", true, 42)).expect("encounter runs");
    assert_eq!(a.outcome, b.outcome);
    assert_eq!(a.rounds, b.rounds);
    assert_eq!(a.player_hp_end, b.player_hp_end);
    assert_eq!(a.dragon_hp_end, b.dragon_hp_end);
    assert_eq!(a.log, b.log);
}

#[test]
fn config_deserializes_with_defaults() {
    let cfg: EncounterConfig = serde_json::from_str("{}").expect("valid json");
    assert_eq!(cfg.seed, 0);
    assert_eq!(cfg.max_rounds, 200);
    assert!(cfg.script.is_empty());
    assert!(!cfg.autoplay);
    assert!(cfg.map_path.is_none() && cfg.map_id.is_none());

    let cfg: EncounterConfig =
        serde_json::from_str(r#"{"seed": 9, "script": "la", "autoplay": true}"#)
            .expect("valid json");
    assert_eq!(cfg.seed, 9);
    assert_eq!(cfg.script, "la");
    assert!(cfg.autoplay);
}

#[test]
fn unknown_builtin_map_is_an_error() {
    let mut cfg = config("", false, 1);
    cfg.map_id = Some("volcano".to_string());
    assert!(simulate_encounter(cfg).is_err());
}

fn write_map(text: &str) -> String {
    let path = std::env::temp_dir().join(format!(
        "encounter-map-{}.txt",
        std::process::id()
    ));
    std::fs::write(&path, text).expect("temp map written");
    path.to_string_lossy().into_owned()
}
