use gamecrush_core::{
    standard_modifiers, Event, EventBus, GameConfig, HandKind, HandResult, RunAction, RunError,
    RunPhase, RunState, HAND_SIZE, STATUS_HAND_DRAWN, STATUS_NEW_RUN, STATUS_READY,
};

#[test]
fn run_starts_idle() {
    let run = RunState::new(GameConfig::standard(), 1);
    assert_eq!(run.phase(), RunPhase::Idle);
    assert!(run.modifier().is_none());
    assert_eq!(run.result(), &HandResult::empty());
    assert_eq!(run.status(), STATUS_READY);
}

#[test]
fn draw_without_modifier_is_rejected() {
    let mut run = RunState::new(GameConfig::standard(), 1);
    let mut events = EventBus::default();
    assert!(matches!(
        run.draw_hand(&mut events),
        Err(RunError::NoActiveModifier)
    ));
    assert!(events.is_empty());
}

#[test]
fn new_run_picks_from_catalog_and_resets() {
    let catalog = standard_modifiers();
    let mut run = RunState::new(GameConfig::standard(), 3);
    let mut events = EventBus::default();
    for _ in 0..10 {
        run.new_run(&mut events).unwrap();
        run.draw_hand(&mut events).unwrap();
        assert!(!run.result().is_empty());

        let picked = run.new_run(&mut events).unwrap().clone();
        assert!(catalog.contains(&picked));
        assert_eq!(run.phase(), RunPhase::Active);
        assert_eq!(run.result(), &HandResult::empty());
        assert_eq!(run.status(), STATUS_NEW_RUN);
    }
}

#[test]
fn modifier_persists_across_draws() {
    let mut run = RunState::new(GameConfig::standard(), 8);
    let mut events = EventBus::default();
    let active = run.new_run(&mut events).unwrap().clone();
    for _ in 0..25 {
        let result = run.draw_hand(&mut events).unwrap().clone();
        assert_eq!(result.hand.len(), HAND_SIZE);
        assert_ne!(result.kind, HandKind::NoHand);
        assert_eq!(run.modifier(), Some(&active));
        assert_eq!(run.status(), STATUS_HAND_DRAWN);
        let expected = HandResult::evaluate(result.hand.clone(), &active, &run.tables);
        assert_eq!(result, expected);
    }
}

#[test]
fn events_follow_actions() {
    let mut run = RunState::new(GameConfig::standard(), 21);
    let mut events = EventBus::default();
    run.apply(RunAction::NewRun, &mut events).unwrap();
    run.apply(RunAction::Draw, &mut events).unwrap();
    let drained: Vec<Event> = events.drain().collect();
    assert_eq!(drained.len(), 2);
    let Event::RunStarted { modifier, .. } = &drained[0] else {
        panic!("expected run start, got {:?}", drained[0]);
    };
    assert_eq!(Some(modifier), run.modifier().map(|m| &m.name));
    let Event::HandDrawn { hand, kind, score } = &drained[1] else {
        panic!("expected hand drawn, got {:?}", drained[1]);
    };
    assert_eq!(hand, &run.result().hand);
    assert_eq!(*kind, run.result().kind);
    assert_eq!(*score, run.result().score);
}

#[test]
fn sample_hand_leaves_result_untouched() {
    let mut run = RunState::new(GameConfig::standard(), 4);
    let mut events = EventBus::default();
    run.new_run(&mut events).unwrap();
    let sampled = run.sample_hand().unwrap();
    assert_eq!(sampled.hand.len(), HAND_SIZE);
    assert_eq!(run.result(), &HandResult::empty());
    assert!(events.drain().count() == 1);
}

#[test]
fn empty_catalog_cannot_start_a_run() {
    let mut config = GameConfig::standard();
    config.modifiers.clear();
    let mut run = RunState::new(config, 1);
    let mut events = EventBus::default();
    assert!(matches!(
        run.new_run(&mut events),
        Err(RunError::EmptyCatalog)
    ));
    assert_eq!(run.phase(), RunPhase::Idle);
}

#[test]
fn same_seed_replays_identically() {
    let play = |seed| {
        let mut run = RunState::new(GameConfig::standard(), seed);
        let mut events = EventBus::default();
        run.new_run(&mut events).unwrap();
        (0..5)
            .map(|_| run.draw_hand(&mut events).unwrap().clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(play(77), play(77));
}

#[test]
fn actions_parse_from_json() {
    let actions: Vec<RunAction> =
        serde_json::from_str(r#"[{"action":"new_run"},{"action":"draw"}]"#).unwrap();
    assert_eq!(actions, vec![RunAction::NewRun, RunAction::Draw]);
}

#[test]
fn results_serialize_with_rank_names() {
    let result = HandResult {
        hand: vec![gamecrush_core::Rank::BlackJoker, gamecrush_core::Rank::RedJoker],
        kind: HandKind::Rocket,
        score: 233,
    };
    let json = serde_json::to_string(&result).unwrap();
    assert_eq!(
        json,
        r#"{"hand":["BlackJoker","RedJoker"],"kind":"Rocket","score":233}"#
    );
}

#[test]
fn validated_extreme_config_draws_without_overflow() {
    let mut config = GameConfig::standard();
    config.modifiers = vec![gamecrush_core::Modifier::new("Max", "+max", i64::MAX, 1.0)];
    for rule in &mut config.hands {
        rule.base = i64::MAX;
    }
    assert!(config.validate().is_ok());
    let mut run = RunState::new(config, 13);
    let mut events = EventBus::default();
    run.new_run(&mut events).unwrap();
    let result = run.draw_hand(&mut events).unwrap();
    assert!(result.score >= i64::MAX as u64);
}
