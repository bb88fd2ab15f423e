use ladders_core::{Command, Difficulty, Event, OvershootRule, Phase, Rules};
use ladders_engine::{self as engine, GameEngine, ManualClock};
use ladders_system_autoplay::{Autoplay, Config};
use ladders_system_dice::Dice;

#[test]
fn plays_seeded_match_to_a_winner() {
    let outcome = play(Rules::default(), 2024, 10_000);
    assert_eq!(outcome.phase, Phase::Finished);
    assert!(matches!(outcome.events.last(), Some(Event::GameWon { .. })));

    let winners = outcome
        .events
        .iter()
        .filter(|event| matches!(event, Event::GameWon { .. }))
        .count();
    assert_eq!(winners, 1);
    assert!(!outcome
        .events
        .iter()
        .any(|event| matches!(event, Event::CommandRejected { .. })));
}

#[test]
fn seeded_matches_are_reproducible() {
    let first = play(Rules::default(), 99, 10_000);
    let second = play(Rules::default(), 99, 10_000);
    assert_eq!(first.events, second.events);
}

#[test]
fn stay_put_matches_still_finish() {
    let rules = Rules {
        overshoot: OvershootRule::StayPut,
        ..Rules::default()
    };
    let outcome = play(rules, 7, 10_000);
    assert_eq!(outcome.phase, Phase::Finished);
}

#[test]
fn restart_after_win_plays_a_second_match() {
    let mut engine = GameEngine::with_clock(Rules::default(), ManualClock::default());
    let mut autoplay = Autoplay::new(Config::new(10_000));
    let mut dice = Dice::new(2024);
    let mut history = Vec::new();

    pump(&mut engine, &mut autoplay, &mut dice, initialize(), &mut history);
    assert_eq!(engine.phase(), Phase::Finished);
    assert!(autoplay.is_stopped());
    let first_match = history.len();

    pump(&mut engine, &mut autoplay, &mut dice, Command::Restart, &mut history);
    assert_eq!(engine.phase(), Phase::Finished);
    assert!(matches!(
        history.get(first_match),
        Some(Event::GameStarted { .. })
    ));
    assert!(matches!(
        history.get(first_match + 1),
        Some(Event::MoveResolved { .. })
    ));
    let winners = history
        .iter()
        .filter(|event| matches!(event, Event::GameWon { .. }))
        .count();
    assert_eq!(winners, 2);
}

#[test]
fn turn_budget_stops_play_early() {
    let outcome = play(Rules::default(), 5, 3);
    let moves = outcome
        .events
        .iter()
        .filter(|event| matches!(event, Event::MoveResolved { .. }))
        .count();
    assert_eq!(moves, 3);
    assert_eq!(outcome.phase, Phase::Playing);
}

struct Outcome {
    phase: Phase,
    events: Vec<Event>,
}

fn play(rules: Rules, seed: u64, max_turns: u32) -> Outcome {
    let mut engine = GameEngine::with_clock(rules, ManualClock::default());
    let mut autoplay = Autoplay::new(Config::new(max_turns));
    let mut dice = Dice::new(seed);
    let mut history = Vec::new();

    pump(
        &mut engine,
        &mut autoplay,
        &mut dice,
        initialize(),
        &mut history,
    );

    Outcome {
        phase: engine.phase(),
        events: history,
    }
}

fn initialize() -> Command {
    Command::Initialize {
        difficulty: Difficulty::Easy,
        player_names: vec!["Ada".to_owned(), "Brian".to_owned()],
    }
}

fn pump(
    engine: &mut GameEngine,
    autoplay: &mut Autoplay,
    dice: &mut Dice,
    first: Command,
    history: &mut Vec<Event>,
) {
    let mut commands = vec![first];
    while !commands.is_empty() {
        let mut events = Vec::new();
        for command in commands.drain(..) {
            engine::apply(engine, command, &mut events);
        }
        autoplay.handle(&events, || dice.roll(), &mut commands);
        history.extend(events);
    }
}
