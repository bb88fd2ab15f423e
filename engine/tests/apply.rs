use ladders_core::{Command, Difficulty, Event, GameError, Phase, PlayerId, StateError};
use ladders_engine::{self as engine, GameEngine, ManualClock};

fn submit(engine: &mut GameEngine, command: Command) -> Vec<Event> {
    let mut events = Vec::new();
    engine::apply(engine, command, &mut events);
    events
}

fn initialize(names: &[&str]) -> Command {
    Command::Initialize {
        difficulty: Difficulty::Easy,
        player_names: names.iter().map(|name| (*name).to_owned()).collect(),
    }
}

fn started_engine(names: &[&str]) -> GameEngine {
    let mut engine = GameEngine::with_clock(Default::default(), ManualClock::default());
    let _ = submit(&mut engine, initialize(names));
    engine
}

#[test]
fn initialize_announces_players() {
    let mut engine = GameEngine::new();
    let events = submit(&mut engine, initialize(&["Ada", ""]));

    match events.as_slice() {
        [Event::GameStarted {
            difficulty,
            players,
        }] => {
            assert_eq!(*difficulty, Difficulty::Easy);
            let names: Vec<&str> = players.iter().map(|player| player.name.as_str()).collect();
            assert_eq!(names, vec!["Ada", "Player 2"]);
        }
        other => panic!("unexpected events: {other:?}"),
    }
}

#[test]
fn plain_move_emits_single_event() {
    let mut engine = started_engine(&["Ada"]);
    let events = submit(&mut engine, Command::ResolveMove { dice_value: 3 });
    assert!(matches!(
        events.as_slice(),
        [Event::MoveResolved { result }] if result.final_position == 3
    ));
}

#[test]
fn winning_move_is_followed_by_game_won() {
    let mut engine = started_engine(&["Ada"]);
    for dice_value in [6, 5, 5] {
        let _ = submit(&mut engine, Command::ResolveMove { dice_value });
    }

    let events = submit(&mut engine, Command::ResolveMove { dice_value: 6 });
    assert_eq!(events.len(), 2);
    assert!(matches!(&events[0], Event::MoveResolved { result } if result.is_winner));
    assert_eq!(
        events[1],
        Event::GameWon {
            player: PlayerId::new(1)
        }
    );
}

#[test]
fn rejected_command_reports_error() {
    let mut engine = GameEngine::new();
    let events = submit(&mut engine, Command::AdvanceTurn);
    assert_eq!(
        events,
        vec![Event::CommandRejected {
            error: GameError::State(StateError::WrongPhase {
                operation: "advance the turn".to_owned(),
                phase: Phase::Setup,
            }),
        }]
    );
    assert_eq!(engine.phase(), Phase::Setup);
}

#[test]
fn turn_advance_names_next_player() {
    let mut engine = started_engine(&["Ada", "Brian"]);
    assert_eq!(
        submit(&mut engine, Command::AdvanceTurn),
        vec![Event::TurnAdvanced {
            player: PlayerId::new(2)
        }]
    );
}

#[test]
fn restart_and_abandon_emit_lifecycle_events() {
    let mut engine = started_engine(&["Ada"]);
    let _ = submit(&mut engine, Command::ResolveMove { dice_value: 4 });

    let restarted = submit(&mut engine, Command::Restart);
    assert!(matches!(
        restarted.as_slice(),
        [Event::GameStarted { players, .. }] if players[0].position == 0
    ));

    assert_eq!(
        submit(&mut engine, Command::Abandon),
        vec![Event::GameAbandoned]
    );
    assert_eq!(engine.phase(), Phase::Setup);
    assert!(matches!(
        submit(&mut engine, Command::Restart).as_slice(),
        [Event::CommandRejected { .. }]
    ));
}
