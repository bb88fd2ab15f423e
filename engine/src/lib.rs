#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative match state for Ladders.
//!
//! [`GameEngine`] owns the board, the roster and the log of a single match.
//! Adapters either call its methods directly or feed it [`Command`] values
//! through [`apply`] and react to the [`Event`] values it emits. The engine
//! never rolls dice itself; every move arrives with its die value.

mod board;
mod log;
mod movement;
mod narration;
mod roster;

use ladders_core::{
    Command, Difficulty, Event, GameError, InitSummary, MoveResult, Phase, PlayerSnapshot, Rules,
    StateError, StateSnapshot, ValidationError, MAX_DIE_VALUE, MIN_DIE_VALUE,
};

pub use board::BoardTopology;
pub use log::{Clock, GameLog, LogEntry, ManualClock, SystemClock};
pub use roster::{MoveRecord, Player, PlayerRoster};

/// Single match of snakes and ladders.
#[derive(Debug)]
pub struct GameEngine {
    rules: Rules,
    phase: Phase,
    board: Option<BoardTopology>,
    roster: PlayerRoster,
    log: GameLog,
}

impl GameEngine {
    /// Creates an engine in setup with the default rules.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rules(Rules::default())
    }

    /// Creates an engine in setup with the provided rules.
    #[must_use]
    pub fn with_rules(rules: Rules) -> Self {
        Self::from_parts(rules, GameLog::new())
    }

    /// Creates an engine whose log is stamped by `clock`.
    #[must_use]
    pub fn with_clock(rules: Rules, clock: impl Clock + 'static) -> Self {
        Self::from_parts(rules, GameLog::with_clock(clock))
    }

    fn from_parts(rules: Rules, log: GameLog) -> Self {
        Self {
            rules,
            phase: Phase::Setup,
            board: None,
            roster: PlayerRoster::new(),
            log,
        }
    }

    /// Rule variants in force.
    #[must_use]
    pub const fn rules(&self) -> Rules {
        self.rules
    }

    /// Current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Board of the current match, `None` during setup.
    #[must_use]
    pub const fn board(&self) -> Option<&BoardTopology> {
        self.board.as_ref()
    }

    /// Players of the current match.
    #[must_use]
    pub const fn roster(&self) -> &PlayerRoster {
        &self.roster
    }

    /// Human-readable trail of the current match.
    #[must_use]
    pub const fn log(&self) -> &GameLog {
        &self.log
    }

    /// Builds the board and roster and starts a match, replacing any match
    /// already in progress.
    pub fn initialize<S: AsRef<str>>(
        &mut self,
        difficulty: Difficulty,
        player_names: &[S],
    ) -> Result<InitSummary, GameError> {
        if player_names.is_empty() {
            return Err(ValidationError::NoPlayers.into());
        }
        let board = BoardTopology::new(difficulty)?;
        let mut roster = PlayerRoster::new();
        roster.add_players(player_names, self.rules.start.square())?;

        let summary = InitSummary {
            board: board.info(),
            players: roster.players().iter().map(Player::snapshot).collect(),
            max_squares: board.max_squares(),
        };

        self.board = Some(board);
        self.roster = roster;
        self.log.clear();
        self.log
            .append(narration::game_started(difficulty, self.roster.len()));
        self.phase = Phase::Playing;
        Ok(summary)
    }

    /// Moves the current player by `dice_value` and reports what happened.
    ///
    /// A move ending on the final square finishes the match. The turn is not
    /// passed on; callers do that with [`GameEngine::advance_turn`].
    pub fn resolve_move(&mut self, dice_value: u8) -> Result<MoveResult, GameError> {
        self.require_phase("resolve a move", &[Phase::Playing])?;
        if !(MIN_DIE_VALUE..=MAX_DIE_VALUE).contains(&dice_value) {
            return Err(ValidationError::DiceOutOfRange(dice_value).into());
        }
        let board = self.board.as_ref().ok_or_else(|| StateError::WrongPhase {
            operation: "resolve a move".to_owned(),
            phase: self.phase,
        })?;
        let max_squares = board.max_squares();

        let current = self.roster.current_player()?;
        let id = current.id();
        let previous_position = current.position();
        let movement = movement::resolve(board, self.rules.overshoot, previous_position, dice_value);

        if movement.has_moved() {
            self.roster
                .move_player(id, movement.final_position, dice_value)?;
        }
        let player = self
            .roster
            .player(id)
            .map(Player::snapshot)
            .ok_or(StateError::UnknownPlayer(id.get()))?;

        let is_winner = movement.final_position == max_squares;
        let result = MoveResult {
            player,
            dice_value,
            previous_position,
            new_position: movement.new_position,
            would_be_position: movement.would_be_position,
            final_position: movement.final_position,
            destination: movement.destination,
            has_moved: movement.has_moved(),
            has_landed: movement.has_landed(),
            bounced_back: movement.bounced_back(),
            moved_by: movement.moved_by,
            is_winner,
            forward_path: movement.forward_path,
            backward_path: movement.backward_path,
        };

        self.log
            .append(narration::move_resolved(&result, max_squares));
        if is_winner {
            self.phase = Phase::Finished;
            self.log.append(narration::player_won(&result.player.name));
        }
        Ok(result)
    }

    /// Passes the turn to the next player.
    pub fn advance_turn(&mut self) -> Result<PlayerSnapshot, GameError> {
        self.require_phase("advance the turn", &[Phase::Playing])?;
        Ok(self.roster.advance_turn()?.snapshot())
    }

    /// Starts the same match again: same board and players, fresh positions
    /// and log.
    pub fn restart(&mut self) -> Result<(), GameError> {
        self.require_phase("restart", &[Phase::Playing, Phase::Finished])?;
        let difficulty = self
            .board
            .as_ref()
            .map(BoardTopology::difficulty)
            .ok_or_else(|| StateError::WrongPhase {
                operation: "restart".to_owned(),
                phase: self.phase,
            })?;

        self.roster.reset(self.rules.start.square());
        self.log.clear();
        self.log
            .append(narration::game_started(difficulty, self.roster.len()));
        self.phase = Phase::Playing;
        Ok(())
    }

    /// Drops the match and returns to setup.
    pub fn abandon(&mut self) -> Result<(), GameError> {
        self.require_phase("abandon", &[Phase::Playing, Phase::Finished])?;
        self.board = None;
        self.roster = PlayerRoster::new();
        self.log.clear();
        self.phase = Phase::Setup;
        Ok(())
    }

    /// Captures a read-only snapshot of the match.
    #[must_use]
    pub fn state(&self) -> StateSnapshot {
        StateSnapshot {
            phase: self.phase,
            difficulty: self.board.as_ref().map(BoardTopology::difficulty),
            max_squares: self.board.as_ref().map(BoardTopology::max_squares),
            current_player: self.roster.current_player().ok().map(Player::snapshot),
            standings: self
                .roster
                .standings()
                .into_iter()
                .map(Player::snapshot)
                .collect(),
        }
    }

    fn require_phase(&self, operation: &str, allowed: &[Phase]) -> Result<(), StateError> {
        if allowed.contains(&self.phase) {
            Ok(())
        } else {
            Err(StateError::WrongPhase {
                operation: operation.to_owned(),
                phase: self.phase,
            })
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Executes `command` against the engine and records the resulting events.
///
/// Refused commands leave the engine untouched and emit
/// [`Event::CommandRejected`].
pub fn apply(engine: &mut GameEngine, command: Command, out_events: &mut Vec<Event>) {
    let outcome = match command {
        Command::Initialize {
            difficulty,
            player_names,
        } => engine.initialize(difficulty, &player_names).map(|summary| {
            out_events.push(Event::GameStarted {
                difficulty,
                players: summary.players,
            });
        }),
        Command::ResolveMove { dice_value } => engine.resolve_move(dice_value).map(|result| {
            let winner = result.is_winner.then_some(result.player.id);
            out_events.push(Event::MoveResolved { result });
            if let Some(player) = winner {
                out_events.push(Event::GameWon { player });
            }
        }),
        Command::AdvanceTurn => engine.advance_turn().map(|player| {
            out_events.push(Event::TurnAdvanced { player: player.id });
        }),
        Command::Restart => engine.restart().map(|()| {
            if let Some(board) = engine.board() {
                out_events.push(Event::GameStarted {
                    difficulty: board.difficulty(),
                    players: engine.roster().players().iter().map(Player::snapshot).collect(),
                });
            }
        }),
        Command::Abandon => engine.abandon().map(|()| out_events.push(Event::GameAbandoned)),
    };

    if let Err(error) = outcome {
        out_events.push(Event::CommandRejected { error });
    }
}

/// Query functions that provide read-only access to the engine state.
pub mod query {
    use ladders_core::{BoardInfo, PlayerId, Square};

    use super::{GameEngine, LogEntry, MoveRecord};

    /// Layout of every square on the current board, empty during setup.
    #[must_use]
    pub fn layout(engine: &GameEngine) -> Vec<Square> {
        engine
            .board()
            .map(|board| board.generate_layout())
            .unwrap_or_default()
    }

    /// Summary of the current board, `None` during setup.
    #[must_use]
    pub fn board_info(engine: &GameEngine) -> Option<BoardInfo> {
        engine.board().map(|board| board.info())
    }

    /// The last `count` log entries rendered as `[HH:MM:SS] message`.
    #[must_use]
    pub fn recent_log_lines(engine: &GameEngine, count: usize) -> Vec<String> {
        engine
            .log()
            .recent(count)
            .iter()
            .map(LogEntry::to_string)
            .collect()
    }

    /// Moves made by `player` in the current match.
    #[must_use]
    pub fn move_history(engine: &GameEngine, player: PlayerId) -> Option<&[MoveRecord]> {
        engine.roster().player(player).map(|player| player.history())
    }

    /// Player whose token sits on the final square, if the match is over.
    #[must_use]
    pub fn winner(engine: &GameEngine) -> Option<PlayerId> {
        let max_squares = engine.board()?.max_squares();
        engine
            .roster()
            .players()
            .iter()
            .find(|player| player.position() == max_squares)
            .map(|player| player.id())
    }
}
