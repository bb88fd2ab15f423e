//! Failure taxonomy shared by every Ladders crate.

use serde::{Deserialize, Serialize};

use crate::Phase;

/// Board configuration problems. Fatal to the operation that hit them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum ConfigError {
    /// The provided key does not name a known difficulty preset.
    #[error("unknown difficulty `{0}` (expected easy, medium or hard)")]
    UnknownDifficulty(String),
    /// The board needs room for a start and a finish.
    #[error("board needs at least two squares, got {0}")]
    TooSmall(u32),
    /// The grid dimensions do not cover exactly the configured square count.
    #[error("a {columns}x{rows} grid cannot hold {max_squares} squares")]
    GridMismatch {
        /// Configured column count.
        columns: u32,
        /// Configured row count.
        rows: u32,
        /// Configured square count.
        max_squares: u32,
    },
    /// A snake or ladder endpoint lies outside the board.
    #[error("square {square} lies outside 1..={max_squares}")]
    OutOfBounds {
        /// Offending square.
        square: u32,
        /// Last square on the board.
        max_squares: u32,
    },
    /// A snake must lead to a lower square.
    #[error("snake at {head} must lead down, not to {tail}")]
    SnakeNotDescending {
        /// Square that triggers the snake.
        head: u32,
        /// Square the snake leads to.
        tail: u32,
    },
    /// A ladder must lead to a higher square.
    #[error("ladder at {bottom} must lead up, not to {top}")]
    LadderNotAscending {
        /// Square that triggers the ladder.
        bottom: u32,
        /// Square the ladder leads to.
        top: u32,
    },
    /// Two snakes or ladders start on the same square.
    #[error("square {0} starts more than one snake or ladder")]
    DuplicateStart(u32),
    /// The final square cannot trigger a transition.
    #[error("square {0} is the final square and cannot start a snake or ladder")]
    StartOnFinalSquare(u32),
}

/// Caller input that must be corrected before retrying.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum ValidationError {
    /// A match needs at least one player.
    #[error("at least one player is required")]
    NoPlayers,
    /// Die values must be a face of a six-sided die.
    #[error("dice value {0} is outside 1..=6")]
    DiceOutOfRange(u8),
}

/// Operation invoked while the game is not in a state that permits it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum StateError {
    /// The operation is not available in the current phase.
    #[error("cannot {operation} while the game is {phase}")]
    WrongPhase {
        /// Human readable name of the rejected operation.
        operation: String,
        /// Phase the game was in when the operation was attempted.
        phase: Phase,
    },
    /// The roster holds no players.
    #[error("roster has no players")]
    EmptyRoster,
    /// No player carries the requested identifier.
    #[error("no player with id {0}")]
    UnknownPlayer(u32),
}

/// Any failure reported by the rules engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum GameError {
    /// See [`ConfigError`].
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// See [`ValidationError`].
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// See [`StateError`].
    #[error(transparent)]
    State(#[from] StateError),
}
