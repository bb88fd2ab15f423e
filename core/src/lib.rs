#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Ladders engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative engine, and pure systems. Adapters submit [`Command`] values
//! describing desired mutations, the engine executes those commands via its
//! `apply` entry point, and then broadcasts [`Event`] values for systems to
//! react to deterministically. Die values always arrive from the outside; no
//! contract here carries randomness.

mod board;
mod error;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

pub use board::{BoardConfig, Ladder, Snake};
pub use error::{ConfigError, GameError, StateError, ValidationError};

/// Lowest face of the six-sided die.
pub const MIN_DIE_VALUE: u8 = 1;
/// Highest face of the six-sided die.
pub const MAX_DIE_VALUE: u8 = 6;

/// Named preset selecting board size and snake/ladder layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 30 squares on a 6x5 grid.
    Easy,
    /// 50 squares on a 10x5 grid.
    Medium,
    /// 100 squares on a 10x10 grid.
    Hard,
}

impl Difficulty {
    /// Every difficulty in ascending order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Key used to select the difficulty in settings and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.as_str() == value)
            .ok_or_else(|| ConfigError::UnknownDifficulty(value.to_owned()))
    }
}

/// Lifecycle phase of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// No match configured yet.
    Setup,
    /// Players are taking turns.
    Playing,
    /// A player reached the final square.
    Finished,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Setup => "in setup",
            Self::Playing => "playing",
            Self::Finished => "finished",
        })
    }
}

/// Where tokens sit before their first move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StartPosition {
    /// Tokens wait off the board at position 0.
    #[default]
    OffBoard,
    /// Tokens start on square 1.
    FirstSquare,
}

impl StartPosition {
    /// Position value assigned to players at the start of a match.
    #[must_use]
    pub const fn square(self) -> u32 {
        match self {
            Self::OffBoard => 0,
            Self::FirstSquare => 1,
        }
    }
}

/// How a roll that would pass the final square is handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OvershootRule {
    /// Excess pips are walked backward from the final square.
    #[default]
    BounceBack,
    /// The move is refused and the token stays where it is.
    StayPut,
}

/// Rule variants selected when the engine is constructed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rules {
    /// Starting position for every player.
    pub start: StartPosition,
    /// Policy applied when a roll passes the final square.
    pub overshoot: OvershootRule,
}

/// Stable identifier assigned to a player when the roster is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(u32);

impl PlayerId {
    /// Creates a new player identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Token colour assigned to a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerColor {
    red: u8,
    green: u8,
    blue: u8,
}

/// Palette cycled through by player id.
pub const PLAYER_PALETTE: [PlayerColor; 8] = [
    PlayerColor::from_rgb(0xef, 0x44, 0x44),
    PlayerColor::from_rgb(0x3b, 0x82, 0xf6),
    PlayerColor::from_rgb(0x10, 0xb9, 0x81),
    PlayerColor::from_rgb(0xf5, 0x9e, 0x0b),
    PlayerColor::from_rgb(0x8b, 0x5c, 0xf6),
    PlayerColor::from_rgb(0xec, 0x48, 0x99),
    PlayerColor::from_rgb(0x14, 0xb8, 0xa6),
    PlayerColor::from_rgb(0xf9, 0x73, 0x16),
];

impl PlayerColor {
    /// Creates a new colour from byte RGB components.
    #[must_use]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Palette entry for the player, `id % 8`.
    #[must_use]
    pub const fn for_player(id: PlayerId) -> Self {
        PLAYER_PALETTE[(id.get() as usize) % PLAYER_PALETTE.len()]
    }

    /// Red component of the colour.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Green component of the colour.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Blue component of the colour.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// CSS style hex string, e.g. `#3b82f6`.
    #[must_use]
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

/// Layout descriptor for a single board square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Square {
    /// Square number in `1..=max_squares`.
    pub number: u32,
    /// Visual row, 0 being the bottom row.
    pub row: u32,
    /// Visual column, 0 being the left edge.
    pub column: u32,
    /// Landing here triggers a snake.
    pub is_snake: bool,
    /// Landing here triggers a ladder.
    pub is_ladder: bool,
    /// Where the snake or ladder leads, if any.
    pub destination: Option<u32>,
}

/// Summary of a board used by presentation layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardInfo {
    /// Preset the board was built from.
    pub difficulty: Difficulty,
    /// Number of grid columns.
    pub columns: u32,
    /// Number of grid rows.
    pub rows: u32,
    /// Number of the final square.
    pub max_squares: u32,
    /// Number of snakes on the board.
    pub snake_count: usize,
    /// Number of ladders on the board.
    pub ladder_count: usize,
}

/// Immutable view of a single player's state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    /// Identifier assigned by the roster.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Token colour.
    pub color: PlayerColor,
    /// Current square, 0 when off the board.
    pub position: u32,
    /// Number of moves recorded for the player.
    pub move_count: usize,
}

/// What carried the token to its final square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovedBy {
    /// A plain move by the die.
    Dice,
    /// A snake head sent the token down.
    Snake,
    /// A ladder bottom sent the token up.
    Ladder,
    /// The roll passed the final square and the token bounced back.
    Bounce,
    /// The roll passed the final square and the move was refused.
    Blocked,
}

impl MovedBy {
    /// Lowercase tag for narration and serialised output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dice => "dice",
            Self::Snake => "snake",
            Self::Ladder => "ladder",
            Self::Bounce => "bounce",
            Self::Blocked => "blocked",
        }
    }
}

/// Outcome of one resolved turn, the sole contract with presentation layers.
///
/// Carries everything needed to animate and narrate the move without the
/// caller re-deriving rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    /// Player that moved, captured after the move.
    pub player: PlayerSnapshot,
    /// Die value supplied for the turn.
    pub dice_value: u8,
    /// Position before the roll.
    pub previous_position: u32,
    /// Square the die walked to: the landing square, or the final square on a bounce.
    pub new_position: u32,
    /// `previous_position + dice_value`, even when that passes the final square.
    pub would_be_position: u32,
    /// Position after snakes, ladders and bounce-back are applied.
    pub final_position: u32,
    /// Snake or ladder destination triggered by the landing square.
    pub destination: Option<u32>,
    /// The token changed squares.
    pub has_moved: bool,
    /// The token landed on a snake or ladder.
    pub has_landed: bool,
    /// The roll passed the final square and was reflected.
    pub bounced_back: bool,
    /// What carried the token to `final_position`.
    pub moved_by: MovedBy,
    /// The move ended on the final square.
    pub is_winner: bool,
    /// Squares stepped through moving forward, in order.
    pub forward_path: Vec<u32>,
    /// Squares stepped through after bouncing off the final square, in order.
    pub backward_path: Vec<u32>,
}

/// Read-only snapshot of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Lifecycle phase.
    pub phase: Phase,
    /// Difficulty of the configured board, `None` during setup.
    pub difficulty: Option<Difficulty>,
    /// Final square of the configured board, `None` during setup.
    pub max_squares: Option<u32>,
    /// Player whose turn it is.
    pub current_player: Option<PlayerSnapshot>,
    /// Players ordered by position, leaders first. Ties keep roster order.
    pub standings: Vec<PlayerSnapshot>,
}

/// Result of a successful initialisation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitSummary {
    /// Board that was built.
    pub board: BoardInfo,
    /// Players in turn order.
    pub players: Vec<PlayerSnapshot>,
    /// Final square of the board.
    pub max_squares: u32,
}

/// Commands that express all permissible engine mutations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Builds a board and roster and starts a match.
    Initialize {
        /// Board preset to play on.
        difficulty: Difficulty,
        /// Player names in turn order.
        player_names: Vec<String>,
    },
    /// Resolves the current player's move with a supplied die value.
    ResolveMove {
        /// Die value in `1..=6`.
        dice_value: u8,
    },
    /// Passes the turn to the next player.
    AdvanceTurn,
    /// Starts the same match again from the beginning.
    Restart,
    /// Drops the match and returns to setup.
    Abandon,
}

/// Events broadcast by the engine after processing commands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// A match started, either freshly initialised or restarted.
    GameStarted {
        /// Board preset in play.
        difficulty: Difficulty,
        /// Players in turn order.
        players: Vec<PlayerSnapshot>,
    },
    /// A move was resolved.
    MoveResolved {
        /// Full outcome of the move.
        result: MoveResult,
    },
    /// The turn passed to another player.
    TurnAdvanced {
        /// Player whose turn it now is.
        player: PlayerId,
    },
    /// A player reached the final square. Follows the winning `MoveResolved`.
    GameWon {
        /// Winning player.
        player: PlayerId,
    },
    /// The match was dropped and the engine returned to setup.
    GameAbandoned,
    /// A command was refused without changing engine state.
    CommandRejected {
        /// Reason the command was refused.
        error: GameError,
    },
}
