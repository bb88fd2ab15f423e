//! Static board topology for each difficulty preset.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, Difficulty};

/// Backward transition from a head square to a lower tail square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snake {
    head: u32,
    tail: u32,
}

impl Snake {
    /// Creates a snake leading from `head` down to `tail`.
    #[must_use]
    pub const fn new(head: u32, tail: u32) -> Self {
        Self { head, tail }
    }

    /// Square that triggers the snake.
    #[must_use]
    pub const fn head(&self) -> u32 {
        self.head
    }

    /// Square the snake leads to.
    #[must_use]
    pub const fn tail(&self) -> u32 {
        self.tail
    }
}

/// Forward transition from a bottom square to a higher top square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ladder {
    bottom: u32,
    top: u32,
}

impl Ladder {
    /// Creates a ladder leading from `bottom` up to `top`.
    #[must_use]
    pub const fn new(bottom: u32, top: u32) -> Self {
        Self { bottom, top }
    }

    /// Square that triggers the ladder.
    #[must_use]
    pub const fn bottom(&self) -> u32 {
        self.bottom
    }

    /// Square the ladder leads to.
    #[must_use]
    pub const fn top(&self) -> u32 {
        self.top
    }
}

const EASY_SNAKES: [Snake; 3] = [Snake::new(17, 15), Snake::new(19, 14), Snake::new(28, 20)];
const EASY_LADDERS: [Ladder; 3] = [Ladder::new(2, 4), Ladder::new(12, 17), Ladder::new(22, 30)];

const MEDIUM_SNAKES: [Snake; 5] = [
    Snake::new(17, 15),
    Snake::new(25, 22),
    Snake::new(35, 30),
    Snake::new(48, 41),
    Snake::new(30, 22),
];
const MEDIUM_LADDERS: [Ladder; 5] = [
    Ladder::new(2, 4),
    Ladder::new(7, 10),
    Ladder::new(18, 23),
    Ladder::new(37, 44),
    Ladder::new(42, 50),
];

const HARD_SNAKES: [Snake; 9] = [
    Snake::new(17, 15),
    Snake::new(25, 22),
    Snake::new(35, 30),
    Snake::new(48, 41),
    Snake::new(30, 22),
    Snake::new(56, 54),
    Snake::new(68, 65),
    Snake::new(82, 77),
    Snake::new(95, 88),
];
const HARD_LADDERS: [Ladder; 9] = [
    Ladder::new(2, 4),
    Ladder::new(7, 10),
    Ladder::new(18, 23),
    Ladder::new(37, 44),
    Ladder::new(42, 50),
    Ladder::new(52, 54),
    Ladder::new(71, 74),
    Ladder::new(84, 89),
    Ladder::new(92, 99),
];

/// Immutable board description: grid size plus the snake and ladder pairs.
///
/// Snakes and ladders keep their declaration order so presentation layers can
/// pair heads with tails consistently.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    max_squares: u32,
    columns: u32,
    rows: u32,
    snakes: Vec<Snake>,
    ladders: Vec<Ladder>,
}

impl BoardConfig {
    /// Builds a custom board, rejecting layouts that break the board invariants.
    pub fn new(
        max_squares: u32,
        columns: u32,
        rows: u32,
        snakes: Vec<Snake>,
        ladders: Vec<Ladder>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            max_squares,
            columns,
            rows,
            snakes,
            ladders,
        };
        config.validate()?;
        Ok(config)
    }

    /// Returns the built-in layout for the provided difficulty.
    #[must_use]
    pub fn preset(difficulty: Difficulty) -> Self {
        let (max_squares, columns, rows, snakes, ladders): (u32, u32, u32, &[Snake], &[Ladder]) =
            match difficulty {
                Difficulty::Easy => (30, 6, 5, &EASY_SNAKES, &EASY_LADDERS),
                Difficulty::Medium => (50, 10, 5, &MEDIUM_SNAKES, &MEDIUM_LADDERS),
                Difficulty::Hard => (100, 10, 10, &HARD_SNAKES, &HARD_LADDERS),
            };
        Self {
            max_squares,
            columns,
            rows,
            snakes: snakes.to_vec(),
            ladders: ladders.to_vec(),
        }
    }

    /// Number of the final square. Reaching it wins the game.
    #[must_use]
    pub const fn max_squares(&self) -> u32 {
        self.max_squares
    }

    /// Number of grid columns.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of grid rows.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Snakes in declaration order.
    #[must_use]
    pub fn snakes(&self) -> &[Snake] {
        &self.snakes
    }

    /// Ladders in declaration order.
    #[must_use]
    pub fn ladders(&self) -> &[Ladder] {
        &self.ladders
    }

    /// Checks grid coverage, endpoint bounds, transition direction and that
    /// every square starts at most one transition.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_squares < 2 {
            return Err(ConfigError::TooSmall(self.max_squares));
        }
        if u64::from(self.columns) * u64::from(self.rows) != u64::from(self.max_squares) {
            return Err(ConfigError::GridMismatch {
                columns: self.columns,
                rows: self.rows,
                max_squares: self.max_squares,
            });
        }

        let mut starts = HashSet::new();
        for snake in &self.snakes {
            self.check_start(snake.head, &mut starts)?;
            self.check_square(snake.tail)?;
            if snake.tail >= snake.head {
                return Err(ConfigError::SnakeNotDescending {
                    head: snake.head,
                    tail: snake.tail,
                });
            }
        }
        for ladder in &self.ladders {
            self.check_start(ladder.bottom, &mut starts)?;
            self.check_square(ladder.top)?;
            if ladder.top <= ladder.bottom {
                return Err(ConfigError::LadderNotAscending {
                    bottom: ladder.bottom,
                    top: ladder.top,
                });
            }
        }
        Ok(())
    }

    fn check_square(&self, square: u32) -> Result<(), ConfigError> {
        if (1..=self.max_squares).contains(&square) {
            Ok(())
        } else {
            Err(ConfigError::OutOfBounds {
                square,
                max_squares: self.max_squares,
            })
        }
    }

    fn check_start(&self, square: u32, starts: &mut HashSet<u32>) -> Result<(), ConfigError> {
        self.check_square(square)?;
        if square == self.max_squares {
            return Err(ConfigError::StartOnFinalSquare(square));
        }
        if !starts.insert(square) {
            return Err(ConfigError::DuplicateStart(square));
        }
        Ok(())
    }
}
