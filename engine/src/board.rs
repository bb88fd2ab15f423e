//! Board geometry and snake/ladder lookup for a chosen difficulty.

use std::collections::HashMap;

use ladders_core::{BoardConfig, BoardInfo, ConfigError, Difficulty, Ladder, Snake, Square};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Transition {
    Snake { tail: u32 },
    Ladder { top: u32 },
}

/// Derived lookups over a [`BoardConfig`]: transitions, square flags and the
/// serpentine grid layout.
#[derive(Clone, Debug)]
pub struct BoardTopology {
    difficulty: Difficulty,
    config: BoardConfig,
    transitions: HashMap<u32, Transition>,
}

impl BoardTopology {
    /// Builds the topology for a difficulty preset.
    pub fn new(difficulty: Difficulty) -> Result<Self, ConfigError> {
        Self::from_config(difficulty, BoardConfig::preset(difficulty))
    }

    /// Builds the topology for a difficulty key such as `"medium"`.
    pub fn from_key(key: &str) -> Result<Self, ConfigError> {
        Self::new(key.parse()?)
    }

    /// Builds the topology for a custom board labelled with `difficulty`.
    pub fn from_config(difficulty: Difficulty, config: BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut transitions = HashMap::with_capacity(config.snakes().len() + config.ladders().len());
        for snake in config.snakes() {
            let _ = transitions.insert(snake.head(), Transition::Snake { tail: snake.tail() });
        }
        for ladder in config.ladders() {
            let _ = transitions.insert(ladder.bottom(), Transition::Ladder { top: ladder.top() });
        }

        Ok(Self {
            difficulty,
            config,
            transitions,
        })
    }

    /// Difficulty the board was built for.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Underlying configuration.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Number of the final square.
    #[must_use]
    pub const fn max_squares(&self) -> u32 {
        self.config.max_squares()
    }

    /// Snakes in declaration order.
    #[must_use]
    pub fn snakes(&self) -> &[Snake] {
        self.config.snakes()
    }

    /// Ladders in declaration order.
    #[must_use]
    pub fn ladders(&self) -> &[Ladder] {
        self.config.ladders()
    }

    /// Snake tail or ladder top reached by landing on `square`.
    #[must_use]
    pub fn destination_of(&self, square: u32) -> Option<u32> {
        self.transitions.get(&square).map(|transition| match *transition {
            Transition::Snake { tail } => tail,
            Transition::Ladder { top } => top,
        })
    }

    /// Whether `square` is a snake head.
    #[must_use]
    pub fn is_snake(&self, square: u32) -> bool {
        matches!(self.transitions.get(&square), Some(Transition::Snake { .. }))
    }

    /// Whether `square` is a ladder bottom.
    #[must_use]
    pub fn is_ladder(&self, square: u32) -> bool {
        matches!(self.transitions.get(&square), Some(Transition::Ladder { .. }))
    }

    /// Visual `(row, column)` of a square. Row 0 is the bottom row and every
    /// other row runs right to left.
    #[must_use]
    pub fn cell_of(&self, square: u32) -> Option<(u32, u32)> {
        if !(1..=self.max_squares()).contains(&square) {
            return None;
        }
        let columns = self.config.columns();
        let index = square - 1;
        let row = index / columns;
        let offset = index % columns;
        let column = if row % 2 == 0 {
            offset
        } else {
            columns - 1 - offset
        };
        Some((row, column))
    }

    /// Layout descriptor for a single square.
    #[must_use]
    pub fn square(&self, number: u32) -> Option<Square> {
        let (row, column) = self.cell_of(number)?;
        Some(Square {
            number,
            row,
            column,
            is_snake: self.is_snake(number),
            is_ladder: self.is_ladder(number),
            destination: self.destination_of(number),
        })
    }

    /// Every square in numbering order.
    #[must_use]
    pub fn generate_layout(&self) -> Vec<Square> {
        (1..=self.max_squares())
            .filter_map(|number| self.square(number))
            .collect()
    }

    /// Summary consumed by presentation layers.
    #[must_use]
    pub fn info(&self) -> BoardInfo {
        BoardInfo {
            difficulty: self.difficulty,
            columns: self.config.columns(),
            rows: self.config.rows(),
            max_squares: self.max_squares(),
            snake_count: self.snakes().len(),
            ladder_count: self.ladders().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn layout_covers_every_square_once() {
        for difficulty in Difficulty::ALL {
            let board = BoardTopology::new(difficulty).expect("preset board");
            let layout = board.generate_layout();
            assert_eq!(layout.len() as u32, board.max_squares());

            let numbers: HashSet<u32> = layout.iter().map(|square| square.number).collect();
            let expected: HashSet<u32> = (1..=board.max_squares()).collect();
            assert_eq!(numbers, expected);

            let cells: HashSet<(u32, u32)> =
                layout.iter().map(|square| (square.row, square.column)).collect();
            assert_eq!(cells.len(), layout.len(), "two squares share a cell");
        }
    }

    #[test]
    fn layout_snakes_back_and_forth() {
        let board = BoardTopology::new(Difficulty::Easy).expect("easy board");
        assert_eq!(board.cell_of(1), Some((0, 0)));
        assert_eq!(board.cell_of(6), Some((0, 5)));
        assert_eq!(board.cell_of(7), Some((1, 5)));
        assert_eq!(board.cell_of(12), Some((1, 0)));
        assert_eq!(board.cell_of(13), Some((2, 0)));
        assert_eq!(board.cell_of(30), Some((4, 0)));
        assert_eq!(board.cell_of(0), None);
        assert_eq!(board.cell_of(31), None);
    }

    #[test]
    fn every_pair_maps_to_its_destination() {
        for difficulty in Difficulty::ALL {
            let board = BoardTopology::new(difficulty).expect("preset board");
            for snake in board.snakes() {
                assert_eq!(board.destination_of(snake.head()), Some(snake.tail()));
                assert!(board.is_snake(snake.head()));
                assert!(!board.is_ladder(snake.head()));
            }
            for ladder in board.ladders() {
                assert_eq!(board.destination_of(ladder.bottom()), Some(ladder.top()));
                assert!(board.is_ladder(ladder.bottom()));
                assert!(!board.is_snake(ladder.bottom()));
            }
        }
    }

    #[test]
    fn plain_squares_have_no_destination() {
        let board = BoardTopology::new(Difficulty::Hard).expect("hard board");
        let starts: HashSet<u32> = board
            .snakes()
            .iter()
            .map(|snake| snake.head())
            .chain(board.ladders().iter().map(|ladder| ladder.bottom()))
            .collect();
        for square in (0..=board.max_squares() + 1).filter(|square| !starts.contains(square)) {
            assert_eq!(board.destination_of(square), None, "square {square}");
        }
    }

    #[test]
    fn map_lookup_agrees_with_linear_scan() {
        let board = BoardTopology::new(Difficulty::Medium).expect("medium board");
        for square in 1..=board.max_squares() {
            let scanned = board
                .snakes()
                .iter()
                .find(|snake| snake.head() == square)
                .map(|snake| snake.tail())
                .or_else(|| {
                    board
                        .ladders()
                        .iter()
                        .find(|ladder| ladder.bottom() == square)
                        .map(|ladder| ladder.top())
                });
            assert_eq!(board.destination_of(square), scanned);
        }
    }

    #[test]
    fn unknown_key_is_a_config_error() {
        assert_eq!(
            BoardTopology::from_key("impossible").map(|board| board.max_squares()),
            Err(ConfigError::UnknownDifficulty("impossible".to_owned()))
        );
        assert_eq!(
            BoardTopology::from_key("hard").map(|board| board.max_squares()),
            Ok(100)
        );
    }

    #[test]
    fn custom_board_builds_from_config() {
        let config = BoardConfig::new(
            12,
            4,
            3,
            vec![Snake::new(11, 2)],
            vec![Ladder::new(3, 9)],
        )
        .expect("valid custom board");
        let board = BoardTopology::from_config(Difficulty::Easy, config).expect("custom board");
        assert_eq!(board.max_squares(), 12);
        assert_eq!(board.destination_of(11), Some(2));
        assert_eq!(board.destination_of(3), Some(9));
        assert_eq!(board.cell_of(12), Some((2, 3)));
    }

    #[test]
    fn info_counts_pairs() {
        let info = BoardTopology::new(Difficulty::Medium).expect("medium board").info();
        assert_eq!(info.columns, 10);
        assert_eq!(info.rows, 5);
        assert_eq!(info.max_squares, 50);
        assert_eq!(info.snake_count, 5);
        assert_eq!(info.ladder_count, 5);
    }
}
