//! Players, turn order and per-player move history.

use ladders_core::{PlayerColor, PlayerId, PlayerSnapshot, StateError, ValidationError};

/// Single step recorded in a player's history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    /// Position before the move.
    pub from: u32,
    /// Position after the move.
    pub to: u32,
    /// Die value that produced the move.
    pub dice_value: u8,
}

/// A player and the path their token has taken.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    name: String,
    color: PlayerColor,
    position: u32,
    history: Vec<MoveRecord>,
}

impl Player {
    fn new(id: PlayerId, name: &str, start: u32) -> Self {
        let name = name.trim();
        let name = if name.is_empty() {
            format!("Player {}", id.get())
        } else {
            name.to_owned()
        };
        Self {
            id,
            name,
            color: PlayerColor::for_player(id),
            position: start,
            history: Vec::new(),
        }
    }

    /// Identifier assigned by the roster.
    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Token colour.
    #[must_use]
    pub const fn color(&self) -> PlayerColor {
        self.color
    }

    /// Current square, 0 when off the board.
    #[must_use]
    pub const fn position(&self) -> u32 {
        self.position
    }

    /// Moves in the order they were made.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Captures an owned view of the player.
    #[must_use]
    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            id: self.id,
            name: self.name.clone(),
            color: self.color,
            position: self.position,
            move_count: self.history.len(),
        }
    }

    fn record_move(&mut self, to: u32, dice_value: u8) {
        self.history.push(MoveRecord {
            from: self.position,
            to,
            dice_value,
        });
        self.position = to;
    }

    fn reset(&mut self, start: u32) {
        self.position = start;
        self.history.clear();
    }
}

/// Players in turn order plus the cursor naming whose turn it is.
#[derive(Clone, Debug, Default)]
pub struct PlayerRoster {
    players: Vec<Player>,
    current_index: usize,
}

impl PlayerRoster {
    /// Creates an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the roster with one player per name, ids counting from 1.
    ///
    /// Blank names fall back to `"Player {id}"`. The roster is left untouched
    /// when `names` is empty.
    pub fn add_players<S: AsRef<str>>(
        &mut self,
        names: &[S],
        start: u32,
    ) -> Result<(), ValidationError> {
        if names.is_empty() {
            return Err(ValidationError::NoPlayers);
        }
        self.players = names
            .iter()
            .zip(1..)
            .map(|(name, id)| Player::new(PlayerId::new(id), name.as_ref(), start))
            .collect();
        self.current_index = 0;
        Ok(())
    }

    /// Player whose turn it is.
    pub fn current_player(&self) -> Result<&Player, StateError> {
        self.players
            .get(self.current_index)
            .ok_or(StateError::EmptyRoster)
    }

    /// Passes the turn to the next player, wrapping after the last.
    pub fn advance_turn(&mut self) -> Result<&Player, StateError> {
        if self.players.is_empty() {
            return Err(StateError::EmptyRoster);
        }
        self.current_index = (self.current_index + 1) % self.players.len();
        self.current_player()
    }

    /// Records a move for `id` and updates its position.
    pub(crate) fn move_player(
        &mut self,
        id: PlayerId,
        new_position: u32,
        dice_value: u8,
    ) -> Result<(), StateError> {
        let player = self
            .players
            .iter_mut()
            .find(|player| player.id == id)
            .ok_or(StateError::UnknownPlayer(id.get()))?;
        player.record_move(new_position, dice_value);
        Ok(())
    }

    /// Players ordered by position, leaders first. Ties keep turn order.
    #[must_use]
    pub fn standings(&self) -> Vec<&Player> {
        let mut standings: Vec<&Player> = self.players.iter().collect();
        standings.sort_by(|a, b| b.position.cmp(&a.position));
        standings
    }

    /// Sends every token back to `start`, clears histories and rewinds the turn cursor.
    pub fn reset(&mut self, start: u32) {
        for player in &mut self.players {
            player.reset(start);
        }
        self.current_index = 0;
    }

    /// Looks up a player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| player.id == id)
    }

    /// Players in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Index of the current player in turn order.
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    /// Number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether the roster holds no players.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
