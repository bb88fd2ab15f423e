//! Pure per-turn movement resolution.

use ladders_core::{MovedBy, OvershootRule};

use crate::BoardTopology;

/// Where a single roll takes a token, before any bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Movement {
    pub(crate) would_be_position: u32,
    pub(crate) new_position: u32,
    pub(crate) final_position: u32,
    pub(crate) destination: Option<u32>,
    pub(crate) moved_by: MovedBy,
    pub(crate) forward_path: Vec<u32>,
    pub(crate) backward_path: Vec<u32>,
}

impl Movement {
    pub(crate) fn has_moved(&self) -> bool {
        self.moved_by != MovedBy::Blocked
    }

    pub(crate) fn has_landed(&self) -> bool {
        matches!(self.moved_by, MovedBy::Snake | MovedBy::Ladder)
    }

    pub(crate) fn bounced_back(&self) -> bool {
        self.moved_by == MovedBy::Bounce
    }
}

/// Resolves a roll of `dice_value` from `from` on `board`.
///
/// Transitions apply once: a ladder top that is also a snake head does not
/// trigger the snake, and a bounced token ignores the square it bounces to.
pub(crate) fn resolve(
    board: &BoardTopology,
    overshoot: OvershootRule,
    from: u32,
    dice_value: u8,
) -> Movement {
    let max_squares = board.max_squares();
    let target = from + u32::from(dice_value);

    if target > max_squares {
        return match overshoot {
            OvershootRule::BounceBack => {
                let excess = target - max_squares;
                let final_position = max_squares.saturating_sub(excess).max(1);
                Movement {
                    would_be_position: target,
                    new_position: max_squares,
                    final_position,
                    destination: None,
                    moved_by: MovedBy::Bounce,
                    forward_path: (from + 1..=max_squares).collect(),
                    backward_path: (final_position..max_squares).rev().collect(),
                }
            }
            OvershootRule::StayPut => Movement {
                would_be_position: target,
                new_position: from,
                final_position: from,
                destination: None,
                moved_by: MovedBy::Blocked,
                forward_path: Vec::new(),
                backward_path: Vec::new(),
            },
        };
    }

    let destination = board.destination_of(target);
    let moved_by = match destination {
        Some(_) if board.is_snake(target) => MovedBy::Snake,
        Some(_) => MovedBy::Ladder,
        None => MovedBy::Dice,
    };
    Movement {
        would_be_position: target,
        new_position: target,
        final_position: destination.unwrap_or(target),
        destination,
        moved_by,
        forward_path: (from + 1..=target).collect(),
        backward_path: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use ladders_core::{BoardConfig, Difficulty};

    use super::*;

    fn easy() -> BoardTopology {
        BoardTopology::new(Difficulty::Easy).expect("easy board")
    }

    #[test]
    fn plain_move_walks_forward() {
        let movement = resolve(&easy(), OvershootRule::BounceBack, 3, 4);
        assert_eq!(movement.final_position, 7);
        assert_eq!(movement.moved_by, MovedBy::Dice);
        assert_eq!(movement.forward_path, vec![4, 5, 6, 7]);
        assert!(movement.has_moved());
        assert!(!movement.has_landed());
        assert!(movement.backward_path.is_empty());
    }

    #[test]
    fn snake_head_sends_token_to_tail() {
        let movement = resolve(&easy(), OvershootRule::BounceBack, 14, 5);
        assert_eq!(movement.new_position, 19);
        assert_eq!(movement.final_position, 14);
        assert_eq!(movement.destination, Some(14));
        assert_eq!(movement.moved_by, MovedBy::Snake);
        assert!(movement.has_landed());
    }

    #[test]
    fn ladder_top_does_not_chain_into_snake() {
        let movement = resolve(&easy(), OvershootRule::BounceBack, 10, 2);
        assert_eq!(movement.moved_by, MovedBy::Ladder);
        assert_eq!(movement.final_position, 17);
    }

    #[test]
    fn overshoot_bounces_back_from_final_square() {
        let movement = resolve(&easy(), OvershootRule::BounceBack, 27, 5);
        assert_eq!(movement.would_be_position, 32);
        assert_eq!(movement.new_position, 30);
        assert_eq!(movement.final_position, 28);
        assert!(movement.bounced_back());
        assert_eq!(movement.forward_path, vec![28, 29, 30]);
        assert_eq!(movement.backward_path, vec![29, 28]);
    }

    #[test]
    fn bounced_token_ignores_snake_on_landing_square() {
        let board = easy();
        assert!(board.is_snake(28));
        let movement = resolve(&board, OvershootRule::BounceBack, 27, 5);
        assert_eq!(movement.final_position, 28);
        assert_eq!(movement.destination, None);
    }

    #[test]
    fn stay_put_refuses_overshoot() {
        let movement = resolve(&easy(), OvershootRule::StayPut, 27, 5);
        assert_eq!(movement.final_position, 27);
        assert_eq!(movement.new_position, 27);
        assert_eq!(movement.would_be_position, 32);
        assert_eq!(movement.moved_by, MovedBy::Blocked);
        assert!(!movement.has_moved());
        assert!(movement.forward_path.is_empty());
    }

    #[test]
    fn bounce_never_drops_below_first_square() {
        let config = BoardConfig::new(2, 2, 1, Vec::new(), Vec::new()).expect("tiny board");
        let board = BoardTopology::from_config(Difficulty::Easy, config).expect("tiny board");
        let movement = resolve(&board, OvershootRule::BounceBack, 1, 6);
        assert_eq!(movement.would_be_position, 7);
        assert_eq!(movement.final_position, 1);
        assert_eq!(movement.forward_path, vec![2]);
        assert_eq!(movement.backward_path, vec![1]);
    }

    #[test]
    fn exact_roll_onto_final_square_stops_there() {
        let movement = resolve(&easy(), OvershootRule::BounceBack, 25, 5);
        assert_eq!(movement.final_position, 30);
        assert!(!movement.bounced_back());
    }
}
