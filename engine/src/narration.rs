//! Human-readable log lines for engine transitions.

use ladders_core::{Difficulty, MoveResult, MovedBy};

pub(crate) fn game_started(difficulty: Difficulty, player_count: usize) -> String {
    let noun = if player_count == 1 { "player" } else { "players" };
    format!("Game started on {difficulty} difficulty with {player_count} {noun}")
}

pub(crate) fn move_resolved(result: &MoveResult, max_squares: u32) -> String {
    let name = &result.player.name;
    let dice = result.dice_value;
    let from = result.previous_position;
    let to = result.final_position;
    match result.moved_by {
        MovedBy::Dice => format!("{name} rolled {dice} and moved from {from} to {to}"),
        MovedBy::Snake => format!(
            "{name} rolled {dice} from {from}, landed on snake at {}, slid down to {to}",
            result.new_position
        ),
        MovedBy::Ladder => format!(
            "{name} rolled {dice} from {from}, landed on ladder at {}, climbed to {to}",
            result.new_position
        ),
        MovedBy::Bounce => format!(
            "{name} rolled {dice} from {from}, overshot {max_squares} and bounced back to {to}"
        ),
        MovedBy::Blocked => format!(
            "{name} rolled {dice} but cannot move beyond {max_squares}. Stays at {from}"
        ),
    }
}

pub(crate) fn player_won(name: &str) -> String {
    format!("{name} has won the game!")
}
