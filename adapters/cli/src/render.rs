//! Plain-text views of the board and the standings.

use ladders_core::{PlayerSnapshot, Square};
use ladders_engine::BoardTopology;

fn marker(square: &Square) -> char {
    if square.is_snake {
        'S'
    } else if square.is_ladder {
        'L'
    } else {
        ' '
    }
}

/// Draws the board top row first, marking snake heads with `S` and ladder
/// bottoms with `L`, followed by a legend of every transition.
pub(crate) fn board(board: &BoardTopology) -> String {
    let columns = board.config().columns() as usize;
    let rows = board.config().rows() as usize;
    let mut grid = vec![vec![String::new(); columns]; rows];
    for square in board.generate_layout() {
        grid[square.row as usize][square.column as usize] =
            format!("{:>3}{}", square.number, marker(&square));
    }

    let mut output = String::new();
    for row in grid.iter().rev() {
        output.push_str(row.concat().trim_end());
        output.push('\n');
    }

    let snakes: Vec<String> = board
        .snakes()
        .iter()
        .map(|snake| format!("{}->{}", snake.head(), snake.tail()))
        .collect();
    let ladders: Vec<String> = board
        .ladders()
        .iter()
        .map(|ladder| format!("{}->{}", ladder.bottom(), ladder.top()))
        .collect();
    output.push_str(&format!("Snakes:  {}\n", snakes.join(", ")));
    output.push_str(&format!("Ladders: {}\n", ladders.join(", ")));
    output
}

/// Lists players leaders first.
pub(crate) fn standings(standings: &[PlayerSnapshot]) -> String {
    standings
        .iter()
        .enumerate()
        .map(|(rank, player)| {
            let moves = if player.move_count == 1 { "move" } else { "moves" };
            format!(
                "{}. {} ({}) on square {} after {} {moves}",
                rank + 1,
                player.name,
                player.color.hex(),
                player.position,
                player.move_count,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use ladders_core::{Difficulty, PlayerColor, PlayerId};

    use super::*;

    #[test]
    fn easy_board_reads_top_down() {
        let topology = BoardTopology::new(Difficulty::Easy).expect("easy board");
        let text = board(&topology);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], " 25  26  27  28S 29  30");
        assert_eq!(lines[1], " 24  23  22L 21  20  19S");
        assert_eq!(lines[4], "  1   2L  3   4   5   6");
        assert_eq!(lines[5], "Snakes:  17->15, 19->14, 28->20");
        assert_eq!(lines[6], "Ladders: 2->4, 12->17, 22->30");
    }

    #[test]
    fn standings_are_numbered() {
        let players = vec![
            PlayerSnapshot {
                id: PlayerId::new(2),
                name: "Brian".to_owned(),
                color: PlayerColor::for_player(PlayerId::new(2)),
                position: 12,
                move_count: 3,
            },
            PlayerSnapshot {
                id: PlayerId::new(1),
                name: "Ada".to_owned(),
                color: PlayerColor::for_player(PlayerId::new(1)),
                position: 5,
                move_count: 1,
            },
        ];
        assert_eq!(
            standings(&players),
            "1. Brian (#10b981) on square 12 after 3 moves\n2. Ada (#3b82f6) on square 5 after 1 move"
        );
    }
}
