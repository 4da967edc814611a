use super::*;
use crate::board::Position;

fn fixture(text: &str) -> Position {
    Position::from_board_text(text).expect("fixture parses")
}

/// Flip the board top-to-bottom and exchange colors, producing the same
/// game seen from the other side.
fn mirrored(pos: &Position) -> Position {
    let mut out = pos.clone();
    for row in 0..ROWS {
        for col in 0..COLS {
            let src = sq(row, col).unwrap();
            let dst = sq(ROWS - 1 - row, col).unwrap();
            out.board[dst as usize] = pos.board[src as usize].map(|pc| Piece {
                color: pc.color.other(),
                kind: pc.kind,
            });
        }
    }
    out.side_to_move = pos.side_to_move.other();
    out
}

#[test]
fn starting_material_is_level() {
    let pos = Position::startpos();
    assert_eq!(evaluate(&pos, Color::White), 0);
    assert_eq!(evaluate(&pos, Color::Black), 0);
}

#[test]
fn material_sums_per_piece_values() {
    // White: queen + pawn (1000); Black: rook (500).
    let pos = fixture(
        "1 W
....k
..r..
.....
.Q.P.
.....
K....
",
    );
    assert_eq!(evaluate(&pos, Color::White), 500);
    assert_eq!(evaluate(&pos, Color::Black), -500);
}

#[test]
fn kings_carry_no_material() {
    let pos = fixture(
        "1 W
....k
.....
.....
.....
.....
K....
",
    );
    assert_eq!(evaluate(&pos, Color::White), 0);
}

#[test]
fn mirroring_the_board_negates_the_score() {
    let pos = fixture(
        "1 W
....k
..r..
.n...
.Q.P.
.....
K....
",
    );
    let flipped = mirrored(&pos);
    assert_eq!(evaluate(&flipped, Color::Black), evaluate(&pos, Color::White));
    assert_eq!(evaluate(&flipped, Color::White), -evaluate(&pos, Color::White));
}
