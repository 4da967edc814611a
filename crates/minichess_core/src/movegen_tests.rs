use std::collections::HashSet;

use super::*;
use crate::board::Position;

fn fixture(text: &str) -> Position {
    Position::from_board_text(text).expect("fixture parses")
}

fn move_set(pos: &Position, side: Color) -> HashSet<(u8, u8)> {
    moves(pos, side).iter().map(|m| (m.from, m.to)).collect()
}

fn targets(from: u8, tos: &[(i8, i8)]) -> HashSet<(u8, u8)> {
    tos.iter()
        .map(|&(r, c)| (from, sq(r, c).expect("target in bounds")))
        .collect()
}

#[test]
fn lone_rook_covers_its_rank_and_file() {
    let pos = fixture(
        "1 W
.....
.....
..R..
.....
.....
.....
",
    );
    let from = sq(2, 2).unwrap();
    let expected = targets(
        from,
        &[
            (2, 0),
            (2, 1),
            (2, 3),
            (2, 4),
            (0, 2),
            (1, 2),
            (3, 2),
            (4, 2),
            (5, 2),
        ],
    );
    assert_eq!(move_set(&pos, Color::White), expected);
}

#[test]
fn bishop_moves_diagonally_only() {
    let pos = fixture(
        "1 W
.....
.....
..B..
.....
.....
.....
",
    );
    let from = sq(2, 2).unwrap();
    let expected = targets(
        from,
        &[
            (1, 1),
            (0, 0),
            (1, 3),
            (0, 4),
            (3, 1),
            (4, 0),
            (3, 3),
            (4, 4),
        ],
    );
    let got = move_set(&pos, Color::White);
    assert_eq!(got, expected);
    // No orthogonal drift.
    assert!(!got.contains(&(from, sq(2, 3).unwrap())));
    assert!(!got.contains(&(from, sq(1, 2).unwrap())));
}

#[test]
fn queen_is_the_union_of_rook_and_bishop() {
    let queen = fixture(
        "1 W
.....
.....
..Q..
.....
.....
.....
",
    );
    let rook = fixture(
        "1 W
.....
.....
..R..
.....
.....
.....
",
    );
    let bishop = fixture(
        "1 W
.....
.....
..B..
.....
.....
.....
",
    );
    let union: HashSet<_> = move_set(&rook, Color::White)
        .union(&move_set(&bishop, Color::White))
        .copied()
        .collect();
    assert_eq!(move_set(&queen, Color::White), union);
}

#[test]
fn king_steps_once_in_all_directions() {
    let pos = fixture(
        "1 W
.....
.....
..K..
.....
.....
.....
",
    );
    let from = sq(2, 2).unwrap();
    let expected = targets(
        from,
        &[
            (1, 1),
            (1, 2),
            (1, 3),
            (2, 1),
            (2, 3),
            (3, 1),
            (3, 2),
            (3, 3),
        ],
    );
    assert_eq!(move_set(&pos, Color::White), expected);

    let corner = fixture(
        "1 B
k....
.....
.....
.....
.....
.....
",
    );
    let from = sq(0, 0).unwrap();
    assert_eq!(
        move_set(&corner, Color::Black),
        targets(from, &[(0, 1), (1, 0), (1, 1)])
    );
}

#[test]
fn knight_jumps_over_a_full_ring_of_blockers() {
    let pos = fixture(
        "1 W
.....
.PPP.
.PNP.
.PPP.
.....
.....
",
    );
    let from = sq(2, 2).unwrap();
    let knight_moves: HashSet<_> = moves(&pos, Color::White)
        .iter()
        .filter(|m| m.from == from)
        .map(|m| (m.from, m.to))
        .collect();
    let expected = targets(
        from,
        &[
            (0, 1),
            (0, 3),
            (1, 0),
            (1, 4),
            (3, 0),
            (3, 4),
            (4, 1),
            (4, 3),
        ],
    );
    assert_eq!(knight_moves, expected);
}

#[test]
fn sliders_stop_at_the_first_blocker() {
    let pos = fixture(
        "1 W
..r..
.....
..R.P
.....
.....
.....
",
    );
    let from = sq(2, 2).unwrap();
    let rook_moves: HashSet<_> = moves(&pos, Color::White)
        .iter()
        .filter(|m| m.from == from)
        .map(|m| (m.from, m.to))
        .collect();
    // Right ray stops short of the friendly pawn; up ray ends on the enemy
    // rook as a capture; nothing continues past either.
    let expected = targets(
        from,
        &[
            (2, 3),
            (2, 0),
            (2, 1),
            (1, 2),
            (0, 2),
            (3, 2),
            (4, 2),
            (5, 2),
        ],
    );
    assert_eq!(rook_moves, expected);
    assert!(!rook_moves.contains(&(from, sq(2, 4).unwrap())));
}

#[test]
fn pawns_push_forward_and_capture_diagonally() {
    let pos = fixture(
        "1 W
.....
.....
.p.p.
..P..
.....
.....
",
    );
    let from = sq(3, 2).unwrap();
    let expected = targets(from, &[(2, 2), (2, 1), (2, 3)]);
    assert_eq!(move_set(&pos, Color::White), expected);
}

#[test]
fn blocked_pawn_has_no_forward_move() {
    // A pawn may not capture straight ahead, and has no diagonal targets
    // here, so it is stuck.
    let pos = fixture(
        "1 W
.....
.....
..p..
..P..
.....
.....
",
    );
    assert!(moves(&pos, Color::White).is_empty());
}

#[test]
fn black_pawns_advance_toward_row_five() {
    let pos = fixture(
        "1 B
.....
..p..
.....
.....
.....
.....
",
    );
    let from = sq(1, 2).unwrap();
    assert_eq!(move_set(&pos, Color::Black), targets(from, &[(2, 2)]));
}

#[test]
fn push_onto_the_far_rank_is_generated() {
    // Promotion itself is the applier's job; the generator just emits the
    // move.
    let pos = fixture(
        "1 W
.....
P....
.....
.....
.....
.....
",
    );
    let from = sq(1, 0).unwrap();
    assert_eq!(move_set(&pos, Color::White), targets(from, &[(0, 0)]));
}

#[test]
fn startpos_has_exactly_seven_moves_per_side() {
    let pos = Position::startpos();

    let mut expected_white = HashSet::new();
    for c in 0..COLS {
        expected_white.insert((sq(4, c).unwrap(), sq(3, c).unwrap()));
    }
    let n = sq(5, 1).unwrap();
    expected_white.insert((n, sq(3, 0).unwrap()));
    expected_white.insert((n, sq(3, 2).unwrap()));
    assert_eq!(move_set(&pos, Color::White), expected_white);

    let mut expected_black = HashSet::new();
    for c in 0..COLS {
        expected_black.insert((sq(1, c).unwrap(), sq(2, c).unwrap()));
    }
    let n = sq(0, 3).unwrap();
    expected_black.insert((n, sq(2, 2).unwrap()));
    expected_black.insert((n, sq(2, 4).unwrap()));
    assert_eq!(move_set(&pos, Color::Black), expected_black);
}

#[test]
fn generation_order_is_deterministic() {
    let pos = Position::startpos();
    assert_eq!(moves(&pos, Color::White), moves(&pos, Color::White));
    // Squares are scanned in index order, so the a2 pawn moves first.
    assert_eq!(
        moves(&pos, Color::White)[0],
        Move::new(sq(4, 0).unwrap(), sq(3, 0).unwrap())
    );
}
