use crate::{board::Position, types::*};

const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Step limit for pieces that slide until blocked.
const UNLIMITED: u8 = u8::MAX;

/// Whether a ray may, must, or must not end in a capture.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Capture {
    Allowed,
    Never,
    Only,
}

/// Generate all pseudo-legal moves for `side`, returning a fresh vector.
pub fn moves(pos: &Position, side: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(32);
    moves_into(pos, side, &mut out);
    out
}

/// Generate all pseudo-legal moves for `side` into the provided buffer,
/// reusing it across calls. Output order is deterministic: squares in index
/// order, directions in fixed table order.
pub fn moves_into(pos: &Position, side: Color, out: &mut Vec<Move>) {
    out.clear();
    for from in 0..SQUARES as u8 {
        let pc = match pos.piece_at(from) {
            Some(p) => p,
            None => continue,
        };
        if pc.color != side {
            continue;
        }
        match pc.kind {
            PieceKind::Pawn => gen_pawn(pos, from, side, out),
            PieceKind::Knight => {
                for step in KNIGHT_JUMPS {
                    walk_ray(pos, from, side, step, 1, Capture::Allowed, out);
                }
            }
            PieceKind::Bishop => {
                for step in DIAGONAL {
                    walk_ray(pos, from, side, step, UNLIMITED, Capture::Allowed, out);
                }
            }
            PieceKind::Rook => {
                for step in ORTHOGONAL {
                    walk_ray(pos, from, side, step, UNLIMITED, Capture::Allowed, out);
                }
            }
            PieceKind::Queen => {
                for step in ORTHOGONAL.iter().chain(&DIAGONAL) {
                    walk_ray(pos, from, side, *step, UNLIMITED, Capture::Allowed, out);
                }
            }
            PieceKind::King => {
                for step in ORTHOGONAL.iter().chain(&DIAGONAL) {
                    walk_ray(pos, from, side, *step, 1, Capture::Allowed, out);
                }
            }
        }
    }
}

fn gen_pawn(pos: &Position, from: u8, side: Color, out: &mut Vec<Move>) {
    let dir = side.pawn_dir();
    walk_ray(pos, from, side, (dir, 0), 1, Capture::Never, out);
    walk_ray(pos, from, side, (dir, -1), 1, Capture::Only, out);
    walk_ray(pos, from, side, (dir, 1), 1, Capture::Only, out);
}

/// The one stepper behind every piece: walk from `from` along `step`,
/// emitting moves until the board edge, the first occupied square (a capture
/// target only if `capture` permits and the occupant is an opponent), or
/// `max_steps` squares. A knight is a one-step walk along a non-unit offset.
fn walk_ray(
    pos: &Position,
    from: u8,
    side: Color,
    step: (i8, i8),
    max_steps: u8,
    capture: Capture,
    out: &mut Vec<Move>,
) {
    let (dr, dc) = step;
    let mut row = row_of(from);
    let mut col = col_of(from);
    let mut taken = 0u8;
    loop {
        row += dr;
        col += dc;
        let to = match sq(row, col) {
            Some(to) => to,
            None => break,
        };
        match pos.piece_at(to) {
            Some(pc) => {
                if pc.color != side && capture != Capture::Never {
                    out.push(Move::new(from, to));
                }
                break;
            }
            None => {
                if capture == Capture::Only {
                    break;
                }
                out.push(Move::new(from, to));
            }
        }
        taken += 1;
        if taken >= max_steps {
            break;
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
