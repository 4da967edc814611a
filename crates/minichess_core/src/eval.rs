use crate::{board::Position, types::*};

pub fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 300,
        PieceKind::Bishop => 300,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 0, // king loss is a terminal, not material
    }
}

/// Material balance from `side`'s perspective.
pub fn evaluate(pos: &Position, side: Color) -> i32 {
    let mut score = 0i32;
    for sq in 0..SQUARES as u8 {
        if let Some(pc) = pos.piece_at(sq) {
            let v = piece_value(pc.kind);
            score += if pc.color == Color::White { v } else { -v };
        }
    }
    match side {
        Color::White => score,
        Color::Black => -score,
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
