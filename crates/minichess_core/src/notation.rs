use thiserror::Error;

use crate::types::{coord_to_sq, sq_to_coord, Move};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseMoveError {
    #[error("move must be two squares joined by '-', got {0:?}")]
    BadShape(String),
    #[error("square out of range: {0:?}")]
    BadSquare(String),
}

/// Encode a move in the arbiter's notation, e.g. `a2-a3`.
pub fn move_to_text(mv: Move) -> String {
    format!("{}-{}", sq_to_coord(mv.from), sq_to_coord(mv.to))
}

/// Inverse of `move_to_text` for all in-bounds moves.
pub fn parse_move(text: &str) -> Result<Move, ParseMoveError> {
    let (from, to) = text
        .trim()
        .split_once('-')
        .ok_or_else(|| ParseMoveError::BadShape(text.to_string()))?;
    let from = coord_to_sq(from).ok_or_else(|| ParseMoveError::BadSquare(from.to_string()))?;
    let to = coord_to_sq(to).ok_or_else(|| ParseMoveError::BadSquare(to.to_string()))?;
    Ok(Move::new(from, to))
}
