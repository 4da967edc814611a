use std::fmt;
use std::ops::{Deref, DerefMut};

use thiserror::Error;

use crate::types::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub board: [Option<Piece>; SQUARES],
    pub side_to_move: Color,
}

/// What `make_move` changed, beyond the relocation itself.
#[derive(Clone, Copy, Debug)]
pub struct Undo {
    pub captured: Option<Piece>,
    pub promoted: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseBoardError {
    #[error("missing or incomplete header line")]
    MissingHeader,
    #[error("invalid move number {0:?}")]
    BadMoveNumber(String),
    #[error("invalid side to move {0:?}")]
    BadSide(String),
    #[error("expected 6 board rows, found {0}")]
    BadRowCount(usize),
    #[error("board row {row} has width {len}, expected 5")]
    BadRowWidth { row: usize, len: usize },
    #[error("invalid piece character {0:?}")]
    BadPiece(char),
}

impl Position {
    pub fn startpos() -> Self {
        let mut p = Position {
            board: [None; SQUARES],
            side_to_move: Color::White,
        };

        // Pawns
        for c in 0..COLS {
            p.board[(4 * COLS + c) as usize] = Some(Piece {
                color: Color::White,
                kind: PieceKind::Pawn,
            });
            p.board[(COLS + c) as usize] = Some(Piece {
                color: Color::Black,
                kind: PieceKind::Pawn,
            });
        }
        // Home ranks: White RNBQK on row 5, Black kqbnr on row 0.
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
        ];
        for (c, &kind) in back.iter().enumerate() {
            p.board[5 * COLS as usize + c] = Some(Piece {
                color: Color::White,
                kind,
            });
            p.board[COLS as usize - 1 - c] = Some(Piece {
                color: Color::Black,
                kind,
            });
        }
        p
    }

    /// Parse the arbiter's game-state text: a header line with the move
    /// number and the side to move (`W` or `B`), then six board rows of five
    /// characters (`.` empty, `pnbrqk` Black, `PNBRQK` White). A blank line
    /// ends the input. The move number is validated and discarded.
    pub fn from_board_text(text: &str) -> Result<Self, ParseBoardError> {
        let mut lines = text
            .lines()
            .map(str::trim)
            .take_while(|line| !line.is_empty());

        let header = lines.next().ok_or(ParseBoardError::MissingHeader)?;
        let mut fields = header.split_whitespace();
        let move_num = fields.next().ok_or(ParseBoardError::MissingHeader)?;
        move_num
            .parse::<u32>()
            .map_err(|_| ParseBoardError::BadMoveNumber(move_num.to_string()))?;
        let side = fields.next().ok_or(ParseBoardError::MissingHeader)?;
        let side_to_move = match side {
            "W" => Color::White,
            "B" => Color::Black,
            _ => return Err(ParseBoardError::BadSide(side.to_string())),
        };

        let mut board = [None; SQUARES];
        let mut row = 0usize;
        for line in lines {
            if row < ROWS as usize {
                if line.len() != COLS as usize {
                    return Err(ParseBoardError::BadRowWidth {
                        row,
                        len: line.len(),
                    });
                }
                for (col, ch) in line.chars().enumerate() {
                    if ch == '.' {
                        continue;
                    }
                    let pc = Piece::from_char(ch).ok_or(ParseBoardError::BadPiece(ch))?;
                    board[row * COLS as usize + col] = Some(pc);
                }
            }
            row += 1;
        }
        if row != ROWS as usize {
            return Err(ParseBoardError::BadRowCount(row));
        }

        Ok(Position {
            board,
            side_to_move,
        })
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board[sq as usize]
    }
    pub fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        self.board[sq as usize] = pc;
    }

    pub fn king_present(&self, c: Color) -> bool {
        self.board
            .iter()
            .flatten()
            .any(|pc| pc.color == c && pc.kind == PieceKind::King)
    }

    /// Relocate the mover from `mv.from` to `mv.to`, capturing whatever sat
    /// on the destination and auto-promoting a pawn that reaches its far
    /// rank. Does not touch `side_to_move`; flipping the turn is the
    /// caller's job.
    pub fn make_move(&mut self, mv: Move) -> Undo {
        let moved = self.piece_at(mv.from).expect("no piece on from-square");
        let captured = self.piece_at(mv.to);
        debug_assert!(
            captured.is_none_or(|pc| pc.color != moved.color),
            "move captures its own piece"
        );

        self.set_piece(mv.from, None);

        let mut placed = moved;
        let mut promoted = false;
        if moved.kind == PieceKind::Pawn && row_of(mv.to) == moved.color.promotion_row() {
            placed.kind = PieceKind::Queen;
            promoted = true;
        }
        self.set_piece(mv.to, Some(placed));

        Undo { captured, promoted }
    }

    pub fn unmake_move(&mut self, mv: Move, undo: Undo) {
        let mut moved = self.piece_at(mv.to).expect("no piece on to-square");
        if undo.promoted {
            moved.kind = PieceKind::Pawn;
        }
        self.set_piece(mv.to, undo.captured);
        self.set_piece(mv.from, Some(moved));
    }

    /// Scoped form of `make_move`: the returned handle derefs to the
    /// position and undoes the move when dropped, so the position is
    /// restored on every exit path.
    pub fn apply(&mut self, mv: Move) -> AppliedMove<'_> {
        let undo = self.make_move(mv);
        AppliedMove {
            pos: self,
            mv,
            undo,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS as usize {
            for col in 0..COLS as usize {
                match self.board[row * COLS as usize + col] {
                    Some(pc) => write!(f, "{}", pc.to_char())?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub struct AppliedMove<'a> {
    pos: &'a mut Position,
    mv: Move,
    undo: Undo,
}

impl Deref for AppliedMove<'_> {
    type Target = Position;
    fn deref(&self) -> &Position {
        self.pos
    }
}

impl DerefMut for AppliedMove<'_> {
    fn deref_mut(&mut self) -> &mut Position {
        self.pos
    }
}

impl Drop for AppliedMove<'_> {
    fn drop(&mut self) {
        self.pos.unmake_move(self.mv, self.undo);
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
