use crate::{board::Position, eval::evaluate, movegen::moves_into, score::Score, types::*};

/// Fixed search depth used when callers do not specify one.
pub const DEFAULT_DEPTH: u8 = 5;

/// Searches the position and returns the best move for `pos.side_to_move`
/// with its score, or `None` when the mover has no move at all.
///
/// The root picks the move with the highest negamax value; ties keep the
/// first move in generation order. `nodes` counts positions visited, for
/// statistics.
pub fn pick_best_move(pos: &Position, depth: u8, nodes: &mut u64) -> Option<(Move, Score)> {
    let mut tmp = pos.clone();
    let side = tmp.side_to_move;
    let mut list = Vec::with_capacity(32);
    moves_into(&tmp, side, &mut list);

    let mut best: Option<(Move, Score)> = None;
    for mv in list {
        *nodes += 1;
        let score = {
            let mut applied = tmp.apply(mv);
            -negamax(
                &mut applied,
                side.other(),
                depth.saturating_sub(1),
                Score::Loss,
                Score::Win,
                nodes,
            )
        };
        if best.is_none_or(|(_, s)| score > s) {
            best = Some((mv, score));
        }
    }
    best
}

/// Recursive negamax with alpha-beta pruning, from the perspective of
/// `side`, the player to move at this node.
///
/// A position whose mover has already lost its king, or has no move, is
/// terminal and scores `Loss` without consulting the evaluator; an opponent
/// king captured one ply up is caught by the same check after the flip.
fn negamax(
    pos: &mut Position,
    side: Color,
    depth: u8,
    mut alpha: Score,
    beta: Score,
    nodes: &mut u64,
) -> Score {
    if !pos.king_present(side) {
        return Score::Loss;
    }
    if depth == 0 {
        return Score::Value(evaluate(pos, side));
    }

    let mut list = Vec::with_capacity(32);
    moves_into(pos, side, &mut list);
    if list.is_empty() {
        return Score::Loss;
    }

    let mut best = Score::Loss;
    for mv in list {
        *nodes += 1;
        let score = {
            let mut applied = pos.apply(mv);
            -negamax(&mut applied, side.other(), depth - 1, -beta, -alpha, nodes)
        };

        if score > best {
            best = score;
        }
        if best > alpha {
            alpha = best;
        }
        if alpha >= beta {
            break;
        }
    }
    best
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
