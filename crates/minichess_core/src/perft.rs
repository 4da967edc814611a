use crate::{board::Position, movegen::moves_into, types::*};

/// Pure perft node count over the pseudo-legal move tree.
/// Positions where the mover's king is already captured are leaves; the
/// game is over there.
pub fn perft(pos: &mut Position, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(pos: &mut Position, side: Color, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 || !pos.king_present(side) {
            return 1;
        }

        let (buf, rest) = layers
            .split_first_mut()
            .expect("perft requires one buffer per remaining ply");

        moves_into(pos, side, buf);

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            let mut applied = pos.apply(mv);
            nodes += inner(&mut applied, side.other(), depth - 1, rest);
        }
        nodes
    }

    let side = pos.side_to_move;
    let mut layers = vec![Vec::with_capacity(32); depth as usize];
    inner(pos, side, depth, &mut layers[..])
}
