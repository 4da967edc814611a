//! Random Move Engine
//!
//! Selects uniformly at random from the mover's generated moves. Useful as a
//! strength floor in the arena and for stress-testing move generation and
//! the match loop.

use minichess_core::{moves_into, Engine, Position, Score, SearchResult};
use rand::seq::SliceRandom;
use rand::thread_rng;


/// An engine that plays random pseudo-legal moves. No evaluation at all.
#[derive(Debug, Clone, Default)]
pub struct RandomEngine {
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for RandomEngine {
    fn choose_move(&mut self, pos: &Position, _depth: u8) -> SearchResult {
        let mut list = Vec::with_capacity(32);
        moves_into(pos, pos.side_to_move, &mut list);

        self.nodes = 1;

        let best_move = list.choose(&mut thread_rng()).copied();

        SearchResult {
            best_move,
            // Having no move is a lost position in this variant.
            score: if best_move.is_some() {
                Score::Value(0)
            } else {
                Score::Loss
            },
            depth: 1,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
