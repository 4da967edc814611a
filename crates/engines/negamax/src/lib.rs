//! Negamax Engine
//!
//! Fixed-depth negamax search with alpha-beta pruning over material
//! evaluation. This is the playing-strength engine of the workspace.

use minichess_core::{search, Engine, Position, Score, SearchResult};

#[cfg(test)]
mod lib_tests;

/// Engine wrapper around the core negamax search.
#[derive(Debug, Clone, Default)]
pub struct NegamaxEngine {
    /// Node counter for statistics
    nodes: u64,
}

impl NegamaxEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for NegamaxEngine {
    fn choose_move(&mut self, pos: &Position, depth: u8) -> SearchResult {
        self.nodes = 0;

        let picked = search::pick_best_move(pos, depth, &mut self.nodes);

        SearchResult {
            best_move: picked.map(|(mv, _)| mv),
            // Having no move at all is a lost position in this variant.
            score: picked.map(|(_, s)| s).unwrap_or(Score::Loss),
            depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Negamax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
