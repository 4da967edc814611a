//! Match runner for playing games between engines

use minichess_core::{moves, Color, Engine, Position};
use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::elo::{GameResult, MatchResult};

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Search depth for engines
    pub depth: u8,
    /// Random plies played before the engines take over, so deterministic
    /// engines do not repeat the same game every time
    pub opening_random_plies: u32,
    /// Maximum plies per game before declaring a draw
    pub max_plies: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Print progress during the match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: 4,
            opening_random_plies: 2,
            max_plies: 120,
            alternate_colors: true,
            verbose: true,
        }
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            let engine1_white = !self.config.alternate_colors || game_num % 2 == 0;

            let game_result = if engine1_white {
                self.play_game(engine1, engine2)
            } else {
                // Flip the result since engine1 is black
                match self.play_game(engine2, engine1) {
                    GameResult::Win => GameResult::Loss,
                    GameResult::Loss => GameResult::Win,
                    GameResult::Draw => GameResult::Draw,
                }
            };

            match game_result {
                GameResult::Win => result.wins += 1,
                GameResult::Loss => result.losses += 1,
                GameResult::Draw => result.draws += 1,
            }

            if self.config.verbose {
                let color = if engine1_white { "W" } else { "B" };
                let outcome = match game_result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                println!(
                    "Game {}/{}: {} ({}) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    color,
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
        }

        result
    }

    /// Play a single game, returns the result from white's perspective
    fn play_game(&self, white: &mut dyn Engine, black: &mut dyn Engine) -> GameResult {
        let mut pos = Position::startpos();
        white.new_game();
        black.new_game();

        let mut rng = thread_rng();
        for _ in 0..self.config.opening_random_plies {
            let list = moves(&pos, pos.side_to_move);
            match list.choose(&mut rng) {
                Some(&mv) => {
                    pos.make_move(mv);
                    pos.side_to_move = pos.side_to_move.other();
                }
                None => break,
            }
        }

        for _ply in 0..self.config.max_plies {
            let side = pos.side_to_move;

            // King already captured: the game ended on the previous move.
            if !pos.king_present(side) {
                return loss_for(side);
            }

            let result = if side == Color::White {
                white.choose_move(&pos, self.config.depth)
            } else {
                black.choose_move(&pos, self.config.depth)
            };

            match result.best_move {
                Some(mv) => {
                    // The applier leaves the turn to the caller; the match
                    // loop owns it.
                    pos.make_move(mv);
                    pos.side_to_move = side.other();
                }
                // No move available: jammed or already lost.
                None => return loss_for(side),
            }
        }

        // Ply cap reached
        GameResult::Draw
    }
}

fn loss_for(side: Color) -> GameResult {
    match side {
        Color::White => GameResult::Loss,
        Color::Black => GameResult::Win,
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
    depth: u8,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        depth,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(engine1, engine2)
}
