use super::*;
use minichess_core::{moves, Color, Score};

#[test]
fn engine_returns_a_legal_opening_move() {
    let mut engine = NegamaxEngine::new();
    let pos = Position::startpos();

    let result = engine.choose_move(&pos, 3);

    let legal = moves(&pos, Color::White);
    assert!(legal.contains(&result.best_move.unwrap()));
    assert!(result.nodes > 0);
}

#[test]
fn depth_one_opening_score_is_level() {
    let mut engine = NegamaxEngine::new();
    let pos = Position::startpos();

    let result = engine.choose_move(&pos, 1);

    assert_eq!(result.score, Score::Value(0));
}

#[test]
fn engine_reports_a_loss_when_it_cannot_move() {
    let mut engine = NegamaxEngine::new();
    let pos = Position::from_board_text(
        "1 B
kp..K
pp...
pp...
pp...
pp...
pp...
",
    )
    .expect("fixture parses");

    let result = engine.choose_move(&pos, 3);

    assert!(result.best_move.is_none());
    assert_eq!(result.score, Score::Loss);
}
