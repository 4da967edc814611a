use std::ops::Neg;

/// Search value from the perspective of the side to move.
///
/// Decisive outcomes are their own variants rather than extreme integers, so
/// negating at every ply of a negamax search can never overflow or collide
/// with a real material score. Variant order gives the total order
/// `Loss < Value(_) < Win`, with `Value`s compared by material.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Score {
    /// The mover has lost: its king is gone, or it has no move.
    Loss,
    /// Material balance for the mover at a quiet leaf.
    Value(i32),
    /// The mover has won.
    Win,
}

impl Neg for Score {
    type Output = Score;

    fn neg(self) -> Score {
        match self {
            Score::Loss => Score::Win,
            Score::Win => Score::Loss,
            Score::Value(v) => Score::Value(-v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_puts_decisive_outcomes_at_the_ends() {
        assert!(Score::Loss < Score::Value(-30_000));
        assert!(Score::Value(-500) < Score::Value(0));
        assert!(Score::Value(0) < Score::Value(900));
        assert!(Score::Value(30_000) < Score::Win);
        assert!(Score::Loss < Score::Win);
    }

    #[test]
    fn negation_flips_perspective() {
        assert_eq!(-Score::Loss, Score::Win);
        assert_eq!(-Score::Win, Score::Loss);
        assert_eq!(-Score::Value(700), Score::Value(-700));
        for s in [Score::Loss, Score::Value(-42), Score::Value(0), Score::Win] {
            assert_eq!(-(-s), s);
        }
    }
}
