//! Optimizer integration tests.
//!
//! The defining property is at the bottom: rewriting a sequence never
//! changes the net permutation it applies to a cube, for arbitrary
//! states and arbitrary sequences.

use cube_engine::{optimize, CubeState, EngineRng, Move};
use proptest::prelude::*;

fn seq(tokens: &str) -> Vec<Move> {
    tokens
        .split_whitespace()
        .map(|t| Move::parse(t).unwrap())
        .collect()
}

#[test]
fn test_spec_scenarios() {
    assert_eq!(optimize(&seq("U U' R")), seq("R"));
    assert_eq!(optimize(&seq("U U U")), seq("U'"));
}

#[test]
fn test_solver_style_tail_cancellation() {
    // A continuation solve often starts by undoing the last move of the
    // previous pass; joining the two sequences must collapse the seam.
    let mut joined = seq("R U2 F'");
    joined.extend(seq("F U2 R'"));
    assert_eq!(optimize(&joined), Vec::<Move>::new());
}

#[test]
fn test_mixed_rules_in_one_sequence() {
    assert_eq!(optimize(&seq("L L R2 R2 B B B D2 D")), seq("L2 B' D'"));
}

#[test]
fn test_optimized_output_is_stable() {
    let input = seq("R U R' U' F2 B D D'");
    let once = optimize(&input);
    let twice = optimize(&once);
    assert_eq!(once, twice);
}

proptest! {
    #[test]
    fn prop_never_longer(moves in prop::collection::vec(0..Move::ALL.len(), 0..40)) {
        let input: Vec<Move> = moves.iter().map(|&i| Move::ALL[i]).collect();
        prop_assert!(optimize(&input).len() <= input.len());
    }

    #[test]
    fn prop_preserves_net_effect(
        moves in prop::collection::vec(0..Move::ALL.len(), 0..40),
        seed in 0u64..500,
        scramble_len in 0usize..25,
    ) {
        let mut start = CubeState::solved();
        let mut rng = EngineRng::new(seed);
        start.scramble(&mut rng, scramble_len);

        let input: Vec<Move> = moves.iter().map(|&i| Move::ALL[i]).collect();
        let rewritten = optimize(&input);

        let mut raw = start;
        raw.apply_all(&input);
        let mut opt = start;
        opt.apply_all(&rewritten);

        prop_assert_eq!(raw, opt, "optimize changed the net permutation");
    }

    #[test]
    fn prop_short_sequences_reach_the_pairwise_fixed_point(
        // Short inputs cannot nest cancellations deeper than the pass
        // bound, so no adjacent same-face pair can survive.
        moves in prop::collection::vec(0..Move::ALL.len(), 0..10),
    ) {
        let input: Vec<Move> = moves.iter().map(|&i| Move::ALL[i]).collect();
        let rewritten = optimize(&input);
        for pair in rewritten.windows(2) {
            prop_assert_ne!(pair[0].face, pair[1].face);
        }
    }
}
