//! Move-sequence optimizer: rewrite a token list into an equivalent,
//! same-or-shorter list.
//!
//! Two same-face neighbors always combine: their quarter-turn counts add
//! mod 4, which covers every rewrite rule at once - inverse pairs cancel,
//! repeated quarters merge into a half turn, and a half turn beside a
//! quarter collapses to the opposite quarter. Pair rewrites run to a
//! fixed point, bounded to a small constant number of passes (each pass
//! strictly shortens or halts, so divergence is impossible). A separate
//! triple-scan then collapses any three consecutive identical tokens the
//! pair passes missed.
//!
//! The defining property: optimizing never changes the net permutation a
//! sequence applies to a cube.

use crate::core::{Move, Turn};

/// Upper bound on pairwise rewrite passes. Each pass either strictly
/// shortens the sequence or stops the loop early.
const MAX_PASSES: usize = 5;

/// Rewrite a move sequence into an equivalent same-or-shorter one.
#[must_use]
pub fn optimize(sequence: &[Move]) -> Vec<Move> {
    let mut moves = sequence.to_vec();

    for _ in 0..MAX_PASSES {
        if !pairwise_pass(&mut moves) {
            break;
        }
    }
    triple_scan(&mut moves);

    moves
}

/// Combine two same-face tokens by quarter-turn arithmetic mod 4.
///
/// `Some(None)` means the pair cancels outright; `None` means the tokens
/// do not interact.
fn combine(a: Move, b: Move) -> Option<Option<Move>> {
    if a.face != b.face {
        return None;
    }
    let quarters = a.turn.quarter_turns() + b.turn.quarter_turns();
    Some(Turn::from_quarter_turns(quarters).map(|turn| Move::new(a.face, turn)))
}

/// One left-to-right pass of adjacent-pair rewrites. Returns whether
/// anything changed.
fn pairwise_pass(moves: &mut Vec<Move>) -> bool {
    let mut changed = false;
    let mut i = 0;
    while i + 1 < moves.len() {
        match combine(moves[i], moves[i + 1]) {
            Some(replacement) => {
                moves.splice(i..i + 2, replacement);
                changed = true;
                // Stay put: the replacement may combine with what now
                // follows it; what now precedes it is caught next pass.
            }
            None => i += 1,
        }
    }
    changed
}

/// Collapse any three consecutive identical tokens into one.
///
/// The pairwise fixed point already removes these, but this second scan
/// stands on its own: three identical quarter turns are one opposite
/// quarter turn regardless of what the pair passes did.
fn triple_scan(moves: &mut Vec<Move>) {
    let mut i = 0;
    while i + 2 < moves.len() {
        if moves[i] == moves[i + 1] && moves[i] == moves[i + 2] {
            let mv = moves[i];
            let quarters = mv.turn.quarter_turns() * 3;
            moves.splice(
                i..i + 3,
                Turn::from_quarter_turns(quarters).map(|turn| Move::new(mv.face, turn)),
            );
        } else {
            i += 1;
        }
    }
}
