//! Bounded retry chain around the external solver.
//!
//! A solve request can fail: the sampled state may be slightly off, or
//! the backend may reject a bounded search. The chain is fixed and short:
//!
//! 1. a plain solve,
//! 2. one solve per configured alternate depth,
//! 3. the deterministic preset fallback sequence.
//!
//! Never an unbounded loop, and the caller always gets *something* to
//! run - the playback driver depends on that.

use smallvec::{smallvec, SmallVec};

use crate::core::{parse_sequence, CubeState, Move};
use crate::optimizer::optimize;

use super::encoder::encode;
use super::CubeSolver;

/// Configuration for the retry chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    /// Alternate search depths tried, in order, after the plain solve
    /// fails. SmallVec: 0-4 depths is the common case, no heap.
    pub retry_depths: SmallVec<[u8; 4]>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            retry_depths: smallvec![25, 30],
        }
    }
}

impl SolverConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the alternate depth list.
    #[must_use]
    pub fn with_retry_depths(mut self, depths: &[u8]) -> Self {
        self.retry_depths = SmallVec::from_slice(depths);
        self
    }
}

/// Where a plan's moves came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveSource {
    /// The plain, unbounded solve call.
    Direct,
    /// A retry at this search depth.
    Depth(u8),
    /// The deterministic preset sequence; it executes but may not solve.
    Fallback,
}

/// A runnable move plan. Always produced, even when every solve failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolvePlan {
    /// The moves to execute, in order.
    pub moves: Vec<Move>,
    /// Which attempt produced them.
    pub source: SolveSource,
}

/// The deterministic preset run when every solve attempt fails.
///
/// A fixed composite of common last-layer formulas; it always executes
/// (playback never stalls) even though it does not solve an arbitrary
/// cube. The driver re-queries the solver once it runs out.
#[must_use]
pub fn fallback_sequence() -> Vec<Move> {
    const PRESET: &str = "F R U R' U' F' \
                          R U R' U' \
                          U R U' R' U' F' U F \
                          F U R U' R' F' \
                          R U R' U R U2 R' \
                          R U' R U R U R U' R' U' R2";
    parse_sequence(PRESET).moves
}

/// The fixed attempt order: the plain solve, then each alternate depth.
fn attempt_chain(config: &SolverConfig) -> SmallVec<[Option<u8>; 5]> {
    let mut chain: SmallVec<[Option<u8>; 5]> = smallvec![None];
    chain.extend(config.retry_depths.iter().copied().map(Some));
    chain
}

fn source_for(depth: Option<u8>) -> SolveSource {
    match depth {
        None => SolveSource::Direct,
        Some(d) => SolveSource::Depth(d),
    }
}

fn fallback_plan() -> SolvePlan {
    log::warn!("all solve attempts failed, using preset fallback sequence");
    SolvePlan {
        moves: fallback_sequence(),
        source: SolveSource::Fallback,
    }
}

/// Run the retry chain, returning the first usable plan.
pub fn solve_with_retry(
    solver: &mut dyn CubeSolver,
    state: &CubeState,
    config: &SolverConfig,
) -> SolvePlan {
    let encoded = encode(state);

    for depth in attempt_chain(config) {
        if let Some(moves) = attempt(solver, &encoded.facelets, depth) {
            return SolvePlan {
                moves,
                source: source_for(depth),
            };
        }
    }

    fallback_plan()
}

/// Run every attempt in the chain, keep the shortest reply, and optimize
/// it before returning.
///
/// A bounded-depth search sometimes finds a shorter sequence than the
/// plain solve, and solver replies occasionally carry redundant adjacent
/// moves; this trades extra solver calls for fewer physical turns.
pub fn solve_optimized(
    solver: &mut dyn CubeSolver,
    state: &CubeState,
    config: &SolverConfig,
) -> SolvePlan {
    let encoded = encode(state);

    let mut best: Option<(Vec<Move>, SolveSource)> = None;
    for depth in attempt_chain(config) {
        if let Some(moves) = attempt(solver, &encoded.facelets, depth) {
            let better = match &best {
                Some((current, _)) => moves.len() < current.len(),
                None => true,
            };
            if better {
                best = Some((moves, source_for(depth)));
            }
        }
    }

    match best {
        Some((moves, source)) => SolvePlan {
            moves: optimize(&moves),
            source,
        },
        None => fallback_plan(),
    }
}

/// One solve attempt. `None` when the call failed or the reply carried
/// nothing usable.
fn attempt(solver: &mut dyn CubeSolver, facelets: &str, depth: Option<u8>) -> Option<Vec<Move>> {
    match solver.solve(facelets, depth) {
        Ok(reply) => {
            let parsed = parse_sequence(&reply);
            if !parsed.skipped.is_empty() {
                log::warn!(
                    "solver reply contained {} unusable token(s)",
                    parsed.skipped.len()
                );
            }
            if parsed.moves.is_empty() && !parsed.skipped.is_empty() {
                // Nothing but garbage - treat like a failed attempt.
                return None;
            }
            Some(parsed.moves)
        }
        Err(err) => {
            log::warn!("solve attempt (depth {depth:?}) failed: {err}");
            None
        }
    }
}
