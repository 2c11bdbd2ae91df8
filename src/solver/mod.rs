//! The external solver boundary.
//!
//! The two-phase search that actually solves a cube is an external
//! collaborator. The engine only knows how to:
//! - encode a state into the 54-character string the solver consumes
//!   ([`encoder`]),
//! - call the solver through the [`CubeSolver`] seam, and
//! - drive the bounded retry chain when a call fails ([`retry`]).
//!
//! The engine issues at most one outstanding solve request at a time;
//! calls are synchronous and blocking.

pub mod encoder;
pub mod retry;

pub use encoder::{encode, EncodedCube};
pub use retry::{
    fallback_sequence, solve_optimized, solve_with_retry, SolvePlan, SolveSource, SolverConfig,
};

use thiserror::Error;

/// Error from an external solve attempt.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SolverError {
    /// The encoded string describes an unreachable or malformed
    /// configuration.
    #[error("configuration is unsolvable or malformed: {0}")]
    Unsolvable(String),
    /// The backend itself failed (process, FFI, I/O, ...).
    #[error("solver backend failure: {0}")]
    Backend(String),
}

/// The external search algorithm, seen from the engine.
///
/// `facelets` is the canonical 54-character encoding (see [`encoder`]).
/// `max_depth` optionally bounds the search; a bounded search may return
/// a sequence that does not fully solve the cube in one pass - the
/// playback driver re-queries in that case.
///
/// The reply is a whitespace-separated list of symbols from the
/// 18-token move alphabet. Tokens that fail to parse are skipped and
/// reported by the caller, not treated as fatal.
pub trait CubeSolver {
    /// Solve the encoded configuration, returning the raw reply.
    fn solve(&mut self, facelets: &str, max_depth: Option<u8>) -> Result<String, SolverError>;
}
