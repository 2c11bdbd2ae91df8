//! # cube-engine
//!
//! A 3×3×3 cube state and move engine: the correctness-critical core of a
//! camera-capture → external-solver → animated-playback pipeline.
//!
//! ## Design Principles
//!
//! 1. **Owned state, no globals**: `CubeState` is a plain value. The
//!    validator, encoder and playback driver borrow it with scoped
//!    lifetimes.
//!
//! 2. **Constants over recomputation**: the boundary-strip tables that
//!    make face turns correct are derived once from the cube's fixed
//!    geometry and pinned by per-face group-property tests.
//!
//! 3. **Degrade, don't block**: a questionable sampled state is flagged
//!    and accepted; a failed solve falls through a bounded retry chain to
//!    a deterministic preset, so playback always has something to run.
//!
//! ## Modules
//!
//! - `core`: colors, faces, the cube state, move tokens, adjacency
//!   tables, scramble RNG
//! - `rules`: invariant validation and solved detection
//! - `solver`: canonical encoding, the external-solver seam, bounded
//!   retries
//! - `optimizer`: move-sequence rewriting
//! - `playback`: history, the step/pause/cancel state machine, the
//!   persisted move journal

pub mod core;
pub mod rules;
pub mod solver;
pub mod optimizer;
pub mod playback;

// Re-export commonly used types
pub use crate::core::{
    format_sequence, parse_sequence,
    Color, CubeState, EngineRng, Face, FaceId,
    LoadError, Move, MoveParseError, MoveRecord,
    SequenceParse, Turn, FACELET_COUNT, GRID,
};

pub use crate::rules::StateReport;

pub use crate::solver::{
    encode, fallback_sequence, solve_optimized, solve_with_retry,
    CubeSolver, EncodedCube, SolvePlan, SolveSource, SolverConfig, SolverError,
};

pub use crate::optimizer::optimize;

pub use crate::playback::{
    journal::write_move_log,
    PlaybackDriver, PlaybackStatus, StepOutcome,
};
