//! Core engine types: colors, faces, the cube state, moves, RNG.
//!
//! This module contains the correctness-critical building blocks. The
//! boundary-strip tables in [`adjacency`] are the one constant artifact
//! everything else leans on; they are derived once from the cube's fixed
//! geometric layout and exercised by the per-face group-property tests.

pub mod adjacency;
pub mod color;
pub mod face;
pub mod moves;
pub mod rng;
pub mod state;

pub use color::{Color, FaceId};
pub use face::{Face, GRID};
pub use moves::{format_sequence, parse_sequence, Move, MoveParseError, MoveRecord, SequenceParse, Turn};
pub use rng::EngineRng;
pub use state::{CubeState, LoadError, FACELET_COUNT};
