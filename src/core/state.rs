//! Cube state: six owned facelet grids and the twelve move operators.
//!
//! ## CubeState
//!
//! A single owned value holding the six faces. There is no process-global
//! state: the validator, encoder and playback driver all borrow a
//! `CubeState` with a clearly scoped lifetime.
//!
//! ## Move application
//!
//! A clockwise turn does two things atomically: it replaces the turning
//! face with its clockwise quarter image, and it cycles the four neighbor
//! strips listed in that face's [`adjacency`] ring. The counterclockwise
//! turn applies the exact inverse permutation (the same ring walked
//! backwards plus a counterclockwise own-face image) - it is never
//! implemented as three clockwise turns. A half turn is two clockwise
//! quarters.
//!
//! Moves are permutations: they can never create or destroy a color, so
//! the color-count invariant is preserved by construction.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::adjacency;
use super::color::{Color, FaceId};
use super::face::{Face, GRID};
use super::moves::{Move, Turn};
use super::rng::EngineRng;
use crate::rules::StateReport;

/// Total number of facelets on the cube.
pub const FACELET_COUNT: usize = 54;

/// Error rejecting a malformed bulk load. The state is unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The facelet array was not exactly 54 entries long.
    #[error("expected exactly {FACELET_COUNT} facelets, got {0}")]
    WrongFaceletCount(usize),
}

/// The full cube: six 3×3 faces indexed by [`FaceId`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CubeState {
    faces: [Face; 6],
}

impl CubeState {
    /// Create a cube in the solved configuration.
    #[must_use]
    pub fn solved() -> Self {
        let mut faces = [Face::filled(Color::White); 6];
        for face_id in FaceId::all() {
            faces[face_id.index()] = Face::filled(face_id.solved_color());
        }
        Self { faces }
    }

    /// Borrow one face.
    #[must_use]
    pub fn face(&self, id: FaceId) -> &Face {
        &self.faces[id.index()]
    }

    /// Whether every face's nine facelets equal its center.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.faces.iter().all(Face::is_uniform)
    }

    /// Iterate over all 54 facelets in bulk-load order
    /// (U, D, L, R, F, B, each face row-major).
    pub fn facelets(&self) -> impl Iterator<Item = Color> + '_ {
        self.faces.iter().flat_map(Face::facelets)
    }

    // === Bulk load / reset ===

    /// Replace the whole state from 54 externally sampled colors.
    ///
    /// The order is U, D, L, R, F, B, each face row-major. Any other
    /// length is rejected with no state change. Invariant violations
    /// (color counts ≠ 9, duplicate centers) do NOT reject the load -
    /// they are flagged on the returned report so a miscalibrated sampler
    /// does not block downstream tooling, and downstream solve attempts
    /// may fail instead.
    pub fn load_facelets(&mut self, colors: &[Color]) -> Result<StateReport, LoadError> {
        if colors.len() != FACELET_COUNT {
            return Err(LoadError::WrongFaceletCount(colors.len()));
        }

        for (face_idx, chunk) in colors.chunks_exact(GRID * GRID).enumerate() {
            for r in 0..GRID {
                for c in 0..GRID {
                    self.faces[face_idx].set(r, c, chunk[r * GRID + c]);
                }
            }
        }

        let report = StateReport::check(self);
        if !report.color_counts_valid {
            log::warn!("loaded state has unbalanced color counts: {report}");
        }
        if !report.centers_unique {
            log::warn!("loaded state has duplicate centers: {report}");
        }
        Ok(report)
    }

    /// Replace the state with the solved configuration.
    pub fn reset(&mut self) {
        *self = Self::solved();
    }

    // === Move application ===

    /// Apply one move token.
    pub fn apply(&mut self, mv: Move) {
        match mv.turn {
            Turn::Clockwise => self.turn_cw(mv.face),
            Turn::CounterClockwise => self.turn_ccw(mv.face),
            Turn::Half => {
                self.turn_cw(mv.face);
                self.turn_cw(mv.face);
            }
        }
    }

    /// Apply a whole sequence in order.
    pub fn apply_all(&mut self, moves: &[Move]) {
        for &mv in moves {
            self.apply(mv);
        }
    }

    /// Apply `count` uniformly chosen moves, returning the sequence.
    pub fn scramble(&mut self, rng: &mut EngineRng, count: usize) -> Vec<Move> {
        let mut applied = Vec::with_capacity(count);
        for _ in 0..count {
            let mv = Move::ALL[rng.gen_range(0..Move::ALL.len())];
            self.apply(mv);
            applied.push(mv);
        }
        applied
    }

    fn turn_cw(&mut self, face: FaceId) {
        self.faces[face.index()] = self.faces[face.index()].rotated_cw();

        let ring = adjacency::ring(face);
        let strips = ring.map(|strip| strip.read(&self.faces[strip.face.index()]));
        for (i, colors) in strips.into_iter().enumerate() {
            let dst = &ring[(i + 1) % ring.len()];
            dst.write(&mut self.faces[dst.face.index()], colors);
        }
    }

    fn turn_ccw(&mut self, face: FaceId) {
        self.faces[face.index()] = self.faces[face.index()].rotated_ccw();

        let ring = adjacency::ring(face);
        let strips = ring.map(|strip| strip.read(&self.faces[strip.face.index()]));
        for (i, dst) in ring.iter().enumerate() {
            dst.write(
                &mut self.faces[dst.face.index()],
                strips[(i + 1) % ring.len()],
            );
        }
    }
}

impl Default for CubeState {
    fn default() -> Self {
        Self::solved()
    }
}

impl std::ops::Index<FaceId> for CubeState {
    type Output = Face;

    fn index(&self, id: FaceId) -> &Face {
        &self.faces[id.index()]
    }
}

impl std::fmt::Display for CubeState {
    /// The unfolded net: Up on top, Left/Front/Right/Back across the
    /// middle, Down below. One letter per facelet.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let row = |face: FaceId, r: usize| -> String {
            (0..GRID)
                .map(|c| self[face].get(r, c).initial().to_string())
                .collect::<Vec<_>>()
                .join(" ")
        };

        for r in 0..GRID {
            writeln!(f, "      {}", row(FaceId::Up, r))?;
        }
        for r in 0..GRID {
            writeln!(
                f,
                "{} {} {} {}",
                row(FaceId::Left, r),
                row(FaceId::Front, r),
                row(FaceId::Right, r),
                row(FaceId::Back, r)
            )?;
        }
        for r in 0..GRID {
            writeln!(f, "      {}", row(FaceId::Down, r))?;
        }
        Ok(())
    }
}
