//! Canonical encoding of a cube state for the external solver.
//!
//! The solver takes 54 characters over the alphabet {U,R,F,D,L,B}: the
//! faces in the order Up, Right, Front, Down, Left, Back, each read
//! row-major, with every facelet written as the letter of the face whose
//! center currently carries that facelet's color.
//!
//! The mapping goes through the centers rather than a fixed color→letter
//! table because sampled colors follow no fixed hue convention: whatever
//! color sits at a center *is* that face's identity. A color that matches
//! no center (sampling noise) falls back to the identity-on-letters table
//! and marks the encoding as degraded - the solver will likely reject it,
//! but the caller gets to decide.

use serde::{Deserialize, Serialize};

use crate::core::{Color, CubeState, FaceId};

/// A cube state encoded for the external solver.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedCube {
    /// The 54-character facelet string.
    pub facelets: String,
    /// True when at least one facelet color matched no center and the
    /// identity fallback was used.
    pub degraded: bool,
}

impl std::fmt::Display for EncodedCube {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.facelets)
    }
}

/// Encode a cube state. Never mutates; idempotent for unchanged state.
#[must_use]
pub fn encode(state: &CubeState) -> EncodedCube {
    // Resolve each color against the current centers. First face wins on
    // a duplicate center; the validator flags that state separately.
    let mut center_letters: [Option<char>; 6] = [None; 6];
    for face in FaceId::all() {
        let slot = &mut center_letters[state.face(face).center().index()];
        if slot.is_none() {
            *slot = Some(face.letter());
        }
    }

    let mut facelets = String::with_capacity(crate::core::FACELET_COUNT);
    let mut degraded = false;
    for face in FaceId::SOLVER_ORDER {
        for color in state.face(face).facelets() {
            let letter = center_letters[color.index()].unwrap_or_else(|| {
                degraded = true;
                identity_letter(color)
            });
            facelets.push(letter);
        }
    }

    if degraded {
        log::warn!("encoding degraded: some colors match no center ({facelets})");
    }

    EncodedCube { facelets, degraded }
}

/// The fixed fallback table: each color maps to the letter of the face
/// that carries it when solved.
fn identity_letter(color: Color) -> char {
    FaceId::ALL[color.index()].letter()
}
