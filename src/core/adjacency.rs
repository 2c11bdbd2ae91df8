//! Fixed boundary-strip tables for the six base turns.
//!
//! Turning a face also carries the three boundary facelets of each of its
//! four neighbors around a fixed cycle. Which row or column of each
//! neighbor participates, and in which traversal direction, depends only on
//! the cube's fixed geometric layout, so the whole thing is a set of
//! constants derived once from the facelet convention below and never
//! recomputed.
//!
//! Convention (every face read as seen from outside the cube):
//!
//! - Up:    row 0 borders Back,  row 2 Front, col 0 Left,  col 2 Right
//! - Down:  row 0 borders Front, row 2 Back,  col 0 Left,  col 2 Right
//! - Front: row 0 borders Up,    row 2 Down,  col 0 Left,  col 2 Right
//! - Back:  row 0 borders Up,    row 2 Down,  col 0 Right, col 2 Left
//! - Left:  row 0 borders Up,    row 2 Down,  col 0 Back,  col 2 Front
//! - Right: row 0 borders Up,    row 2 Down,  col 0 Front, col 2 Back
//!
//! Each ring lists four strips in clockwise cycle order (clockwise as seen
//! from outside the turning face): a clockwise turn copies strip `i` onto
//! strip `i + 1`, a counterclockwise turn walks the same ring backwards.
//! The `reversed` flag fixes each strip's read/write direction so that a
//! straight buffer copy lands every facelet on the right square.

use serde::{Deserialize, Serialize};

use super::color::{Color, FaceId};
use super::face::{Face, GRID};

/// Which line of a neighbor face participates in a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StripLine {
    /// A full row, by row index.
    Row(usize),
    /// A full column, by column index.
    Col(usize),
}

/// One neighbor strip of a turning face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strip {
    /// The neighbor face the strip lives on.
    pub face: FaceId,
    /// Which of its rows/columns participates.
    pub line: StripLine,
    /// Whether the strip is traversed high-to-low in the canonical ring
    /// direction.
    pub reversed: bool,
}

impl Strip {
    const fn new(face: FaceId, line: StripLine, reversed: bool) -> Self {
        Self {
            face,
            line,
            reversed,
        }
    }

    /// Read the strip's three facelets in canonical ring direction.
    #[must_use]
    pub fn read(&self, face: &Face) -> [Color; GRID] {
        let mut out = [face.center(); GRID];
        for (i, slot) in out.iter_mut().enumerate() {
            let k = if self.reversed { GRID - 1 - i } else { i };
            *slot = match self.line {
                StripLine::Row(r) => face.get(r, k),
                StripLine::Col(c) => face.get(k, c),
            };
        }
        out
    }

    /// Write three facelets along the strip in canonical ring direction.
    pub fn write(&self, face: &mut Face, colors: [Color; GRID]) {
        for (i, color) in colors.into_iter().enumerate() {
            let k = if self.reversed { GRID - 1 - i } else { i };
            match self.line {
                StripLine::Row(r) => face.set(r, k, color),
                StripLine::Col(c) => face.set(k, c, color),
            }
        }
    }
}

use FaceId::{Back, Down, Front, Left, Right, Up};
use StripLine::{Col, Row};

const UP_RING: [Strip; 4] = [
    Strip::new(Front, Row(0), false),
    Strip::new(Left, Row(0), false),
    Strip::new(Back, Row(0), false),
    Strip::new(Right, Row(0), false),
];

const DOWN_RING: [Strip; 4] = [
    Strip::new(Front, Row(2), false),
    Strip::new(Right, Row(2), false),
    Strip::new(Back, Row(2), false),
    Strip::new(Left, Row(2), false),
];

const RIGHT_RING: [Strip; 4] = [
    Strip::new(Front, Col(2), false),
    Strip::new(Up, Col(2), false),
    Strip::new(Back, Col(0), true),
    Strip::new(Down, Col(2), false),
];

const LEFT_RING: [Strip; 4] = [
    Strip::new(Up, Col(0), false),
    Strip::new(Front, Col(0), false),
    Strip::new(Down, Col(0), false),
    Strip::new(Back, Col(2), true),
];

const FRONT_RING: [Strip; 4] = [
    Strip::new(Up, Row(2), false),
    Strip::new(Right, Col(0), false),
    Strip::new(Down, Row(0), true),
    Strip::new(Left, Col(2), true),
];

const BACK_RING: [Strip; 4] = [
    Strip::new(Up, Row(0), false),
    Strip::new(Left, Col(0), true),
    Strip::new(Down, Row(2), true),
    Strip::new(Right, Col(2), false),
];

/// The boundary ring for a base turn, in clockwise cycle order.
#[must_use]
pub const fn ring(face: FaceId) -> &'static [Strip; 4] {
    match face {
        Up => &UP_RING,
        Down => &DOWN_RING,
        Left => &LEFT_RING,
        Right => &RIGHT_RING,
        Front => &FRONT_RING,
        Back => &BACK_RING,
    }
}
