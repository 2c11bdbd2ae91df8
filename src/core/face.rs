//! A single 3×3 facelet grid and the pure quarter-turn transforms.
//!
//! The grid rotator is deliberately independent of which face it rotates:
//! `rotated_cw` moves facelet `(r, c)` to `(c, 2-r)` and `rotated_ccw` is
//! its inverse. Four applications of either return the original grid
//! (cyclic group of order 4).

use serde::{Deserialize, Serialize};

use super::color::Color;

/// Grid side length. Fixed for a 3×3×3 puzzle.
pub const GRID: usize = 3;

/// A 3×3 grid of colors, addressed by `(row, col)` in `[0,2]×[0,2]`.
///
/// `(1, 1)` is the center; it defines the face's nominal identity and
/// never moves under any turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Face {
    grid: [[Color; GRID]; GRID],
}

impl Face {
    /// Create a face with all nine facelets set to one color.
    #[must_use]
    pub const fn filled(color: Color) -> Self {
        Self {
            grid: [[color; GRID]; GRID],
        }
    }

    /// Create a face from explicit rows.
    #[must_use]
    pub const fn from_rows(grid: [[Color; GRID]; GRID]) -> Self {
        Self { grid }
    }

    /// Get the facelet at `(row, col)`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Color {
        self.grid[row][col]
    }

    /// Set the facelet at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, color: Color) {
        self.grid[row][col] = color;
    }

    /// The center facelet.
    #[must_use]
    pub fn center(&self) -> Color {
        self.grid[1][1]
    }

    /// Whether all nine facelets equal the center.
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        let center = self.center();
        self.facelets().all(|c| c == center)
    }

    /// Iterate over the nine facelets in row-major order.
    pub fn facelets(&self) -> impl Iterator<Item = Color> + '_ {
        self.grid.iter().flat_map(|row| row.iter().copied())
    }

    /// A quarter-turn clockwise image of this grid: `(r, c)` → `(c, 2-r)`.
    #[must_use]
    pub fn rotated_cw(&self) -> Face {
        let mut out = *self;
        for (r, row) in out.grid.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = self.grid[GRID - 1 - c][r];
            }
        }
        out
    }

    /// A quarter-turn counterclockwise image of this grid: the exact
    /// inverse of [`Face::rotated_cw`].
    #[must_use]
    pub fn rotated_ccw(&self) -> Face {
        let mut out = *self;
        for (r, row) in out.grid.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = self.grid[c][GRID - 1 - r];
            }
        }
        out
    }
}
