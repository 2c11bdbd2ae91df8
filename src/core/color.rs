//! Color labels and face identification.
//!
//! ## Color
//!
//! One of six sticker labels. No real-world hue is attached at this layer:
//! the camera/sampling layer decides which hue maps to which label, and the
//! encoder resolves labels against the current centers. The engine only
//! compares labels for equality.
//!
//! ## FaceId
//!
//! Type-safe identifier for the six cube faces. The index order
//! (U=0, D=1, L=2, R=3, F=4, B=5) is the bulk-load order.

use serde::{Deserialize, Serialize};

/// One of the six sticker labels.
///
/// The variant names follow the common Western color scheme purely for
/// readability; nothing in the engine depends on them beyond equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Yellow,
    Orange,
    Red,
    Green,
    Blue,
}

impl Color {
    /// All six colors, in the order matching `FaceId::all()` for the
    /// solved configuration.
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Yellow,
        Color::Orange,
        Color::Red,
        Color::Green,
        Color::Blue,
    ];

    /// Get the raw color index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Iterate over all colors.
    pub fn all() -> impl Iterator<Item = Color> {
        Self::ALL.into_iter()
    }

    /// One-letter abbreviation, used by the text net rendering.
    #[must_use]
    pub const fn initial(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Orange => 'O',
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Blue => 'B',
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::White => "White",
            Color::Yellow => "Yellow",
            Color::Orange => "Orange",
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Blue => "Blue",
        };
        write!(f, "{name}")
    }
}

/// Identifier for one of the six cube faces.
///
/// The discriminant doubles as the face index used by the bulk loader and
/// the internal face array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceId {
    Up,
    Down,
    Left,
    Right,
    Front,
    Back,
}

impl FaceId {
    /// All six faces in bulk-load order (U, D, L, R, F, B).
    pub const ALL: [FaceId; 6] = [
        FaceId::Up,
        FaceId::Down,
        FaceId::Left,
        FaceId::Right,
        FaceId::Front,
        FaceId::Back,
    ];

    /// The face order required by the external solver's input string
    /// (U, R, F, D, L, B).
    pub const SOLVER_ORDER: [FaceId; 6] = [
        FaceId::Up,
        FaceId::Right,
        FaceId::Front,
        FaceId::Down,
        FaceId::Left,
        FaceId::Back,
    ];

    /// Get the raw face index (0-based, bulk-load order).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Iterate over all faces in bulk-load order.
    pub fn all() -> impl Iterator<Item = FaceId> {
        Self::ALL.into_iter()
    }

    /// The single-letter name used in move notation and the solver string.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            FaceId::Up => 'U',
            FaceId::Down => 'D',
            FaceId::Left => 'L',
            FaceId::Right => 'R',
            FaceId::Front => 'F',
            FaceId::Back => 'B',
        }
    }

    /// Look a face up by its single-letter name.
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<FaceId> {
        match letter {
            'U' => Some(FaceId::Up),
            'D' => Some(FaceId::Down),
            'L' => Some(FaceId::Left),
            'R' => Some(FaceId::Right),
            'F' => Some(FaceId::Front),
            'B' => Some(FaceId::Back),
            _ => None,
        }
    }

    /// The color this face holds in the solved configuration.
    #[must_use]
    pub const fn solved_color(self) -> Color {
        Color::ALL[self as usize]
    }
}

impl std::fmt::Display for FaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FaceId::Up => "Up",
            FaceId::Down => "Down",
            FaceId::Left => "Left",
            FaceId::Right => "Right",
            FaceId::Front => "Front",
            FaceId::Back => "Back",
        };
        write!(f, "{name}")
    }
}
