//! Move tokens: the 18-symbol face-turn alphabet.
//!
//! A move is a base face plus a turn amount. The text form follows the
//! external solver's alphabet: `U`, `U'`, `U2`, and likewise for D, L, R,
//! F and B. A half-turn is two clockwise quarter turns, not a primitive.
//!
//! Parsing is strict: anything outside the 18 symbols is a
//! [`MoveParseError`], so an unrecognized token can never reach move
//! application. [`parse_sequence`] is the lenient entry point for solver
//! replies - it skips and reports bad tokens instead of failing the whole
//! sequence.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::color::FaceId;

/// Turn amount for a base face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    /// Quarter turn clockwise (viewed from outside the face).
    Clockwise,
    /// Quarter turn counterclockwise.
    CounterClockwise,
    /// Half turn (two clockwise quarters).
    Half,
}

impl Turn {
    /// The turn expressed as a number of clockwise quarter turns (1-3).
    #[must_use]
    pub const fn quarter_turns(self) -> u8 {
        match self {
            Turn::Clockwise => 1,
            Turn::Half => 2,
            Turn::CounterClockwise => 3,
        }
    }

    /// Build a turn from a clockwise quarter-turn count taken mod 4.
    ///
    /// Returns `None` for a net-zero rotation.
    #[must_use]
    pub const fn from_quarter_turns(quarters: u8) -> Option<Turn> {
        match quarters % 4 {
            1 => Some(Turn::Clockwise),
            2 => Some(Turn::Half),
            3 => Some(Turn::CounterClockwise),
            _ => None,
        }
    }

    /// The inverse turn amount.
    #[must_use]
    pub const fn inverse(self) -> Turn {
        match self {
            Turn::Clockwise => Turn::CounterClockwise,
            Turn::CounterClockwise => Turn::Clockwise,
            Turn::Half => Turn::Half,
        }
    }
}

/// A single face-turn token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The face being turned.
    pub face: FaceId,
    /// How far it turns.
    pub turn: Turn,
}

/// Error produced when a token is not one of the 18 move symbols.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unrecognized move token `{0}`")]
pub struct MoveParseError(pub String);

impl Move {
    /// Create a move.
    #[must_use]
    pub const fn new(face: FaceId, turn: Turn) -> Self {
        Self { face, turn }
    }

    /// All 18 move tokens, grouped by face.
    pub const ALL: [Move; 18] = {
        let mut all = [Move::new(FaceId::Up, Turn::Clockwise); 18];
        let turns = [Turn::Clockwise, Turn::CounterClockwise, Turn::Half];
        let mut f = 0;
        while f < 6 {
            let mut t = 0;
            while t < 3 {
                all[f * 3 + t] = Move::new(FaceId::ALL[f], turns[t]);
                t += 1;
            }
            f += 1;
        }
        all
    };

    /// The move undoing this one.
    #[must_use]
    pub const fn inverse(self) -> Move {
        Move::new(self.face, self.turn.inverse())
    }

    /// Parse a single token (`R`, `R'`, `R2`, ...).
    pub fn parse(token: &str) -> Result<Move, MoveParseError> {
        let mut chars = token.chars();
        let face = chars
            .next()
            .and_then(FaceId::from_letter)
            .ok_or_else(|| MoveParseError(token.to_string()))?;
        let turn = match chars.next() {
            None => Turn::Clockwise,
            Some('\'') => Turn::CounterClockwise,
            Some('2') => Turn::Half,
            Some(_) => return Err(MoveParseError(token.to_string())),
        };
        if chars.next().is_some() {
            return Err(MoveParseError(token.to_string()));
        }
        Ok(Move::new(face, turn))
    }

    /// A short human-readable description ("Right face counterclockwise").
    #[must_use]
    pub fn description(self) -> String {
        let amount = match self.turn {
            Turn::Clockwise => "clockwise",
            Turn::CounterClockwise => "counterclockwise",
            Turn::Half => "half turn",
        };
        format!("{} face {}", self.face, amount)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let suffix = match self.turn {
            Turn::Clockwise => "",
            Turn::CounterClockwise => "'",
            Turn::Half => "2",
        };
        write!(f, "{}{}", self.face.letter(), suffix)
    }
}

impl std::str::FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::parse(s)
    }
}

/// Result of leniently parsing a whitespace-separated token sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SequenceParse {
    /// The tokens that parsed, in order.
    pub moves: Vec<Move>,
    /// The tokens that did not, verbatim.
    pub skipped: Vec<String>,
}

/// Parse a whitespace-separated move sequence, skipping bad tokens.
///
/// Unrecognized tokens are reported via `log::warn!` and collected in
/// [`SequenceParse::skipped`]; they never abort the sequence.
#[must_use]
pub fn parse_sequence(input: &str) -> SequenceParse {
    let mut out = SequenceParse::default();
    for token in input.split_whitespace() {
        match Move::parse(token) {
            Ok(mv) => out.moves.push(mv),
            Err(err) => {
                log::warn!("skipping move token: {err}");
                out.skipped.push(token.to_string());
            }
        }
    }
    out
}

/// Render a move sequence as a space-separated string.
#[must_use]
pub fn format_sequence(moves: &[Move]) -> String {
    moves
        .iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// A recorded applied move with its position in the run.
///
/// Used for the playback history and the persisted move journal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// 1-based position within the run.
    pub ordinal: u32,
    /// The move that was applied.
    pub mv: Move,
}

impl MoveRecord {
    /// Create a new record.
    #[must_use]
    pub const fn new(ordinal: u32, mv: Move) -> Self {
        Self { ordinal, mv }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_contains_each_token_once() {
        let mut seen = std::collections::HashSet::new();
        for mv in Move::ALL {
            assert!(seen.insert(mv.to_string()));
        }
        assert_eq!(seen.len(), 18);
    }

    #[test]
    fn test_parse_round_trip() {
        for mv in Move::ALL {
            assert_eq!(Move::parse(&mv.to_string()), Ok(mv));
        }
    }

    #[test]
    fn test_parse_rejects_bad_tokens() {
        for bad in ["X", "U3", "R''", "u", "", "R2'"] {
            assert!(Move::parse(bad).is_err(), "`{bad}` should not parse");
        }
    }

    #[test]
    fn test_inverse() {
        let r = Move::parse("R").unwrap();
        let r_prime = Move::parse("R'").unwrap();
        let r2 = Move::parse("R2").unwrap();

        assert_eq!(r.inverse(), r_prime);
        assert_eq!(r_prime.inverse(), r);
        assert_eq!(r2.inverse(), r2);
    }

    #[test]
    fn test_quarter_turn_arithmetic() {
        assert_eq!(Turn::from_quarter_turns(0), None);
        assert_eq!(Turn::from_quarter_turns(1), Some(Turn::Clockwise));
        assert_eq!(Turn::from_quarter_turns(2), Some(Turn::Half));
        assert_eq!(Turn::from_quarter_turns(3), Some(Turn::CounterClockwise));
        assert_eq!(Turn::from_quarter_turns(4), None);

        for turn in [Turn::Clockwise, Turn::CounterClockwise, Turn::Half] {
            assert_eq!(
                (turn.quarter_turns() + turn.inverse().quarter_turns()) % 4,
                0
            );
        }
    }

    #[test]
    fn test_parse_sequence_skips_bad_tokens() {
        let parsed = parse_sequence("R U' bogus F2  X2");
        assert_eq!(parsed.moves.len(), 3);
        assert_eq!(parsed.skipped, vec!["bogus".to_string(), "X2".to_string()]);
        assert_eq!(format_sequence(&parsed.moves), "R U' F2");
    }

    #[test]
    fn test_description() {
        assert_eq!(
            Move::parse("L'").unwrap().description(),
            "Left face counterclockwise"
        );
        assert_eq!(Move::parse("U2").unwrap().description(), "Up face half turn");
    }

    #[test]
    fn test_serialization() {
        let mv = Move::parse("F'").unwrap();
        let json = serde_json::to_string(&mv).unwrap();
        let back: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(mv, back);

        let record = MoveRecord::new(3, mv);
        let json = serde_json::to_string(&record).unwrap();
        let back: MoveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
