//! The 18 face turns of the cube, their notation and their costs.

use super::{Face, StickerCube};
use crate::error::{ParseMoveError, TryFromIntToEnumError};
use crate::moves::{Cancellation, MoveSequence};

use std::fmt;
use std::str::FromStr;

#[cfg(test)]
use proptest_derive::Arbitrary;

/// How far a face is turned. The declaration order matches the order of the three variants of
/// each face in [`Htm::MOVE_LIST`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Turn {
    /// A clockwise quarter turn, looking at the face.
    Clockwise,
    /// A counter-clockwise quarter turn.
    CounterClockwise,
    /// A half turn.
    Half,
}

impl Turn {
    /// The number of clockwise quarter turns this is equivalent to.
    pub fn quarter_turns(self) -> u8 {
        match self {
            Turn::Clockwise => 1,
            Turn::Half => 2,
            Turn::CounterClockwise => 3,
        }
    }

    fn from_quarter_turns(n: u8) -> Option<Turn> {
        match n % 4 {
            1 => Some(Turn::Clockwise),
            2 => Some(Turn::Half),
            3 => Some(Turn::CounterClockwise),
            _ => None,
        }
    }
}

/// A single move on the cube: a face together with how far it is turned.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[allow(missing_docs)]
pub struct FaceTurn {
    pub face: Face,
    pub turn: Turn,
}

impl FaceTurn {
    /// The path cost of making this move: 1 for a quarter turn, 2 for a half turn.
    pub fn cost(self) -> u64 {
        match self.turn {
            Turn::Clockwise | Turn::CounterClockwise => 1,
            Turn::Half => 2,
        }
    }

    /// Whether this is a quarter turn in either direction.
    pub fn is_quarter(self) -> bool {
        self.turn != Turn::Half
    }
}

impl crate::moves::Move for FaceTurn {
    fn inverse(self) -> Self {
        let turn = match self.turn {
            Turn::Clockwise => Turn::CounterClockwise,
            Turn::CounterClockwise => Turn::Clockwise,
            Turn::Half => Turn::Half,
        };
        FaceTurn { turn, ..self }
    }

    fn commutes_with(&self, b: &Self) -> bool {
        b.face == self.face || b.face == self.face.opposite()
    }

    fn cancel(self, b: Self) -> Cancellation<Self> {
        if self.face == b.face {
            match Turn::from_quarter_turns(self.turn.quarter_turns() + b.turn.quarter_turns()) {
                None => Cancellation::NoMove,
                Some(turn) => Cancellation::OneMove(FaceTurn {
                    face: self.face,
                    turn,
                }),
            }
        } else {
            Cancellation::TwoMove(self, b)
        }
    }
}

impl fmt::Display for FaceTurn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.turn {
            Turn::Clockwise => write!(f, "{}", self.face),
            Turn::CounterClockwise => write!(f, "{}'", self.face),
            Turn::Half => write!(f, "{}2", self.face),
        }
    }
}

// Debug reads better in notation than as a struct.
impl fmt::Debug for FaceTurn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for FaceTurn {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let face = match chars.next() {
            Some('U') => Face::U,
            Some('D') => Face::D,
            Some('L') => Face::L,
            Some('R') => Face::R,
            Some('F') => Face::F,
            Some('B') => Face::B,
            _ => return Err(ParseMoveError::UnknownFace(s.to_owned())),
        };
        let turn = match chars.as_str() {
            "" => Turn::Clockwise,
            "'" => Turn::CounterClockwise,
            "2" => Turn::Half,
            _ => return Err(ParseMoveError::UnknownSuffix(s.to_owned())),
        };
        Ok(FaceTurn { face, turn })
    }
}

/// The index of a move in [`Htm::MOVE_LIST`], i.e. `face * 3 + turn`.
impl From<FaceTurn> for usize {
    fn from(mv: FaceTurn) -> usize {
        mv.face as usize * 3 + mv.turn as usize
    }
}

impl TryFrom<u8> for FaceTurn {
    type Error = TryFromIntToEnumError;

    fn try_from(n: u8) -> Result<FaceTurn, TryFromIntToEnumError> {
        Htm::MOVE_LIST
            .get(n as usize)
            .copied()
            .ok_or(TryFromIntToEnumError::OutOfBounds)
    }
}

/// A trait to classify a type as a move generator, i.e. a fixed, ordered catalog of moves.
pub trait MoveGenerator {
    /// The amount of moves that are available in the moveset.
    const SIZE: usize;
    /// A list of all valid moves. The index of a move in this list is the same index used when
    /// accessing the move table.
    const MOVE_LIST: &'static [FaceTurn];
}

/// Create a move by specifying a face and a turn. Note that you do not need to specify for
/// example `Face::R`, you only need to specify `R`.
#[macro_export]
macro_rules! mv {
    ($face:ident, $turn:ident) => {
        $crate::cube::moves::FaceTurn {
            face: $crate::cube::Face::$face,
            turn: $crate::cube::moves::Turn::$turn,
        }
    };
}

/// Type for Half Turn Metric: every quarter and half turn of every face.
pub struct Htm;

impl MoveGenerator for Htm {
    const SIZE: usize = 18;
    const MOVE_LIST: &'static [FaceTurn] = &[
        mv!(U, Clockwise),
        mv!(U, CounterClockwise),
        mv!(U, Half),
        mv!(D, Clockwise),
        mv!(D, CounterClockwise),
        mv!(D, Half),
        mv!(L, Clockwise),
        mv!(L, CounterClockwise),
        mv!(L, Half),
        mv!(R, Clockwise),
        mv!(R, CounterClockwise),
        mv!(R, Half),
        mv!(F, Clockwise),
        mv!(F, CounterClockwise),
        mv!(F, Half),
        mv!(B, Clockwise),
        mv!(B, CounterClockwise),
        mv!(B, Half),
    ];
}

impl StickerCube {
    /// Apply an algorithm to a cube
    pub fn make_sequence(self, mvs: &MoveSequence<FaceTurn>) -> StickerCube {
        self.make_moves(mvs.iter())
    }
}
