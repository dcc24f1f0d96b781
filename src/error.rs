//! This module defines general error types used throughout the crate.

use crate::cube::{Color, moves::FaceTurn};

use thiserror::Error;

/// Error type for converting integers to (C like) enums using TryFrom
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TryFromIntToEnumError {
    /// attempted to convert integer into enum value, but integer was out of bounds
    #[error("attempted to convert integer into enum value, but integer was out of bounds")]
    OutOfBounds,
}

/// Error for when a move (or a sequence of moves) could not be read from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseMoveError {
    /// The token did not start with a face letter.
    #[error("unknown face in move `{0}`")]
    UnknownFace(String),
    /// The face letter was followed by something other than nothing, `'` or `2`.
    #[error("unknown turn suffix in move `{0}`")]
    UnknownSuffix(String),
}

/// Error for when a cube could not be read from its 54 letter text form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCubeError {
    /// There were not exactly 54 stickers.
    #[error("expected 54 stickers, found {0}")]
    WrongLength(usize),
    /// A character was not one of the color letters.
    #[error("`{0}` is not a sticker color")]
    UnknownColor(char),
    /// Some color did not appear exactly 9 times.
    #[error("color {color} appears {count} times, expected 9")]
    Unbalanced {
        /// The offending color.
        color: Color,
        /// How often it appeared.
        count: usize,
    },
}

/// Error raised when the compiled move permutations fail the group checks run at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PermutationTableError {
    /// Two stickers were sent to the same cell.
    #[error("permutation for {0} is not a bijection")]
    NotBijective(FaceTurn),
    /// The move did not return to the identity after the expected number of applications.
    #[error("{mv} does not have order {expected}")]
    WrongOrder {
        /// The move under test.
        mv: FaceTurn,
        /// The order it should have had.
        expected: usize,
    },
    /// The half turn was not two clockwise quarter turns.
    #[error("{0} is not two clockwise quarter turns")]
    HalfTurnMismatch(FaceTurn),
    /// Clockwise followed by counter-clockwise was not the identity.
    #[error("{0} is not undone by its inverse")]
    NotInverse(FaceTurn),
}
