//! A sticker model of a 3x3x3 cube with a one move lookahead solver that nudges a random sticker
//! layout towards having a single uniform face.

#![deny(missing_docs)]

pub mod cube;
pub mod error;
pub mod moves;
