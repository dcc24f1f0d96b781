//! Module for puzzle move generics and related functionality

use std::fmt;
use std::str::FromStr;

/// Enum for representing the cancellation of two moves.
/// See [`cancel`](Move::cancel).
#[derive(Debug, Eq, PartialEq)]
pub enum Cancellation<M: Move> {
    /// The moves cancelled completely.
    ///
    /// e.g. `R R'` cancels completely
    NoMove,
    /// The moves cancelled into one move.
    ///
    /// e.g. `R R` cancels into `R2`
    OneMove(M),
    /// The moves didn't cancel
    ///
    /// e.g. `R U` stays as `R U` when cancelling
    TwoMove(M, M),
}

/// A move, for use in writing expressions or algorithms. It is intended that a term of this trait
/// is a power of a symbol in some group presentation, satisfying laws allowing simplification.
///
/// Commutativity relations are encoded in the `commutes_with` method and order relations are
/// encoded in the `cancel` method. These relations are all that are assumed for
/// `MoveSequence::cancel`.
pub trait Move: Eq + Clone {
    /// Take the inverse of a move. These inverses must satisfy the invertibility conditions of
    /// a group, i.e. that `X X^{-1} = X^{-1} X = e` where `e` is the empty sequence.
    fn inverse(self) -> Self
    where
        Self: Sized;

    /// Returns whether the two moves commute, i.e. can be swapped when adjacent. It is required
    /// that this property is transitive.
    fn commutes_with(&self, b: &Self) -> bool;

    /// Return the cancellation of two moves.
    ///
    /// ```rust
    /// # fn main() {
    /// use cube_nudge::mv;
    /// use cube_nudge::moves::{Cancellation, Move};
    ///
    /// assert!(mv!(R, Clockwise).cancel(mv!(U, CounterClockwise))
    ///     == Cancellation::TwoMove(mv!(R, Clockwise), mv!(U, CounterClockwise)));
    /// assert!(mv!(R, Clockwise).cancel(mv!(R, Clockwise)) == Cancellation::OneMove(mv!(R, Half)));
    /// assert!(mv!(R, Clockwise).cancel(mv!(R, CounterClockwise)) == Cancellation::NoMove);
    /// # }
    /// ```
    fn cancel(self, b: Self) -> Cancellation<Self>
    where
        Self: Sized;
}

/// A sequence of moves (also known as an algorithm) for some specific type of move.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MoveSequence<M: Move>(pub Vec<M>);

impl<M: Move> Default for MoveSequence<M> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<M: Move> MoveSequence<M> {
    /// Invert a sequence of moves.
    ///
    /// If `X` is a sequence of moves and `X^{-1}` is its inverse and `o` is composition, then
    /// `X o X^{-1} = X^{-1} o X = e` where `e` is the empty sequence.
    pub fn inverse(self) -> Self {
        Self(self.0.into_iter().rev().map(|m| m.inverse()).collect())
    }

    /// Cancel a sequence completely, including rearrangement of commutative moves.
    pub fn cancel(mut self) -> Self {
        let mut cancellation: Vec<M> = Vec::new();

        for next_mv in self.0.drain(..) {
            // Walk back over the reduced prefix while we commute with it. A hit is moved to the
            // back and merged, which cannot create new cancellations since the prefix was reduced.
            let mut cancelled = false;

            for i in (0..cancellation.len()).rev() {
                let commutes = next_mv.commutes_with(&cancellation[i]);
                match cancellation[i].clone().cancel(next_mv.clone()) {
                    Cancellation::NoMove => {
                        cancellation.remove(i);
                        cancelled = true;
                    }
                    Cancellation::OneMove(merged) => {
                        cancellation.remove(i);
                        cancellation.push(merged);
                        cancelled = true;
                    }
                    Cancellation::TwoMove(_, _) => {}
                }

                if cancelled || !commutes {
                    break;
                }
            }

            if !cancelled {
                cancellation.push(next_mv);
            }
        }

        Self(cancellation)
    }

    /// Append a move to the end of the sequence.
    pub fn push(&mut self, mv: M) {
        self.0.push(mv);
    }

    /// Concatenate another sequence onto the end of this one.
    pub fn append(mut self, mut other: Self) -> Self {
        self.0.append(&mut other.0);
        self
    }

    /// The number of moves in the sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence has no moves.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the moves in order.
    pub fn iter(&self) -> std::slice::Iter<'_, M> {
        self.0.iter()
    }
}

impl<M: Move + fmt::Display> fmt::Display for MoveSequence<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, mv) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{mv}")?;
        }
        Ok(())
    }
}

impl<M: Move + FromStr> FromStr for MoveSequence<M> {
    type Err = M::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}
