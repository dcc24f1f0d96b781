//! A one move lookahead solver scoring each successor by `f = g + h`.
//!
//! Each call to [`GreedySolver::step`] looks at every move in the catalog exactly once and commits
//! to one with the smallest `f`, picking uniformly at random among ties. There is no open or
//! closed set and no memory of earlier states, so the solver may stall in a local minimum or walk
//! in circles forever. It also never decides that it is done.

use super::heuristic::{ClosestFace, Heuristic, center_mismatch_estimate};
use super::{StickerCube, moves::FaceTurn};
use crate::moves::MoveSequence;

use log::{debug, trace};
use rand::Rng;
use std::fmt;

/// The state reached by applying one catalog move to the current cube.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The move leading here.
    pub mv: FaceTurn,
    /// The cube after the move.
    pub cube: StickerCube,
    /// The path cost after the move (`g`).
    pub cost: u64,
    /// `g + h` for this state.
    pub score: u64,
}

/// What a step committed to, for the caller to log or display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    /// The move that was made.
    pub mv: FaceTurn,
    /// [`center_mismatch_estimate`] of the new cube. This never influences the choice of move.
    pub estimate: u64,
    /// The path cost after the move.
    pub cost: u64,
}

impl fmt::Display for StepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Solver chose: {} (h={}, g={})",
            self.mv, self.estimate, self.cost
        )
    }
}

/// The solver's cursor: the current cube and the path cost spent to reach it.
#[derive(Debug, Clone)]
pub struct GreedySolver<H: Heuristic = ClosestFace> {
    cube: StickerCube,
    cost: u64,
    heuristic: H,
    history: MoveSequence<FaceTurn>,
}

impl GreedySolver<ClosestFace> {
    /// Start from the given cube with no cost spent, guided by [`ClosestFace`].
    pub fn new(cube: StickerCube) -> Self {
        Self::with_heuristic(cube, ClosestFace)
    }
}

impl<H: Heuristic> GreedySolver<H> {
    /// Start from the given cube with no cost spent, guided by the given heuristic.
    pub fn with_heuristic(cube: StickerCube, heuristic: H) -> Self {
        GreedySolver {
            cube,
            cost: 0,
            heuristic,
            history: MoveSequence::default(),
        }
    }

    /// The current cube.
    pub fn cube(&self) -> &StickerCube {
        &self.cube
    }

    /// The path cost spent so far.
    pub fn cost(&self) -> u64 {
        self.cost
    }

    /// Every move committed so far, in order.
    pub fn history(&self) -> &MoveSequence<FaceTurn> {
        &self.history
    }

    /// Score the result of each move in `moves` from the current cube, in catalog order.
    pub fn candidates(&self, moves: &[FaceTurn]) -> Vec<Candidate> {
        moves
            .iter()
            .map(|&mv| {
                let cube = self.cube.clone().make_move(mv);
                let cost = self.cost + mv.cost();
                let score = cost + self.heuristic.estimate(&cube);
                trace!("candidate {mv}: g={cost} f={score}");
                Candidate {
                    mv,
                    cube,
                    cost,
                    score,
                }
            })
            .collect()
    }

    /// Advance one ply: score every move in `moves`, commit to one with the smallest `f` (ties
    /// broken uniformly using `rng`) and report the choice.
    ///
    /// # Panics
    ///
    /// If `moves` is empty.
    pub fn step<R: Rng + ?Sized>(&mut self, moves: &[FaceTurn], rng: &mut R) -> StepReport {
        assert!(!moves.is_empty(), "the move catalog must not be empty");

        let mut candidates = self.candidates(moves);
        let ties = best_indices(&candidates);
        debug!(
            "{} of {} candidates tie at f={}",
            ties.len(),
            candidates.len(),
            candidates[ties[0]].score
        );

        let chosen = candidates.swap_remove(ties[rng.gen_range(0..ties.len())]);
        self.cube = chosen.cube;
        self.cost = chosen.cost;
        self.history.push(chosen.mv);

        StepReport {
            mv: chosen.mv,
            estimate: center_mismatch_estimate(&self.cube),
            cost: self.cost,
        }
    }
}

/// Indices of every candidate with the smallest score, in catalog order.
fn best_indices(candidates: &[Candidate]) -> Vec<usize> {
    let mut best = u64::MAX;
    let mut ties = Vec::new();

    for (i, c) in candidates.iter().enumerate() {
        if c.score < best {
            best = c.score;
            ties.clear();
            ties.push(i);
        } else if c.score == best {
            ties.push(i);
        }
    }

    ties
}
