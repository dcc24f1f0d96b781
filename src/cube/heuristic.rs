//! Scoring functions estimating how much work is left on a cube.

use super::{Face, StickerCube};

/// An estimate of the remaining work on a cube. Lower is closer to done.
pub trait Heuristic {
    /// Score the given cube.
    fn estimate(&self, cube: &StickerCube) -> u64;
}

/// Guides the solver towards making any single face uniform. See [`closest_face_estimate`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ClosestFace;

impl Heuristic for ClosestFace {
    fn estimate(&self, cube: &StickerCube) -> u64 {
        closest_face_estimate(cube)
    }
}

/// Rough count of moves left to match every sticker to its center. See
/// [`center_mismatch_estimate`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CenterMismatch;

impl Heuristic for CenterMismatch {
    fn estimate(&self, cube: &StickerCube) -> u64 {
        center_mismatch_estimate(cube)
    }
}

/// The largest number of stickers of a single color on the given face.
pub fn majority_count(cube: &StickerCube, face: Face) -> usize {
    let mut counts = [0; 6];
    for &c in cube.face(face) {
        counts[c as usize] += 1;
    }
    counts.into_iter().max().unwrap_or(0)
}

/// The face closest to uniform along with its majority count. Ties go to the face that comes
/// first in `Face::ARRAY`.
pub fn closest_face(cube: &StickerCube) -> (Face, usize) {
    Face::ARRAY
        .into_iter()
        .map(|face| (face, majority_count(cube, face)))
        .fold((Face::U, 0), |best, cur| if cur.1 > best.1 { cur } else { best })
}

/// Stickers left to repaint on the closest face: `remaining / 3 + remaining % 3`, as if each
/// move could fix a row of three.
///
/// Always in `0..=3`, and 0 exactly when some face is uniform. This is neither admissible nor
/// consistent, it only ranks the states one move away from each other.
pub fn closest_face_estimate(cube: &StickerCube) -> u64 {
    let (_, majority) = closest_face(cube);
    let remaining = (9 - majority) as u64;
    remaining / 3 + remaining % 3
}

/// The number of non-center stickers that differ from their face's center, summed over all faces
/// and divided by 12 (about how many stickers one quarter turn moves between faces).
pub fn center_mismatch_estimate(cube: &StickerCube) -> u64 {
    let mismatched: usize = cube
        .faces
        .iter()
        .map(|face| {
            face.iter()
                .enumerate()
                .filter(|&(i, &c)| i != 4 && c != face[4])
                .count()
        })
        .sum();
    mismatched as u64 / 12
}
