//! The permutation of the 54 stickers performed by each move.
//!
//! A sticker is addressed by its flat index `face * 9 + cell`. A permutation `p` moves the sticker
//! at `p.source(i)` into position `i`.

use super::Face;
use super::moves::{FaceTurn, Htm, MoveGenerator, Turn};
use crate::error::PermutationTableError;

/// Number of stickers on the cube.
pub const STICKERS: usize = 54;

/// A permutation of the stickers, stored as the source index of each position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Permutation([u8; STICKERS]);

impl Permutation {
    /// The permutation that moves nothing.
    pub const IDENTITY: Permutation = {
        let mut p = [0; STICKERS];
        let mut i = 0;
        while i < STICKERS {
            p[i] = i as u8;
            i += 1;
        }
        Permutation(p)
    };

    /// The index whose sticker ends up at position `i`.
    pub fn source(&self, i: usize) -> usize {
        self.0[i] as usize
    }

    /// The permutation performing `self` first and then `other`.
    pub const fn then(&self, other: &Permutation) -> Permutation {
        let mut p = [0; STICKERS];
        let mut i = 0;
        while i < STICKERS {
            p[i] = self.0[other.0[i] as usize];
            i += 1;
        }
        Permutation(p)
    }

    /// The permutation undoing this one.
    pub const fn inverse(&self) -> Permutation {
        let mut p = [0; STICKERS];
        let mut i = 0;
        while i < STICKERS {
            p[self.0[i] as usize] = i as u8;
            i += 1;
        }
        Permutation(p)
    }

    /// `self` performed `n` times in a row.
    pub fn pow(&self, n: usize) -> Permutation {
        (0..n).fold(Permutation::IDENTITY, |acc, _| acc.then(self))
    }

    /// Whether every position receives a sticker from a distinct source.
    pub fn is_bijection(&self) -> bool {
        let mut seen = [false; STICKERS];
        self.0.iter().all(|&s| {
            let s = s as usize;
            s < STICKERS && !std::mem::replace(&mut seen[s], true)
        })
    }
}

/// Three cells of one face that travel together around a turning face.
#[derive(Debug, Clone, Copy)]
struct Strip {
    face: Face,
    cells: [u8; 3],
}

const fn strip(face: Face, cells: [u8; 3]) -> Strip {
    Strip { face, cells }
}

/// `new[k] = old[ROTATE_CLOCKWISE[k]]` on the turning face.
const ROTATE_CLOCKWISE: [u8; 9] = [6, 3, 0, 7, 4, 1, 8, 5, 2];

/// The strips cycled by the clockwise quarter turn of each face, indexed by `Face`. The strip in
/// slot `s` moves into slot `s + 1` (wrapping), cell `j` onto cell `j`.
const STRIP_CYCLES: [[Strip; 4]; 6] = [
    // U
    [
        strip(Face::F, [0, 1, 2]),
        strip(Face::R, [0, 1, 2]),
        strip(Face::B, [0, 1, 2]),
        strip(Face::L, [0, 1, 2]),
    ],
    // D
    [
        strip(Face::F, [6, 7, 8]),
        strip(Face::L, [6, 7, 8]),
        strip(Face::B, [6, 7, 8]),
        strip(Face::R, [6, 7, 8]),
    ],
    // L
    [
        strip(Face::U, [0, 3, 6]),
        strip(Face::B, [8, 5, 2]),
        strip(Face::D, [0, 3, 6]),
        strip(Face::F, [0, 3, 6]),
    ],
    // R
    [
        strip(Face::U, [2, 5, 8]),
        strip(Face::F, [2, 5, 8]),
        strip(Face::D, [2, 5, 8]),
        strip(Face::B, [6, 3, 0]),
    ],
    // F
    [
        strip(Face::U, [6, 7, 8]),
        strip(Face::L, [8, 5, 2]),
        strip(Face::D, [2, 1, 0]),
        strip(Face::R, [0, 3, 6]),
    ],
    // B
    [
        strip(Face::U, [0, 1, 2]),
        strip(Face::R, [2, 5, 8]),
        strip(Face::D, [8, 7, 6]),
        strip(Face::L, [6, 3, 0]),
    ],
];

const fn clockwise(face: Face) -> Permutation {
    let mut p = Permutation::IDENTITY.0;
    let base = face as usize * 9;

    let mut k = 0;
    while k < 9 {
        p[base + k] = (base + ROTATE_CLOCKWISE[k] as usize) as u8;
        k += 1;
    }

    let cycle = STRIP_CYCLES[face as usize];
    let mut s = 0;
    while s < 4 {
        let from = cycle[s];
        let to = cycle[(s + 1) % 4];
        let mut j = 0;
        while j < 3 {
            let dst = to.face as usize * 9 + to.cells[j] as usize;
            let src = from.face as usize * 9 + from.cells[j] as usize;
            p[dst] = src as u8;
            j += 1;
        }
        s += 1;
    }

    Permutation(p)
}

// Counter-clockwise is the inverse of clockwise, half is clockwise twice.
const fn build_table() -> [Permutation; 18] {
    let mut table = [Permutation::IDENTITY; 18];
    let mut f = 0;
    while f < 6 {
        let cw = clockwise(Face::ARRAY[f]);
        table[f * 3] = cw;
        table[f * 3 + 1] = cw.inverse();
        table[f * 3 + 2] = cw.then(&cw);
        f += 1;
    }
    table
}

/// The permutation of every move, indexed like [`Htm::MOVE_LIST`].
pub static MOVE_TABLE: [Permutation; 18] = build_table();

/// Look up the permutation a move performs.
pub fn move_permutation(mv: FaceTurn) -> &'static Permutation {
    &MOVE_TABLE[usize::from(mv)]
}

/// Run the group checks on the built-in move table. Meant to be called once at startup.
pub fn verify_move_table() -> Result<(), PermutationTableError> {
    verify(&MOVE_TABLE)
}

/// Check that a move table, indexed like [`Htm::MOVE_LIST`], is a consistent set of face turns:
/// every entry is a bijection, quarter turns have order 4, half turns have order 2 and equal two
/// clockwise quarter turns, and each clockwise turn is undone by its counter-clockwise turn.
pub fn verify(table: &[Permutation; 18]) -> Result<(), PermutationTableError> {
    for &mv in Htm::MOVE_LIST {
        let p = &table[usize::from(mv)];
        if !p.is_bijection() {
            return Err(PermutationTableError::NotBijective(mv));
        }

        let expected = if mv.is_quarter() { 4 } else { 2 };
        let early = (1..expected).any(|k| p.pow(k) == Permutation::IDENTITY);
        if early || p.pow(expected) != Permutation::IDENTITY {
            return Err(PermutationTableError::WrongOrder { mv, expected });
        }
    }

    for face in Face::ARRAY {
        let of = |turn| FaceTurn { face, turn };
        let cw = &table[usize::from(of(Turn::Clockwise))];
        let ccw = &table[usize::from(of(Turn::CounterClockwise))];
        let half = &table[usize::from(of(Turn::Half))];

        if cw.then(ccw) != Permutation::IDENTITY {
            return Err(PermutationTableError::NotInverse(of(Turn::Clockwise)));
        }
        if cw.then(cw) != *half {
            return Err(PermutationTableError::HalfTurnMismatch(of(Turn::Half)));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::{Color, StickerCube};
    use crate::mv;
    use rand::{SeedableRng, rngs::StdRng};

    fn idx(face: Face, cell: usize) -> usize {
        face as usize * 9 + cell
    }

    /// Each entry is `(move, [(face, cells); 4])` where the strip on each face is carried onto the
    /// next one in the list, written out independently of `STRIP_CYCLES`.
    fn expected_cycles() -> Vec<(FaceTurn, [(Face, [usize; 3]); 4])> {
        use Face::*;
        vec![
            (mv!(U, Clockwise), [(F, [0, 1, 2]), (R, [0, 1, 2]), (B, [0, 1, 2]), (L, [0, 1, 2])]),
            (mv!(U, CounterClockwise), [(F, [0, 1, 2]), (L, [0, 1, 2]), (B, [0, 1, 2]), (R, [0, 1, 2])]),
            (mv!(D, Clockwise), [(F, [6, 7, 8]), (L, [6, 7, 8]), (B, [6, 7, 8]), (R, [6, 7, 8])]),
            (mv!(D, CounterClockwise), [(F, [6, 7, 8]), (R, [6, 7, 8]), (B, [6, 7, 8]), (L, [6, 7, 8])]),
            (mv!(F, Clockwise), [(U, [6, 7, 8]), (L, [8, 5, 2]), (D, [2, 1, 0]), (R, [0, 3, 6])]),
            (mv!(F, CounterClockwise), [(U, [6, 7, 8]), (R, [0, 3, 6]), (D, [2, 1, 0]), (L, [8, 5, 2])]),
            (mv!(B, Clockwise), [(U, [0, 1, 2]), (R, [2, 5, 8]), (D, [8, 7, 6]), (L, [6, 3, 0])]),
            (mv!(B, CounterClockwise), [(U, [0, 1, 2]), (L, [6, 3, 0]), (D, [8, 7, 6]), (R, [2, 5, 8])]),
            (mv!(L, Clockwise), [(U, [0, 3, 6]), (B, [8, 5, 2]), (D, [0, 3, 6]), (F, [0, 3, 6])]),
            (mv!(L, CounterClockwise), [(U, [0, 3, 6]), (F, [0, 3, 6]), (D, [0, 3, 6]), (B, [8, 5, 2])]),
            (mv!(R, Clockwise), [(U, [2, 5, 8]), (F, [2, 5, 8]), (D, [2, 5, 8]), (B, [6, 3, 0])]),
            (mv!(R, CounterClockwise), [(U, [2, 5, 8]), (B, [6, 3, 0]), (D, [2, 5, 8]), (F, [2, 5, 8])]),
        ]
    }

    #[test]
    fn table_verifies() {
        assert_eq!(verify_move_table(), Ok(()));
    }

    #[test]
    fn strips_move_exactly() {
        for (mv, cycle) in expected_cycles() {
            let p = move_permutation(mv);
            for s in 0..4 {
                let (from_face, from_cells) = cycle[s];
                let (to_face, to_cells) = cycle[(s + 1) % 4];
                for j in 0..3 {
                    assert_eq!(
                        p.source(idx(to_face, to_cells[j])),
                        idx(from_face, from_cells[j]),
                        "{mv:?} strip {s} cell {j}"
                    );
                }
            }
        }
    }

    #[test]
    fn faces_rotate_exactly() {
        const CW: [usize; 9] = [6, 3, 0, 7, 4, 1, 8, 5, 2];
        const CCW: [usize; 9] = [2, 5, 8, 1, 4, 7, 0, 3, 6];
        for face in Face::ARRAY {
            let cw = move_permutation(FaceTurn { face, turn: Turn::Clockwise });
            let ccw = move_permutation(FaceTurn { face, turn: Turn::CounterClockwise });
            for k in 0..9 {
                assert_eq!(cw.source(idx(face, k)), idx(face, CW[k]));
                assert_eq!(ccw.source(idx(face, k)), idx(face, CCW[k]));
            }
        }
    }

    #[test]
    fn untouched_stickers_stay() {
        // A quarter turn moves its 9 face stickers (minus the center) and 12 strip stickers.
        for &mv in Htm::MOVE_LIST.iter().filter(|m| m.is_quarter()) {
            let p = move_permutation(mv);
            let moved = (0..STICKERS).filter(|&i| p.source(i) != i).count();
            assert_eq!(moved, 20, "{mv:?}");
        }
    }

    #[test]
    fn solved_u_turn() {
        let cube = StickerCube::SOLVED.make_move(mv!(U, Clockwise));
        assert_eq!(cube.face(Face::U), &[Color::White; 9]);
        assert_eq!(cube.face(Face::D), &[Color::Yellow; 9]);
        assert_eq!(cube.face(Face::R)[..3], [Color::Blue; 3]);
        assert_eq!(cube.face(Face::B)[..3], [Color::Orange; 3]);
        assert_eq!(cube.face(Face::L)[..3], [Color::Green; 3]);
        assert_eq!(cube.face(Face::F)[..3], [Color::Red; 3]);
        assert_eq!(cube.face(Face::F)[3..], [Color::Blue; 6]);
    }

    #[test]
    fn four_u_turns_restore_the_grid() {
        let start = StickerCube::random(&mut StdRng::seed_from_u64(42));
        let mut cube = start.clone();
        for _ in 0..4 {
            cube = cube.make_move(mv!(U, Clockwise));
        }
        assert_eq!(cube.faces, start.faces);
    }

    #[test]
    fn broken_table_is_rejected() {
        let mut table = MOVE_TABLE;
        table[usize::from(mv!(R, Half))] = *move_permutation(mv!(R, Clockwise));
        assert_eq!(
            verify(&table),
            Err(PermutationTableError::WrongOrder {
                mv: mv!(R, Half),
                expected: 2
            })
        );

        let mut table = MOVE_TABLE;
        table[usize::from(mv!(F, CounterClockwise))] = *move_permutation(mv!(B, CounterClockwise));
        assert_eq!(
            verify(&table),
            Err(PermutationTableError::NotInverse(mv!(F, Clockwise)))
        );

        let mut table = MOVE_TABLE;
        let mut raw = MOVE_TABLE[0].0;
        raw[0] = raw[1];
        table[0] = Permutation(raw);
        assert_eq!(
            verify(&table),
            Err(PermutationTableError::NotBijective(mv!(U, Clockwise)))
        );
    }

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn closure_laws(seed in any::<u64>(), mv in any::<FaceTurn>()) {
            let cube = StickerCube::random(&mut StdRng::seed_from_u64(seed));
            let order = if mv.is_quarter() { 4 } else { 2 };
            let turned = (0..order).fold(cube.clone(), |c, _| c.make_move(mv));
            prop_assert_eq!(turned, cube);
        }

        #[test]
        fn inverse_pairing(seed in any::<u64>(), face in any::<Face>()) {
            let cube = StickerCube::random(&mut StdRng::seed_from_u64(seed));
            let back = cube
                .clone()
                .make_move(FaceTurn { face, turn: Turn::Clockwise })
                .make_move(FaceTurn { face, turn: Turn::CounterClockwise });
            prop_assert_eq!(back, cube);
        }

        #[test]
        fn half_is_two_quarters(seed in any::<u64>(), face in any::<Face>()) {
            let cube = StickerCube::random(&mut StdRng::seed_from_u64(seed));
            let cw = FaceTurn { face, turn: Turn::Clockwise };
            prop_assert_eq!(
                cube.clone().make_move(FaceTurn { face, turn: Turn::Half }),
                cube.make_move(cw).make_move(cw)
            );
        }
    }
}
