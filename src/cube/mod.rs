//! Implementation of a 6 face, 9 sticker per face cube and the tools to score and turn it.

pub mod greedy_solver;
pub mod heuristic;
pub mod moves;
pub mod permutation;

use crate::error::{ParseCubeError, TryFromIntToEnumError};
use moves::FaceTurn;
use permutation::{STICKERS, move_permutation};

use rand::Rng;
use std::fmt;
use std::str::FromStr;

#[cfg(test)]
use proptest_derive::Arbitrary;

/// The color of a single sticker. Only identity matters, the names are for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[allow(missing_docs)]
pub enum Color {
    White,
    Yellow,
    Red,
    Orange,
    Blue,
    Green,
}

impl Color {
    /// Every color, in declaration order.
    pub const ARRAY: [Color; 6] = [
        Color::White,
        Color::Yellow,
        Color::Red,
        Color::Orange,
        Color::Blue,
        Color::Green,
    ];

    /// The RGB triple a renderer should paint this sticker with.
    pub fn rgb(self) -> [f32; 3] {
        match self {
            Color::White => [1.0, 1.0, 1.0],
            Color::Yellow => [1.0, 1.0, 0.0],
            Color::Red => [1.0, 0.0, 0.0],
            Color::Orange => [1.0, 0.5, 0.0],
            Color::Blue => [0.0, 0.0, 1.0],
            Color::Green => [0.0, 1.0, 0.0],
        }
    }

    fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::Blue => 'B',
            Color::Green => 'G',
        }
    }

    fn from_letter(c: char) -> Option<Color> {
        Color::ARRAY
            .into_iter()
            .find(|color| color.letter() == c.to_ascii_uppercase())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl TryFrom<u8> for Color {
    type Error = TryFromIntToEnumError;

    fn try_from(n: u8) -> Result<Color, TryFromIntToEnumError> {
        Color::ARRAY
            .get(n as usize)
            .copied()
            .ok_or(TryFromIntToEnumError::OutOfBounds)
    }
}

/// A face of the cube. The declaration order is the enumeration order used for tie-breaking in
/// the heuristics and for the layout of [`StickerCube`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[allow(missing_docs)]
pub enum Face {
    U,
    D,
    L,
    R,
    F,
    B,
}

impl Face {
    /// Every face, in declaration order.
    pub const ARRAY: [Face; 6] = [Face::U, Face::D, Face::L, Face::R, Face::F, Face::B];

    /// The face opposite to the given one.
    pub fn opposite(self) -> Face {
        match self {
            Face::U => Face::D,
            Face::D => Face::U,
            Face::L => Face::R,
            Face::R => Face::L,
            Face::F => Face::B,
            Face::B => Face::F,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl TryFrom<u8> for Face {
    type Error = TryFromIntToEnumError;

    fn try_from(n: u8) -> Result<Face, TryFromIntToEnumError> {
        Face::ARRAY
            .get(n as usize)
            .copied()
            .ok_or(TryFromIntToEnumError::OutOfBounds)
    }
}

/// A cube stored as its 54 stickers. Face `f` occupies `faces[f as usize]`, and the 9 stickers of
/// a face are in row-major order with the center at index 4.
///
/// Nothing beyond the grid shape is enforced, so a `StickerCube` need not be solvable or even
/// color balanced.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StickerCube {
    /// The sticker grid.
    pub faces: [[Color; 9]; 6],
}

impl StickerCube {
    /// The cube with each face painted in the color of the same index.
    pub const SOLVED: StickerCube = StickerCube {
        faces: [
            [Color::White; 9],
            [Color::Yellow; 9],
            [Color::Red; 9],
            [Color::Orange; 9],
            [Color::Blue; 9],
            [Color::Green; 9],
        ],
    };

    /// Paint a random cube holding exactly 9 stickers of each color.
    ///
    /// Colors are drawn per sticker and redrawn while the drawn color is already used up, so this
    /// terminates with probability 1. The result is color balanced but usually not solvable.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> StickerCube {
        let mut counts = [0u8; 6];
        let mut faces = [[Color::White; 9]; 6];

        for sticker in faces.iter_mut().flatten() {
            let mut c = rng.gen_range(0..6);
            while counts[c] == 9 {
                c = rng.gen_range(0..6);
            }
            counts[c] += 1;
            *sticker = Color::ARRAY[c];
        }

        StickerCube { faces }
    }

    /// The stickers of one face.
    pub fn face(&self, face: Face) -> &[Color; 9] {
        &self.faces[face as usize]
    }

    /// The sticker at a flat index `face * 9 + cell`.
    pub fn sticker(&self, index: usize) -> Color {
        self.faces[index / 9][index % 9]
    }

    /// How many stickers of each color the cube holds, indexed by `Color as usize`.
    pub fn color_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for &c in self.faces.iter().flatten() {
            counts[c as usize] += 1;
        }
        counts
    }

    /// Apply a move to a cube.
    pub fn make_move(self, mv: FaceTurn) -> StickerCube {
        let perm = move_permutation(mv);
        let mut faces = self.faces;
        for (i, sticker) in faces.iter_mut().flatten().enumerate() {
            *sticker = self.sticker(perm.source(i));
        }
        StickerCube { faces }
    }

    /// Apply a sequence of moves to a cube
    pub fn make_moves<'a>(self, mvs: impl IntoIterator<Item = &'a FaceTurn>) -> StickerCube {
        mvs.into_iter().fold(self, |c, &m| c.make_move(m))
    }
}

impl From<[[Color; 9]; 6]> for StickerCube {
    fn from(faces: [[Color; 9]; 6]) -> Self {
        StickerCube { faces }
    }
}

impl FromStr for StickerCube {
    type Err = ParseCubeError;

    /// Read 54 color letters in face order U, D, L, R, F, B. Whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let letters: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if letters.len() != STICKERS {
            return Err(ParseCubeError::WrongLength(letters.len()));
        }

        let mut faces = [[Color::White; 9]; 6];
        for (sticker, &c) in faces.iter_mut().flatten().zip(&letters) {
            *sticker = Color::from_letter(c).ok_or(ParseCubeError::UnknownColor(c))?;
        }

        let cube = StickerCube { faces };
        let counts = cube.color_counts();
        if let Some((&color, &count)) = Color::ARRAY
            .iter()
            .zip(&counts)
            .find(|(_, count)| **count != 9)
        {
            return Err(ParseCubeError::Unbalanced { color, count });
        }

        Ok(cube)
    }
}

/// Prints the cube as an unfolded net:
///
/// ```text
///     U
///   L F R B
///     D
/// ```
impl fmt::Display for StickerCube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = |face: Face, r: usize| -> String {
            self.face(face)[r * 3..r * 3 + 3]
                .iter()
                .map(|c| c.letter())
                .collect()
        };

        for r in 0..3 {
            writeln!(f, "    {}", row(Face::U, r))?;
        }
        for r in 0..3 {
            writeln!(
                f,
                "{} {} {} {}",
                row(Face::L, r),
                row(Face::F, r),
                row(Face::R, r),
                row(Face::B, r)
            )?;
        }
        for r in 0..3 {
            writeln!(f, "    {}", row(Face::D, r))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn random_cubes_are_balanced() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..1000 {
            let cube = StickerCube::random(&mut rng);
            assert_eq!(cube.color_counts(), [9; 6]);
        }
    }

    #[test]
    fn parse_round_trip() {
        let text = "WWWWWWWWW YYYYYYYYY RRRRRRRRR OOOOOOOOO BBBBBBBBB GGGGGGGGG";
        assert_eq!(text.parse::<StickerCube>(), Ok(StickerCube::SOLVED));

        let mut rng = StdRng::seed_from_u64(7);
        let cube = StickerCube::random(&mut rng);
        let flat: String = cube.faces.iter().flatten().map(|c| c.to_string()).collect();
        assert_eq!(flat.parse::<StickerCube>(), Ok(cube));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "WWW".parse::<StickerCube>(),
            Err(ParseCubeError::WrongLength(3))
        );
        assert_eq!(
            format!("X{}", "W".repeat(53)).parse::<StickerCube>(),
            Err(ParseCubeError::UnknownColor('X'))
        );
        assert_eq!(
            "W".repeat(54).parse::<StickerCube>(),
            Err(ParseCubeError::Unbalanced {
                color: Color::White,
                count: 54
            })
        );
        assert_eq!(
            ParseCubeError::WrongLength(3).to_string(),
            "expected 54 stickers, found 3"
        );
    }

    #[test]
    fn enum_conversions() {
        assert_eq!(Face::try_from(4), Ok(Face::F));
        assert_eq!(Color::try_from(5), Ok(Color::Green));
        assert_eq!(Face::try_from(6), Err(TryFromIntToEnumError::OutOfBounds));
        assert_eq!(Color::try_from(200), Err(TryFromIntToEnumError::OutOfBounds));
        for face in Face::ARRAY {
            assert_eq!(face.opposite().opposite(), face);
            assert_ne!(face.opposite(), face);
        }
    }

    #[test]
    fn renderer_colors() {
        assert_eq!(Color::Orange.rgb(), [1.0, 0.5, 0.0]);
        assert_eq!(Color::Blue.rgb(), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn display_net() {
        let net = StickerCube::SOLVED.to_string();
        let lines: Vec<&str> = net.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "    WWW");
        assert_eq!(lines[3], "RRR BBB OOO GGG");
        assert_eq!(lines[8], "    YYY");
    }

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn counts_survive_any_sequence(
            seed in any::<u64>(),
            mvs in proptest::collection::vec(any::<FaceTurn>(), 0..40),
        ) {
            let cube = StickerCube::random(&mut StdRng::seed_from_u64(seed));
            prop_assert_eq!(cube.make_moves(&mvs).color_counts(), [9; 6]);
        }
    }
}
