// Copyright 2025 the Panoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// One of the six cube faces.
///
/// The discriminant order is the storage order of faces in a cube atlas and
/// is shared by the builder and the projector; reordering it breaks every
/// atlas produced before the change.
///
/// Face names follow the atlas bands rather than the sky: [`Face::Bottom`]
/// samples the top rows of the panorama and [`Face::Top`] the bottom rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Face {
    /// Looks toward longitude 0.
    Front = 0,
    /// Opposite [`Face::Front`].
    Back = 1,
    /// Stored in the lower band of the cross layout.
    Top = 2,
    /// Stored in the upper band of the cross layout.
    Bottom = 3,
    /// A quarter turn toward increasing longitude.
    Right = 4,
    /// A quarter turn toward decreasing longitude.
    Left = 5,
}

impl Face {
    /// All faces in storage order.
    pub const ALL: [Self; 6] = [
        Self::Front,
        Self::Back,
        Self::Top,
        Self::Bottom,
        Self::Right,
        Self::Left,
    ];

    /// Position of this face in the atlas storage order.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`Face::index`].
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Front),
            1 => Some(Self::Back),
            2 => Some(Self::Top),
            3 => Some(Self::Bottom),
            4 => Some(Self::Right),
            5 => Some(Self::Left),
            _ => None,
        }
    }

    /// Tile `(column, row)` of this face in the 4×3 cross layout.
    ///
    /// ```text
    ///        col 0  col 1  col 2   col 3
    /// row 0                BOTTOM
    /// row 1  BACK   LEFT   FRONT   RIGHT
    /// row 2                TOP
    /// ```
    #[must_use]
    pub const fn cross_tile(self) -> (u32, u32) {
        match self {
            Self::Front => (2, 1),
            Self::Back => (0, 1),
            Self::Top => (2, 2),
            Self::Bottom => (2, 0),
            Self::Right => (3, 1),
            Self::Left => (1, 1),
        }
    }

    /// The face occupying the middle row of a cross-layout tile column.
    ///
    /// Columns past 3 are treated as column 3.
    #[must_use]
    pub const fn for_cross_column(column: u32) -> Self {
        match column {
            0 => Self::Back,
            1 => Self::Left,
            2 => Self::Front,
            _ => Self::Right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Face;

    #[test]
    fn index_round_trips() {
        for (i, face) in Face::ALL.iter().enumerate() {
            assert_eq!(face.index(), i);
            assert_eq!(Face::from_index(i), Some(*face));
        }
        assert_eq!(Face::from_index(6), None);
    }

    #[test]
    fn cross_tiles_are_distinct() {
        for a in Face::ALL {
            for b in Face::ALL {
                if a != b {
                    assert_ne!(a.cross_tile(), b.cross_tile(), "{a:?} and {b:?} overlap");
                }
            }
        }
    }

    #[test]
    fn middle_row_matches_column_lookup() {
        for column in 0..4 {
            let face = Face::for_cross_column(column);
            assert_eq!(face.cross_tile(), (column, 1));
        }
    }
}
