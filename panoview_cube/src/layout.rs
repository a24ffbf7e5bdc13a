// Copyright 2025 the Panoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::face::Face;

/// Bytes per pixel of every buffer handled by this workspace (packed RGB).
pub const BYTES_PER_PIXEL: usize = 3;

/// A texel on one face of a cube atlas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FaceTexel {
    /// Face the texel lies on.
    pub face: Face,
    /// Column within the face, `0..edge`.
    pub x: u32,
    /// Row within the face, `0..edge`.
    pub y: u32,
}

/// Addressing for a face-major cube atlas with square faces of `edge` pixels.
///
/// Storage is face-major in [`Face::ALL`] order, each face row-major, so the
/// byte offset of `(face, x, y)` is `((face * edge + y) * edge + x) * 3`.
///
/// The same faces also have a virtual position in a 4×3 *cross layout*
/// (`4 * edge` wide, `3 * edge` tall, see [`Face::cross_tile`]). The cube
/// geometry is expressed in cross coordinates; the cross image itself is
/// never materialized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AtlasLayout {
    edge: u32,
}

impl AtlasLayout {
    /// Layout for faces of `edge × edge` pixels.
    #[must_use]
    pub const fn new(edge: u32) -> Self {
        Self { edge }
    }

    /// Layout matching a panorama `width` pixels wide (`edge = width / 4`).
    #[must_use]
    pub const fn for_panorama_width(width: u32) -> Self {
        Self { edge: width / 4 }
    }

    /// Face edge length in pixels.
    #[must_use]
    pub const fn edge(&self) -> u32 {
        self.edge
    }

    /// Number of pixels in one face.
    #[must_use]
    pub const fn face_len(&self) -> usize {
        self.edge as usize * self.edge as usize
    }

    /// Total number of bytes of the atlas.
    #[must_use]
    pub const fn byte_len(&self) -> usize {
        6 * self.face_len() * BYTES_PER_PIXEL
    }

    /// Width of the virtual cross layout.
    #[must_use]
    pub const fn cross_width(&self) -> u32 {
        self.edge * 4
    }

    /// Height of the virtual cross layout.
    #[must_use]
    pub const fn cross_height(&self) -> u32 {
        self.edge * 3
    }

    /// Byte offset of the first channel of `(x, y)` on `face`.
    #[inline]
    #[must_use]
    pub const fn texel_offset(&self, face: Face, x: u32, y: u32) -> usize {
        let edge = self.edge as usize;
        (face.index() * self.face_len() + y as usize * edge + x as usize) * BYTES_PER_PIXEL
    }

    /// Byte range of a whole face.
    #[must_use]
    pub const fn face_range(&self, face: Face) -> core::ops::Range<usize> {
        let len = self.face_len() * BYTES_PER_PIXEL;
        let start = face.index() * len;
        start..start + len
    }

    /// Top-left corner of `face` in cross coordinates.
    #[must_use]
    pub const fn cross_origin(&self, face: Face) -> (u32, u32) {
        let (col, row) = face.cross_tile();
        (col * self.edge, row * self.edge)
    }

    /// Converts a face texel to cross coordinates.
    #[inline]
    #[must_use]
    pub const fn face_to_cross(&self, texel: FaceTexel) -> (u32, u32) {
        let (ox, oy) = self.cross_origin(texel.face);
        (ox + texel.x, oy + texel.y)
    }

    /// Resolves a cross coordinate to the face texel it belongs to.
    ///
    /// Returns `None` for the empty tiles of the cross and for coordinates
    /// outside it.
    #[must_use]
    pub fn cross_to_face(&self, cx: u32, cy: u32) -> Option<FaceTexel> {
        if self.edge == 0 || cx >= self.cross_width() || cy >= self.cross_height() {
            return None;
        }
        let (col, row) = (cx / self.edge, cy / self.edge);
        let face = match row {
            0 if col == 2 => Face::Bottom,
            2 if col == 2 => Face::Top,
            1 => Face::for_cross_column(col),
            _ => return None,
        };
        Some(FaceTexel {
            face,
            x: cx - col * self.edge,
            y: cy - row * self.edge,
        })
    }
}
