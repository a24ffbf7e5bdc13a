// Copyright 2025 the Panoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validated views over caller-owned RGB byte buffers.
//!
//! Sizes are checked once, when a view is created. The pipelines index
//! through these views and never allocate or copy a whole image.

use core::fmt;

use panoview_cube::{AtlasLayout, BYTES_PER_PIXEL, Face, FaceTexel};

/// One packed RGB pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Creates a pixel from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    fn read(bytes: &[u8], offset: usize) -> Self {
        Self::new(bytes[offset], bytes[offset + 1], bytes[offset + 2])
    }

    #[inline]
    fn write(self, bytes: &mut [u8], offset: usize) {
        bytes[offset..offset + BYTES_PER_PIXEL].copy_from_slice(&[self.r, self.g, self.b]);
    }
}

impl From<Rgb8> for peniko::Color {
    fn from(px: Rgb8) -> Self {
        Self::from_rgb8(px.r, px.g, px.b)
    }
}

/// Error returned when a buffer does not match the dimensions it is
/// wrapped with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageError {
    /// Width or height is zero.
    ZeroSize {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// `width * height * 3` does not fit in `usize`.
    TooLarge {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// The buffer length differs from what the dimensions require.
    BufferSize {
        /// Required length in bytes.
        expected: usize,
        /// Length of the buffer that was passed in.
        actual: usize,
    },
    /// Panorama widths must split into four equal cube faces.
    WidthNotDivisibleByFour {
        /// Requested width.
        width: u32,
    },
    /// The atlas was sized for a different panorama.
    EdgeMismatch {
        /// Face edge implied by the panorama.
        panorama_edge: u32,
        /// Face edge of the atlas.
        atlas_edge: u32,
    },
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSize { width, height } => {
                write!(f, "image has zero size ({width}x{height})")
            }
            Self::TooLarge { width, height } => {
                write!(f, "image of {width}x{height} pixels does not fit in memory")
            }
            Self::BufferSize { expected, actual } => {
                write!(f, "buffer holds {actual} bytes, expected {expected}")
            }
            Self::WidthNotDivisibleByFour { width } => {
                write!(f, "panorama width {width} is not divisible by 4")
            }
            Self::EdgeMismatch {
                panorama_edge,
                atlas_edge,
            } => write!(
                f,
                "atlas face edge {atlas_edge} does not match panorama face edge {panorama_edge}"
            ),
        }
    }
}

impl core::error::Error for ImageError {}

fn checked_len(width: u32, height: u32) -> Result<usize, ImageError> {
    if width == 0 || height == 0 {
        return Err(ImageError::ZeroSize { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|px| px.checked_mul(BYTES_PER_PIXEL))
        .ok_or(ImageError::TooLarge { width, height })
}

fn check_buffer(expected: usize, actual: usize) -> Result<(), ImageError> {
    if expected == actual {
        Ok(())
    } else {
        Err(ImageError::BufferSize { expected, actual })
    }
}

/// Read-only row-major RGB image.
#[derive(Clone, Copy, Debug)]
pub struct RgbImage<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
}

impl<'a> RgbImage<'a> {
    /// Wraps `data`, which must hold exactly `width * height * 3` bytes.
    pub fn new(data: &'a [u8], width: u32, height: u32) -> Result<Self, ImageError> {
        check_buffer(checked_len(width, height)?, data.len())?;
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The underlying bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// Pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the image.
    #[inline]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Rgb8 {
        debug_assert!(x < self.width && y < self.height, "({x}, {y}) out of bounds");
        Rgb8::read(self.data, pixel_offset(self.width, x, y))
    }
}

/// Mutable row-major RGB image, typically a render target.
#[derive(Debug)]
pub struct RgbImageMut<'a> {
    data: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> RgbImageMut<'a> {
    /// Wraps `data`, which must hold exactly `width * height * 3` bytes.
    pub fn new(data: &'a mut [u8], width: u32, height: u32) -> Result<Self, ImageError> {
        check_buffer(checked_len(width, height)?, data.len())?;
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The underlying bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &*self.data
    }

    /// Read-only view of the same pixels.
    #[must_use]
    pub fn as_image(&self) -> RgbImage<'_> {
        RgbImage {
            data: &*self.data,
            width: self.width,
            height: self.height,
        }
    }

    /// Pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the image.
    #[inline]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Rgb8 {
        self.as_image().pixel(x, y)
    }

    /// Overwrites the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the image.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, px: Rgb8) {
        debug_assert!(x < self.width && y < self.height, "({x}, {y}) out of bounds");
        px.write(self.data, pixel_offset(self.width, x, y));
    }
}

#[inline]
fn pixel_offset(width: u32, x: u32, y: u32) -> usize {
    (y as usize * width as usize + x as usize) * BYTES_PER_PIXEL
}

/// An equirectangular panorama: longitude across, latitude down.
///
/// The width is split into four cube faces, so it must be a multiple of 4.
#[derive(Clone, Copy, Debug)]
pub struct Panorama<'a> {
    image: RgbImage<'a>,
}

impl<'a> Panorama<'a> {
    /// Wraps `data` as a `width × height` panorama.
    pub fn new(data: &'a [u8], width: u32, height: u32) -> Result<Self, ImageError> {
        Self::from_image(RgbImage::new(data, width, height)?)
    }

    /// Reinterprets an image as a panorama.
    pub fn from_image(image: RgbImage<'a>) -> Result<Self, ImageError> {
        if !image.width().is_multiple_of(4) {
            return Err(ImageError::WidthNotDivisibleByFour {
                width: image.width(),
            });
        }
        Ok(Self { image })
    }

    /// The panorama pixels.
    #[must_use]
    pub fn image(&self) -> &RgbImage<'a> {
        &self.image
    }

    /// Edge length of the cube faces built from this panorama.
    #[must_use]
    pub fn edge(&self) -> u32 {
        self.image.width() / 4
    }

    /// Atlas layout matching this panorama.
    #[must_use]
    pub fn layout(&self) -> AtlasLayout {
        AtlasLayout::for_panorama_width(self.image.width())
    }
}

/// Read-only face-major cube atlas (see [`AtlasLayout`]).
#[derive(Clone, Copy, Debug)]
pub struct CubeAtlas<'a> {
    data: &'a [u8],
    layout: AtlasLayout,
}

impl<'a> CubeAtlas<'a> {
    /// Wraps `data` as an atlas of `edge × edge` faces.
    pub fn new(data: &'a [u8], edge: u32) -> Result<Self, ImageError> {
        let layout = atlas_layout(edge)?;
        check_buffer(layout.byte_len(), data.len())?;
        Ok(Self { data, layout })
    }

    /// Face edge length in pixels.
    #[must_use]
    pub fn edge(&self) -> u32 {
        self.layout.edge()
    }

    /// Addressing of this atlas.
    #[must_use]
    pub fn layout(&self) -> AtlasLayout {
        self.layout
    }

    /// The underlying bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// The contiguous `edge × edge` RGB bytes of one face.
    #[must_use]
    pub fn face_bytes(&self, face: Face) -> &'a [u8] {
        &self.data[self.layout.face_range(face)]
    }

    /// Pixel stored at `texel`.
    #[inline]
    #[must_use]
    pub fn texel(&self, texel: FaceTexel) -> Rgb8 {
        Rgb8::read(
            self.data,
            self.layout.texel_offset(texel.face, texel.x, texel.y),
        )
    }
}

/// Mutable face-major cube atlas, the output of the cubemap builder.
#[derive(Debug)]
pub struct CubeAtlasMut<'a> {
    data: &'a mut [u8],
    layout: AtlasLayout,
}

impl<'a> CubeAtlasMut<'a> {
    /// Wraps `data` as an atlas of `edge × edge` faces.
    pub fn new(data: &'a mut [u8], edge: u32) -> Result<Self, ImageError> {
        let layout = atlas_layout(edge)?;
        check_buffer(layout.byte_len(), data.len())?;
        Ok(Self { data, layout })
    }

    /// Wraps `data` as the atlas for `panorama`.
    pub fn for_panorama(data: &'a mut [u8], panorama: &Panorama<'_>) -> Result<Self, ImageError> {
        Self::new(data, panorama.edge())
    }

    /// Face edge length in pixels.
    #[must_use]
    pub fn edge(&self) -> u32 {
        self.layout.edge()
    }

    /// Addressing of this atlas.
    #[must_use]
    pub fn layout(&self) -> AtlasLayout {
        self.layout
    }

    /// Read-only view of the same atlas.
    #[must_use]
    pub fn as_atlas(&self) -> CubeAtlas<'_> {
        CubeAtlas {
            data: &*self.data,
            layout: self.layout,
        }
    }

    /// The contiguous bytes of one face, for in-place edits.
    #[must_use]
    pub fn face_bytes_mut(&mut self, face: Face) -> &mut [u8] {
        &mut self.data[self.layout.face_range(face)]
    }

    /// Overwrites the pixel at `texel`.
    #[inline]
    pub fn set_texel(&mut self, texel: FaceTexel, px: Rgb8) {
        debug_assert!(
            texel.x < self.edge() && texel.y < self.edge(),
            "{texel:?} outside a face of edge {}",
            self.edge()
        );
        px.write(
            self.data,
            self.layout.texel_offset(texel.face, texel.x, texel.y),
        );
    }
}

fn atlas_layout(edge: u32) -> Result<AtlasLayout, ImageError> {
    // Same overflow and zero checks as a 4e × 3e image, which bounds 6e².
    checked_len(edge.saturating_mul(4), edge.saturating_mul(3))?;
    Ok(AtlasLayout::new(edge))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec;

    use super::{CubeAtlas, CubeAtlasMut, ImageError, Panorama, Rgb8, RgbImage, RgbImageMut};
    use panoview_cube::{Face, FaceTexel};

    #[test]
    fn rejects_wrong_buffer_sizes() {
        let data = vec![0_u8; 11];
        assert_eq!(
            RgbImage::new(&data, 2, 2).unwrap_err(),
            ImageError::BufferSize {
                expected: 12,
                actual: 11
            }
        );
        assert_eq!(
            RgbImage::new(&data, 0, 2).unwrap_err(),
            ImageError::ZeroSize { width: 0, height: 2 }
        );
    }

    #[test]
    fn panorama_width_must_split_into_faces() {
        let data = vec![0_u8; 6 * 3 * 3];
        assert_eq!(
            Panorama::new(&data, 6, 3).unwrap_err(),
            ImageError::WidthNotDivisibleByFour { width: 6 }
        );
        let data = vec![0_u8; 8 * 4 * 3];
        let pano = Panorama::new(&data, 8, 4).unwrap();
        assert_eq!(pano.edge(), 2);
        assert_eq!(pano.layout().byte_len(), 6 * 4 * 3);
    }

    #[test]
    fn atlas_size_is_six_faces() {
        let mut data = vec![0_u8; 6 * 5 * 5 * 3];
        assert!(CubeAtlasMut::new(&mut data, 5).is_ok());
        assert!(CubeAtlas::new(&data[1..], 5).is_err());
        assert!(CubeAtlas::new(&data, 0).is_err());
    }

    #[test]
    fn pixel_writes_land_in_place() {
        let mut data = vec![0_u8; 3 * 2 * 3];
        let mut img = RgbImageMut::new(&mut data, 3, 2).unwrap();
        img.set_pixel(2, 1, Rgb8::new(1, 2, 3));
        assert_eq!(img.pixel(2, 1), Rgb8::new(1, 2, 3));
        assert_eq!(&data[15..18], &[1, 2, 3]);
    }

    #[test]
    fn atlas_faces_are_contiguous() {
        let mut data = vec![0_u8; 6 * 2 * 2 * 3];
        let mut atlas = CubeAtlasMut::new(&mut data, 2).unwrap();
        let texel = FaceTexel {
            face: Face::Top,
            x: 1,
            y: 0,
        };
        atlas.set_texel(texel, Rgb8::new(9, 8, 7));
        assert_eq!(atlas.as_atlas().texel(texel), Rgb8::new(9, 8, 7));
        assert_eq!(&atlas.face_bytes_mut(Face::Top)[3..6], &[9, 8, 7]);
        let atlas = CubeAtlas::new(&data, 2).unwrap();
        assert_eq!(atlas.face_bytes(Face::Top).len(), 12);
        assert!(atlas.face_bytes(Face::Front).iter().all(|&b| b == 0));
    }

    #[test]
    fn converts_to_peniko_color() {
        let color: peniko::Color = Rgb8::new(255, 0, 51).into();
        assert_eq!(color.to_rgba8().to_u8_array(), [255, 0, 51, 255]);
    }

    #[test]
    fn errors_display() {
        let err = ImageError::EdgeMismatch {
            panorama_edge: 100,
            atlas_edge: 50,
        };
        assert_eq!(
            std::format!("{err}"),
            "atlas face edge 50 does not match panorama face edge 100"
        );
    }
}
