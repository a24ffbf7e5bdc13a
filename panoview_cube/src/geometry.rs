// Copyright 2025 the Panoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mappings between cube faces and 3D directions.
//!
//! Two frames are in use:
//!
//! - **Cube frame**, produced by [`cross_texel_direction`]: `+x` is the
//!   FRONT face, `+y` the RIGHT face and `+z` the BOTTOM face. Longitude is
//!   measured in the `xy` plane from `+x` toward `+y`, latitude toward `+z`.
//! - **View frame**, consumed by [`view_direction_to_texel`]: `+x` is the
//!   RIGHT face, `+y` the TOP face and `+z` the FRONT face.
//!
//! [`Direction::cube_to_view`] and [`Direction::view_to_cube`] convert
//! between them; the per-face rules of the two mappings are exact inverses
//! under that conversion.

use crate::face::Face;
use crate::layout::FaceTexel;
use crate::trig::atan2_approx;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `sqrt`, `round`, `abs`

/// A 3D direction. Not required to be unit length.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Direction {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Direction {
    /// Creates a direction from its components.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Dot product.
    #[inline]
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean length.
    #[inline]
    #[must_use]
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// `self + other * scale`, component-wise.
    #[inline]
    #[must_use]
    pub fn add_scaled(self, other: Self, scale: f64) -> Self {
        Self {
            x: self.x + other.x * scale,
            y: self.y + other.y * scale,
            z: self.z + other.z * scale,
        }
    }

    /// Longitude of a cube-frame direction, in `[-π, π]`.
    #[inline]
    #[must_use]
    pub fn longitude(self) -> f64 {
        atan2_approx(self.y, self.x)
    }

    /// Latitude of a cube-frame direction, in `[-π/2, π/2]`.
    #[inline]
    #[must_use]
    pub fn latitude(self) -> f64 {
        atan2_approx(self.z, (self.x * self.x + self.y * self.y).sqrt())
    }

    /// Re-expresses a cube-frame direction in the view frame.
    #[inline]
    #[must_use]
    pub fn cube_to_view(self) -> Self {
        Self {
            x: self.y,
            y: -self.z,
            z: self.x,
        }
    }

    /// Re-expresses a view-frame direction in the cube frame.
    #[inline]
    #[must_use]
    pub fn view_to_cube(self) -> Self {
        Self {
            x: self.z,
            y: self.x,
            z: -self.y,
        }
    }
}

/// Cube-frame direction through cross-layout pixel `(i, j)` of `face`.
///
/// `i` and `j` are cross coordinates (see [`crate::AtlasLayout`]), so the
/// tile offset of each face is folded into the constants below together with
/// the half-pixel bias that keeps neighbouring faces seamless.
#[inline]
#[must_use]
pub fn cross_texel_direction(face: Face, i: u32, j: u32, edge: u32) -> Direction {
    let edge = f64::from(edge);
    let i2 = f64::from(i) * 2.0 / edge;
    let j2 = f64::from(j) * 2.0 / edge;
    match face {
        Face::Front => Direction::new(1.0, i2 - 5.0, 3.0 - j2),
        Face::Back => Direction::new(-1.0, 1.0 - i2, 3.0 - j2),
        Face::Top => Direction::new(5.0 - j2, i2 - 5.0, -1.0),
        Face::Bottom => Direction::new(j2 - 1.0, i2 - 5.0, 1.0),
        Face::Right => Direction::new(7.0 - i2, 1.0, 3.0 - j2),
        Face::Left => Direction::new(i2 - 3.0, -1.0, 3.0 - j2),
    }
}

/// Face and texel hit by a view-frame direction on a cube of `edge` pixels.
///
/// The face is chosen by the dominant axis. `x` is tested first and `y`
/// second, each needing to strictly exceed both other magnitudes; every
/// tie falls through to FRONT/BACK. The direction is then scaled onto the
/// face plane at distance `edge / 2` and the in-plane coordinates are
/// clipped to the face with one asymmetric bound per axis, so that texels
/// on shared cube edges land on exactly one face.
///
/// A zero direction is not a valid input; it yields some texel of BACK.
#[must_use]
pub fn view_direction_to_texel(direction: Direction, edge: u32) -> FaceTexel {
    let half = f64::from(edge / 2);
    let Direction { x, y, z } = direction;
    let (ax, ay, az) = (x.abs(), y.abs(), z.abs());

    let (face, abs_max) = if ax > ay && ax > az {
        (if x > 0.0 { Face::Right } else { Face::Left }, ax)
    } else if ay > ax && ay > az {
        (if y > 0.0 { Face::Top } else { Face::Bottom }, ay)
    } else {
        (if z > 0.0 { Face::Front } else { Face::Back }, az)
    };

    let lambda = half / abs_max;
    let (x, y, z) = (x * lambda, y * lambda, z * lambda);

    // `max`/`min` rather than `clamp`: tiny faces make the bounds cross.
    let low = |v: f64| v.max(-half).min(half - 1.0).round();
    let high = |v: f64| v.max(-half + 1.0).min(half).round();

    let (tx, ty) = match face {
        Face::Front => (low(x) + half, low(y) + half),
        Face::Back => (half - high(x), low(y) + half),
        Face::Top => (low(x) + half, half - high(z)),
        Face::Bottom => (low(x) + half, low(z) + half),
        Face::Right => (half - high(z), low(y) + half),
        Face::Left => (low(z) + half, low(y) + half),
    };

    FaceTexel {
        face,
        x: texel_index(tx),
        y: texel_index(ty),
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "the value is already rounded and clipped to the face"
)]
#[inline]
fn texel_index(v: f64) -> u32 {
    v as u32
}
