// Copyright 2025 the Panoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Perspective views of a cube atlas or panorama.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `tan`

use panoview_cube::{Direction, FaceTexel, RotationMatrix, view_direction_to_texel};

use crate::cubemap::sample_single_face_pixel;
use crate::image::{CubeAtlas, Panorama, RgbImageMut};

/// Narrowest field of view accepted by [`ViewParams::normalized`], in degrees.
pub const MIN_FOV: f64 = 15.0;
/// Widest field of view accepted by [`ViewParams::normalized`], in degrees.
pub const MAX_FOV: f64 = 90.0;
/// Largest pitch magnitude accepted by [`ViewParams::normalized`], in degrees.
pub const MAX_PITCH: f64 = 89.0;

/// Camera orientation and zoom, all in degrees.
///
/// `pitch` and `yaw` of zero look at the FRONT face center. Positive yaw
/// turns toward RIGHT; positive pitch looks toward BOTTOM, which holds the
/// top rows of the source panorama. `fov` spans the output width and height
/// (outputs are assumed square-ish; non-square outputs stretch).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewParams {
    /// Vertical look angle.
    pub pitch: f64,
    /// Horizontal look angle.
    pub yaw: f64,
    /// Field of view.
    pub fov: f64,
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            pitch: 0.0,
            yaw: 0.0,
            fov: MAX_FOV,
        }
    }
}

impl ViewParams {
    /// Creates view parameters as given, without range checks.
    #[must_use]
    pub const fn new(pitch: f64, yaw: f64, fov: f64) -> Self {
        Self { pitch, yaw, fov }
    }

    /// Brings the parameters into the ranges an interactive viewer uses.
    ///
    /// Yaw wraps into `[0, 360)`, pitch clamps to `±MAX_PITCH` and fov to
    /// `MIN_FOV..=MAX_FOV`. Rendering does not require this; any finite
    /// values produce a view.
    #[must_use]
    pub fn normalized(self) -> Self {
        let mut yaw = self.yaw % 360.0;
        if yaw < 0.0 {
            yaw += 360.0;
        }
        // Tiny negative inputs round up to exactly 360.
        if yaw >= 360.0 {
            yaw = 0.0;
        }
        Self {
            pitch: self.pitch.clamp(-MAX_PITCH, MAX_PITCH),
            yaw,
            fov: self.fov.clamp(MIN_FOV, MAX_FOV),
        }
    }

    /// `1 / tan(fov / 2)`: distance of the image plane for a unit half-width.
    #[must_use]
    pub fn fov_scale(&self) -> f64 {
        1.0 / (self.fov.to_radians() / 2.0).tan()
    }
}

/// Normalized offset of `index` within `len` pixels, divided by `fov_scale`.
#[inline]
fn plane_offset(index: u32, len: u32, fov_scale: f64) -> f64 {
    (2.0 * f64::from(index) / f64::from(len) - 1.0) / fov_scale
}

/// Runs `visit(column, row, texel)` for every pixel of a `width × height`
/// view, with `column` already mirrored.
///
/// Directions advance by one horizontal step per column instead of being
/// recomputed from the rotation.
fn for_each_view_texel(
    params: &ViewParams,
    edge: u32,
    width: u32,
    height: u32,
    mut visit: impl FnMut(u32, u32, FaceTexel),
) {
    let rotation = RotationMatrix::from_pitch_yaw(params.pitch, params.yaw);
    let (horizontal, vertical, forward) =
        (rotation.horizontal(), rotation.vertical(), rotation.forward());
    let fov_scale = params.fov_scale();

    for y in 0..height {
        let dy = plane_offset(y, height, fov_scale);
        let mut direction = forward.add_scaled(vertical, dy);
        let mut prev_dx = 0.0;
        for x in 0..width {
            let dx = plane_offset(x, width, fov_scale);
            direction = direction.add_scaled(horizontal, dx - prev_dx);
            prev_dx = dx;
            visit(width - 1 - x, y, view_direction_to_texel(direction, edge));
        }
    }
}

/// Renders the view described by `params` from a prebuilt cube atlas.
///
/// Every output pixel is a plain texel copy; there is no resampling.
pub fn render_view(atlas: &CubeAtlas<'_>, params: &ViewParams, output: &mut RgbImageMut<'_>) {
    let (width, height) = (output.width(), output.height());
    for_each_view_texel(params, atlas.edge(), width, height, |x, y, texel| {
        output.set_pixel(x, y, atlas.texel(texel));
    });
}

/// Renders the view described by `params` straight from the panorama.
///
/// Produces the same image as building the atlas with
/// [`build_cubemap`](crate::build_cubemap) and calling [`render_view`], but
/// resamples the panorama for every output pixel instead.
pub fn render_view_from_panorama(
    panorama: &Panorama<'_>,
    params: &ViewParams,
    output: &mut RgbImageMut<'_>,
) {
    let (width, height) = (output.width(), output.height());
    for_each_view_texel(params, panorama.edge(), width, height, |x, y, texel| {
        let px = sample_single_face_pixel(panorama, texel.x, texel.y, texel.face);
        output.set_pixel(x, y, px);
    });
}

/// Face texel shown at output pixel `(x, y)` of a `width × height` view.
///
/// Computes the direction from scratch, so it can be used to pick single
/// pixels without rendering. Agrees with the renderers up to floating point
/// drift of their incremental stepping.
#[must_use]
pub fn view_texel_at(
    params: &ViewParams,
    edge: u32,
    width: u32,
    height: u32,
    x: u32,
    y: u32,
) -> FaceTexel {
    debug_assert!(x < width && y < height, "({x}, {y}) outside the view");
    let rotation = RotationMatrix::from_pitch_yaw(params.pitch, params.yaw);
    let fov_scale = params.fov_scale();
    let camera = Direction::new(
        plane_offset(width - 1 - x, width, fov_scale),
        plane_offset(y, height, fov_scale),
        1.0,
    );
    view_direction_to_texel(rotation.apply(camera), edge)
}
