// Copyright 2025 the Panoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panorama → cube atlas conversion.

use core::f64::consts::{FRAC_PI_2, PI};
use core::sync::atomic::{AtomicBool, Ordering};

use kurbo::Point;
use panoview_cube::{Direction, Face, FaceTexel, cross_texel_direction};

use crate::image::{CubeAtlasMut, ImageError, Panorama, Rgb8};
use crate::sampler::sample_point;

/// A cooperative cancellation source polled by [`build_cubemap`].
///
/// The builder polls once per column of the cross layout, never per pixel.
pub trait Cancel {
    /// Returns `true` once the caller wants the build to stop.
    fn is_cancelled(&self) -> bool;
}

impl Cancel for AtomicBool {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

/// How a call to [`build_cubemap`] ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildStatus {
    /// Every atlas texel was written.
    Completed,
    /// The cancel source fired; texels not yet reached keep their previous
    /// contents.
    Cancelled,
}

/// Fractional panorama position of a cube-frame direction.
///
/// Longitude `-π..π` spans the panorama width `4 * edge` and latitude
/// `π/2..-π/2` spans `2 * edge` rows, both using the fast `atan2`.
#[must_use]
pub fn panorama_point(direction: Direction, edge: u32) -> Point {
    let scale = 2.0 * f64::from(edge) / PI;
    Point::new(
        scale * (direction.longitude() + PI),
        scale * (FRAC_PI_2 - direction.latitude()),
    )
}

#[inline]
fn sample_cross_texel(panorama: &Panorama<'_>, face: Face, cx: u32, cy: u32) -> Rgb8 {
    let edge = panorama.edge();
    let direction = cross_texel_direction(face, cx, cy, edge);
    sample_point(panorama.image(), panorama_point(direction, edge))
}

/// Samples the panorama color of one face texel without building an atlas.
///
/// Gives the same value [`build_cubemap`] stores at `(face_x, face_y)` on
/// `face`.
///
/// # Panics
///
/// Debug builds panic if the texel lies outside the face.
#[must_use]
pub fn sample_single_face_pixel(panorama: &Panorama<'_>, face_x: u32, face_y: u32, face: Face) -> Rgb8 {
    let layout = panorama.layout();
    debug_assert!(
        face_x < layout.edge() && face_y < layout.edge(),
        "({face_x}, {face_y}) outside a face of edge {}",
        layout.edge()
    );
    let (cx, cy) = layout.face_to_cross(FaceTexel {
        face,
        x: face_x,
        y: face_y,
    });
    sample_cross_texel(panorama, face, cx, cy)
}

/// Resamples `panorama` into every face of `atlas`.
///
/// Walks the cross layout column by column (see
/// [`Face::cross_tile`]); the FRONT column also covers BOTTOM and TOP.
/// `cancel` is polled before each column. On cancellation the call returns
/// [`BuildStatus::Cancelled`] and the rest of `atlas` is left as it was.
///
/// # Errors
///
/// Returns [`ImageError::EdgeMismatch`] if `atlas` was not sized for
/// `panorama`. Nothing is written in that case.
pub fn build_cubemap(
    panorama: &Panorama<'_>,
    atlas: &mut CubeAtlasMut<'_>,
    cancel: Option<&dyn Cancel>,
) -> Result<BuildStatus, ImageError> {
    let edge = panorama.edge();
    if atlas.edge() != edge {
        return Err(ImageError::EdgeMismatch {
            panorama_edge: edge,
            atlas_edge: atlas.edge(),
        });
    }
    let layout = atlas.layout();

    for cx in 0..layout.cross_width() {
        if cancel.is_some_and(|c| c.is_cancelled()) {
            return Ok(BuildStatus::Cancelled);
        }
        let column = cx / edge;
        let base = Face::for_cross_column(column);
        let rows = if base == Face::Front {
            0..layout.cross_height()
        } else {
            edge..2 * edge
        };
        for cy in rows {
            let face = if cy < edge {
                Face::Bottom
            } else if cy >= 2 * edge {
                Face::Top
            } else {
                base
            };
            let (ox, oy) = layout.cross_origin(face);
            let px = sample_cross_texel(panorama, face, cx, cy);
            atlas.set_texel(
                FaceTexel {
                    face,
                    x: cx - ox,
                    y: cy - oy,
                },
                px,
            );
        }
    }
    Ok(BuildStatus::Completed)
}
