// Copyright 2025 the Panoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panoview Cube: geometry shared by panorama, cubemap and view pipelines.
//!
//! This crate holds the pure math of a panorama viewer and nothing else:
//! - Fast `atan` / `atan2` approximations for per-pixel use ([`atan2_approx`]).
//! - The six cube [`Face`]s and the face-major atlas addressing
//!   ([`AtlasLayout`]).
//! - Face pixel → direction ([`cross_texel_direction`]) and direction → face
//!   texel ([`view_direction_to_texel`]).
//! - The camera rotation used by the projector ([`RotationMatrix`]).
//!
//! It does **not** touch pixel buffers. `panoview_raster` drives these
//! functions over caller-owned images.
//!
//! ## Example
//!
//! ```rust
//! use panoview_cube::{AtlasLayout, Face, FaceTexel, cross_texel_direction, view_direction_to_texel};
//!
//! // A 400×200 panorama yields 100×100 faces.
//! let layout = AtlasLayout::for_panorama_width(400);
//! let texel = FaceTexel { face: Face::Right, x: 30, y: 70 };
//!
//! // Direction through the texel, as used when building the atlas.
//! let (cx, cy) = layout.face_to_cross(texel);
//! let dir = cross_texel_direction(texel.face, cx, cy, layout.edge());
//!
//! // The projector's lookup brings it back to the same texel.
//! assert_eq!(view_direction_to_texel(dir.cube_to_view(), layout.edge()), texel);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod face;
pub mod geometry;
mod layout;
mod rotation;
mod trig;

pub use face::Face;
pub use geometry::{Direction, cross_texel_direction, view_direction_to_texel};
pub use layout::{AtlasLayout, BYTES_PER_PIXEL, FaceTexel};
pub use rotation::RotationMatrix;
pub use trig::{atan2_approx, atan_approx};
