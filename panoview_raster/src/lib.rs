// Copyright 2025 the Panoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panoview Raster: panorama, cubemap and perspective view pixel pipelines.
//!
//! All pipelines run over caller-owned packed RGB buffers. Buffers are
//! wrapped once in validated views ([`Panorama`], [`CubeAtlas`],
//! [`RgbImageMut`], ...), after which nothing allocates or copies a whole
//! image.
//!
//! - [`build_cubemap`] resamples an equirectangular panorama into the six
//!   faces of a cube atlas, polling an optional [`Cancel`] source between
//!   columns.
//! - [`render_view`] renders a perspective view from a built atlas with
//!   plain texel lookups.
//! - [`render_view_from_panorama`] renders the same view without an atlas,
//!   resampling the panorama per pixel.
//! - [`sample_single_face_pixel`] and [`view_texel_at`] answer single-pixel
//!   queries for either pipeline.
//!
//! The geometry lives in [`panoview_cube`].
//!
//! ## Example
//!
//! ```rust
//! use core::sync::atomic::AtomicBool;
//! use panoview_raster::{
//!     BuildStatus, CubeAtlasMut, Panorama, RgbImageMut, ViewParams, build_cubemap, render_view,
//! };
//!
//! // A flat grey 400×200 panorama.
//! let pixels = vec![128_u8; 400 * 200 * 3];
//! let panorama = Panorama::new(&pixels, 400, 200).unwrap();
//!
//! // Build the atlas; another thread could set `cancel` to stop early.
//! let mut faces = vec![0_u8; panorama.layout().byte_len()];
//! let mut atlas = CubeAtlasMut::for_panorama(&mut faces, &panorama).unwrap();
//! let cancel = AtomicBool::new(false);
//! let status = build_cubemap(&panorama, &mut atlas, Some(&cancel)).unwrap();
//! assert_eq!(status, BuildStatus::Completed);
//!
//! // Look 30° to the right.
//! let mut view = vec![0_u8; 64 * 64 * 3];
//! let mut output = RgbImageMut::new(&mut view, 64, 64).unwrap();
//! render_view(&atlas.as_atlas(), &ViewParams::new(0.0, 30.0, 75.0), &mut output);
//! assert!(view.iter().all(|&c| c == 128));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod cubemap;
mod image;
mod projector;
mod sampler;

pub use cubemap::{BuildStatus, Cancel, build_cubemap, panorama_point, sample_single_face_pixel};
pub use image::{CubeAtlas, CubeAtlasMut, ImageError, Panorama, Rgb8, RgbImage, RgbImageMut};
pub use projector::{
    MAX_FOV, MAX_PITCH, MIN_FOV, ViewParams, render_view, render_view_from_panorama,
    view_texel_at,
};
pub use sampler::{sample_bilinear, sample_point};
