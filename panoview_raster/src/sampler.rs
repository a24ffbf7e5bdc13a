// Copyright 2025 the Panoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`, `round`

use crate::image::{Rgb8, RgbImage};

/// Bilinearly samples `image` between texel `(u, v)` and its neighbours at
/// `(u + 1, v + 1)`, weighted by the fractional offsets `mu` and `nu`.
///
/// Columns wrap around the image width (a panorama is periodic in
/// longitude); rows clamp to the first and last row (no wrap across the
/// poles). Channels are rounded to the nearest integer.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    reason = "wrapped and clamped coordinates are within the u32 image dimensions"
)]
pub fn sample_bilinear(image: &RgbImage<'_>, u: i64, v: i64, mu: f64, nu: f64) -> Rgb8 {
    let width = i64::from(image.width());
    let last_row = i64::from(image.height()) - 1;

    let u0 = u.rem_euclid(width) as u32;
    let u1 = u.wrapping_add(1).rem_euclid(width) as u32;
    let v0 = v.clamp(0, last_row) as u32;
    let v1 = v.saturating_add(1).clamp(0, last_row) as u32;

    let a = image.pixel(u0, v0);
    let b = image.pixel(u1, v0);
    let c = image.pixel(u0, v1);
    let d = image.pixel(u1, v1);

    let wa = (1.0 - mu) * (1.0 - nu);
    let wb = mu * (1.0 - nu);
    let wc = (1.0 - mu) * nu;
    let wd = mu * nu;
    let blend = |a: u8, b: u8, c: u8, d: u8| {
        channel(
            f64::from(a) * wa + f64::from(b) * wb + f64::from(c) * wc + f64::from(d) * wd,
        )
    };

    Rgb8::new(
        blend(a.r, b.r, c.r, d.r),
        blend(a.g, b.g, c.g, d.g),
        blend(a.b, b.b, c.b, d.b),
    )
}

/// Samples `image` at a fractional pixel position.
///
/// The integer part selects the base texel and the fractional part the
/// blend weights of [`sample_bilinear`].
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    reason = "floored coordinates saturate; the sampler wraps and clamps them"
)]
pub fn sample_point(image: &RgbImage<'_>, point: Point) -> Rgb8 {
    let (fu, fv) = (point.x.floor(), point.y.floor());
    sample_bilinear(image, fu as i64, fv as i64, point.x - fu, point.y - fv)
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "explicitly clamped to [0, 255] before casting"
)]
#[inline]
fn channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
