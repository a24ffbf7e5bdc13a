// Copyright 2025 the Panoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polynomial `atan` / `atan2` replacements for per-pixel use.
//!
//! The coefficients below are fixed; cubemaps built with them are
//! bit-reproducible across platforms.

use core::f64::consts::{FRAC_PI_2, PI};

const A1: f64 = 0.999_977_26;
const A3: f64 = -0.332_623_47;
const A5: f64 = 0.193_543_46;
const A7: f64 = -0.116_432_87;
const A9: f64 = 0.052_653_32;
const A11: f64 = -0.011_721_20;

/// Odd-polynomial approximation of `atan(x)`.
///
/// Only accurate for `x` in `[-1, 1]`; [`atan2_approx`] reduces its input
/// into that range before calling this.
#[inline]
#[must_use]
pub fn atan_approx(x: f64) -> f64 {
    let x_sq = x * x;
    x * (A1 + x_sq * (A3 + x_sq * (A5 + x_sq * (A7 + x_sq * (A9 + x_sq * A11)))))
}

/// Approximation of `atan2(y, x)` in `[-π, π]`.
///
/// When `|x| < |y|` the ratio is inverted and reflected around `±π/2`, then
/// the quadrant is fixed up from the signs of `x` and `y`. Points on the
/// `y` axis are answered exactly, and `(0, 0)` maps to `0`.
#[inline]
#[must_use]
pub fn atan2_approx(y: f64, x: f64) -> f64 {
    if x == 0.0 {
        return if y == 0.0 {
            0.0
        } else if y < 0.0 {
            -FRAC_PI_2
        } else {
            FRAC_PI_2
        };
    }
    let swap = x.abs() < y.abs();
    let input = if swap { x / y } else { y / x };
    let mut res = atan_approx(input);
    if swap {
        res = if input >= 0.0 { FRAC_PI_2 } else { -FRAC_PI_2 } - res;
    }
    if x >= 0.0 {
        res
    } else if y >= 0.0 {
        res + PI
    } else {
        res - PI
    }
}
