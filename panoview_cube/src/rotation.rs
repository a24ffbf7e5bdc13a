// Copyright 2025 the Panoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::geometry::Direction;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `sin`, `cos`

/// Camera-to-world rotation for a camera at the cube center.
///
/// Columns, in the view frame (see [`crate::geometry`]):
/// 0. horizontal axis, stepped per output column,
/// 1. vertical axis, stepped per output row (toward the TOP face at zero pitch),
/// 2. forward axis, the viewing direction.
///
/// The horizontal axis points to the camera's *left*: renderers write output
/// columns mirrored, which turns it back into screen-right.
///
/// At zero pitch and yaw the camera looks at the FRONT face center. Positive
/// yaw turns toward RIGHT; positive pitch looks toward BOTTOM.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationMatrix {
    rows: [[f64; 3]; 3],
}

impl RotationMatrix {
    /// Rotation for zero pitch and yaw.
    pub const LOOKING_FRONT: Self = Self {
        rows: [[-1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    /// Builds the rotation for `pitch` and `yaw` given in degrees.
    ///
    /// Uses exact trigonometry; this runs once per render.
    #[must_use]
    pub fn from_pitch_yaw(pitch: f64, yaw: f64) -> Self {
        let (pitch, yaw) = (pitch.to_radians(), yaw.to_radians());
        let (sp, cp) = (pitch.sin(), pitch.cos());
        let (sy, cy) = (yaw.sin(), yaw.cos());
        Self {
            rows: [
                [-cy, sy * sp, sy * cp],
                [0.0, cp, -sp],
                [sy, cy * sp, cy * cp],
            ],
        }
    }

    /// Entry at `row`, `col` (both `0..3`).
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.rows[row][col]
    }

    /// Column `col` as a direction.
    #[inline]
    #[must_use]
    pub fn column(&self, col: usize) -> Direction {
        Direction::new(self.rows[0][col], self.rows[1][col], self.rows[2][col])
    }

    /// Horizontal axis (column 0).
    #[inline]
    #[must_use]
    pub fn horizontal(&self) -> Direction {
        self.column(0)
    }

    /// Vertical axis (column 1).
    #[inline]
    #[must_use]
    pub fn vertical(&self) -> Direction {
        self.column(1)
    }

    /// Forward axis (column 2).
    #[inline]
    #[must_use]
    pub fn forward(&self) -> Direction {
        self.column(2)
    }

    /// Maps camera coordinates to a view-frame direction.
    #[must_use]
    pub fn apply(&self, camera: Direction) -> Direction {
        Direction::new(
            self.rows[0][0] * camera.x + self.rows[0][1] * camera.y + self.rows[0][2] * camera.z,
            self.rows[1][0] * camera.x + self.rows[1][1] * camera.y + self.rows[1][2] * camera.z,
            self.rows[2][0] * camera.x + self.rows[2][1] * camera.y + self.rows[2][2] * camera.z,
        )
    }
}
