/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use crate::builtin::{Real, Vector2};
use crate::sys::{self, ffi_methods, GdextFfi};

/// 2D axis-aligned bounding box, stored as position + size like its engine counterpart.
#[derive(Default, Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Rect2 {
    pub position: Vector2,
    pub size: Vector2,
}

impl Rect2 {
    pub const fn new(position: Vector2, size: Vector2) -> Self {
        Self { position, size }
    }

    pub fn from_components(x: Real, y: Real, width: Real, height: Real) -> Self {
        Self::new(Vector2::new(x, y), Vector2::new(width, height))
    }

    /// The bottom-right corner, `position + size`.
    pub fn end(self) -> Vector2 {
        self.position + self.size
    }

    pub fn area(self) -> Real {
        self.size.x * self.size.y
    }

    /// Whether `point` lies inside this rectangle (excluding the right/bottom edge).
    pub fn has_point(self, point: Vector2) -> bool {
        let end = self.end();
        point.x >= self.position.x && point.y >= self.position.y && point.x < end.x && point.y < end.y
    }
}

// SAFETY: the engine represents Rect2 as (position, size) Vector2 pairs, same as `Self`.
unsafe impl GdextFfi for Rect2 {
    ffi_methods! { type sys::GdextTypePtr = *mut Self; .. }
}

impl fmt::Display for Rect2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[P: {}, S: {}]", self.position, self.size)
    }
}
