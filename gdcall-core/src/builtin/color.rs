/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use crate::sys::{self, ffi_methods, GdextFfi};

// Color components are always 32-bit floats, even in double-precision engine builds.
type Vec4 = glam::f32::Vec4;

/// RGBA color with 32-bit float components, same memory layout as its engine counterpart.
#[derive(Default, Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self::from_rgba(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::from_rgba(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Self = Self::from_rgba(1.0, 1.0, 1.0, 0.0);

    pub const fn from_rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self::from_rgba(r, g, b, 1.0)
    }

    /// Componentwise linear interpolation towards `to` by `weight` in [0, 1].
    pub fn lerp(self, to: Self, weight: f32) -> Self {
        Self::from_glam(self.to_glam().lerp(to.to_glam(), weight))
    }

    fn to_glam(self) -> Vec4 {
        Vec4::new(self.r, self.g, self.b, self.a)
    }

    fn from_glam(v: Vec4) -> Self {
        Self::from_rgba(v.x, v.y, v.z, v.w)
    }
}

// SAFETY: the engine represents Color as four consecutive 32-bit floats, same as `Self`.
unsafe impl GdextFfi for Color {
    ffi_methods! { type sys::GdextTypePtr = *mut Self; .. }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}
