/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use crate::builtin::real::{Real, Vec2};
use crate::sys::{self, ffi_methods, GdextFfi};

/// Vector used for 2D math, with the same memory layout as its engine counterpart.
#[derive(Default, Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector2 {
    pub x: Real,
    pub y: Real,
}

impl Vector2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0);

    pub const fn new(x: Real, y: Real) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> Real {
        self.to_glam().length()
    }

    pub fn dot(self, other: Self) -> Real {
        self.to_glam().dot(other.to_glam())
    }

    pub fn normalized(self) -> Self {
        Self::from_glam(self.to_glam().normalize_or_zero())
    }

    pub(crate) fn to_glam(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub(crate) fn from_glam(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

// SAFETY: the engine represents Vector2 as two consecutive `real_t`, same as `Self`.
unsafe impl GdextFfi for Vector2 {
    ffi_methods! { type sys::GdextTypePtr = *mut Self; .. }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_glam(self.to_glam() + rhs.to_glam())
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_glam(self.to_glam() - rhs.to_glam())
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<Real> for Vector2 {
    type Output = Self;

    fn mul(self, rhs: Real) -> Self {
        Self::from_glam(self.to_glam() * rhs)
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_glam(-self.to_glam())
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
