/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#[cfg(not(feature = "double-precision"))]
pub use single::*;

#[cfg(feature = "double-precision")]
pub use double::*;

#[cfg(not(feature = "double-precision"))]
mod single {
    /// Floating-point type used throughout the engine. This is the equivalent of `real_t`
    /// in the engine's C++ code.
    pub type Real = f32;

    pub(crate) type Vec2 = glam::f32::Vec2;
    pub(crate) type Vec3 = glam::f32::Vec3;
}

#[cfg(feature = "double-precision")]
mod double {
    /// Floating-point type used throughout the engine, matching an engine compiled with
    /// `precision=double`.
    pub type Real = f64;

    pub(crate) type Vec2 = glam::f64::DVec2;
    pub(crate) type Vec3 = glam::f64::DVec3;
}
