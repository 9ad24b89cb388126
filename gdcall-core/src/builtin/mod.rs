/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Built-in value types passed through call frames.
//!
//! Geometry types are plain `repr(C)` values; strings and packed arrays hold opaque
//! handles into engine-managed memory and release them on drop.

mod color;
mod packed_int64_array;
mod rect2;
mod string;
mod string_name;
mod vector2;
mod vector3;

pub mod real;

pub use color::Color;
pub use packed_int64_array::PackedInt64Array;
pub use real::Real;
pub use rect2::Rect2;
pub use string::GString;
pub use string_name::StringName;
pub use vector2::Vector2;
pub use vector3::Vector3;
