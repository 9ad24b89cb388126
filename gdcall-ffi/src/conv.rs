/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Conversions between Rust scalars and their engine encodings.

use std::mem::size_of;

use crate as sys;
use crate::static_assert;

/// Infallibly convert `u32` into a `usize`.
///
/// This bridge only supports targets where `u32` can be infallibly converted into a `usize`.
pub fn u32_to_usize(i: u32) -> usize {
    static_assert!(
        size_of::<u32>() <= size_of::<usize>(),
        "gdcall only supports targets where u32 <= usize"
    );

    // SAFETY: The above static assert ensures that this can never fail.
    unsafe { i.try_into().unwrap_unchecked() }
}

/// Converts a Rust bool into a sys-bool.
pub const fn bool_to_sys(value: bool) -> sys::GdextBool {
    value as sys::GdextBool
}

/// Converts a sys-bool into a Rust bool.
pub const fn sys_to_bool(value: sys::GdextBool) -> bool {
    value != 0
}

pub const SYS_TRUE: sys::GdextBool = bool_to_sys(true);
pub const SYS_FALSE: sys::GdextBool = bool_to_sys(false);
