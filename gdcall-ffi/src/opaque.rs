/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Stores an opaque engine value of a certain size, with very restricted operations.
///
/// Note: due to `align(4)` / `align(8)` and not `packed` repr, this type may be bigger than `N`
/// bytes (which should be OK since the engine just needs to read/write those `N` bytes reliably).
#[cfg_attr(target_pointer_width = "32", repr(C, align(4)))]
#[cfg_attr(target_pointer_width = "64", repr(C, align(8)))]
#[derive(Copy, Clone)]
pub struct Opaque<const N: usize> {
    storage: [u8; N],
    marker: std::marker::PhantomData<*const u8>, // disable Send/Sync
}

/// Widths of the opaque engine types handled by this bridge.
///
/// All of them are a single pointer into engine-managed memory; 8 bytes also covers
/// 32-bit targets (the engine reads only the pointer-sized prefix).
pub mod types {
    pub type OpaqueString = super::Opaque<8>;
    pub type OpaqueStringName = super::Opaque<8>;
    pub type OpaquePackedInt64Array = super::Opaque<8>;
}
