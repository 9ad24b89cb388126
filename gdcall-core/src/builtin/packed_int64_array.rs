/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use crate::sys::{self, ffi_methods, interface_fn, GdextFfi};

/// Contiguous engine-managed array of `i64`.
///
/// Representative of the packed-array family; the remaining element types repeat this
/// pattern in the generated layer.
#[repr(C)]
pub struct PackedInt64Array {
    opaque: sys::types::OpaquePackedInt64Array,
}

impl PackedInt64Array {
    fn from_opaque(opaque: sys::types::OpaquePackedInt64Array) -> Self {
        Self { opaque }
    }

    pub fn new() -> Self {
        unsafe {
            Self::from_sys_init(|array_ptr| {
                interface_fn!(packed_int64_array_create)(array_ptr);
            })
        }
    }

    pub fn from_slice(values: &[i64]) -> Self {
        let mut array = Self::new();
        array.resize(values.len());

        if !values.is_empty() {
            unsafe {
                let dst = interface_fn!(packed_int64_array_ptr)(array.sys_mut());
                std::ptr::copy_nonoverlapping(values.as_ptr(), dst, values.len());
            }
        }

        array
    }

    pub fn len(&self) -> usize {
        let len = unsafe { interface_fn!(packed_int64_array_size)(self.sys()) };

        sys::u32_to_usize(len as u32)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn resize(&mut self, len: usize) {
        unsafe {
            interface_fn!(packed_int64_array_resize)(self.sys_mut(), len as sys::GdextInt);
        }
    }

    pub fn to_vec(&self) -> Vec<i64> {
        let len = self.len();
        if len == 0 {
            return Vec::new();
        }

        unsafe {
            let src = interface_fn!(packed_int64_array_ptr)(self.sys() as sys::GdextTypePtr);
            std::slice::from_raw_parts(src, len).to_vec()
        }
    }

    fn sys_mut(&mut self) -> sys::GdextTypePtr {
        self.sys() as sys::GdextTypePtr
    }
}

impl Default for PackedInt64Array {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for PackedInt64Array {
    fn drop(&mut self) {
        unsafe {
            interface_fn!(packed_int64_array_destroy)(self.sys_mut());
        }
    }
}

// SAFETY: the engine representation is the opaque handle stored in `self.opaque`.
unsafe impl GdextFfi for PackedInt64Array {
    ffi_methods! { type sys::GdextTypePtr = *mut Opaque; .. }
}

impl fmt::Debug for PackedInt64Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PackedInt64Array({:?})", self.to_vec())
    }
}
