/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::sys::{self, ffi_methods, interface_fn, GdextFfi};

/// Interned engine string, used by the engine for identifiers (class names, method names).
///
/// Unlike the startup-time `sys::StringCache`, values of this type are created ad hoc and
/// released when dropped.
#[repr(C)]
pub struct StringName {
    opaque: sys::types::OpaqueStringName,
}

impl StringName {
    fn from_opaque(opaque: sys::types::OpaqueStringName) -> Self {
        Self { opaque }
    }
}

impl From<&str> for StringName {
    fn from(s: &str) -> Self {
        let bytes = s.as_bytes();

        unsafe {
            Self::from_sys_init(|sname_ptr| {
                interface_fn!(string_name_new_with_utf8_chars_and_len)(
                    sname_ptr,
                    bytes.as_ptr() as *const std::os::raw::c_char,
                    bytes.len() as sys::GdextInt,
                );
            })
        }
    }
}

impl Drop for StringName {
    fn drop(&mut self) {
        unsafe {
            interface_fn!(string_name_destroy)(self.sys() as sys::GdextStringNamePtr);
        }
    }
}

// SAFETY: the engine representation is the opaque handle stored in `self.opaque`.
unsafe impl GdextFfi for StringName {
    ffi_methods! { type sys::GdextTypePtr = *mut Opaque; .. }
}
