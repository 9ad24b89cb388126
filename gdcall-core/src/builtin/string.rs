/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use crate::sys::{self, ffi_methods, interface_fn, GdextFfi};

/// The engine's string type.
///
/// The host value only holds the engine's opaque handle; the character data lives in
/// engine-managed memory and is released when this value drops (or when the arena it was
/// registered to closes).
#[repr(C)]
pub struct GString {
    opaque: sys::types::OpaqueString,
}

impl GString {
    fn from_opaque(opaque: sys::types::OpaqueString) -> Self {
        Self { opaque }
    }

    pub fn new() -> Self {
        Self::from("")
    }

    /// Number of bytes in the UTF-8 encoding, without terminator.
    pub fn len_utf8(&self) -> usize {
        let len =
            unsafe { interface_fn!(string_to_utf8_chars)(self.sys(), std::ptr::null_mut(), 0) };

        sys::u32_to_usize(len as u32)
    }
}

impl Default for GString {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for GString {
    fn from(s: &str) -> Self {
        let bytes = s.as_bytes();

        unsafe {
            Self::from_sys_init(|string_ptr| {
                interface_fn!(string_new_with_utf8_chars_and_len)(
                    string_ptr,
                    bytes.as_ptr() as *const std::os::raw::c_char,
                    bytes.len() as sys::GdextInt,
                );
            })
        }
    }
}

impl From<String> for GString {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl fmt::Display for GString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = unsafe {
            let len = interface_fn!(string_to_utf8_chars)(self.sys(), std::ptr::null_mut(), 0);
            let mut buf = vec![0u8; sys::u32_to_usize(len as u32)];

            interface_fn!(string_to_utf8_chars)(
                self.sys(),
                buf.as_mut_ptr() as *mut std::os::raw::c_char,
                len,
            );

            // The engine guarantees UTF-8 output.
            String::from_utf8_unchecked(buf)
        };

        f.write_str(s.as_str())
    }
}

impl fmt::Debug for GString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GString(\"{self}\")")
    }
}

impl Drop for GString {
    fn drop(&mut self) {
        unsafe {
            interface_fn!(string_destroy)(self.sys() as sys::GdextTypePtr);
        }
    }
}

// SAFETY: the engine representation is the opaque handle stored in `self.opaque`.
unsafe impl GdextFfi for GString {
    ffi_methods! { type sys::GdextTypePtr = *mut Opaque; .. }
}
