/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::collections::HashMap;
use std::mem::MaybeUninit;
use std::ptr;

use crate as sys;

/// Caches engine `StringName` instances during method-table resolution.
pub struct StringCache<'a> {
    // Box is needed for element stability (new insertions don't move the object, i.e.
    // pointers to it remain valid).
    instances_by_str: HashMap<&'static str, Box<sys::types::OpaqueStringName>>,
    interface: &'a sys::GdextInterface,
}

impl<'a> StringCache<'a> {
    /// # Safety
    /// `interface` must carry non-null `string_name_new_with_utf8_chars_and_len` and
    /// `string_name_destroy` entries; the caller validates this before constructing the cache.
    pub unsafe fn new(interface: &'a sys::GdextInterface) -> Self {
        Self {
            instances_by_str: HashMap::new(),
            interface,
        }
    }

    /// Get a pointer to a `StringName`. Reuses cached instances; only deallocates on
    /// destruction of this cache.
    pub fn fetch(&mut self, key: &'static str) -> sys::GdextConstStringNamePtr {
        assert!(key.is_ascii(), "string is not ASCII: {key}");

        // Already cached.
        if let Some(opaque_box) = self.instances_by_str.get(key) {
            return box_to_sname_ptr(opaque_box);
        }

        let mut sname = MaybeUninit::<sys::types::OpaqueStringName>::uninit();

        unsafe {
            let string_name_new = self
                .interface
                .string_name_new_with_utf8_chars_and_len
                .unwrap_unchecked();

            string_name_new(
                sname.as_mut_ptr() as sys::GdextUninitializedStringNamePtr,
                key.as_ptr() as *const std::os::raw::c_char,
                key.len() as sys::GdextInt,
            );
        }

        let opaque = unsafe { sname.assume_init() };

        let opaque_box = Box::new(opaque);
        let sname_ptr = box_to_sname_ptr(&opaque_box);

        self.instances_by_str.insert(key, opaque_box);
        sname_ptr
    }
}

/// Destroy all string names.
impl Drop for StringCache<'_> {
    fn drop(&mut self) {
        unsafe {
            let string_name_destroy = self.interface.string_name_destroy.unwrap_unchecked();

            for (_, mut opaque_box) in self.instances_by_str.drain() {
                let opaque_ptr = ptr::addr_of_mut!(*opaque_box);
                string_name_destroy(opaque_ptr as sys::GdextStringNamePtr);
            }
        }
    }
}

fn box_to_sname_ptr(boxed: &Box<sys::types::OpaqueStringName>) -> sys::GdextConstStringNamePtr {
    let opaque_ptr: *const sys::types::OpaqueStringName = &**boxed;
    opaque_ptr as sys::GdextConstStringNamePtr
}
