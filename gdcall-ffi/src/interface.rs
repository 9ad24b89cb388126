/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Hand-transcribed engine ABI: pointer aliases and the C function-pointer table.
//!
//! The engine hands a `*const GdextInterface` to the host at startup. All fields are
//! `Option`-wrapped function pointers; [`crate::initialize_binding`]-time validation
//! guarantees that every required entry is present, so later accesses through
//! [`crate::interface_fn!`] can skip the `Option` check.

use std::os::raw::{c_char, c_void};

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Scalar and pointer aliases

pub type GdextInt = i64;
pub type GdextBool = u8;

/// Opaque reference to an object living in the engine's memory. Never dereferenced by host code.
pub type GdextObjectPtr = *mut c_void;

/// Pointer to an engine value (argument slot, return slot, or builtin storage), mutable access.
pub type GdextTypePtr = *mut c_void;

/// Pointer to an engine value, shared access.
pub type GdextConstTypePtr = *const c_void;

/// Pointer to engine value storage that has not been initialized yet; the callee constructs into it.
pub type GdextUninitializedTypePtr = *mut c_void;

pub type GdextStringNamePtr = *mut c_void;
pub type GdextConstStringNamePtr = *const c_void;
pub type GdextUninitializedStringNamePtr = *mut c_void;

/// Resolved, cached pointer to a native method. Obtained once via `classdb_get_method_bind`.
pub type GdextMethodBindPtr = *mut c_void;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Interface struct

/// The engine's C interface, copied by value at initialization.
///
/// Layout mirrors the engine header; fields must not be reordered.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct GdextInterface {
    pub version_string: *const c_char,

    // Object lifecycle.
    pub classdb_construct_object: Option<unsafe extern "C" fn(GdextConstStringNamePtr) -> GdextObjectPtr>,
    pub object_destroy: Option<unsafe extern "C" fn(GdextObjectPtr)>,
    pub object_reference: Option<unsafe extern "C" fn(GdextObjectPtr)>,

    /// Decrements the refcount; returns true if this released the last reference,
    /// in which case the caller must `object_destroy` the object.
    pub object_unreference: Option<unsafe extern "C" fn(GdextObjectPtr) -> GdextBool>,

    // Method resolution + dispatch.
    pub classdb_get_method_bind: Option<
        unsafe extern "C" fn(
            GdextConstStringNamePtr,
            GdextConstStringNamePtr,
            GdextInt,
        ) -> GdextMethodBindPtr,
    >,
    pub object_method_bind_ptrcall: Option<
        unsafe extern "C" fn(
            GdextMethodBindPtr,
            GdextObjectPtr,
            *const GdextConstTypePtr,
            GdextTypePtr,
        ),
    >,

    // String conversion primitives.
    pub string_new_with_utf8_chars_and_len:
        Option<unsafe extern "C" fn(GdextUninitializedTypePtr, *const c_char, GdextInt)>,
    pub string_to_utf8_chars:
        Option<unsafe extern "C" fn(GdextConstTypePtr, *mut c_char, GdextInt) -> GdextInt>,
    pub string_destroy: Option<unsafe extern "C" fn(GdextTypePtr)>,

    pub string_name_new_with_utf8_chars_and_len:
        Option<unsafe extern "C" fn(GdextUninitializedStringNamePtr, *const c_char, GdextInt)>,
    pub string_name_destroy: Option<unsafe extern "C" fn(GdextStringNamePtr)>,

    // Packed array conversion primitives.
    pub packed_int64_array_create: Option<unsafe extern "C" fn(GdextUninitializedTypePtr)>,
    pub packed_int64_array_destroy: Option<unsafe extern "C" fn(GdextTypePtr)>,
    pub packed_int64_array_resize: Option<unsafe extern "C" fn(GdextTypePtr, GdextInt)>,
    pub packed_int64_array_size: Option<unsafe extern "C" fn(GdextConstTypePtr) -> GdextInt>,
    pub packed_int64_array_ptr: Option<unsafe extern "C" fn(GdextTypePtr) -> *mut i64>,

    // Engine-routed printing.
    pub print_message:
        Option<unsafe extern "C" fn(*const c_char, *const c_char, *const c_char, i32)>,
    pub print_warning:
        Option<unsafe extern "C" fn(*const c_char, *const c_char, *const c_char, i32)>,
    pub print_error:
        Option<unsafe extern "C" fn(*const c_char, *const c_char, *const c_char, i32)>,
}
