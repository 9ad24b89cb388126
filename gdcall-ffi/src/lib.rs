/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Low-level bindings to the engine's C core API.
//!
//! This crate owns everything that touches the raw ABI: pointer aliases and the interface
//! function table, opaque value storage, the late-init global binding, and the eagerly
//! resolved method-bind registry. Higher-level marshaling lives in `gdcall-core`.

#![cfg_attr(test, allow(unused))]

mod binding;
mod conv;
mod ffi;
mod interface;
mod method_table;
mod opaque;
mod string_cache;

pub use binding::{
    get_interface, initialize_binding, is_initialized, method_table, GdcallBinding,
};
pub use conv::{bool_to_sys, sys_to_bool, u32_to_usize, SYS_FALSE, SYS_TRUE};
pub use ffi::GdextFfi;
pub use interface::*;
pub use method_table::{
    ClassMethodBind, ClassMethodTable, MethodEntry, MethodManifest, ResolveError,
};
pub use opaque::{types, Opaque};
pub use string_cache::StringCache;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Macros

/// Verifies a condition at compile time.
#[macro_export]
macro_rules! static_assert {
    ($cond:expr) => {
        const _: () = assert!($cond);
    };
    ($cond:expr, $msg:literal) => {
        const _: () = assert!($cond, $msg);
    };
}

/// Fetch an interface function that initialization has validated to be present.
#[macro_export]
#[doc(hidden)]
macro_rules! interface_fn {
    ($name:ident) => {{
        // SAFETY: only used after initialization, which validates presence of all
        // required interface functions.
        unsafe { $crate::get_interface().$name.unwrap_unchecked() }
    }};
}

/// Verbose bridge tracing.
#[cfg(feature = "debug-log")]
#[macro_export]
macro_rules! out {
    ()                          => (eprintln!());
    ($fmt:literal)              => (eprintln!($fmt));
    ($fmt:literal, $($arg:tt)*) => (eprintln!($fmt, $($arg)*));
}

/// Verbose bridge tracing.
#[cfg(not(feature = "debug-log"))]
#[macro_export]
macro_rules! out {
    ()                          => ({});
    ($fmt:literal)              => ({ use std::io::{sink, Write}; let _ = write!(sink(), $fmt); });
    ($fmt:literal, $($arg:tt)*) => ({ use std::io::{sink, Write}; let _ = write!(sink(), $fmt, $($arg)*); });
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Utility functions

/// Returns a C `const char*` for a null-terminated byte string.
#[inline]
pub fn c_str(s: &[u8]) -> *const std::ffi::c_char {
    // Ensure null-terminated
    debug_assert!(!s.is_empty() && s[s.len() - 1] == 0);

    s.as_ptr() as *const std::ffi::c_char
}
