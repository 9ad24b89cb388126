/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! One-time bridge initialization.
//!
//! Everything that can fail by configuration fails here, before the first call is
//! attempted: interface completeness and method-bind resolution. After a successful
//! return, dispatch runs with zero checks.

use std::fmt;

use crate::sys::{self, out};

/// Validates the engine interface, eagerly resolves the method-bind table for `manifest`,
/// and installs the process-wide binding.
///
/// # Safety
/// `interface` must be a valid pointer to the engine's interface struct, handed in by a
/// live engine; its function pointers are invoked during resolution.
pub unsafe fn initialize(
    interface: *const sys::GdextInterface,
    manifest: &sys::MethodManifest,
) -> Result<(), InitError> {
    let interface = *interface;

    validate_interface(&interface)?;

    let method_table =
        sys::ClassMethodTable::resolve(&interface, manifest).map_err(InitError::Resolve)?;

    out!(
        "gdcall: initialized, {} method bind(s) resolved",
        method_table.len()
    );

    sys::initialize_binding(sys::GdcallBinding::new(interface, method_table))
        .ok_or(InitError::AlreadyInitialized)
}

macro_rules! require_fn {
    ($interface:ident, $name:ident) => {
        if $interface.$name.is_none() {
            return Err(InitError::MissingInterfaceFunction(stringify!($name)));
        }
    };
}

fn validate_interface(interface: &sys::GdextInterface) -> Result<(), InitError> {
    require_fn!(interface, classdb_construct_object);
    require_fn!(interface, object_destroy);
    require_fn!(interface, object_reference);
    require_fn!(interface, object_unreference);
    require_fn!(interface, classdb_get_method_bind);
    require_fn!(interface, object_method_bind_ptrcall);
    require_fn!(interface, string_new_with_utf8_chars_and_len);
    require_fn!(interface, string_to_utf8_chars);
    require_fn!(interface, string_destroy);
    require_fn!(interface, string_name_new_with_utf8_chars_and_len);
    require_fn!(interface, string_name_destroy);
    require_fn!(interface, packed_int64_array_create);
    require_fn!(interface, packed_int64_array_destroy);
    require_fn!(interface, packed_int64_array_resize);
    require_fn!(interface, packed_int64_array_size);
    require_fn!(interface, packed_int64_array_ptr);
    require_fn!(interface, print_message);
    require_fn!(interface, print_warning);
    require_fn!(interface, print_error);

    Ok(())
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Errors

/// Fatal configuration error during bridge initialization.
#[derive(Debug)]
pub enum InitError {
    /// [`initialize`] was called twice in the same process.
    AlreadyInitialized,

    /// The engine interface lacks a required function; the engine is too old or the
    /// interface struct layouts disagree.
    MissingInterfaceFunction(&'static str),

    /// Method-bind resolution failed; see the inner error for every missing entry.
    Resolve(sys::ResolveError),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyInitialized => write!(f, "bridge was already initialized"),
            Self::MissingInterfaceFunction(name) => {
                write!(f, "engine interface function `{name}` is not available")
            }
            Self::Resolve(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for InitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Resolve(err) => Some(err),
            _ => None,
        }
    }
}
