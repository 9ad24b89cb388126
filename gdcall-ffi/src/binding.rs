/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Late-init global binding: engine interface + resolved method table.
//!
//! Populated exactly once during initialization; read-only afterwards. The `OnceLock`
//! write is the one-time happens-before barrier that makes subsequent lock-free reads
//! sound from any thread.

use std::sync::OnceLock;

use crate::method_table::ClassMethodTable;
use crate::GdextInterface;

pub struct GdcallBinding {
    pub(crate) interface: GdextInterface,
    pub(crate) method_table: ClassMethodTable,
}

impl GdcallBinding {
    pub fn new(interface: GdextInterface, method_table: ClassMethodTable) -> Self {
        Self {
            interface,
            method_table,
        }
    }
}

// SAFETY: `GdextInterface` contains raw pointers (`version_string`, function pointers), which
// makes it `!Send`/`!Sync` by default. The interface is written once behind the `OnceLock`
// barrier and never mutated afterwards; the pointers themselves point into the engine binary
// and are valid for the process lifetime. Any call *through* them requires `unsafe` anyway,
// which passes the thread-safety responsibility to the caller.
unsafe impl Send for GdcallBinding {}
// SAFETY: see `Send` impl.
unsafe impl Sync for GdcallBinding {}

// ----------------------------------------------------------------------------------------------------------------------------------------------

pub(crate) struct BindingStorage;

impl BindingStorage {
    fn cell() -> &'static OnceLock<GdcallBinding> {
        static BINDING: OnceLock<GdcallBinding> = OnceLock::new();

        &BINDING
    }

    /// Initialize the binding storage; must happen before any other access.
    ///
    /// Returns `None` if the binding was already initialized.
    #[must_use]
    pub fn initialize(binding: GdcallBinding) -> Option<()> {
        Self::cell().set(binding).ok()
    }

    /// Get the binding from the binding storage.
    ///
    /// # Safety
    /// The binding must be initialized.
    #[inline(always)]
    pub unsafe fn get_binding_unchecked() -> &'static GdcallBinding {
        let cell = Self::cell();

        if cfg!(debug_assertions) {
            cell.get().expect(
                "engine not available; make sure you are not calling it from unit/doc tests",
            )
        } else {
            // SAFETY: per precondition, the binding is initialized.
            unsafe { cell.get().unwrap_unchecked() }
        }
    }

    pub fn is_initialized() -> bool {
        Self::cell().get().is_some()
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Public API

/// Initializes the global binding.
///
/// Most other functions in this crate rely on this having been called first as a safety
/// condition. Returns `None` if a binding was already installed (initialization happens
/// at most once per process; there is no hot-reload path in this bridge).
#[must_use]
pub fn initialize_binding(binding: GdcallBinding) -> Option<()> {
    BindingStorage::initialize(binding)
}

/// # Safety
///
/// The binding must have been initialized with [`initialize_binding`] before calling this.
#[inline(always)]
pub unsafe fn get_interface() -> &'static GdextInterface {
    &BindingStorage::get_binding_unchecked().interface
}

/// # Safety
///
/// The binding must have been initialized with [`initialize_binding`] before calling this.
#[inline(always)]
pub unsafe fn method_table() -> &'static ClassMethodTable {
    &BindingStorage::get_binding_unchecked().method_table
}

#[inline]
pub fn is_initialized() -> bool {
    BindingStorage::is_initialized()
}
