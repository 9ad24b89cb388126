/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::sys::{self, ffi_methods, GdextFfi};

/// An object handle in its frame-slot representation.
///
/// Used in both directions: as the slot value when an object is passed as an argument,
/// and as the raw result of handle-returning calls, before ownership classification
/// turns it into a [`super::Gd`] or [`super::BorrowedGd`].
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ObjectArg(pub(crate) sys::GdextObjectPtr);

impl ObjectArg {
    pub fn object_sys(self) -> sys::GdextObjectPtr {
        self.0
    }

    pub fn is_null(self) -> bool {
        self.0.is_null()
    }
}

// SAFETY: the engine represents an object argument/return as one pointer, same as `Self`.
unsafe impl GdextFfi for ObjectArg {
    ffi_methods! { type sys::GdextTypePtr = *mut Self; .. }
}
