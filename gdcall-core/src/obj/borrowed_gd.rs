/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::marker::PhantomData;

use crate::obj::{EngineClass, Gd, ObjectArg};
use crate::sys;

/// Non-owning handle to an engine object of class `T`, valid as long as the parent that
/// produced it ("lifetime-bound" mode).
///
/// Typical case: an internal child the parent owns on the engine side, like the scroll
/// bar of a text-edit widget. The handle is never released through this value; the borrow
/// of the parent wrapper keeps host code from outliving the parent's ownership.
pub struct BorrowedGd<'a, T: EngineClass> {
    obj: sys::GdextObjectPtr,
    _parent: PhantomData<&'a ()>,
    _marker: PhantomData<*const T>,
}

impl<'a, T: EngineClass> BorrowedGd<'a, T> {
    /// Binds a returned handle to the parent wrapper that produced it.
    ///
    /// # Safety
    /// `obj` must be a live object of class `T` (or a subclass) whose engine-side
    /// lifetime is governed by `parent`'s object.
    pub unsafe fn lifetime_bound<Parent>(parent: &'a Gd<Parent>, obj: sys::GdextObjectPtr) -> Self
    where
        Parent: EngineClass,
    {
        debug_assert!(!obj.is_null(), "lifetime-bound null object handle");
        let _ = parent;

        Self {
            obj,
            _parent: PhantomData,
            _marker: PhantomData,
        }
    }

    /// The raw handle, for use as the `self` of bound method calls.
    pub fn obj_sys(&self) -> sys::GdextObjectPtr {
        self.obj
    }

    /// Borrows this handle for the duration of a call.
    pub fn as_arg(&self) -> ObjectArg {
        ObjectArg(self.obj)
    }
}

impl<T: EngineClass> fmt::Debug for BorrowedGd<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BorrowedGd<{}>({:?})", T::CLASS_NAME, self.obj)
    }
}
