/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::marker::PhantomData;

use crate::builtin::StringName;
use crate::obj::{EngineClass, Inherits, Memory, ObjectArg};
use crate::sys::{self, interface_fn, GdextFfi};

/// Owning handle to an engine object of class `T`.
///
/// Exactly one owner is responsible for releasing a given handle: a `Gd` value (for
/// ref-counted classes, via drop), an arena it was adopted into, or the engine itself.
/// Which constructor applies for a returned handle is encoded per method by the generated
/// wrapper, according to the method's documented ownership mode.
pub struct Gd<T: EngineClass> {
    obj: sys::GdextObjectPtr,
    _marker: PhantomData<*const T>,
}

impl<T: EngineClass> Gd<T> {
    /// Constructs a fresh object of class `T`; the host owns the new instance.
    ///
    /// # Panics
    /// If the engine does not know class `T`, which indicates a mismatch between the
    /// generated layer and the running engine.
    pub fn new() -> Self {
        let class_name = StringName::from(T::CLASS_NAME);

        let obj = unsafe {
            interface_fn!(classdb_construct_object)(
                class_name.sys() as sys::GdextConstStringNamePtr
            )
        };

        if obj.is_null() {
            panic!("engine failed to construct object of class {}", T::CLASS_NAME);
        }

        // Ref-counted classes start with refcount 1, owned by this wrapper.
        Self {
            obj,
            _marker: PhantomData,
        }
    }

    /// Takes ownership of a handle whose reference the engine has handed over
    /// ("transferred" mode). The refcount is **not** incremented.
    ///
    /// # Safety
    /// `obj` must be a live object of class `T` (or a subclass), and the engine must have
    /// relinquished one reference to it — taking ownership twice double-frees.
    pub unsafe fn from_transferred(obj: sys::GdextObjectPtr) -> Self {
        debug_assert!(!obj.is_null(), "transferred null object handle");

        Self {
            obj,
            _marker: PhantomData,
        }
    }

    /// Shares a ref-counted handle: increments the refcount and owns the new reference.
    ///
    /// # Safety
    /// `obj` must be a live object of a ref-counted class `T` (or a subclass).
    pub unsafe fn from_shared(obj: sys::GdextObjectPtr) -> Self {
        debug_assert!(!obj.is_null(), "shared null object handle");
        debug_assert!(
            T::MEMORY == Memory::RefCounted,
            "from_shared() requires a ref-counted class"
        );

        interface_fn!(object_reference)(obj);

        Self {
            obj,
            _marker: PhantomData,
        }
    }

    /// The raw handle, for use as the `self` of bound method calls.
    pub fn obj_sys(&self) -> sys::GdextObjectPtr {
        self.obj
    }

    /// Borrows this handle for the duration of a call (the engine does not take
    /// ownership).
    pub fn as_arg(&self) -> ObjectArg {
        ObjectArg(self.obj)
    }

    /// Hands ownership of this handle to the engine (e.g. a `set_popup`-style parameter
    /// where the callee keeps the object). No release happens on the host side anymore.
    pub fn pass_transferred(self) -> ObjectArg {
        let arg = ObjectArg(self.obj);
        std::mem::forget(self);
        arg
    }

    /// Moves this handle to one of its base classes. Same object, same ownership.
    pub fn upcast<Base>(self) -> Gd<Base>
    where
        T: Inherits<Base>,
        Base: EngineClass,
    {
        let obj = self.obj;
        std::mem::forget(self);

        Gd {
            obj,
            _marker: PhantomData,
        }
    }

    /// Destroys the object now.
    ///
    /// For manually managed classes this is the explicit release path (the alternative is
    /// adopting the handle into an arena).
    pub fn free(self) {
        debug_assert!(
            T::MEMORY == Memory::Manual,
            "free() is for manually managed classes; ref-counted objects are released by drop"
        );

        unsafe {
            interface_fn!(object_destroy)(self.obj);
        }
        std::mem::forget(self);
    }
}

impl<T: EngineClass> Drop for Gd<T> {
    fn drop(&mut self) {
        // Manually managed objects are not touched: the scene, an arena, or free() owns
        // their release.
        if T::MEMORY == Memory::RefCounted {
            unsafe { release_refcounted(self.obj) };
        }
    }
}

impl<T: EngineClass> fmt::Debug for Gd<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gd<{}>({:?})", T::CLASS_NAME, self.obj)
    }
}

/// Releases one reference; destroys the object if it was the last.
///
/// # Safety
/// `obj` must be a live ref-counted object, and the caller must own the reference being
/// released.
pub(crate) unsafe fn release_refcounted(obj: sys::GdextObjectPtr) {
    if sys::sys_to_bool(interface_fn!(object_unreference)(obj)) {
        interface_fn!(object_destroy)(obj);
    }
}
