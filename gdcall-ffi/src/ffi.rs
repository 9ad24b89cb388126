/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate as sys;

/// Types that can directly and fully represent some engine type.
///
/// Adds methods to convert from and to engine FFI pointers.
/// See [`crate::ffi_methods`] for ergonomic implementation.
///
/// # Safety
///
/// Implementors guarantee that `Self` has exactly the byte representation the engine
/// expects for the corresponding engine type, and that [`from_sys`](GdextFfi::from_sys) /
/// [`write_sys`](GdextFfi::write_sys) read/write exactly that representation.
pub unsafe trait GdextFfi: Sized {
    /// Construct from an engine-side value pointer.
    ///
    /// # Safety
    /// `ptr` must be a valid _type ptr_: it must follow the engine's convention to encode
    /// `Self`. Ownership of any engine-side memory behind the value transfers to the result.
    unsafe fn from_sys(ptr: sys::GdextConstTypePtr) -> Self;

    /// Construct uninitialized storage, then let `init_fn` initialize it.
    ///
    /// Used for return slots and for engine functions that construct into a destination
    /// pointer.
    ///
    /// # Safety
    /// `init_fn` must fully initialize the value behind the pointer it receives.
    unsafe fn from_sys_init(init_fn: impl FnOnce(sys::GdextUninitializedTypePtr)) -> Self;

    /// Pointer to this value's engine representation.
    ///
    /// Only valid as long as `self` lives and is not moved.
    fn sys(&self) -> sys::GdextConstTypePtr;

    /// Copy this value's engine representation into `dst`, e.g. a call-frame slot.
    ///
    /// This is a bitwise copy; it neither consumes `self` nor touches refcounts. The FFI
    /// call contract governs who owns the bytes afterwards.
    ///
    /// # Safety
    /// `dst` must be valid for writes of `size_of::<Self>()` bytes.
    unsafe fn write_sys(&self, dst: sys::GdextTypePtr) {
        std::ptr::copy_nonoverlapping(
            self.sys() as *const u8,
            dst as *mut u8,
            std::mem::size_of::<Self>(),
        );
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Macro to choose a certain implementation of the `GdextFfi` methods.

/// Provides "sys" style methods for FFI integration with the engine.
/// The generated implementations follow one of two patterns:
///
/// * `*mut Self`<br>
///   For types implemented with standard Rust fields whose layout _is_ the engine layout
///   (scalars, geometry types). Reading an argument is a dereference; the address of `Self`
///   is the sys pointer.
///
/// * `*mut Opaque`<br>
///   For types backed by an `opaque` field holding engine-managed storage (strings, arrays).
///   Expects a `from_opaque()` constructor and an `opaque` field; the **address of** the
///   `opaque` field is the sys pointer.
#[macro_export]
macro_rules! ffi_methods {
    ( type $Ptr:ty = *mut Self; .. ) => {
        unsafe fn from_sys(ptr: $crate::GdextConstTypePtr) -> Self {
            std::ptr::read(ptr as *const Self)
        }

        unsafe fn from_sys_init(init_fn: impl FnOnce($crate::GdextUninitializedTypePtr)) -> Self {
            let mut raw = std::mem::MaybeUninit::<Self>::uninit();
            init_fn(raw.as_mut_ptr() as $Ptr);

            raw.assume_init()
        }

        fn sys(&self) -> $crate::GdextConstTypePtr {
            self as *const Self as $crate::GdextConstTypePtr
        }
    };

    ( type $Ptr:ty = *mut Opaque; .. ) => {
        unsafe fn from_sys(ptr: $crate::GdextConstTypePtr) -> Self {
            let opaque = std::ptr::read(ptr as *const _);
            Self::from_opaque(opaque)
        }

        unsafe fn from_sys_init(init_fn: impl FnOnce($crate::GdextUninitializedTypePtr)) -> Self {
            let mut raw = std::mem::MaybeUninit::uninit();
            init_fn(raw.as_mut_ptr() as $Ptr);

            Self::from_opaque(raw.assume_init())
        }

        fn sys(&self) -> $crate::GdextConstTypePtr {
            &self.opaque as *const _ as $crate::GdextConstTypePtr
        }
    };
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Implementations for scalars (needs to be in this crate due to orphan rule)

mod scalars {
    use super::GdextFfi;
    use crate as sys;

    macro_rules! impl_ffi_scalar {
        ($T:ty) => {
            // SAFETY: the engine represents this type as `Self`, so `*mut Self` is sound.
            unsafe impl GdextFfi for $T {
                ffi_methods! { type sys::GdextTypePtr = *mut Self; .. }
            }
        };
    }

    impl_ffi_scalar!(bool);

    impl_ffi_scalar!(i8);
    impl_ffi_scalar!(i16);
    impl_ffi_scalar!(i32);
    impl_ffi_scalar!(i64);

    impl_ffi_scalar!(u8);
    impl_ffi_scalar!(u16);
    impl_ffi_scalar!(u32);
    impl_ffi_scalar!(u64);

    impl_ffi_scalar!(f32);
    impl_ffi_scalar!(f64);

    // SAFETY: zero-sized; nothing is read or written.
    unsafe impl GdextFfi for () {
        unsafe fn from_sys(_ptr: sys::GdextConstTypePtr) -> Self {
            // Do nothing.
        }

        unsafe fn from_sys_init(_init_fn: impl FnOnce(sys::GdextUninitializedTypePtr)) -> Self {
            // Do nothing.
        }

        fn sys(&self) -> sys::GdextConstTypePtr {
            // ZST dummy pointer.
            self as *const _ as sys::GdextConstTypePtr
        }

        unsafe fn write_sys(&self, _dst: sys::GdextTypePtr) {
            // Do nothing.
        }
    }
}
