/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::sys::{self, GdextFfi};

/// Width of one frame slot.
///
/// Covers every frame-passable type including double-precision `Rect2` (32 bytes). The
/// engine reads only `size_of::<T>()` bytes through each argument pointer, so the unused
/// tail of a slot is invisible to the callee. Per-type fit is checked at compile time in
/// [`CallFrame::arg`].
pub const SLOT_BYTES: usize = 32;

#[repr(C, align(8))]
#[derive(Copy, Clone)]
struct Slot {
    bytes: [u8; SLOT_BYTES],
}

impl Slot {
    const ZERO: Self = Self {
        bytes: [0; SLOT_BYTES],
    };
}

/// Fixed-layout argument/return buffer for one pointer call.
///
/// Holds `N` argument slots written in declared order, the argument-pointer array the
/// engine's call convention expects, and one return slot. Slot count and slot contents
/// must exactly match the signature of the method bind being invoked; no runtime type
/// checking occurs (a mismatch is a defect in the generated wrapper, not a recoverable
/// condition).
pub struct CallFrame<const N: usize> {
    slots: [Slot; N],
    args: [sys::GdextConstTypePtr; N],
    ret: Slot,
    filled: usize,
}

impl<const N: usize> CallFrame<N> {
    pub fn new() -> Self {
        Self {
            slots: [Slot::ZERO; N],
            args: [std::ptr::null(); N],
            ret: Slot::ZERO,
            filled: 0,
        }
    }

    /// Writes the next argument slot with `value`'s engine representation.
    ///
    /// The value itself stays owned by the caller and must outlive the dispatch: for
    /// handle-backed types (strings, arrays, objects), the slot holds the handle bytes,
    /// not the engine-side memory.
    pub fn arg<T: GdextFfi>(&mut self, value: &T) {
        const {
            assert!(
                std::mem::size_of::<T>() <= SLOT_BYTES,
                "type does not fit into a call-frame slot"
            );
        }

        let index = self.filled;
        debug_assert!(index < N, "call frame arity exceeded");

        unsafe {
            value.write_sys(self.slots[index].bytes.as_mut_ptr() as sys::GdextTypePtr);
        }
        self.args[index] = self.slots[index].bytes.as_ptr() as sys::GdextConstTypePtr;
        self.filled = index + 1;
    }

    /// Pointer to the argument-pointer array, as expected by the engine's call convention.
    pub fn args_ptr(&self) -> *const sys::GdextConstTypePtr {
        debug_assert!(self.filled == N, "call frame not fully populated");

        self.args.as_ptr()
    }

    /// Pointer to the return slot; the callee constructs the return value into it.
    pub fn ret_ptr(&mut self) -> sys::GdextTypePtr {
        self.ret.bytes.as_mut_ptr() as sys::GdextTypePtr
    }

    /// Reads the return value out of the return slot.
    ///
    /// # Safety
    /// The dispatched call must have written a valid `R` into the return slot (or `R` must
    /// be `()`).
    pub unsafe fn ret<R: GdextFfi>(&self) -> R {
        const {
            assert!(
                std::mem::size_of::<R>() <= SLOT_BYTES,
                "return type does not fit into the call-frame return slot"
            );
        }

        R::from_sys(self.ret.bytes.as_ptr() as sys::GdextConstTypePtr)
    }

    /// Pointer to an already-written argument slot.
    pub fn slot_ptr(&self, index: usize) -> sys::GdextConstTypePtr {
        assert!(index < self.filled, "slot {index} has not been written");

        self.args[index]
    }
}

impl<const N: usize> Default for CallFrame<N> {
    fn default() -> Self {
        Self::new()
    }
}
