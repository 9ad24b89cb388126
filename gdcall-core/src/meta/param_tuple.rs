/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::meta::CallFrame;
use crate::sys::{self, GdextFfi};

/// Tuples of argument values for out-calls (host → engine).
///
/// Implemented for tuples of arity 0..=8; the generated layer never needs more explicit
/// parameters (varargs were a feature of the dropped variant-call convention).
pub trait OutParamTuple: Sized {
    const LEN: usize;

    /// Builds the call frame for these arguments, runs `dispatch` with the frame's
    /// argument-array and return-slot pointers, and reads back the return value.
    ///
    /// `self` is kept alive across the dispatch, so handle-backed argument values stay
    /// valid while the engine reads their slots.
    ///
    /// # Safety
    /// `dispatch` must treat the two pointers according to the engine's pointer-call
    /// convention for a method taking `Self` and returning `Ret`.
    unsafe fn with_frame<Ret: GdextFfi>(
        &self,
        dispatch: impl FnOnce(*const sys::GdextConstTypePtr, sys::GdextTypePtr),
    ) -> Ret;
}

macro_rules! impl_out_param_tuple {
    ($Len:literal; $($P:ident : $n:tt),*) => {
        impl<$($P: GdextFfi),*> OutParamTuple for ($($P,)*) {
            const LEN: usize = $Len;

            unsafe fn with_frame<Ret: GdextFfi>(
                &self,
                dispatch: impl FnOnce(*const sys::GdextConstTypePtr, sys::GdextTypePtr),
            ) -> Ret {
                let mut frame = CallFrame::<$Len>::new();
                $( frame.arg(&self.$n); )*

                let ret_ptr = frame.ret_ptr();
                dispatch(frame.args_ptr(), ret_ptr);

                frame.ret::<Ret>()
            }
        }
    };
}

impl_out_param_tuple!(0;);
impl_out_param_tuple!(1; P0: 0);
impl_out_param_tuple!(2; P0: 0, P1: 1);
impl_out_param_tuple!(3; P0: 0, P1: 1, P2: 2);
impl_out_param_tuple!(4; P0: 0, P1: 1, P2: 2, P3: 3);
impl_out_param_tuple!(5; P0: 0, P1: 1, P2: 2, P3: 3, P4: 4);
impl_out_param_tuple!(6; P0: 0, P1: 1, P2: 2, P3: 3, P4: 4, P5: 5);
impl_out_param_tuple!(7; P0: 0, P1: 1, P2: 2, P3: 3, P4: 4, P5: 5, P6: 6);
impl_out_param_tuple!(8; P0: 0, P1: 1, P2: 2, P3: 3, P4: 4, P5: 5, P6: 6, P7: 7);
