/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::marker::PhantomData;

use crate::meta::OutParamTuple;
use crate::sys::{self, interface_fn, out, GdextFfi};

/// A full signature for a bound method: explicit parameters and return type.
///
/// Out-calls only: calls going from host code to the engine, using the pointer-call
/// convention. Every generated wrapper funnels through one of the constructors below.
pub struct Signature<Params, Ret> {
    _p: PhantomData<Params>,
    _r: PhantomData<Ret>,
}

impl<Params, Ret> Signature<Params, Ret>
where
    Params: OutParamTuple,
    Ret: GdextFfi,
{
    /// Makes a pointer call to the engine for a class method.
    ///
    /// Synchronous and blocking: returns only after the native call completed and the
    /// return slot has been populated (or left untouched for void methods). There is no
    /// error channel across this boundary; calling through a destroyed object handle is
    /// undefined behavior, mirroring the engine's own contract.
    ///
    /// # Safety
    /// - `method_bind` must have been resolved for a method expecting exactly `Params`
    ///   and returning `Ret`.
    /// - `object_ptr` must refer to a live object of a class compatible with the bind.
    #[inline]
    pub unsafe fn out_class_ptrcall(
        method_bind: sys::ClassMethodBind,
        // Separate parameters to reduce tokens in generated class API.
        class_name: &'static str,
        method_name: &'static str,
        object_ptr: sys::GdextObjectPtr,
        args: Params,
    ) -> Ret {
        let call_ctx = CallContext::outbound(class_name, method_name);
        out!("out_class_ptrcall: {}", call_ctx);

        let class_fn = interface_fn!(object_method_bind_ptrcall);

        args.with_frame(|args_ptr, ret_ptr| {
            class_fn(method_bind.0, object_ptr, args_ptr, ret_ptr);
        })
    }

    /// Makes a pointer call to the engine for a static class method (no instance).
    ///
    /// # Safety
    /// `method_bind` must have been resolved for a static method expecting exactly
    /// `Params` and returning `Ret`.
    #[inline]
    pub unsafe fn out_class_ptrcall_static(
        method_bind: sys::ClassMethodBind,
        class_name: &'static str,
        method_name: &'static str,
        args: Params,
    ) -> Ret {
        let call_ctx = CallContext::outbound(class_name, method_name);
        out!("out_class_ptrcall_static: {}", call_ctx);

        let class_fn = interface_fn!(object_method_bind_ptrcall);

        args.with_frame(|args_ptr, ret_ptr| {
            class_fn(method_bind.0, std::ptr::null_mut(), args_ptr, ret_ptr);
        })
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

// Lazy Display, so we don't create tens of thousands of extra string literals.
pub struct CallContext<'a> {
    pub(crate) class_name: &'a str,
    pub(crate) function_name: &'a str,
}

impl<'a> CallContext<'a> {
    /// Outbound call from host code into the engine.
    pub const fn outbound(class_name: &'a str, function_name: &'a str) -> Self {
        Self {
            class_name,
            function_name,
        }
    }
}

impl fmt::Display for CallContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.class_name, self.function_name)
    }
}
