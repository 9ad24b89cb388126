/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! **gdcall** is the call-frame FFI bridge underneath generated Rust bindings for a
//! Godot-style engine.
//!
//! Every bound method call is the same three steps:
//!
//! 1. **Marshal** — arguments are written into a [`meta::CallFrame`], one fixed-width
//!    slot per declared parameter, in declared order.
//! 2. **Dispatch** — [`meta::Signature`] invokes the method bind resolved at startup
//!    with the object handle, the argument array and the return slot.
//! 3. **Unmarshal** — the return slot is read back; for handle-returning methods, the
//!    generated wrapper classifies ownership via [`obj::Gd::from_transferred`],
//!    [`obj::Gd::from_shared`] or [`obj::BorrowedGd::lifetime_bound`].
//!
//! The bridge trusts its callers: there is no runtime type checking at the FFI boundary,
//! no liveness checks and no error channel across it. What can fail by configuration —
//! interface completeness, method-bind resolution — fails once, inside
//! [`init::initialize`], before any call is attempted.
//!
//! The per-class wrapper types calling into this crate are emitted by a code generator
//! from the engine's API manifest; they are not part of this repository.

pub use gdcall_core::{builtin, init, log, meta, obj, sys};

// Macros are exported at the `gdcall_core` root; mirror them here.
pub use gdcall_core::{gd_error, gd_print, gd_warn};

/// Commonly used symbols, for glob import in generated code and applications.
pub mod prelude {
    pub use super::builtin::{
        Color, GString, PackedInt64Array, Real, Rect2, StringName, Vector2, Vector3,
    };
    pub use super::init::{initialize, InitError};
    pub use super::meta::{CallFrame, Signature};
    pub use super::obj::{BorrowedGd, EngineClass, Gd, Inherits, Lifetime, Memory, ObjectArg};
    pub use super::{gd_error, gd_print, gd_warn};
}
