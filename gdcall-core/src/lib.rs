/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Core marshaling layer of the gdcall bridge.
//!
//! Every bound method call composes three steps: arguments are packed into a
//! [`meta::CallFrame`], the resolved method bind is invoked through
//! [`meta::Signature`], and the return slot is read back with ownership established
//! by the primitives in [`obj`]. Generated per-class wrappers are thin clients of
//! these pieces and live outside this repository.

pub mod builtin;
pub mod init;
pub mod meta;
pub mod obj;

pub mod log;

// Re-export sys crate under the conventional name.
pub use gdcall_ffi as sys;
