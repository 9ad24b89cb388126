/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Call frames, signatures and dispatch for out-calls.

mod call_frame;
mod param_tuple;
mod signature;

pub use call_frame::{CallFrame, SLOT_BYTES};
pub use param_tuple::OutParamTuple;
pub use signature::{CallContext, Signature};
