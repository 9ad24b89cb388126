/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Object handles, ownership classification and the lifetime arena.

mod borrowed_gd;
mod gd;
mod lifetime;
mod object_arg;
mod traits;

pub use borrowed_gd::BorrowedGd;
pub use gd::Gd;
pub use lifetime::{Lifetime, Registered};
pub use object_arg::ObjectArg;
pub use traits::{EngineClass, Inherits, Memory};
