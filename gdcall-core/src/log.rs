/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Engine-routed print macros. Messages go through the engine's own output streams so
//! they land in the editor/console log like native prints.

#[macro_export]
macro_rules! gd_print {
    ($($args:tt),* $(,)?) => {
        unsafe {
            let msg = format!("{}\0", format_args!($($args,)*));

            $crate::sys::interface_fn!(print_message)(
                msg.as_bytes().as_ptr() as *const _,
                $crate::sys::c_str(b"<function unset>\0"),
                $crate::sys::c_str(concat!(file!(), "\0").as_bytes()),
                line!() as _,
            );
        }
    };
}

#[macro_export]
macro_rules! gd_warn {
    ($($args:tt),* $(,)?) => {
        unsafe {
            let msg = format!("{}\0", format_args!($($args,)*));

            $crate::sys::interface_fn!(print_warning)(
                msg.as_bytes().as_ptr() as *const _,
                $crate::sys::c_str(b"<function unset>\0"),
                $crate::sys::c_str(concat!(file!(), "\0").as_bytes()),
                line!() as _,
            );
        }
    };
}

#[macro_export]
macro_rules! gd_error {
    ($($args:tt),* $(,)?) => {
        unsafe {
            let msg = format!("{}\0", format_args!($($args,)*));

            $crate::sys::interface_fn!(print_error)(
                msg.as_bytes().as_ptr() as *const _,
                $crate::sys::c_str(b"<function unset>\0"),
                $crate::sys::c_str(concat!(file!(), "\0").as_bytes()),
                line!() as _,
            );
        }
    };
}

pub use crate::{gd_error, gd_print, gd_warn};
