/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::cell::RefCell;
use std::marker::PhantomData;

use crate::obj::gd::release_refcounted;
use crate::obj::{EngineClass, Gd, Memory};
use crate::sys::interface_fn;

type ReleaseFn = Box<dyn FnOnce()>;

/// Scoped arena that batches the release of engine values created within it.
///
/// Dropping the arena releases every registration that was not promoted, exactly once,
/// in reverse registration order — on all exit paths, early returns and panics included.
/// Intended to be owned by a single logical call chain on a single thread.
pub struct Lifetime {
    slots: RefCell<Vec<Option<ReleaseFn>>>,
    _not_send: PhantomData<*const u8>,
}

/// Token for one arena registration. Not copyable; promotion consumes it.
#[must_use]
pub struct Registered {
    index: usize,
}

impl Lifetime {
    pub fn new() -> Self {
        Self {
            slots: RefCell::new(Vec::new()),
            _not_send: PhantomData,
        }
    }

    /// Registers an arbitrary release action, run when this arena (or the arena a
    /// promotion moved it to) closes.
    pub fn register(&self, release: impl FnOnce() + 'static) -> Registered {
        self.register_boxed(Box::new(release))
    }

    /// Takes over release responsibility for an owned handle.
    ///
    /// The wrapper's own drop is defused; the arena becomes the single owner.
    pub fn adopt<T: EngineClass>(&self, gd: Gd<T>) -> Registered {
        let obj = gd.obj_sys();
        std::mem::forget(gd);

        match T::MEMORY {
            Memory::Manual => self.register(move || unsafe {
                interface_fn!(object_destroy)(obj);
            }),
            Memory::RefCounted => self.register(move || unsafe {
                release_refcounted(obj);
            }),
        }
    }

    /// Moves `value` into the arena; it is dropped when the arena closes.
    ///
    /// Used for transient engine values that must stay alive for a call chain, e.g. a
    /// temporary engine string backing an argument slot.
    pub fn keep<T: 'static>(&self, value: T) -> &T {
        let raw = Box::into_raw(Box::new(value));

        // The closure is the only place the box is reclaimed, and `keep` hands out no
        // token, so the reference cannot outlive the arena via promotion.
        let _ = self.register(move || unsafe {
            drop(Box::from_raw(raw));
        });

        unsafe { &*raw }
    }

    /// Re-parents a registration to `target`, which must outlive this arena (typically
    /// the caller's arena, when a value created here escapes the scope).
    pub fn promote(&self, registered: Registered, target: &Lifetime) -> Registered {
        let release = self.slots.borrow_mut()[registered.index]
            .take()
            .expect("registration token does not belong to this arena");

        target.register_boxed(release)
    }

    /// Number of registrations this arena will still release.
    pub fn pending(&self) -> usize {
        self.slots
            .borrow()
            .iter()
            .filter(|slot| slot.is_some())
            .count()
    }

    fn register_boxed(&self, release: ReleaseFn) -> Registered {
        let mut slots = self.slots.borrow_mut();
        let index = slots.len();
        slots.push(Some(release));

        Registered { index }
    }
}

impl Default for Lifetime {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Lifetime {
    fn drop(&mut self) {
        let mut slots = std::mem::take(&mut *self.slots.borrow_mut());

        for slot in slots.drain(..).rev() {
            if let Some(release) = slot {
                release();
            }
        }
    }
}
