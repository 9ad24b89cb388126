/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// How the engine manages the memory of instances of a class.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Memory {
    /// The object must be released explicitly (scene-lifetime, [`super::Gd::free`], or an
    /// arena); dropping a wrapper does not touch it.
    Manual,

    /// The engine's refcount governs destruction; wrappers increment/decrement it.
    RefCounted,
}

/// Implemented by the generated wrapper type of every engine class.
pub trait EngineClass: 'static {
    const CLASS_NAME: &'static str;
    const MEMORY: Memory;
}

/// Marker: `Self`'s engine class inherits `Base`'s engine class.
///
/// The engine's single-inheritance hierarchy is expressed as trait bounds over the same
/// underlying object handle; there is no memory-layout reinterpretation involved. The
/// generated layer emits one impl per (class, ancestor) pair.
pub trait Inherits<Base: EngineClass>: EngineClass {}
