/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Process-wide registry of resolved method binds.
//!
//! Resolution is eager and all-or-nothing: every entry of the manifest is looked up
//! against the running engine before the first call is attempted, and missing entries
//! are reported together as one fatal configuration error.

use std::collections::HashMap;
use std::fmt;

use crate::string_cache::StringCache;
use crate::{GdextInt, GdextInterface, GdextMethodBindPtr};

/// An immutable (class, method) → native-function-pointer association, resolved once
/// against the running engine and cached for the lifetime of the program.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ClassMethodBind(pub GdextMethodBindPtr);

// SAFETY: the bind is an immutable pointer into the engine binary, valid for the process
// lifetime; invoking it requires `unsafe` at the call site.
unsafe impl Send for ClassMethodBind {}
// SAFETY: see `Send` impl.
unsafe impl Sync for ClassMethodBind {}

/// One method the generated layer needs resolved at startup.
#[derive(Copy, Clone, Debug)]
pub struct MethodEntry {
    pub class: &'static str,
    pub method: &'static str,
    pub hash: GdextInt,
}

/// The full set of methods the generated layer calls; emitted by the code generator.
#[derive(Copy, Clone, Debug)]
pub struct MethodManifest {
    pub entries: &'static [MethodEntry],
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

#[derive(PartialEq, Eq, Debug)]
pub struct ClassMethodTable {
    binds: HashMap<(&'static str, &'static str), ClassMethodBind>,
}

impl ClassMethodTable {
    /// Resolves every manifest entry against the engine.
    ///
    /// Deterministic: resolving the same manifest twice against the same engine instance
    /// yields identical mappings.
    ///
    /// # Safety
    /// `interface` must be the interface of a live engine; its function pointers are invoked.
    pub unsafe fn resolve(
        interface: &GdextInterface,
        manifest: &MethodManifest,
    ) -> Result<Self, ResolveError> {
        let get_method_bind = interface
            .classdb_get_method_bind
            .ok_or(ResolveError::MissingInterfaceFunction(
                "classdb_get_method_bind",
            ))?;
        if interface.string_name_new_with_utf8_chars_and_len.is_none() {
            return Err(ResolveError::MissingInterfaceFunction(
                "string_name_new_with_utf8_chars_and_len",
            ));
        }
        if interface.string_name_destroy.is_none() {
            return Err(ResolveError::MissingInterfaceFunction("string_name_destroy"));
        }

        let mut string_names = StringCache::new(interface);
        let mut binds = HashMap::with_capacity(manifest.entries.len());
        let mut missing = Vec::new();

        for entry in manifest.entries {
            let class_sname = string_names.fetch(entry.class);
            let method_sname = string_names.fetch(entry.method);

            let bind = get_method_bind(class_sname, method_sname, entry.hash);

            if bind.is_null() {
                missing.push(*entry);
            } else {
                binds.insert((entry.class, entry.method), ClassMethodBind(bind));
            }
        }

        if missing.is_empty() {
            Ok(Self { binds })
        } else {
            Err(ResolveError::MissingMethods(missing))
        }
    }

    pub fn get(&self, class: &str, method: &str) -> Option<ClassMethodBind> {
        self.binds.get(&(class, method)).copied()
    }

    /// Fetches a bind that the manifest guarantees to exist.
    ///
    /// # Panics
    /// If (class, method) was not part of the resolved manifest. Since resolution is
    /// all-or-nothing, this indicates a generated-code defect, not an engine mismatch.
    pub fn bind(&self, class: &'static str, method: &'static str) -> ClassMethodBind {
        self.get(class, method).unwrap_or_else(|| {
            panic!("method {class}::{method} was not part of the resolved manifest")
        })
    }

    pub fn len(&self) -> usize {
        self.binds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.binds.is_empty()
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Errors

/// Failure to build the method-bind table at startup.
#[derive(Debug)]
pub enum ResolveError {
    /// The engine interface lacks a function needed for resolution.
    MissingInterfaceFunction(&'static str),

    /// The engine's registry has no bind for these manifest entries. Usually a version
    /// mismatch between the generated layer and the running engine.
    MissingMethods(Vec<MethodEntry>),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingInterfaceFunction(name) => {
                write!(f, "engine interface function `{name}` is not available")
            }
            Self::MissingMethods(missing) => {
                writeln!(f, "failed to resolve {} class method(s):", missing.len())?;
                for entry in missing {
                    writeln!(
                        f,
                        "  {}::{} (hash {})",
                        entry.class, entry.method, entry.hash
                    )?;
                }
                write!(
                    f,
                    "make sure the generated bindings and the engine are compatible"
                )
            }
        }
    }
}

impl std::error::Error for ResolveError {}
