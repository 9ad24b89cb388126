/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! A mock engine implementing the bridge's C interface in pure Rust.
//!
//! Object handles are table keys disguised as pointers and never dereferenced, so every
//! bridge test can run without a real engine binary. State violations (double destroy,
//! refcounting a dead object) are recorded as faults instead of panicking, because
//! unwinding out of an `extern "C"` function would abort the test process.

use std::collections::HashMap;
use std::os::raw::c_char;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use gdcall_core::builtin::{Rect2, Vector2};
use gdcall_core::sys;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Engine state

pub struct MockObject {
    pub class: &'static str,
    /// `None` for manually managed classes.
    pub refcount: Option<i64>,
    pub alive: bool,
    pub int_prop: i64,
    pub vec_prop: Vector2,
    pub str_prop: String,
    /// Engine-side child (scroll bar); destroyed together with its parent.
    pub child: Option<u64>,
    /// Popup handed over via `set_popup`; destroyed together with its parent.
    pub popup: Option<u64>,
}

#[derive(Default)]
pub struct Engine {
    pub objects: HashMap<u64, MockObject>,
    pub strings: HashMap<u64, String>,
    pub arrays: HashMap<u64, Vec<i64>>,
    pub destroyed: Vec<u64>,
    pub messages: Vec<(&'static str, String)>,
    pub faults: Vec<String>,
    pub ticks: i64,
    next_id: u64,
}

impl Engine {
    fn alloc_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn new_object(&mut self, class: &'static str, refcount: Option<i64>) -> u64 {
        let id = self.alloc_id();
        self.objects.insert(
            id,
            MockObject {
                class,
                refcount,
                alive: true,
                int_prop: 0,
                vec_prop: Vector2::ZERO,
                str_prop: String::new(),
                child: None,
                popup: None,
            },
        );
        id
    }

    fn new_string(&mut self, content: String) -> u64 {
        let id = self.alloc_id();
        self.strings.insert(id, content);
        id
    }

    fn fault(&mut self, message: String) {
        self.faults.push(message);
    }

    fn destroy_object(&mut self, id: u64) {
        let (child, popup) = match self.objects.get_mut(&id) {
            Some(object) if object.alive => {
                object.alive = false;
                (object.child.take(), object.popup.take())
            }
            Some(_) => {
                self.fault(format!("double destroy of object {id}"));
                return;
            }
            None => {
                self.fault(format!("destroy of unknown object {id}"));
                return;
            }
        };

        self.destroyed.push(id);

        // Engine-side ownership: internal children die with their parent.
        if let Some(child) = child {
            self.destroy_object(child);
        }
        if let Some(popup) = popup {
            self.destroy_object(popup);
        }
    }
}

pub fn engine() -> MutexGuard<'static, Engine> {
    static ENGINE: OnceLock<Mutex<Engine>> = OnceLock::new();

    ENGINE
        .get_or_init(|| Mutex::new(Engine::default()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Handle encoding

fn id_to_ptr(id: u64) -> sys::GdextObjectPtr {
    id as usize as sys::GdextObjectPtr
}

fn ptr_to_id(ptr: sys::GdextObjectPtr) -> u64 {
    ptr as usize as u64
}

/// Reads the string-table key out of an opaque string/string-name slot.
unsafe fn key_at(ptr: *const std::ffi::c_void) -> u64 {
    *(ptr as *const u64)
}

unsafe fn write_key(dst: *mut std::ffi::c_void, key: u64) {
    *(dst as *mut u64) = key;
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Method registry

#[derive(Copy, Clone, PartialEq, Debug)]
enum MethodKind {
    SetFrames,
    GetFrames,
    GetCurve,
    GetVScrollBar,
    SetPlaceholder,
    GetPlaceholder,
    SetPopup,
    SetPosition,
    GetPosition,
    GetBounds,
    LookAt,
    SumValues,
    GetTickCount,
}

const METHODS: &[(&str, &str, MethodKind)] = &[
    ("MockSprite", "set_frames", MethodKind::SetFrames),
    ("MockSprite", "get_frames", MethodKind::GetFrames),
    ("MockSprite", "get_curve", MethodKind::GetCurve),
    ("MockTextEdit", "get_v_scroll_bar", MethodKind::GetVScrollBar),
    ("MockTextEdit", "set_placeholder", MethodKind::SetPlaceholder),
    ("MockTextEdit", "get_placeholder", MethodKind::GetPlaceholder),
    ("MockTextEdit", "set_popup", MethodKind::SetPopup),
    ("MockNode", "set_position", MethodKind::SetPosition),
    ("MockNode", "get_position", MethodKind::GetPosition),
    ("MockNode", "get_bounds", MethodKind::GetBounds),
    ("MockNode", "look_at", MethodKind::LookAt),
    ("MockNode", "sum_values", MethodKind::SumValues),
    ("MockServer", "get_tick_count", MethodKind::GetTickCount),
];

pub const MANIFEST: sys::MethodManifest = sys::MethodManifest {
    entries: &[
        sys::MethodEntry { class: "MockSprite", method: "set_frames", hash: 1 },
        sys::MethodEntry { class: "MockSprite", method: "get_frames", hash: 1 },
        sys::MethodEntry { class: "MockSprite", method: "get_curve", hash: 1 },
        sys::MethodEntry { class: "MockTextEdit", method: "get_v_scroll_bar", hash: 1 },
        sys::MethodEntry { class: "MockTextEdit", method: "set_placeholder", hash: 1 },
        sys::MethodEntry { class: "MockTextEdit", method: "get_placeholder", hash: 1 },
        sys::MethodEntry { class: "MockTextEdit", method: "set_popup", hash: 1 },
        sys::MethodEntry { class: "MockNode", method: "set_position", hash: 1 },
        sys::MethodEntry { class: "MockNode", method: "get_position", hash: 1 },
        sys::MethodEntry { class: "MockNode", method: "get_bounds", hash: 1 },
        sys::MethodEntry { class: "MockNode", method: "look_at", hash: 1 },
        sys::MethodEntry { class: "MockNode", method: "sum_values", hash: 1 },
        sys::MethodEntry { class: "MockServer", method: "get_tick_count", hash: 1 },
    ],
};

fn bind_to_kind(bind: sys::GdextMethodBindPtr) -> Option<MethodKind> {
    let index = (bind as usize).checked_sub(1)?;
    METHODS.get(index).map(|(_, _, kind)| *kind)
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// extern "C" implementation

unsafe extern "C" fn classdb_construct_object(
    class_sname: sys::GdextConstStringNamePtr,
) -> sys::GdextObjectPtr {
    let key = key_at(class_sname);
    let mut e = engine();

    let class = match e.strings.get(&key) {
        Some(name) => name.clone(),
        None => {
            e.fault(format!("construct with unknown string-name key {key}"));
            return std::ptr::null_mut();
        }
    };

    let id = match class.as_str() {
        "MockSprite" => e.new_object("MockSprite", Some(1)),
        "MockCurve" => e.new_object("MockCurve", Some(1)),
        "MockNode" => e.new_object("MockNode", None),
        "MockTextEdit" => {
            let child = e.new_object("MockScrollBar", None);
            let id = e.new_object("MockTextEdit", None);
            e.objects.get_mut(&id).unwrap().child = Some(child);
            id
        }
        _ => return std::ptr::null_mut(),
    };

    id_to_ptr(id)
}

unsafe extern "C" fn object_destroy(obj: sys::GdextObjectPtr) {
    let id = ptr_to_id(obj);
    engine().destroy_object(id);
}

unsafe extern "C" fn object_reference(obj: sys::GdextObjectPtr) {
    let id = ptr_to_id(obj);
    let mut e = engine();

    match e.objects.get_mut(&id) {
        Some(object) if object.alive => match object.refcount.as_mut() {
            Some(count) => *count += 1,
            None => e.fault(format!("reference on non-refcounted object {id}")),
        },
        _ => e.fault(format!("reference on dead object {id}")),
    }
}

unsafe extern "C" fn object_unreference(obj: sys::GdextObjectPtr) -> sys::GdextBool {
    let id = ptr_to_id(obj);
    let mut e = engine();

    match e.objects.get_mut(&id) {
        Some(object) if object.alive => match object.refcount.as_mut() {
            Some(count) => {
                *count -= 1;
                sys::bool_to_sys(*count == 0)
            }
            None => {
                e.fault(format!("unreference on non-refcounted object {id}"));
                sys::SYS_FALSE
            }
        },
        _ => {
            e.fault(format!("unreference on dead object {id}"));
            sys::SYS_FALSE
        }
    }
}

unsafe extern "C" fn classdb_get_method_bind(
    class_sname: sys::GdextConstStringNamePtr,
    method_sname: sys::GdextConstStringNamePtr,
    _hash: sys::GdextInt,
) -> sys::GdextMethodBindPtr {
    let class_key = key_at(class_sname);
    let method_key = key_at(method_sname);
    let e = engine();

    let (Some(class), Some(method)) = (e.strings.get(&class_key), e.strings.get(&method_key))
    else {
        return std::ptr::null_mut();
    };

    for (index, (entry_class, entry_method, _)) in METHODS.iter().enumerate() {
        if entry_class == class && entry_method == method {
            return (index + 1) as sys::GdextMethodBindPtr;
        }
    }

    std::ptr::null_mut()
}

unsafe extern "C" fn object_method_bind_ptrcall(
    bind: sys::GdextMethodBindPtr,
    obj: sys::GdextObjectPtr,
    args: *const sys::GdextConstTypePtr,
    ret: sys::GdextTypePtr,
) {
    let id = ptr_to_id(obj);
    let mut e = engine();

    let Some(kind) = bind_to_kind(bind) else {
        e.fault(format!("ptrcall through unknown bind {bind:?}"));
        return;
    };

    match kind {
        MethodKind::SetFrames => {
            let value = *(*args as *const i64);
            e.objects.get_mut(&id).unwrap().int_prop = value;
        }
        MethodKind::GetFrames => {
            *(ret as *mut i64) = e.objects[&id].int_prop;
        }
        MethodKind::GetCurve => {
            // Fresh object whose single reference is handed to the caller.
            let curve = e.new_object("MockCurve", Some(1));
            *(ret as *mut sys::GdextObjectPtr) = id_to_ptr(curve);
        }
        MethodKind::GetVScrollBar => {
            // Borrowed internal child; the caller must not release it.
            let child = e.objects[&id].child.expect("MockTextEdit has a scroll bar");
            *(ret as *mut sys::GdextObjectPtr) = id_to_ptr(child);
        }
        MethodKind::SetPlaceholder => {
            let key = key_at(*args);
            let content = e.strings[&key].clone();
            e.objects.get_mut(&id).unwrap().str_prop = content;
        }
        MethodKind::GetPlaceholder => {
            // Fresh engine string owned by the caller.
            let content = e.objects[&id].str_prop.clone();
            let key = e.new_string(content);
            write_key(ret, key);
        }
        MethodKind::SetPopup => {
            let popup = ptr_to_id(*(*args as *const sys::GdextObjectPtr));
            let previous = e.objects.get_mut(&id).unwrap().popup.replace(popup);
            if let Some(previous) = previous {
                e.destroy_object(previous);
            }
        }
        MethodKind::SetPosition => {
            let value = *(*args as *const Vector2);
            e.objects.get_mut(&id).unwrap().vec_prop = value;
        }
        MethodKind::GetPosition => {
            *(ret as *mut Vector2) = e.objects[&id].vec_prop;
        }
        MethodKind::GetBounds => {
            let position = e.objects[&id].vec_prop;
            *(ret as *mut Rect2) = Rect2::new(position, Vector2::new(10.0, 20.0));
        }
        MethodKind::LookAt => {
            // Borrowed object argument: read, never adopted.
            let target = ptr_to_id(*(*args as *const sys::GdextObjectPtr));
            let target_position = e.objects[&target].vec_prop;
            e.objects.get_mut(&id).unwrap().vec_prop = target_position;
        }
        MethodKind::SumValues => {
            let key = key_at(*args);
            let sum: i64 = e.arrays[&key].iter().sum();
            *(ret as *mut i64) = sum;
        }
        MethodKind::GetTickCount => {
            // Static method: `obj` is null.
            e.ticks += 1;
            *(ret as *mut i64) = e.ticks;
        }
    }
}

// Strings.

unsafe extern "C" fn string_new_with_utf8_chars_and_len(
    dst: sys::GdextUninitializedTypePtr,
    chars: *const c_char,
    len: sys::GdextInt,
) {
    let bytes = std::slice::from_raw_parts(chars as *const u8, len as usize);
    let content = String::from_utf8(bytes.to_vec()).expect("mock strings are UTF-8");

    let key = engine().new_string(content);
    write_key(dst, key);
}

unsafe extern "C" fn string_to_utf8_chars(
    string: sys::GdextConstTypePtr,
    buffer: *mut c_char,
    max_len: sys::GdextInt,
) -> sys::GdextInt {
    let key = key_at(string);
    let e = engine();
    let content = &e.strings[&key];

    if !buffer.is_null() {
        let n = content.len().min(max_len as usize);
        std::ptr::copy_nonoverlapping(content.as_ptr(), buffer as *mut u8, n);
    }

    content.len() as sys::GdextInt
}

unsafe extern "C" fn string_destroy(string: sys::GdextTypePtr) {
    let key = key_at(string);
    let mut e = engine();

    if e.strings.remove(&key).is_none() {
        e.fault(format!("destroy of unknown string {key}"));
    }
}

unsafe extern "C" fn string_name_new_with_utf8_chars_and_len(
    dst: sys::GdextUninitializedStringNamePtr,
    chars: *const c_char,
    len: sys::GdextInt,
) {
    string_new_with_utf8_chars_and_len(dst, chars, len);
}

unsafe extern "C" fn string_name_destroy(sname: sys::GdextStringNamePtr) {
    string_destroy(sname);
}

// Packed arrays.

unsafe extern "C" fn packed_int64_array_create(dst: sys::GdextUninitializedTypePtr) {
    let mut e = engine();
    let key = e.alloc_id();
    e.arrays.insert(key, Vec::new());
    write_key(dst, key);
}

unsafe extern "C" fn packed_int64_array_destroy(array: sys::GdextTypePtr) {
    let key = key_at(array);
    let mut e = engine();

    if e.arrays.remove(&key).is_none() {
        e.fault(format!("destroy of unknown array {key}"));
    }
}

unsafe extern "C" fn packed_int64_array_resize(array: sys::GdextTypePtr, len: sys::GdextInt) {
    let key = key_at(array);
    engine()
        .arrays
        .get_mut(&key)
        .expect("resize of unknown array")
        .resize(len as usize, 0);
}

unsafe extern "C" fn packed_int64_array_size(array: sys::GdextConstTypePtr) -> sys::GdextInt {
    let key = key_at(array);
    engine().arrays[&key].len() as sys::GdextInt
}

unsafe extern "C" fn packed_int64_array_ptr(array: sys::GdextTypePtr) -> *mut i64 {
    let key = key_at(array);
    engine()
        .arrays
        .get_mut(&key)
        .expect("access to unknown array")
        .as_mut_ptr()
}

// Printing.

unsafe fn message_at(chars: *const c_char) -> String {
    std::ffi::CStr::from_ptr(chars).to_string_lossy().into_owned()
}

unsafe extern "C" fn print_message(
    message: *const c_char,
    _function: *const c_char,
    _file: *const c_char,
    _line: i32,
) {
    let message = message_at(message);
    engine().messages.push(("message", message));
}

unsafe extern "C" fn print_warning(
    message: *const c_char,
    _function: *const c_char,
    _file: *const c_char,
    _line: i32,
) {
    let message = message_at(message);
    engine().messages.push(("warning", message));
}

unsafe extern "C" fn print_error(
    message: *const c_char,
    _function: *const c_char,
    _file: *const c_char,
    _line: i32,
) {
    let message = message_at(message);
    engine().messages.push(("error", message));
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Interface assembly + initialization

pub fn interface() -> sys::GdextInterface {
    static VERSION: &std::ffi::CStr = c"Mock Engine 4.x (gdcall test double)";

    sys::GdextInterface {
        version_string: VERSION.as_ptr(),
        classdb_construct_object: Some(classdb_construct_object),
        object_destroy: Some(object_destroy),
        object_reference: Some(object_reference),
        object_unreference: Some(object_unreference),
        classdb_get_method_bind: Some(classdb_get_method_bind),
        object_method_bind_ptrcall: Some(object_method_bind_ptrcall),
        string_new_with_utf8_chars_and_len: Some(string_new_with_utf8_chars_and_len),
        string_to_utf8_chars: Some(string_to_utf8_chars),
        string_destroy: Some(string_destroy),
        string_name_new_with_utf8_chars_and_len: Some(string_name_new_with_utf8_chars_and_len),
        string_name_destroy: Some(string_name_destroy),
        packed_int64_array_create: Some(packed_int64_array_create),
        packed_int64_array_destroy: Some(packed_int64_array_destroy),
        packed_int64_array_resize: Some(packed_int64_array_resize),
        packed_int64_array_size: Some(packed_int64_array_size),
        packed_int64_array_ptr: Some(packed_int64_array_ptr),
        print_message: Some(print_message),
        print_warning: Some(print_warning),
        print_error: Some(print_error),
    }
}

/// Installs the mock engine as the process-wide binding; callable from every test.
pub fn ensure_initialized() {
    static INIT: OnceLock<()> = OnceLock::new();

    INIT.get_or_init(|| {
        let interface = interface();
        unsafe { gdcall_core::init::initialize(&interface, &MANIFEST) }
            .expect("mock engine initialization");
    });
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Test queries

pub fn is_alive(obj: sys::GdextObjectPtr) -> bool {
    let id = ptr_to_id(obj);
    engine().objects.get(&id).is_some_and(|object| object.alive)
}

pub fn class_of(obj: sys::GdextObjectPtr) -> Option<&'static str> {
    let id = ptr_to_id(obj);
    engine().objects.get(&id).map(|object| object.class)
}

pub fn refcount(obj: sys::GdextObjectPtr) -> Option<i64> {
    let id = ptr_to_id(obj);
    engine().objects.get(&id).and_then(|object| object.refcount)
}

pub fn destroy_count(obj: sys::GdextObjectPtr) -> usize {
    let id = ptr_to_id(obj);
    engine()
        .destroyed
        .iter()
        .filter(|destroyed| **destroyed == id)
        .count()
}

/// Number of live engine strings containing `marker`; lets tests count their own
/// temporaries without serializing against unrelated tests.
pub fn live_strings_containing(marker: &str) -> usize {
    engine()
        .strings
        .values()
        .filter(|content| content.contains(marker))
        .count()
}

/// Recorded faults mentioning `obj`. Per-object, so concurrent tests don't observe each
/// other's objects.
pub fn faults_mentioning(obj: sys::GdextObjectPtr) -> Vec<String> {
    let needle = format!("object {}", ptr_to_id(obj));

    engine()
        .faults
        .iter()
        .filter(|fault| fault.contains(&needle))
        .cloned()
        .collect()
}

/// Destruction order restricted to `ptrs`, as indices into `ptrs`.
pub fn destruction_order(ptrs: &[sys::GdextObjectPtr]) -> Vec<usize> {
    let ids: Vec<u64> = ptrs.iter().map(|ptr| ptr_to_id(*ptr)).collect();

    engine()
        .destroyed
        .iter()
        .filter_map(|id| ids.iter().position(|candidate| candidate == id))
        .collect()
}
