// FFI functions are inherently unsafe: callers must ensure pointer validity.
// Safety contracts are documented per-function in the public API comments.
#![allow(clippy::missing_safety_doc)]

// snowstem-ffi: C-compatible FFI layer for SnowballStemmer.
//
// This crate exposes a stable C ABI that can be consumed by any language
// with C FFI support (Python/ctypes, C#/P-Invoke, Common Lisp/CFFI, etc.).
//
// Memory management rules:
// - Opaque `SnowballStemmer` pointer: created by `snowstem_new`, freed by `snowstem_free`.
// - Returned strings: caller must free with `snowstem_free_str`.
// - Returned string arrays: caller must free with `snowstem_free_str_array`.
// - Input strings are null-terminated C strings expected to be UTF-8;
//   invalid byte sequences are dropped, not rejected.
// - A handle must not be used from two threads at once.

use std::ffi::{CStr, CString, c_char, c_int};
use std::ptr;
use std::slice;

use snowstem::{BatchItem, SnowballStemmer, Text};

// ── Handle lifecycle ─────────────────────────────────────────────

/// Create a stemmer for `language` (e.g. "english", "en", "eng").
///
/// Returns an opaque pointer on success, NULL on failure.
/// On failure, if `error_out` is non-NULL, it receives a heap-allocated error string
/// that the caller must free with `snowstem_free_str`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn snowstem_new(
    language: *const c_char,
    error_out: *mut *mut c_char,
) -> *mut SnowballStemmer {
    if language.is_null() {
        set_error(error_out, "language is null");
        return ptr::null_mut();
    }
    let language = unsafe { CStr::from_ptr(language) }.to_string_lossy();

    match snowstem::create_stemmer(&language) {
        Ok(handle) => Box::into_raw(Box::new(handle)),
        Err(e) => {
            set_error(error_out, &e.to_string());
            ptr::null_mut()
        }
    }
}

/// Free a stemmer created by `snowstem_new`. NULL is ignored.
///
/// Must be called exactly once per handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn snowstem_free(handle: *mut SnowballStemmer) {
    if !handle.is_null() {
        let handle = unsafe { Box::from_raw(handle) };
        (*handle).release();
    }
}

// ── Stemming ────────────────────────────────────────────────────

/// Stem `count` words in order.
///
/// `words` points to an array of `count` C strings. A NULL entry is not a
/// text value and fails the whole call: nothing is returned and `error_out`
/// (if non-NULL) receives the error message.
///
/// Returns a NULL-terminated array with exactly `count` stems. Caller must
/// free with `snowstem_free_str_array`. Returns NULL on error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn snowstem_stem(
    handle: *mut SnowballStemmer,
    words: *const *const c_char,
    count: usize,
    error_out: *mut *mut c_char,
) -> *mut *mut c_char {
    let Some(handle) = (unsafe { handle.as_mut() }) else {
        set_error(error_out, "handle is null");
        return ptr::null_mut();
    };

    let words: &[*const c_char] = if count == 0 {
        &[]
    } else if words.is_null() {
        set_error(error_out, "words is null");
        return ptr::null_mut();
    } else {
        unsafe { slice::from_raw_parts(words, count) }
    };

    match handle.stem(words.iter().map(|&p| CWord(p))) {
        Ok(stems) => strings_to_c_array(&stems),
        Err(e) => {
            set_error(error_out, &e.to_string());
            ptr::null_mut()
        }
    }
}

/// Stem a single word.
///
/// Returns a heap-allocated C string. Caller must free with `snowstem_free_str`.
/// Returns NULL if `handle` or `word` is NULL.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn snowstem_stem_word(
    handle: *mut SnowballStemmer,
    word: *const c_char,
) -> *mut c_char {
    let Some(handle) = (unsafe { handle.as_mut() }) else { return ptr::null_mut(); };
    match handle.stem([CWord(word)]) {
        Ok(mut stems) => str_to_c(&stems.remove(0)),
        Err(_) => ptr::null_mut(),
    }
}

// ── Languages ───────────────────────────────────────────────────

/// List supported languages, sorted ascending.
///
/// Returns a NULL-terminated array. Caller must free with `snowstem_free_str_array`.
#[unsafe(no_mangle)]
pub extern "C" fn snowstem_languages() -> *mut *mut c_char {
    let languages: Vec<String> = snowstem::list_languages().into_iter().map(String::from).collect();
    strings_to_c_array(&languages)
}

/// Returns 1 if `snowstem_new` would accept `language`, 0 otherwise.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn snowstem_supports(language: *const c_char) -> c_int {
    let Some(language) = cstr_to_str(language) else { return 0; };
    if snowstem::REGISTRY.supports(language) { 1 } else { 0 }
}

// ── Utility functions ───────────────────────────────────────────

/// Return the library version string.
///
/// The returned pointer is valid for the lifetime of the library (static).
/// Do NOT free this pointer.
#[unsafe(no_mangle)]
pub extern "C" fn snowstem_version() -> *const c_char {
    static VERSION: &CStr = match CStr::from_bytes_with_nul(
        concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes(),
    ) {
        Ok(version) => version,
        Err(_) => c"",
    };
    VERSION.as_ptr()
}

/// Free a heap-allocated C string returned by snowstem functions.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn snowstem_free_str(s: *mut c_char) {
    free_c_str(s);
}

/// Free a NULL-terminated array of C strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn snowstem_free_str_array(arr: *mut *mut c_char) {
    free_null_terminated_array(arr);
}

// ── Internal helpers ────────────────────────────────────────────

/// One element of a `snowstem_stem` batch; NULL is not text.
struct CWord(*const c_char);

impl BatchItem for CWord {
    fn as_text(&self) -> Option<Text<'_>> {
        if self.0.is_null() {
            return None;
        }
        Some(Text::Bytes(unsafe { CStr::from_ptr(self.0) }.to_bytes()))
    }

    fn describe(&self) -> String {
        if self.0.is_null() {
            "NULL".to_string()
        } else {
            format!("{:?}", unsafe { CStr::from_ptr(self.0) })
        }
    }
}

fn cstr_to_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(s) }.to_str().ok()
}

fn str_to_c(s: &str) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

fn set_error(out: *mut *mut c_char, msg: &str) {
    if !out.is_null() {
        unsafe { *out = str_to_c(msg); }
    }
}

fn free_c_str(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

fn strings_to_c_array(strings: &[String]) -> *mut *mut c_char {
    let mut ptrs: Vec<*mut c_char> = strings.iter().map(|s| str_to_c(s)).collect();
    ptrs.push(ptr::null_mut()); // NULL terminator
    let mut ptrs = ptrs.into_boxed_slice();
    let ptr = ptrs.as_mut_ptr();
    std::mem::forget(ptrs);
    ptr
}

fn free_null_terminated_array(arr: *mut *mut c_char) {
    if arr.is_null() {
        return;
    }
    let mut i = 0;
    loop {
        let p = unsafe { *arr.add(i) };
        if p.is_null() {
            break;
        }
        free_c_str(p);
        i += 1;
    }
    // Allocated as a boxed slice of exactly i+1 pointers
    drop(unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(arr, i + 1)) });
}
