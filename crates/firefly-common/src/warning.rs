//! Engine warnings with colored terminal output.
//!
//! Classification never fails hard: a literal that is not HTML-shaped simply
//! keeps its host classification. This module reports such degradations on
//! stderr, deduplicated so re-scanning the same document on every keystroke
//! does not flood the terminal.

use std::collections::HashSet;
use std::sync::Mutex;

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about a degraded classification (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("Scanner", "literal at offset 42 is not HTML-shaped, keeping host spans");
/// ```
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let should_print = WARNED
        .lock()
        .unwrap()
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_print {
        eprintln!("{}", format!("[firefly {component}] {message}").yellow());
    }
}

/// Clear all recorded warnings (call when a new document is opened)
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap();
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
