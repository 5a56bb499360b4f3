//! Renderer warnings with colored terminal output.
//!
//! Warnings are deduplicated: the same component/message pair is printed at
//! most once per page load. The CSS and DOM components use this channel for
//! conditions that are unexpected but must not fail the current operation,
//! e.g. a resolved-style query for a custom property or a failed standalone
//! style computation.

use std::collections::HashSet;
use std::sync::{LazyLock, Mutex};

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Component/message pairs that have already been printed.
static WARNED: LazyLock<Mutex<HashSet<String>>> = LazyLock::new(|| Mutex::new(HashSet::new()));

/// Warn about an unexpected condition (prints once per unique message).
///
/// # Example
/// ```ignore
/// warn_once("CSS", "resolved value requested for a custom property");
/// ```
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let first_time = WARNED.lock().unwrap().insert(key);

    if first_time {
        eprintln!("{YELLOW}[Quokka {component}] ⚠ {message}{RESET}");
    }
}

/// Forget all recorded warnings (call when loading a new page).
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn clear_warnings() {
    WARNED.lock().unwrap().clear();
}
