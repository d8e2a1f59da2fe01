#![deny(missing_docs)]
//! Shared logging utilities for the summarizer workspace.
//!
//! This crate provides the `form_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger. Every line is
//! prefixed with the sequence number of the DOM event being handled, so the
//! log output of one submit or one file selection can be read as a unit.

use std::cell::Cell;

#[doc(hidden)]
pub use log as __log;

thread_local! {
    /// Thread-local storage for the current DOM event sequence number.
    static EVENT_SEQ: Cell<u64> = const { Cell::new(0) };
}

/// Advances the event sequence number and returns the new value.
/// The platform layer calls this once per dispatched event.
pub fn next_event_seq() -> u64 {
    EVENT_SEQ.with(|v| {
        let next = v.get().wrapping_add(1);
        v.set(next);
        next
    })
}

/// Retrieves the event sequence number for the current thread.
/// Returns 0 before the first event has been dispatched.
pub fn event_seq() -> u64 {
    EVENT_SEQ.with(|v| v.get())
}

/// Logs a trace-level message tagged with the current event sequence number.
#[macro_export]
macro_rules! form_trace {
    ($($arg:tt)*) => {{
        $crate::__log::trace!("[evt {}] {}", $crate::event_seq(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message tagged with the current event sequence number.
#[macro_export]
macro_rules! form_debug {
    ($($arg:tt)*) => {{
        $crate::__log::debug!("[evt {}] {}", $crate::event_seq(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message tagged with the current event sequence number.
#[macro_export]
macro_rules! form_info {
    ($($arg:tt)*) => {{
        $crate::__log::info!("[evt {}] {}", $crate::event_seq(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message tagged with the current event sequence number.
#[macro_export]
macro_rules! form_warn {
    ($($arg:tt)*) => {{
        $crate::__log::warn!("[evt {}] {}", $crate::event_seq(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message tagged with the current event sequence number.
#[macro_export]
macro_rules! form_error {
    ($($arg:tt)*) => {{
        $crate::__log::error!("[evt {}] {}", $crate::event_seq(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
