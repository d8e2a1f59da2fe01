//! Platform logging initialization for the summarize form.
//!
//! In the browser, records go to the devtools console at the matching
//! severity. Native builds (tests, tooling) log to the terminal.

use log::{Level, LevelFilter, Log, Metadata, Record};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use wasm_bindgen::JsValue;

/// Destination for log output.
pub enum LogDestination {
    /// Write to the browser console.
    Console,
    /// Write to terminal (stderr/stdout).
    Terminal,
}

struct ConsoleLogger;

static CONSOLE_LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format!("{}: {}", record.target(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Initialize the logger with the specified destination.
///
/// Safe to call more than once; only the first logger wins.
pub fn initialize(destination: LogDestination) {
    let level = default_level();

    match destination {
        LogDestination::Console => {
            if log::set_logger(&CONSOLE_LOGGER).is_ok() {
                log::set_max_level(level);
            }
        }
        LogDestination::Terminal => {
            let config = ConfigBuilder::new()
                .set_target_level(LevelFilter::Error)
                .build();
            let _ = TermLogger::init(level, config, TerminalMode::Mixed, ColorChoice::Auto);
        }
    }
}

fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}
