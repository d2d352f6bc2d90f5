//! Console Logger
//!
//! A `log` backend for WASM frontends. Records go to the browser console,
//! routed to `console.error` / `console.warn` / ... by level.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;
use web_sys::console;

/// Logger writing formatted records to the browser console
pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }
}

/// Install the console logger as the global `log` backend.
///
/// Fails if another logger was installed first.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger: &'static ConsoleLogger = Box::leak(Box::new(ConsoleLogger::new(level)));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Parse a level name (`error`, `warn`, `info`, `debug`, `trace`, `off`),
/// falling back to `Info` for anything unrecognised.
pub fn parse_level(name: &str) -> LevelFilter {
    name.trim().parse().unwrap_or(LevelFilter::Info)
}

/// Single console line for a record: `[LEVEL] target: message`
pub fn format_record(record: &Record) -> String {
    format!("[{}] {}: {}", record.level(), record.target(), record.args())
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format_record(record));
        match record.level() {
            Level::Error => console::error_1(&line),
            Level::Warn => console::warn_1(&line),
            Level::Info => console::info_1(&line),
            Level::Debug => console::debug_1(&line),
            Level::Trace => console::log_1(&line),
        }
    }

    fn flush(&self) {}
}
