//! Console logging

use folio_core::FolioError;
use log::{Level, LevelFilter, Metadata, Record};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = warn)]
    fn warn(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = error)]
    fn error(s: &str);
}

/// `log` backend writing to the browser console
struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[folio] {}", record.args());
        match record.level() {
            Level::Error => error(&line),
            Level::Warn => warn(&line),
            _ => log(&line),
        }
    }

    fn flush(&self) {}
}

/// Route the `log` facade to the console (debug builds log state transitions)
pub(crate) fn init_logger() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    // A second call (e.g. from tests) keeps the first logger
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// Convert a page error for the wasm boundary
pub(crate) fn to_js(err: FolioError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
