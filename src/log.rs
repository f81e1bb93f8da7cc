//! Browser console logging.

use wasm_bindgen::JsValue;
use web_sys::console;

use crate::config::ConfigWarning;

pub fn info(msg: &str) {
    console::log_1(&JsValue::from_str(msg));
}

pub fn warn(msg: &str) {
    console::warn_1(&JsValue::from_str(msg));
}

pub fn error(err: &JsValue) {
    console::error_1(err);
}

/// Print a header followed by one line per warning. Silent when empty.
pub fn config_warnings(warnings: &[ConfigWarning]) {
    if warnings.is_empty() {
        return;
    }
    warn("⚠️ Configuration Warnings:");
    for w in warnings {
        warn(&format!("- {w}"));
    }
}

/// Event handlers can't hand errors back to the browser; log them instead.
pub fn on_err(result: Result<(), JsValue>) {
    if let Err(err) = result {
        error(&err);
    }
}
