//! Browser console logging.
//!
//! Thin wrappers over `web_sys::console` that tag every message with the
//! application prefix.

const PREFIX: &str = "[craftceres]";

fn tagged(msg: &str) -> wasm_bindgen::JsValue {
    format!("{} {}", PREFIX, msg).into()
}

/// `console.log` with the application prefix.
pub fn log(msg: &str) {
    web_sys::console::log_1(&tagged(msg));
}

/// `console.warn` with the application prefix.
pub fn warn(msg: &str) {
    web_sys::console::warn_1(&tagged(msg));
}

/// `console.error` with the application prefix.
pub fn error(msg: &str) {
    web_sys::console::error_1(&tagged(msg));
}
