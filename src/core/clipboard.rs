//! Clipboard copy with a transient acknowledgment.
//!
//! Calls `navigator.clipboard.writeText` through the Reflect API.

use gloo_timers::callback::Timeout;
use js_sys::{Function, Object, Promise, Reflect};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{JsFuture, spawn_local};

use crate::app::AppContext;
use crate::config::{COPY_ACK_MS, dom_ids};
use crate::core::error::ClipboardError;
use crate::utils::fetch::describe_js_error;
use crate::utils::{dom, log};

/// Get `navigator.clipboard`.
fn get_clipboard() -> Result<Object, ClipboardError> {
    let navigator = dom::navigator().ok_or(ClipboardError::NoWindow)?;
    Reflect::get(&navigator, &"clipboard".into())
        .ok()
        .and_then(|v| v.dyn_into::<Object>().ok())
        .ok_or(ClipboardError::Unsupported)
}

/// Write text to the system clipboard.
pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    let clipboard = get_clipboard()?;

    let write = Reflect::get(&clipboard, &"writeText".into())
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
        .ok_or(ClipboardError::Unsupported)?;

    let promise: Promise = write
        .call1(&clipboard, &text.into())
        .map_err(|e| ClipboardError::WriteRejected(describe_js_error(&e)))?
        .into();

    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| ClipboardError::WriteRejected(describe_js_error(&e)))
}

/// Copy the server address shown in `source` and flash the acknowledgment.
///
/// The text is read at call time. The flash is shown immediately and flipped
/// back after `COPY_ACK_MS` whether or not the write succeeds; a failed write
/// is only logged.
pub fn copy_server_address(ctx: AppContext, source: NodeRef<leptos::html::Span>) {
    let text = match dom::text_content(source.get_untracked(), dom_ids::SERVER_ADDRESS) {
        Ok(text) => text,
        Err(e) => {
            log::error(&e.to_string());
            return;
        }
    };

    spawn_local(async move {
        if let Err(e) = write_text(&text).await {
            log::warn(&e.to_string());
        }
    });

    ctx.toggle_copy_ack();
    Timeout::new(COPY_ACK_MS, move || ctx.toggle_copy_ack()).forget();
}
