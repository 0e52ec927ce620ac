//! Server status reporting.
//!
//! Issues the single status request made per page load and turns the
//! response into what the status badge shows.

use leptos::prelude::*;
use serde_json::Value;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::config::{self, STATUS_FALLBACK, StatusFallback};
use crate::core::error::FetchError;
use crate::models::{ServerStatus, StatusView};
use crate::utils::{fetch_text, log};

/// Outcome of a successful status request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusReport {
    pub view: StatusView,
    /// Hover title with host, port and version, when reported.
    pub title: Option<String>,
}

impl StatusReport {
    /// Build a report from a raw response body.
    pub fn from_body(body: &str) -> Result<Self, FetchError> {
        Self::from_value(parse_body(body)?)
    }

    /// Build a report from a parsed JSON document.
    pub fn from_value(value: Value) -> Result<Self, FetchError> {
        let status = ServerStatus::from_value(value)?;
        Ok(Self {
            view: StatusView::from_status(&status)?,
            title: status.summary(),
        })
    }
}

/// Parse a response body as JSON without interpreting it yet.
pub fn parse_body(body: &str) -> Result<Value, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::JsonParseError(e.to_string()))
}

/// Badge state to apply after a failed request, if any.
pub fn fallback_view(fallback: StatusFallback) -> Option<StatusView> {
    match fallback {
        StatusFallback::KeepPending => None,
        StatusFallback::ShowUnavailable => Some(StatusView::Unavailable),
    }
}

/// Fetch the server status once.
///
/// The payload is written to the console once it parses as JSON, before it
/// is interpreted. The request is abandoned after `FETCH_TIMEOUT_MS` and
/// reported as [`FetchError::Timeout`]; this bound is an addition to the
/// plain one-shot fetch and, under `StatusFallback::ShowUnavailable`, turns a
/// hung request into the "unavailable" badge instead of a permanent
/// placeholder.
pub async fn fetch_status() -> Result<StatusReport, FetchError> {
    let body = fetch_text(&config::status_url()).await?;
    let value = parse_body(&body)?;
    log::log(&value.to_string());
    StatusReport::from_value(value)
}

/// Run the status request and update the badge.
///
/// No retry. On failure the error is logged and [`STATUS_FALLBACK`] decides
/// whether the badge changes at all.
pub fn report_status(ctx: AppContext) {
    spawn_local(async move {
        match fetch_status().await {
            Ok(report) => {
                ctx.status.set(report.view);
                ctx.status_title.set(report.title);
            }
            Err(e) => {
                log::error(&format!("Status request failed: {}", e));
                if let Some(view) = fallback_view(STATUS_FALLBACK) {
                    ctx.status.set(view);
                }
            }
        }
    });
}
