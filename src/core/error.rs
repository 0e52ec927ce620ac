//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`FetchError`] - Network/fetch-related errors for the status request
//! - [`ClipboardError`] - Clipboard API errors for the copy action
//! - [`DomError`] - Missing page elements

use std::fmt;

use crate::config::NETWORK_RESPONSE_ERROR;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Browser window not available
    NoWindow,
    /// Failed to create HTTP request
    RequestCreationFailed,
    /// Network request failed (CORS, offline, etc.)
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    HttpError(u16),
    /// Failed to read response body
    ResponseReadFailed,
    /// Invalid response content (not text)
    InvalidContent,
    /// JSON parsing error
    JsonParseError(String),
    /// Request timed out
    Timeout,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::RequestCreationFailed => write!(f, "Failed to create request"),
            Self::NetworkError(msg) => write!(f, "Network error: {}", msg),
            Self::HttpError(status) => {
                write!(f, "{} (HTTP {})", NETWORK_RESPONSE_ERROR, status)
            }
            Self::ResponseReadFailed => write!(f, "Failed to read response"),
            Self::InvalidContent => write!(f, "Invalid response content"),
            Self::JsonParseError(msg) => write!(f, "JSON parse error: {}", msg),
            Self::Timeout => write!(f, "Request timed out"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Clipboard API errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ClipboardError {
    /// Browser window not available
    NoWindow,
    /// `navigator.clipboard.writeText` not exposed (insecure context, old browser)
    Unsupported,
    /// The write promise rejected (permission denied, document not focused)
    WriteRejected(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::Unsupported => write!(f, "Clipboard API not available"),
            Self::WriteRejected(msg) => write!(f, "Clipboard write rejected: {}", msg),
        }
    }
}

impl std::error::Error for ClipboardError {}

/// Errors raised when an expected page element is not mounted.
#[derive(Debug, Clone, PartialEq)]
pub enum DomError {
    /// No element with the given id is mounted
    MissingElement(&'static str),
}

impl fmt::Display for DomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingElement(id) => write!(f, "Element #{} not found", id),
        }
    }
}

impl std::error::Error for DomError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_carries_fixed_message() {
        let msg = FetchError::HttpError(503).to_string();
        assert!(msg.starts_with("NETWORK RESPONSE ERROR"));
        assert!(msg.contains("503"));
    }

    #[test]
    fn test_clipboard_error_display() {
        assert_eq!(
            ClipboardError::WriteRejected("NotAllowedError".into()).to_string(),
            "Clipboard write rejected: NotAllowedError"
        );
        assert_eq!(
            ClipboardError::Unsupported.to_string(),
            "Clipboard API not available"
        );
    }

    #[test]
    fn test_dom_error_display() {
        assert_eq!(
            DomError::MissingElement("mcserver").to_string(),
            "Element #mcserver not found"
        );
    }
}
