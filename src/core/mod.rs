//! Page behaviors.
//!
//! This module provides:
//! - [`report_status`] - One-shot server status request
//! - [`copy_server_address`] - Clipboard copy with acknowledgment flash

pub mod clipboard;
pub mod error;
pub mod reporter;

pub use clipboard::copy_server_address;
pub use reporter::report_status;
