//! Utility modules for web and DOM operations.
//!
//! Provides:
//! - [`dom`] - Window/navigator access and element text lookup
//! - [`fetch_text`] - Network fetching with timeout
//! - [`log`] - Prefixed browser console logging

pub mod dom;
pub(crate) mod fetch;
pub mod log;

pub use fetch::{fetch_text, race_with_timeout, RaceResult};
