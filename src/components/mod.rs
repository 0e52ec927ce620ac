//! UI components built with Leptos.
//!
//! - [`Landing`] - Page layout (main entry point)
//! - [`address`] - Server address with copy button
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`socials`] - Social links panel and its toggle
//! - [`status`] - Live server status badge

pub mod address;
pub mod icons;
mod landing;
pub mod socials;
pub mod status;

pub use landing::Landing;
