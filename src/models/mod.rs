//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`ServerStatus`], [`PlayerCount`] - Status API response
//! - [`StatusView`] - What the status badge displays
//! - [`AckFlash`] - Copy acknowledgment flash
//! - [`PanelState`] - Socials panel class configuration

mod ack;
mod panel;
mod status;

pub use ack::AckFlash;
pub use panel::PanelState;
pub use status::{Motd, PlayerCount, ServerStatus, StatusView, VersionInfo};
