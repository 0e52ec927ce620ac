//! Landing page for the CraftCeres Minecraft server.
//!
//! A Leptos client-side app that shows the live server status, copies the
//! server address to the clipboard and toggles a panel of social links.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use app::{App, AppContext};
