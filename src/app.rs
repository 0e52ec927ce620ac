//! Root application module.
//!
//! Contains the main App component and the AppContext definition.

use leptos::prelude::*;

use crate::components::Landing;
use crate::core::report_status;
use crate::models::{AckFlash, PanelState, StatusView};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read by child components
/// with `use_context::<AppContext>()`. Each field backs one of the page's
/// independent behaviors; none of them read another's state.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// What the status badge shows.
    pub status: RwSignal<StatusView>,
    /// Hover title for the status badge.
    pub status_title: RwSignal<Option<String>>,
    /// Copy acknowledgment flash.
    pub copy_ack: RwSignal<AckFlash>,
    /// Socials panel class configuration.
    pub socials: RwSignal<PanelState>,
}

impl AppContext {
    /// Creates a new application context with default state:
    /// status pending, acknowledgment hidden, socials panel hidden.
    pub fn new() -> Self {
        Self {
            status: RwSignal::new(StatusView::default()),
            status_title: RwSignal::new(None),
            copy_ack: RwSignal::new(AckFlash::default()),
            socials: RwSignal::new(PanelState::default()),
        }
    }

    /// Flip the copy acknowledgment.
    pub fn toggle_copy_ack(&self) {
        self.copy_ack.update(|ack| ack.toggle());
    }

    /// Advance the socials panel by one click.
    pub fn toggle_socials(&self) {
        self.socials.update(|state| *state = state.next());
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Starts the one-shot status request
/// - Renders the landing page
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    report_status(ctx);

    view! { <Landing /> }
}
