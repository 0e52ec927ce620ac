//! Status badge component.
//!
//! Displays the server's online/offline state and player counts.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::dom_ids;

stylance::import_crate_style!(css, "src/components/status/status.module.css");

/// Status badge bound to [`AppContext::status`].
///
/// | State | Text | Inline style |
/// |-------|------|--------------|
/// | Pending | `Cargando...` | none |
/// | Online | `En línea \| 5/20` | white on `#30d158` |
/// | Offline | `Desconectado` | white on red |
/// | Unavailable | `Estado no disponible` | white on gray |
#[component]
pub fn StatusBadge() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let text = Signal::derive(move || ctx.status.with(|s| s.text()));

    view! {
        <div class=css::badgeRow>
            <span class=css::icon><Icon icon=ic::SERVER /></span>
            <span
                id=dom_ids::STATUS
                class=css::badge
                style=move || ctx.status.with(|s| s.inline_style())
                title=move || ctx.status_title.get()
            >
                {text}
            </span>
        </div>
    }
}
