//! Social links panel.
//!
//! The panel's class attribute is rendered from [`PanelState`]; the
//! `hidden`/`aparecer` classes are styled in the global stylesheet.
//!
//! [`PanelState`]: crate::models::PanelState

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{SOCIAL_LINKS, dom_ids};

stylance::import_crate_style!(css, "src/components/socials/socials.module.css");

/// Toggle button plus the socials panel it controls.
#[component]
pub fn Socials() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let on_toggle = move |_: leptos::ev::MouseEvent| ctx.toggle_socials();
    let expanded = move || ctx.socials.get().is_visible().to_string();

    view! {
        <div class=css::wrapper>
            <button
                class=css::toggleButton
                on:click=on_toggle
                aria-controls=dom_ids::SOCIALS
                aria-expanded=expanded
            >
                <Icon icon=ic::SHARE />
                " Redes sociales"
            </button>
            <nav id=dom_ids::SOCIALS class=move || ctx.socials.get().class_name()>
                {SOCIAL_LINKS
                    .iter()
                    .map(|link| view! {
                        <a
                            class=css::link
                            href=link.url
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            <Icon icon=ic::social(link.kind) />
                            <span>{link.label}</span>
                        </a>
                    })
                    .collect_view()}
            </nav>
        </div>
    }
}
